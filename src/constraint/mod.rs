//! Version constraints: request parsing, comparators and version ordering.
//!
//! - [`parser`] turns a request string into a [`Constraint`]
//! - [`operator`] maps `==`, `>=`, `<=` onto structured comparisons
//! - [`version`] parses and orders [`PackageVersion`] values

pub mod operator;
pub mod parser;
pub mod version;

pub use operator::Operator;
pub use parser::{parse, Constraint, ANY_VERSION};
pub use version::{PackageVersion, VersionError};
