//! Command-line interface for ratchet.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions and request validation
//! - [`run`] - The validate/parse/decide pipeline and exit status mapping

pub mod args;
pub mod run;

pub use args::{validate_request, Cli};
pub use run::{failure_line, run};
