//! Version comparators.

use super::version::{PackageVersion, VersionError};
use std::fmt;
use std::str::FromStr;

/// A normalized version comparator.
///
/// Requests may also use `~=` (compatible release); it parses to
/// [`Operator::Ge`] and is never produced on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `==`
    Eq,
    /// `>=`
    Ge,
    /// `<=`
    Le,
}

impl Operator {
    /// Comparator tokens accepted in a request, in scan order.
    pub const TOKENS: [&'static str; 4] = ["==", ">=", "<=", "~="];

    /// The comparator as written in an install spec.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ge => ">=",
            Self::Le => "<=",
        }
    }

    /// Whether `installed <op> requested` holds.
    pub fn evaluate(&self, installed: &PackageVersion, requested: &PackageVersion) -> bool {
        match self {
            Self::Eq => installed == requested,
            Self::Ge => installed >= requested,
            Self::Le => installed <= requested,
        }
    }

    /// Parse both versions and evaluate `installed <op> requested`.
    pub fn satisfied_by(&self, installed: &str, requested: &str) -> Result<bool, VersionError> {
        let installed: PackageVersion = installed.parse()?;
        let requested: PackageVersion = requested.parse()?;
        Ok(self.evaluate(&installed, &requested))
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(Self::Eq),
            ">=" | "~=" => Ok(Self::Ge),
            "<=" => Ok(Self::Le),
            _ => Err(format!("unsupported comparator: {}", s)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
