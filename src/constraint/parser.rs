//! Request string parsing.
//!
//! Turns a raw request such as `requests==2.31.0`, `numpy` or `flask~=2.0`
//! into a [`Constraint`].

use super::operator::Operator;
use crate::error::{RatchetError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Version used when the request names no comparator.
pub const ANY_VERSION: &str = "0";

/// Package names: alphanumeric at both ends, `._-` in between.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?$").expect("NAME_REGEX must compile")
});

/// Characters that may appear in a requested version.
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9.+!_-]+$").expect("VERSION_REGEX must compile"));

/// A single-bound version constraint on one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// Package name as requested.
    pub name: String,
    /// Normalized comparator.
    pub operator: Operator,
    /// Requested version, `"0"` when none was given.
    pub version: String,
    /// False for a bare package name.
    pub version_requested: bool,
}

impl Constraint {
    /// Constraint accepting any installed version.
    pub fn any(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operator: Operator::Ge,
            version: ANY_VERSION.to_string(),
            version_requested: false,
        }
    }

    /// Install spec passed to the package manager, e.g. `numpy>=0`.
    pub fn install_spec(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, self.operator, self.version)
    }
}

fn unsupported(request: &str, reason: impl Into<String>) -> RatchetError {
    RatchetError::UnsupportedConditional {
        request: request.to_string(),
        reason: reason.into(),
    }
}

/// Every comparator token in `request` as `(byte offset, token)`, in order.
fn find_comparators(request: &str) -> Vec<(usize, &'static str)> {
    let mut found: Vec<(usize, &'static str)> = Operator::TOKENS
        .iter()
        .flat_map(|token| request.match_indices(token).map(|(i, _)| (i, *token)))
        .collect();
    found.sort_by_key(|(i, _)| *i);
    found
}

/// Parse a request into a [`Constraint`].
///
/// # Errors
///
/// Returns `UnsupportedConditional` for bare `>`/`<`, ranges (more than one
/// comparator), comma-combined requests, and names or versions containing
/// characters a package spec cannot have. Returns `NoModuleSpecified` when
/// the request has no package name.
///
/// # Example
///
/// ```
/// use ratchet::constraint::{parse, Operator};
///
/// let c = parse("flask~=2.0").unwrap();
/// assert_eq!(c.name, "flask");
/// assert_eq!(c.operator, Operator::Ge);
/// assert_eq!(c.version, "2.0");
/// ```
pub fn parse(request: &str) -> Result<Constraint> {
    let trimmed = request.trim();
    if trimmed.is_empty() {
        return Err(RatchetError::NoModuleSpecified);
    }
    if trimmed.contains(',') {
        return Err(unsupported(request, "combined requests are not supported"));
    }

    let comparators = find_comparators(trimmed);
    let constraint = match comparators.as_slice() {
        [] => {
            if trimmed.contains(['>', '<']) {
                return Err(unsupported(request, "only ==, >=, <= and ~= are supported"));
            }
            Constraint::any(trimmed)
        }
        [(index, token)] => {
            let name = trimmed[..*index].trim();
            let version = trimmed[index + token.len()..].trim();
            if name.is_empty() {
                return Err(RatchetError::NoModuleSpecified);
            }
            if version.is_empty() {
                return Err(unsupported(request, "missing version after comparator"));
            }
            let operator = token
                .parse::<Operator>()
                .map_err(|reason| unsupported(request, reason))?;
            Constraint {
                name: name.to_string(),
                operator,
                version: version.to_string(),
                version_requested: true,
            }
        }
        _ => return Err(unsupported(request, "version ranges are not supported")),
    };

    if !NAME_REGEX.is_match(&constraint.name) {
        return Err(unsupported(request, "malformed package name"));
    }
    if !VERSION_REGEX.is_match(&constraint.version) {
        return Err(unsupported(request, "malformed version"));
    }

    Ok(constraint)
}
