//! CLI argument definitions.
//!
//! The tool takes a single positional package request. Clap accepts any
//! number of positionals so that a missing or extra request maps to the
//! tool's own exit codes instead of clap's usage error.

use clap::Parser;

use crate::error::{RatchetError, Result};

/// Ratchet - install or upgrade one package, never downgrade.
#[derive(Debug, Parser)]
#[command(name = "ratchet")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  ratchet requests==2.31.0\n  ratchet numpy\n  ratchet flask~=2.0")]
pub struct Cli {
    /// Package request: NAME, or NAME followed by ==, >=, <= or ~= and a version
    #[arg(value_name = "REQUEST")]
    pub requests: Vec<String>,
}

/// Check that exactly one package was requested and return it.
///
/// # Errors
///
/// Returns `NoModuleSpecified` for no (or a blank) request and
/// `TooManyModules` for several arguments or a comma-separated list.
pub fn validate_request(requests: &[String]) -> Result<&str> {
    match requests {
        [] => Err(RatchetError::NoModuleSpecified),
        [request] if request.trim().is_empty() => Err(RatchetError::NoModuleSpecified),
        [request] if request.contains(',') => Err(RatchetError::TooManyModules {
            args: request.clone(),
        }),
        [request] => Ok(request.as_str()),
        _ => Err(RatchetError::TooManyModules {
            args: requests.join(" "),
        }),
    }
}
