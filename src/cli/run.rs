//! The install pipeline behind the command line.
//!
//! validate → parse → decide → one status line → exit status.

use crate::backend::PackageBackend;
use crate::constraint::parse;
use crate::error::{ExitStatus, RatchetError, Result};
use crate::installer::{InstallOutcome, Installer};
use crate::log::StatusLog;

use super::args::validate_request;

/// Run one request and return the process exit status.
///
/// Writes exactly one status line to `log`.
pub fn run(
    requests: &[String],
    backend: &dyn PackageBackend,
    log: &mut dyn StatusLog,
) -> ExitStatus {
    match install_request(requests, backend, log) {
        Ok((line, outcome)) => {
            log.status(&line);
            outcome.exit_status()
        }
        Err(e) => {
            log.status(&failure_line(&e, requests));
            e.exit_status()
        }
    }
}

fn install_request(
    requests: &[String],
    backend: &dyn PackageBackend,
    log: &mut dyn StatusLog,
) -> Result<(String, InstallOutcome)> {
    let request = validate_request(requests)?;
    let constraint = parse(request)?;
    tracing::debug!("Parsed request {:?} as {}", request, constraint);

    let outcome = Installer::new(backend, log).decide(&constraint);
    Ok((outcome.describe(&constraint), outcome))
}

/// Status line for a run that ended in an error.
pub fn failure_line(err: &RatchetError, requests: &[String]) -> String {
    match err {
        RatchetError::NoModuleSpecified => {
            format!("No module was specified: {:?}", requests)
        }
        RatchetError::TooManyModules { args } => format!("Only one module allowed: {}", args),
        RatchetError::UnsupportedConditional { request, reason } => {
            format!("Unsupported Conditional. {} ({})", request, reason)
        }
        other => format!("An unexpected error occurred: {}", other),
    }
}
