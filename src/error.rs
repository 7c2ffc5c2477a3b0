//! Error types for ratchet operations.
//!
//! This module defines [`RatchetError`], the error type used throughout the
//! crate, a [`Result`] alias, and [`ExitStatus`], the process exit codes the
//! errors and install outcomes map onto.
//!
//! # Error Handling Strategy
//!
//! - Request validation errors (`NoModuleSpecified`, `TooManyModules`,
//!   `UnsupportedConditional`) each own an exit code
//! - A failed install is an [`InstallOutcome`](crate::installer::InstallOutcome),
//!   not an error
//! - Everything else is unexpected and exits with `1`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ratchet operations.
#[derive(Debug, Error)]
pub enum RatchetError {
    /// No package request was given.
    #[error("No module was specified")]
    NoModuleSpecified,

    /// More than one package was requested.
    #[error("Only one module allowed: {args}")]
    TooManyModules { args: String },

    /// The request uses a comparator or shape that is not supported.
    #[error("Unsupported conditional '{request}': {reason}")]
    UnsupportedConditional { request: String, reason: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A shell command could not be started.
    #[error("Command could not be started: {command}")]
    CommandFailed { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RatchetError {
    /// The process exit status this error terminates the run with.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Self::NoModuleSpecified => ExitStatus::NoModuleSpecified,
            Self::TooManyModules { .. } => ExitStatus::TooManyModules,
            Self::UnsupportedConditional { .. } => ExitStatus::UnsupportedConditional,
            Self::ConfigNotFound { .. }
            | Self::ConfigParseError { .. }
            | Self::CommandFailed { .. }
            | Self::Io(_)
            | Self::Other(_) => ExitStatus::Unexpected,
        }
    }
}

/// Result type alias for ratchet operations.
pub type Result<T> = std::result::Result<T, RatchetError>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Already satisfied, freshly installed or upgraded.
    Success = 0,
    /// Something outside the known taxonomy went wrong.
    Unexpected = 1,
    NoModuleSpecified = 64,
    TooManyModules = 65,
    UnsupportedConditional = 66,
    /// Install was attempted and failed.
    InstallFailed = 67,
}

impl ExitStatus {
    /// Numeric exit code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_modules_displays_args() {
        let err = RatchetError::TooManyModules {
            args: "a,b".into(),
        };
        assert!(err.to_string().contains("a,b"));
    }

    #[test]
    fn unsupported_conditional_displays_request_and_reason() {
        let err = RatchetError::UnsupportedConditional {
            request: "foo>1.0".into(),
            reason: "'>' without '='".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("foo>1.0"));
        assert!(msg.contains("without"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = RatchetError::ConfigParseError {
            path: PathBuf::from("/etc/ratchet/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/ratchet/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn validation_errors_map_to_their_exit_codes() {
        assert_eq!(RatchetError::NoModuleSpecified.exit_status().code(), 64);
        assert_eq!(
            RatchetError::TooManyModules { args: "a b".into() }
                .exit_status()
                .code(),
            65
        );
        assert_eq!(
            RatchetError::UnsupportedConditional {
                request: "x<1".into(),
                reason: "range".into(),
            }
            .exit_status()
            .code(),
            66
        );
    }

    #[test]
    fn other_errors_are_unexpected() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RatchetError = io_err.into();
        assert!(matches!(err, RatchetError::Io(_)));
        assert_eq!(err.exit_status(), ExitStatus::Unexpected);

        let err: RatchetError = anyhow::anyhow!("boom").into();
        assert_eq!(err.exit_status().code(), 1);
    }

    #[test]
    fn exit_status_codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::InstallFailed.code(), 67);
    }
}
