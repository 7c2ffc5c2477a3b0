//! Package manager backends.
//!
//! The decision engine only needs two things from a package manager: what is
//! installed under a name, and "install this spec". [`PackageBackend`] is
//! that seam.
//!
//! - [`PipBackend`] drives a pip-compatible tool through the shell
//! - [`MockBackend`] keeps an in-memory registry for tests

pub mod mock;
pub mod pip;

pub use mock::MockBackend;
pub use pip::{parse_show_version, PipBackend};

/// What the environment has under a package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallState {
    /// Nothing usable is installed.
    Absent,

    /// Provided by the environment itself, with no version to compare.
    /// Built-ins are authoritative and never upgraded through this tool.
    BuiltIn,

    /// Installed with a discoverable version string.
    Installed(String),
}

impl InstallState {
    /// Whether anything usable is present.
    pub fn is_present(&self) -> bool {
        !matches!(self, InstallState::Absent)
    }
}

/// Result of one install attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Whether the tool reported success.
    pub success: bool,
    /// Captured output worth logging.
    pub detail: String,
}

impl InstallReport {
    /// A successful install.
    pub fn succeeded(detail: impl Into<String>) -> Self {
        Self {
            success: true,
            detail: detail.into(),
        }
    }

    /// A failed install.
    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            detail: detail.into(),
        }
    }
}

/// An external package manager.
///
/// Implementations never fail outright: a query that cannot be answered
/// is [`InstallState::Absent`], an install that cannot be run is a failed
/// [`InstallReport`].
pub trait PackageBackend {
    /// Look up the current install state of `name`.
    fn query(&self, name: &str) -> InstallState;

    /// Install `spec` (e.g. `numpy>=1.26`), blocking until the tool exits.
    fn install(&self, spec: &str) -> InstallReport;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_not_present() {
        assert!(!InstallState::Absent.is_present());
        assert!(InstallState::BuiltIn.is_present());
        assert!(InstallState::Installed("1.0".into()).is_present());
    }

    #[test]
    fn report_constructors() {
        assert!(InstallReport::succeeded("ok").success);
        let failed = InstallReport::failed("exit 1");
        assert!(!failed.success);
        assert_eq!(failed.detail, "exit 1");
    }
}
