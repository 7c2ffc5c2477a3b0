//! Install outcomes.

use crate::constraint::Constraint;
use crate::error::ExitStatus;

/// How a run ended.
///
/// Produced once per run by [`Installer::decide`](super::Installer::decide);
/// each variant maps to one exit status and one status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Nothing to do. Carries the installed version, empty for built-ins.
    AlreadySatisfied(String),

    /// A bare name was installed. Carries the installed version.
    InstalledNoVersionRequested(String),

    /// A versioned request was installed or upgraded. Carries the
    /// installed version.
    InstalledAtRequestedOrHigher(String),

    /// Install was attempted and failed. Carries the requested version.
    InstallFailed(String),
}

impl InstallOutcome {
    /// Exit status for this outcome.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Self::InstallFailed(_) => ExitStatus::InstallFailed,
            _ => ExitStatus::Success,
        }
    }

    /// Whether the run succeeded.
    pub fn is_success(&self) -> bool {
        self.exit_status() == ExitStatus::Success
    }

    /// Installed version, when the outcome has one.
    pub fn installed_version(&self) -> Option<&str> {
        match self {
            Self::AlreadySatisfied(v)
            | Self::InstalledNoVersionRequested(v)
            | Self::InstalledAtRequestedOrHigher(v) => Some(v),
            Self::InstallFailed(_) => None,
        }
    }

    /// The status line reported for this outcome.
    pub fn describe(&self, constraint: &Constraint) -> String {
        let name = &constraint.name;
        match self {
            Self::AlreadySatisfied(installed) => {
                format!("Module {}{} is already installed", name, padded(installed))
            }
            Self::InstalledNoVersionRequested(installed) => format!(
                "Module {}{} was successfully installed.",
                name,
                padded(installed)
            ),
            Self::InstalledAtRequestedOrHigher(installed) => format!(
                "Module {} installed. Requested: {}{} Installed:{}",
                name,
                constraint.operator,
                constraint.version,
                padded(installed)
            ),
            Self::InstallFailed(requested) => format!(
                "Module {}{}{} could not be installed. Check the module name and version number (if provided).",
                name, constraint.operator, requested
            ),
        }
    }
}

/// `" 1.2.3"`, or nothing for an empty version.
fn padded(version: &str) -> String {
    if version.is_empty() {
        String::new()
    } else {
        format!(" {}", version)
    }
}
