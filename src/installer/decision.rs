//! Install decision engine.
//!
//! Decides whether a constraint is already met, and if not installs it,
//! following one rule: the environment only ever moves up. A newer
//! installed version is never replaced by an older request.

use crate::backend::{InstallState, PackageBackend};
use crate::constraint::{Constraint, PackageVersion};
use crate::log::StatusLog;

use super::outcome::InstallOutcome;

/// Runs the skip/install/upgrade decision for one constraint.
pub struct Installer<'a> {
    backend: &'a dyn PackageBackend,
    log: &'a mut dyn StatusLog,
}

/// What to do about a package that is already present.
#[derive(Debug, PartialEq)]
enum Verdict {
    Satisfied,
    NewerInstalled,
    Install,
}

impl<'a> Installer<'a> {
    /// Create an installer over `backend`, reporting details to `log`.
    pub fn new(backend: &'a dyn PackageBackend, log: &'a mut dyn StatusLog) -> Self {
        Self { backend, log }
    }

    /// Decide and, when needed, install.
    ///
    /// Makes at most one install call. Install failures are not retried.
    pub fn decide(&mut self, constraint: &Constraint) -> InstallOutcome {
        match self.backend.query(&constraint.name) {
            InstallState::BuiltIn => {
                tracing::debug!("'{}' is a built-in, nothing to do", constraint.name);
                return InstallOutcome::AlreadySatisfied(String::new());
            }
            InstallState::Installed(installed) => match self.judge(constraint, &installed) {
                Verdict::Satisfied => return InstallOutcome::AlreadySatisfied(installed),
                Verdict::NewerInstalled => {
                    self.log.detail(&format!(
                        "Module {} {} is newer than requested {}, not downgrading",
                        constraint.name, installed, constraint.version
                    ));
                    return InstallOutcome::AlreadySatisfied(installed);
                }
                Verdict::Install => {
                    self.log.detail(&format!(
                        "Attempting to install newer version {}",
                        constraint.version
                    ));
                }
            },
            InstallState::Absent => {
                tracing::debug!("'{}' is not installed", constraint.name);
            }
        }

        self.install(constraint)
    }

    fn judge(&mut self, constraint: &Constraint, installed: &str) -> Verdict {
        let parsed = installed
            .parse::<PackageVersion>()
            .and_then(|i| constraint.version.parse::<PackageVersion>().map(|r| (i, r)));

        match parsed {
            Ok((installed, requested)) => {
                if constraint.operator.evaluate(&installed, &requested) {
                    Verdict::Satisfied
                } else if installed > requested {
                    Verdict::NewerInstalled
                } else {
                    Verdict::Install
                }
            }
            Err(e) => {
                // the package manager knows its own version syntax
                self.log.detail(&format!(
                    "Cannot compare installed {} with requested {}: {}",
                    installed, constraint.version, e
                ));
                Verdict::Install
            }
        }
    }

    fn install(&mut self, constraint: &Constraint) -> InstallOutcome {
        let spec = constraint.install_spec();
        tracing::info!("Installing {}", spec);

        let report = self.backend.install(&spec);
        if !report.success {
            if !report.detail.is_empty() {
                self.log.detail(&report.detail);
            }
            return InstallOutcome::InstallFailed(constraint.version.clone());
        }

        let installed = match self.backend.query(&constraint.name) {
            InstallState::Absent => {
                self.log.detail(&format!(
                    "{} reported success but {} is still not installed",
                    spec, constraint.name
                ));
                return InstallOutcome::InstallFailed(constraint.version.clone());
            }
            InstallState::BuiltIn => String::new(),
            InstallState::Installed(version) => version,
        };

        if constraint.version_requested {
            InstallOutcome::InstalledAtRequestedOrHigher(installed)
        } else {
            InstallOutcome::InstalledNoVersionRequested(installed)
        }
    }
}
