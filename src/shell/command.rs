//! Captured command runs through the platform shell.

use crate::error::{RatchetError, Result};
use std::process::{Command, Stdio};

/// Exit code and captured output of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the command exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run `command` through the shell, capturing stdout and stderr.
///
/// Stdin is closed so the tool can never prompt. The call blocks until the
/// child exits; there is no timeout.
///
/// # Errors
///
/// Returns `CommandFailed` if the shell itself cannot be started. A command
/// that runs and exits non-zero is an `Ok` with `success() == false`.
pub fn run_captured(command: &str) -> Result<CommandOutput> {
    let (shell, flag) = shell_program();
    tracing::debug!("Executing: {}", command);

    let output = Command::new(shell)
        .arg(flag)
        .arg(command)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            tracing::debug!("Could not start {}: {}", shell, e);
            RatchetError::CommandFailed {
                command: command.to_string(),
            }
        })?;

    tracing::debug!("`{}` exited with {:?}", command, output.status.code());

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Shell used to run commands and the flag that passes it a command string.
///
/// A plain non-login shell: the package tool is expected on the service's
/// PATH, and login profiles must not add output or prompts.
fn shell_program() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}
