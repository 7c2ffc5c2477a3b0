//! pip-compatible backend.
//!
//! State queries use `<tool> show "<name>"` and read the `Version:` line,
//! so checking a version never imports (and runs) an installed package.
//! Names the tool does not list are built-in when they are on the configured
//! list or when `<import_probe> -c "import <name>"` succeeds.
//! Installs run `<tool> install <install_args> "<spec>"`.

use super::{InstallReport, InstallState, PackageBackend};
use crate::config::RatchetConfig;
use crate::shell::run_captured;
use regex::Regex;
use std::sync::LazyLock;

/// `Version: 1.26.4` line of `pip show` output.
static SHOW_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^Version:[ \t]*(\S+)[ \t]*\r?$").expect("SHOW_VERSION_REGEX must compile")
});

/// Extract the installed version from `pip show` output.
pub fn parse_show_version(output: &str) -> Option<String> {
    SHOW_VERSION_REGEX
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Backend driving a pip-compatible command line tool.
#[derive(Debug, Clone)]
pub struct PipBackend {
    config: RatchetConfig,
}

impl PipBackend {
    /// Create a backend from configuration.
    pub fn new(config: RatchetConfig) -> Self {
        Self { config }
    }

    /// The configuration this backend runs with.
    pub fn config(&self) -> &RatchetConfig {
        &self.config
    }

    /// Command line used to query `name`.
    pub fn show_command(&self, name: &str) -> String {
        format!("{} show \"{}\"", self.config.tool, name)
    }

    /// Command line used to install `spec`.
    pub fn install_command(&self, spec: &str) -> String {
        let mut parts = vec![self.config.tool.clone(), "install".to_string()];
        parts.extend(self.config.install_args.iter().cloned());
        parts.push(format!("\"{}\"", spec));
        parts.join(" ")
    }

    /// Command line used to check whether `name` imports, if probing is on.
    pub fn probe_command(&self, name: &str) -> Option<String> {
        self.config.import_probe.as_ref().map(|interpreter| {
            format!(
                "{} -c \"import {}\"",
                interpreter,
                name.replace('-', "_")
            )
        })
    }

    /// First configured error marker found in `stderr`.
    pub fn error_marker_in<'a>(&'a self, stderr: &str) -> Option<&'a str> {
        self.config
            .error_markers
            .iter()
            .map(String::as_str)
            .find(|marker| !marker.is_empty() && stderr.contains(marker))
    }

    fn probe_import(&self, name: &str) -> bool {
        let Some(command) = self.probe_command(name) else {
            return false;
        };
        match run_captured(&command) {
            Ok(output) => output.success(),
            Err(e) => {
                tracing::debug!("Import probe for '{}' could not run: {}", name, e);
                false
            }
        }
    }
}

impl PackageBackend for PipBackend {
    fn query(&self, name: &str) -> InstallState {
        let command = self.show_command(name);
        match run_captured(&command) {
            Ok(output) if output.success() => match parse_show_version(&output.stdout) {
                Some(version) => return InstallState::Installed(version),
                None => tracing::debug!("No version line in output of `{}`", command),
            },
            Ok(output) => {
                tracing::debug!("`{}` exited with {:?}", command, output.exit_code);
            }
            Err(e) => tracing::warn!("Could not query '{}': {}", name, e),
        }

        // the tool wins over the list: `typing` is stdlib and on PyPI
        if self.config.is_builtin(name) {
            tracing::debug!("'{}' is a configured built-in", name);
            return InstallState::BuiltIn;
        }

        if self.probe_import(name) {
            tracing::debug!("'{}' imports without being listed, treating as built-in", name);
            return InstallState::BuiltIn;
        }

        InstallState::Absent
    }

    fn install(&self, spec: &str) -> InstallReport {
        let command = self.install_command(spec);
        let result = match run_captured(&command) {
            Ok(result) => result,
            Err(e) => return InstallReport::failed(e.to_string()),
        };

        if !result.success() {
            return InstallReport::failed(format!(
                "`{}` exited with {:?}: {}",
                command,
                result.exit_code,
                result.stderr.trim()
            ));
        }

        if let Some(marker) = self.error_marker_in(&result.stderr) {
            return InstallReport::failed(format!(
                "`{}` reported '{}': {}",
                command,
                marker,
                result.stderr.trim()
            ));
        }

        InstallReport::succeeded(result.stdout.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_with(config: RatchetConfig) -> PipBackend {
        PipBackend::new(config)
    }

    #[test]
    fn parse_show_version_reads_version_line() {
        let output = "Name: requests\nVersion: 2.31.0\nSummary: Python HTTP for Humans.\n";
        assert_eq!(parse_show_version(output), Some("2.31.0".to_string()));
    }

    #[test]
    fn parse_show_version_handles_crlf() {
        let output = "Name: six\r\nVersion: 1.16.0\r\nLocation: C:\\Python\r\n";
        assert_eq!(parse_show_version(output), Some("1.16.0".to_string()));
    }

    #[test]
    fn parse_show_version_ignores_other_lines() {
        assert_eq!(parse_show_version("Name: x\nRequires: Version: 3\n"), None);
        assert_eq!(parse_show_version(""), None);
    }

    #[test]
    fn install_command_quotes_spec_and_skips_cache() {
        let backend = backend_with(RatchetConfig::default());
        assert_eq!(
            backend.install_command("numpy>=0"),
            "pip3 install --no-cache-dir \"numpy>=0\""
        );
    }

    #[test]
    fn install_command_uses_configured_tool_and_args() {
        let backend = backend_with(RatchetConfig {
            tool: "python3 -m pip".to_string(),
            install_args: vec!["--no-cache-dir".to_string(), "--user".to_string()],
            ..Default::default()
        });
        assert_eq!(
            backend.install_command("flask>=2.0"),
            "python3 -m pip install --no-cache-dir --user \"flask>=2.0\""
        );
    }

    #[test]
    fn show_command_quotes_name() {
        let backend = backend_with(RatchetConfig::default());
        assert_eq!(backend.show_command("requests"), "pip3 show \"requests\"");
    }

    #[test]
    fn probe_command_uses_interpreter_unless_disabled() {
        let backend = backend_with(RatchetConfig::default());
        assert_eq!(
            backend.probe_command("typing-extensions").as_deref(),
            Some("python3 -c \"import typing_extensions\"")
        );

        let backend = backend_with(RatchetConfig {
            import_probe: None,
            ..Default::default()
        });
        assert!(backend.probe_command("gi").is_none());
    }

    #[test]
    fn error_markers_are_configurable() {
        let backend = backend_with(RatchetConfig::default());
        assert_eq!(backend.error_marker_in("[Error] no space left"), Some("[Error]"));
        assert_eq!(backend.error_marker_in("WARNING: deprecated"), None);

        let backend = backend_with(RatchetConfig {
            error_markers: vec!["ERROR:".to_string()],
            ..Default::default()
        });
        assert_eq!(backend.error_marker_in("[Error] x"), None);
        assert_eq!(backend.error_marker_in("ERROR: x"), Some("ERROR:"));
    }

    #[test]
    fn configured_builtin_when_tool_is_missing() {
        let backend = backend_with(RatchetConfig {
            tool: "/nonexistent/pip".to_string(),
            import_probe: None,
            ..Default::default()
        });
        assert_eq!(backend.query("json"), InstallState::BuiltIn);
    }

    #[test]
    fn missing_tool_means_absent_and_failed_install() {
        let backend = backend_with(RatchetConfig {
            tool: "/nonexistent/pip".to_string(),
            import_probe: None,
            ..Default::default()
        });
        assert_eq!(backend.query("requests"), InstallState::Absent);
        assert!(!backend.install("requests>=0").success);
    }

    #[cfg(unix)]
    mod with_fake_tool {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        fn fake_tool(temp: &TempDir, body: &str) -> String {
            let path = temp.path().join("fake-pip");
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path.to_string_lossy().to_string()
        }

        fn backend_for(tool: String) -> PipBackend {
            PipBackend::new(RatchetConfig {
                tool,
                import_probe: None,
                ..Default::default()
            })
        }

        /// Interpreter that imports only the modules named in `importable`.
        fn fake_interpreter(temp: &TempDir, importable: &[&str]) -> String {
            let path = temp.path().join("fake-python");
            let cases = importable
                .iter()
                .map(|m| format!("  \"import {}\") exit 0 ;;\n", m))
                .collect::<String>();
            let body = format!("#!/bin/sh\ncase \"$2\" in\n{}esac\nexit 1\n", cases);
            fs::write(&path, body).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path.to_string_lossy().to_string()
        }

        #[test]
        fn query_reads_installed_version() {
            let temp = TempDir::new().unwrap();
            let tool = fake_tool(&temp, "echo \"Name: $2\"; echo 'Version: 2.31.0'");
            assert_eq!(
                backend_for(tool).query("requests"),
                InstallState::Installed("2.31.0".to_string())
            );
        }

        #[test]
        fn query_not_found_is_absent() {
            let temp = TempDir::new().unwrap();
            let tool = fake_tool(&temp, "echo 'WARNING: Package(s) not found' >&2; exit 1");
            assert_eq!(backend_for(tool).query("requests"), InstallState::Absent);
        }

        #[test]
        fn import_probe_detects_unlisted_builtin() {
            let temp = TempDir::new().unwrap();
            let tool = fake_tool(&temp, "exit 1");
            let backend = PipBackend::new(RatchetConfig {
                tool,
                builtins: Vec::new(),
                import_probe: Some("true".to_string()),
                ..Default::default()
            });
            assert_eq!(backend.query("gi"), InstallState::BuiltIn);
        }

        #[test]
        fn listed_distribution_wins_over_builtin_list() {
            let temp = TempDir::new().unwrap();
            let tool = fake_tool(&temp, "echo \"Name: $2\"; echo 'Version: 3.7.4.3'");
            let backend = backend_for(tool);
            assert!(backend.config().is_builtin("typing"));
            assert_eq!(
                backend.query("typing"),
                InstallState::Installed("3.7.4.3".to_string())
            );
        }

        #[test]
        fn module_off_the_list_that_imports_is_builtin() {
            let temp = TempDir::new().unwrap();
            let tool = fake_tool(&temp, "exit 1");
            let config = RatchetConfig {
                tool,
                import_probe: Some(fake_interpreter(&temp, &["pickle"])),
                ..Default::default()
            };
            assert!(!config.is_builtin("pickle"));
            let backend = PipBackend::new(config);

            assert_eq!(backend.query("pickle"), InstallState::BuiltIn);
            assert_eq!(backend.query("numpy"), InstallState::Absent);
        }

        #[test]
        fn importable_unlisted_module_is_already_satisfied() {
            use crate::constraint::parse;
            use crate::installer::{InstallOutcome, Installer};
            use crate::log::MockLog;

            let temp = TempDir::new().unwrap();
            let log_path = temp.path().join("installs");
            let tool = fake_tool(
                &temp,
                &format!(
                    "[ \"$1\" = install ] && echo \"$@\" >> '{}'; exit 1",
                    log_path.display()
                ),
            );
            let backend = PipBackend::new(RatchetConfig {
                tool,
                import_probe: Some(fake_interpreter(&temp, &["gi"])),
                ..Default::default()
            });
            let mut log = MockLog::new();

            let outcome = Installer::new(&backend, &mut log).decide(&parse("gi").unwrap());

            assert_eq!(outcome, InstallOutcome::AlreadySatisfied(String::new()));
            assert!(!log_path.exists());
        }

        #[test]
        fn install_passes_spec_as_one_argument() {
            let temp = TempDir::new().unwrap();
            let log = temp.path().join("args");
            let tool = fake_tool(
                &temp,
                &format!("printf '%s|' \"$@\" > '{}'", log.display()),
            );
            let report = backend_for(tool).install("numpy>=0");
            assert!(report.success);
            assert_eq!(
                fs::read_to_string(&log).unwrap(),
                "install|--no-cache-dir|numpy>=0|"
            );
        }

        #[test]
        fn install_nonzero_exit_fails() {
            let temp = TempDir::new().unwrap();
            let tool = fake_tool(&temp, "echo 'no matching distribution' >&2; exit 1");
            let report = backend_for(tool).install("nope==9.9");
            assert!(!report.success);
            assert!(report.detail.contains("no matching distribution"));
        }

        #[test]
        fn install_error_marker_fails_despite_zero_exit() {
            let temp = TempDir::new().unwrap();
            let tool = fake_tool(&temp, "echo '[Error] disk full' >&2; exit 0");
            let report = backend_for(tool).install("numpy>=0");
            assert!(!report.success);
            assert!(report.detail.contains("[Error]"));
        }

        #[test]
        fn install_warnings_do_not_fail() {
            let temp = TempDir::new().unwrap();
            let tool = fake_tool(&temp, "echo 'WARNING: pip is old' >&2; echo done");
            let report = backend_for(tool).install("numpy>=0");
            assert!(report.success);
            assert_eq!(report.detail, "done");
        }
    }
}
