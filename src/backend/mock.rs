//! Mock backend implementation for testing.
//!
//! `MockBackend` implements [`PackageBackend`] over an in-memory registry
//! and records every install spec it is asked for.
//!
//! # Example
//!
//! ```
//! use ratchet::backend::{InstallState, MockBackend, PackageBackend};
//!
//! let backend = MockBackend::new().with_installed("requests", "2.0.0");
//! assert_eq!(
//!     backend.query("requests"),
//!     InstallState::Installed("2.0.0".to_string())
//! );
//!
//! let report = backend.install("flask>=2.0");
//! assert!(report.success);
//! assert_eq!(backend.installs(), vec!["flask>=2.0".to_string()]);
//! assert_eq!(backend.query("flask"), InstallState::Installed("2.0".to_string()));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use super::{InstallReport, InstallState, PackageBackend};

/// In-memory package registry.
///
/// A successful install records the package at the version configured with
/// [`set_install_version`](MockBackend::set_install_version), falling back
/// to the version in the spec (or `1.0.0` for `>=0`).
#[derive(Debug, Default)]
pub struct MockBackend {
    packages: RefCell<HashMap<String, InstallState>>,
    install_versions: HashMap<String, String>,
    fail_installs: bool,
    vanish_after_install: bool,
    installs: RefCell<Vec<String>>,
    queries: RefCell<Vec<String>>,
}

impl MockBackend {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` as installed at `version`.
    pub fn with_installed(self, name: &str, version: &str) -> Self {
        self.packages.borrow_mut().insert(
            name.to_string(),
            InstallState::Installed(version.to_string()),
        );
        self
    }

    /// Register `name` as a built-in.
    pub fn with_builtin(self, name: &str) -> Self {
        self.packages
            .borrow_mut()
            .insert(name.to_string(), InstallState::BuiltIn);
        self
    }

    /// Version `name` ends up at after a successful install.
    pub fn set_install_version(&mut self, name: &str, version: &str) {
        self.install_versions
            .insert(name.to_string(), version.to_string());
    }

    /// Make every install report failure.
    pub fn set_fail_installs(&mut self, fail: bool) {
        self.fail_installs = fail;
    }

    /// Report install success without registering the package.
    pub fn set_vanish_after_install(&mut self, vanish: bool) {
        self.vanish_after_install = vanish;
    }

    /// Install specs requested so far.
    pub fn installs(&self) -> Vec<String> {
        self.installs.borrow().clone()
    }

    /// Names queried so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }

    fn split_spec(spec: &str) -> (&str, &str) {
        match spec.find(['=', '>', '<', '~']) {
            Some(i) => (
                &spec[..i],
                spec[i..].trim_start_matches(['=', '>', '<', '~']),
            ),
            None => (spec, ""),
        }
    }
}

impl PackageBackend for MockBackend {
    fn query(&self, name: &str) -> InstallState {
        self.queries.borrow_mut().push(name.to_string());
        self.packages
            .borrow()
            .get(name)
            .cloned()
            .unwrap_or(InstallState::Absent)
    }

    fn install(&self, spec: &str) -> InstallReport {
        self.installs.borrow_mut().push(spec.to_string());

        if self.fail_installs {
            return InstallReport::failed(format!("[Error] could not install {}", spec));
        }

        let (name, requested) = Self::split_spec(spec);
        if !self.vanish_after_install {
            let version = match self.install_versions.get(name) {
                Some(version) => version.clone(),
                None if requested.is_empty() || requested == "0" => "1.0.0".to_string(),
                None => requested.to_string(),
            };
            self.packages
                .borrow_mut()
                .insert(name.to_string(), InstallState::Installed(version));
        }

        InstallReport::succeeded(format!("Successfully installed {}", name))
    }
}
