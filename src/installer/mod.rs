//! Install decision engine and its outcomes.
//!
//! # Example
//!
//! ```
//! use ratchet::backend::MockBackend;
//! use ratchet::constraint::parse;
//! use ratchet::installer::{InstallOutcome, Installer};
//! use ratchet::log::MockLog;
//!
//! let backend = MockBackend::new().with_installed("requests", "2.31.0");
//! let mut log = MockLog::new();
//!
//! let outcome = Installer::new(&backend, &mut log).decide(&parse("requests>=2.0").unwrap());
//! assert_eq!(outcome, InstallOutcome::AlreadySatisfied("2.31.0".to_string()));
//! assert!(backend.installs().is_empty());
//! ```

pub mod decision;
pub mod outcome;

pub use decision::Installer;
pub use outcome::InstallOutcome;
