//! Ratchet - install or upgrade a single package, never downgrade.
//!
//! Many consumers of a shared environment ask for different minimum
//! versions of the same package. Ratchet installs a request only when the
//! installed version does not already meet it, so the environment converges
//! on the highest version anyone asked for.
//!
//! # Modules
//!
//! - [`backend`] - Package manager seam and the pip implementation
//! - [`cli`] - Command-line interface, request validation and exit statuses
//! - [`config`] - Configuration loading
//! - [`constraint`] - Request parsing and version comparison
//! - [`error`] - Error types, result alias and exit codes
//! - [`installer`] - Install decision engine
//! - [`log`] - Status line logging
//! - [`shell`] - Shell command execution
//!
//! # Example
//!
//! ```
//! use ratchet::backend::MockBackend;
//! use ratchet::cli::run;
//! use ratchet::log::MockLog;
//!
//! let backend = MockBackend::new().with_installed("foo", "1.0.0");
//! let mut log = MockLog::new();
//!
//! let status = run(&["foo>=2.0.0".to_string()], &backend, &mut log);
//! assert_eq!(status.code(), 0);
//! assert_eq!(backend.installs(), vec!["foo>=2.0.0".to_string()]);
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod constraint;
pub mod error;
pub mod installer;
pub mod log;
pub mod shell;

pub use error::{ExitStatus, RatchetError, Result};
