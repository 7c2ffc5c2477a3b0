//! Status logging.
//!
//! Every run ends with exactly one status line naming the module and, where
//! relevant, the requested and installed versions. Components receive the
//! log as an explicit [`StatusLog`] handle constructed once by `main`.
//!
//! - [`ConsoleLog`] writes to stderr, where service journals pick it up
//! - [`MockLog`] captures lines for assertions
//!
//! Internal diagnostics go through `tracing` instead.

pub mod mock;
pub mod term;

pub use mock::MockLog;
pub use term::ConsoleLog;

/// Sink for human-readable status lines.
pub trait StatusLog {
    /// A terminal outcome line. Always shown.
    fn status(&mut self, msg: &str);

    /// Supporting detail (tool output, upgrade notices). Shown when verbose.
    fn detail(&mut self, msg: &str);
}
