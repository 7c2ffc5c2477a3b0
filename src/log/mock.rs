//! Mock status log for testing.
//!
//! # Example
//!
//! ```
//! use ratchet::log::{MockLog, StatusLog};
//!
//! let mut log = MockLog::new();
//! log.detail("Attempting to install newer version 2.0");
//! log.status("Module foo installed.");
//!
//! assert_eq!(log.statuses(), &["Module foo installed.".to_string()]);
//! assert_eq!(log.details().len(), 1);
//! ```

use super::StatusLog;

/// Captures status and detail lines.
#[derive(Debug, Default)]
pub struct MockLog {
    statuses: Vec<String>,
    details: Vec<String>,
}

impl MockLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured status lines.
    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    /// Captured detail lines.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Whether any status line contains `text`.
    pub fn has_status(&self, text: &str) -> bool {
        self.statuses.iter().any(|s| s.contains(text))
    }
}

impl StatusLog for MockLog {
    fn status(&mut self, msg: &str) {
        self.statuses.push(msg.to_string());
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }
}
