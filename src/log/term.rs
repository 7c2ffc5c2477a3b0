//! Terminal status log.

use console::Term;

use super::StatusLog;

/// Writes status lines to stderr.
pub struct ConsoleLog {
    term: Term,
    verbose: bool,
}

impl ConsoleLog {
    /// Create a console log; `verbose` enables detail lines.
    pub fn new(verbose: bool) -> Self {
        Self {
            term: Term::stderr(),
            verbose,
        }
    }

    /// Whether detail lines are shown.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn write(&self, msg: &str) {
        if let Err(e) = self.term.write_line(msg) {
            tracing::warn!("Could not write status line: {}", e);
        }
    }
}

impl StatusLog for ConsoleLog {
    fn status(&mut self, msg: &str) {
        self.write(msg);
    }

    fn detail(&mut self, msg: &str) {
        if self.verbose {
            for line in msg.lines() {
                self.write(&format!("  {}", line));
            }
        }
    }
}
