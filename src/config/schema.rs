//! Configuration schema definitions.
//!
//! Maps to the YAML configuration file format:
//!
//! ```yaml
//! tool: python3 -m pip
//! install_args: [--no-cache-dir, --break-system-packages]
//! error_markers: ["[Error]", "ERROR:"]
//! builtins: [sqlite3, tkinter]
//! import_probe: python3
//! verbose: false
//! ```

use serde::{Deserialize, Serialize};

/// Python standard library modules that the package tool never lists.
///
/// Checked before the import probe so common names skip an interpreter start.
const DEFAULT_BUILTINS: &[&str] = &[
    "abc",
    "argparse",
    "asyncio",
    "base64",
    "collections",
    "csv",
    "datetime",
    "functools",
    "hashlib",
    "http",
    "io",
    "itertools",
    "json",
    "logging",
    "math",
    "os",
    "pathlib",
    "random",
    "re",
    "shutil",
    "socket",
    "sqlite3",
    "ssl",
    "string",
    "subprocess",
    "sys",
    "threading",
    "time",
    "typing",
    "unittest",
    "urllib",
    "uuid",
];

/// Interpreter that decides whether an unlisted name is built in.
pub const DEFAULT_IMPORT_PROBE: &str = "python3";

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatchetConfig {
    /// Package tool command line prefix (e.g. `pip3`, `python3 -m pip`).
    pub tool: String,

    /// Arguments placed between `install` and the package spec.
    pub install_args: Vec<String>,

    /// Substrings of the tool's stderr that mark a failed install even
    /// when it exits zero.
    pub error_markers: Vec<String>,

    /// Modules treated as built into the environment.
    pub builtins: Vec<String>,

    /// Interpreter used to detect built-ins the tool does not list.
    /// `null` disables the probe.
    pub import_probe: Option<String>,

    /// Print detail lines in addition to the final status line.
    pub verbose: bool,
}

impl Default for RatchetConfig {
    fn default() -> Self {
        Self {
            tool: "pip3".to_string(),
            install_args: vec!["--no-cache-dir".to_string()],
            error_markers: vec!["[Error]".to_string()],
            builtins: DEFAULT_BUILTINS.iter().map(|s| s.to_string()).collect(),
            import_probe: Some(DEFAULT_IMPORT_PROBE.to_string()),
            verbose: false,
        }
    }
}

impl RatchetConfig {
    /// Whether `name` is a configured built-in.
    ///
    /// Comparison ignores case and treats `-` and `_` as equal, the way
    /// package indexes normalize names.
    pub fn is_builtin(&self, name: &str) -> bool {
        let wanted = normalize_name(name);
        self.builtins.iter().any(|b| normalize_name(b) == wanted)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace('_', "-")
}
