//! Configuration file discovery and loading.
//!
//! Resolution order (later overrides earlier):
//! 1. Built-in defaults
//! 2. The file named by `RATCHET_CONFIG`, or `/etc/ratchet/config.yml`
//!    when that variable is unset
//! 3. `RATCHET_*` environment overrides

use crate::config::schema::RatchetConfig;
use crate::error::{RatchetError, Result};
use std::env::VarError;
use std::fs;
use std::path::Path;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "RATCHET_CONFIG";

/// System-wide config file, read when present.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/ratchet/config.yml";

/// Overrides `tool`.
pub const TOOL_ENV: &str = "RATCHET_TOOL";

/// Overrides `error_markers` (comma-separated).
pub const ERROR_MARKERS_ENV: &str = "RATCHET_ERROR_MARKERS";

/// Overrides `import_probe`; `none` disables it.
pub const IMPORT_PROBE_ENV: &str = "RATCHET_IMPORT_PROBE";

/// Overrides `verbose` (`1`/`true`).
pub const VERBOSE_ENV: &str = "RATCHET_VERBOSE";

/// Load configuration from the real environment and filesystem.
pub fn load_config() -> Result<RatchetConfig> {
    load_config_with_env(&|key: &str| std::env::var(key), Path::new(SYSTEM_CONFIG_PATH))
}

/// Load configuration with a custom env var lookup and system config path.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `RATCHET_CONFIG` names a missing file.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_with_env<F>(env_fn: &F, system_path: &Path) -> Result<RatchetConfig>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    let mut config = match env_fn(CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => load_config_file(Path::new(path.trim()))?,
        _ if system_path.is_file() => load_config_file(system_path)?,
        _ => RatchetConfig::default(),
    };

    apply_env_overrides(&mut config, env_fn);
    Ok(config)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<RatchetConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RatchetError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RatchetError::Io(e)
        }
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into RatchetConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<RatchetConfig> {
    if content.trim().is_empty() {
        return Ok(RatchetConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| RatchetError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

fn apply_env_overrides<F>(config: &mut RatchetConfig, env_fn: &F)
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    if let Some(tool) = non_empty(env_fn(TOOL_ENV)) {
        config.tool = tool;
    }

    if let Some(markers) = non_empty(env_fn(ERROR_MARKERS_ENV)) {
        config.error_markers = markers
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(String::from)
            .collect();
    }

    if let Some(probe) = non_empty(env_fn(IMPORT_PROBE_ENV)) {
        config.import_probe = match probe.to_lowercase().as_str() {
            "none" | "off" => None,
            _ => Some(probe),
        };
    }

    if let Some(verbose) = non_empty(env_fn(VERBOSE_ENV)) {
        config.verbose = matches!(verbose.to_lowercase().as_str(), "1" | "true" | "yes");
    }
}

fn non_empty(value: std::result::Result<String, VarError>) -> Option<String> {
    value
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
