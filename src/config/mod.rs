//! Configuration loading for ratchet.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and environment overrides in [`loader`]
//!
//! # Example
//!
//! ```
//! use ratchet::config::{parse_config, RatchetConfig};
//! use std::path::Path;
//!
//! let config = parse_config("tool: python3 -m pip", Path::new("config.yml")).unwrap();
//! assert_eq!(config.tool, "python3 -m pip");
//! assert_eq!(config.error_markers, RatchetConfig::default().error_markers);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    load_config, load_config_file, load_config_with_env, parse_config, CONFIG_ENV,
    ERROR_MARKERS_ENV, IMPORT_PROBE_ENV, SYSTEM_CONFIG_PATH, TOOL_ENV, VERBOSE_ENV,
};
pub use schema::{RatchetConfig, DEFAULT_IMPORT_PROBE};
