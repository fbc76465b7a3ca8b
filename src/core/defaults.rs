use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::io;
use crate::paths;

/// Root configuration structure for com.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ComConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via com.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: OutputConfig,

    #[serde(default = "default_random")]
    pub random: RandomConfig,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            random: default_random(),
        }
    }
}

/// Configuration for GitHub Actions output writing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_env_var")]
    pub env_var: String,

    #[serde(default = "default_delimiter_prefix")]
    pub delimiter_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        default_output()
    }
}

/// Configuration for random string generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RandomConfig {
    /// Characters used when a caller passes an empty charset.
    #[serde(default = "default_charset")]
    pub charset: String,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_output() -> OutputConfig {
    OutputConfig {
        env_var: default_env_var(),
        delimiter_prefix: default_delimiter_prefix(),
    }
}

fn default_env_var() -> String {
    "GITHUB_OUTPUT".to_string()
}

fn default_delimiter_prefix() -> String {
    "ghdelimiter".to_string()
}

fn default_random() -> RandomConfig {
    RandomConfig {
        charset: default_charset(),
    }
}

fn default_charset() -> String {
    crate::random::ALPHANUMERIC.as_str().to_string()
}

// =============================================================================
// Loading and saving
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
/// If com.json is missing or invalid, silently returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full com.json config, falling back to defaults on any error.
pub fn load_config() -> ComConfig {
    load_config_from_file().unwrap_or_default()
}

fn load_config_from_file() -> crate::Result<ComConfig> {
    let path = paths::com_json()?;

    if !path.exists() {
        return Err(crate::Error::other("com.json not found"));
    }

    load_config_from(&path)
}

/// Load config from an explicit path, surfacing read and parse errors.
pub fn load_config_from(path: &Path) -> crate::Result<ComConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;

    serde_json::from_str(&content)
        .map_err(|e| crate::Error::config_invalid_json(path.display().to_string(), e))
}

/// Save config to com.json file (creates if missing).
pub fn save_config(config: &ComConfig) -> crate::Result<()> {
    save_config_to(&paths::com_json()?, config)
}

/// Save config to an explicit path, creating parent directories.
pub fn save_config_to(path: &Path, config: &ComConfig) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
        })?;
    }

    let content = serde_json::to_string_pretty(config).map_err(|e| {
        crate::Error::internal_json(e.to_string(), Some("serialize com.json".to_string()))
    })?;

    io::write_file_atomic(path, &content, &format!("write {}", path.display()))
}

/// Check if com.json file exists
pub fn config_exists() -> bool {
    paths::com_json().map(|p| p.exists()).unwrap_or(false)
}

/// Delete com.json file (reset to defaults)
pub fn reset_config() -> crate::Result<bool> {
    let path = paths::com_json()?;

    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get the path to com.json (for display purposes)
pub fn config_path() -> crate::Result<String> {
    Ok(paths::com_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}
