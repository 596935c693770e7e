//! Path utilities for matchsight.
//!
//! All local state lives under `~/.matchsight/`:
//! - `~/.matchsight/config.toml` - main configuration
//! - `~/.matchsight/api_key` - key stored by `matchsight connect`

use std::path::PathBuf;

/// Returns the matchsight home directory (`~/.matchsight/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".matchsight")
}

/// Returns the default config file path (`~/.matchsight/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default key file path (`~/.matchsight/api_key`).
pub fn default_key_file() -> PathBuf {
    home_dir().join("api_key")
}
