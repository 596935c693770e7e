//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use std::path::{Path, PathBuf};

use crate::infrastructure::config::settings::Config;

/// Key variable for isolated configs. Unset unless a test sets it, so by
/// default only the key file counts.
pub const TEST_KEY_ENV: &str = "MATCHSIGHT_TEST_API_KEY";

/// Defaults with short timeouts, pointed at `api_base`.
pub fn config(api_base: &str) -> Config {
    let mut config = Config::default();
    config.gemini.api_base = api_base.to_string();
    config.gemini.timeout_ms = 2_000;
    config.gemini.connect_timeout_ms = 500;
    config
}

/// Defaults whose key file lives at `key_file` and whose env variable is
/// never set.
pub fn isolated(key_file: PathBuf) -> Config {
    let mut config = Config::default();
    config.credential.api_key_env = TEST_KEY_ENV.to_string();
    config.credential.key_file = Some(key_file);
    config
}

/// Write `content` to `config.toml` under `dir` and return the path.
pub fn write(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, content).expect("write test config");
    path
}

/// TOML for [`isolated`], suitable for CLI tests.
pub fn isolated_toml(key_file: &Path) -> String {
    format!(
        "[credential]\napi_key_env = \"{TEST_KEY_ENV}\"\nkey_file = \"{}\"\n",
        key_file.display()
    )
}
