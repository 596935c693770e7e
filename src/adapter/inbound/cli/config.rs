//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Temperature above which probabilities drift between runs.
const HIGH_TEMPERATURE: f64 = 1.0;

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note("2. Set GEMINI_API_KEY, or run: matchsight connect");
    output::note("3. Run: matchsight analyze --home <TEAM> --away <TEAM>");
    Ok(())
}

/// Execute `config show`.
///
/// A missing file shows the defaults.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    if !path.exists() {
        output::note("(file not found, showing defaults)");
    }
    output::lines(&config.to_toml()?);
    Ok(())
}

/// Non-fatal findings for a valid configuration.
#[must_use]
pub fn warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();
    if !config.analysis.web_search {
        warnings.push("search grounding is disabled; predictions will not use live data".into());
    }
    if config.analysis.temperature > HIGH_TEMPERATURE {
        warnings.push(format!(
            "temperature {} is high; probabilities will vary between runs",
            config.analysis.temperature
        ));
    }
    if config.gemini.api_base.starts_with("http://") {
        warnings.push("api_base uses plain HTTP; the API key is sent unencrypted".into());
    }
    warnings
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    let warnings = warnings(&config);

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
            "warnings": warnings,
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", path.display());
    output::success("Config file is valid");

    if !warnings.is_empty() {
        output::section("Warnings");
        for warning in &warnings {
            output::warning(warning);
        }
    }

    output::field("Next", format!("matchsight config show -c {}", path.display()));
    Ok(())
}
