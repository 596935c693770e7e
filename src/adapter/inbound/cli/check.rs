//! Handlers for `matchsight check`.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::session::{build_credentials, build_key_selector};

/// Validate the configuration file without contacting the API.
pub fn execute_config(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "check.config",
            "path": path.display().to_string(),
            "valid": true,
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Model", &config.analysis.model);
    output::field("Endpoint", &config.gemini.api_base);
    output::field("Sport", config.analysis.default_sport.label());
    output::field("Language", &config.analysis.explanation_language);
    output::field(
        "Search",
        if config.analysis.web_search {
            "enabled"
        } else {
            "disabled"
        },
    );
    Ok(())
}

/// Report whether an API key is available, and from where.
///
/// The key is not verified against the provider.
pub fn execute_credential(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;
    let selector = build_key_selector(&config);
    let gate = build_credentials(&config, selector);
    let ready = gate.check()?;
    let source = if gate.has_env_key() {
        "environment"
    } else if ready {
        "key file"
    } else {
        "none"
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "check.credential",
            "ready": ready,
            "source": source,
            "env": config.credential.api_key_env,
        }));
        return Ok(());
    }

    output::section("Credential Check");
    output::field("Env var", &config.credential.api_key_env);
    if let Some(path) = config.credential.key_file_path() {
        output::field("Key file", path.display());
    }
    if ready {
        output::success(&format!("API key available ({source})"));
        output::note("The key is only verified by a real analysis request.");
    } else {
        output::warning("No API key found");
        output::hint(&format!(
            "set {} or run `matchsight connect`",
            config.credential.api_key_env
        ));
    }
    Ok(())
}
