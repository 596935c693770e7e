//! Handlers for `matchsight connect` and `matchsight disconnect`.

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::keyfile::KeyFileSelector;
use crate::port::KeySelector;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::session::{build_credentials, build_key_selector};

/// Run the key-selection flow and store the key.
pub fn execute(arg: &ConfigPathArg) -> Result<()> {
    let config = Config::load_or_default(&arg.config)?;
    let gate = build_credentials(&config, build_key_selector(&config));

    output::section("Connect your AI");
    if gate.has_env_key() {
        output::note(&format!(
            "{} is set and takes precedence over the stored key.",
            config.credential.api_key_env
        ));
    }

    if !gate.connect()? {
        return Err(ConfigError::MissingField { field: "key_file" }.into());
    }

    output::success("API key stored");
    if let Some(path) = config.credential.key_file_path() {
        output::field("Key file", path.display());
    }
    output::hint("matchsight check credential");
    Ok(())
}

/// Remove the stored key so the next run asks for a new one.
pub fn execute_disconnect(arg: &ConfigPathArg) -> Result<()> {
    let config = Config::load_or_default(&arg.config)?;
    let Some(path) = config.credential.key_file_path() else {
        return Err(ConfigError::MissingField { field: "key_file" }.into());
    };
    let selector = KeyFileSelector::new(path);

    if selector.has_selected_key()? {
        selector.clear()?;
        output::success("Stored API key removed");
    } else {
        selector.clear()?;
        output::note("No stored API key");
    }
    output::field("Key file", selector.path().display());

    if config.credential.env_key().is_some() {
        output::warning(&format!(
            "{} is still set and will be used",
            config.credential.api_key_env
        ));
    } else {
        output::hint("matchsight connect");
    }
    Ok(())
}
