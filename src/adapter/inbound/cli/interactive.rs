//! Handler for `matchsight interactive`.
//!
//! A prompt-driven loop over one [`Session`]: the connection screen when no
//! key is available, otherwise the match form followed by the dashboard.
//! After each dashboard the user can analyze again, reset the key or quit.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::{analyze, output};
use crate::application::session::Session;
use crate::domain::{MatchRequest, Sport};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::session::build_session;

/// Run the interactive form until the user quits.
pub async fn execute(arg: &ConfigPathArg) -> Result<()> {
    let config = Config::load_or_default(&arg.config)?;
    let session = build_session(&config)?;
    let theme = ColorfulTheme::default();

    output::header(env!("CARGO_PKG_VERSION"));
    session.check_credentials();

    loop {
        if session.needs_connection() {
            if connection_screen(&session, &theme)? {
                continue;
            }
            return Ok(());
        }

        let request = prompt_request(&theme, config.analysis.default_sport)?;
        if let Err(e) = analyze::run(&session, &request).await {
            let message = session.snapshot().error.unwrap_or_else(|| e.to_string());
            output::error(&message);
            if session.needs_connection() {
                continue;
            }
        }

        match next_step(&theme)? {
            NextStep::Analyze => {}
            NextStep::ResetKey => reset_key(&session),
            NextStep::Quit => return Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextStep {
    Analyze,
    ResetKey,
    Quit,
}

impl NextStep {
    const ALL: [Self; 3] = [Self::Analyze, Self::ResetKey, Self::Quit];

    const fn label(self) -> &'static str {
        match self {
            Self::Analyze => "Analyze another match",
            Self::ResetKey => "Reset API key",
            Self::Quit => "Quit",
        }
    }
}

fn next_step(theme: &ColorfulTheme) -> Result<NextStep> {
    let labels: Vec<&str> = NextStep::ALL.iter().map(|step| step.label()).collect();
    let selected = Select::with_theme(theme)
        .with_prompt("Next")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(NextStep::ALL.get(selected).copied().unwrap_or(NextStep::Quit))
}

/// Drop back to the connection screen on the next iteration.
fn reset_key(session: &Session) {
    if session.credentials().has_env_key() {
        output::warning("The API key comes from the environment; unset it to switch keys");
        return;
    }
    session.reset_credentials();
}

/// Show the connection screen. Returns `false` when the user gives up.
fn connection_screen(session: &Session, theme: &ColorfulTheme) -> Result<bool> {
    output::section("Connect your AI");
    output::note("Analyses use Gemini with Google Search grounding.");
    output::note("A paid-tier API key is required for grounded requests.");
    if let Some(error) = session.snapshot().error {
        output::warning(&error);
    }

    if !session.credentials().has_selector() {
        output::warning("No key file location available");
        output::hint("set GEMINI_API_KEY and start again");
        return Ok(false);
    }

    let proceed = Confirm::with_theme(theme)
        .with_prompt("Select an API key now?")
        .default(true)
        .interact()?;
    if !proceed {
        return Ok(false);
    }

    session.connect()?;
    output::success("API key selected");
    Ok(true)
}

fn required(input: &String) -> std::result::Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("this field is required")
    } else {
        Ok(())
    }
}

fn prompt_request(theme: &ColorfulTheme, default_sport: Sport) -> Result<MatchRequest> {
    output::section("New match");

    let labels: Vec<String> = Sport::ALL
        .iter()
        .map(|sport| format!("{} {}", sport.icon(), sport.label()))
        .collect();
    let default_index = Sport::ALL
        .iter()
        .position(|sport| *sport == default_sport)
        .unwrap_or(0);
    let selected = Select::with_theme(theme)
        .with_prompt("Sport")
        .items(&labels)
        .default(default_index)
        .interact()?;
    let sport = Sport::ALL.get(selected).copied().unwrap_or(default_sport);

    let home: String = Input::with_theme(theme)
        .with_prompt("Home team")
        .validate_with(required)
        .interact_text()?;
    let away: String = Input::with_theme(theme)
        .with_prompt("Away team")
        .validate_with(required)
        .interact_text()?;
    let league: String = Input::with_theme(theme)
        .with_prompt("League (optional)")
        .allow_empty(true)
        .interact_text()?;

    Ok(MatchRequest::try_new(home, away)?
        .with_league(league)
        .with_sport(sport))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_rejected() {
        assert!(required(&"  ".to_string()).is_err());
        assert!(required(&"Arsenal".to_string()).is_ok());
    }

    #[test]
    fn next_step_menu_defaults_to_analyze() {
        assert_eq!(NextStep::ALL[0], NextStep::Analyze);
        assert!(NextStep::ALL.contains(&NextStep::ResetKey));
        assert_eq!(NextStep::ResetKey.label(), "Reset API key");
    }
}
