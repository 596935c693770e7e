//! Handler for `matchsight analyze`.

use tracing::debug;

use crate::adapter::inbound::cli::command::AnalyzeArgs;
use crate::adapter::inbound::cli::{output, render};
use crate::application::session::Session;
use crate::domain::MatchRequest;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::session::build_session;

/// Field name reported when no key source is available.
pub const API_KEY_FIELD: &str = "api_key";

/// Build the request from flags, filling the sport from config.
///
/// # Errors
///
/// Returns a domain error when either team name is blank.
pub fn request_from_args(args: &AnalyzeArgs, config: &Config) -> Result<MatchRequest> {
    let sport = args.sport.unwrap_or(config.analysis.default_sport);
    let mut request = MatchRequest::try_new(&args.home, &args.away)?.with_sport(sport);
    if let Some(league) = &args.league {
        request = request.with_league(league);
    }
    Ok(request)
}

/// Execute one analysis and render the dashboard.
pub async fn execute(args: &AnalyzeArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let request = request_from_args(args, &config)?;
    let session = build_session(&config)?;

    if !session.check_credentials() {
        return Err(ConfigError::MissingField {
            field: API_KEY_FIELD,
        }
        .into());
    }

    if !output::is_json() {
        output::header(env!("CARGO_PKG_VERSION"));
    }
    run(&session, &request).await
}

/// Submit `request` with a spinner and render the outcome.
///
/// Shared with the interactive form.
pub async fn run(session: &Session, request: &MatchRequest) -> Result<()> {
    debug!(fixture = %request.fixture(), sport = %request.sport(), "Submitting analysis");
    let pb = output::spinner(&format!("Analyzing {}", request.fixture()));

    match session.submit(request).await {
        Ok(response) => {
            output::spinner_success(&pb, "Analysis complete");
            render::analysis(request, &response);
            Ok(())
        }
        Err(e) => {
            output::spinner_fail(&pb, "Analysis failed");
            Err(e)
        }
    }
}
