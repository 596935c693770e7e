//! Prediction dashboard rendering.

use chrono::Utc;
use serde_json::json;
use tabled::settings::object::Columns;
use tabled::settings::{Style, Width};
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::{AnalysisResponse, MatchRequest, PredictionCategory};

/// Explanation column width before wrapping.
const EXPLANATION_WIDTH: usize = 56;
const METER_WIDTH: usize = 10;

#[derive(Tabled)]
struct MarketRow {
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Chance")]
    chance: String,
    #[tabled(rename = "")]
    meter: String,
    #[tabled(rename = "Analysis")]
    explanation: String,
}

fn category_table(category: &PredictionCategory) -> String {
    let rows = category.items.iter().map(|item| MarketRow {
        market: item.market_name.clone(),
        chance: format!("{:.0}%", item.probability),
        meter: output::meter(item.probability, METER_WIDTH),
        explanation: item.explanation.clone(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Width::wrap(EXPLANATION_WIDTH));
    table.to_string()
}

/// Render a finished analysis.
///
/// In JSON mode the whole response is emitted as one document; otherwise
/// as the terminal dashboard.
pub fn analysis(request: &MatchRequest, response: &AnalysisResponse) {
    if output::is_json() {
        output::json_output(json!({
            "command": "analyze",
            "analyzedAt": Utc::now().to_rfc3339(),
            "request": request,
            "result": response,
        }));
        return;
    }

    dashboard(request, response);
}

fn dashboard(request: &MatchRequest, response: &AnalysisResponse) {
    let sport = request.sport();
    output::section(&format!(
        "{} {} vs {}",
        sport.icon(),
        response.home_team,
        response.away_team
    ));
    if let Some(league) = request.league() {
        output::field("League", league);
    }
    output::field("Sport", sport.label());
    output::field(
        "Markets",
        format!(
            "{} in {} categories",
            response.market_count(),
            response.categories.len()
        ),
    );

    for category in &response.categories {
        output::section(&category.title);
        if category.items.is_empty() {
            output::note("(no markets)");
            continue;
        }
        output::lines(&category_table(category));
        if let Some(top) = category.strongest() {
            output::field(
                "Top pick",
                format!(
                    "{} {}",
                    output::highlight(&top.market_name),
                    output::probability(top.probability)
                ),
            );
        }
    }

    match response.sources.as_deref() {
        Some(sources) if !sources.is_empty() => {
            output::section("Sources");
            for (index, source) in sources.iter().enumerate() {
                output::note(&format!("{}. {}", index + 1, source.title));
                output::lines(&format!("   {}", output::highlight(&source.uri)));
            }
        }
        _ => {}
    }

    output::note("Probabilities are model estimates, not betting advice.");
}
