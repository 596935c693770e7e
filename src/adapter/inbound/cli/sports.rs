//! Sport and market taxonomy listing.

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::Sport;
use crate::error::Result;

#[derive(Tabled)]
struct SportRow {
    #[tabled(rename = "")]
    icon: &'static str,
    #[tabled(rename = "Sport")]
    name: &'static str,
    #[tabled(rename = "Categories")]
    categories: usize,
    #[tabled(rename = "Markets")]
    markets: usize,
}

/// List supported sports and their mandatory market categories.
pub fn list() -> Result<()> {
    if output::is_quiet() && !output::is_json() {
        return Ok(());
    }

    if output::is_json() {
        let sports: Vec<_> = Sport::ALL
            .iter()
            .map(|sport| {
                json!({
                    "name": sport.as_str(),
                    "label": sport.label(),
                    "categories": sport
                        .taxonomy()
                        .iter()
                        .map(|c| json!({ "title": c.title, "markets": c.markets }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        output::json_output(json!({ "command": "sports", "sports": sports }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Supported sports");

    let rows = Sport::ALL.iter().map(|sport| SportRow {
        icon: sport.icon(),
        name: sport.as_str(),
        categories: sport.taxonomy().len(),
        markets: sport.market_count(),
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output::lines(&table.to_string());

    for sport in Sport::ALL {
        output::section(&format!("{} {}", sport.icon(), sport.label()));
        for category in sport.taxonomy() {
            output::field(category.title, category.markets.join(", "));
        }
    }

    output::hint("matchsight analyze --home <TEAM> --away <TEAM> --sport <SPORT>");
    Ok(())
}
