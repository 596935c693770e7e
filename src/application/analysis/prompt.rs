//! Prompt construction for match analysis.

use std::fmt::Write;

use crate::domain::{MatchRequest, Sport};

/// Bengali-numbered category markers, matching the Bengali category titles.
const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Build the instruction sent to the model for one fixture.
///
/// The prompt names both teams, the league when present, and the sport,
/// then lists every mandatory market of the sport's taxonomy.
#[must_use]
pub fn build_prompt(request: &MatchRequest, language: &str) -> String {
    let sport = request.sport();
    let league = request
        .league()
        .map(|league| format!(" ({league})"))
        .unwrap_or_default();

    let mut prompt = format!(
        r#"Analyze the {sport_name} match: {home} vs {away}{league}.
Sport: {sport_label}.
As the World's Most Advanced {sport_label} Analytics AI, you must provide 70-80% accurate predictions.

STEP 1: Use Google Search to find LIVE data from sports news, H2H databases, and official league sites.
STEP 2: Analyze the following categories with extreme precision.

OUTPUT RULES:
- explanation: {explanation_rule}
- marketName: English.
- sport: "{sport_name}".
- Analyze EVERY option provided below without exception.

MANDATORY OPTIONS:
"#,
        sport_name = sport.as_str(),
        sport_label = sport.label(),
        home = request.home_team(),
        away = request.away_team(),
        league = league,
        explanation_rule = explanation_rule(language),
    );

    write_taxonomy(&mut prompt, sport);
    prompt
}

fn explanation_rule(language: &str) -> String {
    if language.eq_ignore_ascii_case("bengali") {
        "Bengali (বাংলায় বিস্তারিত ব্যাখ্যা দিন).".to_string()
    } else {
        format!("{language}.")
    }
}

fn write_taxonomy(prompt: &mut String, sport: Sport) {
    for (index, category) in sport.taxonomy().iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(
            prompt,
            "{}. {}: {}.",
            bengali_number(index + 1),
            category.title,
            category.markets.join(", ")
        );
    }
}

fn bengali_number(n: usize) -> String {
    n.to_string()
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| BENGALI_DIGITS[d as usize]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arsenal_chelsea() -> MatchRequest {
        MatchRequest::try_new("Arsenal", "Chelsea")
            .unwrap()
            .with_league("Premier League")
    }

    #[test]
    fn prompt_contains_teams_and_league() {
        let prompt = build_prompt(&arsenal_chelsea(), "Bengali");
        assert!(prompt.contains("Arsenal vs Chelsea (Premier League)"));
    }

    #[test]
    fn prompt_omits_parentheses_without_league() {
        let request = MatchRequest::try_new("Arsenal", "Chelsea").unwrap();
        let prompt = build_prompt(&request, "Bengali");
        assert!(prompt.contains("Arsenal vs Chelsea."));
        assert!(!prompt.contains("()"));
    }

    #[test]
    fn prompt_names_sport() {
        let request = MatchRequest::try_new("Mumbai Indians", "Chennai Super Kings")
            .unwrap()
            .with_sport(Sport::Cricket);
        let prompt = build_prompt(&request, "Bengali");
        assert!(prompt.contains("Analyze the cricket match"));
        assert!(prompt.contains("Sport: Cricket."));
        assert!(prompt.contains("Top Bowler"));
        assert!(!prompt.contains("VAR Checked"));
    }

    #[test]
    fn football_prompt_lists_every_market() {
        let prompt = build_prompt(&arsenal_chelsea(), "Bengali");
        for category in Sport::Football.taxonomy() {
            assert!(prompt.contains(category.title));
            for market in category.markets {
                assert!(prompt.contains(market), "missing market {market}");
            }
        }
        assert!(prompt.contains("১. "));
        assert!(prompt.contains("৬. "));
    }

    #[test]
    fn language_rule_is_configurable() {
        let bengali = build_prompt(&arsenal_chelsea(), "bengali");
        assert!(bengali.contains("বাংলায় বিস্তারিত ব্যাখ্যা দিন"));

        let english = build_prompt(&arsenal_chelsea(), "English");
        assert!(english.contains("- explanation: English."));
        assert!(!english.contains("বাংলায়"));
    }

    #[test]
    fn bengali_numbers_for_two_digits() {
        assert_eq!(bengali_number(1), "১");
        assert_eq!(bengali_number(10), "১০");
    }
}
