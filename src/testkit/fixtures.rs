//! Canned requests and model answers used across tests.

use crate::domain::{AnalysisResponse, MatchRequest, Sport};

/// A minimal, well-formed answer for Arsenal vs Chelsea.
pub const ARSENAL_CHELSEA_JSON: &str = r#"{
    "homeTeam": "Arsenal",
    "awayTeam": "Chelsea",
    "sport": "football",
    "categories": [
        {
            "title": "ফলাফল ও মূল বাজি",
            "items": [
                {"marketName": "Home Win", "probability": 58, "explanation": "আর্সেনাল ঘরের মাঠে শক্তিশালী।"},
                {"marketName": "Double Chance (1X)", "probability": 78, "explanation": "ড্র বা জয়ের সম্ভাবনা বেশি।"}
            ]
        },
        {
            "title": "গোল ও বিটিএস",
            "items": [
                {"marketName": "Total Goals Over 2.5", "probability": 62, "explanation": "দুই দলই আক্রমণাত্মক।"},
                {"marketName": "BTS", "probability": 55, "explanation": "চেলসি নিয়মিত গোল করছে।"}
            ]
        }
    ]
}"#;

/// A second answer with different teams, for last-response-wins tests.
pub const SPURS_LIVERPOOL_JSON: &str = r#"{
    "homeTeam": "Tottenham",
    "awayTeam": "Liverpool",
    "categories": [
        {"title": "Result", "items": [
            {"marketName": "Away Win", "probability": 61, "explanation": "..."}
        ]}
    ]
}"#;

/// `Arsenal vs Chelsea (Premier League)`, football.
pub fn arsenal_chelsea() -> MatchRequest {
    MatchRequest::try_new("Arsenal", "Chelsea")
        .expect("valid fixture")
        .with_league("Premier League")
        .with_sport(Sport::Football)
}

/// `Tottenham vs Liverpool`, football, no league.
pub fn spurs_liverpool() -> MatchRequest {
    MatchRequest::try_new("Tottenham", "Liverpool").expect("valid fixture")
}

/// Parsed form of [`ARSENAL_CHELSEA_JSON`].
pub fn arsenal_chelsea_response() -> AnalysisResponse {
    serde_json::from_str(ARSENAL_CHELSEA_JSON).expect("valid fixture JSON")
}
