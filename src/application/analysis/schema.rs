//! Output schema the model is constrained to.

use serde_json::{json, Value};

/// MIME type requested for the model's answer.
pub const RESPONSE_MIME_TYPE: &str = "application/json";

/// Schema of [`AnalysisResponse`](crate::domain::AnalysisResponse) in the
/// provider's OpenAPI-subset dialect (upper-case type names).
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "homeTeam": { "type": "STRING" },
            "awayTeam": { "type": "STRING" },
            "sport": { "type": "STRING" },
            "categories": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "items": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "marketName": { "type": "STRING" },
                                    "probability": { "type": "NUMBER" },
                                    "explanation": { "type": "STRING" }
                                },
                                "required": ["marketName", "probability", "explanation"]
                            }
                        }
                    },
                    "required": ["title", "items"]
                }
            }
        },
        "required": ["homeTeam", "awayTeam", "categories"]
    })
}
