//! Wire types for `models/{model}:generateContent`.

use serde::{Deserialize, Serialize};

use crate::port::{Citation, GenerationRequest};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
pub struct TextPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_search: GoogleSearch,
}

/// Empty marker object: `{"googleSearch": {}}`.
#[derive(Debug, Serialize)]
pub struct GoogleSearch {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
    pub temperature: f64,
}

impl From<&GenerationRequest> for GenerateContentRequest {
    fn from(request: &GenerationRequest) -> Self {
        let tools = if request.web_search {
            vec![Tool {
                google_search: GoogleSearch {},
            }]
        } else {
            Vec::new()
        };

        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart {
                    text: request.prompt.clone(),
                }],
            }],
            tools,
            generation_config: GenerationConfig {
                response_mime_type: request.response_mime_type.clone(),
                response_schema: request.response_schema.clone(),
                temperature: request.temperature,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    /// Set on thinking-model reasoning parts, which are not answer text.
    #[serde(default)]
    pub thought: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebChunk>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebChunk {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated answer text of the first candidate.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts
            .iter()
            .filter(|part| !part.thought)
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }

    /// Grounding chunks of the first candidate as port citations.
    ///
    /// A web chunk without a URI cannot be cited and maps to
    /// [`Citation::Other`]. `None` when the candidate carries no
    /// `groundingChunks`; an empty list stays `Some(vec![])`.
    #[must_use]
    pub fn citations(&self) -> Option<Vec<Citation>> {
        let chunks = self
            .candidates
            .first()?
            .grounding_metadata
            .as_ref()?
            .grounding_chunks
            .as_ref()?;

        let citations = chunks
            .iter()
            .map(|chunk| match &chunk.web {
                Some(WebChunk {
                    uri: Some(uri),
                    title,
                }) => Citation::Web {
                    uri: uri.clone(),
                    title: title.clone(),
                },
                _ => Citation::Other,
            })
            .collect();
        Some(citations)
    }
}

/// `{"error": {...}}` body returned on non-success responses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub details: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(web_search: bool) -> GenerationRequest {
        GenerationRequest {
            model: "gemini-3-pro-preview".into(),
            prompt: "Analyze the football match: Arsenal vs Chelsea.".into(),
            web_search,
            response_mime_type: "application/json".into(),
            response_schema: json!({"type": "OBJECT"}),
            temperature: 0.2,
        }
    }

    #[test]
    fn request_serialization() {
        let body = GenerateContentRequest::from(&request(true));
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(
            json["contents"][0]["parts"][0]["text"],
            "Analyze the football match: Arsenal vs Chelsea."
        );
        assert_eq!(json["tools"], json!([{"googleSearch": {}}]));
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert_eq!(json["generationConfig"]["temperature"], 0.2);
    }

    #[test]
    fn tools_omitted_without_search() {
        let body = GenerateContentRequest::from(&request(false));
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("tools").is_none());
    }

    #[test]
    fn response_text_and_citations() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "thinking...", "thought": true},
                        {"text": "{\"homeTeam\":"},
                        {"text": "\"Arsenal\"}"}
                    ]
                },
                "finishReason": "STOP",
                "groundingMetadata": {
                    "webSearchQueries": ["arsenal chelsea h2h"],
                    "groundingChunks": [
                        {"web": {"uri": "https://a.example", "title": "a.example"}},
                        {"retrievedContext": {"uri": "gs://bucket"}},
                        {"web": {"uri": "https://b.example"}}
                    ]
                }
            }],
            "usageMetadata": {"promptTokenCount": 10}
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"homeTeam\":\"Arsenal\"}"));
        assert_eq!(
            response.citations(),
            Some(vec![
                Citation::Web {
                    uri: "https://a.example".into(),
                    title: Some("a.example".into()),
                },
                Citation::Other,
                Citation::Web {
                    uri: "https://b.example".into(),
                    title: None,
                },
            ])
        );
    }

    #[test]
    fn blocked_prompt_has_no_text() {
        let json = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());
        assert!(response.citations().is_none());
    }

    #[test]
    fn empty_grounding_chunks_are_kept() {
        let json = r#"{"candidates": [{
            "content": {"parts": [{"text": "{}"}]},
            "groundingMetadata": {"groundingChunks": []}
        }]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.citations(), Some(Vec::new()));

        let json = r#"{"candidates": [{
            "content": {"parts": [{"text": "{}"}]},
            "groundingMetadata": {"webSearchQueries": ["q"]}
        }]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.citations().is_none());
    }

    #[test]
    fn candidate_without_parts_has_no_text() {
        let json = r#"{"candidates": [{"finishReason": "MAX_TOKENS", "content": {}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn error_envelope_parsing() {
        let json = r#"{
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT",
                "details": [
                    {
                        "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                        "reason": "API_KEY_INVALID",
                        "domain": "googleapis.com"
                    }
                ]
            }
        }"#;

        let envelope: ErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.error.code, Some(400));
        assert_eq!(envelope.error.status.as_deref(), Some("INVALID_ARGUMENT"));
        assert_eq!(
            envelope.error.details[0].reason.as_deref(),
            Some("API_KEY_INVALID")
        );
    }
}
