//! Gemini generateContent client.
//!
//! Provides an implementation of the [`GenerativeModel`] trait for the
//! Google Generative Language REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use super::dto::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use super::settings::GeminiConfig;
use crate::error::{ConfigError, Result};
use crate::port::{ApiKey, Generation, GenerationRequest, GenerativeModel, ProviderError};

/// Provider status strings that mean the key itself was rejected.
const CREDENTIAL_STATUSES: [&str; 2] = ["UNAUTHENTICATED", "PERMISSION_DENIED"];

/// Gemini API client.
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for API requests.
    client: Client,
    /// Base URL, always ending in `/`.
    base: Url,
    /// API version path segment.
    api_version: String,
}

impl Gemini {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_base` is not a valid absolute URL or the HTTP
    /// client cannot be built.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let mut base = Url::parse(&config.api_base)?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                field: "api_base",
                reason: format!("'{}' cannot be used as a base URL", config.api_base),
            }
            .into());
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut builder = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms));
        // Local emulators and test servers bypass system proxies.
        if is_loopback(&base) {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base,
            api_version: config.api_version.clone(),
        })
    }

    /// Endpoint for `models/{model}:generateContent`.
    fn endpoint(&self, model: &str) -> std::result::Result<Url, ProviderError> {
        let model = model.strip_prefix("models/").unwrap_or(model);
        self.base
            .join(&format!(
                "{}/models/{}:generateContent",
                self.api_version, model
            ))
            .map_err(|e| ProviderError::other(format!("invalid model endpoint: {e}")))
    }
}

#[async_trait]
impl GenerativeModel for Gemini {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(
        &self,
        api_key: &ApiKey,
        request: &GenerationRequest,
    ) -> std::result::Result<Generation, ProviderError> {
        let url = self.endpoint(&request.model)?;
        let body = GenerateContentRequest::from(request);

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::transport(e.to_string()))?;

        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|e| ProviderError::transport(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = payload.len(), "Gemini response");

        if !status.is_success() {
            return Err(error_from_response(status, &payload));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&payload).map_err(|e| {
            ProviderError::other(format!("invalid response body: {e}")).with_status(status.as_u16())
        })?;

        Ok(Generation {
            text: parsed.text(),
            citations: parsed.citations(),
        })
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(url::Host::Domain(domain)) => domain == "localhost",
        Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

fn is_auth_status(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

/// Turn a non-success response into a structured provider error.
fn error_from_response(status: StatusCode, payload: &str) -> ProviderError {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(payload) else {
        let message = if payload.trim().is_empty() {
            status.to_string()
        } else {
            payload.trim().to_string()
        };
        let base = if is_auth_status(status) {
            ProviderError::credential(message)
        } else {
            ProviderError::other(message)
        };
        return base.with_status(status.as_u16());
    };

    let body = envelope.error;
    let credential = is_auth_status(status)
        || body
            .status
            .as_deref()
            .is_some_and(|s| CREDENTIAL_STATUSES.contains(&s))
        || body
            .details
            .iter()
            .filter_map(|d| d.reason.as_deref())
            .any(|reason| reason.starts_with("API_KEY"));

    let message = if body.message.is_empty() {
        status.to_string()
    } else {
        body.message
    };
    let mut error = if credential {
        ProviderError::credential(message)
    } else {
        ProviderError::other(message)
    };
    error = error.with_status(status.as_u16());
    if let Some(code) = body.status {
        error = error.with_code(code);
    }
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::ProviderErrorKind;

    fn client(api_base: &str) -> Gemini {
        Gemini::new(&GeminiConfig {
            api_base: api_base.into(),
            ..GeminiConfig::default()
        })
        .unwrap()
    }

    // ==================== Endpoint Tests ====================

    #[test]
    fn test_endpoint_default_base() {
        let gemini = client("https://generativelanguage.googleapis.com");
        let url = gemini.endpoint("gemini-3-pro-preview").unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-pro-preview:generateContent"
        );
    }

    #[test]
    fn test_endpoint_accepts_models_prefix() {
        let gemini = client("https://generativelanguage.googleapis.com/");
        let url = gemini.endpoint("models/gemini-2.5-flash").unwrap();
        assert!(url
            .as_str()
            .ends_with("/v1beta/models/gemini-2.5-flash:generateContent"));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let gemini = client("http://localhost:8080/proxy");
        let url = gemini.endpoint("m").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/proxy/v1beta/models/m:generateContent"
        );
    }

    #[test]
    fn test_invalid_base_rejected() {
        let result = Gemini::new(&GeminiConfig {
            api_base: "not a url".into(),
            ..GeminiConfig::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_loopback_detection() {
        assert!(is_loopback(&Url::parse("http://127.0.0.1:9000").unwrap()));
        assert!(is_loopback(&Url::parse("http://localhost/").unwrap()));
        assert!(!is_loopback(
            &Url::parse("https://generativelanguage.googleapis.com").unwrap()
        ));
    }

    #[test]
    fn test_client_name() {
        assert_eq!(client("https://example.com").name(), "gemini");
    }

    // ==================== Error Mapping Tests ====================

    #[test]
    fn test_invalid_api_key_is_credential() {
        let payload = r#"{"error": {
            "code": 400,
            "message": "API key not valid. Please pass a valid API key.",
            "status": "INVALID_ARGUMENT",
            "details": [{"reason": "API_KEY_INVALID"}]
        }}"#;

        let err = error_from_response(StatusCode::BAD_REQUEST, payload);
        assert_eq!(err.kind, ProviderErrorKind::Credential);
        assert_eq!(err.status, Some(400));
        assert_eq!(err.code.as_deref(), Some("INVALID_ARGUMENT"));
        assert_eq!(
            err.message,
            "API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn test_permission_denied_is_credential() {
        let payload = r#"{"error": {
            "code": 403,
            "message": "The caller does not have permission",
            "status": "PERMISSION_DENIED"
        }}"#;

        let err = error_from_response(StatusCode::FORBIDDEN, payload);
        assert_eq!(err.kind, ProviderErrorKind::Credential);
    }

    #[test]
    fn test_forbidden_is_credential() {
        let err = error_from_response(StatusCode::FORBIDDEN, "Forbidden");
        assert_eq!(err.kind, ProviderErrorKind::Credential);
        assert_eq!(err.message, "Forbidden");
        assert_eq!(err.status, Some(403));

        let payload = r#"{"error": {
            "code": 403,
            "message": "Project has been suspended.",
            "status": "FAILED_PRECONDITION"
        }}"#;
        let err = error_from_response(StatusCode::FORBIDDEN, payload);
        assert_eq!(err.kind, ProviderErrorKind::Credential);
        assert_eq!(err.code.as_deref(), Some("FAILED_PRECONDITION"));
    }

    #[test]
    fn test_quota_error_is_other() {
        let payload = r#"{"error": {
            "code": 429,
            "message": "Resource has been exhausted (e.g. check quota).",
            "status": "RESOURCE_EXHAUSTED"
        }}"#;

        let err = error_from_response(StatusCode::TOO_MANY_REQUESTS, payload);
        assert_eq!(err.kind, ProviderErrorKind::Other);
        assert_eq!(err.status, Some(429));
        assert_eq!(err.message, "Resource has been exhausted (e.g. check quota).");
    }

    #[test]
    fn test_not_found_keeps_message_for_fallback() {
        let payload = r#"{"error": {
            "code": 404,
            "message": "Requested entity was not found.",
            "status": "NOT_FOUND"
        }}"#;

        let err = error_from_response(StatusCode::NOT_FOUND, payload);
        assert_eq!(err.kind, ProviderErrorKind::Other);
        assert!(err.message.contains("not found"));
    }

    #[test]
    fn test_unstructured_body_passes_through() {
        let err = error_from_response(StatusCode::BAD_GATEWAY, "upstream timeout");
        assert_eq!(err.kind, ProviderErrorKind::Other);
        assert_eq!(err.message, "upstream timeout");
        assert_eq!(err.status, Some(502));
    }

    #[test]
    fn test_empty_unauthorized_body() {
        let err = error_from_response(StatusCode::UNAUTHORIZED, "");
        assert_eq!(err.kind, ProviderErrorKind::Credential);
        assert_eq!(err.message, "401 Unauthorized");
    }
}
