//! DTOs for the shorten endpoints.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Body of `POST /api/shorten`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The URL to shorten (absolute http/https).
    #[validate(custom(function = "validate_target_url"))]
    pub url: String,

    /// Optional custom short code. Surrounding whitespace is ignored.
    #[serde(default, alias = "custom_code")]
    pub custom_code: Option<String>,
}

/// Query of the legacy `GET /shortened?url=...&code=...` endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenQuery {
    #[validate(custom(function = "validate_target_url"))]
    pub url: String,

    #[serde(default)]
    pub code: Option<String>,
}

/// Result of a successful shorten request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}

/// Accepts absolute `http`/`https` URLs with a host.
fn validate_target_url(url: &str) -> Result<(), ValidationError> {
    let parsed = url::Url::parse(url).map_err(|e| {
        ValidationError::new("url").with_message(Cow::Owned(format!("Invalid URL: {}", e)))
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::new("url")
            .with_message(Cow::Borrowed("URL scheme must be http or https")));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::new("url").with_message(Cow::Borrowed("URL must have a host")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_target_url("https://www.google.com").is_ok());
        assert!(validate_target_url("http://localhost:3000/a?b=c").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes_and_garbage() {
        assert!(validate_target_url("ftp://example.com").is_err());
        assert!(validate_target_url("javascript:alert(1)").is_err());
        assert!(validate_target_url("not-a-url").is_err());
        assert!(validate_target_url("").is_err());
    }

    #[test]
    fn test_request_accepts_both_custom_code_spellings() {
        let camel: ShortenRequest =
            serde_json::from_str(r#"{"url":"https://y.com","customCode":"abc123"}"#).unwrap();
        let snake: ShortenRequest =
            serde_json::from_str(r#"{"url":"https://y.com","custom_code":"abc123"}"#).unwrap();

        assert_eq!(camel.custom_code.as_deref(), Some("abc123"));
        assert_eq!(snake.custom_code.as_deref(), Some("abc123"));
        assert!(camel.validate().is_ok());
    }

    #[test]
    fn test_response_is_camel_case() {
        let body = ShortenResponse {
            short_code: "c327bc".to_string(),
            short_url: "http://localhost:3000/c327bc".to_string(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["shortCode"], "c327bc");
        assert_eq!(json["shortUrl"], "http://localhost:3000/c327bc");
    }
}
