//! Building absolute short URLs for responses.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

/// Resolves the base URL that short codes are appended to.
///
/// A configured `base_url` wins. Otherwise the request's `Host` header is
/// used verbatim (port included) with an `http` scheme.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no base URL is configured and the
/// `Host` header is missing or not valid UTF-8.
pub fn short_url_base(headers: &HeaderMap, base_url: Option<&str>) -> Result<String, AppError> {
    if let Some(base) = base_url {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?;

    Ok(format!("http://{}", host))
}

/// Joins a base URL and a short code.
pub fn short_url(base: &str, code: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_base_from_host_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

        let base = short_url_base(&headers, None).unwrap();
        assert_eq!(base, "http://localhost:3000");
    }

    #[test]
    fn test_configured_base_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("internal:3000"));

        let base = short_url_base(&headers, Some("https://s.example.com/")).unwrap();
        assert_eq!(base, "https://s.example.com");
    }

    #[test]
    fn test_missing_host() {
        let headers = HeaderMap::new();

        let result = short_url_base(&headers, None);
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_short_url_join() {
        assert_eq!(
            short_url("http://localhost:3000", "c327bc"),
            "http://localhost:3000/c327bc"
        );
        assert_eq!(short_url("https://s.io/", "abc"), "https://s.io/abc");
    }
}
