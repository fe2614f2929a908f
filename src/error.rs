use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the Carbon Interface client.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (connection, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The `/auth` probe made while building the client was rejected.
    #[error("Carbon Interface authentication failed (HTTP {status}): {message}")]
    Authentication { status: StatusCode, message: String },

    /// Non-2xx response to an estimate request.
    #[error("API request failed: HTTP {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("failed to parse API JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The response envelope lacks a field the client needs.
    #[error("missing field `{path}` in estimate response")]
    MissingField { path: String },

    #[error("unexpected estimate response: {0}")]
    UnexpectedResponse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Error payload returned by Carbon Interface on 4xx/5xx.
///
/// Seen shapes: `{"message": "..."}` and `{"errors": [...]}`.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ApiErrorResponse {
    #[serde(default)]
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) errors: Option<serde_json::Value>,
}

/// Best-effort human message for an error body, falling back to the raw text.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorResponse>(body) {
        let message = parsed.message.as_deref().unwrap_or("").trim();
        let errors = match &parsed.errors {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join("; "),
            Some(other) => other.to_string(),
            None => String::new(),
        };

        match (message.is_empty(), errors.is_empty()) {
            (false, false) => return format!("{message} ({errors})"),
            (false, true) => return message.to_string(),
            (true, false) => return errors,
            (true, true) => {}
        }
    }

    let text = body.trim();
    if text.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_is_used() {
        let msg = error_message(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Your API key is invalid"}"#,
        );
        assert_eq!(msg, "Your API key is invalid");
    }

    #[test]
    fn errors_array_is_joined() {
        let msg = error_message(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"errors":["departure_airport is invalid","legs is empty"]}"#,
        );
        assert_eq!(msg, "departure_airport is invalid; legs is empty");
    }

    #[test]
    fn message_and_errors_are_combined() {
        let msg = error_message(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":"Validation failed","errors":"country is not supported"}"#,
        );
        assert_eq!(msg, "Validation failed (country is not supported)");
    }

    #[test]
    fn falls_back_to_raw_text() {
        let msg = error_message(StatusCode::BAD_GATEWAY, "upstream timed out\n");
        assert_eq!(msg, "upstream timed out");
    }

    #[test]
    fn empty_body_uses_reason_phrase() {
        let msg = error_message(StatusCode::NOT_FOUND, "");
        assert_eq!(msg, "Not Found");
    }

    #[test]
    fn display_includes_status() {
        let err = Error::Api {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "bad airport".into(),
        };
        let text = err.to_string();
        assert!(text.contains("422"));
        assert!(text.contains("bad airport"));
    }
}
