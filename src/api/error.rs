//! Error types for REST calls.
//!
//! Transport failures and non-2xx responses stay distinct here; the
//! orchestrators collapse both into a failed status with a message.

use thiserror::Error;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Request failed with status code {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected envelope.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// An endpoint URL could not be built from the base URL.
    #[error("Invalid URL: {0}")]
    Url(String),
}

impl ApiError {
    /// HTTP status of the response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Pull a readable message out of a RealWorld error body.
///
/// The backend reports validation failures as
/// `{"errors": {"email or password": ["is invalid"]}}`; each field is
/// rendered as `"<field> <message>"` and fields are joined with `"; "`.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let errors = value.get("errors")?.as_object()?;

    let mut parts = Vec::new();
    for (field, messages) in errors {
        match messages {
            serde_json::Value::Array(items) => {
                for item in items {
                    if let Some(msg) = item.as_str() {
                        parts.push(format!("{} {}", field, msg));
                    }
                }
            }
            serde_json::Value::String(msg) => parts.push(format!("{} {}", field, msg)),
            _ => {}
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_field_messages() {
        let body = r#"{"errors": {"email or password": ["is invalid"]}}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("email or password is invalid")
        );
    }

    #[test]
    fn joins_multiple_messages() {
        let body = r#"{"errors": {"body": ["can't be blank", "is too short"]}}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("body can't be blank; body is too short")
        );
    }

    #[test]
    fn ignores_unrelated_bodies() {
        assert!(extract_error_message("not json").is_none());
        assert!(extract_error_message(r#"{"message": "nope"}"#).is_none());
        assert!(extract_error_message(r#"{"errors": {}}"#).is_none());
    }

    #[test]
    fn status_error_reports_code() {
        let err = ApiError::Status {
            status: 422,
            message: "title can't be blank".into(),
        };
        assert_eq!(err.status(), Some(422));
        assert!(!err.is_unauthorized());
        assert_eq!(
            err.to_string(),
            "Request failed with status code 422: title can't be blank"
        );
    }
}
