//! Error taxonomy for calls against the admin REST API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown when the server gives no usable message
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Raw bodies longer than this are not shown to users
const MAX_RAW_MESSAGE_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ошибки обращения к API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never reached the server or no response came back
    #[error("Network error: {0}")]
    Network(String),

    /// 5xx or any other unexpected status
    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// 400/422 with field level messages
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    /// Blocked by a server-side referential rule (e.g. province still has districts)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 401/403
    #[error("Not authorized ({0})")]
    Auth(u16),

    /// Response arrived but could not be decoded
    #[error("Unexpected response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    #[serde(default)]
    errors: Vec<FieldError>,
}

impl ApiError {
    /// Classify a non-success HTTP response
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|b| b.message.clone().or_else(|| b.error.clone()))
            .filter(|m| !m.trim().is_empty())
            .or_else(|| raw_message(body));
        let fields = parsed.map(|b| b.errors).unwrap_or_default();

        match status {
            401 | 403 => ApiError::Auth(status),
            409 => ApiError::Conflict(
                message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            ),
            400 | 422 => ApiError::Validation {
                message: message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
                fields,
            },
            _ => ApiError::Server { status, message },
        }
    }

    /// Human readable message for a transient notification
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Server { message, .. } => message
                .clone()
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            ApiError::Validation { message, fields } => {
                if fields.is_empty() {
                    message.clone()
                } else {
                    let details = fields
                        .iter()
                        .map(|f| format!("{}: {}", f.field, f.message))
                        .collect::<Vec<_>>()
                        .join("; ");
                    format!("{message} ({details})")
                }
            }
            ApiError::Conflict(message) => message.clone(),
            ApiError::Auth(_) => "Your session has expired. Please sign in again.".to_string(),
            ApiError::Decode(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}

fn raw_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty()
        || trimmed.len() > MAX_RAW_MESSAGE_LEN
        || trimmed.starts_with('{')
        || trimmed.starts_with('<')
    {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses() {
        assert_eq!(ApiError::from_response(401, ""), ApiError::Auth(401));
        assert_eq!(ApiError::from_response(403, "{}"), ApiError::Auth(403));
        assert!(ApiError::from_response(401, "").is_auth());
    }

    #[test]
    fn conflict_message_is_kept_verbatim() {
        let err = ApiError::from_response(
            409,
            r#"{"message":"Province still has 3 districts"}"#,
        );
        assert_eq!(err, ApiError::Conflict("Province still has 3 districts".into()));
        assert_eq!(err.user_message(), "Province still has 3 districts");
    }

    #[test]
    fn validation_collects_fields() {
        let err = ApiError::from_response(
            422,
            r#"{"error":"Invalid input","errors":[{"field":"name","message":"required"}]}"#,
        );
        assert_eq!(err.user_message(), "Invalid input (name: required)");
    }

    #[test]
    fn server_error_without_message_falls_back() {
        let err = ApiError::from_response(500, "<html>oops</html>");
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn short_plain_text_body_is_used() {
        let err = ApiError::from_response(502, "Bad gateway");
        assert_eq!(err.user_message(), "Bad gateway");
    }

    #[test]
    fn unknown_client_error_is_a_server_error() {
        let err = ApiError::from_response(404, r#"{"message":"Not found"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                message: Some("Not found".into())
            }
        );
    }
}
