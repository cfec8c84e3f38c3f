//! Item API Errors

use serde::Deserialize;
use thiserror::Error;

/// Shown when the API gives no usable error message
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request failed with status {status}{}", status_suffix(.message))]
    Status { status: u16, message: Option<String> },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Build from a non-success response, keeping the body's `error` field
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: error_field(body),
        }
    }

    /// Text for a notification: the API's own message verbatim, else a generic one
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

fn status_suffix(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {}", message),
        None => String::new(),
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

fn error_field(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_uses_api_error_verbatim() {
        let err = ApiError::from_response(400, r#"{"error":"task required"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: Some("task required".to_string())
            }
        );
        assert_eq!(err.user_message(), "task required");
        assert_eq!(err.to_string(), "Request failed with status 400: task required");
    }

    #[test]
    fn test_user_message_falls_back_to_generic() {
        let cases = [
            ApiError::from_response(500, "<html>oops</html>"),
            ApiError::from_response(404, r#"{"message":"nope"}"#),
            ApiError::from_response(422, r#"{"error":"  "}"#),
            ApiError::Transport("connection refused".to_string()),
            ApiError::Decode("missing field `data`".to_string()),
        ];
        for err in cases {
            assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
        }
        assert_eq!(
            ApiError::from_response(500, "").to_string(),
            "Request failed with status 500"
        );
    }
}
