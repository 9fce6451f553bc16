//! Error types for the zenlink client.
//!
//! This module defines `ZenlinkError`, the unified error type used throughout
//! the crate for consistent error handling and propagation.
//!
//! # Security
//!
//! All error messages are sanitized to ensure the API token is never leaked
//! in logs or error responses. Use `sanitize_message()` when constructing
//! error messages from external sources.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for all zenlink operations.
///
/// Each variant provides specific context about the failure, enabling
/// meaningful error messages without leaking sensitive information
/// like the API token.
#[derive(Error, Debug)]
pub enum ZenlinkError {
    /// Configuration error - missing or invalid construction parameters.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// A response came back with a status code other than the one the
    /// operation documents as success.
    ///
    /// This is the single failure signal for all remote errors: the
    /// Zendesk API makes no further distinction the client cares about,
    /// so authentication failures, validation failures, and server errors
    /// all surface here with the actual status and body attached.
    #[error("{operation}: unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// The operation that failed (e.g., "POST /tickets.json").
        operation: String,
        /// The HTTP status code actually returned.
        status: StatusCode,
        /// The raw response body, token-sanitized.
        body: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Connection test failed.
    #[error("connection test failed: {message}")]
    ConnectionTest {
        /// Details about why the connection test failed.
        message: String,
    },
}

impl ZenlinkError {
    /// Creates a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ZenlinkError::Config(message.into())
    }

    /// Creates an unexpected-status error for a failed operation.
    pub fn unexpected_status(
        operation: impl Into<String>,
        status: StatusCode,
        body: impl Into<String>,
    ) -> Self {
        ZenlinkError::UnexpectedStatus {
            operation: operation.into(),
            status,
            body: body.into(),
        }
    }

    /// Creates a connection test error.
    pub fn connection_test(message: impl Into<String>) -> Self {
        ZenlinkError::ConnectionTest {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code this error carries, if any.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ZenlinkError::UnexpectedStatus { status, .. } => Some(*status),
            ZenlinkError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Sanitizes an error message to remove any occurrence of the API token.
    ///
    /// This is critical for security - tokens must never appear in logs,
    /// error messages, or responses to users.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `token` - The API token to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the token replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, token: &str) -> String {
        if token.is_empty() {
            return message.to_string();
        }
        message.replace(token, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    ///
    /// Use this when you need to include error details in logs or responses
    /// and want to ensure no sensitive data is leaked.
    #[must_use]
    pub fn sanitized_display(&self, token: &str) -> String {
        Self::sanitize_message(&self.to_string(), token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = ZenlinkError::invalid_config("email must not be empty");
        assert_eq!(
            err.to_string(),
            "configuration error: email must not be empty"
        );
    }

    #[test]
    fn test_unexpected_status_display() {
        let err = ZenlinkError::unexpected_status(
            "GET /ticket_fields.json",
            StatusCode::FORBIDDEN,
            r#"{"error":"Forbidden"}"#,
        );
        let msg = err.to_string();
        assert!(msg.contains("GET /ticket_fields.json"));
        assert!(msg.contains("403"));
        assert!(msg.contains("Forbidden"));
    }

    #[test]
    fn test_status_accessor() {
        let err = ZenlinkError::unexpected_status("op", StatusCode::NOT_FOUND, "");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

        let err = ZenlinkError::invalid_config("bad");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_sanitize_message_removes_token() {
        let token = "super_secret_token_12345";
        let message = format!("Error connecting with token {} to server", token);
        let sanitized = ZenlinkError::sanitize_message(&message, token);
        assert!(!sanitized.contains(token));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_token() {
        let message = "Some error message";
        let sanitized = ZenlinkError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_sanitize_message_no_match() {
        let message = "Some error message";
        let sanitized = ZenlinkError::sanitize_message(message, "not_present");
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_sanitized_display() {
        let err = ZenlinkError::unexpected_status(
            "POST /uploads.json",
            StatusCode::INTERNAL_SERVER_ERROR,
            "token tok123 rejected",
        );
        let sanitized = err.sanitized_display("tok123");
        assert!(!sanitized.contains("tok123"));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_connection_test_error() {
        let err = ZenlinkError::connection_test("Could not reach server");
        let msg = err.to_string();
        assert!(msg.contains("connection test failed"));
        assert!(msg.contains("Could not reach server"));
    }
}
