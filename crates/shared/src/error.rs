//! Shared error types.

use serde::Deserialize;
use thiserror::Error;

/// Fallback shown when login fails without a server-provided reason.
pub const LOGIN_FALLBACK: &str = "Invalid email or password";

/// Fallback shown when registration fails without a server-provided reason.
pub const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";

/// API error type for client-side use
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

impl ApiError {
    /// Decode the validation body of a non-2xx response.
    ///
    /// Non-HTTP errors and bodies that are not JSON objects yield empty errors.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            ApiError::Http { body, .. } => serde_json::from_str(body).unwrap_or_default(),
            _ => FieldErrors::default(),
        }
    }
}

/// Validation errors returned by the auth endpoints.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FieldErrors {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub email: Vec<String>,
    #[serde(default)]
    pub password: Vec<String>,
    #[serde(default)]
    pub phone: Vec<String>,
    #[serde(default)]
    pub non_field_errors: Vec<String>,
}

impl FieldErrors {
    fn detail(&self) -> Option<&str> {
        self.detail.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Message for a failed login form.
    pub fn login_message(&self) -> String {
        self.detail().unwrap_or(LOGIN_FALLBACK).to_string()
    }

    /// Message for a failed registration form: the first field error wins.
    pub fn register_message(&self) -> String {
        self.email
            .first()
            .or_else(|| self.password.first())
            .or_else(|| self.phone.first())
            .or_else(|| self.non_field_errors.first())
            .map(String::as_str)
            .or_else(|| self.detail())
            .unwrap_or(REGISTER_FALLBACK)
            .to_string()
    }
}

/// Why an inbound frame was dropped.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("frame is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("frame has an unrecognized shape")]
    Unrecognized,
    #[error("failed to encode frame: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Failures inside a socket transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("failed to open socket to {url}: {reason}")]
    Connect { url: String, reason: String },
    #[error("socket is not open")]
    NotReady,
    #[error("send failed: {0}")]
    Send(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(body: &str) -> ApiError {
        ApiError::Http {
            status: 400,
            body: body.to_string(),
        }
    }

    #[test]
    fn login_message_prefers_detail() {
        let err = http(r#"{"detail":"Account locked"}"#);
        assert_eq!(err.field_errors().login_message(), "Account locked");
        assert_eq!(http("{}").field_errors().login_message(), LOGIN_FALLBACK);
        assert_eq!(
            ApiError::Network("offline".into()).field_errors().login_message(),
            LOGIN_FALLBACK
        );
    }

    #[test]
    fn register_message_walks_fields_in_order() {
        let err = http(r#"{"password":["Too short."],"email":["Already taken."],"detail":"x"}"#);
        assert_eq!(err.field_errors().register_message(), "Already taken.");

        let err = http(r#"{"password":["Too short."],"detail":"x"}"#);
        assert_eq!(err.field_errors().register_message(), "Too short.");

        let err = http(r#"{"detail":"Server said no"}"#);
        assert_eq!(err.field_errors().register_message(), "Server said no");

        assert_eq!(http("<html>502</html>").field_errors().register_message(), REGISTER_FALLBACK);
    }

    #[test]
    fn display_matches_variant() {
        assert_eq!(http("boom").to_string(), "HTTP 400: boom");
        assert_eq!(ApiError::Deserialize("eof".into()).to_string(), "Deserialization error: eof");
    }
}
