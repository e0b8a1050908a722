//! Client Errors
//!
//! Every workflow returns `ClientResult`; the UI logs the error and, for
//! a few flows, shows `user_message()` to the user.

use serde::Deserialize;

/// Common result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced a response
    Network(String),
    /// Non-2xx response
    Server { status: u16, message: String },
    /// Response body was not the expected JSON
    Decode(String),
    /// A field the workflow depends on was absent
    MissingPayload(&'static str),
    /// The user dismissed a prompt or confirmation
    Cancelled,
}

/// Error bodies come from three places on the server: handlers
/// (`error`), the token decorator (`message`) and the JWT extension (`msg`).
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
    msg: Option<String>,
}

impl ClientError {
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
        let message = parsed
            .error
            .or(parsed.message)
            .or(parsed.msg)
            .unwrap_or_else(|| {
                let raw = body.trim();
                if raw.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    raw.to_string()
                }
            });
        ClientError::Server { status, message }
    }

    /// Text suitable for an inline error element
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ClientError::Server { status, message } => write!(f, "Server error {}: {}", status, message),
            ClientError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            ClientError::MissingPayload(field) => write!(f, "Missing `{}` in response", field),
            ClientError::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::error::Error for ClientError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_wins() {
        let err = ClientError::from_response(401, r#"{"error":"Invalid credentials"}"#);
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn test_jwt_msg_fallback() {
        let err = ClientError::from_response(401, r#"{"msg":"Missing Authorization Header"}"#);
        assert_eq!(
            err,
            ClientError::Server { status: 401, message: "Missing Authorization Header".into() }
        );
    }

    #[test]
    fn test_non_json_body() {
        assert_eq!(ClientError::from_response(500, "").user_message(), "HTTP 500");
        assert_eq!(ClientError::from_response(404, "<h1>Not Found</h1>").user_message(), "<h1>Not Found</h1>");
    }
}
