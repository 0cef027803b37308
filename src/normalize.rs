//! Error-to-message normalization for the UI layer.
//!
//! Anything caught around an API call — a failed HTTP response, a native
//! error, a thrown string — reduces to one human-readable message the UI
//! can show. The reduction is total: it never fails and always returns a
//! non-empty string.

use serde_json::Value;

/// Fallback shown when no specific message can be extracted
pub const DEFAULT_ERROR_MESSAGE: &str = "Ocurrió un error inesperado.";

/// Captured body of a failed HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    /// Body captured as text; may or may not be JSON
    Raw(String),
    /// Body already decoded by the HTTP layer
    Structured(Value),
}

/// A failed HTTP interaction with its captured response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpFailure {
    pub status: Option<u16>,
    pub payload: ResponsePayload,
}

/// Everything a call site can catch, made explicit.
///
/// The variant order is the extraction priority: an HTTP failure's
/// payload wins over a native message, which wins over a plain thrown
/// string; anything else gets the default message.
#[derive(Debug, Clone, PartialEq)]
pub enum CaughtError {
    Http(HttpFailure),
    Native { message: String },
    Text(String),
    Unknown,
}

impl CaughtError {
    /// Capture a failed response from its status and body text
    pub fn from_response_body<B: Into<String>>(status: u16, body: B) -> Self {
        CaughtError::Http(HttpFailure {
            status: Some(status),
            payload: ResponsePayload::Raw(body.into()),
        })
    }

    /// Capture a native error by its display message
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        CaughtError::Native {
            message: error.to_string(),
        }
    }

    /// Map a loose JSON value onto the union.
    ///
    /// Mirrors what dynamic call sites used to catch: an object with a
    /// `response` member is an HTTP failure (its `data` member is the
    /// payload, its `status` the code), an object with a string
    /// `message` is a native error, a JSON string is a thrown string,
    /// anything else is unknown.
    pub fn classify(value: Value) -> Self {
        match value {
            Value::String(text) => CaughtError::Text(text),
            Value::Object(mut members) => {
                if let Some(response) = members.remove("response") {
                    let status = response
                        .get("status")
                        .and_then(Value::as_u64)
                        .map(|status| status as u16);
                    let payload = match response.get("data") {
                        Some(Value::String(body)) => ResponsePayload::Raw(body.clone()),
                        Some(other) => ResponsePayload::Structured(other.clone()),
                        None => ResponsePayload::Structured(Value::Null),
                    };
                    CaughtError::Http(HttpFailure { status, payload })
                } else if let Some(Value::String(message)) = members.remove("message") {
                    CaughtError::Native { message }
                } else {
                    CaughtError::Unknown
                }
            }
            _ => CaughtError::Unknown,
        }
    }
}

impl From<&str> for CaughtError {
    fn from(text: &str) -> Self {
        CaughtError::Text(text.to_string())
    }
}

impl From<String> for CaughtError {
    fn from(text: String) -> Self {
        CaughtError::Text(text)
    }
}

/// Reduce a caught error to a displayable message.
///
/// Total: never fails, always returns a non-empty string. Extracted
/// messages that are empty or whitespace-only count as "no message" and
/// fall through to [`DEFAULT_ERROR_MESSAGE`].
pub fn error_message(error: &CaughtError) -> String {
    error_message_or(error, DEFAULT_ERROR_MESSAGE)
}

/// Like [`error_message`], with a caller-supplied fallback.
///
/// An empty fallback is replaced by [`DEFAULT_ERROR_MESSAGE`] so the
/// non-empty guarantee holds for every input.
pub fn error_message_or(error: &CaughtError, fallback: &str) -> String {
    let fallback = non_empty(fallback).unwrap_or(DEFAULT_ERROR_MESSAGE);

    let extracted = match error {
        CaughtError::Http(failure) => payload_message(&failure.payload),
        CaughtError::Native { message } => non_empty(message).map(str::to_string),
        CaughtError::Text(text) => non_empty(text).map(str::to_string),
        CaughtError::Unknown => None,
    };

    extracted.unwrap_or_else(|| fallback.to_string())
}

/// Extract a message from a captured response payload.
///
/// A raw payload is JSON-parsed first; a parse failure is diagnosed once
/// and treated as "no message".
fn payload_message(payload: &ResponsePayload) -> Option<String> {
    match payload {
        ResponsePayload::Raw(body) => match serde_json::from_str::<Value>(body) {
            Ok(decoded) => structured_message(&decoded),
            Err(parse_error) => {
                tracing::warn!(error = %parse_error, "failed to parse error response payload");
                None
            }
        },
        ResponsePayload::Structured(value) => structured_message(value),
    }
}

fn structured_message(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .and_then(non_empty)
        .map(str::to_string)
}

fn non_empty(text: &str) -> Option<&str> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
