//! Loosely-shaped failure values and the message extraction chain.
//!
//! A failed call may or may not have reached the backend, and the backend may
//! or may not have answered with a JSON error payload. [`ErrorInfo`] models
//! every one of those shapes with optional fields so extraction can walk a
//! fixed priority chain without ever failing.

use serde_json::{Map, Value};

/// Fallback text for transport failures that carry nothing more specific.
pub const NETWORK_ERROR_MESSAGE: &str = "网络错误";

/// Fallback used by [`crate::format_error_message`].
pub const DEFAULT_ERROR_MESSAGE: &str = "操作失败";

/// A failure value as seen by the reporting layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorInfo {
    /// Present when the backend answered at all.
    pub response: Option<ResponseInfo>,
    /// Transport-level description, e.g. `Request failed with status code 500`.
    pub message: Option<String>,
}

/// The part of a failed exchange that came back from the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseInfo {
    pub status: Option<u16>,
    pub data: Option<ResponseData>,
}

/// Decoded response body of a failed call.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    /// A JSON object, possibly carrying `detail` and/or `message`.
    Structured(ErrorPayload),
    /// A plain string body (non-JSON text, or a JSON string).
    Text(String),
    /// Any other JSON value (arrays, numbers, booleans).
    Opaque(Value),
}

/// The recognised fields of a backend error object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorPayload {
    pub detail: Option<String>,
    pub message: Option<String>,
}

impl ErrorPayload {
    /// Picks `detail` and `message` out of a JSON object.
    ///
    /// Non-string values (FastAPI validation errors put a list in `detail`)
    /// are kept as their compact JSON rendering; `false` and `0` count as absent.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            detail: map.get("detail").and_then(field_text),
            message: map.get("message").and_then(field_text),
        }
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl ResponseData {
    /// Classifies a raw response body. Returns `None` for an empty body or JSON `null`.
    pub fn from_body(body: &str) -> Option<Self> {
        if body.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => Some(Self::Structured(ErrorPayload::from_map(&map))),
            Ok(Value::String(s)) => Some(Self::Text(s)),
            Ok(Value::Null) => None,
            Ok(other) => Some(Self::Opaque(other)),
            Err(_) => Some(Self::Text(body.to_string())),
        }
    }
}

impl ErrorInfo {
    /// A failure that never reached the backend.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            response: None,
            message: Some(message.into()),
        }
    }

    /// A failure the backend answered with `status` and an optional body.
    pub fn from_response(status: u16, data: Option<ResponseData>) -> Self {
        Self {
            response: Some(ResponseInfo {
                status: Some(status),
                data,
            }),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Returns the most specific message available in `error`.
///
/// Priority: response `detail`, response `message`, a plain-string response
/// body, the error's own `message`, then `default_message`. Empty strings
/// count as absent at every step.
pub fn extract_error_message(error: &ErrorInfo, default_message: &str) -> String {
    if let Some(data) = error.response.as_ref().and_then(|r| r.data.as_ref()) {
        match data {
            ResponseData::Structured(payload) => {
                if let Some(detail) = non_empty(&payload.detail) {
                    return detail.to_string();
                }
                if let Some(message) = non_empty(&payload.message) {
                    return message.to_string();
                }
            }
            ResponseData::Text(text) if !text.is_empty() => return text.clone(),
            ResponseData::Text(_) | ResponseData::Opaque(_) => {}
        }
    }

    non_empty(&error.message)
        .unwrap_or(default_message)
        .to_string()
}

/// HTTP status of the response, if the backend answered. Status `0` counts as absent.
pub fn get_error_status(error: &ErrorInfo) -> Option<u16> {
    error
        .response
        .as_ref()
        .and_then(|r| r.status)
        .filter(|status| *status != 0)
}

/// True when `error` carries exactly `status_code`.
pub fn is_http_error(error: &ErrorInfo, status_code: u16) -> bool {
    get_error_status(error) == Some(status_code)
}
