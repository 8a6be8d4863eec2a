use crate::error::{ApiwongError, Result};
use reqwest::StatusCode;
use serde_json::Value;

/// Fallback message when the server signals a failure without one.
const DEFAULT_FAILURE_MESSAGE: &str = "request failed";

/// The uniform response wrapper used by the apiwong API:
/// `{"code": 200, "message": "success", "data": ..., "timestamp": ...}`.
///
/// Every field is optional. Responses that are not JSON objects (arrays,
/// scalars, non-JSON bodies) simply have no envelope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub data: Option<Value>,
    pub timestamp: Option<i64>,
}

impl Envelope {
    /// Extract envelope fields from a parsed body, field by field, tolerating
    /// the absence or wrong type of any of them. An empty `message` counts as
    /// absent, so fallback messages apply.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        Some(Self {
            code: map.get("code").and_then(Value::as_i64),
            message: map
                .get("message")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
            data: map.get("data").cloned(),
            timestamp: map.get("timestamp").and_then(Value::as_i64),
        })
    }
}

/// Normalize an HTTP response into application data.
///
/// `payload` is the parsed JSON body, or `None` when the body did not parse
/// (an unparsable body is not an error by itself).
///
/// Failure rules, in order:
/// 1. Non-2xx status: the envelope `message` if present, else the status
///    canonical reason.
/// 2. 2xx with an envelope `code` present and != 200: the envelope `message`
///    if present, else a default message.
///
/// On success the envelope `data` is returned when present and non-null;
/// otherwise the whole parsed payload (which may be `Value::Null`).
pub fn normalize(status: StatusCode, payload: Option<Value>) -> Result<Value> {
    let envelope = payload.as_ref().and_then(Envelope::from_value);

    if !status.is_success() {
        let message = envelope
            .and_then(|e| e.message)
            .unwrap_or_else(|| status_text(status));
        return Err(ApiwongError::Transport {
            status: status.as_u16(),
            message,
        });
    }

    if let Some(envelope) = &envelope {
        if let Some(code) = envelope.code {
            if code != 200 {
                let message = envelope
                    .message
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
                return Err(ApiwongError::Api { code, message });
            }
        }
    }

    match envelope.and_then(|e| e.data) {
        Some(data) if !data.is_null() => Ok(data),
        _ => Ok(payload.unwrap_or(Value::Null)),
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unknown status")
        .to_string()
}
