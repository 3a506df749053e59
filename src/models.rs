use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub file: String,
}

impl Song {
    pub fn new(id: u32, title: &str, artist: &str, file: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            file: file.to_string(),
        }
    }
}

/// A gesture label posted by the client-side recogniser. The value is
/// opaque to the service and only ever logged and echoed back.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureEvent {
    pub gesture: Value,
}

impl GestureEvent {
    /// Pull the `gesture` member out of an arbitrary JSON payload.
    /// Anything other than an object carrying that key yields `null`.
    pub fn from_payload(payload: Value) -> Self {
        let gesture = match payload {
            Value::Object(mut map) => map.remove("gesture").unwrap_or(Value::Null),
            _ => Value::Null,
        };
        Self { gesture }
    }

    /// Human-readable form for logs: strings print bare, anything else as JSON.
    pub fn label(&self) -> Cow<'_, str> {
        match &self.gesture {
            Value::String(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GestureAck {
    pub status: &'static str,
    pub gesture: Value,
}

impl From<GestureEvent> for GestureAck {
    fn from(event: GestureEvent) -> Self {
        Self {
            status: "success",
            gesture: event.gesture,
        }
    }
}
