//! Chat socket wire frames.
//!
//! Outbound (client → backend), one per sent message:
//!
//! ```json
//! { "chat_id": "abc" | null, "content": "Hi", "form": null }
//! ```
//!
//! Inbound (backend → client), two recognized shapes:
//!
//! ```json
//! { "type": "chat.created", "chat_id": "abc" }
//! { "ok": true, "message": { "response": { "message": "Hello!" } } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FrameError;

/// Default chat socket endpoint.
pub const DEFAULT_WS_URL: &str = "ws://127.0.0.1:8001/ws/chat";

/// Inbound `type` value announcing a new conversation.
pub const CHAT_CREATED: &str = "chat.created";

/// A user message as transmitted to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutboundFrame {
    pub chat_id: Option<String>,
    pub content: String,
    /// Reserved for structured input; always sent as `null` for now.
    pub form: Option<Value>,
}

impl OutboundFrame {
    pub fn new(chat_id: Option<String>, content: impl Into<String>) -> Self {
        Self {
            chat_id,
            content: content.into(),
            form: None,
        }
    }

    pub fn to_json(&self) -> Result<String, FrameError> {
        serde_json::to_string(self).map_err(FrameError::Encode)
    }
}

/// A recognized frame from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundFrame {
    /// The backend opened a conversation and assigned it an id.
    ChatCreated { chat_id: String },
    /// The assistant answered the last user message.
    Reply { message: String },
}

impl InboundFrame {
    /// Parse a text frame.
    ///
    /// Anything that is not JSON, or JSON of an unknown shape, is an error
    /// the caller is expected to drop.
    pub fn parse(text: &str) -> Result<Self, FrameError> {
        let value: Value = serde_json::from_str(text).map_err(FrameError::Malformed)?;
        Self::from_value(&value).ok_or(FrameError::Unrecognized)
    }

    fn from_value(value: &Value) -> Option<Self> {
        if value.get("type").and_then(Value::as_str) == Some(CHAT_CREATED) {
            if let Some(chat_id) = non_empty_str(value.get("chat_id")) {
                return Some(InboundFrame::ChatCreated {
                    chat_id: chat_id.to_string(),
                });
            }
        }

        if value.get("ok").and_then(Value::as_bool) == Some(true) {
            if let Some(message) = non_empty_str(value.pointer("/message/response/message")) {
                return Some(InboundFrame::Reply {
                    message: message.to_string(),
                });
            }
        }

        None
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn outbound_frame_always_carries_nulls() {
        let frame = OutboundFrame::new(None, "Hi");
        let value: Value = serde_json::from_str(&frame.to_json().unwrap()).unwrap();
        assert_eq!(value, json!({ "chat_id": null, "content": "Hi", "form": null }));

        let frame = OutboundFrame::new(Some("abc".into()), "Hi");
        let value: Value = serde_json::from_str(&frame.to_json().unwrap()).unwrap();
        assert_eq!(value, json!({ "chat_id": "abc", "content": "Hi", "form": null }));
    }

    #[test]
    fn parses_chat_created() {
        let frame = InboundFrame::parse(r#"{"type":"chat.created","chat_id":"abc"}"#).unwrap();
        assert_eq!(frame, InboundFrame::ChatCreated { chat_id: "abc".into() });
    }

    #[test]
    fn parses_reply_with_extra_fields() {
        let text = json!({
            "ok": true,
            "message": { "response": { "message": "Hello!", "sources": [] }, "id": 7 },
            "trace": "x"
        })
        .to_string();
        assert_eq!(
            InboundFrame::parse(&text).unwrap(),
            InboundFrame::Reply { message: "Hello!".into() }
        );
    }

    #[test]
    fn rejects_garbage_and_unknown_shapes() {
        assert!(matches!(InboundFrame::parse("not json"), Err(FrameError::Malformed(_))));
        assert!(matches!(
            InboundFrame::parse(r#"{"type":"pong"}"#),
            Err(FrameError::Unrecognized)
        ));
        assert!(matches!(
            InboundFrame::parse(r#"{"ok":false,"message":{"response":{"message":"nope"}}}"#),
            Err(FrameError::Unrecognized)
        ));
        assert!(matches!(
            InboundFrame::parse(r#"{"type":"chat.created","chat_id":""}"#),
            Err(FrameError::Unrecognized)
        ));
        assert!(matches!(
            InboundFrame::parse(r#"{"ok":true,"message":"flat"}"#),
            Err(FrameError::Unrecognized)
        ));
    }
}
