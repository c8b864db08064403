use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope carried over a dev transport.
///
/// The `event` name routes the message; `payload` stays untyped until a
/// subscriber claims the event and decodes it into its own type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct HotMessage {
    pub event: String,
    pub payload: Value,
}

impl HotMessage {
    pub fn new(event: impl Into<String>, payload: Value) -> Self {
        Self {
            event: event.into(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hot_message_serialize() {
        let msg = HotMessage::new("app-toggled", json!({"active": true}));
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("app-toggled"));
        assert!(json.contains("active"));
    }

    #[test]
    fn test_hot_message_deserialize() {
        let json = r#"{"event":"custom:refresh","payload":null}"#;
        let msg: HotMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.event, "custom:refresh");
        assert!(msg.payload.is_null());
    }
}
