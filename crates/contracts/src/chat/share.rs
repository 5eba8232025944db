//! Shareable-link encoding for conversation snapshots.
//!
//! A snapshot is JSON-serialized, percent-encoded, then base64-encoded and
//! placed in the `data` query parameter of a share URL. Decoding reverses all
//! three steps and fails closed on any malformed stage.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::conversation::{Conversation, FileAttachment, Message};

/// Message role inside a shared snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedMessage {
    pub role: ShareRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_attachment: Option<FileAttachment>,
}

/// Reduced conversation form used for share links: title plus message bodies,
/// without ids and timestamps, to keep the URL small.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSnapshot {
    pub name: String,
    pub messages: Vec<SharedMessage>,
}

impl From<&Conversation> for ConversationSnapshot {
    fn from(conv: &Conversation) -> Self {
        Self {
            name: conv.title.clone(),
            messages: conv.messages.iter().map(SharedMessage::from).collect(),
        }
    }
}

impl From<&Message> for SharedMessage {
    fn from(msg: &Message) -> Self {
        Self {
            role: if msg.is_user {
                ShareRole::User
            } else {
                ShareRole::Assistant
            },
            content: msg.content.clone(),
            file_attachment: msg.file_attachment.clone(),
        }
    }
}

/// Encode a snapshot into the opaque string carried by the share URL.
pub fn encode_snapshot(snapshot: &ConversationSnapshot) -> Result<String, String> {
    let json = serde_json::to_string(snapshot)
        .map_err(|e| format!("Failed to serialize snapshot: {e}"))?;
    let encoded = urlencoding::encode(&json);
    Ok(BASE64.encode(encoded.as_bytes()))
}

/// Decode a share payload back into a snapshot.
///
/// Any failure (bad base64, bad percent-encoding, JSON shape mismatch)
/// returns `Err`; callers render the invalid-link screen rather than a
/// partial conversation.
pub fn decode_snapshot(data: &str) -> Result<ConversationSnapshot, String> {
    let bytes = BASE64
        .decode(data)
        .map_err(|e| format!("Invalid base64 payload: {e}"))?;
    let percent_encoded =
        String::from_utf8(bytes).map_err(|e| format!("Payload is not UTF-8: {e}"))?;
    let json = urlencoding::decode(&percent_encoded)
        .map_err(|e| format!("Invalid percent-encoding: {e}"))?;
    serde_json::from_str(&json).map_err(|e| format!("Malformed snapshot: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> ConversationSnapshot {
        ConversationSnapshot {
            name: "Visa questions".into(),
            messages: vec![
                SharedMessage {
                    role: ShareRole::Assistant,
                    content: "Welcome to Aria".into(),
                    file_attachment: None,
                },
                SharedMessage {
                    role: ShareRole::User,
                    content: "Do I need an F-1 visa?".into(),
                    file_attachment: None,
                },
            ],
        }
    }

    #[test]
    fn encode_decode_round_trip() {
        let snapshot = sample_snapshot();
        let encoded = encode_snapshot(&snapshot).unwrap();
        let decoded = decode_snapshot(&encoded).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn round_trip_preserves_non_ascii_content() {
        let mut snapshot = sample_snapshot();
        snapshot.messages[1].content = "大学申请 — وثائق".into();
        let decoded = decode_snapshot(&encode_snapshot(&snapshot).unwrap()).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn decode_rejects_garbage_base64() {
        assert!(decode_snapshot("!!!not-base64!!!").is_err());
    }

    #[test]
    fn decode_rejects_wrong_json_shape() {
        // Valid base64 of valid percent-encoded JSON, but not a snapshot
        let payload = BASE64.encode(urlencoding::encode(r#"{"foo": 1}"#).as_bytes());
        assert!(decode_snapshot(&payload).is_err());
    }

    #[test]
    fn snapshot_from_conversation_maps_roles() {
        let mut conv = Conversation::new("New Chat", "en");
        conv.messages.push(Message::new("hi there", false));
        conv.messages.push(Message::new("hello", true));

        let snapshot = ConversationSnapshot::from(&conv);
        assert_eq!(snapshot.name, "New Chat");
        assert_eq!(snapshot.messages[0].role, ShareRole::Assistant);
        assert_eq!(snapshot.messages[1].role, ShareRole::User);
    }

    #[test]
    fn share_role_serializes_lowercase() {
        let json = serde_json::to_string(&ShareRole::Assistant).unwrap();
        assert_eq!(json, r#""assistant""#);
    }
}
