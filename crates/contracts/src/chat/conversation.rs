use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single chat message inside a conversation.
///
/// Field names are serialized in camelCase so the persisted JSON matches the
/// shape the web client stores in localStorage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_attachment: Option<FileAttachment>,
}

impl Message {
    pub fn new(content: impl Into<String>, is_user: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            is_user,
            timestamp: Utc::now(),
            file_attachment: None,
        }
    }

    pub fn with_attachment(
        content: impl Into<String>,
        is_user: bool,
        attachment: FileAttachment,
    ) -> Self {
        Self {
            file_attachment: Some(attachment),
            ..Self::new(content, is_user)
        }
    }
}

/// Metadata for a file uploaded to the external CDN and attached to a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    pub file_id: String,
    /// Fully resolved CDN URL, with the filename percent-encoded.
    pub file_url: String,
    pub file_name: String,
    /// MIME type as reported by the browser.
    pub file_type: String,
    /// Size in bytes.
    pub file_size: u64,
}

/// A titled, ordered sequence of messages plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    /// Language code active when the conversation was created.
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(title: impl Into<String>, language: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            messages: Vec::new(),
            language: language.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A UI language available in the language selection screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: String,
    pub name: String,
    pub native_name: String,
}

impl Language {
    pub fn new(code: &str, name: &str, native_name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            native_name: native_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_with_camel_case_keys() {
        let msg = Message::new("Hello", true);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["isUser"], true);
        assert_eq!(json["content"], "Hello");
        // No attachment key when the message carries no file
        assert!(json.get("fileAttachment").is_none());
    }

    #[test]
    fn conversation_round_trips_through_json() {
        let mut conv = Conversation::new("New Chat", "en");
        conv.messages.push(Message::new("welcome", false));
        conv.messages.push(Message::with_attachment(
            "see attached",
            true,
            FileAttachment {
                file_id: "abc".into(),
                file_url: "https://ucarecdn.com/abc/report.pdf".into(),
                file_name: "report.pdf".into(),
                file_type: "application/pdf".into(),
                file_size: 1024,
            },
        ));

        let raw = serde_json::to_string(&conv).unwrap();
        let back: Conversation = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, conv);
    }

    #[test]
    fn timestamps_serialize_as_iso8601_strings() {
        let conv = Conversation::new("New Chat", "en");
        let json = serde_json::to_value(&conv).unwrap();
        let created = json["createdAt"].as_str().unwrap();
        assert!(created.contains('T'), "expected ISO-8601, got {created}");
    }
}
