//! Durable key-value persistence for conversation state.
//!
//! All persistence goes through the [`KeyValueStore`] trait so the chat logic
//! can be exercised against an in-memory fake in tests. The browser
//! implementation sits on localStorage; write failures (quota, disabled
//! storage) are reported to the caller but never block a mutation, and the
//! in-memory store stays authoritative for the rest of the session.

use std::cell::RefCell;
use std::collections::HashMap;

use contracts::chat::Conversation;

pub const CONVERSATIONS_KEY: &str = "aria-conversations";
pub const ACTIVE_CONVERSATION_KEY: &str = "aria-active-conversation";
pub const PINNED_CONVERSATIONS_KEY: &str = "aria-pinned-conversations";
pub const LANGUAGE_KEY: &str = "aria-language";

/// Minimal synchronous string-keyed store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// localStorage-backed store used in the browser.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn raw(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.raw()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = self.raw().ok_or("localStorage is not available")?;
        storage
            .set_item(key, value)
            .map_err(|_| format!("failed to write key {key}"))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.raw() {
            let _ = storage.remove_item(key);
        }
    }
}

/// HashMap-backed store for tests.
#[derive(Default)]
pub struct MemoryStorage {
    data: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.data.borrow_mut().remove(key);
    }
}

/// Persistence adapter for the conversation list, the active-conversation
/// pointer, the pinned set, and the language preference.
///
/// Each aspect lives under its own key so a pin toggle never re-serializes
/// the full message history.
pub struct ConversationStorage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ConversationStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Serialize and write the full conversation list.
    pub fn save_conversations(&self, conversations: &[Conversation]) -> Result<(), String> {
        let raw = serde_json::to_string(conversations)
            .map_err(|e| format!("failed to serialize conversations: {e}"))?;
        self.store.set(CONVERSATIONS_KEY, &raw)
    }

    /// Load the conversation list. Absent or unparsable data is first-run
    /// territory and yields an empty list, never an error.
    pub fn load_conversations(&self) -> Vec<Conversation> {
        let Some(raw) = self.store.get(CONVERSATIONS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                log::error!("discarding corrupted conversation data: {e}");
                Vec::new()
            }
        }
    }

    /// Write the active conversation id, or clear the key entirely for
    /// `None` so no stale pointer survives.
    pub fn save_active_conversation(&self, id: Option<&str>) -> Result<(), String> {
        match id {
            Some(id) => self.store.set(ACTIVE_CONVERSATION_KEY, id),
            None => {
                self.store.remove(ACTIVE_CONVERSATION_KEY);
                Ok(())
            }
        }
    }

    pub fn load_active_conversation(&self) -> Option<String> {
        self.store.get(ACTIVE_CONVERSATION_KEY)
    }

    pub fn save_pinned_conversations(&self, pinned: &[String]) -> Result<(), String> {
        let raw = serde_json::to_string(pinned)
            .map_err(|e| format!("failed to serialize pinned ids: {e}"))?;
        self.store.set(PINNED_CONVERSATIONS_KEY, &raw)
    }

    pub fn load_pinned_conversations(&self) -> Vec<String> {
        self.store
            .get(PINNED_CONVERSATIONS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save_language(&self, code: &str) -> Result<(), String> {
        self.store.set(LANGUAGE_KEY, code)
    }

    pub fn load_language(&self) -> Option<String> {
        self.store.get(LANGUAGE_KEY)
    }

    /// Remove every conversation-related key (used by "delete all chats").
    pub fn clear_conversation_keys(&self) {
        self.store.remove(CONVERSATIONS_KEY);
        self.store.remove(ACTIVE_CONVERSATION_KEY);
        self.store.remove(PINNED_CONVERSATIONS_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::chat::Message;

    fn storage() -> ConversationStorage<MemoryStorage> {
        ConversationStorage::new(MemoryStorage::default())
    }

    #[test]
    fn load_on_first_run_is_empty() {
        let storage = storage();
        assert!(storage.load_conversations().is_empty());
        assert!(storage.load_active_conversation().is_none());
        assert!(storage.load_pinned_conversations().is_empty());
    }

    #[test]
    fn conversations_round_trip() {
        let storage = storage();
        let mut conv = Conversation::new("Scholarships", "en");
        conv.messages.push(Message::new("welcome", false));
        conv.messages.push(Message::new("any deadlines?", true));

        storage.save_conversations(std::slice::from_ref(&conv)).unwrap();
        let loaded = storage.load_conversations();
        assert_eq!(loaded, vec![conv]);
    }

    #[test]
    fn corrupted_conversation_json_is_discarded() {
        let storage = storage();
        storage
            .store
            .set(CONVERSATIONS_KEY, "{not valid json")
            .unwrap();
        assert!(storage.load_conversations().is_empty());
    }

    #[test]
    fn wrong_shape_is_treated_as_empty() {
        let storage = storage();
        storage
            .store
            .set(CONVERSATIONS_KEY, r#"[{"unexpected": true}]"#)
            .unwrap();
        assert!(storage.load_conversations().is_empty());
    }

    #[test]
    fn clearing_active_conversation_removes_the_key() {
        let storage = storage();
        storage.save_active_conversation(Some("conv-1")).unwrap();
        assert_eq!(storage.load_active_conversation().as_deref(), Some("conv-1"));

        storage.save_active_conversation(None).unwrap();
        assert!(storage.load_active_conversation().is_none());
        assert!(storage.store.get(ACTIVE_CONVERSATION_KEY).is_none());
    }

    #[test]
    fn pinned_ids_round_trip() {
        let storage = storage();
        let pinned = vec!["a".to_string(), "b".to_string()];
        storage.save_pinned_conversations(&pinned).unwrap();
        assert_eq!(storage.load_pinned_conversations(), pinned);
    }

    #[test]
    fn delete_all_clears_every_conversation_key() {
        let storage = storage();
        storage
            .save_conversations(&[Conversation::new("x", "en")])
            .unwrap();
        storage.save_active_conversation(Some("x")).unwrap();
        storage
            .save_pinned_conversations(&["x".to_string()])
            .unwrap();

        storage.clear_conversation_keys();
        assert!(storage.load_conversations().is_empty());
        assert!(storage.load_active_conversation().is_none());
        assert!(storage.load_pinned_conversations().is_empty());
    }
}
