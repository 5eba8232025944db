//! In-memory source of truth for conversations, the active pointer, and the
//! pinned set.
//!
//! The store is a plain struct with synchronous mutations; the view wraps it
//! in an `RwSignal` and persists after each change. Keeping it free of
//! reactive and browser types lets the whole lifecycle run under native
//! `cargo test`.

use contracts::chat::{Conversation, FileAttachment, Message};

/// Placeholder title until the first user message derives a real one.
pub const DEFAULT_TITLE: &str = "New Chat";

/// Characters of the first user message used for the auto-derived title.
const TITLE_MAX_CHARS: usize = 30;

/// Unpinned conversations shown in the sidebar before the "show all" toggle.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    pub conversations: Vec<Conversation>,
    pub active_id: Option<String>,
    pub pinned: Vec<String>,
}

impl ConversationStore {
    /// Rebuild the store from persisted state, repairing invariants the
    /// storage cannot guarantee: a dangling active pointer is reassigned to
    /// the most recently updated conversation, and pinned ids that no longer
    /// resolve are dropped.
    pub fn from_parts(
        conversations: Vec<Conversation>,
        active_id: Option<String>,
        pinned: Vec<String>,
    ) -> Self {
        let mut store = Self {
            conversations,
            active_id: None,
            pinned: Vec::new(),
        };
        store.pinned = pinned
            .into_iter()
            .filter(|id| store.get(id).is_some())
            .collect();
        store.active_id = match active_id {
            Some(id) if store.get(&id).is_some() => Some(id),
            _ => store.most_recent_id(),
        };
        store
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }

    pub fn active(&self) -> Option<&Conversation> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn is_pinned(&self, id: &str) -> bool {
        self.pinned.iter().any(|p| p == id)
    }

    fn most_recent_id(&self) -> Option<String> {
        self.conversations
            .iter()
            .max_by_key(|c| c.updated_at)
            .map(|c| c.id.clone())
    }

    /// Create a conversation seeded with the localized assistant welcome
    /// message and make it active. Returns the new id.
    pub fn create_conversation(&mut self, language: &str, welcome: &str) -> String {
        let mut conv = Conversation::new(DEFAULT_TITLE, language);
        conv.messages.push(Message::new(welcome, false));
        let id = conv.id.clone();
        self.conversations.insert(0, conv);
        self.active_id = Some(id.clone());
        id
    }

    /// Return the active conversation id, creating a conversation first when
    /// the pointer is unset or dangling. Callers run this before any append
    /// so a desynchronized pointer is repaired as a visible step.
    pub fn ensure_active_conversation(&mut self, language: &str, welcome: &str) -> String {
        match self.active_id.clone() {
            Some(id) if self.get(&id).is_some() => id,
            _ => self.create_conversation(language, welcome),
        }
    }

    /// Append a message at the tail of a conversation. Returns the created
    /// message, or `None` when the conversation id is unknown.
    ///
    /// The first user message appended while the title is still the
    /// placeholder derives the title from its content.
    pub fn append_message(
        &mut self,
        conversation_id: &str,
        is_user: bool,
        content: &str,
        attachment: Option<FileAttachment>,
    ) -> Option<Message> {
        let conv = self.get_mut(conversation_id)?;
        let message = match attachment {
            Some(att) => Message::with_attachment(content, is_user, att),
            None => Message::new(content, is_user),
        };
        if is_user && conv.title == DEFAULT_TITLE {
            conv.title = derive_title(content);
        }
        conv.messages.push(message.clone());
        conv.updated_at = message.timestamp;
        Some(message)
    }

    /// Remove a conversation, prune it from the pinned set, and reassign the
    /// active pointer when it pointed at the victim. Returns the new active
    /// id; `None` means no conversations remain and the caller should show
    /// the language selection screen.
    pub fn delete_conversation(&mut self, id: &str) -> Option<String> {
        self.conversations.retain(|c| c.id != id);
        self.pinned.retain(|p| p != id);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = self.most_recent_id();
        }
        self.active_id.clone()
    }

    /// Drop everything. The caller clears persisted keys and creates a fresh
    /// conversation for the current language.
    pub fn delete_all(&mut self) {
        self.conversations.clear();
        self.pinned.clear();
        self.active_id = None;
    }

    /// Rename a conversation. Empty or whitespace-only titles are a no-op.
    pub fn rename_conversation(&mut self, id: &str, new_title: &str) -> bool {
        let title = new_title.trim();
        if title.is_empty() {
            return false;
        }
        let now = chrono::Utc::now();
        match self.get_mut(id) {
            Some(conv) => {
                conv.title = title.to_string();
                conv.updated_at = now;
                true
            }
            None => false,
        }
    }

    /// Pin when absent, unpin when present. Does not touch `updated_at`.
    pub fn toggle_pin(&mut self, id: &str) {
        if self.is_pinned(id) {
            self.pinned.retain(|p| p != id);
        } else if self.get(id).is_some() {
            self.pinned.push(id.to_string());
        }
    }

    /// Remove exactly one message by id; refreshes `updated_at`.
    pub fn delete_message(&mut self, conversation_id: &str, message_id: &str) -> bool {
        let now = chrono::Utc::now();
        let Some(conv) = self.get_mut(conversation_id) else {
            return false;
        };
        let before = conv.messages.len();
        conv.messages.retain(|m| m.id != message_id);
        if conv.messages.len() == before {
            return false;
        }
        conv.updated_at = now;
        true
    }

    /// Most recent user message of the active conversation, used by
    /// regenerate.
    pub fn last_user_message(&self) -> Option<&Message> {
        self.active()?.messages.iter().rev().find(|m| m.is_user)
    }

    /// Sidebar view of the store: `(pinned, unpinned)`, each sorted by
    /// `updated_at` descending, filtered by a case-insensitive search over
    /// titles and message bodies.
    pub fn partition(&self, query: &str) -> (Vec<Conversation>, Vec<Conversation>) {
        let needle = query.trim().to_lowercase();
        let mut visible: Vec<Conversation> = self
            .conversations
            .iter()
            .filter(|c| {
                needle.is_empty()
                    || c.title.to_lowercase().contains(&needle)
                    || c.messages
                        .iter()
                        .any(|m| m.content.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        visible.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        visible.into_iter().partition(|c| self.is_pinned(&c.id))
    }
}

fn derive_title(content: &str) -> String {
    let truncated: String = content.chars().take(TITLE_MAX_CHARS).collect();
    if content.chars().count() > TITLE_MAX_CHARS {
        format!("{truncated}...")
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn store_with_welcome() -> (ConversationStore, String) {
        let mut store = ConversationStore::default();
        let id = store.create_conversation("en", "Welcome to Aria");
        (store, id)
    }

    #[test]
    fn create_seeds_welcome_and_activates() {
        let (store, id) = store_with_welcome();
        let conv = store.get(&id).unwrap();
        assert_eq!(conv.title, DEFAULT_TITLE);
        assert_eq!(conv.language, "en");
        assert_eq!(conv.messages.len(), 1);
        assert!(!conv.messages[0].is_user);
        assert_eq!(store.active_id.as_deref(), Some(id.as_str()));
    }

    #[test]
    fn append_preserves_submission_order() {
        let (mut store, id) = store_with_welcome();
        for i in 0..10 {
            store.append_message(&id, i % 2 == 0, &format!("msg {i}"), None);
        }
        let contents: Vec<&str> = store.get(&id).unwrap().messages[1..]
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        let expected: Vec<String> = (0..10).map(|i| format!("msg {i}")).collect();
        assert_eq!(contents, expected);
    }

    #[test]
    fn append_to_unknown_conversation_returns_none() {
        let (mut store, _) = store_with_welcome();
        assert!(store.append_message("no-such-id", true, "hi", None).is_none());
    }

    #[test]
    fn short_first_user_message_becomes_title_verbatim() {
        let (mut store, id) = store_with_welcome();
        store.append_message(&id, true, "Hello", None);
        assert_eq!(store.get(&id).unwrap().title, "Hello");
    }

    #[test]
    fn long_first_user_message_is_truncated_with_ellipsis() {
        let (mut store, id) = store_with_welcome();
        let long = "a".repeat(45);
        store.append_message(&id, true, &long, None);
        assert_eq!(store.get(&id).unwrap().title, format!("{}...", "a".repeat(30)));
    }

    #[test]
    fn title_truncation_respects_char_boundaries() {
        let (mut store, id) = store_with_welcome();
        let long = "申".repeat(40);
        store.append_message(&id, true, &long, None);
        assert_eq!(store.get(&id).unwrap().title, format!("{}...", "申".repeat(30)));
    }

    #[test]
    fn second_user_message_does_not_retitle() {
        let (mut store, id) = store_with_welcome();
        store.append_message(&id, true, "first question", None);
        store.append_message(&id, true, "second question", None);
        assert_eq!(store.get(&id).unwrap().title, "first question");
    }

    #[test]
    fn assistant_message_does_not_derive_title() {
        let (mut store, id) = store_with_welcome();
        store.append_message(&id, false, "an assistant reply", None);
        assert_eq!(store.get(&id).unwrap().title, DEFAULT_TITLE);
    }

    #[test]
    fn renamed_conversation_keeps_title_on_first_user_message() {
        let (mut store, id) = store_with_welcome();
        assert!(store.rename_conversation(&id, "Visa checklist"));
        store.append_message(&id, true, "what documents do I need?", None);
        assert_eq!(store.get(&id).unwrap().title, "Visa checklist");
    }

    #[test]
    fn rename_with_whitespace_is_a_noop() {
        let (mut store, id) = store_with_welcome();
        assert!(!store.rename_conversation(&id, "   "));
        assert_eq!(store.get(&id).unwrap().title, DEFAULT_TITLE);
    }

    #[test]
    fn ensure_active_repairs_dangling_pointer() {
        let (mut store, id) = store_with_welcome();
        store.active_id = Some("dangling".to_string());
        let ensured = store.ensure_active_conversation("en", "Welcome to Aria");
        assert_ne!(ensured, id);
        assert!(store.get(&ensured).is_some());
        assert_eq!(store.conversations.len(), 2);
    }

    #[test]
    fn ensure_active_keeps_valid_pointer() {
        let (mut store, id) = store_with_welcome();
        assert_eq!(store.ensure_active_conversation("en", "w"), id);
        assert_eq!(store.conversations.len(), 1);
    }

    #[test]
    fn deleting_active_promotes_most_recently_updated() {
        let mut store = ConversationStore::default();
        let a = store.create_conversation("en", "w");
        let b = store.create_conversation("en", "w");
        let c = store.create_conversation("en", "w");
        let now = Utc::now();
        store.get_mut(&a).unwrap().updated_at = now - Duration::minutes(5);
        store.get_mut(&b).unwrap().updated_at = now;
        store.get_mut(&c).unwrap().updated_at = now - Duration::minutes(1);

        store.active_id = Some(c.clone());
        let new_active = store.delete_conversation(&c);
        assert_eq!(new_active.as_deref(), Some(b.as_str()));
    }

    #[test]
    fn deleting_inactive_keeps_active_pointer() {
        let mut store = ConversationStore::default();
        let a = store.create_conversation("en", "w");
        let b = store.create_conversation("en", "w");
        store.active_id = Some(b.clone());
        store.delete_conversation(&a);
        assert_eq!(store.active_id.as_deref(), Some(b.as_str()));
    }

    #[test]
    fn deleting_last_conversation_returns_to_language_selection_state() {
        let (mut store, id) = store_with_welcome();
        assert_eq!(store.delete_conversation(&id), None);
        assert!(store.conversations.is_empty());
        assert!(store.active_id.is_none());
    }

    #[test]
    fn delete_all_then_create_leaves_exactly_one_conversation() {
        let (mut store, _) = store_with_welcome();
        store.create_conversation("en", "w");
        store.delete_all();
        assert!(store.conversations.is_empty());
        assert!(store.pinned.is_empty());
        assert!(store.active_id.is_none());

        let id = store.create_conversation("en", "Welcome to Aria");
        assert_eq!(store.conversations.len(), 1);
        assert_eq!(store.active_id.as_deref(), Some(id.as_str()));
    }

    #[test]
    fn deleting_pinned_conversation_prunes_pinned_set() {
        let (mut store, id) = store_with_welcome();
        store.toggle_pin(&id);
        assert!(store.is_pinned(&id));
        store.delete_conversation(&id);
        assert!(store.pinned.is_empty());
    }

    #[test]
    fn toggle_pin_is_set_like_and_skips_unknown_ids() {
        let (mut store, id) = store_with_welcome();
        store.toggle_pin(&id);
        store.toggle_pin("unknown");
        assert_eq!(store.pinned, vec![id.clone()]);
        store.toggle_pin(&id);
        assert!(store.pinned.is_empty());
    }

    #[test]
    fn toggle_pin_does_not_touch_updated_at() {
        let (mut store, id) = store_with_welcome();
        let before = store.get(&id).unwrap().updated_at;
        store.toggle_pin(&id);
        assert_eq!(store.get(&id).unwrap().updated_at, before);
    }

    #[test]
    fn delete_message_removes_exactly_one() {
        let (mut store, id) = store_with_welcome();
        let m1 = store.append_message(&id, true, "one", None).unwrap();
        store.append_message(&id, false, "two", None).unwrap();
        assert!(store.delete_message(&id, &m1.id));
        let conv = store.get(&id).unwrap();
        assert_eq!(conv.messages.len(), 2); // welcome + "two"
        assert!(conv.messages.iter().all(|m| m.id != m1.id));
        assert!(!store.delete_message(&id, &m1.id));
    }

    #[test]
    fn partition_sorts_pinned_and_unpinned_by_recency() {
        let mut store = ConversationStore::default();
        let a = store.create_conversation("en", "w");
        let b = store.create_conversation("en", "w");
        let now = Utc::now();
        store.get_mut(&a).unwrap().updated_at = now - Duration::minutes(10);
        store.get_mut(&b).unwrap().updated_at = now;
        store.toggle_pin(&a);
        store.toggle_pin(&b);

        let (pinned, unpinned) = store.partition("");
        assert!(unpinned.is_empty());
        let ids: Vec<&str> = pinned.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec![b.as_str(), a.as_str()]);
    }

    #[test]
    fn partition_searches_titles_and_message_bodies() {
        let mut store = ConversationStore::default();
        let a = store.create_conversation("en", "w");
        let b = store.create_conversation("en", "w");
        store.append_message(&a, true, "Tell me about Oxford", None);
        store.rename_conversation(&b, "Scholarships");

        let (_, found) = store.partition("oxford");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, a);

        let (_, found) = store.partition("SCHOLAR");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, b);
    }

    #[test]
    fn from_parts_repairs_dangling_state() {
        let mut conv_old = Conversation::new("old", "en");
        let mut conv_new = Conversation::new("new", "en");
        conv_old.updated_at = Utc::now() - Duration::hours(1);
        conv_new.updated_at = Utc::now();
        let new_id = conv_new.id.clone();

        let store = ConversationStore::from_parts(
            vec![conv_old, conv_new],
            Some("gone".to_string()),
            vec!["also-gone".to_string()],
        );
        assert_eq!(store.active_id.as_deref(), Some(new_id.as_str()));
        assert!(store.pinned.is_empty());
    }

    #[test]
    fn scenario_welcome_then_submit_then_reply() {
        let mut store = ConversationStore::default();
        let id = store.create_conversation("en", "Welcome to Aria");
        assert_eq!(store.get(&id).unwrap().messages.len(), 1);
        assert!(!store.get(&id).unwrap().messages[0].is_user);

        store.append_message(&id, true, "Hello", None).unwrap();
        let conv = store.get(&id).unwrap();
        assert_eq!(conv.messages.len(), 2);
        assert_eq!(conv.messages[1].content, "Hello");
        assert!(conv.messages[1].is_user);

        store.append_message(&id, false, "Hi there", None).unwrap();
        let conv = store.get(&id).unwrap();
        assert_eq!(conv.messages[2].content, "Hi there");
        assert!(!conv.messages[2].is_user);
    }

    #[test]
    fn last_user_message_skips_assistant_replies() {
        let (mut store, id) = store_with_welcome();
        store.append_message(&id, true, "question", None);
        store.append_message(&id, false, "answer", None);
        assert_eq!(store.last_user_message().unwrap().content, "question");
    }
}
