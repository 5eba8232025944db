//! Language context for the UI.
//!
//! The current language lives in a context-provided signal; the preference is
//! persisted through the storage adapter whenever it changes.

pub mod translations;

use leptos::prelude::*;

use crate::shared::storage::{BrowserStorage, ConversationStorage};

pub use translations::{supported_languages, translate};

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Clone, Copy)]
pub struct LanguageContext {
    pub language: RwSignal<String>,
}

impl LanguageContext {
    /// Create the context, restoring the persisted preference when present.
    pub fn load() -> Self {
        let storage = ConversationStorage::new(BrowserStorage);
        let code = storage
            .load_language()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        Self {
            language: RwSignal::new(code),
        }
    }

    /// Switch the UI language and persist the preference.
    ///
    /// Existing conversations keep the language they were created with; only
    /// new conversations pick this up.
    pub fn set(&self, code: &str) {
        self.language.set(code.to_string());
        let storage = ConversationStorage::new(BrowserStorage);
        if let Err(e) = storage.save_language(code) {
            log::error!("failed to persist language preference: {e}");
        }
    }

    /// Reactive translation lookup.
    pub fn t(&self, key: &str) -> String {
        translate(&self.language.get(), key)
    }
}

pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().expect("LanguageContext not found")
}
