//! Secret word persistence
//!
//! One slot, one plain string: the normalized word. Every storage failure is
//! logged and then treated as "no word"; nothing here returns an error.

use crate::game::normalize_word;
use crate::platform::KeyValueStore;

/// Best-effort load/save/clear of the secret word
#[derive(Debug)]
pub struct WordStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> WordStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Underlying backend
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Stored word, normalized; empty on absence, failure or junk content
    pub fn load(&self) -> String {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => {
                let word = normalize_word(&raw);
                if word.is_empty() {
                    log::warn!("Ignoring stored word without letters");
                } else {
                    log::info!("Loaded saved word ({} letters)", word.len());
                }
                word
            }
            Ok(None) => {
                log::info!("No saved word found");
                String::new()
            }
            Err(e) => {
                log::warn!("Could not read saved word: {}", e);
                String::new()
            }
        }
    }

    /// Write the normalized form of `word`; empty words are not written
    pub fn save(&mut self, word: &str) {
        let word = normalize_word(word);
        if word.is_empty() {
            return;
        }
        match self.store.set(&self.key, &word) {
            Ok(()) => log::info!("Word saved"),
            Err(e) => log::warn!("Could not save word: {}", e),
        }
    }

    /// Remove the stored word
    pub fn clear(&mut self) {
        match self.store.remove(&self.key) {
            Ok(()) => log::info!("Saved word cleared"),
            Err(e) => log::warn!("Could not clear saved word: {}", e),
        }
    }
}
