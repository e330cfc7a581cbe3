//! Game settings
//!
//! Not persisted: the storage slot is reserved for the secret word. Native
//! builds can override values through environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{PLACEHOLDER, STORAGE_KEY};

/// Overrides the directory holding the native storage file
pub const ENV_DATA_DIR: &str = "HANGMAN_DATA_DIR";
/// Overrides the storage key
pub const ENV_STORAGE_KEY: &str = "HANGMAN_STORAGE_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Key of the single storage slot holding the word
    pub storage_key: String,
    /// Shown in place of letters not yet guessed
    pub placeholder: char,
    /// Directory for the native storage file (`None` = platform default)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            placeholder: PLACEHOLDER,
            data_dir: None,
        }
    }
}

impl Settings {
    /// Apply overrides from an environment lookup; blank values are ignored
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(key) = lookup(ENV_STORAGE_KEY).filter(|v| !v.trim().is_empty()) {
            self.storage_key = key.trim().to_string();
        }
        self
    }

    /// Defaults plus process environment (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let settings = Self::default().with_overrides(|name| std::env::var(name).ok());
        log::debug!("Settings: {:?}", settings);
        settings
    }

    /// Directory for the native storage file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .map(|dir| dir.join("hangman"))
                .unwrap_or_else(|| PathBuf::from(".hangman"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.storage_key, "hangman_word_v1");
        assert_eq!(settings.placeholder, '_');
        assert!(settings.data_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default().with_overrides(|name| match name {
            ENV_DATA_DIR => Some("/tmp/hangman-test".to_string()),
            ENV_STORAGE_KEY => Some(" custom_key ".to_string()),
            _ => None,
        });
        assert_eq!(settings.data_dir, Some(PathBuf::from("/tmp/hangman-test")));
        assert_eq!(settings.storage_key, "custom_key");
    }

    #[test]
    fn test_blank_overrides_ignored() {
        let settings = Settings::default().with_overrides(|_| Some("   ".to_string()));
        assert_eq!(settings, Settings::default());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_explicit_data_dir_wins() {
        let settings = Settings {
            data_dir: Some(PathBuf::from("/srv/hangman")),
            ..Default::default()
        };
        assert_eq!(settings.resolved_data_dir(), PathBuf::from("/srv/hangman"));
    }
}
