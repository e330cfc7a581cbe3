//! Game controller
//!
//! Owns the round state, the word store and the editor panel, and applies
//! user actions one at a time. Word changes are persisted here.

use crate::game::{GameState, GuessOutcome, normalize_key};
use crate::persistence::WordStore;
use crate::platform::KeyValueStore;
use crate::settings::Settings;
use crate::ui::{View, WordPanel};

/// Everything a front end can ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// On-screen keyboard click
    GuessLetter(char),
    /// Physical key press, by key name (`"a"`, `"Enter"`, ...)
    KeyPress(String),
    /// Editor text changed
    EditDraft(String),
    /// Set/Change button or Enter in the editor
    SubmitDraft,
    /// Set the word directly, bypassing the draft
    SetWord(String),
    ClearWord,
    ResetRound,
    TogglePanel,
}

pub struct App<S> {
    state: GameState,
    words: WordStore<S>,
    panel: WordPanel,
    settings: Settings,
}

impl<S: KeyValueStore> App<S> {
    /// Start with whatever word the store holds
    pub fn new(store: S, settings: Settings) -> Self {
        let words = WordStore::new(store, settings.storage_key.clone());
        let state = GameState::new(&words.load());
        Self {
            state,
            words,
            panel: WordPanel::default(),
            settings,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn panel(&self) -> &WordPanel {
        &self.panel
    }

    pub fn store(&self) -> &S {
        self.words.store()
    }

    pub fn into_store(self) -> S {
        self.words.into_store()
    }

    /// Current screen, rebuilt on every call
    pub fn view(&self) -> View {
        View::build(&self.state, &self.panel, self.settings.placeholder)
    }

    /// Apply one action to completion
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::GuessLetter(letter) => {
                self.guess_letter(letter);
            }
            Action::KeyPress(key) => {
                if let Some(letter) = normalize_key(&key) {
                    self.guess_letter(letter);
                }
            }
            Action::EditDraft(text) => self.panel.draft = text,
            Action::SubmitDraft => self.submit_draft(),
            Action::SetWord(raw) => {
                self.set_word(&raw);
            }
            Action::ClearWord => self.clear_word(),
            Action::ResetRound => self.reset_round(),
            Action::TogglePanel => self.panel.visible = !self.panel.visible,
        }
    }

    /// Normalize and set a new word, persist it, start a fresh round.
    ///
    /// Returns false (nothing changed) when the input has no letters.
    pub fn set_word(&mut self, raw: &str) -> bool {
        let Some(word) = self.state.set_word(raw) else {
            log::debug!("Ignoring blank word");
            return false;
        };
        log::info!("New word set ({} letters)", word.len());
        let word = word.to_string();
        self.words.save(&word);
        true
    }

    /// Erase the stored word and return to the no-word state
    pub fn clear_word(&mut self) {
        self.words.clear();
        self.state.clear_word();
        self.panel.draft.clear();
        self.panel.visible = true;
        log::info!("Word cleared");
    }

    /// New round with the same word
    pub fn reset_round(&mut self) {
        self.state.reset_round();
        log::info!("Round reset");
    }

    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        let outcome = self.state.guess_letter(letter);
        match outcome {
            GuessOutcome::Ignored => {}
            GuessOutcome::Correct | GuessOutcome::Wrong => {
                log::debug!(
                    "Guess {:?}: {:?} (wrong {}, phase {:?})",
                    letter,
                    outcome,
                    self.state.wrong(),
                    self.state.phase()
                );
            }
        }
        outcome
    }

    fn submit_draft(&mut self) {
        let draft = std::mem::take(&mut self.panel.draft);
        if self.set_word(&draft) {
            self.panel.visible = false;
        } else {
            self.panel.draft = draft;
        }
    }
}
