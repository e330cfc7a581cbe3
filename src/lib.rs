//! Hangman - a word-guessing game with a locally saved secret word
//!
//! Core modules:
//! - `game`: State machine (normalization, guesses, win/lose)
//! - `persistence`: Best-effort save/load of the secret word
//! - `platform`: Storage backends (LocalStorage, file, memory)
//! - `app`: Controller applying user actions
//! - `console`: Line-based terminal front end
//! - `ui`: Derived view model
//! - `renderer`: Figure pose and terminal rendering

pub mod app;
pub mod console;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod ui;

pub use app::{Action, App};
pub use game::{GamePhase, GameState, GuessOutcome};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Wrong guesses allowed before the round is lost
    pub const MAX_WRONG: u8 = 6;
    /// Storage slot holding the secret word
    pub const STORAGE_KEY: &str = "hangman_word_v1";
    /// Shown for letters not yet guessed
    pub const PLACEHOLDER: char = '_';
    /// On-screen keyboard letters
    pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
}
