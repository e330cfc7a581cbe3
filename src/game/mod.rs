//! Hangman state machine
//!
//! Pure, synchronous and free of platform dependencies:
//! - Input normalization (words, letters, key names)
//! - Round state with derived pattern / win / lose
//! - No storage or rendering here; see `app` for side effects

pub mod state;
pub mod word;

pub use state::{GameState, GamePhase, GuessOutcome};
pub use word::{normalize_key, normalize_letter, normalize_word};
