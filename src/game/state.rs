//! Game state and round transitions
//!
//! `GameState` holds only the secret word, the guessed letters and the wrong
//! counter. Everything else (pattern, win/lose, phase) is derived on read.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::word::{normalize_letter, normalize_word};
use crate::consts::{MAX_WRONG, PLACEHOLDER};

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// No secret word has been set
    NoWord,
    /// Word set, guesses accepted
    InProgress,
    /// Every letter revealed
    Won,
    /// Ran out of tries
    Lost,
}

impl GamePhase {
    /// Won and Lost stop further guesses
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Result of a guess, for logging and feedback only.
///
/// All rejected input collapses into `Ignored`; callers cannot tell a repeated
/// letter from a guess made after the round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    Ignored,
}

/// Complete round state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawGameState")]
pub struct GameState {
    /// Normalized secret word (empty = no word)
    word: String,
    /// Letters tried this round
    guessed: BTreeSet<char>,
    /// Guessed letters absent from the word
    wrong: u8,
}

/// Unchecked serialized form; `wrong` is recomputed rather than trusted
#[derive(Deserialize)]
struct RawGameState {
    #[serde(default)]
    word: String,
    #[serde(default)]
    guessed: Vec<char>,
}

impl From<RawGameState> for GameState {
    fn from(raw: RawGameState) -> Self {
        let mut state = GameState::new(&raw.word);
        if !state.has_word() {
            return state;
        }
        state.guessed = raw.guessed.into_iter().filter_map(normalize_letter).collect();
        let misses = state
            .guessed
            .iter()
            .filter(|c| !state.word.contains(**c))
            .count();
        state.wrong = misses.min(MAX_WRONG as usize) as u8;
        state
    }
}

impl GameState {
    /// Start a round with `word` (normalized; may end up empty)
    pub fn new(word: &str) -> Self {
        Self {
            word: normalize_word(word),
            guessed: BTreeSet::new(),
            wrong: 0,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn has_word(&self) -> bool {
        !self.word.is_empty()
    }

    pub fn wrong(&self) -> u8 {
        self.wrong
    }

    /// Tries remaining before the round is lost
    pub fn tries_left(&self) -> u8 {
        MAX_WRONG.saturating_sub(self.wrong)
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Guessed letters in alphabetical order
    pub fn guessed_sorted(&self) -> Vec<char> {
        self.guessed.iter().copied().collect()
    }

    /// True if `letter` was guessed and appears in the word
    pub fn is_correct_guess(&self, letter: char) -> bool {
        self.is_guessed(letter) && self.word.contains(letter)
    }

    /// True if `letter` was guessed and is missing from the word
    pub fn is_wrong_guess(&self, letter: char) -> bool {
        self.has_word() && self.is_guessed(letter) && !self.word.contains(letter)
    }

    /// Per-position view of the word: `Some(letter)` once guessed
    pub fn revealed(&self) -> Vec<Option<char>> {
        self.word
            .chars()
            .map(|c| self.guessed.contains(&c).then_some(c))
            .collect()
    }

    /// Revealed pattern using the default placeholder
    pub fn revealed_pattern(&self) -> Vec<char> {
        self.revealed_with(PLACEHOLDER)
    }

    /// Revealed pattern with a custom placeholder for hidden positions
    pub fn revealed_with(&self, placeholder: char) -> Vec<char> {
        self.revealed()
            .into_iter()
            .map(|slot| slot.unwrap_or(placeholder))
            .collect()
    }

    pub fn is_win(&self) -> bool {
        self.has_word() && self.word.chars().all(|c| self.guessed.contains(&c))
    }

    pub fn is_lose(&self) -> bool {
        self.wrong >= MAX_WRONG
    }

    pub fn phase(&self) -> GamePhase {
        if !self.has_word() {
            GamePhase::NoWord
        } else if self.is_win() {
            GamePhase::Won
        } else if self.is_lose() {
            GamePhase::Lost
        } else {
            GamePhase::InProgress
        }
    }

    /// Replace the word and start a fresh round.
    ///
    /// Returns the normalized word, or `None` (state untouched) when the input
    /// holds no letters.
    pub fn set_word(&mut self, raw: &str) -> Option<&str> {
        let clean = normalize_word(raw);
        if clean.is_empty() {
            return None;
        }
        self.word = clean;
        self.reset_round();
        Some(&self.word)
    }

    /// Forget the word and start a fresh round
    pub fn clear_word(&mut self) {
        self.word.clear();
        self.reset_round();
    }

    /// Clear guesses and the wrong counter, keep the word
    pub fn reset_round(&mut self) {
        self.guessed.clear();
        self.wrong = 0;
    }

    /// Apply one guess.
    ///
    /// Ignored when there is no word, the round is over, the input is not a
    /// letter, or the letter was already tried.
    pub fn guess_letter(&mut self, input: char) -> GuessOutcome {
        let Some(letter) = normalize_letter(input) else {
            return GuessOutcome::Ignored;
        };
        if !self.has_word() || self.phase().is_terminal() || self.guessed.contains(&letter) {
            return GuessOutcome::Ignored;
        }

        self.guessed.insert(letter);
        if self.word.contains(letter) {
            GuessOutcome::Correct
        } else {
            // Clamp
            self.wrong = (self.wrong + 1).min(MAX_WRONG);
            GuessOutcome::Wrong
        }
    }
}
