//! View model
//!
//! Everything the front ends display, derived from the game state and the
//! word panel on every call. Nothing here is cached or stored.

use crate::consts::{ALPHABET, MAX_WRONG};
use crate::game::{GamePhase, GameState};
use crate::renderer::figure::{FigurePart, visible_parts};

/// Word editor panel (presentation state only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPanel {
    /// Text typed into the editor, not yet normalized
    pub draft: String,
    pub visible: bool,
}

impl Default for WordPanel {
    fn default() -> Self {
        Self {
            draft: String::new(),
            visible: true,
        }
    }
}

/// Status banner under the word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// No word yet, prompt to set one
    SetWord,
    Won,
    /// Reveals the word
    Lost { word: String },
}

impl Banner {
    pub fn text(&self) -> String {
        match self {
            Banner::SetWord => "✍️ Set a word above to play.".to_string(),
            Banner::Won => "✅ You win!".to_string(),
            Banner::Lost { word } => format!("💀 You lose. Word was: {}", word),
        }
    }

    /// CSS class for the banner element
    pub fn css_class(&self) -> &'static str {
        match self {
            Banner::Won => "win",
            Banner::SetWord | Banner::Lost { .. } => "lose",
        }
    }
}

/// One on-screen keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyView {
    pub letter: char,
    pub used: bool,
    pub correct: bool,
    pub wrong: bool,
    pub disabled: bool,
}

impl KeyView {
    pub fn css_class(&self) -> String {
        let mut class = String::from("key");
        if self.used {
            class.push_str(" used");
        }
        if self.correct {
            class.push_str(" correct");
        }
        if self.wrong {
            class.push_str(" wrong");
        }
        class
    }
}

/// Word editor panel as displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub visible: bool,
    pub draft: String,
    /// "Set" before a word exists, "Change" after
    pub submit_label: &'static str,
    /// Clear and Reset Game need a word
    pub actions_enabled: bool,
    pub current: String,
    pub toggle_label: &'static str,
}

/// Complete screen contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub phase: GamePhase,
    pub header: String,
    pub slots: Vec<char>,
    pub wrong: u8,
    pub wrong_line: String,
    pub guessed_line: String,
    pub banner: Option<Banner>,
    pub keys: Vec<KeyView>,
    pub figure: Vec<FigurePart>,
    pub panel: PanelView,
    /// "New Game (same word)" availability
    pub reset_enabled: bool,
}

impl View {
    pub fn build(state: &GameState, panel: &WordPanel, placeholder: char) -> Self {
        let phase = state.phase();
        let has_word = state.has_word();

        let header = if has_word {
            format!("Guess the word. You have {} tries left.", state.tries_left())
        } else {
            "Set a word to start playing.".to_string()
        };

        let slots = if has_word {
            state.revealed_with(placeholder)
        } else {
            vec![placeholder]
        };

        let guessed = state.guessed_sorted();
        let guessed_line = if guessed.is_empty() {
            "Guessed: none".to_string()
        } else {
            let letters: Vec<String> = guessed.iter().map(char::to_string).collect();
            format!("Guessed: {}", letters.join(", "))
        };

        let banner = match phase {
            GamePhase::NoWord => Some(Banner::SetWord),
            GamePhase::Won => Some(Banner::Won),
            GamePhase::Lost => Some(Banner::Lost {
                word: state.word().to_string(),
            }),
            GamePhase::InProgress => None,
        };

        let keys = ALPHABET
            .chars()
            .map(|letter| {
                let used = state.is_guessed(letter);
                KeyView {
                    letter,
                    used,
                    correct: state.is_correct_guess(letter),
                    wrong: state.is_wrong_guess(letter),
                    disabled: !has_word || used || phase.is_terminal(),
                }
            })
            .collect();

        let panel = PanelView {
            visible: panel.visible,
            draft: panel.draft.clone(),
            submit_label: if has_word { "Change" } else { "Set" },
            actions_enabled: has_word,
            current: format!(
                "Current: {}",
                if has_word { state.word() } else { "—" }
            ),
            toggle_label: if panel.visible {
                "Hide Word"
            } else {
                "Set / Change Word"
            },
        };

        Self {
            phase,
            header,
            slots,
            wrong: state.wrong(),
            wrong_line: format!("Wrong: {} / {}", state.wrong(), MAX_WRONG),
            guessed_line,
            banner,
            keys,
            figure: visible_parts(state.wrong()),
            panel,
            reset_enabled: has_word,
        }
    }

    /// Slots joined with spaces, e.g. `C _ T`
    pub fn slots_line(&self) -> String {
        let slots: Vec<String> = self.slots.iter().map(char::to_string).collect();
        slots.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLACEHOLDER;

    fn view(state: &GameState) -> View {
        View::build(state, &WordPanel::default(), PLACEHOLDER)
    }

    #[test]
    fn test_no_word_view() {
        let v = view(&GameState::default());
        assert_eq!(v.phase, GamePhase::NoWord);
        assert_eq!(v.header, "Set a word to start playing.");
        assert_eq!(v.slots, vec!['_']);
        assert_eq!(v.banner, Some(Banner::SetWord));
        assert_eq!(v.keys.len(), 26);
        assert!(v.keys.iter().all(|k| k.disabled));
        assert_eq!(v.panel.submit_label, "Set");
        assert_eq!(v.panel.current, "Current: —");
        assert!(!v.panel.actions_enabled);
        assert!(!v.reset_enabled);
    }

    #[test]
    fn test_in_progress_view() {
        let mut state = GameState::new("CAT");
        state.guess_letter('A');
        state.guess_letter('Z');
        let v = view(&state);

        assert_eq!(v.header, "Guess the word. You have 5 tries left.");
        assert_eq!(v.slots_line(), "_ A _");
        assert_eq!(v.wrong_line, "Wrong: 1 / 6");
        assert_eq!(v.guessed_line, "Guessed: A, Z");
        assert_eq!(v.banner, None);
        assert_eq!(v.figure, vec![FigurePart::Head]);

        let a = v.keys[0];
        assert!(a.used && a.correct && !a.wrong && a.disabled);
        assert_eq!(a.css_class(), "key used correct");
        let z = v.keys[25];
        assert!(z.used && z.wrong && !z.correct);
        assert_eq!(z.css_class(), "key used wrong");
        let b = v.keys[1];
        assert!(!b.disabled);
        assert_eq!(b.css_class(), "key");
    }

    #[test]
    fn test_lost_view_reveals_word() {
        let mut state = GameState::new("DOG");
        for c in "XQZJVB".chars() {
            state.guess_letter(c);
        }
        let v = view(&state);
        assert_eq!(
            v.banner,
            Some(Banner::Lost {
                word: "DOG".to_string()
            })
        );
        assert_eq!(v.banner.as_ref().map(Banner::text).unwrap(), "💀 You lose. Word was: DOG");
        assert!(v.keys.iter().all(|k| k.disabled));
        assert_eq!(v.figure.len(), 6);
        assert_eq!(v.header, "Guess the word. You have 0 tries left.");
    }

    #[test]
    fn test_won_view() {
        let mut state = GameState::new("HI");
        state.guess_letter('H');
        state.guess_letter('I');
        let v = view(&state);
        assert_eq!(v.banner, Some(Banner::Won));
        assert_eq!(Banner::Won.css_class(), "win");
        assert!(v.keys.iter().all(|k| k.disabled));
    }

    #[test]
    fn test_panel_labels() {
        let state = GameState::new("CAT");
        let hidden = WordPanel {
            draft: "dr".to_string(),
            visible: false,
        };
        let v = View::build(&state, &hidden, '*');
        assert_eq!(v.panel.toggle_label, "Set / Change Word");
        assert_eq!(v.panel.submit_label, "Change");
        assert_eq!(v.panel.current, "Current: CAT");
        assert_eq!(v.panel.draft, "dr");
        assert_eq!(v.slots, vec!['*', '*', '*']);

        let v = view(&state);
        assert_eq!(v.panel.toggle_label, "Hide Word");
    }
}
