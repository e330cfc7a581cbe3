//! Plain-text rendering for the native front end

use super::figure::ascii_art;
use crate::ui::View;

/// Render the whole screen as lines of text
pub fn render(view: &View) -> Vec<String> {
    let mut lines = vec!["Hangman".to_string(), view.header.clone(), String::new()];

    if view.panel.visible {
        lines.push(format!("[Word] {}", view.panel.current));
        if !view.panel.draft.is_empty() {
            lines.push(format!("       Draft: {}", view.panel.draft));
        }
        lines.push(format!(
            "       :word <text> {}  :clear  :reset",
            view.panel.submit_label.to_lowercase()
        ));
        lines.push(String::new());
    }

    // Figure on the left, status on the right
    let status = [
        view.slots_line(),
        String::new(),
        view.wrong_line.clone(),
        view.guessed_line.clone(),
        String::new(),
        view.banner.as_ref().map(|b| b.text()).unwrap_or_default(),
    ];
    for (i, art) in ascii_art(view.wrong).into_iter().enumerate() {
        match status.get(i) {
            Some(text) if !text.is_empty() => lines.push(format!("{:<10}{}", art, text)),
            _ => lines.push(art),
        }
    }

    lines.push(String::new());
    lines.push(keyboard_line(view));
    lines.push(format!(
        "Type letters to guess. :panel ({})  :quit",
        view.panel.toggle_label
    ));
    lines
}

/// Alphabet with used letters masked
fn keyboard_line(view: &View) -> String {
    view.keys
        .iter()
        .map(|key| {
            if key.correct {
                key.letter.to_string()
            } else if key.wrong {
                "·".to_string()
            } else if key.disabled {
                key.letter.to_ascii_lowercase().to_string()
            } else {
                key.letter.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
