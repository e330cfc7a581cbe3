//! Line-based terminal front end
//!
//! Each input line becomes zero or more `Action`s:
//! - `:word <text>` sets the word, `:clear`, `:reset`, `:panel`, `:quit`
//! - a single character is a key press
//! - other text is typed into the editor and submitted while the panel is
//!   open, otherwise every character is a key press

use std::io::{self, BufRead, Write};

use crate::app::{Action, App};
use crate::platform::KeyValueStore;
use crate::renderer::text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Actions(Vec<Action>),
    Quit,
}

pub fn parse_line(line: &str, panel_visible: bool) -> Command {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix(':') {
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        let actions = match name.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => return Command::Quit,
            "word" | "set" => vec![Action::EditDraft(arg.to_string()), Action::SubmitDraft],
            "clear" => vec![Action::ClearWord],
            "reset" => vec![Action::ResetRound],
            "panel" => vec![Action::TogglePanel],
            _ => {
                log::debug!("Unknown command {:?}", name);
                Vec::new()
            }
        };
        return Command::Actions(actions);
    }

    let keys = || -> Vec<Action> { line.chars().map(|c| Action::KeyPress(c.to_string())).collect() };
    let actions = if line.chars().count() <= 1 || !panel_visible {
        keys()
    } else {
        vec![Action::EditDraft(line.to_string()), Action::SubmitDraft]
    };
    Command::Actions(actions)
}

fn draw<S: KeyValueStore, W: Write>(app: &App<S>, output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    for line in text::render(&app.view()) {
        writeln!(output, "{}", line)?;
    }
    write!(output, "> ")?;
    output.flush()
}

/// Read commands until `:quit` or end of input
pub fn run<S, R, W>(app: &mut App<S>, input: R, mut output: W) -> io::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    draw(app, &mut output)?;
    for line in input.lines() {
        match parse_line(&line?, app.panel().visible) {
            Command::Quit => break,
            Command::Actions(actions) => {
                for action in actions {
                    app.dispatch(action);
                }
            }
        }
        draw(app, &mut output)?;
    }
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::STORAGE_KEY;
    use crate::game::GamePhase;
    use crate::platform::MemoryStore;
    use crate::settings::Settings;

    fn key(c: char) -> Action {
        Action::KeyPress(c.to_string())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line(":quit", true), Command::Quit);
        assert_eq!(parse_line("  :Q  ", false), Command::Quit);
        assert_eq!(
            parse_line(":word  Hello World ", false),
            Command::Actions(vec![
                Action::EditDraft("Hello World".to_string()),
                Action::SubmitDraft
            ])
        );
        assert_eq!(parse_line(":clear", true), Command::Actions(vec![Action::ClearWord]));
        assert_eq!(parse_line(":reset", true), Command::Actions(vec![Action::ResetRound]));
        assert_eq!(parse_line(":panel", true), Command::Actions(vec![Action::TogglePanel]));
        assert_eq!(parse_line(":bogus", true), Command::Actions(vec![]));
    }

    #[test]
    fn test_parse_guesses() {
        assert_eq!(parse_line("a", true), Command::Actions(vec![key('a')]));
        assert_eq!(parse_line("", true), Command::Actions(vec![]));
        assert_eq!(parse_line("ab", false), Command::Actions(vec![key('a'), key('b')]));
    }

    #[test]
    fn test_parse_text_with_panel_open() {
        assert_eq!(
            parse_line("tiger", true),
            Command::Actions(vec![Action::EditDraft("tiger".to_string()), Action::SubmitDraft])
        );
    }

    #[test]
    fn test_run_session() {
        let mut app = App::new(MemoryStore::new(), Settings::default());
        let input = "cat\nc\nxa\nt\n:quit\nz\n";
        let mut output = Vec::new();
        run(&mut app, input.as_bytes(), &mut output).unwrap();

        assert_eq!(app.state().word(), "CAT");
        assert_eq!(app.state().phase(), GamePhase::Won);
        assert_eq!(app.state().wrong(), 1);
        assert_eq!(app.store().get(STORAGE_KEY).unwrap().as_deref(), Some("CAT"));

        let screen = String::from_utf8(output).unwrap();
        assert!(screen.contains("You win!"));
    }

    #[test]
    fn test_run_stops_at_eof() {
        let mut app = App::new(MemoryStore::new(), Settings::default());
        let mut output = Vec::new();
        run(&mut app, ":word dog\n".as_bytes(), &mut output).unwrap();
        assert_eq!(app.state().word(), "DOG");
        assert!(!app.panel().visible);
    }
}
