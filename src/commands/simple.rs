//! Simple interactive CLI mode
//!
//! Line-oriented version of the terminal UI: each line is one command that
//! edits the session, after which the current state and results are printed.

use crate::config::Settings;
use crate::core::{Classification, Pattern};
use crate::output::print_session;
use crate::search::{SearchDispatcher, SearchReply};
use crate::session::Session;
use colored::Colorize;
use std::io::{self, Write};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    /// Replace the boxes with a pattern; its length becomes the length filter
    Pattern(Pattern),
    /// Cycle each listed keyboard letter once
    Keys(String),
    /// New length field text
    Length(String),
    /// Set (or with `None`, empty) the box at a zero-based index
    SetBox { index: usize, value: Option<char> },
    Clear,
    Show,
    Help,
    Quit,
}

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// State changed; search again. Carries a note for the user, if any
    Search(Option<String>),
    Show,
    Help,
    Quit,
}

/// Parse one input line
///
/// # Errors
///
/// Returns a message describing the problem if the line is not a command
/// or a valid pattern.
pub fn parse_command(line: &str) -> Result<LineCommand, String> {
    let line = line.trim();
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(head, rest)| (head, rest.trim()));

    match head.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(LineCommand::Quit),
        "help" | "?" => Ok(LineCommand::Help),
        "show" => Ok(LineCommand::Show),
        "clear" => Ok(LineCommand::Clear),
        "key" | "keys" if rest.is_empty() => Err("Usage: key <letters>".to_string()),
        "key" | "keys" => Ok(LineCommand::Keys(rest.to_lowercase())),
        "len" | "length" => Ok(LineCommand::Length(rest.to_string())),
        "box" => parse_box(rest),
        _ if rest.is_empty() => line
            .parse::<Pattern>()
            .map(LineCommand::Pattern)
            .map_err(|e| e.to_string()),
        _ => Err(format!("Unknown command '{head}'. Type 'help' for commands.")),
    }
}

fn parse_box(args: &str) -> Result<LineCommand, String> {
    let usage = || "Usage: box <position> <letter|.>".to_string();
    let mut parts = args.split_whitespace();
    let (Some(position), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(usage());
    };

    let index = position
        .parse::<usize>()
        .ok()
        .and_then(|p| p.checked_sub(1))
        .ok_or_else(usage)?;

    let mut chars = value.chars();
    let value = match (chars.next(), chars.next()) {
        (Some('.' | '?' | '_'), None) => None,
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => return Err(usage()),
    };

    Ok(LineCommand::SetBox { index, value })
}

/// Apply a command to the session
#[must_use]
pub fn apply_command(session: &mut Session, command: LineCommand) -> Action {
    match command {
        LineCommand::Pattern(pattern) => {
            session.load_pattern(&pattern);
            Action::Search(None)
        }
        LineCommand::Keys(letters) => {
            let mut skipped = String::new();
            for c in letters.chars() {
                if session.cycle_key(c) == Some(Classification::Inline) {
                    skipped.push(c);
                }
            }
            let note = (!skipped.is_empty())
                .then(|| format!("Skipped letters already in the pattern: {skipped}"));
            Action::Search(note)
        }
        LineCommand::Length(text) => {
            session.set_length_input(&text);
            let note = session
                .length_filter()
                .was_clamped()
                .then(|| format!("Length capped at {}.", session.length_input()));
            Action::Search(note)
        }
        LineCommand::SetBox { index, value } => {
            if index >= session.boxes().len() {
                return Action::Search(Some(format!(
                    "There are only {} boxes.",
                    session.boxes().len()
                )));
            }
            session.set_box(index, value);
            Action::Search(None)
        }
        LineCommand::Clear => {
            session.clear();
            Action::Search(None)
        }
        LineCommand::Show => Action::Show,
        LineCommand::Help => Action::Help,
        LineCommand::Quit => Action::Quit,
    }
}

/// Issue a search for the session and wait until its reply is applied
pub fn search_and_wait(session: &mut Session, dispatcher: &SearchDispatcher) {
    let request = session.next_request();
    let seq = request.seq;

    if let Err(err) = dispatcher.submit(request) {
        session.apply(SearchReply::failed(seq, &err));
        return;
    }

    while session.is_searching() {
        match dispatcher.recv() {
            Ok(reply) => {
                session.apply(reply);
            }
            Err(err) => {
                session.apply(SearchReply::failed(seq, &err));
            }
        }
    }
}

fn print_help() {
    println!("\n{}", "Commands:".bright_cyan().bold());
    println!("  <pattern>          set the boxes, e.g. 'a..le' ('.', '?' or '_' = any letter)");
    println!("  key <letters>      cycle letters: neutral → allowed → disallowed");
    println!("  len <n>            only words of length n (empty = any length)");
    println!("  box <pos> <c|.>    set or empty one box (positions start at 1)");
    println!("  clear              empty the boxes and reset every letter");
    println!("  show               print the current state");
    println!("  quit               exit\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the search worker cannot start or if there's an I/O
/// error reading user input.
pub fn run_simple(settings: &Settings) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Finder - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    print_help();

    let dispatcher = SearchDispatcher::spawn(settings.open_evaluator(), settings.result_limit)
        .map_err(|e| format!("Failed to start search worker: {e}"))?;
    let mut session = Session::new(settings.highlight_length);
    session.set_corpus_total(dispatcher.corpus_total());

    search_and_wait(&mut session, &dispatcher);
    print_session(&session);

    loop {
        let Some(line) = get_user_input("\nCommand")? else {
            // End of input
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message.red());
                continue;
            }
        };

        let is_clear = command == LineCommand::Clear;
        match apply_command(&mut session, command) {
            Action::Search(note) => {
                if is_clear {
                    session.set_corpus_total(dispatcher.corpus_total());
                }
                if let Some(note) = note {
                    println!("{}", note.yellow());
                }
                search_and_wait(&mut session, &dispatcher);
                print_session(&session);
            }
            Action::Show => print_session(&session),
            Action::Help => print_help(),
            Action::Quit => {
                println!("\nGoodbye!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;
    use crate::search::Corpus;
    use crate::wordlists::loader::words_from_slice;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn run(session: &mut Session, dispatcher: &SearchDispatcher, line: &str) -> Action {
        let action = apply_command(session, parse_command(line).unwrap());
        if matches!(action, Action::Search(_)) {
            search_and_wait(session, dispatcher);
        }
        action
    }

    fn shown(session: &Session) -> Vec<String> {
        session.view().words().iter().map(|w| w.text.clone()).collect()
    }

    fn dispatcher() -> SearchDispatcher {
        let corpus = Corpus::new(words_from_slice(&[
            "apple", "angle", "grape", "melee", "where", "apples", "queen",
        ]));
        SearchDispatcher::spawn(corpus, 150).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("quit"), Ok(LineCommand::Quit));
        assert_eq!(parse_command("  HELP "), Ok(LineCommand::Help));
        assert_eq!(parse_command("key ea"), Ok(LineCommand::Keys("ea".to_string())));
        assert_eq!(parse_command("len 6"), Ok(LineCommand::Length("6".to_string())));
        assert_eq!(parse_command("len"), Ok(LineCommand::Length(String::new())));
        assert_eq!(
            parse_command("box 2 e"),
            Ok(LineCommand::SetBox {
                index: 1,
                value: Some('e')
            })
        );
        assert_eq!(
            parse_command("box 1 ."),
            Ok(LineCommand::SetBox {
                index: 0,
                value: None
            })
        );
    }

    #[test]
    fn bare_word_is_a_pattern() {
        let Ok(LineCommand::Pattern(pattern)) = parse_command("a..le") else {
            panic!("expected a pattern");
        };
        assert_eq!(pattern.to_string(), "a..le");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("a1..").is_err());
        assert!(parse_command("box 0 e").is_err());
        assert!(parse_command("box 1 ee").is_err());
        assert!(parse_command("box 1").is_err());
        assert!(parse_command("frobnicate now").is_err());
    }

    #[test]
    fn bare_key_asks_for_letters() {
        assert_eq!(parse_command("key"), Err("Usage: key <letters>".to_string()));
        assert_eq!(parse_command(" KEYS "), Err("Usage: key <letters>".to_string()));
    }

    #[test]
    fn pattern_then_keys() {
        let dispatcher = dispatcher();
        let mut session = Session::new(Some(5));

        run(&mut session, &dispatcher, "a....");
        assert_eq!(shown(&session), vec!["angle", "apple"]);
        assert_eq!(session.length_input(), "5");

        // p must appear
        run(&mut session, &dispatcher, "key p");
        assert_eq!(shown(&session), vec!["apple"]);
    }

    #[test]
    fn keys_in_pattern_are_reported() {
        let dispatcher = dispatcher();
        let mut session = Session::default();

        run(&mut session, &dispatcher, "m....");
        let action = run(&mut session, &dispatcher, "key me");
        assert_eq!(
            action,
            Action::Search(Some(
                "Skipped letters already in the pattern: m".to_string()
            ))
        );
        assert_eq!(session.classification(letter('m')), Classification::Inline);
        assert_eq!(session.classification(letter('e')), Classification::Allowed);
    }

    #[test]
    fn length_command_rebuilds_boxes() {
        let dispatcher = dispatcher();
        let mut session = Session::default();

        run(&mut session, &dispatcher, "len 6");
        assert_eq!(session.boxes().len(), 6);
        assert_eq!(shown(&session), vec!["apples"]);

        let action = run(&mut session, &dispatcher, "len 40");
        assert_eq!(action, Action::Search(Some("Length capped at 15.".to_string())));
        assert_eq!(session.boxes().len(), 15);
    }

    #[test]
    fn box_command_sets_and_clears() {
        let dispatcher = dispatcher();
        let mut session = Session::default();

        run(&mut session, &dispatcher, "box 2 h");
        assert_eq!(shown(&session), vec!["where"]);

        run(&mut session, &dispatcher, "box 2 .");
        assert_eq!(shown(&session).len(), 6);

        let action = run(&mut session, &dispatcher, "box 9 a");
        assert_eq!(
            action,
            Action::Search(Some("There are only 5 boxes.".to_string()))
        );
    }

    #[test]
    fn clear_resets_keys_and_boxes() {
        let dispatcher = dispatcher();
        let mut session = Session::default();

        run(&mut session, &dispatcher, "m....");
        run(&mut session, &dispatcher, "key q");
        run(&mut session, &dispatcher, "clear");

        assert!(session.boxes().slots().iter().all(Option::is_none));
        assert_eq!(session.classification(letter('q')), Classification::Neutral);
        assert_eq!(shown(&session).len(), 6);
    }
}
