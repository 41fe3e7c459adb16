//! TUI application state and logic

use crate::config::Settings;
use crate::core::Classification;
use crate::errors::EvaluatorError;
use crate::search::{SearchDispatcher, SearchReply};
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How long to wait for a key before checking for finished searches
const TICK: Duration = Duration::from_millis(50);

/// Which part of the screen receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Boxes,
    Keyboard,
    Length,
}

impl Focus {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Boxes => Self::Keyboard,
            Self::Keyboard => Self::Length,
            Self::Length => Self::Boxes,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Boxes => Self::Length,
            Self::Keyboard => Self::Boxes,
            Self::Length => Self::Keyboard,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Error,
}

/// Application state
pub struct App {
    pub session: Session,
    pub focus: Focus,
    pub message: Option<Message>,
    pub should_quit: bool,
    dispatcher: SearchDispatcher,
}

impl App {
    #[must_use]
    pub fn new(session: Session, dispatcher: SearchDispatcher) -> Self {
        Self {
            session,
            focus: Focus::Boxes,
            message: Some(Message {
                text: "Type letters into the boxes. TAB moves to the keyboard and length."
                    .to_string(),
                style: MessageStyle::Info,
            }),
            should_quit: false,
            dispatcher,
        }
    }

    /// Fetch the corpus size and run the first search
    pub fn start(&mut self) {
        self.refresh_total();
        self.search();
    }

    pub fn refresh_total(&mut self) {
        let total = self.dispatcher.corpus_total();
        self.session.set_corpus_total(total);
    }

    /// Submit a search for the current state
    pub fn search(&mut self) {
        let request = self.session.next_request();
        let seq = request.seq;
        if let Err(err) = self.dispatcher.submit(request) {
            log::warn!("search #{seq} not submitted: {err}");
            self.session.apply(SearchReply::failed(seq, &err));
        }
    }

    /// Apply every reply that has arrived
    pub fn poll_replies(&mut self) {
        while let Some(reply) = self.dispatcher.try_recv() {
            self.session.apply(reply);
        }
    }

    /// Block until the latest search has been applied
    ///
    /// # Errors
    /// Returns `EvaluatorError::Disconnected` if the worker stops first.
    pub fn wait_for_results(&mut self) -> Result<(), EvaluatorError> {
        while self.session.is_searching() {
            let reply = self.dispatcher.recv()?;
            self.session.apply(reply);
        }
        Ok(())
    }

    pub fn set_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.message = Some(Message {
            text: text.into(),
            style,
        });
    }

    /// Clear boxes and keys, then search again from scratch
    pub fn clear(&mut self) {
        self.session.clear();
        self.set_message("Cleared.", MessageStyle::Info);
        self.refresh_total();
        self.search();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.clear(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            _ => match self.focus {
                Focus::Boxes => self.handle_boxes_key(key.code),
                Focus::Keyboard => self.handle_keyboard_key(key.code),
                Focus::Length => self.handle_length_key(key.code),
            },
        }
    }

    fn handle_boxes_key(&mut self, code: KeyCode) {
        let changed = match code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.session.type_letter(c),
            KeyCode::Char('.' | '?' | '_' | ' ') | KeyCode::Delete => {
                let index = self.session.boxes().focus();
                let changed = self.session.set_box(index, None);
                if code != KeyCode::Delete {
                    self.session.move_focus(1);
                }
                changed
            }
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Left => {
                self.session.move_focus(-1);
                false
            }
            KeyCode::Right => {
                self.session.move_focus(1);
                false
            }
            KeyCode::Home => {
                self.session.focus(0);
                false
            }
            KeyCode::End => {
                self.session.focus(self.session.boxes().len().saturating_sub(1));
                false
            }
            _ => false,
        };

        if changed {
            self.search();
        }
    }

    fn handle_keyboard_key(&mut self, code: KeyCode) {
        let KeyCode::Char(c) = code else {
            return;
        };

        match self.session.cycle_key(c) {
            Some(Classification::Inline) => self.set_message(
                format!("'{}' is in the pattern; clear its box first.", c.to_ascii_uppercase()),
                MessageStyle::Error,
            ),
            Some(state) => {
                self.set_message(
                    format!("{}: {}", c.to_ascii_uppercase(), state.label()),
                    MessageStyle::Info,
                );
                self.search();
            }
            None => {}
        }
    }

    fn handle_length_key(&mut self, code: KeyCode) {
        let mut text = self.session.length_input().to_string();
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => text.push(c),
            KeyCode::Backspace => {
                if text.pop().is_none() {
                    return;
                }
            }
            _ => return,
        }

        self.session.set_length_input(&text);
        if self.session.length_filter().was_clamped() {
            self.set_message(
                format!("Length capped at {}.", self.session.length_input()),
                MessageStyle::Info,
            );
        }
        self.search();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if the search worker cannot start, or if terminal
/// setup/cleanup fails.
pub fn run_tui(settings: &Settings) -> Result<()> {
    let dispatcher = SearchDispatcher::spawn(settings.open_evaluator(), settings.result_limit)?;
    let app = App::new(Session::new(settings.highlight_length), dispatcher);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.start();

    loop {
        app.poll_replies();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::presenter::ResultState;
    use crate::search::{Corpus, OfflineEvaluator};
    use crate::wordlists::loader::words_from_slice;

    fn app() -> App {
        let corpus = Corpus::new(words_from_slice(&[
            "apple", "angle", "grape", "melee", "where", "apples", "queen",
        ]));
        let dispatcher = SearchDispatcher::spawn(corpus, 150).unwrap();
        let mut app = App::new(Session::new(Some(5)), dispatcher);
        app.start();
        app.wait_for_results().unwrap();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_keys(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        app.wait_for_results().unwrap();
    }

    fn shown(app: &App) -> Vec<String> {
        app.session
            .view()
            .words()
            .iter()
            .map(|w| w.text.clone())
            .collect()
    }

    #[test]
    fn start_loads_total_and_five_letter_words() {
        let app = app();
        assert_eq!(app.session.corpus_total(), 7);
        assert_eq!(
            shown(&app),
            vec!["angle", "apple", "grape", "melee", "queen", "where"]
        );
    }

    #[test]
    fn typing_in_boxes_narrows_results() {
        let mut app = app();
        type_keys(&mut app, "ap");
        assert_eq!(shown(&app), vec!["apple"]);
        assert_eq!(app.session.boxes().focus(), 2);
    }

    #[test]
    fn wildcard_key_skips_a_box() {
        let mut app = app();
        type_keys(&mut app, ".h");
        assert_eq!(shown(&app), vec!["where"]);
    }

    #[test]
    fn keyboard_focus_cycles_letters() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Keyboard);

        // a: allowed, then disallowed
        type_keys(&mut app, "a");
        assert_eq!(shown(&app), vec!["angle", "apple", "grape"]);
        type_keys(&mut app, "a");
        assert_eq!(shown(&app), vec!["melee", "queen", "where"]);
    }

    #[test]
    fn inline_key_is_reported_not_cycled() {
        let mut app = app();
        type_keys(&mut app, "m");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('m'));

        assert!(!app.session.is_searching());
        let message = app.message.as_ref().unwrap();
        assert_eq!(message.style, MessageStyle::Error);
        assert!(message.text.contains("'M'"));
    }

    #[test]
    fn length_focus_rebuilds_boxes() {
        let mut app = app();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Length);

        type_keys(&mut app, "6");
        assert_eq!(app.session.boxes().len(), 6);
        assert_eq!(shown(&app), vec!["apples"]);

        press(&mut app, KeyCode::Backspace);
        app.wait_for_results().unwrap();
        assert_eq!(app.session.length_input(), "");
        assert_eq!(app.session.boxes().len(), 5);
    }

    #[test]
    fn length_focus_ignores_letters() {
        let mut app = app();
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.session.length_input(), "");
        assert!(!app.session.is_searching());
    }

    #[test]
    fn ctrl_r_clears_and_searches_again() {
        let mut app = app();
        type_keys(&mut app, "me");
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        app.wait_for_results().unwrap();

        assert!(app.session.boxes().slots().iter().all(Option::is_none));
        assert_eq!(shown(&app).len(), 6);
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn offline_corpus_reports_unavailable() {
        let dispatcher =
            SearchDispatcher::spawn(OfflineEvaluator::new("missing.txt"), 150).unwrap();
        let mut app = App::new(Session::default(), dispatcher);
        app.start();
        app.wait_for_results().unwrap();

        assert_eq!(app.session.corpus_total(), 0);
        assert!(matches!(
            app.session.view().state,
            ResultState::Unavailable { .. }
        ));
    }
}
