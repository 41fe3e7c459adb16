//! TUI rendering with ratatui
//!
//! Layout: header, corpus stats, pattern boxes beside the length field, the
//! classification keyboard, the result grid and a status bar. When the
//! grid does not fit, a notice line below it counts the words shown.

use super::app::{App, Focus, MessageStyle};
use crate::core::{Classification, Letter};
use crate::output::formatters::{KEYBOARD_ROWS, classification_marker, format_count};
use crate::output::presenter::{ResultView, truncation_notice};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Boxes + length
            Constraint::Length(5), // Keyboard
            Constraint::Min(6),    // Results
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let input_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(16)])
        .split(chunks[1]);

    render_boxes(f, app, input_chunks[0]);
    render_length(f, app, input_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_results(f, app.session.view(), chunks[3]);
    render_status(f, app, chunks[4]);
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Double
        } else {
            BorderType::Rounded
        })
        .style(Style::default().fg(color))
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "WORD FINDER",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Total words: {}", format_count(app.session.corpus_total())),
            Style::default().fg(Color::White),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_boxes(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Boxes;
    let boxes = app.session.boxes();

    let spans: Vec<Span> = boxes
        .slots()
        .iter()
        .enumerate()
        .flat_map(|(i, slot)| {
            let ch = slot.map_or('_', |letter| letter.to_char().to_ascii_uppercase());
            let mut style = if slot.is_some() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if focused && i == boxes.focus() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            [Span::styled(format!(" {ch} "), style), Span::raw(" ")]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans)).block(focus_block(" Pattern ", focused));
    f.render_widget(paragraph, area);
}

fn render_length(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Length;
    let input = app.session.length_input();

    let content = if input.is_empty() {
        Span::styled("any", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            input.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    };

    let paragraph = Paragraph::new(Line::from(content)).block(focus_block(" Length ", focused));
    f.render_widget(paragraph, area);
}

fn key_style(state: Classification) -> Style {
    match state {
        Classification::Neutral => Style::new().fg(Color::White),
        Classification::Allowed => Style::new().fg(Color::Black).bg(Color::Green),
        Classification::Disallowed => Style::new()
            .fg(Color::Red)
            .add_modifier(Modifier::CROSSED_OUT),
        Classification::Inline => Style::new().fg(Color::Black).bg(Color::Yellow),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Keyboard;

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let mut spans = vec![Span::raw(" ".repeat(indent * 2))];
            for letter in row.chars().filter_map(|ch| Letter::from_char(ch).ok()) {
                let state = app.session.classification(letter);
                spans.push(Span::styled(
                    format!(
                        " {}{}",
                        letter.to_char().to_ascii_uppercase(),
                        classification_marker(state)
                    ),
                    key_style(state),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(focus_block(
            " Keyboard (+ allowed, - disallowed, * in pattern) ",
            focused,
        ));
    f.render_widget(paragraph, area);
}

fn render_results(f: &mut Frame, view: &ResultView, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", view.count_line()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Green));

    if let Some(message) = view.message() {
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let words = view.words();
    let width = words.iter().map(|w| w.text.len()).max().unwrap_or(1) + 2;
    let columns = (usize::from(inner.width) / width).max(1);
    let rows_needed = words.len().div_ceil(columns);
    let rows_available = usize::from(inner.height);

    // The notice gets its own line and counts only the words actually on screen
    let (rows, notice) = if view.truncation.is_none() && rows_needed <= rows_available {
        (rows_needed, None)
    } else {
        let rows = rows_needed.min(rows_available.saturating_sub(1));
        let visible = (rows * columns).min(words.len());
        (rows, truncation_notice(visible, view.total))
    };

    let lines: Vec<Line> = words
        .chunks(columns)
        .take(rows)
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|word| {
                        let style = if word.highlighted {
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        };
                        Span::styled(format!("{:<width$}", word.text), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let Some(notice) = notice else {
        f.render_widget(Paragraph::new(lines), inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    f.render_widget(Paragraph::new(lines), chunks[0]);
    f.render_widget(
        Paragraph::new(notice).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}

const fn help_text(focus: Focus) -> &'static str {
    match focus {
        Focus::Boxes => "a-z Fill | . Skip | ←/→ Move | TAB Keys | ^R Clear | Esc Quit",
        Focus::Keyboard => "a-z Cycle | TAB Length | ^R Clear | Esc Quit",
        Focus::Length => "0-9 Length | Bksp Erase | TAB Boxes | ^R Clear | Esc Quit",
    }
}

/// Message rows above a single help row, each using the full width
fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let (text, style) = if app.session.is_searching() {
        ("Searching...".to_string(), Style::default().fg(Color::Cyan))
    } else if let Some(message) = &app.message {
        let style = match message.style {
            MessageStyle::Info => Style::default().fg(Color::White),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        (message.text.clone(), style)
    } else {
        (String::new(), Style::default())
    };
    f.render_widget(
        Paragraph::new(text).style(style).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let help = Paragraph::new(help_text(app.focus))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
