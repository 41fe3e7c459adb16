//! Display functions for command results

use super::formatters::{
    KEYBOARD_ROWS, boxes_line, classification_marker, classifier_summary, format_count,
    pattern_text,
};
use super::presenter::ResultView;
use crate::core::{Classification, Letter};
use crate::search::CorpusStats;
use crate::session::Session;
use colored::Colorize;

/// Words per line when printing a result grid
const WORDS_PER_ROW: usize = 6;

/// Print a result view as a grid, highlighted words in bold green
pub fn print_result_view(view: &ResultView) {
    println!("{}", view.count_line().bright_cyan().bold());

    if let Some(message) = view.message() {
        println!("\n  {}", message.bright_black());
        return;
    }

    let width = view
        .words()
        .iter()
        .map(|w| w.text.len())
        .max()
        .unwrap_or(0);

    for row in view.words().chunks(WORDS_PER_ROW) {
        let line: Vec<String> = row
            .iter()
            .map(|word| {
                let padded = format!("{:<width$}", word.text);
                if word.highlighted {
                    padded.green().bold().to_string()
                } else {
                    padded
                }
            })
            .collect();
        println!("  {}", line.join("  "));
    }

    if let Some(notice) = &view.truncation {
        println!("\n  {}", notice.bright_black());
    }
}

/// Print the on-screen keyboard coloured by classification
pub fn print_keyboard(session: &Session) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .filter_map(|ch| Letter::from_char(ch).ok())
            .map(|letter| {
                let state = session.classification(letter);
                let label = format!(
                    "{}{}",
                    letter.to_char().to_ascii_uppercase(),
                    classification_marker(state)
                );
                match state {
                    Classification::Neutral => label.normal().to_string(),
                    Classification::Allowed => label.green().bold().to_string(),
                    Classification::Disallowed => label.red().strikethrough().to_string(),
                    Classification::Inline => label.yellow().bold().to_string(),
                }
            })
            .collect();
        println!("  {}{}", " ".repeat(indent), keys.join(" "));
    }
}

/// Print the full session state: boxes, length, keyboard and results
pub fn print_session(session: &Session) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Total words: {}   Length: {}",
        format_count(session.corpus_total()).bright_white(),
        if session.length_input().is_empty() {
            "any".to_string()
        } else {
            session.length_input().to_string()
        }
    );
    println!(
        "Pattern: {}  {}",
        boxes_line(session.boxes()).bright_yellow().bold(),
        pattern_text(session.boxes()).bright_black()
    );
    println!("{}", classifier_summary(session.classifier()).bright_black());
    println!();
    print_keyboard(session);
    println!("{}", "─".repeat(60).cyan());
    print_result_view(session.view());
}

/// Print corpus statistics
pub fn print_stats(stats: &CorpusStats) {
    println!(
        "{} {}",
        "Total words:".bright_cyan().bold(),
        format_count(stats.total)
    );
}
