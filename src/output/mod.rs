//! Terminal output formatting
//!
//! Result presentation plus display utilities for CLI results.

pub mod display;
pub mod formatters;
pub mod presenter;

pub use display::{print_keyboard, print_result_view, print_session, print_stats};
pub use presenter::{DisplayWord, ResultState, ResultView, present};
