//! Logging setup
//!
//! Everything logs through the `log` facade; the binary installs
//! `env_logger` once at startup.

use log::LevelFilter;
use std::env;

/// Environment variable that turns on debug logging when set
pub const DEBUG_ENV_VAR: &str = "WORDFINDER_DEBUG";

/// Initialize logging to stderr
///
/// `level` is the default; `RUST_LOG`, if set, overrides it. Calling this
/// more than once is harmless.
pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}

/// Pick the default level from the verbose flag, the debug variable and the mode
///
/// The terminal UI owns the screen, so it logs nothing unless asked to.
#[must_use]
pub fn default_level(verbose: bool, full_screen: bool) -> LevelFilter {
    if verbose || env::var_os(DEBUG_ENV_VAR).is_some() {
        LevelFilter::Debug
    } else if full_screen {
        LevelFilter::Off
    } else {
        LevelFilter::Info
    }
}
