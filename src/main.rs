//! Word Finder - CLI
//!
//! Pattern and letter-constraint word search with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordfinder::{
    commands::{SearchConfig, corpus_stats, run_search, run_simple},
    config::Settings,
    log::{default_level, init_logger},
    output::{present, print_result_view, print_stats},
};

#[derive(Parser)]
#[command(
    name = "wordfinder",
    about = "Find words from a pattern and the letters they must or must not contain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Maximum number of matches to show
    #[arg(short = 'n', long, global = true, default_value = "150")]
    limit: usize,

    /// Emphasize words of this length (0 disables)
    #[arg(long, global = true, default_value = "5")]
    highlight: usize,

    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented, without TUI)
    Simple,

    /// Search once and print the matches
    Search {
        /// Pattern such as 'a..le' ('.', '?' or '_' match any letter)
        pattern: Option<String>,

        /// Only words of this length
        #[arg(short, long)]
        length: Option<String>,

        /// Letters that must appear somewhere
        #[arg(short, long, default_value = "")]
        allowed: String,

        /// Letters that must not appear
        #[arg(short, long, default_value = "")]
        disallowed: String,

        /// Print the query and matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show word list statistics
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logger(default_level(cli.verbose, matches!(command, Commands::Play)));

    let settings = Settings::new(&cli.wordlist, cli.limit, cli.highlight);

    match command {
        Commands::Play => run_play_command(&settings),
        Commands::Simple => run_simple(&settings).map_err(|e| anyhow::anyhow!(e)),
        Commands::Search {
            pattern,
            length,
            allowed,
            disallowed,
            json,
        } => {
            let config = SearchConfig {
                pattern,
                length,
                allowed,
                disallowed,
                limit: settings.result_limit,
            };
            run_search_command(&settings, &config, json)
        }
        Commands::Stats { json } => run_stats_command(&settings, json),
    }
}

fn run_play_command(settings: &Settings) -> Result<()> {
    use wordfinder::interactive::run_tui;

    run_tui(settings)
}

fn run_search_command(settings: &Settings, config: &SearchConfig, json: bool) -> Result<()> {
    let corpus = settings.wordlist.load()?;
    let result = run_search(config, &corpus)?;

    if json {
        let report = serde_json::to_string_pretty(&result.report())
            .context("Failed to serialize search results")?;
        println!("{report}");
    } else {
        print_result_view(&present(&result.outcome, settings.highlight_length));
    }
    Ok(())
}

fn run_stats_command(settings: &Settings, json: bool) -> Result<()> {
    let corpus = settings.wordlist.load()?;
    let stats = corpus_stats(&corpus);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&stats);
    }
    Ok(())
}
