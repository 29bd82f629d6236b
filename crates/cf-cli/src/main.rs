/// Cinefeed command-line tool — decode JSON movie and review feeds.
///
/// # Command overview
///
/// ```text
/// cinefeed <COMMAND> [OPTIONS]
///
/// Commands:
///   movies     Decode a movie feed into a title → year index and print it
///   reviews    Stream a review feed, printing each review as it arrives
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Raise log verbosity (-v debug, -vv trace)
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                  |
/// |------|------------------------------------------|
/// | 0    | Success                                  |
/// | 1    | Error (I/O failure, malformed feed, etc.)|
///
/// Logs and error details go to stderr; stdout carries only decoded feed
/// output and stays pipeable.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt;

mod cmd_movies;
mod cmd_reviews;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The cinefeed command-line tool.
#[derive(Parser)]
#[command(name = "cinefeed", version, about = "JSON movie/review feed reader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise log verbosity: `-v` for debug, `-vv` for trace.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a movie feed into a title → year index and print it.
    Movies(MoviesArgs),
    /// Stream a review feed, printing each review as it arrives.
    Reviews(ReviewsArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `cinefeed movies`.
///
/// Reads the whole feed eagerly and prints the resulting index, one
/// `title: year` line per movie, sorted by title. `--json` switches the
/// output to a single JSON object keyed by title.
#[derive(clap::Args)]
pub struct MoviesArgs {
    /// Path to the JSON movie feed (a top-level array of movie objects).
    pub file: PathBuf,

    /// Print the index as a JSON object instead of `title: year` lines.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `cinefeed reviews`.
///
/// Streams the feed: each review is printed the moment it is decoded, so
/// output begins before the file has been fully read. Ctrl-C cancels the
/// producer cleanly. At most one decode error is reported, after the last
/// successfully decoded review.
#[derive(clap::Args)]
pub struct ReviewsArgs {
    /// Path to the JSON review feed (a top-level array of review objects).
    pub file: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Initialize logging at the level selected by `-v` flags.
///
/// The subscriber writes to stderr, keeping stdout reserved for feed
/// output.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Movies(args) => cmd_movies::run(&args),
        Commands::Reviews(args) => cmd_reviews::run(&args).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
