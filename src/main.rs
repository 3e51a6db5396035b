//! Connections Plus - CLI
//!
//! Word-grouping puzzle with TUI and CLI modes, plus one-shot checks and hints.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use connections_plus::{
    commands::{browse_puzzles, run_check, run_hint, run_simple, select_or_default, split_words},
    core::{GroupColor, Puzzle},
    logging::{self, LogTarget},
    output::{print_board, print_error, print_hint, print_puzzle_list, print_submission_result},
    puzzles::{BundledSource, DirectorySource, FallbackSource, PuzzleSource},
    rules::{HintLevel, RandomIndices},
    session::Session,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "connections",
    about = "Group sixteen words into four hidden categories",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle: 'daily' (default), 'random', or a puzzle id
    #[arg(short, long, global = true, default_value = "daily")]
    puzzle: String,

    /// Puzzle archive directory (index.json plus games/<id>.json)
    #[arg(long, global = true, env = "CONNECTIONS_PUZZLE_DIR")]
    puzzle_dir: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file (the TUI logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

/// Words per color for the one-shot commands, comma separated
#[derive(clap::Args)]
struct GroupArgs {
    #[arg(short, long)]
    yellow: Option<String>,

    #[arg(short, long)]
    green: Option<String>,

    #[arg(short, long)]
    blue: Option<String>,

    #[arg(short = 'u', long)]
    purple: Option<String>,
}

impl GroupArgs {
    fn groups(&self) -> Vec<(GroupColor, Vec<String>)> {
        [
            (GroupColor::Yellow, &self.yellow),
            (GroupColor::Green, &self.green),
            (GroupColor::Blue, &self.blue),
            (GroupColor::Purple, &self.purple),
        ]
        .into_iter()
        .filter_map(|(color, list)| list.as_deref().map(|l| (color, split_words(l))))
        .collect()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// List available puzzles, newest first
    List {
        /// Only puzzles whose id or date contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Check a grouping, e.g. --yellow SOURDOUGH,BAGUETTE,CIABATTA,FOCACCIA
    Check {
        #[command(flatten)]
        groups: GroupArgs,
    },

    /// Get a hint for a grouping
    Hint {
        /// Hint level: beginner, intermediate or expert (or 1-3)
        #[arg(short, long, default_value = "beginner")]
        level: HintLevel,

        #[command(flatten)]
        groups: GroupArgs,
    },
}

/// Build the puzzle source from the --puzzle-dir option
fn build_source(puzzle_dir: Option<PathBuf>) -> Box<dyn PuzzleSource> {
    match puzzle_dir {
        Some(dir) => Box::new(FallbackSource::new(DirectorySource::new(dir))),
        None => Box::new(BundledSource::new()),
    }
}

/// Load the requested puzzle, or the bundled default if that fails
///
/// Returns the puzzle and, after a fallback, a notice for the player.
fn load_puzzle(source: &dyn PuzzleSource, choice: &str) -> Result<(Puzzle, Option<String>)> {
    let selection = select_or_default(source, choice, &mut RandomIndices::thread())
        .with_context(|| format!("No puzzle available for '{choice}'"))?;
    let notice = selection.notice(choice);
    Ok((selection.puzzle, notice))
}

/// Load a puzzle for a line-mode command, printing any fallback notice
fn load_puzzle_announced(source: &dyn PuzzleSource, choice: &str) -> Result<Puzzle> {
    let (puzzle, notice) = load_puzzle(source, choice)?;
    if let Some(notice) = notice {
        print_error(&notice);
    }
    Ok(puzzle)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let target = match (&command, cli.log_file.as_deref()) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Play, None) => LogTarget::Discard,
        _ => LogTarget::Stderr,
    };
    logging::init(target, cli.verbose)?;

    let source = build_source(cli.puzzle_dir);

    match command {
        Commands::Play => run_play_command(source.as_ref(), &cli.puzzle),
        Commands::Simple => run_simple_command(source.as_ref(), &cli.puzzle),
        Commands::List { search } => run_list_command(source.as_ref(), search.as_deref()),
        Commands::Check { groups } => run_check_command(source.as_ref(), &cli.puzzle, &groups),
        Commands::Hint { level, groups } => {
            run_hint_command(source.as_ref(), &cli.puzzle, level, &groups)
        }
    }
}

fn run_play_command(source: &dyn PuzzleSource, choice: &str) -> Result<()> {
    use connections_plus::interactive::{App, MessageStyle, run_tui};

    let (puzzle, notice) = load_puzzle(source, choice)?;
    let mut app = App::new(source, puzzle);
    if let Some(notice) = notice {
        app.add_message(&notice, MessageStyle::Error);
    }
    run_tui(app)
}

fn run_simple_command(source: &dyn PuzzleSource, choice: &str) -> Result<()> {
    let mut session = Session::with_puzzle(load_puzzle_announced(source, choice)?);
    let mut indices = RandomIndices::thread();
    run_simple(source, &mut session, &mut indices).map_err(|e| anyhow::anyhow!(e))
}

fn run_list_command(source: &dyn PuzzleSource, search: Option<&str>) -> Result<()> {
    let listing = browse_puzzles(source, search).context("Failed to list puzzles")?;
    print_puzzle_list(&listing);
    Ok(())
}

fn run_check_command(source: &dyn PuzzleSource, choice: &str, groups: &GroupArgs) -> Result<()> {
    let mut session = Session::with_puzzle(load_puzzle_announced(source, choice)?);
    let result = run_check(&mut session, &groups.groups())?;

    if let Some(puzzle) = session.puzzle() {
        print_board(puzzle, session.grouping());
    }
    print_submission_result(&result);
    Ok(())
}

fn run_hint_command(
    source: &dyn PuzzleSource,
    choice: &str,
    level: HintLevel,
    groups: &GroupArgs,
) -> Result<()> {
    let mut session = Session::with_puzzle(load_puzzle_announced(source, choice)?);
    let mut indices = RandomIndices::thread();
    let hint = run_hint(&mut session, &groups.groups(), level, &mut indices)?;
    print_hint(&hint);
    Ok(())
}
