//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use super::browse::browse_puzzles;
use super::select::select_puzzle;
use crate::core::GroupColor;
use crate::output::{
    print_board, print_error, print_hint, print_puzzle_list, print_submission_result,
};
use crate::puzzles::PuzzleSource;
use crate::rules::{HintLevel, IndexSource};
use crate::session::Session;
use std::io::{self, Write};

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Assign(GroupColor, Vec<String>),
    Clear(Vec<String>),
    Reset,
    Submit,
    Hint(HintLevel),
    History,
    Board,
    List(Option<String>),
    New(String),
    Help,
    Quit,
}

/// Parse one line of input
///
/// Words are kept as typed; the game loop matches them against the board
/// ignoring case.
///
/// # Errors
/// Returns a message describing the problem for unrecognised input.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Type a command, or 'help' for the list.".to_string());
    };
    let rest: Vec<String> = parts.map(str::to_string).collect();

    match head.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "help" | "h" | "?" => Ok(Command::Help),
        "board" | "show" => Ok(Command::Board),
        "submit" | "s" => Ok(Command::Submit),
        "reset" => Ok(Command::Reset),
        "hints" | "history" => Ok(Command::History),
        "hint" => {
            let level = rest
                .first()
                .map_or(Ok(HintLevel::Beginner), |l| l.parse::<HintLevel>())
                .map_err(|e| e.to_string())?;
            Ok(Command::Hint(level))
        }
        "clear" | "c" if !rest.is_empty() => Ok(Command::Clear(rest)),
        "list" | "ls" => Ok(Command::List(
            (!rest.is_empty()).then(|| rest.join(" ")),
        )),
        "new" | "n" => Ok(Command::New(
            rest.first().cloned().unwrap_or_else(|| "random".to_string()),
        )),
        other => match other.parse::<GroupColor>() {
            Ok(color) if !rest.is_empty() => Ok(Command::Assign(color, rest)),
            Ok(color) => Err(format!("Name the words to color {color}.")),
            Err(_) => Err(format!("Unknown command '{head}'. Type 'help' for the list.")),
        },
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <color> WORD...    color words (yellow/green/blue/purple or y/g/b/p)");
    println!("  clear WORD...      remove words' colors");
    println!("  reset              uncolor the whole board");
    println!("  submit             check your complete groups");
    println!("  hint [level]       beginner (default), intermediate or expert");
    println!("  hints              show hints given so far");
    println!("  board              show the board");
    println!("  list [search]      list puzzles, newest first");
    println!("  new [id|daily]     load another puzzle (random by default)");
    println!("  quit               exit\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: PuzzleSource + ?Sized>(
    source: &S,
    session: &mut Session,
    indices: &mut impl IndexSource,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Connections Plus - Text Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Sort the 16 words into four groups of four by coloring them.\n");
    print_help();

    if let Some(puzzle) = session.puzzle() {
        print_board(puzzle, session.grouping());
    }

    loop {
        let input = get_user_input("Command")?;
        let command = match parse_command(&input) {
            Ok(command) => command,
            Err(message) => {
                print_error(&message);
                continue;
            }
        };

        match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::Board => show_board(session),
            Command::Assign(color, words) => {
                for typed in &words {
                    let assigned = session
                        .resolve_word(typed)
                        .and_then(|word| session.assign(&word, color));
                    if let Err(e) = assigned {
                        print_error(&e.to_string());
                    }
                }
                show_board(session);
            }
            Command::Clear(words) => {
                for typed in &words {
                    match session.resolve_word(typed) {
                        Ok(word) => {
                            session.clear(&word);
                        }
                        Err(e) => print_error(&e.to_string()),
                    }
                }
                show_board(session);
            }
            Command::Reset => {
                session.reset_board();
                println!("🔄 Board cleared.");
                show_board(session);
            }
            Command::Submit => match session.submit() {
                Ok(result) => {
                    print_submission_result(&result);
                    if result.is_solved() {
                        println!(
                            "\n  Solved in {} submission(s) with {} hint(s).",
                            session.submissions(),
                            session.hint_history().len()
                        );
                        println!("  Type 'new' for another puzzle or 'quit' to exit.\n");
                    }
                }
                Err(e) => print_error(&e.to_string()),
            },
            Command::Hint(level) => match session.hint(level, indices) {
                Ok(hint) => print_hint(hint),
                Err(e) => print_error(&e.to_string()),
            },
            Command::History => {
                if session.hint_history().is_empty() {
                    println!("No hints yet.");
                }
                for (i, hint) in session.hint_history().iter().enumerate() {
                    println!("  {}. [{}] {}", i + 1, hint.level, hint.text);
                }
            }
            Command::List(search) => match browse_puzzles(source, search.as_deref()) {
                Ok(listing) => print_puzzle_list(&listing),
                Err(e) => print_error(&e.to_string()),
            },
            Command::New(choice) => match select_puzzle(source, &choice, indices) {
                Ok(puzzle) => {
                    session.load(puzzle);
                    println!("\n🔄 New puzzle loaded!");
                    show_board(session);
                }
                Err(e) => print_error(&e.to_string()),
            },
        }
    }
}

fn show_board(session: &Session) {
    match session.puzzle() {
        Some(puzzle) => print_board(puzzle, session.grouping()),
        None => print_error("No game is currently loaded. Type 'new' to load one."),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // End of input behaves like "quit"
    if read == 0 {
        return Ok("quit".to_string());
    }
    Ok(input.trim().to_string())
}
