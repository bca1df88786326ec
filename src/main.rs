//! # `sudoku_solver`
//!
//! `sudoku_solver` is a command-line solver for standard 9x9 Sudoku
//! puzzles. It parses a textual puzzle description and solves it by
//! exhaustive backtracking search: the first unassigned cell in row-major
//! order is tried with the digits 1 through 9 in ascending order, each
//! placement is checked against the cell's 20 peers (its row, column, and
//! 3x3 box), and dead ends are undone before the next digit is tried.
//!
//! ## Puzzle format
//!
//! Nine lines of nine whitespace-separated tokens: a digit `1`-`9` for a
//! given clue, `-` for an empty cell. Blank lines and `#` comments are
//! ignored.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a puzzle file
//! sudoku_solver puzzle.sudoku
//!
//! # Same, via the explicit subcommand
//! sudoku_solver file --path puzzle.sudoku
//!
//! # Solve a puzzle supplied inline
//! sudoku_solver text --input "5 3 - - 7 - - - -
//! ..."
//!
//! # Solve every .sudoku file under a directory
//! sudoku_solver dir --path puzzles/
//!
//! # Generate shell completions
//! sudoku_solver completions bash
//! ```
//!
//! ### Common options
//!
//! - `-d, --debug`: print solver internals (default: `false`).
//! - `-v, --verify`: independently check the solved grid (default: `true`).
//! - `-s, --stats`: print the statistics table (default: `true`).
//! - `-o, --output <path>`: also write the rendered solution to a file.
//!
//! An unsolvable puzzle prints a human-readable notice; it is an expected
//! outcome, not an error.

use clap::{CommandFactory, Parser};
use command_line::cli::{self, Cli, Commands};

mod command_line;

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// figures in the statistics table.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Main entry point of the solver application.
///
/// Parses command-line arguments, dispatches to the appropriate command
/// handler, and manages the overall execution flow.
fn main() {
    let cli = Cli::parse();

    // Handle the case where a path is provided globally without a
    // subcommand. This defaults to solving a puzzle file.
    if let Some(path) = cli.path.clone() {
        if cli.command.is_none() {
            exit_on_error(cli::solve_file(&path, &cli.common));
            return;
        }
    }

    match cli.command {
        Some(Commands::File { path, common }) => {
            exit_on_error(cli::solve_file(&path, &common));
        }
        Some(Commands::Text { input, common }) => {
            exit_on_error(cli::solve_text(&input, &common));
        }
        Some(Commands::Dir { path, common }) => {
            exit_on_error(cli::solve_dir(&path, &common));
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
        None => {
            eprintln!("No command provided. Use --help for more information.");
            std::process::exit(1);
        }
    }
}

/// Reports a command error on stderr and exits with a non-zero status.
fn exit_on_error(result: Result<(), String>) {
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
