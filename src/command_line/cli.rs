#![allow(dead_code, clippy::cast_precision_loss)]

use clap::{Args, Parser, Subcommand};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use sudoku_solver::sudoku::engine::{Backtracker, SearchStats};
use sudoku_solver::sudoku::grid::{CELL_COUNT, Grid};
use sudoku_solver::sudoku::parse::{parse_grid, parse_grid_file};
use sudoku_solver::sudoku::peers::PEER_COUNT;
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku_solver", version, about = "A backtracking Sudoku solver")]
pub(crate) struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to a puzzle file to solve.
    #[arg(global = true)]
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `dir`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands for the solver.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a puzzle file.
    File {
        /// Path to the puzzle file. The format is defined by
        /// `sudoku::parse::parse_grid`.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a puzzle provided as plain text.
    Text {
        /// The puzzle as nine newline-separated rows of nine tokens
        /// (e.g. "5 3 - - 7 - - - -\n...").
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every `.sudoku` file under a directory.
    Dir {
        /// Path to the directory to sweep.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug output, providing more verbose logging during the
    /// solving process.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Enable verification of the solved grid against the row, column, and
    /// box rules.
    #[arg(short, long, default_value_t = true)]
    pub(crate) verify: bool,

    /// Enable printing of search statistics after solving.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Write the rendered solution to this file in addition to stdout.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
}

/// Solve a puzzle file.
///
/// # Errors
///
/// If the file doesn't exist or doesn't parse as a puzzle.
pub(crate) fn solve_file(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Puzzle file does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Provided path is not a file: {}", path.display()));
    }

    let time = Instant::now();
    let grid =
        parse_grid_file(path).map_err(|e| format!("Error parsing puzzle file: {e}"))?;
    let parse_time = time.elapsed();

    solve_and_report(grid, common, Some(path), parse_time)
}

/// Solve a puzzle supplied inline on the command line.
///
/// # Errors
///
/// If the text doesn't parse as a puzzle.
pub(crate) fn solve_text(input: &str, common: &CommonOptions) -> Result<(), String> {
    let time = Instant::now();
    let grid =
        parse_grid(Cursor::new(input)).map_err(|e| format!("Error parsing puzzle text: {e}"))?;
    let parse_time = time.elapsed();

    solve_and_report(grid, common, None, parse_time)
}

/// Solves a directory of puzzle files.
///
/// Walks the directory tree, solves every file with a `.sudoku` extension,
/// and reports each result in turn.
///
/// # Errors
///
/// If the path is not a directory, or any puzzle file fails to parse.
pub(crate) fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!(
            "Provided path is not a directory: {}",
            path.display()
        ));
    }

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path().to_path_buf();
        if !file_path.is_file() {
            continue;
        }

        if file_path.extension().is_none_or(|ext| ext != "sudoku") {
            eprintln!("Skipping non-puzzle file: {}", file_path.display());
            continue;
        }

        solve_file(&file_path, common)?;
    }

    Ok(())
}

/// Solves a parsed grid and reports results including stats and verification.
///
/// Prints the parsed puzzle, runs the search, then either renders the
/// solved grid (optionally also to `--output`) or prints a no-solution
/// notice. An unsolvable puzzle is reported, not treated as a failure.
///
/// # Arguments
/// * `grid` - The parsed puzzle.
/// * `common` - `CommonOptions` providing solver configuration.
/// * `label` - An optional label for the puzzle (e.g. file path).
/// * `parse_time` - The time taken to parse the input.
pub(crate) fn solve_and_report(
    mut grid: Grid,
    common: &CommonOptions,
    label: Option<&Path>,
    parse_time: Duration,
) -> Result<(), String> {
    if let Some(name) = label {
        println!("Solving: {}", name.display());
    }

    println!("Parsed puzzle:\n{grid}");

    let givens = grid.cells().filter(|&(_, cell)| cell.is_assigned()).count();
    let mut solver = Backtracker::new();

    if common.debug {
        println!("Given clues: {givens}");
        if let Some(coord) = grid.first_unassigned() {
            println!("First unassigned cell: {coord}");
            println!("Candidates there: {:?}", solver.candidates(&grid, coord));
        }
    }

    epoch::advance().unwrap();

    let time = Instant::now();
    let solved = solver.solve(&mut grid);
    let elapsed = time.elapsed();

    if common.debug {
        println!("Solved: {solved}");
        println!("Time: {elapsed:?}");
    }

    epoch::advance().unwrap();

    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();

    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if solved && common.verify {
        let ok = grid.is_valid_solution();
        println!("Verified: {ok:?}");
        assert!(ok, "Solution failed verification!");
    }

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            givens,
            &solver.stats(),
            allocated_mib,
            resident_mib,
        );
    }

    if solved {
        println!("Solution:\n{grid}");
        if let Some(out) = &common.output {
            std::fs::write(out, grid.to_string())
                .map_err(|e| format!("Unable to write {}: {e}", out.display()))?;
            println!("Solution written to: {}", out.display());
        }
    } else {
        println!("No solution exists for the given puzzle");
    }

    Ok(())
}

/// Helper function to print a single statistic line in a formatted table row.
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The value of the statistic, implementing `std::fmt::Display`.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The raw count for the statistic.
/// * `elapsed` - The elapsed time in seconds, used to calculate the rate.
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
///
/// # Arguments
/// * `parse_time` - Duration spent parsing the input.
/// * `elapsed` - Duration spent by the solver.
/// * `givens` - Number of pre-assigned clue cells.
/// * `s` - `SearchStats` collected by the solver.
/// * `allocated` - Allocated memory in MiB.
/// * `resident` - Resident memory in MiB.
pub(crate) fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    givens: usize,
    s: &SearchStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Cells", CELL_COUNT);
    stat_line("Given clues", givens);
    stat_line("Peers per cell", PEER_COUNT);

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Assignments", s.assignments, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line_with_rate("Safety checks", s.safety_checks, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}
