use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};

use aoc24::errors::PuzzleError;
use aoc24::grid::Grid;
use aoc24::location_lists::LocationLists;
use aoc24::puzzle_input::PuzzleInput;
use aoc24::{memory_log, reports};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("AOC24_GIT_HASH"), ")");

/// Puzzle solvers for word-search grids, location lists, reports and memory logs
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    puzzle: Puzzle,
}

#[derive(Subcommand, Debug)]
enum Puzzle {
    /// Count a word in all eight directions, and X shapes along the diagonals
    CeresSearch {
        /// Path to the puzzle grid (one row per line)
        #[arg(short, long, default_value = "assets/puzzle.txt")]
        input: PathBuf,

        /// Word to look for along straight lines
        #[arg(short, long, default_value = "XMAS")]
        word: String,

        /// Word whose diagonals form the X (odd length, shared middle letter)
        #[arg(short = 'x', long, default_value = "MAS")]
        x_word: String,
    },

    /// Total distance and similarity score of two location-ID lists
    HistorianHysteria {
        /// Path to the location lists (two IDs per line)
        #[arg(short, long, default_value = "assets/location_ids.txt")]
        input: PathBuf,
    },

    /// Count safe reports
    RedNosedReports {
        /// Path to the reports (one report of levels per line)
        #[arg(short, long, default_value = "assets/reports.txt")]
        input: PathBuf,

        /// Tolerate a single bad level per report
        #[arg(short, long)]
        dampener: bool,
    },

    /// Sum the valid mul(X,Y) instructions of a corrupted memory log
    MullItOver {
        /// Path to the memory log
        #[arg(short, long, default_value = "assets/corrupted_memory_log.txt")]
        input: PathBuf,
    },
}

impl Puzzle {
    fn input(&self) -> &Path {
        match self {
            Puzzle::CeresSearch { input, .. }
            | Puzzle::HistorianHysteria { input }
            | Puzzle::RedNosedReports { input, .. }
            | Puzzle::MullItOver { input } => input.as_path(),
        }
    }
}

/// Entry point of the aoc24 CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var(aoc24::log::DEBUG_ENV_VAR).is_ok();
    aoc24::log::init_logger(debug_enabled);

    log::info!("Starting aoc24");

    if let Err(e) = try_main() {
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the puzzle input from disk.
/// 3. Run the chosen solver and print its answers on stdout.
/// 4. Print timings on stderr.
///
/// Nothing reaches stdout if the input cannot be loaded or parsed.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 1. Load the input
    let t_load = Instant::now();
    let input = PuzzleInput::load_from_path(cli.puzzle.input())?;
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Solve; answers are collected first so a parse error prints nothing
    let t_solve = Instant::now();
    let answers = solve(&cli.puzzle, &input)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 3. Answers on stdout
    for answer in &answers {
        println!("{answer}");
    }

    // 4. Diagnostics on stderr
    eprintln!(
        "Loaded {} bytes in {:.3}s; solved in {:.3}s.",
        input.contents().len(),
        load_secs,
        solve_secs
    );

    Ok(())
}

fn solve(puzzle: &Puzzle, input: &PuzzleInput) -> Result<Vec<String>, PuzzleError> {
    let answers = match puzzle {
        Puzzle::CeresSearch { word, x_word, .. } => {
            let grid = Grid::build(input.lines());
            vec![
                format!("total word count: {}", grid.count_word_occurrences(word)),
                format!("X-{x_word} occurrences: {}", grid.count_x_patterns(x_word)),
            ]
        }
        Puzzle::HistorianHysteria { .. } => {
            let lists = LocationLists::parse(input)?;
            vec![
                format!("total distance: {}", lists.total_distance()),
                format!("total similarity score: {}", lists.total_similarity_score()),
            ]
        }
        Puzzle::RedNosedReports { dampener, .. } => {
            let all = reports::parse_reports(input)?;
            vec![format!("total valid reports: {}", reports::count_safe(&all, *dampener))]
        }
        Puzzle::MullItOver { .. } => {
            let sums = memory_log::scan(input.contents());
            vec![
                format!("total sum of 'mul' expressions: {}", sums.total),
                format!("total sum of enabled 'mul' expressions: {}", sums.enabled_total),
            ]
        }
    };

    Ok(answers)
}
