//! Generate error code documentation from the error enum itself.
//!
//! Codes, descriptions, details and help text all come from `PuzzleError`'s
//! `code()`, `description()`, `details()` and `help()` methods, so the document
//! cannot drift from the code.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;
use std::path::PathBuf;

use aoc24::errors::PuzzleError;

/// One example of each `PuzzleError` variant
fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::InputUnreadable {
            path: PathBuf::from("assets/puzzle.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        PuzzleError::InvalidPair { line_number: 12, line: "38665".to_string() },
        PuzzleError::InvalidInteger {
            line_number: 3,
            token: "7a".to_string(),
            // ParseIntError has no public constructor; make one by parsing
            source: match "7a".parse::<i64>() {
                Err(e) => e,
                Ok(_) => unreachable!("'7a' is not an integer"),
            },
        },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Puzzle Errors\n");
    println!("Errors raised while loading or parsing a puzzle input. The grid search never fails once its input is read.\n");

    for error in all_puzzle_error_variants() {
        println!("### {}: {}\n", error.code(), error.description());
        println!("**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            println!("**How to fix:**");
            println!("```");
            println!("{help_text}");
            println!("```\n");
        }

        println!("**Detailed format:**");
        println!("```");
        println!("{}", error.display_detailed());
        println!("```\n");

        println!("---\n");
    }
}
