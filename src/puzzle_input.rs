//! `puzzle_input` — loading a puzzle file into memory
//!
//! Every solver starts from the same place: the raw text of one puzzle file. This module
//! owns that text and hands it out either whole (the memory log treats line breaks as
//! ordinary characters) or line by line (grids, location lists, reports).
//!
//! Line policy:
//! - `\n` and `\r\n` both terminate a line; the terminator is never part of the line.
//! - A final line without a terminator is still a line. Nothing is silently dropped.
//! - Blank lines are kept here; individual solvers decide whether to skip them.

use std::path::Path;

use log::debug;

use crate::errors::PuzzleError;

/// Raw puzzle text, loaded once and read by exactly one solver.
#[derive(Debug, Clone, Default)]
pub struct PuzzleInput {
    contents: String,
}

impl PuzzleInput {
    /// Wrap an in-memory string. Never fails.
    pub fn parse_from_str(contents: &str) -> PuzzleInput {
        PuzzleInput { contents: contents.to_string() }
    }

    /// Read the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InputUnreadable`] if the file cannot be opened or is not UTF-8.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<PuzzleInput, PuzzleError> {
        let path_ref = path.as_ref();

        let contents =
            std::fs::read_to_string(path_ref).map_err(|source| PuzzleError::InputUnreadable {
                path: path_ref.to_path_buf(),
                source,
            })?;

        debug!("read {} bytes from '{}'", contents.len(), path_ref.display());
        Ok(PuzzleInput { contents })
    }

    /// The full text, exactly as read.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Lines without their terminators, including an unterminated final line.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.contents.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_strip_terminators() {
        let input = PuzzleInput::parse_from_str("XMAS\r\nSAMX\n");
        assert_eq!(input.lines().collect::<Vec<_>>(), vec!["XMAS", "SAMX"]);
    }

    #[test]
    fn test_final_unterminated_line_is_kept() {
        let input = PuzzleInput::parse_from_str("1 2\n3 4");
        assert_eq!(input.lines().collect::<Vec<_>>(), vec!["1 2", "3 4"]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let input = PuzzleInput::parse_from_str("a\n\nb\n");
        assert_eq!(input.lines().collect::<Vec<_>>(), vec!["a", "", "b"]);
    }

    #[test]
    fn test_empty_input() {
        let input = PuzzleInput::parse_from_str("");
        assert!(input.is_empty());
        assert_eq!(input.lines().count(), 0);
    }

    #[test]
    fn test_contents_untouched() {
        let raw = "do()mul(2,\n4)";
        assert_eq!(PuzzleInput::parse_from_str(raw).contents(), raw);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = PuzzleInput::load_from_path("definitely/not/here.txt").unwrap_err();
        assert_eq!(err.code(), "P001");
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }
}
