//! Multi-directional word search over a character grid.
//!
//! Two questions are asked of a [`Grid`]:
//!
//! 1. How many times does a word appear along a straight line, in any of the eight
//!    compass directions? ([`Grid::count_word_occurrences`])
//! 2. How many cells are the center of an "X" made of the word written along both
//!    diagonals, each forwards or backwards? ([`Grid::count_x_patterns`])
//!
//! Rows may have different lengths. Every cell a probe touches is bounds-checked
//! against its own row, so a ragged grid only rules out the probes that actually
//! leave it.
//!
//! # Examples
//!
//! ```
//! use aoc24::grid::Grid;
//!
//! let grid = Grid::build(["S.M", ".A.", "S.M"]);
//! assert_eq!(grid.count_x_patterns("MAS"), 1);
//!
//! let grid = Grid::build(["XMAS.", "M....", "A....", "S...."]);
//! assert_eq!(grid.count_word_occurrences("XMAS"), 2);
//! ```

use std::fmt;

use log::debug;

use crate::direction::Direction;

/// A cell coordinate. Rows count down from the top, columns right from the left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// The position `steps` cells away in `direction`, or `None` if that would
    /// go above the first row or left of the first column.
    #[must_use]
    pub fn offset(self, direction: Direction, steps: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let k = isize::try_from(steps).ok()?;
        Some(Position {
            row: self.row.checked_add_signed(dr.checked_mul(k)?)?,
            col: self.col.checked_add_signed(dc.checked_mul(k)?)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An immutable, possibly ragged, table of characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// One row per line, each keeping its own length. Never fails.
    pub fn build<I, S>(lines: I) -> Grid
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = lines
            .into_iter()
            .map(|line| line.as_ref().chars().collect())
            .collect();
        Grid { rows }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of `row`; zero for rows past the end.
    #[must_use]
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    /// Every position holding `letter`, in row-major order.
    pub fn positions_of(&self, letter: char) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(move |&(_, &c)| c == letter)
                .map(move |(col, _)| Position::new(row, col))
        })
    }

    /// Whether the cells from `start` walking `direction` spell `word`.
    ///
    /// A cell outside the grid ends the walk with `false`, so only the probes that
    /// stay inside (row by row) can match.
    fn spells(&self, start: Position, direction: Direction, word: &[char]) -> bool {
        word.iter()
            .enumerate()
            .all(|(k, &c)| start.offset(direction, k).and_then(|p| self.get(p)) == Some(c))
    }

    /// Count straight-line occurrences of `word` in all eight directions.
    ///
    /// Every cell holding the first letter is a start; each direction from it that
    /// spells the word counts once. A one-letter word counts once per occurrence
    /// (all eight directions would read the same single cell). An empty word never
    /// occurs.
    #[must_use]
    pub fn count_word_occurrences(&self, word: &str) -> usize {
        let word: Vec<char> = word.chars().collect();
        let Some(&first) = word.first() else {
            return 0;
        };

        if word.len() == 1 {
            return self.positions_of(first).count();
        }

        let mut starts = 0;
        let total: usize = self
            .positions_of(first)
            .inspect(|_| starts += 1)
            .map(|start| {
                Direction::ALL
                    .iter()
                    .filter(|&&d| self.spells(start, d, &word))
                    .count()
            })
            .sum();

        debug!(
            "'{}': {starts} start cells, {total} occurrences",
            word.iter().collect::<String>()
        );
        total
    }

    /// Count the cells that sit in the middle of an X spelled by `word`.
    ///
    /// The word needs a middle letter, so it must have odd length of at least three;
    /// anything else yields zero. A center is valid when both diagonals through it
    /// spell the word, each read in either direction.
    #[must_use]
    pub fn count_x_patterns(&self, word: &str) -> usize {
        let word: Vec<char> = word.chars().collect();
        if word.len() < 3 || word.len() % 2 == 0 {
            debug!("no X shape for a word of length {}", word.len());
            return 0;
        }

        let arm = word.len() / 2;
        self.positions_of(word[arm])
            .filter(|&center| self.is_x_center(center, &word, arm))
            .count()
    }

    fn is_x_center(&self, center: Position, word: &[char], arm: usize) -> bool {
        // Edge and corner cells cannot hold a full X
        let bordered = Direction::DIAGONALS
            .iter()
            .all(|&d| center.offset(d, arm).and_then(|p| self.get(p)).is_some());
        if !bordered {
            return false;
        }

        // The leg walking `d` starts `arm` cells behind the center
        let leg = |d: Direction| {
            center
                .offset(d.opposite(), arm)
                .is_some_and(|start| self.spells(start, d, word))
        };

        // One leg per diagonal axis; walking the axis the other way is the word reversed
        (leg(Direction::NorthEast) || leg(Direction::SouthWest))
            && (leg(Direction::SouthEast) || leg(Direction::NorthWest))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}
