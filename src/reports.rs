//! Safety checks for reactor reports.
//!
//! A report is one line of integer levels. It is *safe* when the levels move in one
//! direction only and every step between neighbours is between [`MIN_LEVEL_DIFF`] and
//! [`MAX_LEVEL_DIFF`] inclusive. The dampener additionally forgives a single bad level.

use std::cmp::Ordering;

use log::debug;

use crate::errors::PuzzleError;
use crate::puzzle_input::PuzzleInput;

/// Smallest allowed difference between adjacent levels.
pub const MIN_LEVEL_DIFF: u64 = 1;
/// Largest allowed difference between adjacent levels.
pub const MAX_LEVEL_DIFF: u64 = 3;

/// Checks one adjacent pair against the direction fixed by the first pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelValidator {
    pub ordering: Ordering,
    pub min_diff: u64,
    pub max_diff: u64,
}

impl LevelValidator {
    /// `true` if `x` compares to `y` the same way the report started, and the gap
    /// between them is within bounds.
    #[must_use]
    pub fn check(&self, x: i64, y: i64) -> bool {
        let diff = x.abs_diff(y);
        x.cmp(&y) == self.ordering && (self.min_diff..=self.max_diff).contains(&diff)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub levels: Vec<i64>,
}

impl Report {
    pub fn new(levels: Vec<i64>) -> Report {
        Report { levels }
    }

    /// Safe without any tolerance. Fewer than two levels cannot break a rule.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        levels_safe(&self.levels)
    }

    /// Safe as is, or after removing exactly one level.
    #[must_use]
    pub fn is_safe_with_dampener(&self) -> bool {
        if self.is_safe() {
            return true;
        }

        (0..self.levels.len()).any(|skip| {
            let remaining: Vec<i64> = self
                .levels
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &level)| level)
                .collect();
            levels_safe(&remaining)
        })
    }
}

fn levels_safe(levels: &[i64]) -> bool {
    let [first, second, ..] = levels else {
        return true;
    };

    let validator = LevelValidator {
        ordering: first.cmp(second),
        min_diff: MIN_LEVEL_DIFF,
        max_diff: MAX_LEVEL_DIFF,
    };

    levels.windows(2).all(|pair| validator.check(pair[0], pair[1]))
}

/// One report per non-blank line.
///
/// # Errors
///
/// [`PuzzleError::InvalidInteger`] if a level is not a number.
pub fn parse_reports(input: &PuzzleInput) -> Result<Vec<Report>, PuzzleError> {
    let mut reports = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            debug!("skipping blank line {}", idx + 1);
            continue;
        }

        let levels = line
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|source| PuzzleError::InvalidInteger {
                    line_number: idx + 1,
                    token: token.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        reports.push(Report::new(levels));
    }

    Ok(reports)
}

/// Number of safe reports, with or without the dampener.
pub fn count_safe(reports: &[Report], dampener: bool) -> usize {
    reports
        .iter()
        .filter(|report| {
            if dampener {
                report.is_safe_with_dampener()
            } else {
                report.is_safe()
            }
        })
        .count()
}
