//! Comparing two lists of location IDs.
//!
//! The input holds one pair per line, left list first:
//!
//! ```text
//! 3   4
//! 4   3
//! ```
//!
//! Two numbers come out of it: the total distance between the lists once both are
//! sorted, and a similarity score weighting each left ID by how often it appears on
//! the right.

use std::collections::HashMap;

use log::debug;

use crate::errors::PuzzleError;
use crate::puzzle_input::PuzzleInput;

/// The two columns of a location-list file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationLists {
    pub left: Vec<i64>,
    pub right: Vec<i64>,
}

impl LocationLists {
    /// Split each non-blank line into a left and a right ID.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::InvalidPair`] for a line without exactly two fields, and
    /// [`PuzzleError::InvalidInteger`] for a field that is not a number. Line numbers
    /// are 1-based and count blank lines.
    pub fn parse(input: &PuzzleInput) -> Result<LocationLists, PuzzleError> {
        let mut lists = LocationLists::default();

        for (idx, line) in input.lines().enumerate() {
            let line_number = idx + 1;
            let fields: Vec<&str> = line.split_whitespace().collect();

            match fields.as_slice() {
                [] => debug!("skipping blank line {line_number}"),
                [left, right] => {
                    lists.left.push(parse_id(left, line_number)?);
                    lists.right.push(parse_id(right, line_number)?);
                }
                _ => {
                    return Err(PuzzleError::InvalidPair {
                        line_number,
                        line: line.to_string(),
                    })
                }
            }
        }

        Ok(lists)
    }

    pub fn total_distance(&self) -> u128 {
        total_distance(&self.left, &self.right)
    }

    pub fn total_similarity_score(&self) -> i128 {
        total_similarity_score(&self.left, &self.right)
    }
}

fn parse_id(token: &str, line_number: usize) -> Result<i64, PuzzleError> {
    token.parse().map_err(|source| PuzzleError::InvalidInteger {
        line_number,
        token: token.to_string(),
        source,
    })
}

/// Sum of distances between the smallest left and right IDs, then the second
/// smallest, and so on. Lists of unequal length are compared up to the shorter one.
///
/// Any `i64` pair is at most `u64::MAX` apart, so the sum is kept in `u128`.
pub fn total_distance(left: &[i64], right: &[i64]) -> u128 {
    let mut left_sorted = left.to_vec();
    let mut right_sorted = right.to_vec();
    left_sorted.sort_unstable();
    right_sorted.sort_unstable();

    left_sorted
        .iter()
        .zip(&right_sorted)
        .map(|(l, r)| u128::from(l.abs_diff(*r)))
        .sum()
}

/// Each left ID multiplied by the number of times it occurs in `right`, summed.
///
/// Products of large IDs leave the `i64` range, so the score is an `i128`.
pub fn total_similarity_score(left: &[i64], right: &[i64]) -> i128 {
    let mut right_counts: HashMap<i64, i128> = HashMap::with_capacity(right.len());
    for &id in right {
        *right_counts.entry(id).or_default() += 1;
    }

    left.iter()
        .map(|id| i128::from(*id) * right_counts.get(id).copied().unwrap_or(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE_LEFT: [i64; 6] = [3, 4, 2, 1, 3, 3];
    const SITE_RIGHT: [i64; 6] = [4, 3, 5, 3, 9, 3];

    #[test]
    fn test_total_distance() {
        assert_eq!(total_distance(&SITE_LEFT, &SITE_RIGHT), 11);
        assert_eq!(total_distance(&[1, 1, 1], &[1, 1, 1]), 0);
        assert_eq!(total_distance(&[], &[]), 0);
        assert_eq!(total_distance(&[], &[1]), 0);
        assert_eq!(total_distance(&[10, 2], &[1]), 1);
    }

    #[test]
    fn test_total_similarity_score() {
        assert_eq!(total_similarity_score(&SITE_LEFT, &SITE_RIGHT), 31);
        assert_eq!(total_similarity_score(&[1, 1, 1], &[1, 1, 1]), 9);
        assert_eq!(total_similarity_score(&[], &[]), 0);
        assert_eq!(total_similarity_score(&[], &[1]), 0);
    }

    #[test]
    fn test_inputs_are_not_reordered() {
        let left = vec![3, 1, 2];
        let right = vec![9, 8, 7];
        total_distance(&left, &right);
        assert_eq!(left, vec![3, 1, 2]);
        assert_eq!(right, vec![9, 8, 7]);
    }

    #[test]
    fn test_negative_ids() {
        assert_eq!(total_distance(&[-3, 5], &[2, -1]), 5);
        assert_eq!(total_similarity_score(&[-2], &[-2, -2]), -4);
    }

    #[test]
    fn test_extreme_ids_do_not_overflow() {
        let big = i64::MAX / 2;
        assert_eq!(total_similarity_score(&[big], &[big; 3]), 3 * i128::from(big));
        assert_eq!(
            total_similarity_score(&[i64::MIN, i64::MIN], &[i64::MIN]),
            2 * i128::from(i64::MIN)
        );

        let spread = u128::from(i64::MIN.abs_diff(i64::MAX));
        assert_eq!(total_distance(&[i64::MIN, i64::MIN], &[i64::MAX, i64::MAX]), 2 * spread);
    }

    #[test]
    fn test_parse_site_example() {
        let input = PuzzleInput::parse_from_str("3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n");
        let lists = LocationLists::parse(&input).unwrap();
        assert_eq!(lists.left, SITE_LEFT);
        assert_eq!(lists.right, SITE_RIGHT);
        assert_eq!(lists.total_distance(), 11);
        assert_eq!(lists.total_similarity_score(), 31);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let input = PuzzleInput::parse_from_str("1 2\n\n   \n3 4");
        let lists = LocationLists::parse(&input).unwrap();
        assert_eq!(lists.left, vec![1, 3]);
        assert_eq!(lists.right, vec![2, 4]);
    }

    #[test]
    fn test_parse_rejects_lonely_id() {
        let input = PuzzleInput::parse_from_str("1 2\n\n17\n");
        let err = LocationLists::parse(&input).unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidPair { line_number: 3, .. }));
    }

    #[test]
    fn test_parse_rejects_triple() {
        let input = PuzzleInput::parse_from_str("1 2 3");
        assert_eq!(LocationLists::parse(&input).unwrap_err().code(), "P002");
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        let input = PuzzleInput::parse_from_str("1 2\n3 four\n");
        match LocationLists::parse(&input).unwrap_err() {
            PuzzleError::InvalidInteger { line_number, token, .. } => {
                assert_eq!(line_number, 2);
                assert_eq!(token, "four");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
