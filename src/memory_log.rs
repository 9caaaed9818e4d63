//! Recovering `mul(X,Y)` instructions from a corrupted memory log.
//!
//! The log is mostly noise. The only instruction that matters is exactly
//! `mul(X,Y)`, where `X` and `Y` are integers of one to three digits (an optional
//! sign is tolerated). Anything else, including extra spaces or a fourth digit,
//! is ignored.
//!
//! Two conditional instructions change which multiplications count towards the
//! gated total: `do()` enables the ones after it, `don't()` disables them. The most
//! recent of the two wins; with neither, instructions are enabled.
//!
//! # Examples
//!
//! ```
//! use aoc24::memory_log;
//!
//! let sums = memory_log::scan("xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))");
//! assert_eq!(sums.total, 161);
//! assert_eq!(sums.enabled_total, 48);
//! ```

use std::iter::Peekable;
use std::str::MatchIndices;

use log::debug;
use nom::{
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, one_of},
    combinator::{map_res, opt, recognize},
    sequence::{delimited, separated_pair},
    IResult, Parser,
};

const MUL_START: &str = "mul(";
const DO: &str = "do()";
const DONT: &str = "don't()";

/// Operands hold at most this many digits.
const MAX_OPERAND_DIGITS: usize = 3;

/// Sums produced by one pass over the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MulSums {
    /// Every valid multiplication.
    pub total: i64,
    /// Only the multiplications enabled by `do()`/`don't()`.
    pub enabled_total: i64,
}

// [+-]?[0-9]{1,3}
fn operand(input: &str) -> IResult<&str, i64> {
    map_res(
        recognize((
            opt(one_of("+-")),
            take_while_m_n(1, MAX_OPERAND_DIGITS, |c: char| c.is_ascii_digit()),
        )),
        str::parse::<i64>,
    )
    .parse(input)
}

/// Parse `mul(X,Y)` at the very start of `input`.
pub fn mul_instruction(input: &str) -> IResult<&str, (i64, i64)> {
    delimited(tag(MUL_START), separated_pair(operand, char(','), operand), char(')')).parse(input)
}

/// Product of the instruction starting at `input`, if it is a valid one.
#[must_use]
pub fn try_mul(input: &str) -> Option<i64> {
    mul_instruction(input).ok().map(|(_, (x, y))| x * y)
}

/// The `do()`/`don't()` state, read front to back.
///
/// Each switch is visited once, so a whole scan stays linear in the log length.
pub struct Switches<'a> {
    dos: Peekable<MatchIndices<'a, &'static str>>,
    donts: Peekable<MatchIndices<'a, &'static str>>,
    enabled: bool,
}

impl<'a> Switches<'a> {
    #[must_use]
    pub fn new(memory: &'a str) -> Self {
        Switches {
            dos: memory.match_indices(DO).peekable(),
            donts: memory.match_indices(DONT).peekable(),
            enabled: true,
        }
    }

    /// Whether an instruction starting at byte `offset` is enabled.
    ///
    /// Offsets must not decrease between calls. A switch cannot overlap a `mul(`,
    /// so one that starts before `offset` also ends before it.
    pub fn enabled_at(&mut self, offset: usize) -> bool {
        loop {
            let next_do = self.dos.peek().map(|&(i, _)| i).filter(|&i| i < offset);
            let next_dont = self.donts.peek().map(|&(i, _)| i).filter(|&i| i < offset);

            match (next_do, next_dont) {
                (Some(d), Some(n)) if d < n => {
                    self.enabled = true;
                    self.dos.next();
                }
                (Some(_), None) => {
                    self.enabled = true;
                    self.dos.next();
                }
                (_, Some(_)) => {
                    self.enabled = false;
                    self.donts.next();
                }
                (None, None) => return self.enabled,
            }
        }
    }
}

/// Try every `mul(` in `memory` and add up the products.
#[must_use]
pub fn scan(memory: &str) -> MulSums {
    let mut sums = MulSums::default();
    let mut switches = Switches::new(memory);
    let mut candidates = 0;
    let mut valid = 0;

    for (offset, _) in memory.match_indices(MUL_START) {
        candidates += 1;
        let Some(product) = try_mul(&memory[offset..]) else {
            continue;
        };
        valid += 1;

        sums.total += product;
        if switches.enabled_at(offset) {
            sums.enabled_total += product;
        }
    }

    debug!("{candidates} '{MUL_START}' candidates, {valid} valid instructions");
    sums
}
