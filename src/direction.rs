use std::fmt;

/// The eight compass directions a grid probe can walk in.
///
/// Rows grow downwards, so `North` is `(-1, 0)`. Discriminants follow the compass
/// clockwise from `North = 0`; the diagonals are the odd ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

use Direction::{East, North, NorthEast, NorthWest, South, SouthEast, SouthWest, West};

// (Δrow, Δcol) per direction, indexed by discriminant
const DELTAS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

impl Direction {
    pub const ALL: [Direction; 8] =
        [North, NorthEast, East, SouthEast, South, SouthWest, West, NorthWest];

    pub const DIAGONALS: [Direction; 4] = [NorthEast, SouthEast, SouthWest, NorthWest];

    /// Unit step as `(Δrow, Δcol)`.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        DELTAS[self as usize]
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        Direction::ALL[(self as usize + 4) % 8]
    }

    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self as usize % 2 == 1
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            North => "N",
            NorthEast => "NE",
            East => "E",
            SouthEast => "SE",
            South => "S",
            SouthWest => "SW",
            West => "W",
            NorthWest => "NW",
        };
        write!(f, "{s}")
    }
}
