// Puzzle solvers shared by the `aoc24` binary and the integration tests
pub mod collections;
pub mod direction;
pub mod errors;
pub mod grid;
pub mod location_lists;
pub mod log;
pub mod memory_log;
pub mod puzzle_input;
pub mod reports;
