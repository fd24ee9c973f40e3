//! Grid and puzzle generation for the speed Sudoku game.
//!
//! [`GridGenerator`] produces fully solved grids by randomized backtracking.
//! [`PuzzleGenerator`] builds on it and blanks one aligned 3×3 box, which is
//! the puzzle the player completes against the clock.
//!
//! Generation is deterministic for a given [`GridSeed`]; [`SeedSequence`]
//! derives a reproducible stream of seeds for a whole round.
//!
//! # Examples
//!
//! ```
//! use blitzzone_generator::{GridSeed, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let seed = GridSeed::from([1; 32]);
//! let puzzle = generator.generate_with_seed(seed);
//! assert_eq!(generator.generate_with_seed(seed), puzzle);
//! ```

pub use self::{
    grid_generator::{GeneratedGrid, GridGenerator},
    puzzle::{GeneratedPuzzle, PuzzleGenerator},
    seed::{GridSeed, ParseSeedError, SeedSequence},
};

mod grid_generator;
mod puzzle;
mod seed;
