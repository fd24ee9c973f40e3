//! Core data structures shared by the `BlitzZone` puzzle games.
//!
//! # Overview
//!
//! 1. **Grid model** - the 9×9 Sudoku grid
//!    - [`digit`]: type-safe digits 1-9
//!    - [`position`]: cell coordinates
//!    - [`region`]: aligned 3×3 boxes, one of which a puzzle leaves blank
//!    - [`house`]: rows, columns, and boxes
//!    - [`grid`]: the grid of optional digits
//!
//! 2. **Validation** - [`validate`]: row/column/box uniqueness checks
//!
//! 3. **Round discipline** - shared by both games
//!    - [`countdown`]: a cancellable one-second countdown
//!    - [`scoring`]: point awards and the scoreboard
//!
//! # Examples
//!
//! ```
//! use blitzzone_core::{BoxRegion, Digit, Grid, Position, validate};
//!
//! let mut grid = Grid::new();
//! grid[Position::new(0, 0)] = Some(Digit::D1);
//! grid[Position::new(1, 1)] = Some(Digit::D1);
//!
//! let region = BoxRegion::from_index(0);
//! assert!(!validate::is_region_valid(&grid, region));
//! assert!(!validate::is_region_complete(&grid, region));
//! ```

pub mod countdown;
pub mod digit;
pub mod grid;
pub mod house;
pub mod position;
pub mod region;
pub mod scoring;
pub mod validate;

pub use self::{
    countdown::{Countdown, TickOutcome, TimerToken},
    digit::Digit,
    grid::{Grid, ParseGridError},
    house::House,
    position::Position,
    region::BoxRegion,
    scoring::Scoreboard,
};

/// Width and height of the grid.
pub const GRID_SIZE: u8 = 9;

/// Width and height of a box.
pub const BOX_SIZE: u8 = 3;
