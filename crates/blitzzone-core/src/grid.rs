//! The 9×9 grid of optional digits.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{BoxRegion, Digit, Position};

/// A 9×9 grid where each cell is empty or holds a [`Digit`].
///
/// The grid itself enforces nothing beyond the digit range; uniqueness rules
/// live in [`validate`](crate::validate) and edit restrictions in the round
/// controllers.
///
/// Grids parse from and display as 81 characters in row-major order, with `.`
/// for an empty cell (`0` and `_` are also accepted when parsing). Whitespace
/// is ignored.
///
/// # Examples
///
/// ```
/// use blitzzone_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// grid[Position::new(0, 0)] = Some(Digit::D5);
/// assert_eq!(grid.filled_count(), 1);
///
/// let parsed: Grid = grid.to_string().parse().unwrap();
/// assert_eq!(parsed, grid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at `pos`.
    pub fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()] = value;
    }

    /// Empties every cell of `region`.
    pub fn clear_region(&mut self, region: BoxRegion) {
        for pos in region.positions() {
            self.set(pos, None);
        }
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterates over `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<Digit>)> + '_ {
        Position::ALL.into_iter().map(|pos| (pos, self.get(pos)))
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => Display::fmt(digit, f)?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

/// Error returned when a grid string is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string did not contain exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    InvalidLength {
        /// Number of cells found.
        found: usize,
    },
    /// A character other than `1`-`9`, `.`, `0` or `_` was found.
    #[display("invalid cell character {ch:?} at cell {index}")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Cell index (0-80) where it appeared.
        index: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Grid::new();
        let mut count = 0;
        for (index, ch) in s.chars().filter(|ch| !ch.is_whitespace()).enumerate() {
            count = index + 1;
            if index >= 81 {
                continue;
            }
            grid.cells[index] = match ch {
                '.' | '0' | '_' => None,
                '1'..='9' => ch
                    .to_digit(10)
                    .and_then(|value| u8::try_from(value).ok())
                    .and_then(Digit::try_from_value),
                _ => return Err(ParseGridError::InvalidChar { ch, index }),
            };
        }
        if count != 81 {
            return Err(ParseGridError::InvalidLength { found: count });
        }
        Ok(grid)
    }
}
