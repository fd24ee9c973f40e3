//! Cell coordinates on the 9×9 grid.

use std::fmt::{self, Display};

use crate::{BOX_SIZE, GRID_SIZE};

/// A cell position identified by `row` and `col` (both 0-8).
///
/// # Examples
///
/// ```
/// use blitzzone_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.box_index(), 5);
/// assert_eq!(pos.house_peers().count(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    #[expect(clippy::cast_possible_truncation)]
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < GRID_SIZE && col < GRID_SIZE);
        Self { row, col }
    }

    /// Creates a position, returning `None` when it falls off the grid.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Index of the containing 3×3 box (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / BOX_SIZE) * BOX_SIZE + self.col / BOX_SIZE
    }

    /// Row-major index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * GRID_SIZE as usize + self.col as usize
    }

    /// Positions sharing a row, column or box with this one, excluding itself.
    ///
    /// Each peer is yielded once.
    pub fn house_peers(self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(move |&other| {
            other != self
                && (other.row == self.row
                    || other.col == self.col
                    || other.box_index() == self.box_index())
        })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row + 1, self.col + 1)
    }
}
