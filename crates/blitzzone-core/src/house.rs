//! Rows, columns, and boxes of the grid.

use crate::{BoxRegion, Position};

/// A Sudoku house (row, column, or 3×3 box).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its index (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its index (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all houses in row, column, box order.
    #[expect(clippy::cast_possible_truncation)]
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { row } => Position::new(row, i),
            House::Column { col } => Position::new(i, col),
            House::Box { index } => {
                let anchor = BoxRegion::from_index(index).anchor();
                Position::new(anchor.row() + i / 3, anchor.col() + i % 3)
            }
        }
    }

    /// Returns the nine positions of this house.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..9).map(move |i| self.position_from_cell_index(i))
    }
}

impl From<BoxRegion> for House {
    fn from(region: BoxRegion) -> Self {
        House::Box {
            index: region.index(),
        }
    }
}
