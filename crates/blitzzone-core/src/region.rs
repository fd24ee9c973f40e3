//! The 3×3 box that a puzzle instance leaves blank.

use std::fmt::{self, Display};

use crate::{BOX_SIZE, Position};

/// An aligned 3×3 box, addressed by its box index (0-8).
///
/// The anchor (top-left cell) always sits on multiples of 3.
///
/// # Examples
///
/// ```
/// use blitzzone_core::{BoxRegion, Position};
///
/// let region = BoxRegion::containing(Position::new(4, 7));
/// assert_eq!(region.anchor(), Position::new(3, 6));
/// assert!(region.contains(Position::new(5, 8)));
/// assert!(!region.contains(Position::new(2, 8)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxRegion {
    index: u8,
}

impl BoxRegion {
    /// All nine regions.
    #[expect(clippy::cast_possible_truncation)]
    pub const ALL: [Self; 9] = {
        let mut all = [Self { index: 0 }; 9];
        let mut i = 0;
        while i < 9 {
            all[i] = Self { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Creates a region from its box index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 9 or greater.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 9, "box index must be 0-8");
        Self { index }
    }

    /// Returns the region containing `pos`.
    #[must_use]
    pub const fn containing(pos: Position) -> Self {
        Self {
            index: pos.box_index(),
        }
    }

    /// Box index (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Top-left cell of the region.
    #[must_use]
    pub const fn anchor(self) -> Position {
        Position::new(
            (self.index / BOX_SIZE) * BOX_SIZE,
            (self.index % BOX_SIZE) * BOX_SIZE,
        )
    }

    /// Returns `true` if `pos` lies inside the region.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.box_index() == self.index
    }

    /// The nine positions of the region in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let anchor = self.anchor();
        (0..BOX_SIZE).flat_map(move |dr| {
            (0..BOX_SIZE).map(move |dc| Position::new(anchor.row() + dr, anchor.col() + dc))
        })
    }
}

impl Display for BoxRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let anchor = self.anchor();
        write!(f, "box at ({}, {})", anchor.row(), anchor.col())
    }
}
