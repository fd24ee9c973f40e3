//! Uniqueness checks over a [`Grid`].
//!
//! Region validation uses the strict rule throughout: a filled cell is valid
//! only if no other cell in its row, column, or box holds the same digit.
//! A region that passes [`is_region_valid`] and [`is_region_complete`]
//! therefore leaves the whole grid consistent, provided the rest of the grid
//! already was.

use crate::{BoxRegion, Grid, House, Position};

/// Returns `true` if no cell of `region` is empty.
#[must_use]
pub fn is_region_complete(grid: &Grid, region: BoxRegion) -> bool {
    region.positions().all(|pos| grid[pos].is_some())
}

/// Returns `true` if no filled cell of `region` conflicts with a peer.
///
/// Empty cells are ignored, so a partially filled region can be valid.
#[must_use]
pub fn is_region_valid(grid: &Grid, region: BoxRegion) -> bool {
    region.positions().all(|pos| !has_conflict(grid, pos))
}

/// Returns `true` if the digit at `pos` also appears in its row, column, or box.
///
/// An empty cell never conflicts.
#[must_use]
pub fn has_conflict(grid: &Grid, pos: Position) -> bool {
    let Some(digit) = grid[pos] else {
        return false;
    };
    pos.house_peers().any(|peer| grid[peer] == Some(digit))
}

/// Returns `true` if every row, column, and box holds each digit exactly once.
#[must_use]
pub fn is_solved(grid: &Grid) -> bool {
    House::ALL
        .into_iter()
        .all(|house| is_house_permutation(grid, house))
}

fn is_house_permutation(grid: &Grid, house: House) -> bool {
    let mut seen = 0u16;
    for pos in house.positions() {
        let Some(digit) = grid[pos] else {
            return false;
        };
        if seen & digit.bit() != 0 {
            return false;
        }
        seen |= digit.bit();
    }
    seen == 0x1ff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Digit;

    const SOLVED: &str = "\
534678912\
672195348\
198342567\
859761423\
426853791\
713924856\
961537284\
287419635\
345286179";

    fn solved() -> Grid {
        SOLVED.parse().unwrap()
    }

    #[test]
    fn test_solved_grid() {
        assert!(is_solved(&solved()));
        assert!(!is_solved(&Grid::new()));
    }

    #[test]
    fn test_swapped_cells_break_solution() {
        let mut grid = solved();
        let a = Position::new(0, 0);
        let b = Position::new(0, 1);
        let (da, db) = (grid[a], grid[b]);
        grid[a] = db;
        grid[b] = da;
        assert!(!is_solved(&grid));
    }

    #[test]
    fn test_region_complete() {
        let mut grid = solved();
        let region = BoxRegion::from_index(0);
        assert!(is_region_complete(&grid, region));
        grid.set(Position::new(1, 1), None);
        assert!(!is_region_complete(&grid, region));
        assert!(is_region_complete(&grid, BoxRegion::from_index(1)));
    }

    #[test]
    fn test_region_valid_ignores_empty_cells() {
        let mut grid = solved();
        let region = BoxRegion::from_index(4);
        grid.clear_region(region);
        assert!(is_region_valid(&grid, region));
        assert!(!is_region_complete(&grid, region));
    }

    #[test]
    fn test_region_duplicate_in_box_is_invalid() {
        let mut grid = solved();
        let region = BoxRegion::from_index(0);
        // (0,0) holds 5; put another 5 elsewhere in the box.
        grid.set(Position::new(2, 2), Some(Digit::D5));
        assert!(!is_region_valid(&grid, region));
    }

    #[test]
    fn test_region_column_conflict_is_invalid() {
        // Swapping two cells in the same box row keeps the box a permutation
        // but breaks the columns.
        let mut grid = solved();
        let region = BoxRegion::from_index(0);
        let a = Position::new(0, 0);
        let b = Position::new(0, 1);
        let (da, db) = (grid[a], grid[b]);
        grid[a] = db;
        grid[b] = da;
        assert!(is_region_complete(&grid, region));
        assert!(!is_region_valid(&grid, region));
    }

    #[test]
    fn test_has_conflict() {
        let mut grid = Grid::new();
        let pos = Position::new(4, 4);
        assert!(!has_conflict(&grid, pos));
        grid.set(pos, Some(Digit::D3));
        assert!(!has_conflict(&grid, pos));
        grid.set(Position::new(4, 8), Some(Digit::D3));
        assert!(has_conflict(&grid, pos));
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn relabelled_solution_stays_solved(
                labels in Just(Digit::ALL.to_vec()).prop_shuffle(),
            ) {
                let mut grid = solved();
                for pos in Position::ALL {
                    let digit = grid[pos].unwrap();
                    grid[pos] = Some(labels[usize::from(digit.value() - 1)]);
                }
                prop_assert!(is_solved(&grid));
            }

            #[test]
            fn any_overwrite_in_region_is_caught(
                index in 0u8..9,
                cell in 0usize..9,
                value in 1u8..=9,
            ) {
                let mut grid = solved();
                let region = BoxRegion::from_index(index);
                let pos = region.positions().nth(cell).unwrap();
                let original = grid[pos];
                grid[pos] = Some(Digit::from_value(value));
                prop_assert_eq!(is_region_valid(&grid, region), grid[pos] == original);
            }
        }
    }
}
