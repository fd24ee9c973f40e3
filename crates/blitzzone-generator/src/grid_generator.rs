use blitzzone_core::{Digit, Grid, Position};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::GridSeed;

/// A fully solved grid together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGrid {
    /// The solved grid.
    pub grid: Grid,
    /// Seed that reproduces `grid`.
    pub seed: GridSeed,
}

/// Generates fully solved grids by randomized backtracking.
///
/// Cells are filled in row-major order. At each cell the digits 1-9 are
/// shuffled and tried in that order; a digit is placed only if its row,
/// column, and box do not hold it yet. When no digit fits, the search
/// backtracks to the previous cell. An empty 9×9 grid always has a
/// completion, so the search always finishes with a full grid.
///
/// # Examples
///
/// ```
/// use blitzzone_core::validate;
/// use blitzzone_generator::GridGenerator;
///
/// let generated = GridGenerator::new().generate();
/// assert!(validate::is_solved(&generated.grid));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct GridGenerator;

impl GridGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a solved grid from a random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedGrid {
        self.generate_with_seed(GridSeed::random())
    }

    /// Generates the solved grid determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: GridSeed) -> GeneratedGrid {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let grid = fill_grid(&mut rng);
        GeneratedGrid { grid, seed }
    }
}

/// Fills an empty grid using `rng` to order candidates.
pub(crate) fn fill_grid(rng: &mut Pcg64) -> Grid {
    let mut state = FillState::default();
    let filled = state.fill_from(0, rng);
    debug_assert!(filled, "an empty grid always has a completion");
    state.grid
}

/// Grid under construction plus per-house masks of used digits.
#[derive(Debug, Default)]
struct FillState {
    grid: Grid,
    rows: [u16; 9],
    cols: [u16; 9],
    boxes: [u16; 9],
}

impl FillState {
    fn can_place(&self, pos: Position, digit: Digit) -> bool {
        let used = self.rows[usize::from(pos.row())]
            | self.cols[usize::from(pos.col())]
            | self.boxes[usize::from(pos.box_index())];
        used & digit.bit() == 0
    }

    fn toggle(&mut self, pos: Position, digit: Digit) {
        self.rows[usize::from(pos.row())] ^= digit.bit();
        self.cols[usize::from(pos.col())] ^= digit.bit();
        self.boxes[usize::from(pos.box_index())] ^= digit.bit();
    }

    fn fill_from(&mut self, index: usize, rng: &mut Pcg64) -> bool {
        let Some(&pos) = Position::ALL.get(index) else {
            return true;
        };

        let mut candidates = Digit::ALL;
        candidates.shuffle(rng);
        for digit in candidates {
            if !self.can_place(pos, digit) {
                continue;
            }
            self.grid.set(pos, Some(digit));
            self.toggle(pos, digit);
            if self.fill_from(index + 1, rng) {
                return true;
            }
            self.toggle(pos, digit);
            self.grid.set(pos, None);
        }
        false
    }
}
