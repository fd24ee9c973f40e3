use blitzzone_core::{BoxRegion, Grid};
use log::debug;
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::{GridSeed, grid_generator::fill_grid};

/// A puzzle instance: a solved grid with one box blanked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The grid shown to the player, with `region` empty.
    pub problem: Grid,
    /// The solved grid the problem was cut from.
    pub solution: Grid,
    /// The blanked box.
    pub region: BoxRegion,
    /// Seed that reproduces this puzzle.
    pub seed: GridSeed,
}

/// Generates puzzle instances for the speed Sudoku game.
///
/// The solution and the blank region are both drawn from the same seeded
/// generator, so a seed reproduces the whole puzzle.
///
/// # Examples
///
/// ```
/// use blitzzone_core::validate;
/// use blitzzone_generator::PuzzleGenerator;
///
/// let puzzle = PuzzleGenerator::new().generate();
/// assert!(validate::is_solved(&puzzle.solution));
/// assert_eq!(puzzle.problem.filled_count(), 72);
/// assert!(!validate::is_region_complete(&puzzle.problem, puzzle.region));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a puzzle from a random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(GridSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: GridSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let solution = fill_grid(&mut rng);

        let mut regions = BoxRegion::ALL;
        regions.shuffle(&mut rng);
        let region = regions[0];

        let mut problem = solution.clone();
        problem.clear_region(region);

        debug!("generated puzzle seed={seed} region={region}");
        GeneratedPuzzle {
            problem,
            solution,
            region,
            seed,
        }
    }
}
