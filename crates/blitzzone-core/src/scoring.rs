//! Point awards and the per-round scoreboard.

/// Flat bonus added to the remaining seconds when a word is solved.
pub const SOLVE_BONUS: u32 = 100;

/// Points for completing a Sudoku region with `remaining` seconds left.
#[must_use]
pub const fn region_award(remaining: u32) -> u32 {
    remaining
}

/// Points for solving a word with `remaining` seconds left.
#[must_use]
pub const fn word_award(remaining: u32) -> u32 {
    SOLVE_BONUS + remaining
}

/// Score, streak, and completion count for one round.
///
/// The streak only drops back to zero through [`Scoreboard::reset`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    streak: u32,
    completed: u32,
}

impl Scoreboard {
    /// Creates an all-zero scoreboard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            streak: 0,
            completed: 0,
        }
    }

    /// Total points.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Consecutive successes since the last reset.
    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    /// Puzzles completed since the last reset.
    #[must_use]
    pub const fn completed(&self) -> u32 {
        self.completed
    }

    /// Records a success worth `points`.
    pub fn record_success(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.streak += 1;
        self.completed += 1;
    }

    /// Zeroes everything.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
