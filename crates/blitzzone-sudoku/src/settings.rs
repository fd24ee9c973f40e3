/// Length of a speed Sudoku round in seconds.
pub const GAME_DURATION: u32 = 90;

/// Seconds removed from the clock when a completed region is wrong.
pub const PENALTY_SECONDS: u32 = 5;

/// Clock settings for a [`SudokuRound`](crate::SudokuRound).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SudokuSettings {
    /// Seconds on the clock at the start of a round.
    pub duration_secs: u32,
    /// Seconds removed for an invalid completion.
    pub penalty_secs: u32,
}

impl Default for SudokuSettings {
    fn default() -> Self {
        Self {
            duration_secs: GAME_DURATION,
            penalty_secs: PENALTY_SECONDS,
        }
    }
}
