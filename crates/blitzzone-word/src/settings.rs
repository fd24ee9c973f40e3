/// Letters in every word.
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per target word.
pub const MAX_ATTEMPTS: usize = 6;

/// Length of a word round in seconds.
pub const WORD_GAME_DURATION: u32 = 180;

/// Clock settings for a [`WordRound`](crate::WordRound).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSettings {
    /// Seconds on the clock at the start of a round.
    pub duration_secs: u32,
}

impl Default for WordSettings {
    fn default() -> Self {
        Self {
            duration_secs: WORD_GAME_DURATION,
        }
    }
}
