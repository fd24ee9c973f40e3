/// A game on the arcade menu.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum GameKind {
    /// The five-letter word game.
    #[default]
    #[display("Word Blitz")]
    WordBlitz,
    /// The timed Sudoku region game.
    #[display("Speed Sudoku")]
    SpeedSudoku,
}

impl GameKind {
    /// Games in menu order. The first one is shown on launch.
    pub const ALL: [Self; 2] = [Self::WordBlitz, Self::SpeedSudoku];

    /// Menu title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::WordBlitz => "Word Blitz",
            Self::SpeedSudoku => "Speed Sudoku",
        }
    }
}
