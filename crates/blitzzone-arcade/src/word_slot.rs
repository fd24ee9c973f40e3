use blitzzone_word::{WordListError, WordRound};

/// The word game's place in the arcade.
///
/// A word round needs a validated word list, which the host loads after the
/// arcade is built.
#[derive(Debug, Clone, derive_more::IsVariant)]
pub enum WordSlot {
    /// No word list has arrived yet.
    AwaitingWords,
    /// A round is available.
    Ready(Box<WordRound>),
    /// The last word list was rejected; the game cannot start.
    Misconfigured(WordListError),
}

impl WordSlot {
    /// The round, if one is available.
    #[must_use]
    pub fn round(&self) -> Option<&WordRound> {
        match self {
            Self::Ready(round) => Some(round.as_ref()),
            Self::AwaitingWords | Self::Misconfigured(_) => None,
        }
    }

    /// The round, mutably.
    pub fn round_mut(&mut self) -> Option<&mut WordRound> {
        match self {
            Self::Ready(round) => Some(round.as_mut()),
            Self::AwaitingWords | Self::Misconfigured(_) => None,
        }
    }

    /// Why the last word list was rejected.
    #[must_use]
    pub fn error(&self) -> Option<&WordListError> {
        match self {
            Self::Misconfigured(err) => Some(err),
            Self::AwaitingWords | Self::Ready(_) => None,
        }
    }
}
