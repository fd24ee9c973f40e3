use blitzzone_core::TimerToken;

use crate::{Feedback, Letter};

/// A key press on the word board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Key {
    /// Type a letter into the current row.
    Letter(Letter),
    /// Erase the last letter of the current row.
    Backspace,
    /// Submit the current row.
    Enter,
}

impl Key {
    /// Maps a host key name to a key.
    ///
    /// Accepts `"Enter"`, `"Backspace"`, and any single ASCII letter in
    /// either case. Everything else is not a board key.
    ///
    /// ```
    /// use blitzzone_word::{Key, Letter};
    ///
    /// assert_eq!(Key::parse("q"), Some(Key::Letter(Letter::from_char('Q').unwrap())));
    /// assert_eq!(Key::parse("Enter"), Some(Key::Enter));
    /// assert_eq!(Key::parse("Shift"), None);
    /// assert_eq!(Key::parse("7"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Self::Enter),
            "Backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = name.chars();
                let ch = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Letter::from_char(ch).map(Self::Letter)
            }
        }
    }
}

/// Input accepted by [`WordRound::handle_event`](crate::WordRound::handle_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordEvent {
    /// A key press.
    Key(Key),
    /// One second elapsed on the countdown identified by the token.
    Tick(TimerToken),
    /// Start over with a zeroed score and a full clock.
    Reset,
}

/// What happened when an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum WordOutcome {
    /// Nothing changed.
    Ignored,
    /// A letter was added to the current row.
    Typed(Letter),
    /// A letter was removed from the current row.
    Erased(Letter),
    /// A wrong guess was submitted and another attempt remains.
    Guessed(Feedback),
    /// The target was guessed; a new one has been drawn.
    Solved {
        /// Feedback for the winning guess.
        feedback: Feedback,
        /// Points added to the score.
        points: u32,
    },
    /// The last attempt was wrong and the round is over.
    OutOfAttempts(Feedback),
    /// The clock ticked and time remains.
    Ticked {
        /// Seconds left.
        remaining: u32,
    },
    /// The clock ran out and the round is over.
    TimeUp,
    /// The round restarted; schedule ticks with this token.
    Reset(TimerToken),
}
