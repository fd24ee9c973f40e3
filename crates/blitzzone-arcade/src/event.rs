use std::mem;

use blitzzone_core::TimerToken;
use blitzzone_sudoku::{SudokuEvent, SudokuOutcome};
use blitzzone_word::{WordEvent, WordListError, WordOutcome};

use crate::GameKind;

/// Input for the arcade.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum ArcadeEvent {
    /// Switch to a game from the menu.
    SelectGame(GameKind),
    /// Input for the Sudoku round; dropped unless Sudoku is shown.
    #[from]
    Sudoku(SudokuEvent),
    /// Input for the word round; dropped unless Word Blitz is shown.
    #[from]
    Word(WordEvent),
    /// A clock tick for whichever game is shown.
    Tick(TimerToken),
    /// The host's word list has arrived.
    WordsLoaded(Vec<String>),
    /// Restart the shown game from its summary (or at any time).
    PlayAgain,
}

/// What happened when an arcade event was handled.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum ArcadeOutcome {
    /// The event did not apply.
    Ignored,
    /// A game is now shown.
    Selected {
        /// The game shown.
        game: GameKind,
        /// Token of its running clock, if any.
        token: Option<TimerToken>,
    },
    /// Result from the Sudoku round.
    Sudoku(SudokuOutcome),
    /// Result from the word round.
    Word(WordOutcome),
    /// The word list was accepted and a word round is available.
    WordsReady,
    /// The word list was rejected.
    WordsRejected(WordListError),
}

/// Events requested by the host, waiting for [`Arcade::pump`](crate::Arcade::pump).
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<ArcadeEvent>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one event.
    pub fn request(&mut self, event: impl Into<ArcadeEvent>) {
        self.events.push(event.into());
    }

    /// Removes and returns every queued event in request order.
    pub fn take_all(&mut self) -> Vec<ArcadeEvent> {
        mem::take(&mut self.events)
    }

    /// Number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_all_returns_events_and_clears_queue() {
        let mut queue = EventQueue::new();
        queue.request(ArcadeEvent::SelectGame(GameKind::SpeedSudoku));
        queue.request(SudokuEvent::Start);
        assert_eq!(queue.len(), 2);

        let drained = queue.take_all();
        assert_eq!(
            drained,
            [
                ArcadeEvent::SelectGame(GameKind::SpeedSudoku),
                ArcadeEvent::Sudoku(SudokuEvent::Start),
            ]
        );
        assert!(queue.is_empty());
        assert!(queue.take_all().is_empty());
    }
}
