use blitzzone_core::{Digit, Position, TimerToken};

use crate::EditError;

/// Input accepted by [`SudokuRound::handle_event`](crate::SudokuRound::handle_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SudokuEvent {
    /// Leave `ready`: draw a puzzle and start the clock.
    Start,
    /// Select a cell of the blank region for cycling.
    SelectCell(Position),
    /// Advance the selected cell: empty, 1, …, 9, empty.
    CycleValue,
    /// Set or clear a cell directly.
    SetCell(Position, Option<Digit>),
    /// One second elapsed on the countdown identified by the token.
    Tick(TimerToken),
    /// End the round early.
    End,
    /// Return to `ready` with everything zeroed.
    Reset,
}

/// Result of applying a cell edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum EditOutcome {
    /// The cell already held that value; nothing was checked.
    Unchanged,
    /// The edit was applied and the region is still incomplete.
    Edited,
    /// The region was completed correctly and `points` were awarded.
    RegionSolved {
        /// Points added to the score.
        points: u32,
    },
    /// The region was completed with a conflict and the clock was cut.
    Penalized {
        /// Seconds left after the penalty.
        remaining: u32,
    },
}

/// What happened when an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SudokuOutcome {
    /// The event does not apply in the current phase, or the tick was stale.
    Ignored,
    /// The round started; schedule ticks with this token.
    Started(TimerToken),
    /// A cell was selected.
    Selected(Position),
    /// A cell edit was applied.
    Edit(EditOutcome),
    /// The edit or selection was refused.
    Rejected(EditError),
    /// The clock ticked and time remains.
    Ticked {
        /// Seconds left.
        remaining: u32,
    },
    /// The round moved to the summary by time-out or an explicit end.
    Finished,
    /// The round was reset to `ready`.
    Reset,
}
