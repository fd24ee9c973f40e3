//! Speed Sudoku round controller.
//!
//! A [`SudokuRound`] owns the whole state of one round: the current puzzle,
//! the countdown, and the scoreboard. Hosts drive it with [`SudokuEvent`]s
//! through [`SudokuRound::handle_event`], including the one-second ticks of
//! their own timer, and read the results back through accessors.
//!
//! Phases run `ready → playing → summary`; only a reset leaves `summary`.

pub use self::{
    error::EditError,
    event::{EditOutcome, SudokuEvent, SudokuOutcome},
    round::{SudokuPhase, SudokuRound},
    settings::{GAME_DURATION, PENALTY_SECONDS, SudokuSettings},
};

mod error;
mod event;
mod round;
mod settings;
