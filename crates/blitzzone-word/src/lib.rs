//! Word Blitz: guess five-letter words against the clock.
//!
//! [`classify`] compares a guess with the hidden target and marks each letter
//! correct, present, or absent, counting repeated letters only as often as
//! they occur in the target. [`WordRound`] strings targets together for one
//! timed round: six attempts per word, `100 + seconds left` points per solved
//! word, and a summary once the attempts or the clock run out.
//!
//! Words come from a [`WordList`] validated up front; a round cannot exist
//! without one.

pub use self::{
    board::{GuessBoard, GuessRow},
    event::{Key, WordEvent, WordOutcome},
    feedback::{Feedback, LetterStatus, classify},
    letter_status::LetterStatuses,
    round::{EndReason, WordPhase, WordRound},
    settings::{MAX_ATTEMPTS, WORD_GAME_DURATION, WORD_LENGTH, WordSettings},
    word::{Letter, ParseWordError, Word},
    word_list::{WordList, WordListError},
};

mod board;
mod event;
mod feedback;
mod letter_status;
mod round;
mod settings;
mod word;
mod word_list;
