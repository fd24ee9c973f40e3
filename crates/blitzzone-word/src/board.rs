use tinyvec::ArrayVec;

use crate::{Feedback, Letter, MAX_ATTEMPTS, WORD_LENGTH, Word};

/// One row of the guess board.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GuessRow {
    letters: ArrayVec<[Letter; WORD_LENGTH]>,
    feedback: Option<Feedback>,
}

impl GuessRow {
    /// Letters typed so far.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Feedback, once the row has been submitted.
    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Returns `true` once the row has been submitted.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.feedback.is_some()
    }

    /// The row as a word, when all letters are in.
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let letters: [Letter; WORD_LENGTH] = self.letters.as_slice().try_into().ok()?;
        Some(Word::new(letters))
    }
}

/// The rows of guesses for one attempt cycle.
///
/// Only the current row can change; submitted rows are frozen with their
/// feedback.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GuessBoard {
    rows: [GuessRow; MAX_ATTEMPTS],
    current: usize,
}

impl GuessBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows, including the unused ones.
    #[must_use]
    pub fn rows(&self) -> &[GuessRow; MAX_ATTEMPTS] {
        &self.rows
    }

    /// Index of the row being edited (0-based).
    #[must_use]
    pub fn current_attempt(&self) -> usize {
        self.current
    }

    /// The row being edited.
    #[must_use]
    pub fn current_row(&self) -> &GuessRow {
        &self.rows[self.current]
    }

    /// Returns `true` if the current row is the last one.
    #[must_use]
    pub fn is_last_attempt(&self) -> bool {
        self.current == MAX_ATTEMPTS - 1
    }

    /// Appends a letter to the current row. Returns `false` if it was full
    /// or already submitted.
    pub fn push(&mut self, letter: Letter) -> bool {
        let row = &mut self.rows[self.current];
        if row.is_submitted() {
            return false;
        }
        row.letters.try_push(letter).is_none()
    }

    /// Removes the last letter of the current row.
    pub fn pop(&mut self) -> Option<Letter> {
        let row = &mut self.rows[self.current];
        if row.is_submitted() {
            return None;
        }
        row.letters.pop()
    }

    /// Freezes the current row with `feedback`.
    pub(crate) fn freeze_current(&mut self, feedback: Feedback) {
        self.rows[self.current].feedback = Some(feedback);
    }

    /// Moves to the next row. Returns `false` on the last row.
    pub(crate) fn advance(&mut self) -> bool {
        if self.is_last_attempt() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Empties every row and returns to the first.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
