//! Letters and five-letter words.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::WORD_LENGTH;

/// An uppercase ASCII letter `A`-`Z`.
///
/// The default value is `A`; it only exists so letters can live in
/// fixed-capacity buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Default for Letter {
    fn default() -> Self {
        Self(b'A')
    }
}

impl Letter {
    /// Converts an ASCII letter of either case. Anything else yields `None`.
    ///
    /// ```
    /// use blitzzone_word::Letter;
    ///
    /// assert_eq!(Letter::from_char('q'), Letter::from_char('Q'));
    /// assert_eq!(Letter::from_char('Q').unwrap().as_char(), 'Q');
    /// assert_eq!(Letter::from_char('1'), None);
    /// assert_eq!(Letter::from_char('é'), None);
    /// ```
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            u8::try_from(ch.to_ascii_uppercase()).ok().map(Self)
        } else {
            None
        }
    }

    /// The letter as an uppercase `char`.
    #[must_use]
    pub fn as_char(self) -> char {
        char::from(self.0)
    }

    /// Alphabet index, `A` = 0 through `Z` = 25.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

/// A word of exactly [`WORD_LENGTH`] letters.
///
/// ```
/// use blitzzone_word::Word;
///
/// let word: Word = "crane".parse().unwrap();
/// assert_eq!(word.to_string(), "CRANE");
/// assert!("cranes".parse::<Word>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word([Letter; WORD_LENGTH]);

impl Word {
    /// Creates a word from its letters.
    #[must_use]
    pub const fn new(letters: [Letter; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    /// The letters in order.
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.0
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            Display::fmt(letter, f)?;
        }
        Ok(())
    }
}

/// Error returned when a string is not a valid word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseWordError {
    /// The string does not have [`WORD_LENGTH`] characters.
    #[display("expected {WORD_LENGTH} letters, found {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character is not an ASCII letter.
    #[display("{ch:?} is not a letter")]
    InvalidLetter {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(ParseWordError::InvalidLength { len });
        }
        let mut letters = [Letter::default(); WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(s.chars()) {
            *slot = Letter::from_char(ch).ok_or(ParseWordError::InvalidLetter { ch })?;
        }
        Ok(Self(letters))
    }
}
