use rand::seq::IndexedRandom as _;
use rand_pcg::Pcg64;

use crate::{ParseWordError, Word};

/// A word list that is known to be usable: non-empty, every entry a valid
/// [`Word`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

/// Reason a word list was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordListError {
    /// The list has no entries.
    #[display("word list is empty")]
    Empty,
    /// An entry is not a five-letter word.
    #[display("word list entry {index} ({entry:?}) is invalid: {source}")]
    InvalidEntry {
        /// Position of the entry in the input.
        index: usize,
        /// The entry as given.
        entry: String,
        /// Why it failed to parse.
        source: ParseWordError,
    },
}

impl WordList {
    /// Validates `entries`, upper-casing each one.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Empty`] for an empty input and
    /// [`WordListError::InvalidEntry`] for the first entry that is not five
    /// ASCII letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use blitzzone_word::{WordList, WordListError};
    ///
    /// let list = WordList::new(["crane", "SLATE"]).unwrap();
    /// assert_eq!(list.len(), 2);
    ///
    /// let err = WordList::new(["crane", "toolong"]).unwrap_err();
    /// assert!(matches!(err, WordListError::InvalidEntry { index: 1, .. }));
    /// ```
    pub fn new<I, S>(entries: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let entry = entry.as_ref();
                entry
                    .parse::<Word>()
                    .map_err(|source| WordListError::InvalidEntry {
                        index,
                        entry: entry.to_owned(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// Number of entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; kept for symmetry with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if `word` is in the list.
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// The entries in input order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Draws a target uniformly from the whole list.
    pub(crate) fn choose(&self, rng: &mut Pcg64) -> Word {
        // The list is never empty.
        self.words.choose(rng).copied().unwrap_or(self.words[0])
    }
}
