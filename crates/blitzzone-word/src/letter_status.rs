use crate::{Feedback, Letter, LetterStatus, Word};

/// Best status seen for each letter during one attempt cycle.
///
/// Updates only ever raise a letter's status (`Absent < Present < Correct`),
/// so a letter shown as correct on the keyboard stays correct.
///
/// # Examples
///
/// ```
/// use blitzzone_word::{Letter, LetterStatus, LetterStatuses, Word, classify};
///
/// let target: Word = "CRANE".parse().unwrap();
/// let mut statuses = LetterStatuses::new();
///
/// let guess: Word = "CHAIR".parse().unwrap();
/// statuses.update(&guess, &classify(&guess, &target));
/// let c = Letter::from_char('C').unwrap();
/// assert_eq!(statuses.get(c), Some(LetterStatus::Correct));
///
/// // A later guess with C in the wrong place does not downgrade it.
/// let guess: Word = "ARCED".parse().unwrap();
/// statuses.update(&guess, &classify(&guess, &target));
/// assert_eq!(statuses.get(c), Some(LetterStatus::Correct));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LetterStatuses {
    statuses: [Option<LetterStatus>; 26],
}

impl LetterStatuses {
    /// Creates a map with no letters seen.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statuses: [None; 26],
        }
    }

    /// Status recorded for `letter`, or `None` if it has not been guessed.
    #[must_use]
    pub fn get(&self, letter: Letter) -> Option<LetterStatus> {
        self.statuses[letter.index()]
    }

    /// Merges one classified guess into the map.
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        for (letter, &status) in guess.letters().iter().zip(feedback.statuses()) {
            let slot = &mut self.statuses[letter.index()];
            *slot = Some(slot.map_or(status, |current| current.max(status)));
        }
    }

    /// Forgets every letter.
    pub fn clear(&mut self) {
        self.statuses = [None; 26];
    }

    /// Returns `true` if no letter has been guessed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.iter().all(Option::is_none)
    }

    /// Guessed letters with their statuses, alphabetically.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, LetterStatus)> + '_ {
        ('A'..='Z').zip(&self.statuses).filter_map(|(ch, status)| {
            let letter = Letter::from_char(ch)?;
            status.map(|status| (letter, status))
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::classify;

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn guess(statuses: &mut LetterStatuses, g: &str, target: &str) {
        let g = word(g);
        statuses.update(&g, &classify(&g, &word(target)));
    }

    #[test]
    fn test_update_records_statuses() {
        let mut statuses = LetterStatuses::new();
        assert!(statuses.is_empty());
        guess(&mut statuses, "CHAIR", "CRANE");
        assert_eq!(statuses.get(letter('C')), Some(LetterStatus::Correct));
        assert_eq!(statuses.get(letter('H')), Some(LetterStatus::Absent));
        assert_eq!(statuses.get(letter('A')), Some(LetterStatus::Correct));
        assert_eq!(statuses.get(letter('R')), Some(LetterStatus::Present));
        assert_eq!(statuses.get(letter('Z')), None);
    }

    #[test]
    fn test_present_upgrades_to_correct_but_never_back() {
        let mut statuses = LetterStatuses::new();
        guess(&mut statuses, "RAISE", "CRANE");
        assert_eq!(statuses.get(letter('R')), Some(LetterStatus::Present));
        guess(&mut statuses, "GRAND", "CRANE");
        assert_eq!(statuses.get(letter('R')), Some(LetterStatus::Correct));
        guess(&mut statuses, "ROBOT", "CRANE");
        assert_eq!(statuses.get(letter('R')), Some(LetterStatus::Correct));
    }

    #[test]
    fn test_duplicate_letter_in_one_guess_keeps_best() {
        // The exact E and the extra absent E land in the same slot.
        let mut statuses = LetterStatuses::new();
        guess(&mut statuses, "EERIE", "CRANE");
        assert_eq!(statuses.get(letter('E')), Some(LetterStatus::Correct));
    }

    #[test]
    fn test_iter_and_clear() {
        let mut statuses = LetterStatuses::new();
        guess(&mut statuses, "BUMPY", "CRANE");
        let seen: Vec<_> = statuses.iter().map(|(l, _)| l.as_char()).collect();
        assert_eq!(seen, vec!['B', 'M', 'P', 'U', 'Y']);
        statuses.clear();
        assert!(statuses.is_empty());
    }

    proptest! {
        #[test]
        fn statuses_never_downgrade(
            target in "[A-Z]{5}",
            guesses in prop::collection::vec("[A-Z]{5}", 1..8),
        ) {
            let mut statuses = LetterStatuses::new();
            for g in &guesses {
                let before = statuses.clone();
                guess(&mut statuses, g, &target);
                for (l, status) in before.iter() {
                    let after = statuses.get(l);
                    prop_assert!(after.is_some_and(|after| after >= status));
                }
            }
        }
    }
}
