//! Per-position feedback for a guess.

use crate::{WORD_LENGTH, Word};

/// Classification of one guessed letter.
///
/// Variants are ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum LetterStatus {
    /// The letter is not in the target, or every occurrence is already accounted for.
    Absent,
    /// The letter is in the target at another position.
    Present,
    /// The letter is in the target at this position.
    Correct,
}

/// Statuses for each position of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// Statuses in guess order.
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Returns `true` when every position is [`LetterStatus::Correct`].
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(LetterStatus::is_correct)
    }
}

/// Compares `guess` with `target`.
///
/// Exact matches are marked first and use up their letter; the remaining
/// positions are then marked [`LetterStatus::Present`] only while unused
/// copies of the letter are left in the target. A letter guessed twice but
/// present once is therefore reported once.
///
/// # Examples
///
/// ```
/// use blitzzone_word::{LetterStatus::*, Word, classify};
///
/// let guess: Word = "SPEED".parse().unwrap();
/// let target: Word = "ABIDE".parse().unwrap();
/// assert_eq!(
///     classify(&guess, &target).statuses(),
///     &[Absent, Absent, Present, Absent, Present],
/// );
/// ```
#[must_use]
pub fn classify(guess: &Word, target: &Word) -> Feedback {
    let mut remaining = [0u8; 26];
    for letter in target.letters() {
        remaining[letter.index()] += 1;
    }

    let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
    for ((status, g), t) in statuses.iter_mut().zip(guess.letters()).zip(target.letters()) {
        if g == t {
            *status = LetterStatus::Correct;
            remaining[g.index()] -= 1;
        }
    }

    for (status, g) in statuses.iter_mut().zip(guess.letters()) {
        if status.is_correct() {
            continue;
        }
        let count = &mut remaining[g.index()];
        if *count > 0 {
            *status = LetterStatus::Present;
            *count -= 1;
        }
    }

    Feedback(statuses)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{LetterStatus::*, *};

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    #[test]
    fn test_anagram_is_all_present() {
        // Target counts: L×2, O, Y, A. No position matches exactly.
        let feedback = classify(&word("ALLOY"), &word("LOYAL"));
        assert_eq!(feedback.statuses(), &[Present; 5]);
        assert!(!feedback.statuses().contains(&Correct));
        assert!(!feedback.is_solved());
    }

    #[test]
    fn test_exact_match_is_all_correct() {
        let feedback = classify(&word("CRANE"), &word("CRANE"));
        assert_eq!(feedback.statuses(), &[Correct; 5]);
        assert!(feedback.is_solved());
    }

    #[test]
    fn test_repeated_letter_counted_once() {
        // One E in the target: the exact match claims it, the other is absent.
        let feedback = classify(&word("EERIE"), &word("CRANE"));
        assert_eq!(
            feedback.statuses(),
            &[Absent, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn test_exact_match_takes_priority_over_earlier_present() {
        // Without an exact match the first copy takes the only L.
        let feedback = classify(&word("LLAMA"), &word("HOTLY"));
        assert_eq!(feedback.statuses(), &[Present, Absent, Absent, Absent, Absent]);

        let feedback = classify(&word("SLEPT"), &word("HOTEL"));
        assert_eq!(
            feedback.statuses(),
            &[Absent, Present, Present, Absent, Present]
        );

        let feedback = classify(&word("LOLLY"), &word("HOTLY"));
        assert_eq!(
            feedback.statuses(),
            &[Absent, Correct, Absent, Correct, Correct]
        );
    }

    #[test]
    fn test_no_common_letters() {
        let feedback = classify(&word("BUMPY"), &word("CRANE"));
        assert_eq!(feedback.statuses(), &[Absent; 5]);
    }

    fn arb_word() -> impl Strategy<Value = Word> {
        "[A-Z]{5}".prop_map(|s| s.parse().unwrap())
    }

    proptest! {
        #[test]
        fn self_guess_is_solved(target in arb_word()) {
            prop_assert!(classify(&target, &target).is_solved());
        }

        #[test]
        fn marks_never_exceed_target_counts(guess in arb_word(), target in arb_word()) {
            let feedback = classify(&guess, &target);
            for letter in guess.letters() {
                let in_target = target.letters().iter().filter(|l| *l == letter).count();
                let marked = guess
                    .letters()
                    .iter()
                    .zip(feedback.statuses())
                    .filter(|(l, status)| *l == letter && !status.is_absent())
                    .count();
                let in_guess = guess.letters().iter().filter(|l| *l == letter).count();
                prop_assert_eq!(marked, in_target.min(in_guess));
            }
        }

        #[test]
        fn correct_iff_same_letter(guess in arb_word(), target in arb_word()) {
            let feedback = classify(&guess, &target);
            for i in 0..WORD_LENGTH {
                prop_assert_eq!(
                    feedback.statuses()[i].is_correct(),
                    guess.letters()[i] == target.letters()[i]
                );
            }
        }
    }
}
