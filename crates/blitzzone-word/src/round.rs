use blitzzone_core::{Countdown, Scoreboard, TickOutcome, TimerToken, scoring};
use log::{debug, info};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

use crate::{
    GuessBoard, Key, Letter, LetterStatuses, Word, WordEvent, WordList, WordOutcome, WordSettings,
    classify,
};

/// Why a word round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum EndReason {
    /// Every attempt on a word was used without solving it.
    #[display("out of attempts")]
    AttemptsExhausted,
    /// The clock reached zero.
    #[display("time up")]
    TimeUp,
}

/// Phase of a word round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum WordPhase {
    /// Keys and ticks are accepted.
    Playing,
    /// The round is over; only a reset leaves this phase.
    Summary(EndReason),
}

/// A Word Blitz round.
///
/// A round is playing from the moment it is built. Solving a word awards
/// `100 + seconds left`, draws a new target and clears the board while the
/// clock keeps running.
///
/// # Example
///
/// ```
/// use blitzzone_word::{Key, WordEvent, WordList, WordRound, WordSettings};
///
/// let words = WordList::new(["CRANE"]).unwrap();
/// let mut round = WordRound::new(words, WordSettings::default());
///
/// for name in ["C", "R", "A", "N", "E", "Enter"] {
///     let key = Key::parse(name).unwrap();
///     round.handle_event(WordEvent::Key(key));
/// }
/// assert_eq!(round.score(), 100 + 180);
/// assert_eq!(round.words_solved(), 1);
/// assert_eq!(round.current_attempt(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct WordRound {
    settings: WordSettings,
    words: WordList,
    rng: Pcg64,
    phase: WordPhase,
    target: Word,
    board: GuessBoard,
    letters: LetterStatuses,
    countdown: Countdown,
    scoreboard: Scoreboard,
}

impl WordRound {
    /// Creates a playing round with a randomly seeded target sequence.
    #[must_use]
    pub fn new(words: WordList, settings: WordSettings) -> Self {
        Self::from_rng(words, settings, Pcg64::from_seed(rand::random()))
    }

    /// Creates a playing round whose targets are derived from `seed`.
    #[must_use]
    pub fn with_seed(words: WordList, settings: WordSettings, seed: u64) -> Self {
        Self::from_rng(words, settings, Pcg64::seed_from_u64(seed))
    }

    fn from_rng(words: WordList, settings: WordSettings, mut rng: Pcg64) -> Self {
        let target = words.choose(&mut rng);
        let mut countdown = Countdown::new(settings.duration_secs);
        countdown.start();
        info!(
            "word round started: {} words, {}s on the clock",
            words.len(),
            settings.duration_secs
        );
        Self {
            settings,
            words,
            rng,
            phase: WordPhase::Playing,
            target,
            board: GuessBoard::new(),
            letters: LetterStatuses::new(),
            countdown,
            scoreboard: Scoreboard::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> WordPhase {
        self.phase
    }

    /// Settings the round was created with.
    #[must_use]
    pub fn settings(&self) -> &WordSettings {
        &self.settings
    }

    /// The word list targets are drawn from.
    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// The hidden word of the current cycle.
    #[must_use]
    pub fn target(&self) -> Word {
        self.target
    }

    /// The guess rows of the current cycle.
    #[must_use]
    pub fn board(&self) -> &GuessBoard {
        &self.board
    }

    /// Index of the row being edited (0-based).
    #[must_use]
    pub fn current_attempt(&self) -> usize {
        self.board.current_attempt()
    }

    /// Best known status of each guessed letter in the current cycle.
    #[must_use]
    pub fn letter_statuses(&self) -> &LetterStatuses {
        &self.letters
    }

    /// Seconds left on the clock.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Token the host must pass with each tick, while the clock runs.
    #[must_use]
    pub fn timer_token(&self) -> Option<TimerToken> {
        self.countdown.token()
    }

    /// Total points this round.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    /// Words solved in a row since the last reset.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.scoreboard.streak()
    }

    /// Words solved since the last reset.
    #[must_use]
    pub fn words_solved(&self) -> u32 {
        self.scoreboard.completed()
    }

    /// Applies one event and reports what happened.
    pub fn handle_event(&mut self, event: WordEvent) -> WordOutcome {
        match event {
            WordEvent::Key(key) => self.press_key(key),
            WordEvent::Tick(token) => self.tick(token),
            WordEvent::Reset => WordOutcome::Reset(self.reset()),
        }
    }

    /// Applies one key press.
    pub fn press_key(&mut self, key: Key) -> WordOutcome {
        if !self.phase.is_playing() {
            debug!("key {key:?} ignored in {:?}", self.phase);
            return WordOutcome::Ignored;
        }
        match key {
            Key::Letter(letter) => self.type_letter(letter),
            Key::Backspace => self
                .board
                .pop()
                .map_or(WordOutcome::Ignored, WordOutcome::Erased),
            Key::Enter => self.submit(),
        }
    }

    /// Delivers one clock tick.
    pub fn tick(&mut self, token: TimerToken) -> WordOutcome {
        if !self.phase.is_playing() {
            debug!("tick ignored in {:?}", self.phase);
            return WordOutcome::Ignored;
        }
        match self.countdown.tick(token) {
            TickOutcome::Stale => {
                debug!("stale word tick {token:?}");
                WordOutcome::Ignored
            }
            TickOutcome::Running { remaining } => WordOutcome::Ticked { remaining },
            TickOutcome::Expired => {
                self.finish(EndReason::TimeUp);
                WordOutcome::TimeUp
            }
        }
    }

    /// Starts over: score and streak zeroed, a new target, and a full clock
    /// running under a fresh token, which is returned.
    pub fn reset(&mut self) -> TimerToken {
        self.scoreboard.reset();
        self.next_cycle();
        self.countdown.reset(self.settings.duration_secs);
        self.phase = WordPhase::Playing;
        info!("word round reset");
        self.countdown.start()
    }

    /// Stops the clock without ending the round. The remaining time is kept
    /// and pending ticks become stale.
    pub fn pause(&mut self) {
        if self.countdown.is_running() {
            self.countdown.cancel();
            debug!("word round paused at {}s", self.countdown.remaining());
        }
    }

    /// Restarts a paused clock under a fresh token.
    ///
    /// Returns the running token, or `None` once the round is over.
    pub fn resume(&mut self) -> Option<TimerToken> {
        if !self.phase.is_playing() {
            return None;
        }
        if self.countdown.is_running() {
            return self.countdown.token();
        }
        debug!("word round resumed at {}s", self.countdown.remaining());
        Some(self.countdown.start())
    }

    fn type_letter(&mut self, letter: Letter) -> WordOutcome {
        if self.board.push(letter) {
            WordOutcome::Typed(letter)
        } else {
            WordOutcome::Ignored
        }
    }

    fn submit(&mut self) -> WordOutcome {
        let Some(guess) = self.board.current_row().word() else {
            debug!("incomplete guess ignored");
            return WordOutcome::Ignored;
        };
        let feedback = classify(&guess, &self.target);
        self.letters.update(&guess, &feedback);
        self.board.freeze_current(feedback);

        if feedback.is_solved() {
            let points = scoring::word_award(self.countdown.remaining());
            self.scoreboard.record_success(points);
            info!(
                "word solved: {guess} +{points} (score {}, streak {})",
                self.scoreboard.score(),
                self.scoreboard.streak()
            );
            self.next_cycle();
            return WordOutcome::Solved { feedback, points };
        }
        if self.board.advance() {
            WordOutcome::Guessed(feedback)
        } else {
            self.finish(EndReason::AttemptsExhausted);
            WordOutcome::OutOfAttempts(feedback)
        }
    }

    fn next_cycle(&mut self) {
        self.target = self.words.choose(&mut self.rng);
        self.board.clear();
        self.letters.clear();
    }

    fn finish(&mut self, reason: EndReason) {
        self.countdown.cancel();
        self.phase = WordPhase::Summary(reason);
        info!(
            "word round over ({reason}): score {}, words solved {}, target was {}",
            self.scoreboard.score(),
            self.scoreboard.completed(),
            self.target
        );
    }
}
