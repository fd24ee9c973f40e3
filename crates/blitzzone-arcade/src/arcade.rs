use blitzzone_core::TimerToken;
use blitzzone_generator::GridSeed;
use blitzzone_sudoku::{SudokuEvent, SudokuOutcome, SudokuRound, SudokuSettings};
use blitzzone_word::{WordEvent, WordList, WordListError, WordOutcome, WordRound, WordSettings};
use log::{debug, info, warn};

use crate::{ArcadeEvent, ArcadeOutcome, EventQueue, GameKind, WordSlot};

/// Clock settings for both games.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArcadeSettings {
    /// Settings for Speed Sudoku.
    pub sudoku: SudokuSettings,
    /// Settings for Word Blitz.
    pub word: WordSettings,
}

/// Both games and the menu selection.
#[derive(Debug, Clone)]
pub struct Arcade {
    settings: ArcadeSettings,
    selected: GameKind,
    sudoku: SudokuRound,
    word: WordSlot,
    word_seed: Option<u64>,
}

impl Arcade {
    /// Creates an arcade showing the first menu entry, with random puzzles and
    /// targets. The word game waits for [`ArcadeEvent::WordsLoaded`].
    #[must_use]
    pub fn new(settings: ArcadeSettings) -> Self {
        Self {
            settings,
            selected: GameKind::default(),
            sudoku: SudokuRound::new(settings.sudoku),
            word: WordSlot::AwaitingWords,
            word_seed: None,
        }
    }

    /// Like [`new`](Self::new), but every puzzle and target is derived from
    /// the given seeds.
    #[must_use]
    pub fn with_seeds(settings: ArcadeSettings, grid_seed: GridSeed, word_seed: u64) -> Self {
        Self {
            settings,
            selected: GameKind::default(),
            sudoku: SudokuRound::with_seed(settings.sudoku, grid_seed),
            word: WordSlot::AwaitingWords,
            word_seed: Some(word_seed),
        }
    }

    /// Settings the arcade was created with.
    #[must_use]
    pub fn settings(&self) -> &ArcadeSettings {
        &self.settings
    }

    /// The game currently shown.
    #[must_use]
    pub fn selected(&self) -> GameKind {
        self.selected
    }

    /// The Sudoku round.
    #[must_use]
    pub fn sudoku(&self) -> &SudokuRound {
        &self.sudoku
    }

    /// The word game slot.
    #[must_use]
    pub fn word(&self) -> &WordSlot {
        &self.word
    }

    /// Token the shown game's clock expects, if it is running.
    #[must_use]
    pub fn timer_token(&self) -> Option<TimerToken> {
        match self.selected {
            GameKind::SpeedSudoku => self.sudoku.timer_token(),
            GameKind::WordBlitz => self.word.round().and_then(WordRound::timer_token),
        }
    }

    /// Handles every queued event in order and returns their outcomes.
    pub fn pump(&mut self, queue: &mut EventQueue) -> Vec<ArcadeOutcome> {
        queue
            .take_all()
            .into_iter()
            .map(|event| self.handle_event(event))
            .collect()
    }

    /// Applies one event and reports what happened.
    pub fn handle_event(&mut self, event: ArcadeEvent) -> ArcadeOutcome {
        match event {
            ArcadeEvent::SelectGame(game) => {
                let token = self.select_game(game);
                ArcadeOutcome::Selected { game, token }
            }
            ArcadeEvent::Sudoku(event) => self.dispatch_sudoku(event),
            ArcadeEvent::Word(event) => self.dispatch_word(event),
            ArcadeEvent::Tick(token) => match self.selected {
                GameKind::SpeedSudoku => self.dispatch_sudoku(SudokuEvent::Tick(token)),
                GameKind::WordBlitz => self.dispatch_word(WordEvent::Tick(token)),
            },
            ArcadeEvent::WordsLoaded(entries) => match self.load_words(entries.as_slice()) {
                Ok(()) => ArcadeOutcome::WordsReady,
                Err(err) => ArcadeOutcome::WordsRejected(err),
            },
            ArcadeEvent::PlayAgain => self.play_again(),
        }
    }

    /// Shows `game`, resetting the game being left. Returns the shown game's
    /// live timer token.
    pub fn select_game(&mut self, game: GameKind) -> Option<TimerToken> {
        if game != self.selected {
            self.reset_game(self.selected);
            self.selected = game;
            info!("switched to {game}");
            if game.is_word_blitz()
                && let Some(round) = self.word.round_mut()
            {
                round.resume();
            }
        }
        self.timer_token()
    }

    /// Validates `entries` and installs a fresh word round.
    ///
    /// # Errors
    ///
    /// Returns the [`WordListError`] for an unusable list. The error is also
    /// kept in the slot and the word game stays unavailable until a valid
    /// list arrives.
    pub fn load_words<S: AsRef<str>>(&mut self, entries: &[S]) -> Result<(), WordListError> {
        match WordList::new(entries) {
            Ok(words) => {
                info!("word list loaded: {} words", words.len());
                let mut round = match self.word_seed {
                    Some(seed) => WordRound::with_seed(words, self.settings.word, seed),
                    None => WordRound::new(words, self.settings.word),
                };
                if !self.selected.is_word_blitz() {
                    round.pause();
                }
                self.word = WordSlot::Ready(Box::new(round));
                Ok(())
            }
            Err(err) => {
                warn!("word list rejected: {err}");
                self.word = WordSlot::Misconfigured(err.clone());
                Err(err)
            }
        }
    }

    fn dispatch_sudoku(&mut self, event: SudokuEvent) -> ArcadeOutcome {
        if !self.selected.is_speed_sudoku() {
            debug!("sudoku event {event:?} ignored while {} is shown", self.selected);
            return ArcadeOutcome::Ignored;
        }
        ArcadeOutcome::Sudoku(self.sudoku.handle_event(event))
    }

    fn dispatch_word(&mut self, event: WordEvent) -> ArcadeOutcome {
        if !self.selected.is_word_blitz() {
            debug!("word event {event:?} ignored while {} is shown", self.selected);
            return ArcadeOutcome::Ignored;
        }
        let Some(round) = self.word.round_mut() else {
            debug!("word event {event:?} ignored: no word list");
            return ArcadeOutcome::Ignored;
        };
        ArcadeOutcome::Word(round.handle_event(event))
    }

    fn play_again(&mut self) -> ArcadeOutcome {
        match self.selected {
            GameKind::SpeedSudoku => {
                self.sudoku.reset();
                self.sudoku
                    .start()
                    .map_or(ArcadeOutcome::Ignored, |token| {
                        ArcadeOutcome::Sudoku(SudokuOutcome::Started(token))
                    })
            }
            GameKind::WordBlitz => match self.word.round_mut() {
                Some(round) => ArcadeOutcome::Word(WordOutcome::Reset(round.reset())),
                None => ArcadeOutcome::Ignored,
            },
        }
    }

    fn reset_game(&mut self, game: GameKind) {
        match game {
            GameKind::SpeedSudoku => self.sudoku.reset(),
            GameKind::WordBlitz => {
                if let Some(round) = self.word.round_mut() {
                    round.reset();
                    round.pause();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use blitzzone_word::Key;

    use super::*;

    fn arcade() -> Arcade {
        Arcade::with_seeds(ArcadeSettings::default(), GridSeed::from([5; 32]), 11)
    }

    #[test]
    fn test_starts_on_word_blitz_awaiting_words() {
        let arcade = arcade();
        assert_eq!(arcade.selected(), GameKind::WordBlitz);
        assert!(arcade.word().is_awaiting_words());
        assert!(arcade.sudoku().phase().is_ready());
        assert_eq!(arcade.timer_token(), None);
    }

    #[test]
    fn test_word_events_ignored_without_words() {
        let mut arcade = arcade();
        let outcome = arcade.handle_event(WordEvent::Key(Key::Enter).into());
        assert_eq!(outcome, ArcadeOutcome::Ignored);
        assert_eq!(arcade.handle_event(ArcadeEvent::PlayAgain), ArcadeOutcome::Ignored);
    }

    #[test]
    fn test_bad_word_list_is_recorded() {
        let mut arcade = arcade();
        let outcome = arcade.handle_event(ArcadeEvent::WordsLoaded(vec!["HI".to_owned()]));
        assert!(outcome.is_words_rejected());
        assert!(arcade.word().is_misconfigured());
        assert!(arcade.word().error().is_some());

        let outcome = arcade.handle_event(ArcadeEvent::WordsLoaded(Vec::new()));
        assert_eq!(outcome, ArcadeOutcome::WordsRejected(WordListError::Empty));

        arcade.load_words(&["crane"]).unwrap();
        assert!(arcade.word().is_ready());
        assert!(arcade.timer_token().is_some());
    }

    #[test]
    fn test_events_for_hidden_game_are_dropped() {
        let mut arcade = arcade();
        assert_eq!(
            arcade.handle_event(SudokuEvent::Start.into()),
            ArcadeOutcome::Ignored
        );
        assert!(arcade.sudoku().phase().is_ready());
    }

    #[test]
    fn test_leaving_sudoku_resets_it() {
        let mut arcade = arcade();
        arcade.select_game(GameKind::SpeedSudoku);
        let outcome = arcade.handle_event(SudokuEvent::Start.into());
        let ArcadeOutcome::Sudoku(SudokuOutcome::Started(token)) = outcome else {
            panic!("expected start, got {outcome:?}");
        };
        arcade.handle_event(ArcadeEvent::Tick(token));
        assert_eq!(arcade.sudoku().remaining(), 89);

        arcade.select_game(GameKind::WordBlitz);
        assert!(arcade.sudoku().phase().is_ready());
        assert_eq!(arcade.sudoku().remaining(), 90);
        assert_eq!(arcade.sudoku().timer_token(), None);

        // The old countdown is gone even after coming back.
        arcade.select_game(GameKind::SpeedSudoku);
        assert_eq!(
            arcade.handle_event(ArcadeEvent::Tick(token)),
            ArcadeOutcome::Sudoku(SudokuOutcome::Ignored)
        );
    }

    #[test]
    fn test_leaving_word_blitz_resets_it() {
        let mut arcade = arcade();
        arcade.load_words(&["CRANE", "SLATE"]).unwrap();
        let token = arcade.timer_token().unwrap();
        arcade.handle_event(ArcadeEvent::Tick(token));
        arcade.handle_event(WordEvent::Key(Key::parse("Q").unwrap()).into());

        let selected = arcade.select_game(GameKind::SpeedSudoku);
        assert_eq!(selected, None);
        let round = arcade.word().round().unwrap();
        assert_eq!(round.remaining(), 180);
        assert!(round.board().current_row().letters().is_empty());
        assert_eq!(round.timer_token(), None);

        let outcome = arcade.handle_event(ArcadeEvent::SelectGame(GameKind::WordBlitz));
        let ArcadeOutcome::Selected { game, token: Some(new_token) } = outcome else {
            panic!("expected a running clock, got {outcome:?}");
        };
        assert_eq!(game, GameKind::WordBlitz);
        assert_ne!(new_token, token);
        assert_eq!(arcade.word().round().unwrap().remaining(), 180);
    }

    #[test]
    fn test_words_loaded_while_hidden_wait_for_selection() {
        let mut arcade = arcade();
        arcade.select_game(GameKind::SpeedSudoku);
        arcade.load_words(&["CRANE", "SLATE"]).unwrap();
        let round = arcade.word().round().unwrap();
        assert!(round.phase().is_playing());
        assert_eq!(round.timer_token(), None);

        let token = arcade.select_game(GameKind::WordBlitz);
        assert!(token.is_some());
        assert_eq!(arcade.word().round().unwrap().timer_token(), token);
    }

    #[test]
    fn test_play_again_restarts_sudoku() {
        let mut arcade = arcade();
        arcade.select_game(GameKind::SpeedSudoku);
        arcade.handle_event(SudokuEvent::Start.into());
        arcade.handle_event(SudokuEvent::End.into());
        assert!(arcade.sudoku().phase().is_summary());

        let outcome = arcade.handle_event(ArcadeEvent::PlayAgain);
        assert!(matches!(
            outcome,
            ArcadeOutcome::Sudoku(SudokuOutcome::Started(_))
        ));
        assert!(arcade.sudoku().phase().is_playing());
        assert!(arcade.sudoku().grid().is_some());
        assert_eq!(arcade.sudoku().score(), 0);
    }

    #[test]
    fn test_pump_drains_queue_in_order() {
        let mut arcade = arcade();
        let mut queue = EventQueue::new();
        queue.request(ArcadeEvent::WordsLoaded(vec!["CRANE".to_owned()]));
        for name in ["C", "R", "A", "N", "E", "Enter"] {
            queue.request(WordEvent::Key(Key::parse(name).unwrap()));
        }
        let outcomes = arcade.pump(&mut queue);
        assert!(queue.is_empty());
        assert_eq!(outcomes.len(), 7);
        assert!(outcomes[0].is_words_ready());
        assert!(matches!(
            outcomes[6],
            ArcadeOutcome::Word(WordOutcome::Solved { points: 280, .. })
        ));
        assert_eq!(arcade.word().round().unwrap().score(), 280);
    }
}
