use blitzzone_core::{
    BoxRegion, Countdown, Digit, Grid, Position, Scoreboard, TickOutcome, TimerToken, scoring,
    validate,
};
use blitzzone_generator::{GeneratedPuzzle, GridSeed, PuzzleGenerator, SeedSequence};
use log::{debug, info};

use crate::{EditError, EditOutcome, SudokuEvent, SudokuOutcome, SudokuSettings};

/// Phase of a speed Sudoku round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SudokuPhase {
    /// Waiting for [`SudokuEvent::Start`]. A new round has no puzzle yet; a
    /// reset round shows the puzzle the next start plays.
    Ready,
    /// The clock is running and the blank region accepts edits.
    Playing,
    /// The round is over; only a reset leaves this phase.
    Summary,
}

/// A speed Sudoku round.
///
/// Each puzzle is a solved grid with one 3×3 box blanked. The player fills
/// the box; a correct fill awards the seconds left on the clock and draws the
/// next puzzle, a conflicting fill costs [`PENALTY_SECONDS`] and the same box
/// must be corrected. The round ends when the clock runs out.
///
/// Only cells inside the current blank region can be edited.
///
/// [`PENALTY_SECONDS`]: crate::PENALTY_SECONDS
///
/// # Example
///
/// ```
/// use blitzzone_sudoku::{SudokuEvent, SudokuOutcome, SudokuRound, SudokuSettings};
///
/// let mut round = SudokuRound::new(SudokuSettings::default());
/// assert!(round.phase().is_ready());
///
/// let SudokuOutcome::Started(token) = round.handle_event(SudokuEvent::Start) else {
///     unreachable!();
/// };
/// assert!(round.phase().is_playing());
/// assert_eq!(round.timer_token(), Some(token));
///
/// // Fill the blank region with the stored solution.
/// let region = round.region().unwrap();
/// let solution = round.solution().unwrap().clone();
/// for pos in region.positions() {
///     round.handle_event(SudokuEvent::SetCell(pos, solution[pos]));
/// }
/// assert_eq!(round.score(), 90);
/// assert_eq!(round.streak(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SudokuRound {
    settings: SudokuSettings,
    phase: SudokuPhase,
    puzzle: Option<GeneratedPuzzle>,
    selected: Option<Position>,
    countdown: Countdown,
    scoreboard: Scoreboard,
    seeds: SeedSequence,
    generator: PuzzleGenerator,
}

impl SudokuRound {
    /// Creates a round in the `ready` phase with random puzzles.
    #[must_use]
    pub fn new(settings: SudokuSettings) -> Self {
        Self::from_sequence(settings, SeedSequence::random())
    }

    /// Creates a round whose puzzles are derived from `seed`.
    #[must_use]
    pub fn with_seed(settings: SudokuSettings, seed: GridSeed) -> Self {
        Self::from_sequence(settings, SeedSequence::new(seed))
    }

    fn from_sequence(settings: SudokuSettings, seeds: SeedSequence) -> Self {
        Self {
            settings,
            phase: SudokuPhase::Ready,
            puzzle: None,
            selected: None,
            countdown: Countdown::new(settings.duration_secs),
            scoreboard: Scoreboard::new(),
            seeds,
            generator: PuzzleGenerator::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SudokuPhase {
        self.phase
    }

    /// Settings the round was created with.
    #[must_use]
    pub fn settings(&self) -> &SudokuSettings {
        &self.settings
    }

    /// The grid as the player sees it, once a puzzle has been drawn.
    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        self.puzzle.as_ref().map(|puzzle| &puzzle.problem)
    }

    /// The blank region of the current puzzle.
    #[must_use]
    pub fn region(&self) -> Option<BoxRegion> {
        self.puzzle.as_ref().map(|puzzle| puzzle.region)
    }

    /// The solved grid the current puzzle was cut from.
    #[must_use]
    pub fn solution(&self) -> Option<&Grid> {
        self.puzzle.as_ref().map(|puzzle| &puzzle.solution)
    }

    /// Seed of the current puzzle.
    #[must_use]
    pub fn puzzle_seed(&self) -> Option<GridSeed> {
        self.puzzle.as_ref().map(|puzzle| puzzle.seed)
    }

    /// Base seed every puzzle of this round is derived from.
    #[must_use]
    pub fn base_seed(&self) -> GridSeed {
        self.seeds.base()
    }

    /// Value at `pos` in the current grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Digit> {
        self.grid().and_then(|grid| grid[pos])
    }

    /// Currently selected cell.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selected
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

    /// Regions completed in a row since the last reset.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.scoreboard.streak()
    }

    /// Regions completed since the last reset.
    #[must_use]
    pub fn total_completed(&self) -> u32 {
        self.scoreboard.completed()
    }

    /// Applies one event and reports what happened.
    pub fn handle_event(&mut self, event: SudokuEvent) -> SudokuOutcome {
        match event {
            SudokuEvent::Start => self
                .start()
                .map_or(SudokuOutcome::Ignored, SudokuOutcome::Started),
            SudokuEvent::SelectCell(pos) => match self.select_cell(pos) {
                Ok(()) => SudokuOutcome::Selected(pos),
                Err(err) => SudokuOutcome::Rejected(err),
            },
            SudokuEvent::CycleValue => self
                .cycle_value()
                .map_or_else(SudokuOutcome::Rejected, SudokuOutcome::Edit),
            SudokuEvent::SetCell(pos, value) => self
                .set_cell(pos, value)
                .map_or_else(SudokuOutcome::Rejected, SudokuOutcome::Edit),
            SudokuEvent::Tick(token) => self.tick(token),
            SudokuEvent::End => {
                if self.end() {
                    SudokuOutcome::Finished
                } else {
                    SudokuOutcome::Ignored
                }
            }
            SudokuEvent::Reset => {
                self.reset();
                SudokuOutcome::Reset
            }
        }
    }

    /// Starts the clock on the pending puzzle, drawing one if none is shown.
    ///
    /// Returns `None` unless the round is `ready`.
    pub fn start(&mut self) -> Option<TimerToken> {
        if !self.phase.is_ready() {
            debug!("start ignored in {:?}", self.phase);
            return None;
        }
        if self.puzzle.is_none() {
            self.draw_puzzle();
        }
        self.phase = SudokuPhase::Playing;
        let token = self.countdown.start();
        info!(
            "sudoku round started: {}s on the clock, base seed {}",
            self.countdown.remaining(),
            self.seeds.base()
        );
        Some(token)
    }

    /// Selects a cell of the blank region.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotPlaying`] outside the playing phase and
    /// [`EditError::OutsideRegion`] for cells outside the blank region.
    pub fn select_cell(&mut self, pos: Position) -> Result<(), EditError> {
        self.check_editable(pos)?;
        self.selected = Some(pos);
        Ok(())
    }

    /// Advances the selected cell: empty → 1 → … → 9 → empty.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotPlaying`] outside the playing phase and
    /// [`EditError::NoSelection`] when no cell is selected.
    pub fn cycle_value(&mut self) -> Result<EditOutcome, EditError> {
        if !self.phase.is_playing() {
            return Err(EditError::NotPlaying);
        }
        let pos = self.selected.ok_or(EditError::NoSelection)?;
        let next = match self.cell(pos) {
            None => Some(Digit::D1),
            Some(digit) => digit.next(),
        };
        self.set_cell(pos, next)
    }

    /// Sets or clears a cell of the blank region, then scores the region if
    /// it became complete.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotPlaying`] outside the playing phase and
    /// [`EditError::OutsideRegion`] for cells outside the blank region.
    pub fn set_cell(
        &mut self,
        pos: Position,
        value: Option<Digit>,
    ) -> Result<EditOutcome, EditError> {
        self.check_editable(pos)?;
        let Some(puzzle) = self.puzzle.as_mut() else {
            return Err(EditError::NotPlaying);
        };
        if puzzle.problem[pos] == value {
            return Ok(EditOutcome::Unchanged);
        }
        puzzle.problem.set(pos, value);

        if !validate::is_region_complete(&puzzle.problem, puzzle.region) {
            return Ok(EditOutcome::Edited);
        }
        if validate::is_region_valid(&puzzle.problem, puzzle.region) {
            Ok(self.complete_region())
        } else {
            Ok(self.penalize())
        }
    }

    /// Delivers one clock tick.
    pub fn tick(&mut self, token: TimerToken) -> SudokuOutcome {
        if !self.phase.is_playing() {
            debug!("tick ignored in {:?}", self.phase);
            return SudokuOutcome::Ignored;
        }
        match self.countdown.tick(token) {
            TickOutcome::Stale => {
                debug!("stale sudoku tick {token:?}");
                SudokuOutcome::Ignored
            }
            TickOutcome::Running { remaining } => SudokuOutcome::Ticked { remaining },
            TickOutcome::Expired => {
                self.finish();
                SudokuOutcome::Finished
            }
        }
    }

    /// Ends a playing round early. Returns `false` if it was not playing.
    pub fn end(&mut self) -> bool {
        if !self.phase.is_playing() {
            return false;
        }
        self.finish();
        true
    }

    /// Returns to `ready` with score, streak, and completions zeroed, the
    /// clock restored, and a fresh puzzle drawn. Any running countdown is
    /// cancelled.
    pub fn reset(&mut self) {
        self.countdown.reset(self.settings.duration_secs);
        self.scoreboard.reset();
        self.phase = SudokuPhase::Ready;
        self.draw_puzzle();
        info!("sudoku round reset");
    }

    fn check_editable(&self, pos: Position) -> Result<(), EditError> {
        if !self.phase.is_playing() {
            return Err(EditError::NotPlaying);
        }
        match &self.puzzle {
            Some(puzzle) if puzzle.region.contains(pos) => Ok(()),
            _ => Err(EditError::OutsideRegion { pos }),
        }
    }

    fn draw_puzzle(&mut self) {
        let seed = self.seeds.next_seed();
        self.puzzle = Some(self.generator.generate_with_seed(seed));
        self.selected = None;
    }

    fn complete_region(&mut self) -> EditOutcome {
        let remaining = self.countdown.remaining();
        let points = scoring::region_award(remaining);
        self.scoreboard.record_success(points);
        info!(
            "region solved: +{points} (score {}, streak {})",
            self.scoreboard.score(),
            self.scoreboard.streak()
        );
        if remaining > 0 {
            self.draw_puzzle();
        } else {
            self.finish();
        }
        EditOutcome::RegionSolved { points }
    }

    fn penalize(&mut self) -> EditOutcome {
        let remaining = self.countdown.penalize(self.settings.penalty_secs);
        info!("invalid region: -{}s, {remaining}s left", self.settings.penalty_secs);
        if remaining == 0 {
            self.finish();
        }
        EditOutcome::Penalized { remaining }
    }

    fn finish(&mut self) {
        self.countdown.cancel();
        self.phase = SudokuPhase::Summary;
        self.selected = None;
        info!(
            "sudoku round over: score {}, streak {}, completed {}",
            self.scoreboard.score(),
            self.scoreboard.streak(),
            self.scoreboard.completed()
        );
    }
}
