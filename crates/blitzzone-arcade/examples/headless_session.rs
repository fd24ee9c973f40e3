//! Plays a scripted session of both games without a UI.
//!
//! The script cheats: it reads the target word and the stored solution, so
//! the output shows scoring and timing rather than skill.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example headless_session
//! RUST_LOG=info cargo run --example headless_session -- --seed 00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff --words crane,slate,trick
//! ```

use std::process;

use blitzzone_arcade::{Arcade, ArcadeEvent, ArcadeOutcome, ArcadeSettings, EventQueue, GameKind};
use blitzzone_generator::GridSeed;
use blitzzone_sudoku::{SudokuEvent, SudokuOutcome, SudokuSettings};
use blitzzone_word::{Key, WordEvent, WordOutcome, WordSettings};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle seed as 64 hex digits. Random puzzles and targets when omitted.
    #[arg(long, value_name = "HEX")]
    seed: Option<GridSeed>,

    /// Seed for target words, used together with `--seed`.
    #[arg(long, default_value_t = 0)]
    word_seed: u64,

    /// Comma-separated word list for Word Blitz.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "CRANE,SLATE,TRICK,HOTLY,PLUMB,GLYPH,FJORD,WALTZ"
    )]
    words: Vec<String>,

    /// Seconds on the Sudoku clock.
    #[arg(long, default_value_t = blitzzone_sudoku::GAME_DURATION)]
    sudoku_secs: u32,

    /// Seconds on the Word Blitz clock.
    #[arg(long, default_value_t = blitzzone_word::WORD_GAME_DURATION)]
    word_secs: u32,

    /// Seconds the script waits between moves (at least 1).
    #[arg(long, default_value_t = 7)]
    think_secs: u32,
}

fn main() {
    better_panic::install();
    env_logger::init();
    let args = Args::parse();
    let think_secs = args.think_secs.max(1);

    let settings = ArcadeSettings {
        sudoku: SudokuSettings {
            duration_secs: args.sudoku_secs,
            ..SudokuSettings::default()
        },
        word: WordSettings {
            duration_secs: args.word_secs,
        },
    };
    let mut arcade = match args.seed {
        Some(seed) => Arcade::with_seeds(settings, seed, args.word_seed),
        None => Arcade::new(settings),
    };
    let mut queue = EventQueue::new();

    queue.request(ArcadeEvent::WordsLoaded(args.words.clone()));
    if let Some(ArcadeOutcome::WordsRejected(err)) = arcade.pump(&mut queue).pop() {
        eprintln!("Cannot play {}: {err}", GameKind::WordBlitz);
        process::exit(1);
    }

    println!("== {} ==", GameKind::WordBlitz);
    play_word(&mut arcade, &mut queue, think_secs);

    println!();
    println!("== {} ==", GameKind::SpeedSudoku);
    play_sudoku(&mut arcade, &mut queue, think_secs);
}

/// Advances the shown game's clock. Returns `false` once it has stopped.
fn wait(arcade: &mut Arcade, queue: &mut EventQueue, secs: u32) -> bool {
    for _ in 0..secs {
        let Some(token) = arcade.timer_token() else {
            return false;
        };
        queue.request(ArcadeEvent::Tick(token));
        arcade.pump(queue);
    }
    arcade.timer_token().is_some()
}

fn play_word(arcade: &mut Arcade, queue: &mut EventQueue, think_secs: u32) {
    queue.request(ArcadeEvent::SelectGame(GameKind::WordBlitz));
    arcade.pump(queue);

    while wait(arcade, queue, think_secs) {
        let Some(round) = arcade.word().round() else {
            return;
        };
        let target = round.target().to_string();
        for ch in target.chars() {
            if let Some(key) = Key::parse(&ch.to_string()) {
                queue.request(WordEvent::Key(key));
            }
        }
        queue.request(WordEvent::Key(Key::Enter));
        for outcome in arcade.pump(queue) {
            if let ArcadeOutcome::Word(WordOutcome::Solved { points, .. }) = outcome {
                println!("{target}: +{points}");
            }
        }
    }

    if let Some(round) = arcade.word().round() {
        println!(
            "Score {} with {} words solved ({:?})",
            round.score(),
            round.words_solved(),
            round.phase()
        );
    }
}

fn play_sudoku(arcade: &mut Arcade, queue: &mut EventQueue, think_secs: u32) {
    queue.request(ArcadeEvent::SelectGame(GameKind::SpeedSudoku));
    queue.request(SudokuEvent::Start);
    arcade.pump(queue);

    while wait(arcade, queue, think_secs) {
        let sudoku = arcade.sudoku();
        let (Some(region), Some(solution)) = (sudoku.region(), sudoku.solution()) else {
            return;
        };
        for pos in region.positions() {
            queue.request(SudokuEvent::SetCell(pos, solution[pos]));
        }
        for outcome in arcade.pump(queue) {
            if let ArcadeOutcome::Sudoku(SudokuOutcome::Edit(edit)) = outcome
                && edit.is_region_solved()
            {
                println!("{region}: {edit:?}");
            }
        }
    }

    let sudoku = arcade.sudoku();
    println!(
        "Score {} with {} regions completed",
        sudoku.score(),
        sudoku.total_completed()
    );
}
