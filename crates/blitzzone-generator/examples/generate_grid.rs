//! Example demonstrating puzzle generation for the speed Sudoku game.
//!
//! # Usage
//!
//! Generate one puzzle from a random seed:
//!
//! ```sh
//! cargo run --example generate_grid
//! ```
//!
//! Reproduce a puzzle from a seed:
//!
//! ```sh
//! cargo run --example generate_grid -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Sample many grids in parallel and report how many are distinct:
//!
//! ```sh
//! cargo run --example generate_grid -- --sample 1000
//! ```

use std::{collections::HashSet, process};

use blitzzone_core::{Grid, validate};
use blitzzone_generator::{GridGenerator, GridSeed, PuzzleGenerator};
use clap::Parser;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed as 64 hex digits. A random seed is used when omitted.
    #[arg(long, value_name = "HEX")]
    seed: Option<GridSeed>,

    /// Generate this many solved grids and report distinctness instead.
    #[arg(long, value_name = "COUNT")]
    sample: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Some(count) = args.sample {
        if count == 0 {
            eprintln!("--sample must be at least 1.");
            process::exit(1);
        }
        sample(count);
        return;
    }

    let generator = PuzzleGenerator::new();
    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Blank region:");
    println!("  {}", puzzle.region);
    println!();
    println!("Problem:");
    print_grid(&puzzle.problem);
    println!();
    println!("Solution:");
    print_grid(&puzzle.solution);
}

fn sample(count: usize) {
    let generator = GridGenerator::new();
    let grids = (0..count)
        .into_par_iter()
        .map(|_| generator.generate().grid)
        .collect::<Vec<_>>();
    let invalid = grids.iter().filter(|grid| !validate::is_solved(grid)).count();
    let distinct = grids.iter().collect::<HashSet<_>>().len();

    println!("Sampled: {count}");
    println!("Distinct: {distinct}");
    println!("Invalid: {invalid}");
    if invalid > 0 {
        process::exit(1);
    }
}

fn print_grid(grid: &Grid) {
    let text = grid.to_string();
    for row in text.as_bytes().chunks(9) {
        println!("  {}", String::from_utf8_lossy(row));
    }
}
