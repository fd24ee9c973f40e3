//! Benchmarks for grid and puzzle generation.
//!
//! # Benchmarks
//!
//! - **`grid_generator`**: fills an empty grid by randomized backtracking.
//! - **`puzzle_generator`**: fills a grid and blanks one box.
//!
//! Uses fixed seeds so every run measures the same searches.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use blitzzone_generator::{GridGenerator, GridSeed, PuzzleGenerator};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_grid_generator(c: &mut Criterion) {
    let generator = GridGenerator::new();
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = GridSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("grid_generator", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_puzzle_generator(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = GridSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("puzzle_generator", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(5));
    targets = bench_grid_generator, bench_puzzle_generator
);
criterion_main!(benches);
