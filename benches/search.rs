//! Search engine benchmarks.
//!
//! Random obstacle boards at a few sizes and densities, one group per
//! engine. Run with `cargo bench`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use marga_nav::core::{Cell, Grid};
use marga_nav::{beam, weighted};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Random board with roughly `density` obstacle coverage; the start and
/// goal corners stay clear.
fn random_grid(side: usize, density: f64, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut obstacles = HashSet::new();

    for row in 0..side {
        for col in 0..side {
            if rng.gen_bool(density) {
                obstacles.insert(Cell::new(row, col));
            }
        }
    }
    obstacles.remove(&Cell::new(0, 0));
    obstacles.remove(&Cell::new(side - 1, side - 1));

    Grid::new(side, obstacles)
}

fn bench_beam(c: &mut Criterion) {
    let mut group = c.benchmark_group("beam");
    for &side in &[10usize, 30, 60] {
        let grid = random_grid(side, 0.15, 42);
        let start = Cell::new(0, 0);
        let goal = Cell::new(side - 1, side - 1);

        group.bench_with_input(BenchmarkId::from_parameter(side), &grid, |b, grid| {
            b.iter(|| beam::find_path(grid, start, goal).unwrap());
        });
    }
    group.finish();
}

fn bench_weighted(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted");
    for &side in &[10usize, 30, 60] {
        let grid = random_grid(side, 0.15, 42);
        let start = Cell::new(0, 0);
        let goal = Cell::new(side - 1, side - 1);

        group.bench_with_input(BenchmarkId::from_parameter(side), &grid, |b, grid| {
            b.iter(|| weighted::find_path(grid, start, goal).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_beam, bench_weighted);
criterion_main!(benches);
