//! Benchmarks for the tick pass and template loading.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wireworld_engine::templates;
use wireworld_engine::Grid;

/// A dense grid: every other row is a full-width wire carrying a pulse.
fn pulse_lattice(width: usize, height: usize) -> Grid {
    let template: String = (0..height)
        .map(|row| {
            if row % 2 == 0 {
                format!("h{}\n", "#".repeat(width - 1))
            } else {
                "\n".to_string()
            }
        })
        .collect();
    Grid::from_template(width, height, &template).unwrap()
}

fn bench_tick(c: &mut Criterion) {
    let lattice = pulse_lattice(256, 256);
    c.bench_function("tick_256x256_lattice", |b| {
        b.iter(|| black_box(&lattice).tick())
    });

    let repeater = Grid::from_template(64, 32, templates::REPEATER).unwrap();
    c.bench_function("tick_64x32_repeater", |b| {
        b.iter(|| black_box(&repeater).tick())
    });
}

fn bench_load(c: &mut Criterion) {
    let grid = Grid::new(256, 256).unwrap();
    c.bench_function("load_256x256_repeater", |b| {
        b.iter(|| black_box(&grid).load(templates::REPEATER))
    });
}

fn bench_clone(c: &mut Criterion) {
    let lattice = pulse_lattice(256, 256);
    c.bench_function("clone_256x256_lattice", |b| {
        b.iter(|| black_box(&lattice).clone())
    });
}

criterion_group!(benches, bench_tick, bench_load, bench_clone);
criterion_main!(benches);
