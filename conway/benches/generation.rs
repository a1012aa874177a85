//! Benchmarks for the generation step.

use conway::{Grid, next_generation, next_generation_into, randomize_grid_with};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};

fn random_grid(size: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(2024);
    randomize_grid_with(&Grid::new(size, size), &mut rng, 0.6)
}

fn bench_in_place(c: &mut Criterion) {
    for size in [30, 100, 300] {
        let start = random_grid(size);
        c.bench_function(&format!("next_generation_{}", size), |b| {
            b.iter_batched_ref(
                || start.clone(),
                |grid| {
                    next_generation(black_box(grid));
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
}

fn bench_double_buffer(c: &mut Criterion) {
    for size in [30, 100, 300] {
        let mut current = random_grid(size);
        let mut next = Grid::new(size, size);
        c.bench_function(&format!("next_generation_into_{}", size), |b| {
            b.iter(|| {
                next_generation_into(black_box(&current), &mut next);
                std::mem::swap(&mut current, &mut next);
            })
        });
    }
}

criterion_group!(benches, bench_in_place, bench_double_buffer);
criterion_main!(benches);
