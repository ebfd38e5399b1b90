use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lifegrid::{Grid, Rule};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn make_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size).expect("valid dimensions");
    grid.seed_random(&mut ChaCha8Rng::seed_from_u64(size as u64));
    grid
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for size in [64, 128, 256] {
        let grid = make_grid(size);

        for (name, rule) in [("canonical", Rule::Canonical), ("inclusive", Rule::Inclusive)] {
            group.bench_with_input(BenchmarkId::new(name, size), &grid, |b, grid| {
                b.iter(|| grid.advance(rule));
            });
        }
    }
    group.finish();
}

fn bench_count_live_neighbors(c: &mut Criterion) {
    let grid = make_grid(128);
    c.bench_function("count_live_neighbors", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for row in 0..grid.height() {
                for col in 0..grid.width() {
                    total += u32::from(grid.count_live_neighbors(row, col));
                }
            }
            total
        });
    });
}

criterion_group!(benches, bench_advance, bench_count_live_neighbors);
criterion_main!(benches);
