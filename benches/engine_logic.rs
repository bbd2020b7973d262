use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gemswap::core::{find_matches, new_grid, EngineConfig, Grid, MatchEngine, SimpleRng};

fn bench_find_matches(c: &mut Criterion) {
    let engine = MatchEngine::with_seed(EngineConfig::default(), 12345).unwrap();
    let grid = engine.grid().clone();

    c.bench_function("find_matches_8x8", |b| {
        b.iter(|| find_matches(black_box(&grid)))
    });
}

fn bench_new_grid(c: &mut Criterion) {
    let config = EngineConfig::default();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("new_grid_8x8", |b| {
        b.iter(|| new_grid(black_box(&config), &mut rng).unwrap())
    });
}

fn bench_try_swap(c: &mut Criterion) {
    let engine = MatchEngine::with_seed(EngineConfig::default(), 12345).unwrap();

    c.bench_function("try_swap_accepted", |b| {
        b.iter_batched(
            || engine.clone(),
            |mut e| {
                if let Some((x, y)) = e.find_legal_swap() {
                    let _ = e.try_swap(x, y);
                }
                e
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_legal_swaps(c: &mut Criterion) {
    let engine = MatchEngine::with_seed(EngineConfig::default(), 12345).unwrap();

    c.bench_function("legal_swaps_8x8", |b| b.iter(|| black_box(&engine).legal_swaps()));
}

fn bench_collapse_column(c: &mut Criterion) {
    let template = Grid::from_text(
        "R
         .
         B
         .
         G
         .
         Y
         .",
    )
    .unwrap();

    c.bench_function("collapse_column_8", |b| {
        b.iter_batched(
            || template.clone(),
            |mut g| g.collapse_column(0).map(|f| f.vacated),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_find_matches,
    bench_new_grid,
    bench_try_swap,
    bench_legal_swaps,
    bench_collapse_column
);
criterion_main!(benches);
