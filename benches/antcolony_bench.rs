//! Criterion benchmarks for the u-antcolony engine.
//!
//! Measures full session runs, single-cycle stepping, and raw tour
//! construction on seeded random instances.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_antcolony::aco::{AcoConfig, AcoSession, PheromoneMatrix, TourBuilder};
use u_antcolony::random::create_rng;
use u_antcolony::tsp::{generate_cities, DistanceMatrix, VisibilityMatrix};

fn bench_session_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_run");
    group.sample_size(10);

    for (n, m, cycles) in [(20usize, 20usize, 20usize), (50, 50, 20), (100, 50, 10)] {
        let config = AcoConfig::new(n)
            .with_ants(m)
            .with_cycles(cycles)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_m{}_c{}", n, m, cycles), n),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut session =
                        AcoSession::new(black_box(config.clone())).expect("valid config");
                    black_box(session.run())
                })
            },
        );
    }
    group.finish();
}

fn bench_session_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_step");
    group.sample_size(10);

    for &n in &[20, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let config = AcoConfig::new(n).with_cycles(usize::MAX).with_seed(42);
            let mut session = AcoSession::new(config).expect("valid config");
            b.iter(|| black_box(session.step()));
        });
    }
    group.finish();
}

fn bench_tour_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_build");

    for &n in &[50, 100, 200] {
        let cities = generate_cities(n, 42);
        let distances = DistanceMatrix::from_cities(&cities).expect("n >= 2");
        let visibility = VisibilityMatrix::from_distances(&distances);
        let field = PheromoneMatrix::new(n, 1.0);
        let builder = TourBuilder::new(&field, &visibility, 1.0, 5.0);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let mut rng = create_rng(7);
            b.iter(|| black_box(builder.build(0, &mut rng)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_session_run, bench_session_step, bench_tour_build);
criterion_main!(benches);
