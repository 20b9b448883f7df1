use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mincon::solver::{
    assignment::Assignment,
    conflict::ConflictEngine,
    model::{ConstraintKind, ConstraintMatrix},
    search::{MinConflictsSearch, SearchConfig, SearchStrategy, TabuSearch},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A reproducible instance with roughly `density` of its pairs constrained.
fn random_instance(variables: usize, density: f64, seed: u64) -> ConstraintMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut matrix = ConstraintMatrix::new(variables);
    for i in 0..variables {
        for j in (i + 1)..variables {
            if rng.gen_bool(density) {
                let kind = ConstraintKind::from_code(rng.gen_range(1..=4))
                    .expect("codes 1..=4 always decode");
                matrix.set(i, j, kind);
            }
        }
    }
    matrix
}

fn conflict_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Conflict Evaluation");

    for &variables in &[20usize, 73] {
        group.bench_with_input(
            BenchmarkId::from_parameter(variables),
            &variables,
            |b, &variables| {
                let matrix = random_instance(variables, 0.2, 1);
                let engine = ConflictEngine::new(&matrix);
                let mut rng = ChaCha8Rng::seed_from_u64(2);
                let assignment = Assignment::random(variables, 15, &mut rng);
                b.iter(|| engine.total_conflicts(black_box(&assignment)));
            },
        );
    }
    group.finish();
}

fn search_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Local Search");
    let matrix = random_instance(20, 0.15, 3);
    let config = SearchConfig::new(15, 5, 50);

    group.bench_function("min_conflicts", |b| {
        let strategy = MinConflictsSearch::new(config);
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(4);
            strategy.solve(black_box(&matrix), &mut rng).unwrap()
        });
    });

    group.bench_function("tabu", |b| {
        let strategy = TabuSearch::new(config);
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(4);
            strategy.solve(black_box(&matrix), &mut rng).unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, conflict_benchmarks, search_benchmarks);
criterion_main!(benches);
