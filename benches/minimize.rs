use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dfa_minimization::{prelude::*, random::generate_random_dfa_seeded};

fn minimize_random(c: &mut Criterion) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let mut group = c.benchmark_group("minimize");
    for size in [16, 64, 256] {
        let dfa = generate_random_dfa_seeded(4, size, size as u64);
        group.bench_with_input(BenchmarkId::from_parameter(size), &dfa, |b, dfa| {
            b.iter(|| minimize(black_box(dfa)))
        });
    }
    group.finish();
}

criterion_group!(benches, minimize_random);
criterion_main!(benches);
