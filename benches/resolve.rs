use bucketry::{interval, profiles, EpochMillis, Fidelity, Resolver, TimeRange};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark a raw ladder lookup (hot path on every chart render)
fn bench_ladder_lookup(c: &mut Criterion) {
    let ladder = profiles::ladder(Fidelity::Issues);

    c.bench_function("ladder_lookup", |b| {
        b.iter(|| ladder.interval_for(black_box(10_080)));
    });
}

/// Benchmark lookups across range lengths on every profile
fn bench_ladder_by_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("ladder_by_profile");

    for fidelity in Fidelity::ALL {
        let ladder = profiles::ladder(fidelity);
        group.bench_with_input(BenchmarkId::from_parameter(fidelity), &fidelity, |b, _| {
            b.iter(|| {
                for minutes in [0i64, 60, 1_440, 20_160, 86_400] {
                    black_box(ladder.interval_for(black_box(minutes)));
                }
            });
        });
    }
    group.finish();
}

/// Benchmark period parsing plus dispatch
fn bench_period_interval(c: &mut Criterion) {
    let range = TimeRange::period("14d");

    c.bench_function("period_interval", |b| {
        b.iter(|| interval(black_box(&range), Fidelity::Medium));
    });
}

/// Benchmark absolute-range resolution through a Resolver
fn bench_absolute_resolve(c: &mut Criterion) {
    let resolver = Resolver::default();
    let range = TimeRange::absolute(
        EpochMillis::from_secs(1_700_000_000),
        EpochMillis::from_secs(1_700_000_000 + 7 * 86_400),
    );

    c.bench_function("absolute_resolve", |b| {
        b.iter(|| resolver.resolve(black_box(&range), Fidelity::Spans));
    });
}

criterion_group!(
    benches,
    bench_ladder_lookup,
    bench_ladder_by_profile,
    bench_period_interval,
    bench_absolute_resolve,
);
criterion_main!(benches);
