//! Criterion benchmarks for venturecast_core
//!
//! Run with: cargo bench -p venturecast_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use venturecast_core::engine::Engine;
use venturecast_core::params::ParamKey;
use venturecast_core::revenue::project_revenue;
use venturecast_core::scenario::ScenarioKind;
use venturecast_core::{compute_dcf, estimate_costs};
use venturecast_core::infra::{AiHosting, CloudProvider};

fn bench_compute_dcf(c: &mut Criterion) {
    let scenario = ScenarioKind::Realistic.scenario();

    let mut group = c.benchmark_group("compute_dcf");
    for years in [5u32, 10, 20] {
        group.bench_with_input(BenchmarkId::new("years", years), &years, |b, &years| {
            b.iter(|| compute_dcf(black_box(years), black_box(12.0), black_box(3.0), &scenario))
        });
    }
    group.finish();
}

fn bench_project_revenue(c: &mut Criterion) {
    c.bench_function("project_revenue", |b| {
        b.iter(|| {
            project_revenue(
                black_box(100_000.0),
                black_box(0.05),
                black_box([29.0, 79.0, 249.0, 1249.0]),
            )
        })
    });
}

fn bench_estimate_costs(c: &mut Criterion) {
    c.bench_function("estimate_costs", |b| {
        b.iter(|| {
            estimate_costs(
                CloudProvider::Aws,
                AiHosting::Hybrid,
                black_box(250_000.0),
                black_box(140.0),
            )
        })
    });
}

fn bench_engine_mutation(c: &mut Criterion) {
    let mut engine = Engine::new().unwrap();

    c.bench_function("engine_set_marketing_spend", |b| {
        let mut spend = 100_000.0;
        b.iter(|| {
            spend += 1.0;
            engine.set_parameter(ParamKey::MarketingSpend, black_box(spend))
        })
    });

    c.bench_function("engine_full_rebuild", |b| b.iter(|| Engine::new()));
}

criterion_group!(
    benches,
    bench_compute_dcf,
    bench_project_revenue,
    bench_estimate_costs,
    bench_engine_mutation,
);
criterion_main!(benches);
