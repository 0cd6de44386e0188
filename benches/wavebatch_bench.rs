//! Criterion benchmarks for the wave batching strategies.
//!
//! Uses seeded synthetic workloads so every strategy sees the same input.
//! Pacing is disabled; only algorithm time is measured.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_wavebatch::coordinator::{Coordinator, EngineConfig, StrategyKind};
use u_wavebatch::generator::{generate_orders, generate_skus, Complexity};
use u_wavebatch::metrics::evaluate;
use u_wavebatch::model::{Order, Sku};
use u_wavebatch::random::create_rng;
use u_wavebatch::strategy::{AnnealingConfig, NoopObserver};

fn workload(orders: usize, complexity: Complexity) -> (Vec<Sku>, Vec<Order>) {
    let mut rng = create_rng(Some(42));
    let skus = generate_skus(4, &mut rng);
    let orders = generate_orders(orders, &skus, complexity, &mut rng);
    (skus, orders)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics_evaluate");

    for &n in &[10usize, 100, 1000] {
        let (skus, orders) = workload(n, Complexity::High);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(skus, orders), |b, (s, o)| {
            b.iter(|| black_box(evaluate(black_box(o), black_box(s))))
        });
    }
    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");
    group.sample_size(10);

    let coordinator = Coordinator::new(
        EngineConfig::batch().with_annealing(AnnealingConfig::default().with_seed(42)),
    )
    .expect("valid engine config");

    for &n in &[20usize, 100] {
        let (skus, orders) = workload(n, Complexity::Medium);
        for kind in [
            StrategyKind::Greedy,
            StrategyKind::RemainderPairing,
            StrategyKind::SimulatedMilp,
            StrategyKind::SimilarityGrouping,
        ] {
            group.bench_with_input(
                BenchmarkId::new(kind.id(), n),
                &(&skus, &orders),
                |b, (s, o)| {
                    b.iter(|| {
                        let result = coordinator.run_kind(kind, black_box(o), black_box(s), &mut NoopObserver);
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_metrics, bench_strategies);
criterion_main!(benches);
