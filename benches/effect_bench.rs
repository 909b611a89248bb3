//! Benchmark for the deferred `Effect` container.
//!
//! Uses `to_async(&runtime)` so the tokio runtime is entered once per sample
//! rather than once per iteration.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use effectum::effect::{Effect, EffectError};
use std::hint::black_box;

fn build_chain(depth: usize) -> Effect<usize, EffectError> {
    (0..depth).fold(Effect::from_value(0), |effect, index| {
        effect.chain(move |x| Effect::from_value(x + index))
    })
}

// =============================================================================
// Construction and Run
// =============================================================================

fn benchmark_effect_run(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("effect_run");

    group.bench_function("from_value", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let effect: Effect<i32, EffectError> = Effect::from_value(black_box(42));
            black_box(effect.run().await)
        });
    });

    group.bench_function("unit", |bencher| {
        bencher.to_async(&runtime).iter(|| async { black_box(Effect::unit().run().await) });
    });

    group.bench_function("rerun_prebuilt", |bencher| {
        let effect: Effect<i32, EffectError> = Effect::from_fn(|| Ok(black_box(7)));
        bencher.to_async(&runtime).iter(|| {
            let effect = effect.clone();
            async move { black_box(effect.await) }
        });
    });

    group.finish();
}

// =============================================================================
// Chain and Catch
// =============================================================================

fn benchmark_effect_chain(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("effect_chain");

    for depth in [10, 100, 1000] {
        let effect = build_chain(depth);
        group.bench_with_input(BenchmarkId::new("run", depth), &effect, |bencher, effect| {
            bencher.to_async(&runtime).iter(|| {
                let future = effect.run();
                async move { black_box(future.await) }
            });
        });
    }

    group.finish();
}

fn benchmark_effect_catch(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("effect_catch");

    let recovered: Effect<i32, EffectError> =
        Effect::<i32, EffectError>::reject("bench").catch(|_| Effect::from_value(0));
    group.bench_function("recover", |bencher| {
        bencher.to_async(&runtime).iter(|| {
            let future = recovered.run();
            async move { black_box(future.await) }
        });
    });

    let untouched: Effect<i32, EffectError> =
        Effect::from_value(1).catch(|_: EffectError| Effect::from_value(0));
    group.bench_function("skip_handler", |bencher| {
        bencher.to_async(&runtime).iter(|| {
            let future = untouched.run();
            async move { black_box(future.await) }
        });
    });

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_effect_run,
    benchmark_effect_chain,
    benchmark_effect_catch
);

criterion_main!(benches);
