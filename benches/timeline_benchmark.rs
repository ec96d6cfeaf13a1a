/*!
 * Timeline Benchmarks
 *
 * Compare policies and idle strategies on sparse and dense workloads
 */

use cpu_sched_sim::{schedule_with, EngineOptions, IdleStrategy, Policy, ProcessSet};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_set(seed: u64, max_arrival: i64) -> ProcessSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut set = ProcessSet::new();
    for i in 0..set.capacity() {
        let arrival = rng.gen_range(0..=max_arrival);
        let burst = rng.gen_range(1..=20);
        set.add(&format!("P{i}"), arrival, burst)
            .expect("generated process is valid");
    }
    set
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policies");
    let set = random_set(42, 10);

    for policy in Policy::ALL {
        let options = EngineOptions::new(policy).with_quantum(3);
        group.bench_with_input(
            BenchmarkId::from_parameter(policy.as_str()),
            &options,
            |b, options| b.iter(|| schedule_with(black_box(&set), options).unwrap()),
        );
    }

    group.finish();
}

fn bench_idle_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("idle_strategy_sparse");
    // Arrivals spread far apart so idle gaps dominate
    let set = random_set(7, 5_000);

    for policy in [Policy::Sjn, Policy::Srt] {
        for idle in [IdleStrategy::Tick, IdleStrategy::JumpToNextArrival] {
            let options = EngineOptions::new(policy).with_idle(idle);
            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), idle.as_str()),
                &options,
                |b, options| b.iter(|| schedule_with(black_box(&set), options).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_policies, bench_idle_strategies);
criterion_main!(benches);
