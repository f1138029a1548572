use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_odds::simulation::{simulate, SimulationConfig, SimulationRequest};

fn bench_simulate(c: &mut Criterion) {
    let heads_up = SimulationRequest::from_form(2, "as ks", "").expect("bench fixture");
    let full_ring = SimulationRequest::from_form(9, "", "").expect("bench fixture");

    let mut g = c.benchmark_group("simulate_1000");
    g.sample_size(20);
    for jobs in [1usize, 4] {
        let cfg = SimulationConfig::default().with_trials(1_000).with_jobs(jobs).with_seed(1);
        g.bench_with_input(BenchmarkId::new("heads_up", jobs), &cfg, |b, cfg| {
            b.iter(|| simulate(black_box(&heads_up), cfg))
        });
        g.bench_with_input(BenchmarkId::new("nine_players", jobs), &cfg, |b, cfg| {
            b.iter(|| simulate(black_box(&full_ring), cfg))
        });
    }
    g.finish();
}

criterion_group!(benches, bench_simulate);
criterion_main!(benches);
