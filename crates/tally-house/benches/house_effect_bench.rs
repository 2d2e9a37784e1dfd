//! Criterion benchmarks for tally-house.
//!
//! Panels of 200 and 1000 polls from six pollsters over two years.

use criterion::{criterion_group, criterion_main, Criterion};

use tally_core::observation::latest_timestamp;
use tally_core::{Category, Observation};
use tally_house::{estimate_effects, DecayedHouseEffectEstimator};
use test_fixtures::obs;

const SOURCES: [&str; 6] = ["Norstat", "Opinion", "Respons", "InFact", "Verian", "Norfakta"];

fn make_panel(size: usize) -> Vec<Observation> {
    (0..size)
        .map(|i| {
            let days = (i * 730 / size) as i64;
            let wobble = (i % 7) as f64 * 0.3;
            let values: Vec<(Category, f64)> = Category::ALL
                .iter()
                .enumerate()
                .map(|(j, c)| (*c, 3.0 + j as f64 * 2.0 + wobble))
                .collect();
            obs(SOURCES[i % SOURCES.len()], days, &values)
        })
        .collect()
}

fn bench_rolling(c: &mut Criterion) {
    for size in [200, 1000] {
        let panel = make_panel(size);
        c.bench_function(&format!("rolling_effects_{size}"), |b| {
            b.iter(|| estimate_effects(&panel))
        });
    }
}

fn bench_decayed(c: &mut Criterion) {
    let estimator = DecayedHouseEffectEstimator::new();
    for size in [200, 1000] {
        let panel = make_panel(size);
        let reference = latest_timestamp(&panel).unwrap_or_else(test_fixtures::epoch);
        c.bench_function(&format!("decayed_effects_{size}"), |b| {
            b.iter(|| estimator.estimate_enhanced(&panel, reference))
        });
    }
}

criterion_group!(benches, bench_rolling, bench_decayed);
criterion_main!(benches);
