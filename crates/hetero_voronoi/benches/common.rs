//! Shared Criterion setup and seeded inputs for the partition benches.
#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Criterion tuned for the short, allocation-heavy partition kernels.
pub fn bench_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(30)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3))
        .noise_threshold(0.03)
}

/// One element per location-agent distance evaluated.
pub fn pair_throughput(locations: usize, agents: usize) -> Throughput {
    Throughput::Elements((locations * agents).max(1) as u64)
}

/// `count` agents spread uniformly over `[0, extent]`.
pub fn random_agents(count: usize, extent: DVec2, seed: u64) -> Vec<DVec2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| DVec2::new(rng.random::<f64>(), rng.random::<f64>()) * extent)
        .collect()
}

/// `count` values drawn uniformly from `[0, scale)`.
pub fn random_values(count: usize, scale: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random::<f64>() * scale).collect()
}
