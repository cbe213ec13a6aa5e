mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use hetero_voronoi::prelude::{
    GridSpec, HeteroConfig, HeterogeneityDimension, LocationSet, Partitioner,
};

const EXTENT: DVec2 = DVec2::new(100.0, 100.0);
const RESOLUTIONS: [f64; 3] = [4.0, 2.0, 1.0];
const AGENT_COUNTS: [usize; 3] = [2, 4, 8];

fn grid_locations(resolution: f64) -> LocationSet {
    LocationSet::from_grid(&GridSpec::new(DVec2::ZERO, EXTENT, resolution))
        .expect("valid bench grid")
}

fn hetero_partitioner(locations: LocationSet, agents: usize) -> Partitioner {
    let config = HeteroConfig::new(agents)
        .with_hetero_space(vec![
            HeterogeneityDimension::Speed,
            HeterogeneityDimension::BatteryLife,
        ])
        .with_motion_primitives(
            (0..agents)
                .map(|i| vec![0.5 + i as f64, 2.0 - 0.1 * i as f64])
                .collect(),
        );
    Partitioner::with_hetero(locations, config).expect("valid bench config")
}

fn partition_update_map_benches(c: &mut Criterion) {
    for &agents in &AGENT_COUNTS {
        let mut group = c.benchmark_group(format!("partition/update_voronoi_map/agents_{agents}"));
        let positions = common::random_agents(agents, EXTENT, 0xC0FFEE ^ agents as u64);
        let scales = vec![1.0; agents];

        for &resolution in &RESOLUTIONS {
            let partitioner = Partitioner::new(grid_locations(resolution));
            group.throughput(common::pair_throughput(partitioner.locations().len(), agents));

            group.bench_with_input(
                BenchmarkId::from_parameter(resolution),
                &resolution,
                |b, _| {
                    b.iter(|| black_box(partitioner.update_voronoi_map(&positions, &scales)));
                },
            );
        }

        group.finish();
    }
}

fn partition_cells_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition/cells");

    for &agents in &AGENT_COUNTS {
        let partitioner = hetero_partitioner(grid_locations(2.0), agents);
        let positions = common::random_agents(agents, EXTENT, 0xFACE ^ agents as u64);
        group.throughput(common::pair_throughput(partitioner.locations().len(), agents));

        group.bench_with_input(BenchmarkId::new("per_agent", agents), &agents, |b, &n| {
            b.iter(|| {
                for agent in 0..n {
                    black_box(partitioner.voronoi_cell(&positions, agent).ok());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("shared_map", agents), &agents, |b, _| {
            b.iter(|| black_box(partitioner.voronoi_cells(&positions).ok()));
        });

        group.bench_with_input(BenchmarkId::new("distance_map", agents), &agents, |b, _| {
            b.iter(|| black_box(partitioner.distance_map(&positions).ok()));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::bench_criterion();
    targets = partition_update_map_benches, partition_cells_benches
}
criterion_main!(benches);
