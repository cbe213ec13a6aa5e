use glam::DVec2;
use hetero_voronoi::prelude::*;
use hetero_voronoi_examples::{init_tracing, render_heatmap_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let grid = GridSpec::new(DVec2::new(-20.0, -20.0), DVec2::new(40.0, 40.0), 0.5);
    let locations = LocationSet::from_grid(&grid)?;
    let partitioner = Partitioner::with_hetero(locations, HeteroConfig::homogeneous(2))?;

    let agents = [DVec2::new(-10.0, 5.0), DVec2::new(12.0, -8.0)];
    let map = partitioner.distance_map(&agents)?;
    let rc = RenderConfig::fit((800, 800), partitioner.locations()).with_background([16, 16, 24]);

    // Normalized distance to agent 0, plus the hetero-distance seen by agent 1.
    let to_first: Vec<f64> = map.column(0).collect();
    render_heatmap_to_png(
        partitioner.locations(),
        &to_first,
        &agents,
        &rc,
        "distance-heatmap-agent0.png",
    )?;

    let space = [HeterogeneityDimension::Mobility];
    let hetero: Vec<f64> = map
        .column(1)
        .map(|d| hetero_distance(&space, &[4.0], d))
        .collect::<Result<_>>()?;
    render_heatmap_to_png(
        partitioner.locations(),
        &hetero,
        &agents,
        &rc,
        "distance-heatmap-agent1-mobility.png",
    )
}
