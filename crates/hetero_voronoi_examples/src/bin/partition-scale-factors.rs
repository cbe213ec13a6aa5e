use glam::DVec2;
use hetero_voronoi::prelude::*;
use hetero_voronoi_examples::{init_tracing, render_labels_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let grid = GridSpec::new(DVec2::ZERO, DVec2::new(60.0, 40.0), 1.0);
    let locations = LocationSet::from_grid(&grid)?;
    let partitioner = Partitioner::try_new(locations)?;

    // Agent 2 is slower (larger scale), so its region shrinks.
    let agents = [
        DVec2::new(10.0, 10.0),
        DVec2::new(50.0, 10.0),
        DVec2::new(30.0, 30.0),
        DVec2::new(15.0, 35.0),
    ];
    let scale_factors = [1.0, 0.8, 1.6, 1.0];

    let map = partitioner.update_voronoi_map(&agents, &scale_factors)?;
    for (agent, cell) in map.labels.iter() {
        tracing::info!("Agent {} owns {} locations.", agent, cell.len());
    }

    let rc = RenderConfig::fit((960, 640), partitioner.locations()).with_point_radius(8);
    render_labels_to_png(
        partitioner.locations(),
        &map.labels,
        &agents,
        &rc,
        "partition-scale-factors.png",
    )
}
