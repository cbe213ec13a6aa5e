use glam::DVec2;
use hetero_voronoi::prelude::*;
use hetero_voronoi_examples::{init_tracing, render_cells_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let grid = GridSpec::new(DVec2::ZERO, DVec2::new(50.0, 50.0), 1.0);
    let locations = LocationSet::from_grid(&grid)?;

    // Dimensions are usually read from a parameter file as strings.
    let hetero_space = ["SPEED", "BATTERYLIFE"]
        .iter()
        .map(|name| name.parse::<HeterogeneityDimension>())
        .collect::<Result<Vec<_>>>()?;

    // Two ground vehicles and one aerial vehicle with a very different profile.
    let config = HeteroConfig::new(3)
        .with_hetero_space(hetero_space)
        .with_motion_primitives(vec![vec![1.0, 0.5], vec![1.0, 0.5], vec![8.0, 3.0]]);
    let partitioner = Partitioner::with_hetero(locations, config)?;

    let agents = [
        DVec2::new(8.0, 8.0),
        DVec2::new(42.0, 10.0),
        DVec2::new(25.0, 40.0),
    ];
    let cells = partitioner.voronoi_cells(&agents)?;
    for (agent, cell) in cells.iter().enumerate() {
        tracing::info!("Agent {} cell has {} locations.", agent, cell.len());
    }

    let rc = RenderConfig::fit((800, 800), partitioner.locations()).with_point_radius(8);
    render_cells_to_png(
        partitioner.locations(),
        &cells,
        &agents,
        &rc,
        "partition-heterogeneous.png",
    )
}
