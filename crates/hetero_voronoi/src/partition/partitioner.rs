//! Nearest-agent partitioning of a fixed location set.
//!
//! Two paths are offered:
//! - [`Partitioner::update_voronoi_map`]: every location goes to the agent with the smallest
//!   scale-weighted Euclidean distance, lowest agent index winning exact ties.
//! - [`Partitioner::voronoi_cell`] and friends: cells under the heterogeneity-weighted metric
//!   computed from a globally normalized [`Partitioner::distance_map`]. Exact ties put the
//!   location in every tied agent's cell.
//!
//! Every call recomputes from the positions it is given; the partitioner only holds the
//! location set and the optional [`HeteroConfig`], neither of which changes after construction.
use glam::DVec2;
use tracing::{debug, warn};

use crate::domain::LocationSet;
use crate::error::{Error, Result};
use crate::metric::{hetero_distance, HeterogeneityDimension};
use crate::partition::{DistanceMatrix, HeteroConfig, Labels, VoronoiMap};

/// Partitions a fixed [`LocationSet`] among agents.
#[derive(Clone, Debug)]
pub struct Partitioner {
    locations: LocationSet,
    hetero: Option<HeteroConfig>,
}

impl Partitioner {
    /// Creates a partitioner for the scale-weighted path only.
    pub fn new(locations: LocationSet) -> Self {
        Self {
            locations,
            hetero: None,
        }
    }

    /// Like [`Partitioner::new`], but rejects an empty location set.
    pub fn try_new(locations: LocationSet) -> Result<Self> {
        if locations.is_empty() {
            return Err(Error::EmptyLocationSet);
        }
        Ok(Self::new(locations))
    }

    /// Creates a partitioner that also supports the heterogeneity-weighted operations.
    pub fn with_hetero(locations: LocationSet, config: HeteroConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            locations,
            hetero: Some(config),
        })
    }

    pub fn locations(&self) -> &LocationSet {
        &self.locations
    }

    pub fn hetero_config(&self) -> Option<&HeteroConfig> {
        self.hetero.as_ref()
    }

    /// Assigns every location to the agent with the smallest scaled Euclidean distance.
    ///
    /// `scale_factors[j]` multiplies agent `j`'s distances. The returned [`VoronoiMap`] carries
    /// the labels and the full scaled distance table.
    pub fn update_voronoi_map(
        &self,
        agent_positions: &[DVec2],
        scale_factors: &[f64],
    ) -> Result<VoronoiMap> {
        if self.locations.is_empty() {
            return Err(Error::EmptyLocationSet);
        }
        Error::check_len("scale factors", agent_positions.len(), scale_factors.len())?;
        if agent_positions.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one agent is required".into(),
            ));
        }
        warn_non_finite(agent_positions);

        let locations = self.locations.as_slice();
        let distances =
            DistanceMatrix::from_fn(locations.len(), agent_positions.len(), |i, j| {
                locations[i].distance(agent_positions[j]) * scale_factors[j]
            });

        let mut labels = Labels::with_agents(agent_positions.len());
        let mut unassigned = 0;
        for (i, row) in distances.row_iter().enumerate() {
            match argmin(row) {
                Some(agent) => labels.assign(agent, i),
                None => unassigned += 1,
            }
        }
        if unassigned > 0 {
            warn!(
                "{} locations have no finite distance to any agent and were left unassigned.",
                unassigned
            );
        }

        debug!(
            "Voronoi map over {} locations and {} agents.",
            locations.len(),
            agent_positions.len()
        );
        Ok(VoronoiMap { labels, distances })
    }

    /// [`Partitioner::update_voronoi_map`] with the configured scale factors, or `1.0` for
    /// every agent when none are configured.
    pub fn update_voronoi_map_with_config(&self, agent_positions: &[DVec2]) -> Result<VoronoiMap> {
        match self.hetero.as_ref().and_then(|c| c.scale_factors.as_deref()) {
            Some(scales) => self.update_voronoi_map(agent_positions, scales),
            None => self.update_voronoi_map(agent_positions, &vec![1.0; agent_positions.len()]),
        }
    }

    /// Euclidean distance from every location to every agent divided by the largest such
    /// distance, so all entries fall in `[0, 1]`.
    ///
    /// The normalization is global rather than per agent. When every distance is zero the
    /// map is all zeros. Non-finite agent positions are an [`Error::InvalidArgument`].
    pub fn distance_map(&self, agent_positions: &[DVec2]) -> Result<DistanceMatrix> {
        let config = self.require_hetero()?;
        if agent_positions.len() != config.num_agents {
            return Err(Error::AgentCountMismatch {
                expected: config.num_agents,
                actual: agent_positions.len(),
            });
        }
        check_finite(agent_positions)?;

        let locations = self.locations.as_slice();
        let mut map = DistanceMatrix::from_fn(locations.len(), agent_positions.len(), |i, j| {
            locations[i].distance(agent_positions[j])
        });

        let max_distance = map.max().unwrap_or(0.0);
        if max_distance == 0.0 {
            debug!("All agents coincide with all locations; distance map is zero.");
        }
        map.normalize_by(max_distance);
        Ok(map)
    }

    /// Whether no other agent has a strictly smaller hetero-distance than `agent_id` for one
    /// row of a distance map.
    ///
    /// `distance_row` and `motion_primitives` hold one entry per configured agent. Every
    /// distance must be finite.
    pub fn is_agent_closest(
        &self,
        hetero_space: &[HeterogeneityDimension],
        motion_primitives: &[Vec<f64>],
        distance_row: &[f64],
        agent_id: usize,
    ) -> Result<bool> {
        let num_agents = self.require_hetero()?.num_agents;
        check_agent(agent_id, num_agents)?;
        for len in [distance_row.len(), motion_primitives.len()] {
            if len != num_agents {
                return Err(Error::AgentCountMismatch {
                    expected: num_agents,
                    actual: len,
                });
            }
        }
        for primitives in motion_primitives {
            Error::check_len("motion primitives", hetero_space.len(), primitives.len())?;
        }
        if let Some(agent) = distance_row.iter().position(|d| !d.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "distance to agent {agent} is not finite: {}",
                distance_row[agent]
            )));
        }

        let mut hetero = Vec::with_capacity(num_agents);
        fill_hetero_row(hetero_space, motion_primitives, distance_row, &mut hetero)?;
        Ok(is_closest(&hetero, agent_id))
    }

    /// Locations for which `agent_id` is closest under the hetero-distance, in location order.
    pub fn voronoi_cell(&self, agent_positions: &[DVec2], agent_id: usize) -> Result<Vec<DVec2>> {
        let indices = self.voronoi_cell_indices(agent_positions, agent_id)?;
        let locations = self.locations.as_slice();
        Ok(indices.into_iter().map(|i| locations[i]).collect())
    }

    /// Same as [`Partitioner::voronoi_cell`], returning location indices.
    pub fn voronoi_cell_indices(
        &self,
        agent_positions: &[DVec2],
        agent_id: usize,
    ) -> Result<Vec<usize>> {
        let config = self.require_hetero()?;
        check_agent(agent_id, config.num_agents)?;
        let map = self.distance_map(agent_positions)?;

        let mut hetero = Vec::with_capacity(config.num_agents);
        let mut cell = Vec::new();
        for (i, row) in map.row_iter().enumerate() {
            fill_hetero_row(
                &config.hetero_space,
                &config.motion_primitives,
                row,
                &mut hetero,
            )?;
            if is_closest(&hetero, agent_id) {
                cell.push(i);
            }
        }
        Ok(cell)
    }

    /// Cells of every agent from a single distance map.
    ///
    /// Equivalent to calling [`Partitioner::voronoi_cell`] for each agent in turn, including
    /// the overlap on exact ties.
    pub fn voronoi_cells(&self, agent_positions: &[DVec2]) -> Result<Vec<Vec<DVec2>>> {
        let config = self.require_hetero()?;
        let map = self.distance_map(agent_positions)?;
        let locations = self.locations.as_slice();

        let mut hetero = Vec::with_capacity(config.num_agents);
        let mut cells = vec![Vec::new(); config.num_agents];
        for (i, row) in map.row_iter().enumerate() {
            fill_hetero_row(
                &config.hetero_space,
                &config.motion_primitives,
                row,
                &mut hetero,
            )?;
            for (agent, cell) in cells.iter_mut().enumerate() {
                if is_closest(&hetero, agent) {
                    cell.push(locations[i]);
                }
            }
        }
        Ok(cells)
    }

    fn require_hetero(&self) -> Result<&HeteroConfig> {
        self.hetero.as_ref().ok_or(Error::MissingHeteroConfig)
    }
}

fn check_agent(agent: usize, num_agents: usize) -> Result<()> {
    if agent >= num_agents {
        return Err(Error::AgentOutOfRange { agent, num_agents });
    }
    Ok(())
}

fn warn_non_finite(agent_positions: &[DVec2]) {
    for (agent, p) in agent_positions.iter().enumerate() {
        if !p.is_finite() {
            warn!(
                "Agent {} has non-finite position {}; its distances are undefined.",
                agent, p
            );
        }
    }
}

fn check_finite(agent_positions: &[DVec2]) -> Result<()> {
    match agent_positions.iter().position(|p| !p.is_finite()) {
        Some(agent) => Err(Error::InvalidArgument(format!(
            "agent {agent} has non-finite position {}",
            agent_positions[agent]
        ))),
        None => Ok(()),
    }
}

/// Index of the smallest non-NaN entry, the first one on ties.
fn argmin(row: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (j, &d) in row.iter().enumerate() {
        if d.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if d >= b => {}
            _ => best = Some((j, d)),
        }
    }
    best.map(|(j, _)| j)
}

fn fill_hetero_row(
    hetero_space: &[HeterogeneityDimension],
    motion_primitives: &[Vec<f64>],
    distance_row: &[f64],
    out: &mut Vec<f64>,
) -> Result<()> {
    out.clear();
    for (primitives, &d) in motion_primitives.iter().zip(distance_row) {
        out.push(hetero_distance(hetero_space, primitives, d)?);
    }
    Ok(())
}

fn is_closest(hetero: &[f64], agent: usize) -> bool {
    let own = hetero[agent];
    !hetero
        .iter()
        .enumerate()
        .any(|(other, &h)| other != agent && h < own)
}
