//! Assignment results of the scale-weighted partition.
use crate::partition::DistanceMatrix;

/// Location indices owned by each agent, in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Labels {
    cells: Vec<Vec<usize>>,
}

impl Labels {
    pub(crate) fn with_agents(num_agents: usize) -> Self {
        Self {
            cells: vec![Vec::new(); num_agents],
        }
    }

    pub(crate) fn assign(&mut self, agent: usize, location: usize) {
        self.cells[agent].push(location);
    }

    pub fn num_agents(&self) -> usize {
        self.cells.len()
    }

    /// Locations assigned to `agent`; empty for unknown agents.
    pub fn cell(&self, agent: usize) -> &[usize] {
        self.cells.get(agent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Agent owning `location`, if any.
    pub fn owner_of(&self, location: usize) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.binary_search(&location).is_ok())
    }

    /// `(agent, cell)` pairs in agent order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &[usize])> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(agent, cell)| (agent, cell.as_slice()))
    }

    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.cells
    }
}

impl std::ops::Index<usize> for Labels {
    type Output = [usize];

    fn index(&self, agent: usize) -> &[usize] {
        &self.cells[agent]
    }
}

/// Output of [`crate::partition::Partitioner::update_voronoi_map`].
#[derive(Clone, Debug, PartialEq)]
pub struct VoronoiMap {
    /// Location indices per agent.
    pub labels: Labels,
    /// Scaled distance from every location to every agent.
    pub distances: DistanceMatrix,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Labels {
        let mut labels = Labels::with_agents(3);
        labels.assign(0, 0);
        labels.assign(2, 1);
        labels.assign(0, 2);
        labels
    }

    #[test]
    fn cells_accumulate_in_assignment_order() {
        let labels = sample();
        assert_eq!(labels.num_agents(), 3);
        assert_eq!(labels.cell(0), &[0, 2]);
        assert!(labels.cell(1).is_empty());
        assert_eq!(&labels[2], &[1]);
        assert!(labels.cell(7).is_empty());
    }

    #[test]
    fn owner_of_finds_assigned_agent() {
        let labels = sample();
        assert_eq!(labels.owner_of(2), Some(0));
        assert_eq!(labels.owner_of(1), Some(2));
        assert_eq!(labels.owner_of(9), None);
    }

    #[test]
    fn iter_and_into_inner_expose_all_cells() {
        let labels = sample();
        let sizes: Vec<_> = labels.iter().map(|(a, c)| (a, c.len())).collect();
        assert_eq!(sizes, vec![(0, 2), (1, 0), (2, 1)]);
        assert_eq!(labels.into_inner(), vec![vec![0, 2], vec![], vec![1]]);
    }
}
