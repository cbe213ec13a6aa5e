#![forbid(unsafe_code)]
//! hetero_voronoi: Voronoi partitioning of discretized 2D domains among heterogeneous agents.
//!
//! Modules:
//! - metric: L1/L2 distances and the heterogeneity-weighted distance
//! - domain: the ordered location set and regular grid discretization
//! - partition: scale-weighted assignment, normalized distance maps and per-agent cells
//!
//! Enable the `serde` feature to (de)serialize locations, grids and heterogeneity configuration.
pub mod domain;
pub mod error;
pub mod metric;
pub mod partition;

/// Convenient re-exports for common types. Import with `use hetero_voronoi::prelude::*;`.
pub mod prelude {
    pub use crate::domain::{GridSpec, LocationSet};
    pub use crate::error::{Error, Result};
    pub use crate::metric::{
        continuous_distance, hetero_distance, l1_distance, l2_distance, HeterogeneityDimension,
    };
    pub use crate::partition::{DistanceMatrix, HeteroConfig, Labels, Partitioner, VoronoiMap};
}
