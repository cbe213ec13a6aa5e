//! Partitioning of the location set among agents.
//!
//! [`Partitioner`] owns the fixed [`crate::domain::LocationSet`] and optional
//! [`HeteroConfig`]; results come back as [`VoronoiMap`]s, [`DistanceMatrix`]es or cells.
pub mod config;
pub mod labels;
pub mod matrix;
pub mod partitioner;

pub use config::HeteroConfig;
pub use labels::{Labels, VoronoiMap};
pub use matrix::DistanceMatrix;
pub use partitioner::Partitioner;
