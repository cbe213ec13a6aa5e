//! Scalar distance functions used by the partitioner.
//!
//! Plain [`l1_distance`] and [`l2_distance`] between equal-length vectors, plus the
//! heterogeneity-aware [`hetero_distance`] which combines a raw spatial distance with one
//! saturating, capability-weighted term per [`HeterogeneityDimension`].
use crate::error::{Error, Result};

pub mod hetero;

pub use hetero::{continuous_distance, hetero_distance, HeterogeneityDimension};

/// Manhattan distance between two vectors of equal length.
pub fn l1_distance(u: &[f64], v: &[f64]) -> Result<f64> {
    Error::check_len("l1_distance operands", u.len(), v.len())?;
    Ok(u.iter().zip(v).map(|(a, b)| (a - b).abs()).sum())
}

/// Euclidean distance between two vectors of equal length.
pub fn l2_distance(u: &[f64], v: &[f64]) -> Result<f64> {
    Error::check_len("l2_distance operands", u.len(), v.len())?;
    Ok(u
        .iter()
        .zip(v)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt())
}
