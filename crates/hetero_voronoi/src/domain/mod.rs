//! The discretized domain being partitioned.
//!
//! A [`LocationSet`] is an ordered, immutable list of 2D candidate locations. The index of a
//! location is its identity in every result the partitioner produces.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod grid;

pub use grid::{GridSpec, MAX_GRID_POINTS};

/// Ordered, immutable set of candidate locations.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocationSet {
    points: Vec<DVec2>,
}

impl LocationSet {
    /// Collects locations from anything convertible to [`DVec2`], e.g. `[f64; 2]`,
    /// `(f64, f64)` or `mint::Vector2<f64>`.
    pub fn new<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<DVec2>,
    {
        Self {
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    /// Discretizes the rectangle described by `spec` into a regular lattice.
    pub fn from_grid(spec: &GridSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self {
            points: spec.points(),
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<DVec2> {
        self.points.get(index).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }

    pub fn as_slice(&self) -> &[DVec2] {
        &self.points
    }

    /// Locations as `mint` vectors for consumers on another math library.
    pub fn to_mint(&self) -> Vec<mint::Vector2<f64>> {
        self.points.iter().map(|&p| p.into()).collect()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty set.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }
}

impl From<Vec<DVec2>> for LocationSet {
    fn from(points: Vec<DVec2>) -> Self {
        Self { points }
    }
}

impl<P: Into<DVec2>> FromIterator<P> for LocationSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}
