//! Regular lattice discretization of a rectangular domain.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upper bound on the number of lattice points a [`GridSpec`] may describe.
pub const MAX_GRID_POINTS: usize = 1 << 28;

/// Rectangle sampled at a fixed resolution, lower-left corner at `origin`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridSpec {
    /// World-space lower-left corner.
    pub origin: DVec2,
    /// Size of the rectangle in world units.
    pub extent: DVec2,
    /// Spacing between neighbouring lattice points.
    pub resolution: f64,
}

impl GridSpec {
    pub fn new(origin: DVec2, extent: DVec2, resolution: f64) -> Self {
        Self {
            origin,
            extent,
            resolution,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "grid resolution must be finite and > 0, got {}",
                self.resolution
            )));
        }
        if !self.extent.is_finite() || self.extent.x < 0.0 || self.extent.y < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "grid extent must be finite and >= 0, got {}",
                self.extent
            )));
        }
        if !self.origin.is_finite() {
            return Err(Error::InvalidArgument("grid origin must be finite".into()));
        }
        let total = axis_count(self.extent.x, self.resolution)
            .zip(axis_count(self.extent.y, self.resolution))
            .and_then(|(nx, ny)| nx.checked_mul(ny))
            .filter(|&n| n <= MAX_GRID_POINTS);
        if total.is_none() {
            return Err(Error::InvalidArgument(format!(
                "grid of extent {} at resolution {} exceeds {MAX_GRID_POINTS} points",
                self.extent, self.resolution
            )));
        }
        Ok(())
    }

    /// Number of lattice points along x and y. Both ends of each axis are included.
    ///
    /// Saturates at `usize::MAX` per axis for specs that fail [`GridSpec::validate`].
    pub fn dimensions(&self) -> (usize, usize) {
        (
            axis_count(self.extent.x, self.resolution).unwrap_or(usize::MAX),
            axis_count(self.extent.y, self.resolution).unwrap_or(usize::MAX),
        )
    }

    /// Lattice points in row-major order, x varying fastest.
    pub(crate) fn points(&self) -> Vec<DVec2> {
        let (nx, ny) = self.dimensions();
        let mut points = Vec::with_capacity(nx * ny);
        for iy in 0..ny {
            for ix in 0..nx {
                points.push(
                    self.origin + DVec2::new(ix as f64, iy as f64) * self.resolution,
                );
            }
        }
        points
    }
}

fn axis_count(extent: f64, resolution: f64) -> Option<usize> {
    let steps = (extent / resolution).round();
    // Also rejects NaN.
    if !(steps >= 0.0 && steps < MAX_GRID_POINTS as f64) {
        return None;
    }
    Some(steps as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_include_both_ends() {
        let spec = GridSpec::new(DVec2::ZERO, DVec2::new(10.0, 4.0), 2.0);
        assert_eq!(spec.dimensions(), (6, 3));
    }

    #[test]
    fn dimensions_round_to_nearest_step() {
        let spec = GridSpec::new(DVec2::ZERO, DVec2::new(0.99, 0.0), 0.5);
        assert_eq!(spec.dimensions(), (3, 1));
    }

    #[test]
    fn points_are_row_major_from_origin() {
        let spec = GridSpec::new(DVec2::new(-1.0, 2.0), DVec2::new(1.0, 1.0), 1.0);
        assert_eq!(
            spec.points(),
            vec![
                DVec2::new(-1.0, 2.0),
                DVec2::new(0.0, 2.0),
                DVec2::new(-1.0, 3.0),
                DVec2::new(0.0, 3.0),
            ]
        );
    }

    #[test]
    fn zero_extent_yields_single_point() {
        let spec = GridSpec::new(DVec2::new(3.0, 3.0), DVec2::ZERO, 0.25);
        assert_eq!(spec.points(), vec![DVec2::new(3.0, 3.0)]);
    }

    #[test]
    fn validate_rejects_bad_resolution_and_extent() {
        let bad_res = GridSpec::new(DVec2::ZERO, DVec2::ONE, 0.0);
        assert!(matches!(bad_res.validate(), Err(Error::InvalidArgument(_))));

        let nan_res = GridSpec::new(DVec2::ZERO, DVec2::ONE, f64::NAN);
        assert!(nan_res.validate().is_err());

        let negative = GridSpec::new(DVec2::ZERO, DVec2::new(-1.0, 1.0), 1.0);
        assert!(negative.validate().is_err());
    }

    #[test]
    fn oversized_lattices_are_rejected() {
        let huge = GridSpec::new(DVec2::ZERO, DVec2::splat(1e10), 1e-10);
        assert!(matches!(huge.validate(), Err(Error::InvalidArgument(_))));
        assert_eq!(huge.dimensions(), (usize::MAX, usize::MAX));

        // Each axis fits on its own, the product does not.
        let wide = GridSpec::new(DVec2::ZERO, DVec2::splat(1e5), 1.0);
        assert!(wide.validate().is_err());

        let edge = GridSpec::new(DVec2::ZERO, DVec2::new(1023.0, 1023.0), 1.0);
        assert!(edge.validate().is_ok());
        assert_eq!(edge.dimensions(), (1024, 1024));
    }
}
