//! Heterogeneity-weighted distance.
//!
//! A heterogeneity space is an ordered list of [`HeterogeneityDimension`]s. Each agent carries
//! one motion primitive per dimension. [`hetero_distance`] stacks the raw spatial distance with
//! one bounded term per dimension and returns the Euclidean norm of that vector, so a single
//! capability cannot dominate the combined metric.
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Capability dimension distinguishing heterogeneous agents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum HeterogeneityDimension {
    Speed,
    #[cfg_attr(feature = "serde", serde(rename = "BATTERYLIFE", alias = "BATTERY_LIFE"))]
    BatteryLife,
    Mobility,
}

impl HeterogeneityDimension {
    pub const ALL: [HeterogeneityDimension; 3] = [
        HeterogeneityDimension::Speed,
        HeterogeneityDimension::BatteryLife,
        HeterogeneityDimension::Mobility,
    ];

    /// Canonical upper-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            HeterogeneityDimension::Speed => "SPEED",
            HeterogeneityDimension::BatteryLife => "BATTERYLIFE",
            HeterogeneityDimension::Mobility => "MOBILITY",
        }
    }

    /// Bounded contribution of this dimension for one agent at the given spatial distance.
    #[inline]
    pub fn fold(self, motion_primitive: f64, euclidean_distance: f64) -> f64 {
        match self {
            HeterogeneityDimension::Speed
            | HeterogeneityDimension::BatteryLife
            | HeterogeneityDimension::Mobility => {
                continuous_distance(motion_primitive, euclidean_distance)
            }
        }
    }
}

impl fmt::Display for HeterogeneityDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeterogeneityDimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SPEED" => Ok(HeterogeneityDimension::Speed),
            "BATTERYLIFE" | "BATTERY_LIFE" => Ok(HeterogeneityDimension::BatteryLife),
            "MOBILITY" => Ok(HeterogeneityDimension::Mobility),
            _ => Err(Error::UnknownDimension(s.to_owned())),
        }
    }
}

impl TryFrom<i32> for HeterogeneityDimension {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| Error::UnknownDimension(code.to_string()))
    }
}

/// Largest `f64` below one. `tanh` rounds to exactly ±1 once its argument passes about 19.
const SATURATION: f64 = 1.0 - f64::EPSILON / 2.0;

/// Folds a capability-weighted distance into (-1, 1): `tanh(motion_primitive * euclidean_distance)`,
/// kept strictly inside the interval for every finite input.
#[inline]
pub fn continuous_distance(motion_primitive: f64, euclidean_distance: f64) -> f64 {
    (motion_primitive * euclidean_distance)
        .tanh()
        .clamp(-SATURATION, SATURATION)
}

/// Norm of `[d, fold_0(m_0, d), .., fold_k(m_k, d)]` over the heterogeneity space.
///
/// With an empty space this is `|d|`. `motion_primitives` must hold exactly one value per
/// dimension of `space`.
pub fn hetero_distance(
    space: &[HeterogeneityDimension],
    motion_primitives: &[f64],
    euclidean_distance: f64,
) -> Result<f64> {
    Error::check_len("motion primitives", space.len(), motion_primitives.len())?;

    // Finite for every finite distance; squaring first overflows above ~1e154.
    Ok(space
        .iter()
        .zip(motion_primitives)
        .fold(euclidean_distance.abs(), |acc, (dim, &m)| {
            acc.hypot(dim.fold(m, euclidean_distance))
        }))
}
