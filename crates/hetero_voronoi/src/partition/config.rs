//! Heterogeneity configuration fixed at partitioner construction.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::metric::HeterogeneityDimension;

/// Agent count, heterogeneity space and per-agent capabilities.
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeteroConfig {
    /// Number of agents taking part in the heterogeneity-weighted partition.
    pub num_agents: usize,
    /// Ordered capability dimensions shared by all agents.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hetero_space: Vec<HeterogeneityDimension>,
    /// One motion-primitive vector per agent, each with one value per dimension.
    #[cfg_attr(feature = "serde", serde(default))]
    pub motion_primitives: Vec<Vec<f64>>,
    /// Optional per-agent scale factors for the scale-weighted assignment.
    #[cfg_attr(feature = "serde", serde(default))]
    pub scale_factors: Option<Vec<f64>>,
}

impl HeteroConfig {
    /// Creates a configuration for `num_agents` with no dimensions or primitives yet.
    pub fn new(num_agents: usize) -> Self {
        Self {
            num_agents,
            ..Default::default()
        }
    }

    /// Agents differ only by position.
    pub fn homogeneous(num_agents: usize) -> Self {
        Self::new(num_agents).with_motion_primitives(vec![Vec::new(); num_agents])
    }

    /// Sets the heterogeneity space.
    pub fn with_hetero_space(mut self, hetero_space: Vec<HeterogeneityDimension>) -> Self {
        self.hetero_space = hetero_space;
        self
    }

    /// Sets the per-agent motion primitives.
    pub fn with_motion_primitives(mut self, motion_primitives: Vec<Vec<f64>>) -> Self {
        self.motion_primitives = motion_primitives;
        self
    }

    /// Sets the per-agent scale factors.
    pub fn with_scale_factors(mut self, scale_factors: Vec<f64>) -> Self {
        self.scale_factors = Some(scale_factors);
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.num_agents == 0 {
            return Err(Error::InvalidConfig("num_agents must be > 0".into()));
        }
        if self.motion_primitives.len() != self.num_agents {
            return Err(Error::InvalidConfig(format!(
                "expected motion primitives for {} agents, got {}",
                self.num_agents,
                self.motion_primitives.len()
            )));
        }
        for (agent, primitives) in self.motion_primitives.iter().enumerate() {
            if primitives.len() != self.hetero_space.len() {
                return Err(Error::InvalidConfig(format!(
                    "agent {agent} has {} motion primitives for a {}-dimensional heterogeneity space",
                    primitives.len(),
                    self.hetero_space.len()
                )));
            }
            if primitives.iter().any(|m| !m.is_finite()) {
                return Err(Error::InvalidConfig(format!(
                    "agent {agent} has a non-finite motion primitive"
                )));
            }
        }
        if let Some(scales) = &self.scale_factors {
            if scales.len() != self.num_agents {
                return Err(Error::InvalidConfig(format!(
                    "expected {} scale factors, got {}",
                    self.num_agents,
                    scales.len()
                )));
            }
            if scales.iter().any(|s| !s.is_finite()) {
                return Err(Error::InvalidConfig(
                    "scale factors must be finite".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homogeneous_config_is_valid() {
        let config = HeteroConfig::homogeneous(3);
        assert_eq!(config.motion_primitives.len(), 3);
        assert!(config.hetero_space.is_empty());
        config.validate().expect("homogeneous config validates");
    }

    #[test]
    fn builder_sets_all_fields() {
        let config = HeteroConfig::new(2)
            .with_hetero_space(vec![HeterogeneityDimension::Speed])
            .with_motion_primitives(vec![vec![0.0], vec![4.0]])
            .with_scale_factors(vec![1.0, 0.5]);

        assert_eq!(config.num_agents, 2);
        assert_eq!(config.hetero_space, vec![HeterogeneityDimension::Speed]);
        assert_eq!(config.scale_factors, Some(vec![1.0, 0.5]));
        config.validate().expect("config validates");
    }

    #[test]
    fn validate_rejects_zero_agents() {
        assert!(matches!(
            HeteroConfig::homogeneous(0).validate(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_primitive_count_mismatch() {
        let config = HeteroConfig::new(2)
            .with_hetero_space(vec![HeterogeneityDimension::Speed])
            .with_motion_primitives(vec![vec![1.0]]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_primitive_length_mismatch() {
        let config = HeteroConfig::new(2)
            .with_hetero_space(vec![
                HeterogeneityDimension::Speed,
                HeterogeneityDimension::Mobility,
            ])
            .with_motion_primitives(vec![vec![1.0, 2.0], vec![1.0]]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("agent 1"));
    }

    #[test]
    fn validate_rejects_bad_scale_factors() {
        let short = HeteroConfig::homogeneous(2).with_scale_factors(vec![1.0]);
        assert!(short.validate().is_err());

        let nan = HeteroConfig::homogeneous(2).with_scale_factors(vec![1.0, f64::NAN]);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_primitives() {
        let config = HeteroConfig::new(1)
            .with_hetero_space(vec![HeterogeneityDimension::BatteryLife])
            .with_motion_primitives(vec![vec![f64::INFINITY]]);
        assert!(config.validate().is_err());
    }
}
