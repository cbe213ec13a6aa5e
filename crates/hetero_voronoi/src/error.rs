//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Every
//! variant is an invalid-argument failure: mismatched dimensions, an empty location set,
//! unknown heterogeneity dimensions, or agent counts that disagree with the configuration.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{context}: expected length {expected}, got {actual}")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("location set is empty")]
    EmptyLocationSet,

    #[error("expected {expected} agents, got {actual}")]
    AgentCountMismatch { expected: usize, actual: usize },

    #[error("agent {agent} out of range for {num_agents} agents")]
    AgentOutOfRange { agent: usize, num_agents: usize },

    #[error("unknown heterogeneity dimension '{0}'")]
    UnknownDimension(String),

    #[error("partitioner has no heterogeneity configuration")]
    MissingHeteroConfig,
}

impl Error {
    /// All failures of this crate are caller errors; there is no transient or fatal class.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::InvalidArgument(_)
            | Error::InvalidConfig(_)
            | Error::LengthMismatch { .. }
            | Error::EmptyLocationSet
            | Error::AgentCountMismatch { .. }
            | Error::AgentOutOfRange { .. }
            | Error::UnknownDimension(_)
            | Error::MissingHeteroConfig => true,
        }
    }

    pub(crate) fn check_len(context: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Error::LengthMismatch {
                context,
                expected,
                actual,
            })
        }
    }
}
