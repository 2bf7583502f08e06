//! Recoverable errors at the run-context boundary.
//!
//! Engines never fail: their invariant breaches are assertions. Only config
//! parsing and capacity checks surface as values.

use std::fmt;

/// Invalid run configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    UnknownDataset { name: String },
    NoSizes,
    NoEngines,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDataset { name } => {
                write!(f, "unknown dataset `{name}` (expected disc, ring or circle)")
            }
            Self::NoSizes => write!(f, "at least one point count is required"),
            Self::NoEngines => write!(f, "at least one engine is required"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure of a run-context operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    Config(ConfigError),
    CapacityExceeded { requested: usize, capacity: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid config: {e}"),
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "requested {requested} points but buffers were sized for {capacity}"
            ),
        }
    }
}

impl std::error::Error for HullError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::CapacityExceeded { .. } => None,
        }
    }
}

impl From<ConfigError> for HullError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
