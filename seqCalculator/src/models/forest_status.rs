use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::config::constants::{ACTIVE_ACTIVITY_FACTOR, MATURE_ACTIVITY_FACTOR, MIXED_ACTIVITY_FACTOR};

/// Carbon status of the ecosystems already standing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExistingForestStatus {
    Mature,     // At equilibrium, no net sink
    #[default]
    Mixed,      // Half of the nominal rate still net-absorbing
    Active,     // Fully absorbing
}

impl ExistingForestStatus {
    pub const ALL: [ExistingForestStatus; 3] = [
        ExistingForestStatus::Mature,
        ExistingForestStatus::Mixed,
        ExistingForestStatus::Active,
    ];

    /// Fraction of the nominal sequestration rate that is still net-absorbing.
    pub fn activity_factor(&self) -> f64 {
        match self {
            ExistingForestStatus::Mature => MATURE_ACTIVITY_FACTOR,
            ExistingForestStatus::Mixed => MIXED_ACTIVITY_FACTOR,
            ExistingForestStatus::Active => ACTIVE_ACTIVITY_FACTOR,
        }
    }
}

impl FromStr for ExistingForestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mature" => Ok(ExistingForestStatus::Mature),
            "mixed" => Ok(ExistingForestStatus::Mixed),
            "active" => Ok(ExistingForestStatus::Active),
            _ => Err(format!("Unknown existing forest status: {}", s)),
        }
    }
}

impl fmt::Display for ExistingForestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExistingForestStatus::Mature => write!(f, "mature"),
            ExistingForestStatus::Mixed => write!(f, "mixed"),
            ExistingForestStatus::Active => write!(f, "active"),
        }
    }
}
