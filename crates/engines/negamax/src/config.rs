//! Search configuration.
//!
//! One engine, parameterized: depth schedule, iterative deepening, time
//! budget, move ordering, and evaluation weights are all data, so variants
//! are TOML files instead of parallel engine types.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eval::EvalWeights;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How deep the root scan goes at a given point in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DepthSchedule {
    /// Always search to the same depth.
    Fixed { depth: u8 },
    /// Depth grows as the game leaves the opening.
    PlyBuckets,
}

impl DepthSchedule {
    pub fn depth_for(self, ply: u32) -> u8 {
        match self {
            DepthSchedule::Fixed { depth } => depth,
            DepthSchedule::PlyBuckets => {
                if ply < 6 {
                    2
                } else if ply < 60 {
                    3
                } else if ply < 90 {
                    4
                } else {
                    5
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOrderingPolicy {
    /// Whatever order the rules engine enumerates.
    Natural,
    /// Captures first, then the rest, each group in enumeration order.
    CapturesFirst,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub schedule: DepthSchedule,
    pub use_iterative_deepening: bool,
    /// Wall-clock budget applied when the host supplies no move time.
    pub time_budget_ms: Option<u64>,
    pub move_ordering: MoveOrderingPolicy,
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            schedule: DepthSchedule::PlyBuckets,
            use_iterative_deepening: true,
            time_budget_ms: None,
            move_ordering: MoveOrderingPolicy::CapturesFirst,
            weights: EvalWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
