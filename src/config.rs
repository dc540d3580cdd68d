use crate::error::{GridError, Result};
use crate::heuristic::HeuristicKind;

/// Dimensions of a [PathingGrid](crate::PathingGrid), fixed for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            width: 16,
            height: 16,
        }
    }
}

impl GridConfig {
    pub fn new(width: usize, height: usize) -> GridConfig {
        GridConfig { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Settings of a [Pathfinder](crate::Pathfinder).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    pub heuristic: HeuristicKind,
    /// Maximum number of cells a single solve may expand. `None` searches until the target is
    /// popped or the frontier runs dry.
    pub step_budget: Option<usize>,
}

impl SolverConfig {
    pub fn with_heuristic(heuristic: HeuristicKind) -> SolverConfig {
        SolverConfig {
            heuristic,
            ..SolverConfig::default()
        }
    }
}
