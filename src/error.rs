//! Error types for grid edits and configuration parsing.
//!
//! Failing to find a path is not an error: a solve that exhausts its frontier leaves the target
//! without a predecessor, see [PathingGrid::path_found](crate::PathingGrid::path_found).

use thiserror::Error;

/// Result type for grid operations
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised by coordinate-accepting grid operations and grid construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Coordinate outside `[0, width) x [0, height)`
    #[error("({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// A grid needs at least one cell to hold the start and target
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// Unknown heuristic name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heuristic '{name}', valid options: manhattan, euclidean-squared, zero")]
pub struct ParseHeuristicError {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_the_coordinate() {
        let err = GridError::OutOfBounds {
            x: -1,
            y: 0,
            width: 16,
            height: 16,
        };
        assert_eq!(err.to_string(), "(-1, 0) is outside the 16x16 grid");
    }
}
