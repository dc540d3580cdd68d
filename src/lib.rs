//! # grid_astar
//!
//! Shortest-path search on a fixed-size 2D grid with obstacles that can be toggled at any time.
//! Every cell stores its own search annotations (visited flag, cost so far, estimated total and a
//! predecessor link) so that a presentation layer can draw the explored region and the resulting
//! path straight from the grid after each solve.
//!
//! The grid is 8-connected. Neighbour lists are rebuilt for the whole grid whenever an obstacle
//! changes, and a [UnionFind](petgraph::unionfind::UnionFind) of
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) is regenerated
//! alongside them so reachability can be checked without searching.
//!
//! The step cost between two adjacent cells is the active [HeuristicKind] evaluated between them.
//! With [HeuristicKind::Manhattan] a diagonal step costs 2 and a straight step 1.
//!
//! ```
//! use grid_astar::{HeuristicKind, Pathfinder, PathingGrid};
//! use grid_util::grid::Grid;
//!
//! let mut grid: PathingGrid = PathingGrid::new(3, 3, false);
//! grid.set_start(0, 0).unwrap();
//! grid.set_target(2, 2).unwrap();
//! grid.toggle_obstacle(1, 1).unwrap();
//! let pathfinder = Pathfinder::new(HeuristicKind::Manhattan);
//! pathfinder.resolve(&mut grid);
//! assert_eq!(grid.target_cell().cost_so_far(), 4.0);
//! assert!(grid.path().all(|p| (p.x, p.y) != (1, 1)));
//! ```
pub mod cell;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod path;
pub mod pathing_grid;
pub mod session;
pub mod solver;

pub use cell::{Cell, CellView, ScratchState};
pub use config::{GridConfig, SolverConfig};
pub use error::{GridError, ParseHeuristicError, Result};
pub use heuristic::HeuristicKind;
pub use path::PathIter;
pub use pathing_grid::PathingGrid;
pub use session::{Edit, PathingSession};
pub use solver::{solve, Pathfinder, SolveOutcome, SolveReport};

/// Inline capacity of per-cell neighbour lists, one slot per compass direction.
pub const N_SMALLVEC_SIZE: usize = 8;

/// Offsets of the 8 compass directions in the order neighbour lists are built:
/// E, S, W, N, SE, SW, NW, NE. The y axis grows downwards.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
    (1, -1),
];
