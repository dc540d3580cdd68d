//! Edit-then-solve driver for an interactive front end.
//!
//! Every accepted edit is followed by a full re-solve, so the grid handed out by
//! [PathingSession::grid] always carries the annotations of the current layout.
use log::debug;

use crate::config::{GridConfig, SolverConfig};
use crate::error::Result;
use crate::heuristic::HeuristicKind;
use crate::pathing_grid::PathingGrid;
use crate::solver::{Pathfinder, SolveReport};

/// A change requested by the front end. Coordinates are zero-based cell indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    ToggleObstacle { x: i32, y: i32 },
    SetObstacle { x: i32, y: i32, blocked: bool },
    SetStart { x: i32, y: i32 },
    SetTarget { x: i32, y: i32 },
}

#[derive(Clone, Debug)]
pub struct PathingSession {
    grid: PathingGrid,
    pathfinder: Pathfinder,
    last_report: SolveReport,
}

impl Default for PathingSession {
    fn default() -> PathingSession {
        PathingSession::from_parts(PathingGrid::default(), Pathfinder::default())
    }
}

impl PathingSession {
    pub fn new(grid_config: &GridConfig, solver_config: SolverConfig) -> Result<PathingSession> {
        let grid = PathingGrid::with_config(grid_config)?;
        Ok(PathingSession::from_parts(
            grid,
            Pathfinder::with_config(solver_config),
        ))
    }

    /// Takes over an existing grid, keeping its obstacles, and solves it once.
    pub fn from_parts(mut grid: PathingGrid, pathfinder: Pathfinder) -> PathingSession {
        let last_report = pathfinder.resolve(&mut grid);
        PathingSession {
            grid,
            pathfinder,
            last_report,
        }
    }

    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }

    pub fn heuristic(&self) -> HeuristicKind {
        self.pathfinder.heuristic()
    }

    pub fn last_report(&self) -> SolveReport {
        self.last_report
    }

    /// Applies the edit and re-solves. A rejected edit changes nothing and skips the solve.
    pub fn apply(&mut self, edit: Edit) -> Result<SolveReport> {
        debug!("Applying {:?}", edit);
        match edit {
            Edit::ToggleObstacle { x, y } => self.grid.toggle_obstacle(x, y).map(drop)?,
            Edit::SetObstacle { x, y, blocked } => self.grid.set_obstacle(x, y, blocked)?,
            Edit::SetStart { x, y } => self.grid.set_start(x, y)?,
            Edit::SetTarget { x, y } => self.grid.set_target(x, y)?,
        }
        Ok(self.solve())
    }

    pub fn set_heuristic(&mut self, heuristic: HeuristicKind) -> SolveReport {
        self.pathfinder.set_heuristic(heuristic);
        self.solve()
    }

    pub fn solve(&mut self) -> SolveReport {
        self.last_report = self.pathfinder.resolve(&mut self.grid);
        self.last_report
    }
}
