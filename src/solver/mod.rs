//! Best-first search over the annotated cells of a [PathingGrid].
//!
//! The frontier is a [BinaryHeap] keyed on the estimated total cost. A cell is pushed again every
//! time its cost improves instead of being decreased in place, and entries for cells that were
//! already expanded are skipped when popped.
use grid_util::point::Point;
use log::{info, warn};
use std::collections::BinaryHeap;

use crate::config::SolverConfig;
use crate::heuristic::HeuristicKind;
use crate::pathing_grid::PathingGrid;

mod frontier;

use frontier::SmallestCostHolder;

/// How a solve ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The target was popped from the frontier.
    Found,
    /// The frontier ran dry; the target keeps no predecessor.
    NoPath,
    /// The step budget ran out before the target was popped. The target may already have been
    /// discovered, in which case [PathingGrid::path_found] is true and [PathingGrid::path] yields
    /// a path that is not guaranteed to be the cheapest.
    BudgetExhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveReport {
    pub outcome: SolveOutcome,
    /// Number of cells marked visited.
    pub expanded: usize,
    /// Number of frontier insertions, duplicates included.
    pub pushed: usize,
}

impl SolveReport {
    pub fn found(&self) -> bool {
        self.outcome == SolveOutcome::Found
    }
}

#[derive(Clone, Debug, Default)]
pub struct Pathfinder {
    pub config: SolverConfig,
}

impl Pathfinder {
    pub fn new(heuristic: HeuristicKind) -> Pathfinder {
        Pathfinder {
            config: SolverConfig::with_heuristic(heuristic),
        }
    }

    pub fn with_config(config: SolverConfig) -> Pathfinder {
        Pathfinder { config }
    }

    pub fn heuristic(&self) -> HeuristicKind {
        self.config.heuristic
    }

    pub fn set_heuristic(&mut self, heuristic: HeuristicKind) {
        self.config.heuristic = heuristic;
    }

    /// Clears the previous search annotations, keeping obstacles, and solves again.
    pub fn resolve(&self, grid: &mut PathingGrid) -> SolveReport {
        grid.reset_scratch(true);
        self.solve(grid)
    }

    /// Searches from the grid's start to its target, annotating cells in place.
    ///
    /// Expects the scratch state to have been reset with
    /// [reset_scratch(true)](PathingGrid::reset_scratch) beforehand. The cost of a step between two
    /// adjacent cells is the active heuristic evaluated between them. Afterwards the path can be
    /// read back with [PathingGrid::path]; when none exists the target has no predecessor.
    pub fn solve(&self, grid: &mut PathingGrid) -> SolveReport {
        let heuristic = self.config.heuristic;
        let start = grid.start;
        let target = grid.target;
        let goal: Point = grid.cells[target].position;

        let start_cell = &mut grid.cells[start];
        start_cell.cost_so_far = 0.0;
        start_cell.estimated_total = heuristic.estimate(&start_cell.position, &goal);
        let start_position = start_cell.position;

        let mut to_see = BinaryHeap::new();
        to_see.push(SmallestCostHolder {
            estimated_total: start_cell.estimated_total,
            cost: 0.0,
            index: start,
        });
        let mut pushed = 1;
        let mut expanded = 0;

        let outcome = loop {
            let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() else {
                break SolveOutcome::NoPath;
            };
            let current = &grid.cells[index];
            // A cell may sit in the heap several times if a cheaper way to it was found later.
            // Only the entry carrying its current cost is expanded, and only once.
            if current.is_visited || cost > current.cost_so_far {
                continue;
            }
            if index == target {
                break SolveOutcome::Found;
            }
            if self.config.step_budget.is_some_and(|budget| expanded >= budget) {
                warn!("Step budget of {} exhausted before reaching {}", expanded, goal);
                break SolveOutcome::BudgetExhausted;
            }

            let current_position = current.position;
            let current_cost = current.cost_so_far;
            let neighbours = current.neighbours.clone();
            grid.cells[index].is_visited = true;
            expanded += 1;

            for n in neighbours {
                let neighbour = &mut grid.cells[n];
                if neighbour.is_visited {
                    continue;
                }
                let new_cost =
                    current_cost + heuristic.estimate(&current_position, &neighbour.position);
                if new_cost < neighbour.cost_so_far {
                    neighbour.predecessor = Some(index);
                    neighbour.cost_so_far = new_cost;
                    neighbour.estimated_total =
                        new_cost + heuristic.estimate(&neighbour.position, &goal);
                    to_see.push(SmallestCostHolder {
                        estimated_total: neighbour.estimated_total,
                        cost: new_cost,
                        index: n,
                    });
                    pushed += 1;
                }
            }
        };

        info!(
            "Solved {} -> {} with {} heuristic: {:?}, expanded {} cells, {} frontier pushes",
            start_position, goal, heuristic, outcome, expanded, pushed
        );
        SolveReport {
            outcome,
            expanded,
            pushed,
        }
    }
}

/// Runs a single search with the given heuristic, see [Pathfinder::solve].
pub fn solve(grid: &mut PathingGrid, heuristic: HeuristicKind) -> SolveReport {
    Pathfinder::new(heuristic).solve(grid)
}
