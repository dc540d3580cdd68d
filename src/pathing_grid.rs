use core::fmt;
use grid_util::grid::Grid;
use grid_util::point::Point;
use itertools::iproduct;
use log::{debug, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::{Cell, CellView, ScratchState};
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::path::PathIter;
use crate::{DIRECTIONS, N_SMALLVEC_SIZE};

/// [PathingGrid] owns a fixed `width * height` array of [Cell]s together with the start and
/// target selection. Every obstacle change rebuilds the neighbour list of every cell and
/// regenerates the connected components in a [UnionFind] structure.
/// Implements [Grid] where the value is the obstacle flag.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) start: usize,
    pub(crate) target: usize,
    components: UnionFind<usize>,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        let config = GridConfig::default();
        let mut grid = PathingGrid::build(config.width, config.height, false);
        grid.reset_scratch(false);
        grid
    }
}

impl PathingGrid {
    /// Creates an obstacle-free grid with the start in the top-left corner and the target in the
    /// bottom-right corner.
    pub fn with_config(config: &GridConfig) -> Result<PathingGrid> {
        config.validate()?;
        let mut grid = PathingGrid::build(config.width, config.height, false);
        grid.reset_scratch(false);
        Ok(grid)
    }

    fn build(width: usize, height: usize, blocked: bool) -> PathingGrid {
        let cells = iproduct!(0..height as i32, 0..width as i32)
            .map(|(y, x)| Cell::new(Point::new(x, y), blocked))
            .collect::<Vec<_>>();
        let n = cells.len();
        PathingGrid {
            width,
            height,
            cells,
            start: 0,
            target: n - 1,
            components: UnionFind::new(n),
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Flat row-major index of `(x, y)`.
    pub fn ix(&self, x: i32, y: i32) -> Result<usize> {
        if self.in_bounds(x, y) {
            Ok(y as usize * self.width + x as usize)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn cell(&self, x: i32, y: i32) -> Result<&Cell> {
        self.ix(x, y).map(|ix| &self.cells[ix])
    }
    pub fn cell_at(&self, ix: usize) -> Option<&Cell> {
        self.cells.get(ix)
    }
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn start(&self) -> Point {
        self.cells[self.start].position
    }
    pub fn target(&self) -> Point {
        self.cells[self.target].position
    }
    pub fn start_cell(&self) -> &Cell {
        &self.cells[self.start]
    }
    pub fn target_cell(&self) -> &Cell {
        &self.cells[self.target]
    }

    /// Start and target may coincide and may sit on obstacles.
    pub fn set_start(&mut self, x: i32, y: i32) -> Result<()> {
        self.start = self.ix(x, y)?;
        debug!("Start moved to ({}, {})", x, y);
        Ok(())
    }
    pub fn set_target(&mut self, x: i32, y: i32) -> Result<()> {
        self.target = self.ix(x, y)?;
        debug!("Target moved to ({}, {})", x, y);
        Ok(())
    }

    /// Flips the obstacle flag at `(x, y)` and returns its new value.
    pub fn toggle_obstacle(&mut self, x: i32, y: i32) -> Result<bool> {
        let ix = self.ix(x, y)?;
        let blocked = !self.cells[ix].is_obstacle;
        self.cells[ix].is_obstacle = blocked;
        self.rebuild_connectivity();
        Ok(blocked)
    }

    pub fn set_obstacle(&mut self, x: i32, y: i32, blocked: bool) -> Result<()> {
        let ix = self.ix(x, y)?;
        if self.cells[ix].is_obstacle != blocked {
            self.cells[ix].is_obstacle = blocked;
            self.rebuild_connectivity();
        }
        Ok(())
    }

    /// Clears the search annotations of every cell, and the obstacles too unless
    /// `preserve_obstacles` is set. Connectivity is always rebuilt afterwards.
    pub fn reset_scratch(&mut self, preserve_obstacles: bool) {
        for cell in self.cells.iter_mut() {
            cell.reset_scratch();
            if !preserve_obstacles {
                cell.is_obstacle = false;
            }
        }
        self.rebuild_connectivity();
    }

    /// Recomputes every cell's neighbour list from scratch, then the connected components.
    pub fn rebuild_connectivity(&mut self) {
        for ix in 0..self.cells.len() {
            let neighbours = self.traversable_neighbours(self.cells[ix].position);
            self.cells[ix].neighbours = neighbours;
        }
        self.generate_components();
        debug!(
            "Rebuilt connectivity of {}x{} grid",
            self.width, self.height
        );
    }

    fn traversable_neighbours(&self, point: Point) -> SmallVec<[usize; N_SMALLVEC_SIZE]> {
        DIRECTIONS
            .iter()
            .filter_map(|&(dx, dy)| self.ix(point.x + dx, point.y + dy).ok())
            .filter(|&ix| !self.cells[ix].is_obstacle)
            .collect()
    }

    /// Generates a new [UnionFind] structure and links traversable cells to their neighbours.
    fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.cells.len());
        for (ix, cell) in self.cells.iter().enumerate() {
            if cell.is_obstacle {
                continue;
            }
            for &n in &cell.neighbours {
                components.union(ix, n);
            }
        }
        self.components = components;
    }

    /// Positions of the traversable cells adjacent to `(x, y)`.
    pub fn neighbours(&self, x: i32, y: i32) -> Result<Vec<Point>> {
        let cell = self.cell(x, y)?;
        Ok(cell
            .neighbours
            .iter()
            .map(|&n| self.cells[n].position)
            .collect())
    }

    /// Checks whether `to` can be reached from `from` using the connected components.
    /// Moving off an obstacle is allowed, moving onto one is not.
    pub fn reachable(&self, from: &Point, to: &Point) -> bool {
        let (Ok(from_ix), Ok(to_ix)) = (self.ix(from.x, from.y), self.ix(to.x, to.y)) else {
            return false;
        };
        if from_ix == to_ix {
            return true;
        }
        if self.cells[to_ix].is_obstacle {
            return false;
        }
        if self.cells[from_ix].is_obstacle {
            self.cells[from_ix]
                .neighbours
                .iter()
                .any(|&n| self.components.equiv(n, to_ix))
        } else {
            self.components.equiv(from_ix, to_ix)
        }
    }

    /// Checks if the target can be reached from the start.
    pub fn target_reachable(&self) -> bool {
        self.reachable(&self.start(), &self.target())
    }

    /// True if the last solve linked the target back to the start. After a solve cut short by
    /// its step budget the link may be tentative.
    pub fn path_found(&self) -> bool {
        self.start == self.target || self.cells[self.target].predecessor.is_some()
    }

    /// Lazily walks predecessor links from the target back to the start.
    pub fn path(&self) -> PathIter<'_> {
        PathIter::new(self)
    }

    pub fn cell_views(&self) -> impl Iterator<Item = CellView> + '_ {
        self.cells.iter().enumerate().map(move |(ix, cell)| CellView {
            x: cell.position.x,
            y: cell.position.y,
            is_obstacle: cell.is_obstacle,
            is_visited: cell.is_visited,
            is_start: ix == self.start,
            is_target: ix == self.target,
        })
    }

    pub fn scratch_snapshot(&self) -> Vec<ScratchState> {
        self.cells
            .iter()
            .map(|cell| ScratchState {
                x: cell.position.x,
                y: cell.position.y,
                is_visited: cell.is_visited,
                cost_so_far: cell.cost_so_far,
                estimated_total: cell.estimated_total,
                predecessor: cell.predecessor.map(|p| {
                    let pos = self.cells[p].position;
                    (pos.x, pos.y)
                }),
            })
            .collect()
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut on_path = vec![false; self.cells.len()];
        for p in self.path() {
            on_path[p.y as usize * self.width + p.x as usize] = true;
        }
        for row in self.cells.chunks(self.width) {
            let line = row
                .iter()
                .map(|cell| {
                    let ix = cell.position.y as usize * self.width + cell.position.x as usize;
                    if ix == self.start {
                        'S'
                    } else if ix == self.target {
                        'G'
                    } else if cell.is_obstacle {
                        '#'
                    } else if on_path[ix] {
                        '*'
                    } else if cell.is_visited {
                        'o'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Converts unsigned trait coordinates, `None` if they cannot address any cell.
fn signed(x: usize, y: usize) -> Option<(i32, i32)> {
    Some((i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}

impl Grid<bool> for PathingGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be non-zero, got {}x{}",
            width,
            height
        );
        let mut grid = PathingGrid::build(width, height, default_value);
        grid.rebuild_connectivity();
        grid
    }
    /// Positions outside the grid read as blocked.
    fn get(&self, x: usize, y: usize) -> bool {
        signed(x, y)
            .and_then(|(x, y)| self.cell(x, y).ok())
            .map_or(true, Cell::is_obstacle)
    }
    /// Updates the obstacle flag, rebuilding connectivity if it changed.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        let Some((sx, sy)) = signed(x, y) else {
            warn!("Ignoring obstacle update at ({}, {})", x, y);
            return;
        };
        if let Err(err) = self.set_obstacle(sx, sy, blocked) {
            warn!("Ignoring obstacle update: {}", err);
        }
    }
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbour_set(grid: &PathingGrid, x: i32, y: i32) -> Vec<(i32, i32)> {
        grid.neighbours(x, y)
            .unwrap()
            .into_iter()
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[test]
    fn corner_edge_and_interior_neighbours() {
        let grid = PathingGrid::with_config(&GridConfig::new(3, 3)).unwrap();
        assert_eq!(neighbour_set(&grid, 0, 0), vec![(1, 0), (0, 1), (1, 1)]);
        assert_eq!(grid.neighbours(1, 0).unwrap().len(), 5);
        // E, S, W, N, SE, SW, NW, NE
        assert_eq!(
            neighbour_set(&grid, 1, 1),
            vec![
                (2, 1),
                (1, 2),
                (0, 1),
                (1, 0),
                (2, 2),
                (0, 2),
                (0, 0),
                (2, 0)
            ]
        );
    }

    #[test]
    fn default_start_and_target_are_opposite_corners() {
        let grid = PathingGrid::default();
        assert_eq!(grid.width(), 16);
        assert_eq!(grid.start(), Point::new(0, 0));
        assert_eq!(grid.target(), Point::new(15, 15));
    }

    #[test]
    fn toggling_removes_and_restores_neighbour_links() {
        let mut grid = PathingGrid::with_config(&GridConfig::new(4, 4)).unwrap();
        let blocked = Point::new(1, 2);
        assert!(grid.toggle_obstacle(1, 2).unwrap());
        for cell in grid.cells() {
            assert!(grid
                .neighbours(cell.position().x, cell.position().y)
                .unwrap()
                .iter()
                .all(|p| *p != blocked));
        }
        // The obstacle still owns a neighbour list of its own.
        assert_eq!(grid.neighbours(1, 2).unwrap().len(), 8);

        assert!(!grid.toggle_obstacle(1, 2).unwrap());
        for (x, y) in [(0, 1), (2, 3), (2, 2), (0, 3)] {
            assert!(grid.neighbours(x, y).unwrap().contains(&blocked));
        }
    }

    #[test]
    fn out_of_bounds_edits_leave_state_unchanged() {
        let mut grid = PathingGrid::with_config(&GridConfig::new(4, 3)).unwrap();
        let before = grid.start();
        for (x, y) in [(-1, 0), (0, 3), (4, 0)] {
            assert_eq!(
                grid.set_start(x, y),
                Err(GridError::OutOfBounds {
                    x,
                    y,
                    width: 4,
                    height: 3
                })
            );
            assert!(grid.set_target(x, y).is_err());
            assert!(grid.toggle_obstacle(x, y).is_err());
        }
        assert_eq!(grid.start(), before);
        assert_eq!(grid.target(), Point::new(3, 2));
        assert!(grid.cells().iter().all(|c| !c.is_obstacle()));
    }

    #[test]
    fn reset_scratch_optionally_clears_obstacles() {
        let mut grid = PathingGrid::with_config(&GridConfig::new(3, 3)).unwrap();
        grid.toggle_obstacle(1, 1).unwrap();
        grid.cells[0].is_visited = true;
        grid.cells[0].cost_so_far = 0.0;
        grid.cells[1].predecessor = Some(0);

        grid.reset_scratch(true);
        assert!(grid.get(1, 1));
        assert!(!grid.cells[0].is_visited());
        assert_eq!(grid.cells[0].cost_so_far(), f32::INFINITY);
        assert_eq!(grid.cells[1].predecessor(), None);

        grid.reset_scratch(false);
        assert!(!grid.get(1, 1));
        assert_eq!(grid.neighbours(0, 0).unwrap().len(), 3);
    }

    /// Tests whether a wall splits the grid into separate components
    #[test]
    fn test_component_generation() {
        //  ___
        // | # |
        // | # |
        // | # |
        //  ___
        let mut grid: PathingGrid = PathingGrid::new(3, 3, false);
        for y in 0..3 {
            grid.set(1, y, true);
        }
        let left = Point::new(0, 0);
        let right = Point::new(2, 2);
        assert!(!grid.reachable(&left, &right));
        assert!(grid.reachable(&left, &Point::new(0, 2)));
        grid.set(1, 2, false);
        assert!(grid.reachable(&left, &right));
    }

    #[test]
    fn reachability_off_and_onto_obstacles() {
        let mut grid: PathingGrid = PathingGrid::new(3, 1, false);
        grid.set(0, 0, true);
        let blocked = Point::new(0, 0);
        let free = Point::new(2, 0);
        assert!(grid.reachable(&blocked, &free));
        assert!(!grid.reachable(&free, &blocked));
        assert!(grid.reachable(&blocked, &blocked));
        assert!(!grid.reachable(&free, &Point::new(3, 0)));
    }

    #[test]
    fn trait_access_outside_the_grid_reads_blocked() {
        let mut grid: PathingGrid = PathingGrid::new(2, 2, false);
        assert!(!grid.get(1, 1));
        assert!(grid.get(2, 0));
        assert!(grid.get(usize::MAX, 0));
        grid.set(usize::MAX, 1, true);
        grid.set(0, 2, true);
        assert!(grid.cells().iter().all(|c| !c.is_obstacle()));
    }

    #[test]
    fn display_marks_start_target_and_obstacles() {
        let mut grid: PathingGrid = PathingGrid::new(3, 2, false);
        grid.set(1, 0, true);
        assert_eq!(grid.to_string(), "S#.\n..G\n");
    }
}
