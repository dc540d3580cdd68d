use grid_util::point::Point;

use crate::pathing_grid::PathingGrid;

/// Iterator over the path found by the last solve, from the target back to the start.
/// Yields nothing if no path was found and only the start if it coincides with the target.
pub struct PathIter<'a> {
    grid: &'a PathingGrid,
    next: Option<usize>,
    remaining: usize,
}

impl<'a> PathIter<'a> {
    pub(crate) fn new(grid: &'a PathingGrid) -> PathIter<'a> {
        PathIter {
            grid,
            next: grid.path_found().then_some(grid.target),
            remaining: grid.cells.len(),
        }
    }
}

impl Iterator for PathIter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let ix = self.next?;
        // A path never revisits a cell; bounds the walk should the links be corrupted.
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let cell = &self.grid.cells[ix];
        self.next = if ix == self.grid.start {
            None
        } else {
            cell.predecessor
        };
        Some(cell.position)
    }
}
