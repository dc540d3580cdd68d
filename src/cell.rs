use grid_util::point::Point;
use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// One grid position. Cells are owned by their [PathingGrid](crate::PathingGrid); the
/// predecessor and neighbour links are indices into the grid's flat, row-major cell array.
#[derive(Clone, Debug)]
pub struct Cell {
    pub(crate) position: Point,
    pub(crate) is_obstacle: bool,
    pub(crate) is_visited: bool,
    pub(crate) cost_so_far: f32,
    pub(crate) estimated_total: f32,
    pub(crate) predecessor: Option<usize>,
    pub(crate) neighbours: SmallVec<[usize; N_SMALLVEC_SIZE]>,
}

impl Cell {
    pub(crate) fn new(position: Point, is_obstacle: bool) -> Cell {
        Cell {
            position,
            is_obstacle,
            is_visited: false,
            cost_so_far: f32::INFINITY,
            estimated_total: f32::INFINITY,
            predecessor: None,
            neighbours: SmallVec::new(),
        }
    }

    pub(crate) fn reset_scratch(&mut self) {
        self.is_visited = false;
        self.cost_so_far = f32::INFINITY;
        self.estimated_total = f32::INFINITY;
        self.predecessor = None;
    }

    pub fn position(&self) -> Point {
        self.position
    }
    pub fn is_obstacle(&self) -> bool {
        self.is_obstacle
    }
    pub fn is_visited(&self) -> bool {
        self.is_visited
    }
    /// Cost of the best known path from the start, `f32::INFINITY` if undiscovered.
    pub fn cost_so_far(&self) -> f32 {
        self.cost_so_far
    }
    /// Cost so far plus the heuristic estimate to the target.
    pub fn estimated_total(&self) -> f32 {
        self.estimated_total
    }
    /// Index of the cell this one was reached from.
    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }
    /// Indices of the adjacent traversable cells, in E, S, W, N, SE, SW, NW, NE order.
    pub fn neighbours(&self) -> &[usize] {
        &self.neighbours
    }
}

/// What a renderer needs to draw a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellView {
    pub x: i32,
    pub y: i32,
    pub is_obstacle: bool,
    pub is_visited: bool,
    pub is_start: bool,
    pub is_target: bool,
}

/// Search annotations of a single cell, with the predecessor resolved to coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScratchState {
    pub x: i32,
    pub y: i32,
    pub is_visited: bool,
    pub cost_so_far: f32,
    pub estimated_total: f32,
    pub predecessor: Option<(i32, i32)>,
}
