/// Fuzzes the pathfinder by checking for many random grids that a path is found exactly when the
/// target shares a connected component with the start, and that the Manhattan-guided search
/// returns the same cost as a plain uniform-cost search.
use grid_astar::{HeuristicKind, Pathfinder, PathingGrid};
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::prelude::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> PathingGrid {
    let mut pathing_grid: PathingGrid = PathingGrid::new(w, h, false);
    for x in 0..pathing_grid.width() {
        for y in 0..pathing_grid.height() {
            pathing_grid.set(x, y, rng.gen_bool(0.4))
        }
    }
    pathing_grid
}

fn visualize_grid(grid: &PathingGrid) {
    println!("{}", grid);
}

/// Uniform-cost search pricing each step by the Manhattan distance between the two cells.
fn reference_cost(grid: &PathingGrid, start: Point, goal: Point) -> Option<u32> {
    let w = grid.width();
    let ix = |p: Point| p.y as usize * w + p.x as usize;
    let mut best = vec![u32::MAX; w * grid.height()];
    let mut to_see = BinaryHeap::new();
    best[ix(start)] = 0;
    to_see.push(Reverse((0u32, start.x, start.y)));
    while let Some(Reverse((cost, x, y))) = to_see.pop() {
        let p = Point::new(x, y);
        if p == goal {
            return Some(cost);
        }
        if cost > best[ix(p)] {
            continue;
        }
        for n in grid.neighbours(x, y).unwrap() {
            let step = ((n.x - x).abs() + (n.y - y).abs()) as u32;
            if cost + step < best[ix(n)] {
                best[ix(n)] = cost + step;
                to_see.push(Reverse((cost + step, n.x, n.y)));
            }
        }
    }
    None
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for heuristic in HeuristicKind::ALL {
        let pathfinder = Pathfinder::new(heuristic);
        for _ in 0..N_GRIDS {
            let mut random_grid = random_grid(N, N, &mut rng);
            random_grid.set_obstacle(start.x, start.y, false).unwrap();
            random_grid.set_obstacle(end.x, end.y, false).unwrap();
            let report = pathfinder.resolve(&mut random_grid);
            let reachable = random_grid.target_reachable();
            // Show the grid if the outcome disagrees with the components
            if report.found() != reachable {
                visualize_grid(&random_grid);
            }
            assert_eq!(report.found(), reachable);
            assert_eq!(random_grid.path_found(), reachable);
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let pathfinder = Pathfinder::new(HeuristicKind::Manhattan);
    for _ in 0..N_GRIDS {
        let mut random_grid = random_grid(N, N, &mut rng);
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        random_grid.set_obstacle(start.x, start.y, false).unwrap();
        random_grid.set_obstacle(end.x, end.y, false).unwrap();
        random_grid.set_start(start.x, start.y).unwrap();
        random_grid.set_target(end.x, end.y).unwrap();
        pathfinder.resolve(&mut random_grid);

        let expected = reference_cost(&random_grid, start, end);
        let cost = random_grid
            .path_found()
            .then(|| random_grid.target_cell().cost_so_far() as u32);
        if cost != expected {
            println!("Expected: {expected:?}; found: {cost:?}");
            visualize_grid(&random_grid);
        }
        assert_eq!(cost, expected);
    }
}
