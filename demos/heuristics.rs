use grid_astar::{GridConfig, HeuristicKind, Pathfinder, PathingGrid};

// The heuristic both orders the frontier and prices each step. Manhattan explores along the
// cheapest route, Zero floods the grid uniformly, and EuclideanSquared rushes towards the goal at
// the price of optimality.
fn main() {
    const N: i32 = 20;
    let mut pathing_grid = PathingGrid::with_config(&GridConfig::new(N as usize, N as usize))
        .expect("non-zero dimensions");
    for i in 3..N - 3 {
        pathing_grid.set_obstacle(i, N / 2, true).unwrap();
        pathing_grid.set_obstacle(N / 2, i, true).unwrap();
    }
    pathing_grid.set_start(1, 1).unwrap();
    pathing_grid.set_target(N - 2, N - 2).unwrap();
    for heuristic in HeuristicKind::ALL {
        let report = Pathfinder::new(heuristic).resolve(&mut pathing_grid);
        println!(
            "{heuristic}: {:?}, cost {}, {} cells expanded, {} frontier pushes",
            report.outcome,
            pathing_grid.target_cell().cost_so_far(),
            report.expanded,
            report.pushed
        );
        println!("{}", pathing_grid);
    }
}
