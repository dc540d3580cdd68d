use grid_astar::{HeuristicKind, Pathfinder, PathingGrid};
use grid_util::grid::Grid;

// In this example a path is found on a grid with shape
// S....
// .###.
// .#...
// .#.#.
// ...#G
// S marks the start
// G marks the goal
fn main() {
    let mut pathing_grid: PathingGrid = PathingGrid::new(5, 5, false);
    for (x, y) in [(1, 1), (2, 1), (3, 1), (1, 2), (1, 3), (3, 3), (3, 4)] {
        pathing_grid.set(x, y, true);
    }
    pathing_grid.set_start(0, 0).unwrap();
    pathing_grid.set_target(4, 4).unwrap();
    let report = Pathfinder::new(HeuristicKind::Manhattan).resolve(&mut pathing_grid);
    println!("{}", pathing_grid);
    if report.found() {
        println!(
            "A path of cost {} has been found:",
            pathing_grid.target_cell().cost_so_far()
        );
        let mut path = pathing_grid.path().collect::<Vec<_>>();
        path.reverse();
        for p in path {
            println!("{:?}", p);
        }
    } else {
        println!("No path exists");
    }
}
