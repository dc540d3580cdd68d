use grid_astar::{Edit, PathingSession};

// Replays the kind of edits a front end sends: each one re-solves the grid before returning,
// after which the renderer reads the cell views and the path.
fn main() {
    let mut session = PathingSession::default();
    let edits = [
        Edit::SetStart { x: 2, y: 3 },
        Edit::SetTarget { x: 12, y: 9 },
        Edit::ToggleObstacle { x: 7, y: 4 },
        Edit::ToggleObstacle { x: 7, y: 5 },
        Edit::ToggleObstacle { x: 7, y: 6 },
        Edit::ToggleObstacle { x: 7, y: 7 },
        Edit::SetObstacle {
            x: 7,
            y: 8,
            blocked: true,
        },
        Edit::SetStart { x: 16, y: 0 },
    ];
    for edit in edits {
        match session.apply(edit) {
            Ok(report) => println!(
                "{:?}: {:?}, {} cells expanded, path of {} cells",
                edit,
                report.outcome,
                report.expanded,
                session.grid().path().count()
            ),
            Err(err) => println!("{:?} rejected: {}", edit, err),
        }
    }
    let visited = session.grid().cell_views().filter(|v| v.is_visited).count();
    println!("{visited} cells visited in the last solve");
    println!("{}", session.grid());
}
