use std::path::Path;
use std::time::{Duration, Instant};

use wilson_maze::{CostMetric, Maze, Solver, logging};

const PROFILE_SIZE: usize = 1000;

fn main() -> std::io::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1);

    let _guard = logging::init_file_logging(Some(Path::new("profile.log")));
    let mut maze = Maze::new(PROFILE_SIZE, PROFILE_SIZE).map_err(std::io::Error::other)?;

    let solvers = [
        Solver::Bfs,
        Solver::Dfs,
        Solver::AStar(CostMetric::Manhattan),
        Solver::AStar(CostMetric::Euclidean),
        Solver::AStar(CostMetric::UniformCost),
    ];
    let mut generate_time = Duration::ZERO;
    let mut solve_times = [Duration::ZERO; 5];

    for iteration in 0..num_iters {
        let timer = Instant::now();
        let cells = maze.generate(Some(iteration as u64));
        generate_time += timer.elapsed();

        for (solver, total) in solvers.iter().zip(solve_times.iter_mut()) {
            let timer = Instant::now();
            let solution = maze
                .solve(&cells, *solver)
                .map_err(std::io::Error::other)?;
            *total += timer.elapsed();
            tracing::debug!(
                "[profile] iteration {} {}: path of {} cells",
                iteration,
                solver,
                solution.path.len()
            );
        }
    }

    let runs = num_iters.max(1) as u32;
    println!(
        "{}x{} maze, {} iterations",
        PROFILE_SIZE, PROFILE_SIZE, num_iters
    );
    println!("  generate: {:?} per run", generate_time / runs);
    for (solver, total) in solvers.iter().zip(solve_times) {
        println!("  {}: {:?} per run", solver, total / runs);
        tracing::info!("[profile] {}: {:?} per run", solver, total / runs);
    }
    Ok(())
}
