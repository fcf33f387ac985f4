use std::collections::HashSet;
use std::process::ExitCode;
use std::time::Instant;

use crossterm::style::{Attribute, Color, Stylize};
use wilson_maze::{
    Coord, Direction, Maze, Solution, Walls,
    config::{Config, USAGE},
    logging,
};

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.to_string().with(Color::Red));
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };
    if config.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    execute(&config)
}

/// Runs with file logging installed. The log guard drops before returning, so the log file is
/// flushed on failure too.
fn execute(config: &Config) -> ExitCode {
    let _guard = logging::init_file_logging(config.log_file.as_deref());
    tracing::info!("[main] Starting with {:?}", config);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::info!("[main] Run failed: {}", e);
            eprintln!("{}", e.to_string().with(Color::Red).attribute(Attribute::Bold));
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> wilson_maze::Result<()> {
    let mut maze = Maze::new(config.rows, config.cols)?;
    if let Some(start) = config.start {
        maze.set_start(start)?;
    }
    if let Some(goal) = config.goal {
        maze.set_goal(goal)?;
    }

    let timer = Instant::now();
    maze.generate(config.seed);
    println!(
        "{}",
        format!(
            "Generated {}x{} maze in {:?}",
            maze.cols(),
            maze.rows(),
            timer.elapsed()
        )
        .with(Color::Green)
        .attribute(Attribute::Bold)
    );

    if config.break_walls > 0 {
        // Offset the seed so the broken walls differ from the carving sequence
        let broken = maze.break_walls(config.break_walls, config.seed.map(|s| s.wrapping_add(1)));
        println!("Knocked down {} internal walls", broken);
    }

    let cells = maze.cells();
    let timer = Instant::now();
    let solution = maze.solve(&cells, config.solver)?;
    println!(
        "{}",
        format!("Solved with {} in {:?}", config.solver, timer.elapsed())
            .with(Color::Green)
            .attribute(Attribute::Bold)
    );
    println!(
        "Start {} -> goal {}: path of {} cells, {} cells discovered",
        maze.start(),
        maze.goal(),
        solution.path.len(),
        solution.depths.len()
    );

    if config.draw {
        draw(&maze, &cells, &solution);
    }
    Ok(())
}

/// Prints the maze as text with the path marked.
fn draw(maze: &Maze, cells: &[Walls], solution: &Solution) {
    let dims = maze.dims();
    let on_path = solution.path.iter().copied().collect::<HashSet<_>>();
    let start = dims.ravel_index(maze.start());
    let goal = dims.ravel_index(maze.goal());

    let top = (0..maze.cols()).map(|_| "+--").collect::<String>();
    println!("{}+", top.with(Color::DarkGrey));

    for y in 0..maze.rows() {
        let mut row = "|".with(Color::DarkGrey).to_string();
        let mut floor = "+".with(Color::DarkGrey).to_string();
        for x in 0..maze.cols() {
            let index = dims.ravel_index(Coord::new(x, y));
            let content = if index == start {
                "S ".with(Color::Green)
            } else if index == goal {
                "G ".with(Color::Red)
            } else if on_path.contains(&index) {
                "**".with(Color::Yellow)
            } else {
                "  ".with(Color::Reset)
            };
            row.push_str(&content.to_string());
            let east = if cells[index].has(Direction::East) { "|" } else { " " };
            row.push_str(&east.with(Color::DarkGrey).to_string());

            let south = if cells[index].has(Direction::South) { "--" } else { "  " };
            floor.push_str(&south.with(Color::DarkGrey).to_string());
            floor.push_str(&"+".with(Color::DarkGrey).to_string());
        }
        println!("{}", row);
        println!("{}", floor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wilson_maze::MazeError;
    use wilson_maze::error::Waypoint;

    fn small_config() -> Config {
        Config {
            rows: 4,
            cols: 4,
            seed: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_run_solves_small_maze() {
        assert_eq!(run(&small_config()), Ok(()));
    }

    #[test]
    fn test_run_rejects_goal_outside_maze() {
        let config = Config {
            goal: Some(Coord::new(9, 9)),
            ..small_config()
        };
        assert!(matches!(
            run(&config),
            Err(MazeError::InvalidCoordinate {
                waypoint: Waypoint::Goal,
                rows: 4,
                cols: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_failed_run_keeps_its_log() {
        let path = std::env::temp_dir().join(format!("wilson-maze-{}.log", std::process::id()));
        let config = Config {
            start: Some(Coord::new(4, 0)),
            log_file: Some(path.clone()),
            ..small_config()
        };

        assert_eq!(execute(&config), ExitCode::FAILURE);

        let log = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(log.contains("[main] Run failed: invalid start (4, 0)"));
    }
}
