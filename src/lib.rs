//! Perfect maze generation with Wilson's algorithm, and BFS, DFS and A* solvers over the
//! resulting wall bitmask.

pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod solvers;

pub use error::{MazeError, Result};
pub use maze::{Coord, Dims, Direction, Maze, Walls};
pub use solvers::{CostMetric, Solution, Solver};
