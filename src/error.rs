use std::fmt;

use crate::maze::Coord;

/// Which of the two maze waypoints an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waypoint {
    Start,
    Goal,
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Waypoint::Start => write!(f, "start"),
            Waypoint::Goal => write!(f, "goal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("invalid dimensions (rows={rows}, cols={cols}): both must be >= 1 with a cell count that fits in usize")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("invalid {waypoint} {coord}: coordinates must be inside a {cols}x{rows} maze")]
    InvalidCoordinate {
        waypoint: Waypoint,
        coord: Coord,
        rows: usize,
        cols: usize,
    },
    #[error("invalid cells length ({actual}): expected {expected}, regenerate or resize the maze")]
    InvalidCellsLength { expected: usize, actual: usize },
    #[error("invalid cost type ({0}): must be an integer from 0 to 2")]
    InvalidCostType(usize),
    #[error("goal {goal} is not reachable from start {start}")]
    Unreachable { start: usize, goal: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;
