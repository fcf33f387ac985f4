use std::collections::{BTreeMap, VecDeque};

mod astar;
mod bfs;
mod dfs;

pub use astar::{CostMetric, solve_astar};
pub use bfs::solve_bfs;
pub use dfs::solve_dfs;

use crate::error::{MazeError, Result, Waypoint};
use crate::maze::{Dims, Direction, Walls};

/// Marks a cell that has no parent or depth yet.
const UNSET: usize = usize::MAX;

/// The outcome of a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    /// Cell indices from start to goal, both included.
    pub path: Vec<usize>,
    /// Hop count from the start for every cell the search discovered.
    pub depths: BTreeMap<usize, usize>,
}

/// A validated search input: cell walls plus the two endpoints as indices.
#[derive(Debug, Clone, Copy)]
pub struct Problem<'a> {
    cells: &'a [Walls],
    dims: Dims,
    start: usize,
    goal: usize,
}

impl<'a> Problem<'a> {
    pub fn new(cells: &'a [Walls], dims: Dims, start: usize, goal: usize) -> Result<Self> {
        if cells.len() != dims.len() {
            return Err(MazeError::InvalidCellsLength {
                expected: dims.len(),
                actual: cells.len(),
            });
        }
        for (index, waypoint) in [(start, Waypoint::Start), (goal, Waypoint::Goal)] {
            if index >= dims.len() {
                return Err(MazeError::InvalidCoordinate {
                    waypoint,
                    coord: dims.unravel_index(index),
                    rows: dims.rows(),
                    cols: dims.cols(),
                });
            }
        }
        Ok(Problem {
            cells,
            dims,
            start,
            goal,
        })
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn goal(&self) -> usize {
        self.goal
    }

    /// Neighbors reachable from `index` through an open wall, in north, east, south, west order.
    fn open_neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let walls = self.cells[index];
        Direction::ALL
            .into_iter()
            .filter(move |&d| !walls.has(d))
            .filter_map(move |d| self.dims.neighbor(index, d))
    }

    /// Walks parent links back from the goal to the start.
    fn backtrack(&self, parents: &[usize]) -> Result<Vec<usize>> {
        let mut path = vec![self.goal];
        let mut current = self.goal;
        while current != self.start {
            current = parents[current];
            if current == UNSET {
                return Err(MazeError::Unreachable {
                    start: self.start,
                    goal: self.goal,
                });
            }
            path.push(current);
        }
        path.reverse();
        Ok(path)
    }
}

/// Collects the depths of every discovered cell.
fn collect_depths(depths: &[usize]) -> BTreeMap<usize, usize> {
    depths
        .iter()
        .enumerate()
        .filter(|&(_, &depth)| depth != UNSET)
        .map(|(i, &depth)| (i, depth))
        .collect()
}

/// The order in which discovered cells are expanded.
trait Frontier {
    fn put(&mut self, index: usize);
    fn take(&mut self) -> Option<usize>;
}

/// First in, first out.
impl Frontier for VecDeque<usize> {
    fn put(&mut self, index: usize) {
        self.push_back(index);
    }

    fn take(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// Last in, first out.
impl Frontier for Vec<usize> {
    fn put(&mut self, index: usize) {
        self.push(index);
    }

    fn take(&mut self) -> Option<usize> {
        self.pop()
    }
}

/// Unweighted graph search shared by BFS and DFS.
///
/// Cells are marked visited and given a depth when discovered, not when expanded, so the depths
/// recorded off the final path depend on the frontier discipline.
fn traverse<F: Frontier>(problem: &Problem<'_>, mut frontier: F) -> Result<Solution> {
    let len = problem.dims.len();
    let mut parents = vec![UNSET; len];
    let mut depths = vec![UNSET; len];
    let mut visited = vec![false; len];

    frontier.put(problem.start);
    visited[problem.start] = true;
    depths[problem.start] = 0;

    while let Some(current) = frontier.take() {
        if current == problem.goal {
            break;
        }
        for neighbor in problem.open_neighbors(current) {
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            parents[neighbor] = current;
            depths[neighbor] = depths[current] + 1;
            frontier.put(neighbor);
        }
    }

    Ok(Solution {
        path: problem.backtrack(&parents)?,
        depths: collect_depths(&depths),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Bfs,
    Dfs,
    AStar(CostMetric),
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::AStar(metric) => write!(f, "A* Search ({})", metric),
        }
    }
}

pub fn solve_maze(problem: &Problem<'_>, solver: Solver) -> Result<Solution> {
    let solution = match solver {
        Solver::Bfs => solve_bfs(problem),
        Solver::Dfs => solve_dfs(problem),
        Solver::AStar(metric) => solve_astar(problem, metric),
    }?;
    tracing::debug!(
        "[solve] {}: path of {} cells, {} cells discovered",
        solver,
        solution.path.len(),
        solution.depths.len()
    );
    Ok(solution)
}

/// Builds fully walled cells with the listed passages opened.
#[cfg(test)]
pub(crate) fn open_passages(dims: Dims, passages: &[(usize, usize)]) -> Vec<Walls> {
    let mut cells = vec![Walls::ALL; dims.len()];
    for &(a, b) in passages {
        let direction = dims
            .direction_between(a, b)
            .expect("passages must join adjacent cells");
        cells[a].remove(direction);
        cells[b].remove(direction.opposite());
    }
    cells
}
