pub mod cell;
mod grid;

use rand::Rng;

use crate::error::{MazeError, Result, Waypoint};
use crate::generators::{self, get_rng};
use crate::solvers::{self, CostMetric, Problem, Solution, Solver};

pub use cell::{Direction, Walls};
pub use grid::{Coord, Dims};

/// A rectangular maze: its dimensions, the walls of every cell, and the two waypoints.
///
/// The cell array is written only by [`Maze::generate`] and [`Maze::break_walls`]. Everything
/// handed out is a copy, so solvers can run on cells that are decoupled from the live maze.
#[derive(Debug, Clone)]
pub struct Maze {
    dims: Dims,
    cells: Box<[Walls]>,
    start: Coord,
    goal: Coord,
}

impl Default for Maze {
    fn default() -> Self {
        let mut maze = Maze {
            dims: Dims::default(),
            cells: Box::default(),
            start: Coord::default(),
            goal: Coord::default(),
        };
        maze.reset_waypoints();
        maze
    }
}

impl Maze {
    /// Creates an ungenerated maze with the start in the top-left corner and the goal in the
    /// bottom-right one.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let mut maze = Maze {
            dims: Dims::new(rows, cols)?,
            cells: Box::default(),
            start: Coord::default(),
            goal: Coord::default(),
        };
        maze.reset_waypoints();
        Ok(maze)
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Returns the height of the maze in cells.
    pub fn rows(&self) -> usize {
        self.dims.rows()
    }

    /// Returns the width of the maze in cells.
    pub fn cols(&self) -> usize {
        self.dims.cols()
    }

    /// Checks if the maze currently holds generated cells.
    pub fn is_generated(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Reconfigures the maze dimensions.
    ///
    /// Unchanged dimensions are a no-op. Otherwise the old cells are dropped and both waypoints
    /// go back to their default corners.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        if rows == self.rows() && cols == self.cols() {
            return Ok(());
        }
        self.dims = Dims::new(rows, cols)?;
        self.cells = Box::default();
        self.reset_waypoints();
        tracing::debug!("[maze] resized to {}x{}", cols, rows);
        Ok(())
    }

    /// Puts the start at (0, 0) and the goal at (cols - 1, rows - 1).
    fn reset_waypoints(&mut self) {
        self.start = Coord::new(0, 0);
        self.goal = Coord::new(self.cols() - 1, self.rows() - 1);
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn set_start(&mut self, coord: Coord) -> Result<()> {
        self.start = self.checked(coord, Waypoint::Start)?;
        Ok(())
    }

    pub fn set_goal(&mut self, coord: Coord) -> Result<()> {
        self.goal = self.checked(coord, Waypoint::Goal)?;
        Ok(())
    }

    fn checked(&self, coord: Coord, waypoint: Waypoint) -> Result<Coord> {
        if self.dims.contains(coord) {
            Ok(coord)
        } else {
            Err(MazeError::InvalidCoordinate {
                waypoint,
                coord,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    /// Returns a copy of the cell walls. Empty until the maze is generated.
    pub fn cells(&self) -> Vec<Walls> {
        self.cells.to_vec()
    }

    /// Generates a new perfect maze, optionally seeded for reproducibility.
    pub fn generate(&mut self, seed: Option<u64>) -> Vec<Walls> {
        self.generate_with(&mut get_rng(seed))
    }

    /// Generates a new perfect maze drawing randomness from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Walls> {
        self.cells = generators::wilson(self.dims, rng).into_boxed_slice();
        tracing::debug!(
            "[generate] carved {}x{} maze with {} internal walls left",
            self.cols(),
            self.rows(),
            self.internal_walls()
        );
        self.cells()
    }

    /// Number of internal walls still standing in the generated maze.
    pub fn internal_walls(&self) -> usize {
        generators::internal_walls(&self.cells, self.dims)
    }

    /// Knocks down up to `count` random internal walls. Returns how many were removed.
    pub fn break_walls(&mut self, count: usize, seed: Option<u64>) -> usize {
        self.break_walls_with(count, &mut get_rng(seed))
    }

    pub fn break_walls_with<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> usize {
        let broken = generators::break_walls(&mut self.cells, self.dims, count, rng);
        tracing::debug!("[break] removed {} of {} requested walls", broken, count);
        broken
    }

    /// Validates `cells` against the maze and pairs them with the current waypoints.
    pub fn problem<'a>(&self, cells: &'a [Walls]) -> Result<Problem<'a>> {
        Problem::new(
            cells,
            self.dims,
            self.dims.ravel_index(self.start),
            self.dims.ravel_index(self.goal),
        )
    }

    pub fn solve(&self, cells: &[Walls], solver: Solver) -> Result<Solution> {
        solvers::solve_maze(&self.problem(cells)?, solver)
    }

    pub fn solve_bfs(&self, cells: &[Walls]) -> Result<Solution> {
        self.solve(cells, Solver::Bfs)
    }

    pub fn solve_dfs(&self, cells: &[Walls]) -> Result<Solution> {
        self.solve(cells, Solver::Dfs)
    }

    pub fn a_star(&self, cells: &[Walls], metric: CostMetric) -> Result<Solution> {
        self.solve(cells, Solver::AStar(metric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashSet, VecDeque};

    fn all_solvers() -> [Solver; 5] {
        [
            Solver::Bfs,
            Solver::Dfs,
            Solver::AStar(CostMetric::Manhattan),
            Solver::AStar(CostMetric::Euclidean),
            Solver::AStar(CostMetric::UniformCost),
        ]
    }

    /// Checks that the open passages form a spanning tree.
    fn assert_spanning_tree(cells: &[Walls], dims: Dims) {
        let mut edges = 0;
        for i in 0..dims.len() {
            for d in [Direction::East, Direction::South] {
                if let Some(n) = dims.neighbor(i, d) {
                    assert_eq!(cells[i].has(d), cells[n].has(d.opposite()));
                    if !cells[i].has(d) {
                        edges += 1;
                    }
                }
            }
        }
        assert_eq!(edges, dims.len() - 1);

        // Flood fill from cell 0 must reach every cell
        let mut seen = HashSet::from([0]);
        let mut queue = VecDeque::from([0]);
        while let Some(i) = queue.pop_front() {
            for d in Direction::ALL {
                if cells[i].has(d) {
                    continue;
                }
                if let Some(n) = dims.neighbor(i, d) {
                    if seen.insert(n) {
                        queue.push_back(n);
                    }
                }
            }
        }
        assert_eq!(seen.len(), dims.len());
    }

    fn assert_valid_path(solution: &Solution, maze: &Maze, cells: &[Walls]) {
        let dims = maze.dims();
        let path = &solution.path;
        assert_eq!(path.first(), Some(&dims.ravel_index(maze.start())));
        assert_eq!(path.last(), Some(&dims.ravel_index(maze.goal())));
        for pair in path.windows(2) {
            let direction = dims
                .direction_between(pair[0], pair[1])
                .expect("consecutive path cells must be adjacent");
            assert!(!cells[pair[0]].has(direction));
            assert!(!cells[pair[1]].has(direction.opposite()));
        }
    }

    #[test]
    fn test_defaults() {
        let maze = Maze::default();
        assert_eq!((maze.rows(), maze.cols()), (30, 30));
        assert_eq!(maze.start(), Coord::new(0, 0));
        assert_eq!(maze.goal(), Coord::new(29, 29));
        assert!(!maze.is_generated());
    }

    #[test]
    fn test_resize_resets_waypoints() {
        let mut maze = Maze::new(5, 7).unwrap();
        assert_eq!(maze.goal(), Coord::new(6, 4));
        maze.set_start(Coord::new(3, 3)).unwrap();
        maze.generate(Some(0));

        // Same dimensions leave everything alone
        maze.resize(5, 7).unwrap();
        assert_eq!(maze.start(), Coord::new(3, 3));
        assert_eq!(maze.cells().len(), 35);

        maze.resize(4, 2).unwrap();
        assert_eq!(maze.start(), Coord::new(0, 0));
        assert_eq!(maze.goal(), Coord::new(1, 3));
        assert!(maze.cells().is_empty());
    }

    #[test]
    fn test_resize_rejects_zero() {
        let mut maze = Maze::new(5, 5).unwrap();
        assert_eq!(
            maze.resize(0, 3),
            Err(MazeError::InvalidDimension { rows: 0, cols: 3 })
        );
        // A failed resize leaves the maze as it was
        assert_eq!((maze.rows(), maze.cols()), (5, 5));
        assert!(Maze::new(2, 0).is_err());
        // A cell count past usize::MAX is rejected before anything is allocated
        assert!(Maze::new(usize::MAX / 2 + 1, 2).is_err());
        assert!(maze.resize(2, usize::MAX / 2 + 1).is_err());
        assert_eq!((maze.rows(), maze.cols()), (5, 5));
    }

    #[test]
    fn test_waypoint_bounds() {
        let mut maze = Maze::new(3, 4).unwrap();
        assert!(maze.set_start(Coord::new(3, 2)).is_ok());
        assert_eq!(
            maze.set_goal(Coord::new(4, 0)),
            Err(MazeError::InvalidCoordinate {
                waypoint: Waypoint::Goal,
                coord: Coord::new(4, 0),
                rows: 3,
                cols: 4,
            })
        );
        assert!(maze.set_start(Coord::new(0, 3)).is_err());
        assert_eq!(maze.start(), Coord::new(3, 2));
    }

    #[test]
    fn test_cells_are_copies() {
        let mut maze = Maze::new(4, 4).unwrap();
        let mut cells = maze.generate(Some(11));
        cells[0] = Walls::NONE;
        assert_ne!(maze.cells()[0], Walls::NONE);
    }

    #[test]
    fn test_generate_spanning_tree() {
        for (rows, cols, seed) in [(1, 1, 0), (1, 9, 1), (9, 1, 2), (2, 2, 3), (13, 21, 4), (40, 40, 5)] {
            let mut maze = Maze::new(rows, cols).unwrap();
            let cells = maze.generate(Some(seed));
            assert_eq!(cells.len(), rows * cols);
            assert_spanning_tree(&cells, maze.dims());
        }
    }

    #[test]
    fn test_border_walls() {
        let mut maze = Maze::new(11, 6).unwrap();
        let cells = maze.generate(Some(8));
        let dims = maze.dims();
        for i in 0..dims.len() {
            for d in Direction::ALL {
                if dims.is_border(i, d) {
                    assert!(cells[i].has(d), "cell {} lost its {:?} border wall", i, d);
                }
            }
        }
    }

    #[test]
    fn test_single_cell_maze() {
        let mut maze = Maze::new(1, 1).unwrap();
        let cells = maze.generate(None);
        assert_eq!(cells, vec![Walls::ALL]);
        for solver in all_solvers() {
            let solution = maze.solve(&cells, solver).unwrap();
            assert_eq!(solution.path, vec![0]);
            assert_eq!(solution.depths, BTreeMap::from([(0, 0)]));
        }
    }

    #[test]
    fn test_hand_made_2x2() {
        // 0 <-> 1 and 1 <-> 3 open, everything else closed
        let cells = vec![
            Walls::NORTH | Walls::WEST | Walls::SOUTH,
            Walls::NORTH | Walls::EAST,
            Walls::ALL,
            Walls::SOUTH | Walls::EAST | Walls::WEST,
        ];
        let maze = Maze::new(2, 2).unwrap();
        for solver in all_solvers() {
            let solution = maze.solve(&cells, solver).unwrap();
            assert_eq!(solution.path, vec![0, 1, 3], "{}", solver);
        }
    }

    #[test]
    fn test_solvers_agree_on_path() {
        let mut maze = Maze::new(25, 31).unwrap();
        maze.set_start(Coord::new(4, 20)).unwrap();
        maze.set_goal(Coord::new(28, 2)).unwrap();
        let cells = maze.generate(Some(2024));

        let bfs = maze.solve_bfs(&cells).unwrap();
        let dfs = maze.solve_dfs(&cells).unwrap();
        assert_eq!(bfs.path, dfs.path);
        assert_valid_path(&bfs, &maze, &cells);

        for solution in [&bfs, &dfs] {
            for (position, cell) in solution.path.iter().enumerate() {
                assert_eq!(solution.depths[cell], position);
            }
        }

        for metric in [CostMetric::Manhattan, CostMetric::Euclidean, CostMetric::UniformCost] {
            let astar = maze.a_star(&cells, metric).unwrap();
            assert_eq!(astar.path, bfs.path, "{}", metric);
        }
    }

    #[test]
    fn test_start_equals_goal() {
        let mut maze = Maze::new(6, 6).unwrap();
        maze.set_start(Coord::new(2, 3)).unwrap();
        maze.set_goal(Coord::new(2, 3)).unwrap();
        let cells = maze.generate(Some(1));
        for solver in all_solvers() {
            let solution = maze.solve(&cells, solver).unwrap();
            assert_eq!(solution.path, vec![20]);
            assert_eq!(solution.depths[&20], 0);
        }
    }

    #[test]
    fn test_wrong_cells_length() {
        let mut maze = Maze::new(4, 4).unwrap();
        let cells = maze.generate(Some(0));
        maze.resize(5, 5).unwrap();
        assert_eq!(
            maze.solve_bfs(&cells),
            Err(MazeError::InvalidCellsLength {
                expected: 25,
                actual: 16
            })
        );
    }

    #[test]
    fn test_disconnected_goal() {
        let maze = Maze::new(3, 3).unwrap();
        let cells = vec![Walls::ALL; 9];
        for solver in all_solvers() {
            assert_eq!(
                maze.solve(&cells, solver),
                Err(MazeError::Unreachable { start: 0, goal: 8 })
            );
        }
    }

    #[test]
    fn test_braided_maze_still_solvable() {
        let mut maze = Maze::new(15, 15).unwrap();
        maze.generate(Some(99));
        let before = maze.internal_walls();
        assert_eq!(maze.break_walls(30, Some(99)), 30);
        assert_eq!(maze.internal_walls(), before - 30);

        let cells = maze.cells();
        let bfs = maze.solve_bfs(&cells).unwrap();
        assert_valid_path(&bfs, &maze, &cells);
        // Cycles allow shortcuts, but BFS and A* still find a shortest path
        let astar = maze.a_star(&cells, CostMetric::Manhattan).unwrap();
        assert_valid_path(&astar, &maze, &cells);
        assert_eq!(astar.path.len(), bfs.path.len());
        let dfs = maze.solve_dfs(&cells).unwrap();
        assert_valid_path(&dfs, &maze, &cells);
        assert!(dfs.path.len() >= bfs.path.len());
    }
}
