use super::{Problem, Solution, traverse};
use crate::error::Result;

/// Depth-first search: the most recently discovered cell is expanded first.
pub fn solve_dfs(problem: &Problem<'_>) -> Result<Solution> {
    traverse(problem, Vec::new())
}
