use std::collections::VecDeque;

use super::{Problem, Solution, traverse};
use crate::error::Result;

/// Breadth-first search: cells are expanded in the order they were discovered.
pub fn solve_bfs(problem: &Problem<'_>) -> Result<Solution> {
    traverse(problem, VecDeque::new())
}
