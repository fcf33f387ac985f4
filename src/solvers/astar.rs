use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use super::{Problem, Solution, UNSET, collect_depths};
use crate::error::{MazeError, Result};
use crate::maze::Coord;

/// Step cost and heuristic used by A*.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CostMetric {
    #[default]
    Manhattan,
    Euclidean,
    /// Every step costs 1 and the heuristic is a flat 1, which makes A* a uniform-cost search.
    UniformCost,
}

impl CostMetric {
    pub const ALL: [CostMetric; 3] = [
        CostMetric::Manhattan,
        CostMetric::Euclidean,
        CostMetric::UniformCost,
    ];

    pub fn cost(self, from: Coord, to: Coord) -> f64 {
        match self {
            CostMetric::Manhattan => (from.x.abs_diff(to.x) + from.y.abs_diff(to.y)) as f64,
            CostMetric::Euclidean => {
                let dx = from.x.abs_diff(to.x) as f64;
                let dy = from.y.abs_diff(to.y) as f64;
                (dx * dx + dy * dy).sqrt()
            }
            CostMetric::UniformCost => 1.0,
        }
    }
}

/// Selects a metric by its position in [`CostMetric::ALL`].
impl TryFrom<usize> for CostMetric {
    type Error = MazeError;

    fn try_from(value: usize) -> Result<Self> {
        CostMetric::ALL
            .get(value)
            .copied()
            .ok_or(MazeError::InvalidCostType(value))
    }
}

impl fmt::Display for CostMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostMetric::Manhattan => write!(f, "Manhattan"),
            CostMetric::Euclidean => write!(f, "Euclidean"),
            CostMetric::UniformCost => write!(f, "Uniform Cost"),
        }
    }
}

/// An entry in the open set.
#[derive(Debug, Clone, Copy)]
struct OpenNode {
    f: f64,
    /// Push order, so equal priorities come out first in, first out.
    seq: usize,
    index: usize,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

/// A* search ordered by `f = g + h`, with `g` and `h` both measured by `metric`.
///
/// A cell may be pushed again whenever a strictly cheaper route to it turns up; the stale
/// entries are skipped when popped. Depths in the result are hop counts, not costs.
pub fn solve_astar(problem: &Problem<'_>, metric: CostMetric) -> Result<Solution> {
    let dims = problem.dims();
    let len = dims.len();
    let start = problem.start();
    let goal = problem.goal();
    let goal_coord = dims.unravel_index(goal);

    let mut g_score = vec![f64::INFINITY; len];
    let mut parents = vec![UNSET; len];
    let mut depths = vec![UNSET; len];
    let mut closed = vec![false; len];
    let mut open = BinaryHeap::new();
    let mut seq = 0;

    g_score[start] = 0.0;
    depths[start] = 0;
    open.push(OpenNode {
        f: metric.cost(dims.unravel_index(start), goal_coord),
        seq,
        index: start,
    });

    while let Some(OpenNode { index: current, .. }) = open.pop() {
        if closed[current] {
            continue;
        }
        if current == goal {
            break;
        }
        closed[current] = true;

        let here = dims.unravel_index(current);
        for neighbor in problem.open_neighbors(current) {
            let there = dims.unravel_index(neighbor);
            let tentative_g = g_score[current] + metric.cost(here, there);
            if tentative_g < g_score[neighbor] {
                parents[neighbor] = current;
                depths[neighbor] = depths[current] + 1;
                g_score[neighbor] = tentative_g;
                seq += 1;
                open.push(OpenNode {
                    f: tentative_g + metric.cost(there, goal_coord),
                    seq,
                    index: neighbor,
                });
            }
        }
    }

    Ok(Solution {
        path: problem.backtrack(&parents)?,
        depths: collect_depths(&depths),
    })
}
