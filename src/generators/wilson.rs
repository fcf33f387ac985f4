use rand::Rng;

use crate::maze::{Dims, Direction, Walls};

/// Marks a cell that is not part of the walk in progress.
const UNSET: usize = usize::MAX;

/// Carves a uniformly random spanning tree over the grid using Wilson's algorithm.
///
/// Every cell starts fully enclosed. Loop-erased random walks are grown from cells outside the
/// tree until they hit it, and each committed walk has its walls knocked down. The result is a
/// perfect maze: exactly one simple path between any two cells, border walls intact.
pub fn wilson<R: Rng + ?Sized>(dims: Dims, rng: &mut R) -> Vec<Walls> {
    let len = dims.len();
    let mut cells = vec![Walls::ALL; len];
    if len == 0 {
        return cells;
    }

    let mut in_tree = vec![false; len];
    // Pointer from each cell on the current walk back to the cell it was entered from.
    // The walk root points at itself.
    let mut walk = vec![UNSET; len];
    let mut remaining = len - 1;
    in_tree[len - 1] = true;

    // Cells at or above the cursor are already in the tree
    let mut cursor = len - 1;

    while remaining > 0 {
        cursor -= 1;
        if in_tree[cursor] {
            continue;
        }
        let root = cursor;
        walk[root] = root;

        let mut current = root;
        loop {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            let Some(next) = dims.neighbor(current, direction) else {
                // Stepped off the grid, roll again
                continue;
            };

            if walk[next] != UNSET {
                // The walk ran into itself: erase the loop back to `next`
                while current != next {
                    current = std::mem::replace(&mut walk[current], UNSET);
                }
                continue;
            }
            walk[next] = current;

            if in_tree[next] {
                remaining -= commit_walk(&mut cells, &mut in_tree, &mut walk, dims, next);
                break;
            }
            current = next;
        }
    }

    cells
}

/// Joins the walk ending at the tree cell `tail` to the tree, opening walls along the way.
///
/// Returns the number of cells that joined the tree.
fn commit_walk(
    cells: &mut [Walls],
    in_tree: &mut [bool],
    walk: &mut [usize],
    dims: Dims,
    tail: usize,
) -> usize {
    let mut joined = 0;
    let mut cell = tail;
    loop {
        let prev = std::mem::replace(&mut walk[cell], UNSET);
        if prev == cell {
            // Reached the walk root
            return joined;
        }
        carve(cells, dims, prev, cell);
        in_tree[prev] = true;
        joined += 1;
        cell = prev;
    }
}

/// Opens the passage between two adjacent cells.
fn carve(cells: &mut [Walls], dims: Dims, from: usize, to: usize) {
    if let Some(direction) = dims.direction_between(from, to) {
        cells[from].remove(direction);
        cells[to].remove(direction.opposite());
    }
}
