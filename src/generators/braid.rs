use rand::Rng;

use crate::maze::{Coord, Dims, Direction, Walls};

/// Counts the internal walls still standing.
///
/// Each internal wall is counted once, from the cell below it or to its right.
pub fn internal_walls(cells: &[Walls], dims: Dims) -> usize {
    (0..cells.len().min(dims.len()))
        .map(|i| {
            let Coord { x, y } = dims.unravel_index(i);
            usize::from(y > 0 && cells[i].has(Direction::North))
                + usize::from(x > 0 && cells[i].has(Direction::West))
        })
        .sum()
}

/// Knocks down `count` random internal walls, turning a perfect maze into one with cycles.
///
/// The request is capped at the number of internal walls left. Border walls are never touched.
/// Returns the number of walls removed.
pub fn break_walls<R: Rng + ?Sized>(
    cells: &mut [Walls],
    dims: Dims,
    count: usize,
    rng: &mut R,
) -> usize {
    if cells.len() != dims.len() {
        return 0;
    }
    let target = count.min(internal_walls(cells, dims));
    let mut leftover = target;

    while leftover > 0 {
        let coord = Coord::new(
            rng.random_range(0..dims.cols()),
            rng.random_range(0..dims.rows()),
        );
        let direction = if rng.random_bool(0.5) {
            Direction::North
        } else {
            Direction::West
        };
        let index = dims.ravel_index(coord);
        let Some(neighbor) = dims.neighbor(index, direction) else {
            continue;
        };
        if cells[index].remove(direction) {
            cells[neighbor].remove(direction.opposite());
            leftover -= 1;
        }
    }

    target
}
