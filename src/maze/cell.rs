use std::fmt;
use std::ops::BitOr;

/// The walls standing around a single maze cell, one bit per side.
///
/// A set bit means the passage on that side is blocked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls(u8);

impl Walls {
    pub const NONE: Walls = Walls(0);
    pub const NORTH: Walls = Walls(0b0001);
    pub const SOUTH: Walls = Walls(0b0010);
    pub const EAST: Walls = Walls(0b0100);
    pub const WEST: Walls = Walls(0b1000);
    /// A fully enclosed cell.
    pub const ALL: Walls = Walls(0b1111);

    /// Builds a bitmask from raw bits. Bits above the low four are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Walls(bits & Self::ALL.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Checks whether the wall on the given side is standing.
    pub fn has(self, direction: Direction) -> bool {
        self.0 & direction.wall().0 != 0
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.wall().0;
    }

    /// Knocks down the wall on the given side. Returns `true` if a wall was removed.
    pub fn remove(&mut self, direction: Direction) -> bool {
        let had = self.has(direction);
        self.0 &= !direction.wall().0;
        had
    }

    /// Number of walls standing around the cell.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl BitOr for Walls {
    type Output = Walls;

    fn bitor(self, rhs: Self) -> Self::Output {
        Walls(self.0 | rhs.0)
    }
}

impl fmt::Display for Walls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sides = Direction::ALL
            .iter()
            .map(|&d| if self.has(d) { d.symbol() } else { '.' })
            .collect::<String>();
        write!(f, "{}", sides)
    }
}

/// One of the four axis-aligned moves between neighboring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in the order the solvers expand neighbors.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The wall bit blocking a move in this direction.
    pub const fn wall(self) -> Walls {
        match self {
            Direction::North => Walls::NORTH,
            Direction::East => Walls::EAST,
            Direction::South => Walls::SOUTH,
            Direction::West => Walls::WEST,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    fn symbol(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}
