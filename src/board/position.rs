//! Board coordinates and the four cardinal directions.

/// Cells per side of the square board.
pub const BOARD_SIZE: usize = 9;

/// A cell on the board. Row 0 is the top edge, column 0 the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// The neighboring cell one step in `dir`, or `None` at the board edge.
    pub fn step(self, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if row < 0 || col < 0 || row >= BOARD_SIZE as isize || col >= BOARD_SIZE as isize {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }
}

/// A cardinal step direction. North is toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

/// Scan order for neighbor expansion. Fixed so move lists and search
/// frontiers come out deterministic.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

impl Direction {
    /// Row/column delta of one step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }

    /// The two directions at right angles, used for side-step jumps.
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::East, Direction::West],
            Direction::West | Direction::East => [Direction::South, Direction::North],
        }
    }

    /// Single-bit mask for per-cell blocked-edge bitmasks.
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }
}
