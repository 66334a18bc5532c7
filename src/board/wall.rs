//! Wall segments and the cell edges they sever.

use super::position::{Position, BOARD_SIZE};

/// Largest legal wall anchor coordinate on either axis.
pub const WALL_ANCHOR_MAX: usize = BOARD_SIZE - 2;

/// Orientation of a two-cell wall segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Uppercase tag used in snapshots and prompts.
    pub const fn letter(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }
}

/// A placed wall, identified by its anchor cell and orientation.
///
/// A horizontal wall at (r, c) lies between rows r and r+1 and spans
/// columns c and c+1. A vertical wall at (r, c) lies between columns c
/// and c+1 and spans rows r and r+1. Anchors run 0..=7 on both axes.
///
/// The derived ordering sorts by (row, col, orientation), which fixes
/// the iteration order of wall sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Wall {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Wall {
    pub const fn new(row: usize, col: usize, orientation: Orientation) -> Wall {
        Wall { row, col, orientation }
    }

    /// True when the anchor lies inside the 8x8 anchor grid.
    pub const fn in_bounds(self) -> bool {
        self.row <= WALL_ANCHOR_MAX && self.col <= WALL_ANCHOR_MAX
    }

    /// The two cell-to-cell edges this wall severs.
    ///
    /// Each edge is reported with its endpoints in ascending order, so the
    /// same physical edge compares equal no matter which wall produced it.
    pub const fn edges(self) -> [(Position, Position); 2] {
        let (r, c) = (self.row, self.col);
        match self.orientation {
            Orientation::Horizontal => [
                (Position::new(r, c), Position::new(r + 1, c)),
                (Position::new(r, c + 1), Position::new(r + 1, c + 1)),
            ],
            Orientation::Vertical => [
                (Position::new(r, c), Position::new(r, c + 1)),
                (Position::new(r + 1, c), Position::new(r + 1, c + 1)),
            ],
        }
    }
}
