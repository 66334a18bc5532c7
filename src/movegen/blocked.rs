//! Blocked-edge lookup derived from the placed walls.

use std::collections::BTreeSet;

use crate::board::{Direction, Orientation, Position, Wall, BOARD_SIZE};

/// Per-cell bitmask of directions whose outgoing edge a wall severs.
///
/// Rebuilt from the wall set whenever moves are generated; lookups during
/// neighbor expansion and path search are then a single mask test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedEdges {
    masks: [[u8; BOARD_SIZE]; BOARD_SIZE],
}

impl BlockedEdges {
    pub fn from_walls(walls: &BTreeSet<Wall>) -> BlockedEdges {
        let mut masks = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for wall in walls {
            match wall.orientation {
                Orientation::Horizontal => {
                    // Severs the two vertical edges between rows r and r+1.
                    for col in [wall.col, wall.col + 1] {
                        masks[wall.row][col] |= Direction::South.bit();
                        masks[wall.row + 1][col] |= Direction::North.bit();
                    }
                }
                Orientation::Vertical => {
                    // Severs the two horizontal edges between cols c and c+1.
                    for row in [wall.row, wall.row + 1] {
                        masks[row][wall.col] |= Direction::East.bit();
                        masks[row][wall.col + 1] |= Direction::West.bit();
                    }
                }
            }
        }
        BlockedEdges { masks }
    }

    /// True when a wall severs the edge leaving `from` toward `dir`.
    pub fn is_blocked(&self, from: Position, dir: Direction) -> bool {
        self.masks[from.row][from.col] & dir.bit() != 0
    }

    /// The neighbor one step away, or `None` at the board edge or when a
    /// wall severs the connecting edge.
    pub fn open_neighbor(&self, from: Position, dir: Direction) -> Option<Position> {
        if self.is_blocked(from, dir) {
            return None;
        }
        from.step(dir)
    }
}
