//! The two kinds of action a player may take on their turn.

use super::position::Position;
use super::wall::Wall;

/// One turn's action for the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Step or jump the pawn to the given cell. Notation: `e4`.
    Pawn(Position),
    /// Spend one shared wall and place it at the given anchor.
    /// Notation: `e4h`, `c7v`.
    Wall(Wall),
}

impl Move {
    pub const fn is_pawn(self) -> bool {
        matches!(self, Move::Pawn(_))
    }

    pub const fn is_wall(self) -> bool {
        matches!(self, Move::Wall(_))
    }
}
