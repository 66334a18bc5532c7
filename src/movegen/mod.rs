//! Legal move generation.
//!
//! Generates the full set of legal moves for the player to move: pawn
//! steps and jumps plus every wall placement that keeps the board fair.

pub mod blocked;
pub mod path;
pub mod pawn;
pub mod wall;

pub use blocked::BlockedEdges;
pub use path::{all_players_have_path, has_path};
pub use pawn::pawn_moves;
pub use wall::wall_moves;

use crate::board::{GameState, Move};

/// Generates every legal move for the current player.
///
/// Pawn moves come first, then wall placements in anchor scan order. A
/// finished game has no legal moves.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    if state.is_terminal() {
        return Vec::new();
    }
    let blocked = BlockedEdges::from_walls(&state.walls);
    let mut moves = pawn_moves(state, &blocked);
    moves.extend(wall_moves(state));
    moves
}
