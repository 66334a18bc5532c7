//! Move application.
//!
//! Applies one already-validated move to a game state, producing the
//! successor state. Validation lives in move generation; callers must only
//! pass moves drawn from the current legal-move list.

use crate::board::{GameState, Move};

/// Applies `mv` to `state` and returns the successor state.
///
/// The input state is never mutated. A pawn move relocates the current
/// player's pawn; a wall move inserts the wall and spends one shared
/// wall. The winner is then recomputed, and the turn passes to the next
/// player only when the game is still running, so a winning state keeps
/// the finisher as its current player.
///
/// `mv` must come from the legal-move list for `state`. Moves outside
/// that list are applied without any rule checks and can corrupt the
/// position.
pub fn apply_move(state: &GameState, mv: &Move) -> GameState {
    let mut next = state.clone();
    match mv {
        Move::Pawn(dest) => {
            next.pawns[next.current_player] = *dest;
        }
        Move::Wall(wall) => {
            next.walls.insert(*wall);
            next.shared_walls_remaining = next.shared_walls_remaining.saturating_sub(1);
        }
    }
    next.check_winner();
    if !next.is_terminal() {
        next.current_player = (next.current_player + 1) % next.num_players;
    }
    next
}
