//! Pawn step and jump generation for the player to move.

use crate::board::{GameState, Move, Position, ALL_DIRECTIONS};

use super::blocked::BlockedEdges;

/// Generates every legal pawn move for the current player.
///
/// Directions are scanned in a fixed order. An open, unoccupied neighbor is
/// a plain step. An occupied neighbor offers the straight jump over it when
/// the far edge is open, the landing is on the board, and the landing cell
/// is empty; when the straight jump is unavailable for any of those
/// reasons, the two side-step cells perpendicular from the occupied cell
/// are offered instead, each subject to the same edge, bounds, and
/// occupancy checks. Duplicate destinations keep their first discovery.
pub fn pawn_moves(state: &GameState, blocked: &BlockedEdges) -> Vec<Move> {
    let from = state.pawns[state.current_player];
    let mut destinations: Vec<Position> = Vec::new();

    for dir in ALL_DIRECTIONS {
        let next = match blocked.open_neighbor(from, dir) {
            Some(next) => next,
            None => continue,
        };
        if !state.is_occupied(next) {
            push_unique(&mut destinations, next);
            continue;
        }
        match blocked.open_neighbor(next, dir) {
            Some(landing) if !state.is_occupied(landing) => {
                push_unique(&mut destinations, landing);
            }
            _ => {
                for side in dir.perpendicular() {
                    if let Some(target) = blocked.open_neighbor(next, side) {
                        if !state.is_occupied(target) {
                            push_unique(&mut destinations, target);
                        }
                    }
                }
            }
        }
    }

    destinations.into_iter().map(Move::Pawn).collect()
}

fn push_unique(destinations: &mut Vec<Position>, pos: Position) {
    if !destinations.contains(&pos) {
        destinations.push(pos);
    }
}
