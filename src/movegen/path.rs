//! Goal reachability via breadth-first search.

use std::collections::VecDeque;

use crate::board::{GameState, ALL_DIRECTIONS, BOARD_SIZE};

use super::blocked::BlockedEdges;

/// True when `player` can still reach their goal line.
///
/// Searches the cell graph with walls removed from the edge set. Other
/// pawns never block the search; pawns move and jump, so only walls can
/// permanently cut a player off.
pub fn has_path(state: &GameState, blocked: &BlockedEdges, player: usize) -> bool {
    let start = state.pawns[player];
    let goal = state.goal(player);
    if goal.satisfied_by(start) {
        return true;
    }

    let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut frontier = VecDeque::new();
    visited[start.row][start.col] = true;
    frontier.push_back(start);

    while let Some(cell) = frontier.pop_front() {
        if goal.satisfied_by(cell) {
            return true;
        }
        for dir in ALL_DIRECTIONS {
            if let Some(next) = blocked.open_neighbor(cell, dir) {
                if !visited[next.row][next.col] {
                    visited[next.row][next.col] = true;
                    frontier.push_back(next);
                }
            }
        }
    }

    false
}

/// True when every player can still reach their goal line.
pub fn all_players_have_path(state: &GameState, blocked: &BlockedEdges) -> bool {
    (0..state.num_players).all(|player| has_path(state, blocked, player))
}
