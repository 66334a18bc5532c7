//! Wall placement generation with path-preservation vetting.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::board::{GameState, Move, Orientation, Position, Wall, BOARD_SIZE};

use super::blocked::BlockedEdges;
use super::path::all_players_have_path;

/// Generates every legal wall placement for the current player.
///
/// Candidates are scanned anchor-major (row, then column, horizontal
/// before vertical at the same anchor) and kept in that order. The cheap
/// filters drop anchors that duplicate a placed wall, cross one at the
/// same anchor, or overlap a severed edge; every survivor is then played
/// out on a scratch copy of the state, and placements that leave any
/// player without a path to their goal are discarded.
pub fn wall_moves(state: &GameState) -> Vec<Move> {
    if state.shared_walls_remaining == 0 {
        return Vec::new();
    }

    let mut horizontal_anchors: HashSet<(usize, usize)> = HashSet::new();
    let mut vertical_anchors: HashSet<(usize, usize)> = HashSet::new();
    let mut severed_edges: HashSet<(Position, Position)> = HashSet::new();
    for wall in &state.walls {
        let anchors = match wall.orientation {
            Orientation::Horizontal => &mut horizontal_anchors,
            Orientation::Vertical => &mut vertical_anchors,
        };
        anchors.insert((wall.row, wall.col));
        for edge in wall.edges() {
            severed_edges.insert(edge);
        }
    }

    let mut candidates = Vec::new();
    for row in 0..BOARD_SIZE - 1 {
        for col in 0..BOARD_SIZE - 1 {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                let wall = Wall::new(row, col, orientation);
                if state.walls.contains(&wall) {
                    continue;
                }
                let crosses = match orientation {
                    Orientation::Horizontal => vertical_anchors.contains(&(row, col)),
                    Orientation::Vertical => horizontal_anchors.contains(&(row, col)),
                };
                if crosses {
                    continue;
                }
                if wall.edges().iter().any(|edge| severed_edges.contains(edge)) {
                    continue;
                }
                candidates.push(wall);
            }
        }
    }

    // The reachability checks dominate wall generation, so the survivors
    // are vetted in parallel. Collecting from the indexed iterator keeps
    // the scan order.
    candidates
        .into_par_iter()
        .filter_map(|wall| {
            let mut trial = state.clone();
            trial.walls.insert(wall);
            let blocked = BlockedEdges::from_walls(&trial.walls);
            if all_players_have_path(&trial, &blocked) {
                Some(Move::Wall(wall))
            } else {
                None
            }
        })
        .collect()
}
