//! Full game state and win detection.

use std::collections::BTreeSet;

use thiserror::Error;

use super::position::{Position, BOARD_SIZE};
use super::wall::Wall;

/// Walls in the shared pool at game start, independent of player count.
pub const SHARED_WALL_POOL: u32 = 20;

/// Player counts the engine accepts.
pub const SUPPORTED_PLAYER_COUNTS: [usize; 2] = [2, 4];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("unsupported player count {0}, expected 2 or 4")]
    UnsupportedPlayerCount(usize),
}

/// The goal line a player must reach to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Row(usize),
    Col(usize),
}

impl Goal {
    pub const fn satisfied_by(self, pos: Position) -> bool {
        match self {
            Goal::Row(row) => pos.row == row,
            Goal::Col(col) => pos.col == col,
        }
    }
}

/// Complete state of one game.
///
/// Pawns are indexed by player id, and player ids double as turn order.
/// All placed walls live in one ordered set and every player draws from
/// the same shared pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub pawns: Vec<Position>,
    pub walls: BTreeSet<Wall>,
    pub shared_walls_remaining: u32,
    pub current_player: usize,
    pub winner: Option<usize>,
    pub num_players: usize,
}

/// Sets up a fresh game for 2 or 4 players.
///
/// Two players start on the midpoints of the top and bottom edges; four
/// players on the midpoints of all four edges.
pub fn new_game(num_players: usize) -> Result<GameState, SetupError> {
    let mid = BOARD_SIZE / 2;
    let last = BOARD_SIZE - 1;
    let pawns = match num_players {
        2 => vec![Position::new(0, mid), Position::new(last, mid)],
        4 => vec![
            Position::new(0, mid),
            Position::new(mid, last),
            Position::new(last, mid),
            Position::new(mid, 0),
        ],
        other => return Err(SetupError::UnsupportedPlayerCount(other)),
    };
    Ok(GameState {
        pawns,
        walls: BTreeSet::new(),
        shared_walls_remaining: SHARED_WALL_POOL,
        current_player: 0,
        winner: None,
        num_players,
    })
}

impl GameState {
    /// The goal line for `player`, opposite that player's starting edge.
    pub fn goal(&self, player: usize) -> Goal {
        match player {
            0 => Goal::Row(BOARD_SIZE - 1),
            1 if self.num_players == 2 => Goal::Row(0),
            1 => Goal::Col(0),
            2 => Goal::Row(0),
            _ => Goal::Col(BOARD_SIZE - 1),
        }
    }

    /// True when any pawn stands on `pos`.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.pawns.iter().any(|p| *p == pos)
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Records the lowest-indexed player standing on their goal line.
    ///
    /// Once a winner is set it is never overwritten, so the first player
    /// to finish keeps the win even if the state is probed again later.
    pub fn check_winner(&mut self) {
        if self.winner.is_some() {
            return;
        }
        for player in 0..self.pawns.len() {
            if self.goal(player).satisfied_by(self.pawns[player]) {
                self.winner = Some(player);
                return;
            }
        }
    }
}
