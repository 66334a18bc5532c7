//! Board representation and game-state types.
//!
//! Contains the core data structures for cells, directions, walls, moves,
//! and the overall game state.

pub mod moves;
pub mod position;
pub mod state;
pub mod wall;

pub use moves::Move;
pub use position::{Direction, Position, ALL_DIRECTIONS, BOARD_SIZE};
pub use state::{
    new_game, GameState, Goal, SetupError, SHARED_WALL_POOL, SUPPORTED_PLAYER_COUNTS,
};
pub use wall::{Orientation, Wall, WALL_ANCHOR_MAX};
