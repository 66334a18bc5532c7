//! Wire formats for frontends and logs.
//!
//! This module implements the algebraic notation used for compact cell,
//! wall, and move strings, and the versioned JSON snapshot emitted once per
//! turn for rendering frontends.

pub mod notation;
pub mod snapshot;

pub use notation::{
    format_cell, format_move, format_wall, parse_cell, parse_move, parse_wall, NotationError,
};
pub use snapshot::{
    prompt_state, turn_snapshot, BoardEntry, CellEntry, GoalEntry, MoveAction, MoveEntry,
    PlayerEntry, PlayerRef, PromptState, TurnSnapshot, WallEntry, PROMPT_SCHEMA, SNAPSHOT_SCHEMA,
};
