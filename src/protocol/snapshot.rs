//! Versioned JSON snapshots for rendering frontends.
//!
//! A `TurnSnapshot` carries everything a frontend needs to draw the board
//! and offer the legal moves, each tagged with a stable id the frontend
//! hands back to pick one. The schema string changes whenever the layout
//! does, so consumers can refuse payloads they do not understand.

use serde::Serialize;

use crate::board::{GameState, Goal, Move, Position, BOARD_SIZE};

/// Schema tag on full per-turn snapshots.
pub const SNAPSHOT_SCHEMA: &str = "quoridor.v1";

/// Schema tag on the reduced state block embedded in agent prompts.
pub const PROMPT_SCHEMA: &str = "quoridor.v1.partial";

#[derive(Debug, Clone, Serialize)]
pub struct TurnSnapshot {
    pub schema: &'static str,
    pub turn: u32,
    pub current_player: PlayerRef,
    pub board: BoardEntry,
    pub players: Vec<PlayerEntry>,
    pub shared_walls_remaining: u32,
    pub goals: Vec<GoalEntry>,
    pub winner: Option<PlayerRef>,
    pub legal_moves: Vec<MoveEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerRef {
    pub id: usize,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardEntry {
    pub size: usize,
    pub walls: Vec<WallEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WallEntry {
    pub row: usize,
    pub col: usize,
    pub orientation: char,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerEntry {
    pub id: usize,
    pub name: String,
    pub row: usize,
    pub col: usize,
}

/// A goal line: exactly one of `row` and `col` is present.
#[derive(Debug, Clone, Serialize)]
pub struct GoalEntry {
    pub id: usize,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellEntry {
    pub row: usize,
    pub col: usize,
}

impl From<Position> for CellEntry {
    fn from(pos: Position) -> CellEntry {
        CellEntry { row: pos.row, col: pos.col }
    }
}

/// One legal move, tagged with the id a frontend echoes back to play it.
#[derive(Debug, Clone, Serialize)]
pub struct MoveEntry {
    pub id: String,
    #[serde(flatten)]
    pub action: MoveAction,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MoveAction {
    MovePawn {
        piece: String,
        from: CellEntry,
        to: CellEntry,
    },
    PlaceWall {
        anchor: CellEntry,
        orientation: char,
    },
}

/// Builds the full snapshot for the current turn.
///
/// `names` is indexed by player id; missing entries fall back to a
/// numbered default. Move ids index into `legal` in its given order.
pub fn turn_snapshot(
    state: &GameState,
    legal: &[Move],
    turn: u32,
    names: &[String],
) -> TurnSnapshot {
    let mover = state.current_player;
    let mover_name = name_for(names, mover);

    let walls = state
        .walls
        .iter()
        .map(|wall| WallEntry {
            row: wall.row,
            col: wall.col,
            orientation: wall.orientation.letter(),
        })
        .collect();

    let players = state
        .pawns
        .iter()
        .enumerate()
        .map(|(id, pawn)| PlayerEntry {
            id,
            name: name_for(names, id),
            row: pawn.row,
            col: pawn.col,
        })
        .collect();

    let goals = (0..state.num_players)
        .map(|id| {
            let (row, col) = match state.goal(id) {
                Goal::Row(row) => (Some(row), None),
                Goal::Col(col) => (None, Some(col)),
            };
            GoalEntry { id, name: name_for(names, id), row, col }
        })
        .collect();

    let legal_moves = legal
        .iter()
        .enumerate()
        .map(|(index, mv)| MoveEntry {
            id: format!("M{}", index),
            action: match mv {
                Move::Pawn(dest) => MoveAction::MovePawn {
                    piece: mover_name.clone(),
                    from: state.pawns[mover].into(),
                    to: (*dest).into(),
                },
                Move::Wall(wall) => MoveAction::PlaceWall {
                    anchor: CellEntry { row: wall.row, col: wall.col },
                    orientation: wall.orientation.letter(),
                },
            },
        })
        .collect();

    TurnSnapshot {
        schema: SNAPSHOT_SCHEMA,
        turn,
        current_player: PlayerRef { id: mover, name: mover_name },
        board: BoardEntry { size: BOARD_SIZE, walls },
        players,
        shared_walls_remaining: state.shared_walls_remaining,
        goals,
        winner: state.winner.map(|id| PlayerRef { id, name: name_for(names, id) }),
        legal_moves,
    }
}

/// Reduced state block for agent prompts.
#[derive(Debug, Clone, Serialize)]
pub struct PromptState {
    pub schema: &'static str,
    pub current_player: usize,
    pub pawns: Vec<CellEntry>,
    pub walls: Vec<WallEntry>,
    pub shared_walls_remaining: u32,
}

pub fn prompt_state(state: &GameState) -> PromptState {
    PromptState {
        schema: PROMPT_SCHEMA,
        current_player: state.current_player,
        pawns: state.pawns.iter().map(|p| (*p).into()).collect(),
        walls: state
            .walls
            .iter()
            .map(|wall| WallEntry {
                row: wall.row,
                col: wall.col,
                orientation: wall.orientation.letter(),
            })
            .collect(),
        shared_walls_remaining: state.shared_walls_remaining,
    }
}

fn name_for(names: &[String], id: usize) -> String {
    match names.get(id) {
        Some(name) => name.clone(),
        None => format!("Player {}", id + 1),
    }
}
