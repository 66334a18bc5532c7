//! LLM-backed agent.
//!
//! Prompts a chat-completion service with the rules, an ASCII board, the
//! reduced state JSON, and the id-tagged legal-move list, then expects a
//! strict JSON reply naming one move id. Unusable replies are retried a
//! bounded number of times; transport failures and exhausted retries fall
//! back to a deterministic local choice so a match never stalls on the
//! model.
//!
//! The crate performs no network I/O of its own. The embedding
//! application supplies a [`CompletionClient`], and a seat configured
//! without one plays every turn through the fallback.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;

use super::{Agent, AgentError, GameView};
use crate::board::{GameState, Move, Orientation, BOARD_SIZE};
use crate::protocol::notation::{format_cell, format_move};
use crate::protocol::snapshot::{prompt_state, CellEntry};

/// Model requested when a seat spec does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Reply attempts before giving up on the model for the turn.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

const SYSTEM_PROMPT: &str = "You are an expert Quoridor player. Review the position and choose the \
     single legal move that best improves your standing. Respond ONLY with a \
     compact JSON object of the form {\"rationale\": \"...\", \"move_id\": \"Mn\"} \
     and no other text.";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion client unavailable: {0}")]
    Unavailable(String),
    #[error("completion request failed: {0}")]
    Request(String),
}

/// Chat-completion capability the agent depends on.
pub trait CompletionClient {
    fn complete(
        &mut self,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<String, CompletionError>;
}

/// A wired-in client, or the reason wiring one up failed.
///
/// Construction never errors; a seat whose client could not be set up
/// keeps playing through the fallback and logs the stored reason.
pub enum ClientState {
    Ready(Box<dyn CompletionClient>),
    Failed(String),
}

impl fmt::Debug for ClientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientState::Ready(_) => f.write_str("ClientState::Ready"),
            ClientState::Failed(reason) => write!(f, "ClientState::Failed({:?})", reason),
        }
    }
}

pub struct LlmAgent {
    model: String,
    max_attempts: u32,
    client: ClientState,
    rng: SmallRng,
    last_raw_response: Option<String>,
}

impl LlmAgent {
    pub fn new(model: &str, max_attempts: u32, client: ClientState) -> LlmAgent {
        LlmAgent {
            model: model.to_string(),
            max_attempts,
            client,
            rng: SmallRng::from_entropy(),
            last_raw_response: None,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// The most recent raw model reply, kept for diagnostics.
    pub fn last_raw_response(&self) -> Option<&str> {
        self.last_raw_response.as_deref()
    }

    /// Runs the prompt-and-retry loop. `None` means the model gave no
    /// usable answer and the caller should fall back.
    fn query(&mut self, moves: &[Move], user_prompt: &str) -> Option<Move> {
        let client = match &mut self.client {
            ClientState::Ready(client) => client,
            ClientState::Failed(reason) => {
                eprintln!("llm: completion client unavailable: {}", reason);
                return None;
            }
        };

        for attempt in 1..=self.max_attempts {
            let raw = match client.complete(&self.model, SYSTEM_PROMPT, user_prompt) {
                Ok(raw) => raw,
                Err(err) => {
                    eprintln!("llm: request failed on attempt {}: {}", attempt, err);
                    return None;
                }
            };
            let (move_id, rationale) = parse_response(&raw);
            self.last_raw_response = Some(raw);

            let id = match move_id {
                Some(id) => id,
                None => {
                    eprintln!("llm: unparsable reply on attempt {}", attempt);
                    continue;
                }
            };
            match move_index(&id, moves.len()) {
                Some(index) => {
                    match rationale {
                        Some(text) => eprintln!("llm: picked {}: {}", id, text),
                        None => eprintln!("llm: picked {}", id),
                    }
                    return Some(moves[index]);
                }
                None => {
                    eprintln!("llm: unknown move id '{}' on attempt {}", id, attempt);
                }
            }
        }
        None
    }

    /// Deterministic stand-in when the model is unusable: the first pawn
    /// move keeps the game progressing, a random wall placement otherwise.
    fn fallback(&mut self, moves: &[Move]) -> Move {
        match moves.iter().find(|mv| mv.is_pawn()) {
            Some(mv) => {
                eprintln!("llm: falling back to the first pawn move");
                *mv
            }
            None => {
                eprintln!("llm: no pawn moves, falling back to a random choice");
                moves[self.rng.gen_range(0..moves.len())]
            }
        }
    }
}

impl Agent for LlmAgent {
    fn name(&self) -> &str {
        "LLM Bot"
    }

    fn choose_move(&mut self, view: &GameView<'_>) -> Result<Move, AgentError> {
        let moves = view.legal_moves();
        if moves.is_empty() {
            return Err(AgentError::NoLegalMoves);
        }

        let user_prompt = build_user_prompt(view);
        if let Some(mv) = self.query(moves, &user_prompt) {
            return Ok(mv);
        }
        Ok(self.fallback(moves))
    }
}

/// Extracts `(move_id, rationale)` from a raw model reply, tolerating a
/// markdown code fence around the JSON object. Replies that are not a
/// JSON object yield `(None, None)`.
fn parse_response(raw: &str) -> (Option<String>, Option<String>) {
    let body = strip_code_fence(raw);
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return (None, None),
    };
    let move_id = value
        .get("move_id")
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string());
    let rationale = value
        .get("rationale")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());
    (move_id, rationale)
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let rest = match trimmed.strip_prefix("```") {
        Some(rest) => rest,
        None => return trimmed,
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Resolves an `Mn` id against the legal-move list.
fn move_index(move_id: &str, count: usize) -> Option<usize> {
    let index: usize = move_id.strip_prefix('M')?.parse().ok()?;
    if index < count {
        Some(index)
    } else {
        None
    }
}

fn build_user_prompt(view: &GameView<'_>) -> String {
    let state = view.state();
    let seat = view.current_player();
    let payload = serde_json::to_string(&prompt_state(state)).unwrap_or_default();
    let catalog = serde_json::to_string(&prompt_moves(view.legal_moves())).unwrap_or_default();
    format!(
        "You are player {} on {}.\n\nRules:\n{}\n\nGoals:\n{}\n\nBoard:\n{}\n\n\
         State:\n{}\n\nLegal moves:\n{}\n\nReply with the id of exactly one legal move.",
        seat + 1,
        format_cell(state.pawns[seat]),
        rules_summary(state.num_players),
        goals_description(state.num_players),
        ascii_board(state),
        payload,
        catalog,
    )
}

fn rules_summary(num_players: usize) -> String {
    let mut text = String::from(
        "Be the FIRST to reach your goal line. On your turn either step your pawn \
         one square or place a wall from the shared pool. Walls block movement and \
         may never seal off any player's last route to their goal. An adjacent pawn \
         may be jumped straight over; when that jump is blocked or off the board, \
         the two diagonal side-steps around it are allowed instead.",
    );
    if num_players == 4 {
        text.push_str(" No double jumps: a jump clears exactly one adjacent pawn.");
    }
    text
}

fn goals_description(num_players: usize) -> String {
    if num_players == 2 {
        "P1: Reach Row 1. P2: Reach Row 9.".to_string()
    } else {
        "P1: Reach Row 1. P2: Reach Col a. P3: Reach Row 9. P4: Reach Col i.".to_string()
    }
}

/// Renders the board as a dense character grid: cells on even rows and
/// columns, wall marks in the gaps, files and ranks on the margins.
fn ascii_board(state: &GameState) -> String {
    const GRID: usize = BOARD_SIZE * 2 - 1;
    let mut grid = [[' '; GRID]; GRID];
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            grid[2 * row][2 * col] = '.';
        }
    }
    for (index, pawn) in state.pawns.iter().enumerate() {
        grid[2 * pawn.row][2 * pawn.col] =
            char::from_digit(index as u32 + 1, 10).unwrap_or('?');
    }
    for wall in &state.walls {
        match wall.orientation {
            Orientation::Horizontal => {
                for offset in 0..3 {
                    grid[2 * wall.row + 1][2 * wall.col + offset] = '-';
                }
            }
            Orientation::Vertical => {
                for offset in 0..3 {
                    grid[2 * wall.row + offset][2 * wall.col + 1] = '|';
                }
            }
        }
    }

    let mut files = String::new();
    for col in 0..BOARD_SIZE {
        if col > 0 {
            files.push(' ');
        }
        files.push((b'a' + col as u8) as char);
    }

    let mut lines = vec![format!("   {}", files)];
    for (grid_row, row) in grid.iter().enumerate() {
        let body: String = row.iter().collect();
        let line = if grid_row % 2 == 0 {
            let rank = BOARD_SIZE - grid_row / 2;
            format!("{}  {}  {}", rank, body, rank)
        } else {
            format!("   {}", body)
        };
        lines.push(line.trim_end().to_string());
    }
    lines.push(format!("   {}", files));
    lines.join("\n")
}

#[derive(Debug, Serialize)]
struct PromptMove {
    id: String,
    #[serde(flatten)]
    action: PromptAction,
}

#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum PromptAction {
    MovePawn { to: CellEntry, notation: String },
    PlaceWall { anchor: CellEntry, orientation: char, notation: String },
}

fn prompt_moves(moves: &[Move]) -> Vec<PromptMove> {
    moves
        .iter()
        .enumerate()
        .map(|(index, mv)| PromptMove {
            id: format!("M{}", index),
            action: match mv {
                Move::Pawn(dest) => PromptAction::MovePawn {
                    to: (*dest).into(),
                    notation: format_move(mv),
                },
                Move::Wall(wall) => PromptAction::PlaceWall {
                    anchor: CellEntry { row: wall.row, col: wall.col },
                    orientation: wall.orientation.letter(),
                    notation: format_move(mv),
                },
            },
        })
        .collect()
}
