//! Pluggable move-choosing agents.
//!
//! Every seat at the table is driven by an [`Agent`]: a random bot, an
//! LLM-backed bot, or a human relaying moves through a frontend. Agents
//! see one read-only [`GameView`] per decision and answer with a move
//! drawn from its legal-move list.

pub mod factory;
pub mod human;
pub mod llm;
pub mod random;

pub use factory::{AgentSpec, AgentSpecError};
pub use human::HumanAgent;
pub use llm::{ClientState, CompletionClient, CompletionError, LlmAgent};
pub use random::RandomAgent;

use thiserror::Error;

use crate::board::{GameState, Move};

/// Read-only view of the position handed to an agent for one decision.
pub struct GameView<'a> {
    state: &'a GameState,
    legal: &'a [Move],
}

impl<'a> GameView<'a> {
    pub fn new(state: &'a GameState, legal: &'a [Move]) -> GameView<'a> {
        GameView { state, legal }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn current_player(&self) -> usize {
        self.state.current_player
    }

    pub fn legal_moves(&self) -> &[Move] {
        self.legal
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("no legal moves available")]
    NoLegalMoves,
    #[error("human move requested but none is pending")]
    NoPendingMove,
    #[error("agent chose a move outside the legal list")]
    IllegalMove,
}

/// A move-choosing strategy occupying one seat.
pub trait Agent {
    /// Display name for rosters and logs.
    fn name(&self) -> &str;

    /// True for agents that wait on a frontend-relayed move.
    fn is_human(&self) -> bool {
        false
    }

    /// Picks one move from the view's legal-move list.
    fn choose_move(&mut self, view: &GameView<'_>) -> Result<Move, AgentError>;
}
