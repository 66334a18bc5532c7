//! Human seat fed by a frontend.
//!
//! The frontend validates input against the published legal-move list,
//! queues the chosen move here, and then asks the controller to play the
//! turn. Asking for a move with nothing queued is an error rather than a
//! blocking wait.

use super::{Agent, AgentError, GameView};
use crate::board::Move;

pub struct HumanAgent {
    name: String,
    pending: Option<Move>,
}

impl HumanAgent {
    pub fn new(name: &str) -> HumanAgent {
        HumanAgent { name: name.to_string(), pending: None }
    }

    /// Queues the move the frontend captured for this player.
    pub fn set_pending(&mut self, mv: Move) {
        self.pending = Some(mv);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Agent for HumanAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    fn choose_move(&mut self, _view: &GameView<'_>) -> Result<Move, AgentError> {
        self.pending.take().ok_or(AgentError::NoPendingMove)
    }
}
