//! Single-device match controller.
//!
//! Owns the authoritative game state for one match, keeps the legal-move
//! list cached between moves, counts turns, and carries the player roster
//! used for display. All seats funnel their moves through here, whether a
//! frontend relays them or an agent picks them directly.

use crate::agents::{Agent, AgentError, GameView};
use crate::board::{GameState, Move};
use crate::movegen::legal_moves;
use crate::protocol::snapshot::{turn_snapshot, TurnSnapshot};
use crate::resolve::apply_move;

/// Display metadata for one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerMeta {
    pub id: usize,
    pub name: String,
    pub role: String,
}

pub struct HotseatController {
    state: GameState,
    cached_moves: Vec<Move>,
    turn: u32,
    last_player: usize,
    roster: Vec<PlayerMeta>,
}

impl HotseatController {
    pub fn new(state: GameState) -> HotseatController {
        let roster = (0..state.num_players)
            .map(|id| PlayerMeta {
                id,
                name: format!("Player {}", id + 1),
                role: "unknown".to_string(),
            })
            .collect();
        let last_player = state.current_player;
        let mut controller = HotseatController {
            state,
            cached_moves: Vec::new(),
            turn: 0,
            last_player,
            roster,
        };
        controller.refresh_moves();
        controller
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The legal moves for the player to move, cached since the last
    /// state change.
    pub fn legal_moves(&self) -> &[Move] {
        &self.cached_moves
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn roster(&self) -> &[PlayerMeta] {
        &self.roster
    }

    /// Replaces the default roster, e.g. with names from the agent
    /// factory. Entries beyond the player count are ignored.
    pub fn set_roster(&mut self, roster: Vec<PlayerMeta>) {
        self.roster = roster;
        self.roster.truncate(self.state.num_players);
    }

    /// Recomputes the cached legal moves, advancing the turn counter when
    /// the seat to move has changed in a still-running game.
    pub fn refresh_moves(&mut self) {
        self.cached_moves = legal_moves(&self.state);
        if self.state.winner.is_none() && self.state.current_player != self.last_player {
            self.turn += 1;
            self.last_player = self.state.current_player;
        }
    }

    /// Applies an externally constructed move, matching it by value
    /// against the cached legal-move list. Returns false and leaves the
    /// state untouched when the move is not in the list.
    pub fn attempt_move(&mut self, mv: &Move) -> bool {
        if !self.cached_moves.contains(mv) {
            return false;
        }
        self.state = apply_move(&self.state, mv);
        self.refresh_moves();
        true
    }

    /// Asks `agent` for a move and applies it. The agent's answer is held
    /// to the same by-value legality check as any frontend move.
    pub fn play_turn(&mut self, agent: &mut dyn Agent) -> Result<Move, AgentError> {
        let mv = {
            let view = GameView::new(&self.state, &self.cached_moves);
            agent.choose_move(&view)?
        };
        if !self.attempt_move(&mv) {
            return Err(AgentError::IllegalMove);
        }
        Ok(mv)
    }

    /// The full JSON snapshot for the current turn.
    pub fn snapshot(&self) -> TurnSnapshot {
        let names: Vec<String> = self.roster.iter().map(|meta| meta.name.clone()).collect();
        turn_snapshot(&self.state, &self.cached_moves, self.turn, &names)
    }
}
