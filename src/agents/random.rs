//! Uniform random agent, mostly useful for smoke tests and baselines.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Agent, AgentError, GameView};
use crate::board::Move;

pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    /// Seed 0 draws from entropy; any other seed gives a reproducible
    /// agent.
    pub fn new(seed: u64) -> RandomAgent {
        let rng = if seed != 0 {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_entropy()
        };
        RandomAgent { rng }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "Random Bot"
    }

    fn choose_move(&mut self, view: &GameView<'_>) -> Result<Move, AgentError> {
        let moves = view.legal_moves();
        if moves.is_empty() {
            return Err(AgentError::NoLegalMoves);
        }
        Ok(moves[self.rng.gen_range(0..moves.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::new_game;
    use crate::movegen::legal_moves;

    #[test]
    fn picks_only_legal_moves() {
        let state = new_game(2).unwrap();
        let legal = legal_moves(&state);
        let mut agent = RandomAgent::new(7);
        for _ in 0..50 {
            let view = GameView::new(&state, &legal);
            let mv = agent.choose_move(&view).unwrap();
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let state = new_game(2).unwrap();
        let legal = legal_moves(&state);

        let mut first = RandomAgent::new(42);
        let mut second = RandomAgent::new(42);
        for _ in 0..20 {
            let view = GameView::new(&state, &legal);
            assert_eq!(first.choose_move(&view), second.choose_move(&view));
        }
    }

    #[test]
    fn empty_move_list_is_an_error() {
        let mut state = new_game(2).unwrap();
        state.winner = Some(0);
        let legal = legal_moves(&state);
        let mut agent = RandomAgent::new(1);
        let view = GameView::new(&state, &legal);
        assert_eq!(agent.choose_move(&view), Err(AgentError::NoLegalMoves));
    }
}
