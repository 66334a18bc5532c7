//! Rules compliance tests.
//!
//! Exercises the engine's public API end to end: setup, pawn movement,
//! jumps, wall placement with its path-preservation veto, move
//! application, turn order, and win detection.
//!
//! Sections: setup, pawn steps, jumps, wall filters, path preservation,
//! application and turn order, win detection, lifecycle.

use palisade::board::{
    new_game, GameState, Move, Orientation, Position, SetupError, Wall, SHARED_WALL_POOL,
};
use palisade::movegen::{all_players_have_path, legal_moves, BlockedEdges};
use palisade::resolve::apply_move;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn two_players() -> GameState {
    new_game(2).expect("2-player setup")
}

fn four_players() -> GameState {
    new_game(4).expect("4-player setup")
}

fn pawn_destinations(state: &GameState) -> Vec<Position> {
    legal_moves(state)
        .into_iter()
        .filter_map(|mv| match mv {
            Move::Pawn(dest) => Some(dest),
            Move::Wall(_) => None,
        })
        .collect()
}

fn wall_placements(state: &GameState) -> Vec<Wall> {
    legal_moves(state)
        .into_iter()
        .filter_map(|mv| match mv {
            Move::Wall(wall) => Some(wall),
            Move::Pawn(_) => None,
        })
        .collect()
}

fn has_pawn_to(moves: &[Position], row: usize, col: usize) -> bool {
    moves.contains(&Position::new(row, col))
}

fn place_walls(state: &mut GameState, walls: &[(usize, usize, Orientation)]) {
    for &(row, col, orientation) in walls {
        state.walls.insert(Wall::new(row, col, orientation));
        state.shared_walls_remaining -= 1;
    }
}

/// Plays one scripted pawn move and asserts it was legal to begin with.
fn play_pawn(state: &GameState, row: usize, col: usize) -> GameState {
    let mv = Move::Pawn(Position::new(row, col));
    assert!(
        legal_moves(state).contains(&mv),
        "scripted move to ({}, {}) is not legal here",
        row,
        col
    );
    apply_move(state, &mv)
}

// ===========================================================================
// SETUP
// ===========================================================================

/// Two players face each other across the board with an empty wall set
/// and the full shared pool.
#[test]
fn initial_two_player_position() {
    let state = two_players();
    assert_eq!(state.pawns, vec![Position::new(0, 4), Position::new(8, 4)]);
    assert!(state.walls.is_empty());
    assert_eq!(state.shared_walls_remaining, SHARED_WALL_POOL);
    assert_eq!(state.current_player, 0);
    assert_eq!(state.winner, None);
}

/// Four players start on all four edge midpoints and share the same
/// 20-wall pool that two players get.
#[test]
fn initial_four_player_position() {
    let state = four_players();
    assert_eq!(state.pawns.len(), 4);
    assert_eq!(state.pawns[1], Position::new(4, 8));
    assert_eq!(state.pawns[3], Position::new(4, 0));
    assert_eq!(state.shared_walls_remaining, SHARED_WALL_POOL);
}

/// Any count other than 2 or 4 is refused at setup.
#[test]
fn unsupported_player_counts_are_refused() {
    assert_eq!(new_game(3), Err(SetupError::UnsupportedPlayerCount(3)));
    assert_eq!(new_game(0), Err(SetupError::UnsupportedPlayerCount(0)));
}

// ===========================================================================
// PAWN STEPS
// ===========================================================================

/// From the opening the top player has exactly three destinations: the
/// two lateral cells and the cell straight ahead.
#[test]
fn opening_offers_three_pawn_moves() {
    let moves = pawn_destinations(&two_players());
    assert_eq!(moves.len(), 3);
    assert!(has_pawn_to(&moves, 0, 3));
    assert!(has_pawn_to(&moves, 0, 5));
    assert!(has_pawn_to(&moves, 1, 4));
}

/// A wall in front of the pawn removes exactly the blocked step.
#[test]
fn wall_blocks_the_step_across_it() {
    let mut state = two_players();
    place_walls(&mut state, &[(0, 4, Orientation::Horizontal)]);
    let moves = pawn_destinations(&state);
    assert_eq!(moves.len(), 2);
    assert!(!has_pawn_to(&moves, 1, 4));
}

/// Steps never leave the board.
#[test]
fn steps_stay_in_bounds_in_the_corner() {
    let mut state = two_players();
    state.pawns[0] = Position::new(0, 0);
    let moves = pawn_destinations(&state);
    assert_eq!(moves.len(), 2);
    assert!(has_pawn_to(&moves, 0, 1));
    assert!(has_pawn_to(&moves, 1, 0));
}

// ===========================================================================
// JUMPS
// ===========================================================================

/// Facing pawns allow the straight jump and suppress the landing on the
/// occupied cell itself.
#[test]
fn straight_jump_over_a_facing_pawn() {
    let mut state = two_players();
    state.pawns[0] = Position::new(4, 4);
    state.pawns[1] = Position::new(5, 4);
    let moves = pawn_destinations(&state);
    assert!(has_pawn_to(&moves, 6, 4));
    assert!(!has_pawn_to(&moves, 5, 4));
    assert!(!has_pawn_to(&moves, 5, 3));
    assert!(!has_pawn_to(&moves, 5, 5));
}

/// A wall behind the jumped pawn converts the straight jump into the two
/// diagonal side-steps around it.
#[test]
fn blocked_jump_opens_the_diagonals() {
    let mut state = two_players();
    state.pawns[0] = Position::new(4, 4);
    state.pawns[1] = Position::new(5, 4);
    place_walls(&mut state, &[(5, 4, Orientation::Horizontal)]);
    let moves = pawn_destinations(&state);
    assert!(!has_pawn_to(&moves, 6, 4));
    assert!(has_pawn_to(&moves, 5, 3));
    assert!(has_pawn_to(&moves, 5, 5));
}

/// The board edge behind the jumped pawn works like a wall.
#[test]
fn edge_of_board_jump_opens_the_diagonals() {
    let mut state = two_players();
    state.pawns[0] = Position::new(7, 4);
    state.pawns[1] = Position::new(8, 4);
    let moves = pawn_destinations(&state);
    assert!(has_pawn_to(&moves, 8, 3));
    assert!(has_pawn_to(&moves, 8, 5));
    assert_eq!(moves.len(), 5);
}

/// With four players a pawn directly behind the jumped pawn blocks the
/// straight jump; there are no double jumps.
#[test]
fn no_double_jump_over_two_pawns() {
    let mut state = four_players();
    state.pawns[0] = Position::new(4, 4);
    state.pawns[1] = Position::new(5, 4);
    state.pawns[2] = Position::new(6, 4);
    state.pawns[3] = Position::new(0, 0);
    let moves = pawn_destinations(&state);
    assert!(!has_pawn_to(&moves, 6, 4));
    assert!(!has_pawn_to(&moves, 7, 4));
    assert!(has_pawn_to(&moves, 5, 3));
    assert!(has_pawn_to(&moves, 5, 5));
}

/// An occupied diagonal is not offered.
#[test]
fn occupied_diagonal_is_suppressed() {
    let mut state = four_players();
    state.pawns[0] = Position::new(4, 4);
    state.pawns[1] = Position::new(5, 4);
    state.pawns[2] = Position::new(6, 4);
    state.pawns[3] = Position::new(5, 5);
    let moves = pawn_destinations(&state);
    assert!(has_pawn_to(&moves, 5, 3));
    assert!(!has_pawn_to(&moves, 5, 5));
}

// ===========================================================================
// WALL FILTERS
// ===========================================================================

/// An open board offers both orientations on all 64 anchors.
#[test]
fn open_board_offers_128_wall_moves() {
    assert_eq!(wall_placements(&two_players()).len(), 128);
}

/// A placed anchor disappears from the offer in both orientations: the
/// same wall again, and the crossing wall through it.
#[test]
fn placed_and_crossing_anchors_are_withdrawn() {
    let mut state = two_players();
    place_walls(&mut state, &[(4, 4, Orientation::Horizontal)]);
    let walls = wall_placements(&state);
    assert!(!walls.contains(&Wall::new(4, 4, Orientation::Horizontal)));
    assert!(!walls.contains(&Wall::new(4, 4, Orientation::Vertical)));
}

/// Parallel neighbors that would overlap one of the covered edges are
/// withdrawn; the next anchor over is not.
#[test]
fn overlapping_parallel_walls_are_withdrawn() {
    let mut state = two_players();
    place_walls(&mut state, &[(4, 4, Orientation::Horizontal)]);
    let walls = wall_placements(&state);
    assert!(!walls.contains(&Wall::new(4, 3, Orientation::Horizontal)));
    assert!(!walls.contains(&Wall::new(4, 5, Orientation::Horizontal)));
    assert!(walls.contains(&Wall::new(4, 6, Orientation::Horizontal)));

    let mut state = two_players();
    place_walls(&mut state, &[(3, 3, Orientation::Vertical)]);
    let walls = wall_placements(&state);
    assert!(!walls.contains(&Wall::new(2, 3, Orientation::Vertical)));
    assert!(!walls.contains(&Wall::new(4, 3, Orientation::Vertical)));
    assert!(walls.contains(&Wall::new(5, 3, Orientation::Vertical)));
}

/// An empty pool offers no wall moves at all.
#[test]
fn exhausted_pool_withdraws_every_wall() {
    let mut state = two_players();
    state.shared_walls_remaining = 0;
    assert!(wall_placements(&state).is_empty());
    assert_eq!(legal_moves(&state).len(), 3);
}

// ===========================================================================
// PATH PRESERVATION
// ===========================================================================

/// A wall that would seal the last route to a goal is never offered,
/// even though it passes every geometric filter.
#[test]
fn sealing_wall_is_never_offered() {
    let mut state = two_players();
    place_walls(
        &mut state,
        &[
            (0, 0, Orientation::Horizontal),
            (0, 2, Orientation::Horizontal),
            (0, 4, Orientation::Horizontal),
            (0, 6, Orientation::Horizontal),
        ],
    );
    let walls = wall_placements(&state);
    assert!(!walls.contains(&Wall::new(0, 7, Orientation::Vertical)));
    // The same anchor is fine one row further south, where a gap remains.
    assert!(walls.contains(&Wall::new(1, 7, Orientation::Vertical)));
}

/// Cutting off any single player vetoes the wall for everyone.
#[test]
fn wall_is_vetoed_if_any_player_is_cut_off() {
    let mut state = four_players();
    place_walls(
        &mut state,
        &[
            (0, 0, Orientation::Horizontal),
            (0, 2, Orientation::Horizontal),
            (0, 4, Orientation::Horizontal),
            (0, 6, Orientation::Horizontal),
        ],
    );
    // Every other player keeps an easy route; the top player alone decides.
    let walls = wall_placements(&state);
    assert!(!walls.contains(&Wall::new(0, 7, Orientation::Vertical)));
}

/// Every wall in the offer, once applied, leaves all players a path.
#[test]
fn offered_walls_always_preserve_paths() {
    let mut state = two_players();
    place_walls(
        &mut state,
        &[
            (0, 2, Orientation::Horizontal),
            (1, 4, Orientation::Vertical),
            (2, 6, Orientation::Horizontal),
        ],
    );
    for wall in wall_placements(&state) {
        let next = apply_move(&state, &Move::Wall(wall));
        let blocked = BlockedEdges::from_walls(&next.walls);
        assert!(
            all_players_have_path(&next, &blocked),
            "offered wall {:?} seals a player in",
            wall
        );
    }
}

// ===========================================================================
// APPLICATION AND TURN ORDER
// ===========================================================================

/// Applying a move never mutates the input state.
#[test]
fn apply_move_leaves_the_input_alone() {
    let state = two_players();
    let copy = state.clone();
    let _ = apply_move(&state, &Move::Pawn(Position::new(1, 4)));
    let _ = apply_move(&state, &Move::Wall(Wall::new(3, 3, Orientation::Vertical)));
    assert_eq!(state, copy);
}

/// A wall move spends exactly one pool wall and records the placement.
#[test]
fn wall_moves_spend_the_shared_pool() {
    let mut state = two_players();
    for (i, wall) in [
        Wall::new(0, 0, Orientation::Horizontal),
        Wall::new(2, 2, Orientation::Vertical),
        Wall::new(4, 4, Orientation::Horizontal),
    ]
    .into_iter()
    .enumerate()
    {
        state = apply_move(&state, &Move::Wall(wall));
        assert_eq!(state.walls.len(), i + 1);
        assert_eq!(state.shared_walls_remaining, SHARED_WALL_POOL - (i as u32 + 1));
    }
}

/// Turns cycle through all seats in index order.
#[test]
fn four_player_turns_cycle_in_order() {
    let mut state = four_players();
    assert_eq!(state.current_player, 0);
    state = play_pawn(&state, 1, 4);
    assert_eq!(state.current_player, 1);
    state = play_pawn(&state, 4, 7);
    assert_eq!(state.current_player, 2);
    state = play_pawn(&state, 7, 4);
    assert_eq!(state.current_player, 3);
    state = play_pawn(&state, 4, 1);
    assert_eq!(state.current_player, 0);
}

// ===========================================================================
// WIN DETECTION
// ===========================================================================

/// The top player wins on reaching the bottom row, and the turn stops
/// advancing.
#[test]
fn first_player_wins_on_the_far_row() {
    let mut state = two_players();
    state.pawns[0] = Position::new(7, 0);
    state.pawns[1] = Position::new(4, 4);
    state = play_pawn(&state, 8, 0);
    assert_eq!(state.winner, Some(0));
    assert_eq!(state.current_player, 0);
    assert!(state.is_terminal());
}

/// In a four-player game the side players win on columns, not rows.
#[test]
fn side_players_win_on_their_columns() {
    let mut state = four_players();
    state.current_player = 1;
    state.pawns[1] = Position::new(4, 1);
    state.pawns[3] = Position::new(5, 2);
    state = play_pawn(&state, 4, 0);
    assert_eq!(state.winner, Some(1));

    let mut state = four_players();
    state.current_player = 3;
    state.pawns[3] = Position::new(4, 7);
    state.pawns[1] = Position::new(3, 6);
    state = play_pawn(&state, 4, 8);
    assert_eq!(state.winner, Some(3));
}

/// Standing on a row that is only a goal in the other layout does not
/// win: a four-player side player gains nothing from the bottom row.
#[test]
fn goals_are_per_seat_not_per_edge() {
    let mut state = four_players();
    state.pawns[1] = Position::new(8, 6);
    state.check_winner();
    assert_eq!(state.winner, None);
}

/// A finished game offers no moves at all.
#[test]
fn finished_games_offer_no_moves() {
    let mut state = two_players();
    state.pawns[0] = Position::new(7, 4);
    state.pawns[1] = Position::new(8, 0);
    state = play_pawn(&state, 8, 4);
    assert!(state.is_terminal());
    assert!(legal_moves(&state).is_empty());
}

// ===========================================================================
// LIFECYCLE
// ===========================================================================

/// Successor states share nothing with their parents: mutating the child
/// leaves the parent's wall set and pawns alone.
#[test]
fn successors_are_fully_independent() {
    let parent = two_players();
    let mut child = apply_move(&parent, &Move::Wall(Wall::new(4, 4, Orientation::Horizontal)));
    child.walls.insert(Wall::new(6, 6, Orientation::Vertical));
    child.pawns[0] = Position::new(3, 3);

    assert!(parent.walls.is_empty());
    assert_eq!(parent.pawns[0], Position::new(0, 4));
    assert_eq!(parent.shared_walls_remaining, SHARED_WALL_POOL);
}

/// Move generation is deterministic: the same position always yields the
/// same list in the same order.
#[test]
fn move_generation_is_deterministic() {
    let mut state = two_players();
    place_walls(
        &mut state,
        &[
            (0, 2, Orientation::Horizontal),
            (3, 3, Orientation::Vertical),
            (5, 1, Orientation::Horizontal),
        ],
    );
    let first = legal_moves(&state);
    let second = legal_moves(&state);
    assert_eq!(first, second);
}

/// A seeded random playout maintains the structural invariants on every
/// ply: the pool and the wall set stay in lockstep, pawns stay on the
/// board, and the game stops once somebody wins.
#[test]
fn random_playout_maintains_invariants() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut state = two_players();

    for _ in 0..200 {
        if state.is_terminal() {
            break;
        }
        let moves = legal_moves(&state);
        assert!(!moves.is_empty(), "running game with no moves");
        let mv = moves[rng.gen_range(0..moves.len())];
        let prev_walls = state.walls.len();
        state = apply_move(&state, &mv);

        assert!(state.walls.len() >= prev_walls);
        assert_eq!(
            state.walls.len() as u32 + state.shared_walls_remaining,
            SHARED_WALL_POOL
        );
        for pawn in &state.pawns {
            assert!(pawn.row < 9 && pawn.col < 9);
        }
        assert!(state.current_player < state.num_players);
    }

    if state.is_terminal() {
        assert!(legal_moves(&state).is_empty());
    }
}
