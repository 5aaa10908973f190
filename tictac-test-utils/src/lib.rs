//! TICTAC Test Utilities
//!
//! Shared test infrastructure for the TICTAC workspace:
//! - Proptest generators for boards, players and response bodies
//! - Fixtures for common game scenarios

pub use tictac_core::{
    occupy_field, Board, BoardId, BoardRecord, BoardStore, FieldState, GameError, Outcome, Player,
    CELL_COUNT,
};

use proptest::prelude::*;

// ============================================================================
// GENERATORS
// ============================================================================

pub fn arb_field_state() -> impl Strategy<Value = FieldState> {
    prop_oneof![Just(FieldState::Empty), Just(FieldState::X), Just(FieldState::O)]
}

/// Any 3x3 grid, including ones unreachable by legal play.
pub fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(arb_field_state(), CELL_COUNT).prop_map(|cells| {
        let state: String = cells.iter().map(FieldState::as_char).collect();
        Board::from_state(&state).unwrap_or_default()
    })
}

/// Boards reached by playing legal moves from an empty grid.
pub fn arb_reachable_board() -> impl Strategy<Value = Board> {
    prop::collection::vec((0usize..3, 0usize..3), 0..12).prop_map(|moves| board_after_moves(&moves))
}

pub fn arb_player() -> impl Strategy<Value = Player> {
    "[a-z][a-z0-9_]{0,15}".prop_filter_map("valid handle", |handle| Player::new(handle).ok())
}

/// Response bodies as a server might send them: plain text, markup or JSON,
/// sometimes empty.
pub fn arb_response_body() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ -~]{1,80}",
        "<p>[a-zA-Z ]{1,40}</p>",
        "\\{\"error\": \"[a-z ]{1,30}\"\\}",
    ]
}

// ============================================================================
// FIXTURES
// ============================================================================

/// Apply moves in order, skipping any the rules reject.
pub fn board_after_moves(moves: &[(usize, usize)]) -> Board {
    let mut board = Board::new();
    for (row, col) in moves {
        if let Some(mark) = board.next_turn() {
            let _ = occupy_field(&mut board, *row, *col, mark);
        }
    }
    board
}

/// Three boards seating `test1`, `test2` and `test3` in a ring, so every
/// player sits at exactly two boards.
pub fn ring_store() -> (BoardStore, [BoardId; 3]) {
    let mut store = BoardStore::new();
    let p = |handle: &str| Player::new(handle).ok();
    let b1 = store.create(p("test1"), p("test2")).id;
    let b2 = store.create(p("test2"), p("test3")).id;
    let b3 = store.create(p("test3"), p("test1")).id;
    (store, [b1, b2, b3])
}
