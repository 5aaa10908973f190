//! Move rules.

use crate::{Board, FieldState, GameError, GameResult};

/// Place `new_field_state` at `(row, col)` if the move is legal.
///
/// X always opens. A mark may only be placed when it is that mark's turn,
/// on an empty cell, on a board whose game is not yet decided.
pub fn occupy_field(
    board: &mut Board,
    row: usize,
    col: usize,
    new_field_state: FieldState,
) -> GameResult<()> {
    if new_field_state == FieldState::Empty {
        return Err(GameError::InvalidFieldState(new_field_state));
    }
    let current = board.get_field_state(row, col)?;

    if board.count(FieldState::Empty) == 0 {
        return Err(GameError::NoFreeSpace);
    }
    if board.outcome().is_finished() {
        return Err(GameError::GameOver);
    }
    if current != FieldState::Empty {
        return Err(GameError::CellOccupied);
    }

    let crosses = board.count(FieldState::X);
    let noughts = board.count(FieldState::O);
    let legal = (crosses > noughts && new_field_state == FieldState::O)
        || (crosses == noughts && new_field_state == FieldState::X);
    if !legal {
        return Err(GameError::InvalidMovement);
    }

    board.set_field_state(row, col, new_field_state)
}
