//! Error types for TICTAC game operations

use crate::{BoardId, FieldState};
use thiserror::Error;

/// Everything that can go wrong while reading or mutating a board.
///
/// The `Display` strings are shown verbatim to players as the body of a
/// failed request, so keep them short and human readable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid position ({row}, {col})")]
    InvalidPosition { row: usize, col: usize },

    #[error("Invalid field state {0:?}")]
    InvalidFieldState(FieldState),

    #[error("Invalid board state: {reason}")]
    InvalidBoardState { reason: String },

    #[error("No free space available")]
    NoFreeSpace,

    #[error("Game is already over")]
    GameOver,

    #[error("Cell already occupied")]
    CellOccupied,

    #[error("Invalid movement")]
    InvalidMovement,

    #[error("Invalid player handle: {reason}")]
    InvalidHandle { reason: String },

    #[error("Board {0} does not exist")]
    BoardNotFound(BoardId),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

impl GameError {
    /// Whether the error names something that does not exist, as opposed to
    /// a request that was understood and rejected.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GameError::BoardNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_occupied_message_is_player_facing() {
        assert_eq!(GameError::CellOccupied.to_string(), "Cell already occupied");
    }

    #[test]
    fn test_not_found_classification() {
        assert!(GameError::BoardNotFound(Uuid::nil()).is_not_found());
        assert!(!GameError::InvalidMovement.is_not_found());
    }
}
