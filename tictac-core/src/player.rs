//! Players and the board records that seat them.

use crate::{new_board_id, Board, BoardId, GameError, GameResult, Timestamp};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest accepted player handle, in characters.
pub const MAX_HANDLE_LEN: usize = 16;

/// A named participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Player {
    handle: String,
}

impl Player {
    pub fn new(handle: impl Into<String>) -> GameResult<Self> {
        let handle = handle.into();
        let trimmed = handle.trim();
        if trimmed.is_empty() {
            return Err(GameError::InvalidHandle {
                reason: "must not be empty".to_string(),
            });
        }
        if trimmed.chars().count() > MAX_HANDLE_LEN {
            return Err(GameError::InvalidHandle {
                reason: format!("must be at most {} characters", MAX_HANDLE_LEN),
            });
        }
        Ok(Self {
            handle: trimmed.to_string(),
        })
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }
}

impl TryFrom<String> for Player {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Player> for String {
    fn from(player: Player) -> Self {
        player.handle
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.handle)
    }
}

/// A board together with the players seated at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    pub id: BoardId,
    pub crosses_player: Option<Player>,
    pub noughts_player: Option<Player>,
    pub board: Board,
    pub created_at: Timestamp,
}

impl BoardRecord {
    pub fn new(crosses_player: Option<Player>, noughts_player: Option<Player>) -> Self {
        Self {
            id: new_board_id(),
            crosses_player,
            noughts_player,
            board: Board::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether `handle` plays either side of this board.
    pub fn seats(&self, handle: &str) -> bool {
        [&self.crosses_player, &self.noughts_player]
            .into_iter()
            .flatten()
            .any(|player| player.handle() == handle)
    }
}

impl fmt::Display for BoardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |player: &Option<Player>| {
            player
                .as_ref()
                .map(|p| p.handle().to_string())
                .unwrap_or_else(|| "-".to_string())
        };
        write!(
            f,
            "X = {} O = {} status = {}",
            name(&self.crosses_player),
            name(&self.noughts_player),
            self.board.state()
        )
    }
}
