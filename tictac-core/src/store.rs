//! In-memory board store.

use crate::{occupy_field, BoardId, BoardRecord, FieldState, GameError, GameResult, Player};
use std::collections::HashMap;

/// Holds every board known to a process. Nothing outlives the process.
#[derive(Debug, Default)]
pub struct BoardStore {
    boards: HashMap<BoardId, BoardRecord>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(
        &mut self,
        crosses_player: Option<Player>,
        noughts_player: Option<Player>,
    ) -> BoardRecord {
        let record = BoardRecord::new(crosses_player, noughts_player);
        self.boards.insert(record.id, record.clone());
        record
    }

    pub fn get(&self, id: BoardId) -> GameResult<&BoardRecord> {
        self.boards.get(&id).ok_or(GameError::BoardNotFound(id))
    }

    /// Boards where `handle` plays either side, oldest first.
    pub fn boards_for(&self, handle: &str) -> Vec<BoardRecord> {
        let mut boards: Vec<BoardRecord> = self
            .boards
            .values()
            .filter(|record| record.seats(handle))
            .cloned()
            .collect();
        boards.sort_by_key(|record| record.id);
        boards
    }

    /// Play the next mark at `(row, col)`. The mark is whichever side is on
    /// turn.
    pub fn set_field_state(
        &mut self,
        id: BoardId,
        row: usize,
        col: usize,
    ) -> GameResult<BoardRecord> {
        let record = self.boards.get_mut(&id).ok_or(GameError::BoardNotFound(id))?;
        // A decided board has no mark on turn. The rules still say why the
        // move fails (bad position, no free space, game over).
        let mark = record.board.next_turn().unwrap_or(FieldState::X);
        occupy_field(&mut record.board, row, col, mark)?;
        Ok(record.clone())
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}
