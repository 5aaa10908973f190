//! Board representation.
//!
//! A board is a 3x3 grid stored row-major. Its canonical text form is a
//! 9-character state string where `' '` is an empty cell, e.g. `"XOXO X  O"`:
//!
//! ```text
//!  X | O | X
//! ---+---+---
//!  O |   | X
//! ---+---+---
//!    |   | O
//! ```

use crate::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width and height of the grid.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on a board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

// ============================================================================
// FIELD STATE
// ============================================================================

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FieldState {
    #[default]
    Empty,
    X,
    O,
}

impl FieldState {
    pub fn as_char(&self) -> char {
        match self {
            FieldState::Empty => ' ',
            FieldState::X => 'X',
            FieldState::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(FieldState::Empty),
            'X' => Some(FieldState::X),
            'O' => Some(FieldState::O),
            _ => None,
        }
    }
}

impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won(FieldState),
    Draw,
}

impl Outcome {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

// ============================================================================
// BOARD
// ============================================================================

/// A 3x3 tic-tac-toe grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    cells: [FieldState; CELL_COUNT],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a 9-character state string.
    pub fn from_state(state: &str) -> GameResult<Self> {
        let chars: Vec<char> = state.chars().collect();
        if chars.len() != CELL_COUNT {
            return Err(GameError::InvalidBoardState {
                reason: format!("expected {} cells, got {}", CELL_COUNT, chars.len()),
            });
        }
        let mut cells = [FieldState::Empty; CELL_COUNT];
        for (cell, c) in cells.iter_mut().zip(chars) {
            *cell = FieldState::from_char(c).ok_or_else(|| GameError::InvalidBoardState {
                reason: format!("unknown cell marker {:?}", c),
            })?;
        }
        Ok(Self { cells })
    }

    /// Render the 9-character state string.
    pub fn state(&self) -> String {
        self.cells.iter().map(FieldState::as_char).collect()
    }

    pub fn get_field_state(&self, row: usize, col: usize) -> GameResult<FieldState> {
        let index = Self::index(row, col)?;
        Ok(self.cells[index])
    }

    /// Overwrite a cell without any rule checks. Use [`crate::occupy_field`]
    /// to play a move.
    pub fn set_field_state(&mut self, row: usize, col: usize, state: FieldState) -> GameResult<()> {
        let index = Self::index(row, col)?;
        self.cells[index] = state;
        Ok(())
    }

    pub fn count(&self, state: FieldState) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[FieldState]> {
        self.cells.chunks(BOARD_SIZE)
    }

    /// Mark that moves next, or `None` once the game is decided.
    pub fn next_turn(&self) -> Option<FieldState> {
        if self.outcome().is_finished() {
            return None;
        }
        if self.count(FieldState::X) > self.count(FieldState::O) {
            Some(FieldState::O)
        } else {
            Some(FieldState::X)
        }
    }

    pub fn outcome(&self) -> Outcome {
        for line in LINES {
            let first = self.cells[line[0]];
            if first != FieldState::Empty && line.iter().all(|i| self.cells[*i] == first) {
                return Outcome::Won(first);
            }
        }
        if self.count(FieldState::Empty) == 0 {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    fn index(row: usize, col: usize) -> GameResult<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::InvalidPosition { row, col });
        }
        Ok(row * BOARD_SIZE + col)
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_state(s)
    }
}

impl TryFrom<String> for Board {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_state(&value)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.state()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state())
    }
}
