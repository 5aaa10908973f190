//! TICTAC Core - Board Model
//!
//! Board representation, move rules, players and an in-memory board store.
//! No I/O lives here; clients and servers build on these types.

pub mod board;
pub mod error;
pub mod identity;
pub mod player;
pub mod rules;
pub mod store;

pub use board::{Board, FieldState, Outcome, BOARD_SIZE, CELL_COUNT};
pub use error::{GameError, GameResult};
pub use identity::{new_board_id, BoardId, Timestamp};
pub use player::{BoardRecord, Player, MAX_HANDLE_LEN};
pub use rules::occupy_field;
pub use store::BoardStore;

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================
