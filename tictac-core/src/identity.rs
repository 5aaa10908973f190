//! Identity types for TICTAC entities

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Board identifier using UUIDv7 so ids sort by creation time.
pub type BoardId = Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Generate a new UUIDv7 BoardId.
pub fn new_board_id() -> BoardId {
    Uuid::now_v7()
}
