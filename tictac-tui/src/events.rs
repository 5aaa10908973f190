//! Event types for the TUI event loop.

use crate::notifications::HideTicket;
use crate::request::AfterRequest;
use crossterm::event::KeyEvent;
use tictac_core::BoardRecord;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Resize { width: u16, height: u16 },
    BoardsLoaded(Vec<BoardRecord>),
    BoardLoaded(Box<BoardRecord>),
    AfterRequest(AfterRequest),
    HideStatus(HideTicket),
}
