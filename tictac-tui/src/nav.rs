//! Navigation and view switching utilities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    BoardList,
    Board,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::BoardList => "Boards",
            View::Board => "Board",
        }
    }

    pub fn all() -> &'static [View] {
        &[View::BoardList, View::Board]
    }

    pub fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|v| v == self)
            .unwrap_or(0)
    }

    pub fn next(&self) -> View {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }
}
