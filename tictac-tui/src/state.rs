//! Application state for the TICTAC TUI.

use crate::config::TuiConfig;
use crate::keys::Action;
use crate::nav::View;
use crate::notifications::{HideScheduler, HideTicket, StatusNotifier};
use crate::persistence::PersistedState;
use crate::request::{AfterRequest, BoardRequest};
use crate::theme::ChalkTheme;
use crate::widgets::{BannerArea, BannerText};
use tictac_core::{BoardId, BoardRecord, Player, BOARD_SIZE};

/// The status banner as wired into the app.
pub type StatusBannerNotifier =
    StatusNotifier<BannerArea, BannerText, Box<dyn HideScheduler + Send>>;

pub struct App {
    pub config: TuiConfig,
    pub player: Player,
    pub active_view: View,
    pub theme: ChalkTheme,
    pub board_list: BoardListState,
    pub board_view: BoardViewState,
    pub status: StatusBannerNotifier,
    pub pending_requests: usize,
}

impl App {
    pub fn new(config: TuiConfig, player: Player, scheduler: Box<dyn HideScheduler + Send>) -> Self {
        let status = StatusNotifier::new(
            BannerArea::default(),
            BannerText::default(),
            scheduler,
            config.status.settings(),
        );
        Self {
            config,
            player,
            active_view: View::BoardList,
            theme: ChalkTheme::chalk(),
            board_list: BoardListState::default(),
            board_view: BoardViewState::default(),
            status,
            pending_requests: 0,
        }
    }

    pub fn restore(&mut self, state: PersistedState) {
        self.active_view = state.active_view;
        self.board_list.selected = state.selected_board_id;
    }

    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            active_view: self.active_view,
            selected_board_id: self.board_list.selected,
        }
    }

    /// Record that a request is about to be sent.
    pub fn begin_request(&mut self) {
        self.pending_requests += 1;
    }

    /// Requests needed to show the current view. A selected board is only
    /// loaded once the list has confirmed it still exists; a selection
    /// restored from a previous run may name a board that is gone.
    pub fn refresh_requests(&self) -> Vec<BoardRequest> {
        let mut requests = vec![BoardRequest::ListBoards];
        if self.active_view == View::Board {
            if let Some(board_id) = self.board_list.selected {
                if self.board_list.get(board_id).is_some() {
                    requests.push(BoardRequest::LoadBoard(board_id));
                }
            }
        }
        requests
    }

    pub fn apply_boards_loaded(&mut self, boards: Vec<BoardRecord>) {
        self.board_list.boards = boards;
        let selected = self
            .board_list
            .selected
            .and_then(|id| self.board_list.get(id))
            .cloned();

        match selected {
            Some(record) => {
                if self.active_view == View::Board {
                    self.board_view.record = Some(record);
                }
            }
            None => {
                if self.board_list.selected.is_some() {
                    tracing::debug!("selected board is gone, returning to the list");
                }
                self.board_list.selected = self.board_list.boards.first().map(|r| r.id);
                self.board_view.record = None;
                self.active_view = View::BoardList;
            }
        }
    }

    pub fn apply_board_loaded(&mut self, record: BoardRecord) {
        if let Some(existing) = self.board_list.boards.iter_mut().find(|r| r.id == record.id) {
            *existing = record.clone();
        }
        if self.board_list.selected == Some(record.id) {
            self.board_view.record = Some(record);
        }
    }

    pub fn on_after_request(&mut self, notification: &AfterRequest) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
        self.status.on_request_completed(notification);
    }

    pub fn on_hide_elapsed(&mut self, ticket: HideTicket) {
        self.status.on_hide_elapsed(ticket);
    }

    pub fn dismiss_status(&mut self) {
        self.status.hide_status_message();
    }

    /// Switch to the other view, returning a request when the new view needs
    /// fresh data.
    pub fn next_view(&mut self) -> Option<BoardRequest> {
        self.active_view = self.active_view.next();
        match self.active_view {
            View::Board => self.open_selected(),
            View::BoardList => Some(BoardRequest::ListBoards),
        }
    }

    pub fn move_selection(&mut self, action: Action) {
        match self.active_view {
            View::BoardList => match action {
                Action::MoveDown => self.board_list.select_next(),
                Action::MoveUp => self.board_list.select_previous(),
                _ => {}
            },
            View::Board => self.board_view.move_cursor(action),
        }
    }

    /// Enter on the list opens the selected board; on a board it plays the
    /// cell under the cursor.
    pub fn confirm(&mut self) -> Option<BoardRequest> {
        match self.active_view {
            View::BoardList => {
                let request = self.open_selected();
                if request.is_some() {
                    self.active_view = View::Board;
                }
                request
            }
            View::Board => {
                let board_id = self.board_view.record.as_ref()?.id;
                let (row, col) = self.board_view.cursor;
                Some(BoardRequest::PlayMove { board_id, row, col })
            }
        }
    }

    fn open_selected(&mut self) -> Option<BoardRequest> {
        let board_id = self.board_list.selected?;
        if self.board_view.record.as_ref().map(|r| r.id) != Some(board_id) {
            self.board_view.record = self.board_list.get(board_id).cloned();
            self.board_view.cursor = (1, 1);
        }
        Some(BoardRequest::LoadBoard(board_id))
    }
}

#[derive(Debug, Clone, Default)]
pub struct BoardListState {
    pub boards: Vec<BoardRecord>,
    pub selected: Option<BoardId>,
}

impl BoardListState {
    pub fn get(&self, id: BoardId) -> Option<&BoardRecord> {
        self.boards.iter().find(|r| r.id == id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.boards.iter().position(|r| r.id == id)
    }

    pub fn select_next(&mut self) {
        if self.boards.is_empty() {
            self.selected = None;
            return;
        }
        let next = match self.selected_index() {
            Some(idx) if idx + 1 < self.boards.len() => idx + 1,
            Some(idx) => idx,
            None => 0,
        };
        self.selected = Some(self.boards[next].id);
    }

    pub fn select_previous(&mut self) {
        if self.boards.is_empty() {
            self.selected = None;
            return;
        }
        let prev = match self.selected_index() {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        };
        self.selected = Some(self.boards[prev].id);
    }
}

#[derive(Debug, Clone)]
pub struct BoardViewState {
    pub record: Option<BoardRecord>,
    pub cursor: (usize, usize),
}

impl Default for BoardViewState {
    fn default() -> Self {
        Self {
            record: None,
            cursor: (1, 1),
        }
    }
}

impl BoardViewState {
    pub fn move_cursor(&mut self, action: Action) {
        let (row, col) = self.cursor;
        let last = BOARD_SIZE - 1;
        self.cursor = match action {
            Action::MoveUp => (row.saturating_sub(1), col),
            Action::MoveDown => ((row + 1).min(last), col),
            Action::MoveLeft => (row, col.saturating_sub(1)),
            Action::MoveRight => (row, (col + 1).min(last)),
            _ => (row, col),
        };
    }
}
