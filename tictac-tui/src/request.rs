//! Request layer.
//!
//! Every request runs on its own task and reports back to the UI loop through
//! the event channel. On success the payload event (`BoardsLoaded` or
//! `BoardLoaded`) is sent first; an [`AfterRequest`] notification is always
//! sent last, whether the request succeeded or not.

use crate::events::TuiEvent;
use async_trait::async_trait;
use std::sync::Arc;
use tictac_core::{BoardId, BoardRecord, BoardStore, GameError, Player};
use tokio::sync::{mpsc, Mutex};

/// Response of the underlying exchange of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transport {
    pub status: u16,
    pub response_body: String,
}

/// Notification emitted after any request completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfterRequest {
    pub failed: bool,
    pub transport: Option<Transport>,
}

impl AfterRequest {
    pub fn succeeded() -> Self {
        Self {
            failed: false,
            transport: None,
        }
    }

    pub fn failed(transport: Option<Transport>) -> Self {
        Self {
            failed: true,
            transport,
        }
    }
}

/// Why a request failed. `transport` is absent when no response came back
/// at all (connection refused, timeout, ...).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request failed")]
pub struct RequestFailure {
    pub transport: Option<Transport>,
}

impl RequestFailure {
    pub fn with_transport(status: u16, response_body: impl Into<String>) -> Self {
        Self {
            transport: Some(Transport {
                status,
                response_body: response_body.into(),
            }),
        }
    }

    pub fn without_transport() -> Self {
        Self { transport: None }
    }
}

impl From<GameError> for RequestFailure {
    fn from(err: GameError) -> Self {
        let status = if err.is_not_found() { 404 } else { 400 };
        Self::with_transport(status, err.to_string())
    }
}

/// Work the client can ask of a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardRequest {
    ListBoards,
    LoadBoard(BoardId),
    PlayMove { board_id: BoardId, row: usize, col: usize },
}

#[async_trait]
pub trait BoardBackend: Send + Sync {
    /// Boards the given player is seated at.
    async fn list_boards(&self, player: &Player) -> Result<Vec<BoardRecord>, RequestFailure>;

    async fn load_board(&self, board_id: BoardId) -> Result<BoardRecord, RequestFailure>;

    /// Play whichever mark is on turn at `(row, col)`.
    async fn play_move(
        &self,
        board_id: BoardId,
        row: usize,
        col: usize,
    ) -> Result<BoardRecord, RequestFailure>;
}

/// In-process backend over a [`BoardStore`].
#[derive(Debug, Default)]
pub struct LocalBackend {
    store: Mutex<BoardStore>,
}

impl LocalBackend {
    pub fn new(store: BoardStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// A store with two boards for `player` against a guest, one on each side.
    pub fn with_demo_boards(player: &Player) -> Self {
        let mut store = BoardStore::new();
        let guest = Player::new("guest").ok();
        store.create(Some(player.clone()), guest.clone());
        store.create(guest, Some(player.clone()));
        Self::new(store)
    }
}

#[async_trait]
impl BoardBackend for LocalBackend {
    async fn list_boards(&self, player: &Player) -> Result<Vec<BoardRecord>, RequestFailure> {
        Ok(self.store.lock().await.boards_for(player.handle()))
    }

    async fn load_board(&self, board_id: BoardId) -> Result<BoardRecord, RequestFailure> {
        Ok(self.store.lock().await.get(board_id)?.clone())
    }

    async fn play_move(
        &self,
        board_id: BoardId,
        row: usize,
        col: usize,
    ) -> Result<BoardRecord, RequestFailure> {
        Ok(self.store.lock().await.set_field_state(board_id, row, col)?)
    }
}

/// Run `request` and deliver its completion events.
pub async fn perform(
    backend: &dyn BoardBackend,
    player: &Player,
    request: BoardRequest,
    sender: &mpsc::Sender<TuiEvent>,
) {
    tracing::debug!(?request, "request started");
    let result = match request {
        BoardRequest::ListBoards => backend
            .list_boards(player)
            .await
            .map(TuiEvent::BoardsLoaded),
        BoardRequest::LoadBoard(board_id) => backend
            .load_board(board_id)
            .await
            .map(|record| TuiEvent::BoardLoaded(Box::new(record))),
        BoardRequest::PlayMove { board_id, row, col } => backend
            .play_move(board_id, row, col)
            .await
            .map(|record| TuiEvent::BoardLoaded(Box::new(record))),
    };

    let notification = match result {
        Ok(event) => {
            let _ = sender.send(event).await;
            AfterRequest::succeeded()
        }
        Err(failure) => {
            tracing::info!(
                status = ?failure.transport.as_ref().map(|t| t.status),
                "request failed"
            );
            AfterRequest::failed(failure.transport)
        }
    };
    let _ = sender.send(TuiEvent::AfterRequest(notification)).await;
}

/// Spawn [`perform`] on the runtime.
pub fn spawn_request(
    backend: Arc<dyn BoardBackend>,
    player: Player,
    request: BoardRequest,
    sender: mpsc::Sender<TuiEvent>,
) {
    tokio::spawn(async move {
        perform(backend.as_ref(), &player, request, &sender).await;
    });
}
