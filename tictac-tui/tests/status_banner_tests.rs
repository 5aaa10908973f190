//! End-to-end banner behavior: requests run against the local backend, their
//! events are pumped through `App` the way the UI loop does, and hides are
//! delivered by the channel scheduler on a paused clock.

use std::time::Duration;
use tictac_core::{new_board_id, Player};
use tictac_test_utils::ring_store;
use tictac_tui::config::{BackendConfig, BackendKind, StatusConfig, TuiConfig};
use tictac_tui::events::TuiEvent;
use tictac_tui::nav::View;
use tictac_tui::notifications::{ChannelHideScheduler, HidePolicy, UNEXPECTED_ERROR_MESSAGE};
use tictac_tui::persistence::PersistedState;
use tictac_tui::request::{perform, AfterRequest, BoardRequest, LocalBackend, Transport};
use tictac_tui::state::App;
use tokio::sync::mpsc;

const DISPLAY: Duration = Duration::from_millis(5_000);

fn config(policy: HidePolicy) -> TuiConfig {
    TuiConfig {
        player_handle: "test1".to_string(),
        request_timeout_ms: 1_000,
        refresh_interval_ms: 250,
        persistence_path: "tmp/state.json".into(),
        log_path: "tmp/tui.log".into(),
        backend: BackendConfig {
            kind: BackendKind::Local,
            api_base_url: None,
        },
        status: StatusConfig {
            display_ms: 5_000,
            hide_policy: policy,
        },
    }
}

struct Harness {
    app: App,
    tx: mpsc::Sender<TuiEvent>,
    rx: mpsc::Receiver<TuiEvent>,
}

impl Harness {
    fn new(policy: HidePolicy) -> Self {
        let (tx, rx) = mpsc::channel(64);
        let player = Player::new("test1").unwrap();
        let app = App::new(config(policy), player, Box::new(ChannelHideScheduler::new(tx.clone())));
        Self { app, tx, rx }
    }

    fn notify(&mut self, notification: AfterRequest) {
        self.app.on_after_request(&notification);
    }

    /// Deliver every event that is ready right now.
    fn pump(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            match event {
                TuiEvent::BoardsLoaded(boards) => self.app.apply_boards_loaded(boards),
                TuiEvent::BoardLoaded(record) => self.app.apply_board_loaded(*record),
                TuiEvent::AfterRequest(n) => self.app.on_after_request(&n),
                TuiEvent::HideStatus(ticket) => self.app.on_hide_elapsed(ticket),
                TuiEvent::Input(_) | TuiEvent::Resize { .. } => {}
            }
        }
    }

    async fn advance(&mut self, by: Duration) {
        tokio::time::sleep(by).await;
        // Let woken timer tasks push their events.
        tokio::task::yield_now().await;
        self.pump();
    }
}

fn occupied() -> AfterRequest {
    AfterRequest::failed(Some(Transport {
        status: 400,
        response_body: "Cell already occupied".to_string(),
    }))
}

#[tokio::test(start_paused = true)]
async fn occupied_cell_shows_then_hides_after_display_window() {
    let mut h = Harness::new(HidePolicy::Independent);
    h.notify(occupied());

    assert!(h.app.status.is_visible());
    assert_eq!(h.app.status.message(), "Cell already occupied");

    h.advance(DISPLAY - Duration::from_millis(1)).await;
    assert!(h.app.status.is_visible());

    h.advance(Duration::from_millis(2)).await;
    assert!(!h.app.status.is_visible());
    assert_eq!(h.app.status.message(), "");
}

#[tokio::test(start_paused = true)]
async fn missing_transport_shows_fallback_then_hides() {
    let mut h = Harness::new(HidePolicy::Independent);
    h.notify(AfterRequest::failed(None));

    assert!(h.app.status.is_visible());
    assert_eq!(h.app.status.message(), UNEXPECTED_ERROR_MESSAGE);

    h.advance(DISPLAY + Duration::from_millis(1)).await;
    assert!(!h.app.status.is_visible());
}

#[tokio::test(start_paused = true)]
async fn success_changes_nothing() {
    let mut h = Harness::new(HidePolicy::Independent);
    h.notify(AfterRequest::succeeded());

    assert!(!h.app.status.is_visible());
    assert_eq!(h.app.status.message(), "");
    h.advance(DISPLAY * 2).await;
    assert!(!h.app.status.is_visible());
}

#[tokio::test(start_paused = true)]
async fn independent_hides_newer_message_early() {
    let mut h = Harness::new(HidePolicy::Independent);
    h.notify(occupied());
    h.advance(Duration::from_millis(3_000)).await;
    h.notify(AfterRequest::failed(None));

    // The first message's hide fires 2s into the second message.
    h.advance(Duration::from_millis(2_001)).await;
    assert!(!h.app.status.is_visible());
}

#[tokio::test(start_paused = true)]
async fn last_message_wins_keeps_newer_message_for_full_window() {
    let mut h = Harness::new(HidePolicy::LastMessageWins);
    h.notify(occupied());
    h.advance(Duration::from_millis(3_000)).await;
    h.notify(AfterRequest::failed(None));

    h.advance(Duration::from_millis(2_001)).await;
    assert!(h.app.status.is_visible());
    assert_eq!(h.app.status.message(), UNEXPECTED_ERROR_MESSAGE);

    h.advance(Duration::from_millis(3_000)).await;
    assert!(!h.app.status.is_visible());
}

#[tokio::test(start_paused = true)]
async fn dismiss_hides_immediately() {
    let mut h = Harness::new(HidePolicy::Independent);
    h.notify(occupied());
    h.app.dismiss_status();
    assert!(!h.app.status.is_visible());
    assert_eq!(h.app.status.message(), "");
}

#[tokio::test(start_paused = true)]
async fn playing_an_occupied_cell_surfaces_the_rule() {
    let (store, ids) = ring_store();
    let backend = LocalBackend::new(store);
    let mut h = Harness::new(HidePolicy::Independent);
    let player = h.app.player.clone();

    h.app.begin_request();
    perform(&backend, &player, BoardRequest::ListBoards, &h.tx).await;
    h.pump();
    assert_eq!(h.app.board_list.boards.len(), 2);
    h.app.board_list.selected = Some(ids[0]);

    let open = h.app.confirm().unwrap();
    assert_eq!(h.app.active_view, View::Board);
    h.app.begin_request();
    perform(&backend, &player, open, &h.tx).await;
    h.pump();

    for _ in 0..2 {
        let play = h.app.confirm().unwrap();
        h.app.begin_request();
        perform(&backend, &player, play, &h.tx).await;
        h.pump();
    }

    let record = h.app.board_view.record.as_ref().unwrap();
    assert_eq!(record.board.state(), "    X    ");
    assert_eq!(h.app.pending_requests, 0);
    assert!(h.app.status.is_visible());
    assert_eq!(h.app.status.message(), "Cell already occupied");

    h.advance(DISPLAY + Duration::from_millis(1)).await;
    assert!(!h.app.status.is_visible());
}

#[tokio::test(start_paused = true)]
async fn restored_stale_selection_falls_back_to_list_quietly() {
    let player = Player::new("test1").unwrap();
    let backend = LocalBackend::with_demo_boards(&player);
    let mut h = Harness::new(HidePolicy::Independent);
    h.app.restore(PersistedState {
        active_view: View::Board,
        selected_board_id: Some(new_board_id()),
    });

    let requests = h.app.refresh_requests();
    assert_eq!(requests, vec![BoardRequest::ListBoards]);
    for request in requests {
        h.app.begin_request();
        perform(&backend, &player, request, &h.tx).await;
    }
    h.pump();

    assert!(!h.app.status.is_visible());
    assert_eq!(h.app.status.message(), "");
    assert_eq!(h.app.active_view, View::BoardList);
    assert!(h.app.board_view.record.is_none());
    assert_eq!(h.app.board_list.selected, h.app.board_list.boards.first().map(|r| r.id));
}

#[tokio::test(start_paused = true)]
async fn restored_live_selection_reopens_board() {
    let (store, ids) = ring_store();
    let backend = LocalBackend::new(store);
    let mut h = Harness::new(HidePolicy::Independent);
    let player = h.app.player.clone();
    h.app.restore(PersistedState {
        active_view: View::Board,
        selected_board_id: Some(ids[2]),
    });

    perform(&backend, &player, BoardRequest::ListBoards, &h.tx).await;
    h.pump();

    assert_eq!(h.app.active_view, View::Board);
    assert_eq!(h.app.board_view.record.as_ref().map(|r| r.id), Some(ids[2]));
    assert!(h.app
        .refresh_requests()
        .contains(&BoardRequest::LoadBoard(ids[2])));
    assert!(!h.app.status.is_visible());
}
