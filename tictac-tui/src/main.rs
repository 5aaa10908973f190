//! TICTAC TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tictac_core::Player;
use tictac_tui::api_client::RestClient;
use tictac_tui::config::{BackendKind, TuiConfig};
use tictac_tui::error::TuiError;
use tictac_tui::events::TuiEvent;
use tictac_tui::keys::{map_key, Action};
use tictac_tui::logging::init_logging;
use tictac_tui::notifications::ChannelHideScheduler;
use tictac_tui::persistence;
use tictac_tui::request::{spawn_request, BoardBackend, BoardRequest, LocalBackend};
use tictac_tui::state::App;
use tictac_tui::views::render_view;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    init_logging(&config.log_path)?;
    let player = Player::new(config.player_handle.clone())?;
    let backend = build_backend(&config, &player)?;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    let scheduler = ChannelHideScheduler::new(event_tx.clone());
    let mut app = App::new(config, player, Box::new(scheduler));
    match persistence::load(&app.config.persistence_path) {
        Ok(Some(state)) => app.restore(state),
        Ok(None) => {}
        Err(err) => tracing::warn!(error = %err, "ignoring unreadable UI state"),
    }

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    spawn_input_reader(event_tx.clone());
    for request in app.refresh_requests() {
        dispatch(&mut app, &backend, request, &event_tx);
    }

    let tick_rate = Duration::from_millis(app.config.refresh_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {}
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, &backend, &event_tx, event) {
                    break;
                }
            }
        }
    }

    if let Err(err) = persistence::save(&app.config.persistence_path, &app.persisted()) {
        tracing::warn!(error = %err, "failed to save UI state");
    }
    tracing::info!("Shutting down");

    Ok(())
}

fn build_backend(config: &TuiConfig, player: &Player) -> Result<Arc<dyn BoardBackend>, TuiError> {
    let backend: Arc<dyn BoardBackend> = match config.backend.kind {
        BackendKind::Local => Arc::new(LocalBackend::with_demo_boards(player)),
        BackendKind::Remote => Arc::new(RestClient::new(config)?),
    };
    tracing::info!(kind = ?config.backend.kind, "Backend ready");
    Ok(backend)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let sent = match evt {
                    CrosstermEvent::Key(key) => sender.blocking_send(TuiEvent::Input(key)),
                    CrosstermEvent::Resize(width, height) => {
                        sender.blocking_send(TuiEvent::Resize { width, height })
                    }
                    _ => Ok(()),
                };
                if sent.is_err() {
                    break;
                }
            }
        }
    });
}

fn dispatch(
    app: &mut App,
    backend: &Arc<dyn BoardBackend>,
    request: BoardRequest,
    sender: &mpsc::Sender<TuiEvent>,
) {
    app.begin_request();
    spawn_request(backend.clone(), app.player.clone(), request, sender.clone());
}

/// Returns `true` when the app should exit.
fn handle_event(
    app: &mut App,
    backend: &Arc<dyn BoardBackend>,
    sender: &mpsc::Sender<TuiEvent>,
    event: TuiEvent,
) -> bool {
    match event {
        TuiEvent::Input(key) => {
            if let Some(action) = map_key(key) {
                return handle_action(app, backend, sender, action);
            }
        }
        TuiEvent::BoardsLoaded(boards) => app.apply_boards_loaded(boards),
        TuiEvent::BoardLoaded(record) => app.apply_board_loaded(*record),
        TuiEvent::AfterRequest(notification) => app.on_after_request(&notification),
        TuiEvent::HideStatus(ticket) => app.on_hide_elapsed(ticket),
        TuiEvent::Resize { .. } => {}
    }
    false
}

fn handle_action(
    app: &mut App,
    backend: &Arc<dyn BoardBackend>,
    sender: &mpsc::Sender<TuiEvent>,
    action: Action,
) -> bool {
    match action {
        Action::Quit => return true,
        Action::NextView => {
            if let Some(request) = app.next_view() {
                dispatch(app, backend, request, sender);
            }
        }
        Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {
            app.move_selection(action)
        }
        Action::Confirm => {
            if let Some(request) = app.confirm() {
                dispatch(app, backend, request, sender);
            }
        }
        Action::Refresh => {
            for request in app.refresh_requests() {
                dispatch(app, backend, request, sender);
            }
        }
        Action::Dismiss => app.dismiss_status(),
    }
    false
}
