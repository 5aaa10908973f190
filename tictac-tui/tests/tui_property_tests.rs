use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use proptest::prelude::*;
use ratatui::style::Color;
use std::time::Duration;
use tictac_core::{BoardRecord, FieldState, Outcome, Player};
use tictac_test_utils::{arb_board, arb_player, arb_response_body};
use tictac_tui::config::{BackendConfig, BackendKind, ConfigError, StatusConfig, TuiConfig};
use tictac_tui::keys::{map_key, Action};
use tictac_tui::notifications::{
    HidePolicy, HideScheduler, HideTicket, StatusNotifier, StatusSettings,
};
use tictac_tui::request::{AfterRequest, Transport};
use tictac_tui::theme::{field_state_color, outcome_color, ChalkTheme};
use tictac_tui::widgets::{BannerArea, BannerText};

fn base_config() -> TuiConfig {
    TuiConfig {
        player_handle: "alice".to_string(),
        request_timeout_ms: 5_000,
        refresh_interval_ms: 250,
        persistence_path: "tmp/tictac-tui.json".into(),
        log_path: "tmp/tictac-tui.log".into(),
        backend: BackendConfig {
            kind: BackendKind::Local,
            api_base_url: None,
        },
        status: StatusConfig {
            display_ms: 5_000,
            hide_policy: HidePolicy::Independent,
        },
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

#[derive(Default)]
struct NoopScheduler;

impl HideScheduler for NoopScheduler {
    fn schedule_hide(&mut self, _after: Duration, _ticket: HideTicket) {}
}

#[test]
fn config_base_is_valid() {
    assert!(base_config().validate().is_ok());
}

#[test]
fn config_requires_player_handle() {
    let mut config = base_config();
    config.player_handle = "   ".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { field: "player_handle", .. })
    ));
}

#[test]
fn config_remote_requires_base_url() {
    let mut config = base_config();
    config.backend.kind = BackendKind::Remote;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { field: "backend.api_base_url", .. })
    ));

    config.backend.api_base_url = Some("localhost:8000".to_string());
    assert!(config.validate().is_err());

    config.backend.api_base_url = Some("http://localhost:8000".to_string());
    assert!(config.validate().is_ok());
}

#[test]
fn config_parses_toml() {
    let config = TuiConfig::from_toml(
        r#"
        player_handle = "bob"
        request_timeout_ms = 1000
        refresh_interval_ms = 100
        persistence_path = "state.json"
        log_path = "tui.log"

        [backend]
        kind = "remote"
        api_base_url = "https://boards.example.com"

        [status]
        display_ms = 5000
        hide_policy = "last_message_wins"
        "#,
    )
    .unwrap();
    assert_eq!(config.backend.kind, BackendKind::Remote);
    assert_eq!(
        config.status.settings(),
        StatusSettings {
            display: Duration::from_millis(5_000),
            hide_policy: HidePolicy::LastMessageWins,
        }
    );
    assert!(config.validate().is_ok());
}

#[test]
fn config_rejects_unknown_fields() {
    let result = TuiConfig::from_toml(
        r#"
        player_handle = "bob"
        request_timeout_ms = 1000
        refresh_interval_ms = 100
        persistence_path = "state.json"
        log_path = "tui.log"
        colour = "green"

        [backend]
        kind = "local"

        [status]
        display_ms = 5000
        hide_policy = "independent"
        "#,
    );
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn escape_dismisses_and_tab_switches() {
    assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Dismiss));
    assert_eq!(map_key(key(KeyCode::Tab)), Some(Action::NextView));
    assert_eq!(map_key(key(KeyCode::Enter)), Some(Action::Confirm));
    let ctrl_c = KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..key(KeyCode::Char('c'))
    };
    assert_eq!(map_key(ctrl_c), Some(Action::Quit));
}

#[test]
fn field_colors_distinguish_marks() {
    let theme = ChalkTheme::chalk();
    assert_ne!(
        field_state_color(FieldState::X, &theme),
        field_state_color(FieldState::O, &theme)
    );
    assert_eq!(
        outcome_color(Outcome::Won(FieldState::O), &theme),
        field_state_color(FieldState::O, &theme)
    );
}

proptest! {
    #[test]
    fn config_rejects_zero_display(timeout in 1u64..10_000) {
        let mut config = base_config();
        config.request_timeout_ms = timeout;
        config.status.display_ms = 0;
        prop_assert!(config.validate().is_err());
    }

    #[test]
    fn long_handles_rejected(handle in "[a-z]{17,40}") {
        let mut config = base_config();
        config.player_handle = handle;
        prop_assert!(config.validate().is_err());
    }

    #[test]
    fn hjkl_match_arrows(pair in prop_oneof![
        Just((KeyCode::Char('h'), KeyCode::Left)),
        Just((KeyCode::Char('j'), KeyCode::Down)),
        Just((KeyCode::Char('k'), KeyCode::Up)),
        Just((KeyCode::Char('l'), KeyCode::Right)),
    ]) {
        prop_assert_eq!(map_key(key(pair.0)), map_key(key(pair.1)));
    }

    #[test]
    fn outcome_color_is_never_reset(board in arb_board()) {
        let theme = ChalkTheme::chalk();
        prop_assert_ne!(outcome_color(board.outcome(), &theme), Color::Reset);
    }

    /// Whatever body a failed request carries is displayed verbatim.
    #[test]
    fn failed_body_shown_verbatim(body in arb_response_body(), status in 400u16..600) {
        let mut notifier = StatusNotifier::new(
            BannerArea::default(),
            BannerText::default(),
            NoopScheduler,
            StatusSettings::default(),
        );
        notifier.on_request_completed(&AfterRequest::failed(Some(Transport {
            status,
            response_body: body.clone(),
        })));
        prop_assert!(notifier.is_visible());
        prop_assert_eq!(notifier.message(), body.as_str());
    }

    /// Successful requests never change the banner, whatever came before.
    #[test]
    fn success_leaves_banner_alone(bodies in prop::collection::vec(arb_response_body(), 0..4)) {
        let mut notifier = StatusNotifier::new(
            BannerArea::default(),
            BannerText::default(),
            NoopScheduler,
            StatusSettings::default(),
        );
        for body in bodies {
            notifier.on_request_completed(&AfterRequest::failed(Some(Transport {
                status: 400,
                response_body: body,
            })));
        }
        let visible = notifier.is_visible();
        let message = notifier.message().to_string();
        let ticket = notifier.current_ticket();

        notifier.on_request_completed(&AfterRequest::succeeded());
        prop_assert_eq!(notifier.is_visible(), visible);
        prop_assert_eq!(notifier.message(), message.as_str());
        prop_assert_eq!(notifier.current_ticket(), ticket);
    }

    /// Handles travel as plain strings and seat the player on either side.
    #[test]
    fn player_handle_survives_json_and_seats(player in arb_player()) {
        let json = serde_json::to_string(&player).unwrap();
        prop_assert_eq!(&json, &format!("\"{}\"", player.handle()));
        let back: Player = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&back, &player);

        let crosses = BoardRecord::new(Some(player.clone()), None);
        let noughts = BoardRecord::new(None, Some(player.clone()));
        prop_assert!(crosses.seats(player.handle()));
        prop_assert!(noughts.seats(player.handle()));
        prop_assert!(!BoardRecord::new(None, None).seats(player.handle()));
    }
}
