//! HTTP backend for a remote board server.

use crate::config::TuiConfig;
use crate::request::{BoardBackend, RequestFailure};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tictac_core::{BoardId, BoardRecord, Player};

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let base_url = config
            .backend
            .api_base_url
            .as_deref()
            .ok_or_else(|| ApiClientError::Config("backend.api_base_url is not set".to_string()))?;
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, RequestFailure> {
        let response = request.send().await.map_err(|err| {
            tracing::warn!(error = %err, "request produced no response");
            RequestFailure::without_transport()
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| {
            tracing::warn!(error = %err, status, "failed to read response body");
            RequestFailure::without_transport()
        })?;
        decode_response(status, body)
    }
}

/// Turn a received response into a value, or a failure carrying the raw body.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: String) -> Result<T, RequestFailure> {
    if !(200..300).contains(&status) {
        return Err(RequestFailure::with_transport(status, body));
    }
    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(err) => {
            tracing::warn!(error = %err, status, "undecodable response body");
            Err(RequestFailure::with_transport(status, body))
        }
    }
}

#[async_trait]
impl BoardBackend for RestClient {
    async fn list_boards(&self, player: &Player) -> Result<Vec<BoardRecord>, RequestFailure> {
        let path = format!("/api/v1/players/{}/boards", player.handle());
        self.send_json(self.client.get(self.url(&path))).await
    }

    async fn load_board(&self, board_id: BoardId) -> Result<BoardRecord, RequestFailure> {
        let path = format!("/api/v1/boards/{}", board_id);
        self.send_json(self.client.get(self.url(&path))).await
    }

    async fn play_move(
        &self,
        board_id: BoardId,
        row: usize,
        col: usize,
    ) -> Result<BoardRecord, RequestFailure> {
        let path = format!("/api/v1/boards/{}/fields/{}/{}", board_id, row, col);
        self.send_json(self.client.post(self.url(&path))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Transport;
    use tictac_core::Board;

    #[test]
    fn test_error_status_keeps_raw_body() {
        let result = decode_response::<BoardRecord>(409, "Cell already occupied".to_string());
        assert_eq!(
            result.unwrap_err().transport,
            Some(Transport {
                status: 409,
                response_body: "Cell already occupied".to_string(),
            })
        );
    }

    #[test]
    fn test_success_decodes_record() {
        let record = BoardRecord::new(Player::new("alice").ok(), None);
        let body = serde_json::to_string(&record).unwrap();
        let decoded = decode_response::<BoardRecord>(200, body).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_undecodable_success_is_a_failure() {
        let result = decode_response::<Board>(200, "<html>".to_string());
        let transport = result.unwrap_err().transport.unwrap();
        assert_eq!(transport.status, 200);
        assert_eq!(transport.response_body, "<html>");
    }

    #[tokio::test]
    async fn test_unreachable_server_has_no_transport() {
        let config = crate::config::TuiConfig::from_toml(
            r#"
            player_handle = "alice"
            request_timeout_ms = 500
            refresh_interval_ms = 250
            persistence_path = "tmp/state.json"
            log_path = "tmp/tui.log"

            [backend]
            kind = "remote"
            api_base_url = "http://127.0.0.1:9/"

            [status]
            display_ms = 5000
            hide_policy = "independent"
            "#,
        )
        .unwrap();
        let client = RestClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9");

        let failure = client.load_board(uuid::Uuid::nil()).await.unwrap_err();
        assert_eq!(failure.transport, None);
    }
}
