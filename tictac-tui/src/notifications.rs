//! Status banner for failed requests.
//!
//! [`StatusNotifier`] listens to [`AfterRequest`] notifications. When a
//! request fails it writes a message into the banner, makes the banner
//! visible and schedules a hide `display` later:
//!
//! ```text
//! Hidden ─── failed request ──→ Visible ─── hide elapsed ──→ Hidden
//!                                  │
//!                           failed request ↺ (text replaced, another hide scheduled)
//! ```
//!
//! The banner itself is two handles supplied at construction: an area that
//! can be shown or hidden and a text slot. Nothing is looked up globally.

use crate::events::TuiEvent;
use crate::request::AfterRequest;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::mpsc;

/// Shown when a request failed without any response to display.
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "Unexpected error, check your connection and try to refresh the page.";

/// How long a message stays up unless configured otherwise.
pub const DEFAULT_DISPLAY_MS: u64 = 5_000;

// ============================================================================
// HANDLES
// ============================================================================

/// Container whose visibility can be toggled.
pub trait StatusArea {
    fn show(&mut self);
    fn hide(&mut self);
    fn is_hidden(&self) -> bool;
}

/// Element whose displayed text can be replaced.
pub trait StatusText {
    fn set_text(&mut self, text: &str);
    fn text(&self) -> &str;
}

/// Generation of a scheduled hide. Each shown failure gets a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HideTicket(pub u64);

/// Arranges for [`StatusNotifier::on_hide_elapsed`] to be called with
/// `ticket` once `after` has passed. Scheduled hides are never cancelled.
pub trait HideScheduler {
    fn schedule_hide(&mut self, after: Duration, ticket: HideTicket);
}

impl<S: HideScheduler + ?Sized> HideScheduler for Box<S> {
    fn schedule_hide(&mut self, after: Duration, ticket: HideTicket) {
        (**self).schedule_hide(after, ticket)
    }
}

/// Delivers `TuiEvent::HideStatus` on the UI event channel after a sleep, so
/// the hide runs on the UI loop like any other event.
#[derive(Debug, Clone)]
pub struct ChannelHideScheduler {
    sender: mpsc::Sender<TuiEvent>,
}

impl ChannelHideScheduler {
    pub fn new(sender: mpsc::Sender<TuiEvent>) -> Self {
        Self { sender }
    }
}

impl HideScheduler for ChannelHideScheduler {
    fn schedule_hide(&mut self, after: Duration, ticket: HideTicket) {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = sender.send(TuiEvent::HideStatus(ticket)).await;
        });
    }
}

// ============================================================================
// POLICY
// ============================================================================

/// What happens when a hide fires while a newer message is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HidePolicy {
    /// Every scheduled hide hides the banner, even one scheduled for an
    /// older message. Overlapping failures can cut a newer message short.
    Independent,
    /// Only the hide scheduled by the most recent message hides the banner.
    LastMessageWins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSettings {
    pub display: Duration,
    pub hide_policy: HidePolicy,
}

impl Default for StatusSettings {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(DEFAULT_DISPLAY_MS),
            hide_policy: HidePolicy::Independent,
        }
    }
}

// ============================================================================
// NOTIFIER
// ============================================================================

pub struct StatusNotifier<A, T, S> {
    area: A,
    text: T,
    scheduler: S,
    settings: StatusSettings,
    generation: u64,
}

impl<A, T, S> StatusNotifier<A, T, S>
where
    A: StatusArea,
    T: StatusText,
    S: HideScheduler,
{
    pub fn new(area: A, text: T, scheduler: S, settings: StatusSettings) -> Self {
        Self {
            area,
            text,
            scheduler,
            settings,
            generation: 0,
        }
    }

    pub fn show_status_message(&mut self, message: &str) {
        self.area.show();
        self.text.set_text(message);
    }

    pub fn hide_status_message(&mut self) {
        self.area.hide();
        self.text.set_text("");
    }

    /// React to the completion of any request.
    pub fn on_request_completed(&mut self, notification: &AfterRequest) {
        if !notification.failed {
            return;
        }

        match &notification.transport {
            Some(transport) => {
                tracing::debug!(status = transport.status, "showing failed response");
                self.show_status_message(&transport.response_body);
            }
            None => {
                tracing::error!(?notification, "Unexpected request error");
                self.show_status_message(UNEXPECTED_ERROR_MESSAGE);
            }
        }

        self.generation += 1;
        let ticket = HideTicket(self.generation);
        self.scheduler.schedule_hide(self.settings.display, ticket);
    }

    /// A hide scheduled with `ticket` fired.
    pub fn on_hide_elapsed(&mut self, ticket: HideTicket) {
        match self.settings.hide_policy {
            HidePolicy::Independent => self.hide_status_message(),
            HidePolicy::LastMessageWins => {
                if ticket == self.current_ticket() {
                    self.hide_status_message();
                } else {
                    tracing::trace!(?ticket, "ignoring stale hide");
                }
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.area.is_hidden()
    }

    pub fn message(&self) -> &str {
        self.text.text()
    }

    pub fn area(&self) -> &A {
        &self.area
    }

    pub fn text(&self) -> &T {
        &self.text
    }

    pub fn settings(&self) -> StatusSettings {
        self.settings
    }

    /// Ticket of the most recently scheduled hide.
    pub fn current_ticket(&self) -> HideTicket {
        HideTicket(self.generation)
    }
}
