//! Headless surface that keeps the page state and a log of every change.

use std::sync::{Mutex, MutexGuard};

use inkpost_core::ports::Surface;

/// A single surface update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    ComposeVisible(bool),
    LoadingVisible(bool),
    Feed(String),
    Notification(String),
    FormCleared,
}

#[derive(Debug, Default)]
struct Page {
    compose_visible: bool,
    loading_visible: bool,
    feed: String,
    events: Vec<SurfaceEvent>,
}

/// Surface without a display, for headless runs and tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    page: Mutex<Page>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, event: SurfaceEvent) {
        self.page().events.push(event);
    }

    pub fn compose_visible(&self) -> bool {
        self.page().compose_visible
    }

    pub fn loading_visible(&self) -> bool {
        self.page().loading_visible
    }

    /// Feed markup currently displayed.
    pub fn feed(&self) -> String {
        self.page().feed.clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.page()
            .events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Notification(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.page().events.clone()
    }

    /// Drain the event log, keeping the page state.
    pub fn take_events(&self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.page().events)
    }
}

impl Surface for RecordingSurface {
    fn set_compose_visible(&self, visible: bool) {
        self.page().compose_visible = visible;
        self.push(SurfaceEvent::ComposeVisible(visible));
    }

    fn set_loading_visible(&self, visible: bool) {
        self.page().loading_visible = visible;
        self.push(SurfaceEvent::LoadingVisible(visible));
    }

    fn show_feed(&self, markup: &str) {
        self.page().feed = markup.to_string();
        self.push(SurfaceEvent::Feed(markup.to_string()));
    }

    fn notify(&self, message: &str) {
        tracing::debug!(message = %message, "Notification");
        self.push(SurfaceEvent::Notification(message.to_string()));
    }

    fn clear_form(&self) {
        self.push(SurfaceEvent::FormCleared);
    }
}
