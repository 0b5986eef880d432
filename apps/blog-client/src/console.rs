//! Console surface - prints page changes as plain lines.

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use inkpost_core::ports::Surface;

/// Surface that writes every change to `W`.
pub struct ConsoleSurface<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleSurface<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn line(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{text}").and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "Failed to write to console");
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> Surface for ConsoleSurface<W> {
    fn set_compose_visible(&self, visible: bool) {
        self.line(if visible {
            "[compose] open - set title, author and body, then submit"
        } else {
            "[compose] closed"
        });
    }

    fn set_loading_visible(&self, visible: bool) {
        if visible {
            self.line("[loading]");
        }
    }

    fn show_feed(&self, markup: &str) {
        self.line("----- feed -----");
        self.line(markup.trim());
        self.line("----------------");
    }

    fn notify(&self, message: &str) {
        self.line(&format!("! {message}"));
    }

    fn clear_form(&self) {
        self.line("[form] cleared");
    }
}
