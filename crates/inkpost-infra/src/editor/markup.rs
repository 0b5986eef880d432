//! In-process rich-text document.
//!
//! Holds the document as a list of block-level markup fragments, the way the
//! browser widget serializes its root element.

use std::sync::{Mutex, MutexGuard};

use inkpost_core::ports::{EMPTY_DOCUMENT, EditorAdapter};
use inkpost_core::render::escape_text;
use inkpost_core::toolbar::EditorConfig;

#[derive(Debug, Default)]
struct Document {
    blocks: Vec<String>,
    attached: Option<(String, EditorConfig)>,
}

/// Markup editor backing the compose form.
#[derive(Debug, Default)]
pub struct MarkupEditor {
    document: Mutex<Document>,
}

impl MarkupEditor {
    pub fn new() -> Self {
        Self::default()
    }

    fn document(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append a paragraph of plain text.
    pub fn insert_text(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.document()
            .blocks
            .push(format!("<p>{}</p>", escape_text(text)));
    }

    /// Append a block of markup as-is.
    pub fn insert_markup(&self, markup: &str) {
        if markup.is_empty() {
            return;
        }
        self.document().blocks.push(markup.to_string());
    }

    /// Replace the whole document.
    pub fn set_markup(&self, markup: &str) {
        let mut document = self.document();
        document.blocks.clear();
        if !markup.is_empty() && markup != EMPTY_DOCUMENT {
            document.blocks.push(markup.to_string());
        }
    }

    /// Element the editor was attached to, if any.
    pub fn attached_to(&self) -> Option<String> {
        self.document()
            .attached
            .as_ref()
            .map(|(target, _)| target.clone())
    }

    /// Theme and toolbar the editor was attached with.
    pub fn config(&self) -> Option<EditorConfig> {
        self.document()
            .attached
            .as_ref()
            .map(|(_, config)| config.clone())
    }
}

impl EditorAdapter for MarkupEditor {
    fn attach(&self, target: &str, config: &EditorConfig) {
        let mut document = self.document();
        if let Some((existing, _)) = &document.attached {
            tracing::warn!(existing = %existing, target = %target, "Editor already attached, ignoring");
            return;
        }
        document.attached = Some((target.to_string(), config.clone()));
    }

    fn content(&self) -> String {
        let document = self.document();
        if document.blocks.is_empty() {
            EMPTY_DOCUMENT.to_string()
        } else {
            document.blocks.concat()
        }
    }

    fn reset(&self) {
        self.document().blocks.clear();
    }
}
