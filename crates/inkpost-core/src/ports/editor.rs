use crate::toolbar::EditorConfig;

/// Markup of a document with no content.
pub const EMPTY_DOCUMENT: &str = "<p><br></p>";

/// Editor adapter - wraps the rich-text composition widget.
pub trait EditorAdapter: Send + Sync {
    /// Attach the widget to `target` with the given theme and toolbar.
    /// Called once at startup.
    fn attach(&self, target: &str, config: &EditorConfig);

    /// Current document serialized as markup.
    ///
    /// An empty document yields [`EMPTY_DOCUMENT`].
    fn content(&self) -> String;

    /// Clear the document. Idempotent.
    fn reset(&self);
}
