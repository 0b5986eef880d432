//! Post lifecycle - sequences the editor, store and surface in response
//! to user actions.

mod state;

pub use state::{ComposeForm, Phase, SubmitOutcome, UiState};

use std::sync::Arc;

use crate::error::ClientError;
use crate::ports::{EditorAdapter, PostStore, Surface};
use crate::render::{Feed, render};
use crate::toolbar::EditorConfig;

/// Shown when a submission fails.
pub const CREATION_FAILED_MESSAGE: &str = "Failed to create post. Please try again.";

/// Default element the editor attaches to.
pub const DEFAULT_EDITOR_TARGET: &str = "#editor";

/// Owns the UI state and the three ports, and runs every user action.
///
/// Every action takes `&mut self`, so one controller never has two actions
/// in flight at once.
pub struct LifecycleController {
    store: Arc<dyn PostStore>,
    editor: Arc<dyn EditorAdapter>,
    surface: Arc<dyn Surface>,
    editor_target: String,
    editor_config: EditorConfig,
    state: UiState,
    form: ComposeForm,
    feed: Option<Feed>,
}

impl LifecycleController {
    pub fn new(
        store: Arc<dyn PostStore>,
        editor: Arc<dyn EditorAdapter>,
        surface: Arc<dyn Surface>,
    ) -> Self {
        Self {
            store,
            editor,
            surface,
            editor_target: DEFAULT_EDITOR_TARGET.to_string(),
            editor_config: EditorConfig::standard(),
            state: UiState::default(),
            form: ComposeForm::default(),
            feed: None,
        }
    }

    /// Attach the editor somewhere other than [`DEFAULT_EDITOR_TARGET`].
    pub fn with_editor_target(mut self, target: impl Into<String>) -> Self {
        self.editor_target = target.into();
        self
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn form(&self) -> &ComposeForm {
        &self.form
    }

    /// Feed from the last load, `None` before the first one completes.
    pub fn feed(&self) -> Option<&Feed> {
        self.feed.as_ref()
    }

    /// Application start: attach the editor, then load the feed.
    pub async fn start(&mut self) -> Result<(), ClientError> {
        self.editor.attach(&self.editor_target, &self.editor_config);
        tracing::info!(target_element = %self.editor_target, "Editor attached");

        self.load_posts().await
    }

    /// Reload the feed from the store.
    pub async fn reload(&mut self) -> Result<(), ClientError> {
        self.load_posts().await
    }

    /// "New post": reveal the compose dialog.
    pub fn open_compose(&mut self) {
        self.state.composing = true;
        self.surface.set_compose_visible(true);
    }

    /// "Cancel": hide the compose dialog and discard the draft.
    pub fn cancel(&mut self) {
        self.state.composing = false;
        self.surface.set_compose_visible(false);
        self.reset_form();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.form.author = author.into();
    }

    /// Submit the compose form.
    ///
    /// A form with a blank title or author is not submitted and yields
    /// [`SubmitOutcome::Blocked`]; the dialog stays open. On a store failure
    /// the draft is discarded, not restored.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, ClientError> {
        if let Some(field) = self.form.missing_field() {
            tracing::debug!(field, "Submission blocked, required field is empty");
            self.surface
                .notify(&format!("Please fill out the {field} field."));
            return Ok(SubmitOutcome::Blocked { field });
        }

        self.state.composing = false;
        self.surface.set_compose_visible(false);
        self.state.submitting = true;
        self.set_loading(true);

        let body = self.editor.content();
        let ComposeForm { title, author } = self.form.clone();

        tracing::info!(title = %title, author = %author, "Submitting post");
        let created = self.store.submit(&title, &body, &author).await;
        self.state.submitting = false;

        if let Err(e) = created {
            tracing::error!(error = %e, "Error creating post");
            self.set_loading(false);
            self.surface.notify(CREATION_FAILED_MESSAGE);
            self.reset_form();
            return Err(ClientError::CreationFailure(e));
        }

        let loaded = self.load_posts().await;
        self.reset_form();
        loaded.map(|()| SubmitOutcome::Submitted)
    }

    async fn load_posts(&mut self) -> Result<(), ClientError> {
        self.set_loading(true);

        let outcome = match self.store.fetch_all().await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "Posts loaded");
                self.display(render(&posts));
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading posts");
                self.display(Feed::Unavailable);
                Err(ClientError::LoadFailure(e))
            }
        };

        self.set_loading(false);
        outcome
    }

    fn display(&mut self, feed: Feed) {
        self.surface.show_feed(&feed.to_markup());
        self.feed = Some(feed);
    }

    fn set_loading(&mut self, visible: bool) {
        self.state.loading = visible;
        self.surface.set_loading_visible(visible);
    }

    fn reset_form(&mut self) {
        self.form = ComposeForm::default();
        self.surface.clear_form();
        self.editor.reset();
    }
}
