/// Visibility flags of the compose dialog and loading indicator.
///
/// `loading` and `composing` are independent; `submitting` covers the
/// create call of a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub composing: bool,
    pub submitting: bool,
    pub loading: bool,
}

/// Coarse lifecycle phase derived from [`UiState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Composing,
    Submitting,
    Loading,
}

impl UiState {
    pub fn phase(&self) -> Phase {
        if self.submitting {
            Phase::Submitting
        } else if self.loading {
            Phase::Loading
        } else if self.composing {
            Phase::Composing
        } else {
            Phase::Idle
        }
    }
}

/// Result of a submit that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The post was created and the feed reloaded.
    Submitted,
    /// A required field was empty; nothing was sent.
    Blocked { field: &'static str },
}

/// Plain-text fields of the compose form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeForm {
    pub title: String,
    pub author: String,
}

impl ComposeForm {
    /// First required field left blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.is_empty() {
            Some("title")
        } else if self.author.is_empty() {
            Some("author")
        } else {
            None
        }
    }
}
