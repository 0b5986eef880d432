/// Surface - the visible page the lifecycle writes to.
///
/// Calls arrive in the order the lifecycle performs them, from a single task.
pub trait Surface: Send + Sync {
    /// Show or hide the compose dialog.
    fn set_compose_visible(&self, visible: bool);

    /// Show or hide the loading indicator.
    fn set_loading_visible(&self, visible: bool);

    /// Replace the feed with `markup`.
    fn show_feed(&self, markup: &str);

    /// Blocking notification to the user.
    fn notify(&self, message: &str);

    /// Clear the title and author inputs.
    fn clear_form(&self);
}
