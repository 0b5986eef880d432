//! Ports - trait definitions for the collaborators the lifecycle drives.
//! These are the "interfaces" that infrastructure must implement.

mod editor;
mod store;
mod surface;

pub use editor::{EMPTY_DOCUMENT, EditorAdapter};
pub use store::PostStore;
pub use surface::Surface;
