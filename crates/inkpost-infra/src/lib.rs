//! # Inkpost Infrastructure
//!
//! Concrete implementations of the ports defined in `inkpost-core`.
//! This crate contains the post stores, the editor document and surfaces.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `http` - Remote post store over HTTP via reqwest

pub mod editor;
pub mod store;
pub mod surface;

// Re-exports - In-Memory
pub use editor::MarkupEditor;
pub use store::InMemoryPostStore;
pub use surface::{RecordingSurface, SurfaceEvent};

// Re-exports - HTTP
#[cfg(feature = "http")]
pub use store::{HttpPostStore, HttpStoreConfig};
