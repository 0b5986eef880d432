//! # Inkpost Core
//!
//! The client layer of the Inkpost blog.
//! This crate holds the post lifecycle, the feed renderer and the ports the
//! lifecycle drives. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod lifecycle;
pub mod ports;
pub mod render;
pub mod toolbar;

pub use error::{ClientError, StoreError};
pub use lifecycle::{LifecycleController, Phase, SubmitOutcome, UiState};
pub use render::{Feed, render};
