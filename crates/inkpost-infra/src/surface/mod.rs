//! Surface implementations.

mod recording;

pub use recording::{RecordingSurface, SurfaceEvent};
