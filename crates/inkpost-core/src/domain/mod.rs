//! Domain entities - the records the client displays.

mod post;

pub use post::{NANOS_PER_MILLI, Post};
