//! Post store implementations - remote HTTP and in-memory fallback.

mod memory;

#[cfg(feature = "http")]
mod http;

pub use memory::InMemoryPostStore;

#[cfg(feature = "http")]
pub use http::{HttpPostStore, HttpStoreConfig};
