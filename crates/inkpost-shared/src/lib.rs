//! # Inkpost Shared
//!
//! Wire types shared between the blog client and the post store.
//! In a full-stack Rust setup, this crate is compiled for both server and WASM.

pub mod dto;

pub use dto::{CreatePostRequest, PostDto};
