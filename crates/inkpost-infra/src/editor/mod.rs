//! Editor implementations.

mod markup;

pub use markup::MarkupEditor;
