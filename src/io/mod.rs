//! Input layer: resolves where the delimited text comes from and opens it.
pub mod source;
pub use source::{InputSource, expand_path};
