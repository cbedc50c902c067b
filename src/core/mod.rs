//! Conversion building blocks: the delimited-text `reader`, the Markdown
//! `formatter`, and the `params` that configure them. Consumed by the
//! high-level `api` module.
pub mod formatter;
pub mod params;
pub mod reader;
