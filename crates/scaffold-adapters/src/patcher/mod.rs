//! Structured document patchers.

mod json;

pub use json::JsonDocumentPatcher;
