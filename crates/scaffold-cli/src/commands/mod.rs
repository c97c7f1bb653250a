//! Command handlers. One per invocation shape; `scaffold` has a single one.

pub mod scaffold;
