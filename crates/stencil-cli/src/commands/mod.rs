//! Action handlers, one per mode.

pub mod completions;
pub mod generate;
pub mod list;
