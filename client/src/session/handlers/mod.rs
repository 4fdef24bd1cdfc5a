//! # Session Command Handlers
//!
//! One module per command family, in the style of free functions over the
//! shared state plus the event sender.

pub(crate) mod answer;
pub(crate) mod navigation;
pub(crate) mod security;
pub(crate) mod submit;
