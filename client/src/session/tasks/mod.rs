//! # Session Background Tasks
//!
//! Spawned work whose completion flows back into the engine loop.

pub(crate) mod autosave;

use crate::core::error::Result;

/// Completion of a spawned task, delivered back to the engine loop.
pub(crate) enum TaskOutcome {
    SaveFinished { index: u32, result: Result<()> },
}
