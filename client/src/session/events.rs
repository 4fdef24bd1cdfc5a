//! # Session Commands and Events
//!
//! Message types for the session engine's two channels: commands flow from
//! the embedder into the engine, events flow back out.

use shared::dto::tests::IncidentType;

/// Where to move the question pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Prev,
    Jump(u32),
}

/// Commands from the embedder (UI layer) into the session engine.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// The current question's answer text changed; (re)arms the autosave
    /// debounce.
    AnswerChanged(String),
    /// Move between questions. Flushes the current answer first.
    Navigate(Navigation),
    /// Submit the attempt. Always reaches completion, even on errors.
    Submit,
    /// A detected anti-cheat event to forward to the backend.
    Incident(IncidentType),
    /// Redeem a bypass code for a locked attempt.
    Unlock { bypass_code: String },
    /// Stop the engine task.
    Shutdown,
}

/// Results and state transitions sent back to the embedder.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// An answer reached the backend.
    AnswerSaved { index: u32 },
    /// A save failed for a non-auth, non-404 reason. Soft: surfaced as a
    /// transient hint at most, never as a blocking error.
    SaveFailed { index: u32 },
    /// Save-answer returned 404: the attempt was already submitted. Autosave
    /// is disabled for the rest of the session.
    SessionDeactivated,
    /// Auth could not be recovered on an exam endpoint. Soft warning only;
    /// the session keeps going.
    AuthExpiredSoft,
    /// Backend issued a warning after a reported violation.
    SecurityWarning { violation_count: u32 },
    /// Backend locked the attempt.
    SessionLocked { violation_count: u32 },
    /// Bypass code accepted; the session was reset to a fresh attempt.
    SessionUnlocked,
    /// Bypass code rejected (locally or by the backend).
    UnlockFailed { message: String },
    /// Submission flow finished; the student can move to the completion
    /// screen.
    Submitted,
}
