//! # Answer Handlers
//!
//! Answer edits, the inline flush used by navigation/submission, and the
//! shared save-failure policy.

use crate::core::error::Result;
use crate::core::service::TestApi;
use crate::session::events::SessionEvent;
use crate::session::state::{SessionPhase, SessionState};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Record an edit to the current question's answer and (re)arm the autosave
/// debounce. Edits are dropped while the session cannot accept them (locked,
/// submitted, deactivated).
pub(crate) fn handle_answer_changed(
    state: &Arc<RwLock<SessionState>>,
    text: String,
    autosave_delay: Duration,
) {
    let check = crate::utils::validation::validate_answer(&text);
    if !check.is_valid {
        tracing::debug!(reason = ?check.error, "Dropping oversized answer edit");
        return;
    }

    let mut state = state.write();
    if !state.can_edit() {
        return;
    }

    let index = state.current_index;
    state.answers.insert(index, text);
    state.autosave.dirty = true;
    state.autosave.deadline = Some(Instant::now() + autosave_delay);
}

/// Flush the current answer inline, if it is dirty. Used by navigation
/// ("flush, then move") and submission (best-effort flush before submit).
pub(crate) async fn flush_current(
    api: &Arc<dyn TestApi>,
    state: &Arc<RwLock<SessionState>>,
    events: &Sender<SessionEvent>,
) {
    let payload = {
        let mut st = state.write();
        st.autosave.deadline = None;
        let flushable = matches!(
            st.phase,
            SessionPhase::Active | SessionPhase::Submitting
        );
        if !st.autosave.dirty || !flushable {
            None
        } else {
            st.autosave.dirty = false;
            let index = st.current_index;
            let answer = st.answers.get(&index).cloned().unwrap_or_default();
            Some((
                st.attempt.attempt_id.clone(),
                index,
                answer,
                st.time_on_question(),
            ))
        }
    };

    let Some((attempt_id, index, answer, elapsed)) = payload else {
        return;
    };

    let result = api.save_answer(&attempt_id, index, &answer, elapsed).await;
    apply_save_result(state, events, index, result).await;
}

/// Shared failure policy for saves, inline or spawned:
///
/// - 404: the attempt was already submitted; deactivate the session
/// - 401: soft warning, the session keeps going
/// - anything else: swallowed, log only
pub(crate) async fn apply_save_result(
    state: &Arc<RwLock<SessionState>>,
    events: &Sender<SessionEvent>,
    index: u32,
    result: Result<()>,
) {
    match result {
        Ok(()) => {
            let _ = events.send(SessionEvent::AnswerSaved { index }).await;
        }
        Err(err) if err.is_not_found() => {
            {
                let mut st = state.write();
                // Only an active session deactivates; a submit in progress
                // finishes its own flow
                if st.phase == SessionPhase::Active {
                    st.phase = SessionPhase::Inactive;
                }
                st.autosave.deadline = None;
                st.autosave.dirty = false;
            }
            tracing::info!(
                question_index = index,
                "Save-answer returned 404 (attempt already submitted), deactivating session"
            );
            let _ = events.send(SessionEvent::SessionDeactivated).await;
        }
        Err(err) if err.is_unauthorized() => {
            tracing::warn!(
                question_index = index,
                "Save-answer hit an auth failure; surfacing soft warning only"
            );
            let _ = events.send(SessionEvent::AuthExpiredSoft).await;
        }
        Err(err) => {
            tracing::warn!(error = %err, question_index = index, "Autosave failed");
            let _ = events.send(SessionEvent::SaveFailed { index }).await;
        }
    }
}
