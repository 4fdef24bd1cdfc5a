//! # Submission Handler
//!
//! Policy: never strand the student. The flow always reaches completion;
//! submit errors are logged, not surfaced as blockers, on the theory that
//! the backend has already durably recorded the attempt.

use crate::core::service::TestApi;
use crate::session::events::SessionEvent;
use crate::session::handlers::answer;
use crate::session::state::{SecurityPhase, SessionPhase, SessionState};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) async fn handle_submit(
    api: &Arc<dyn TestApi>,
    state: &Arc<RwLock<SessionState>>,
    events: &Sender<SessionEvent>,
) {
    {
        let mut st = state.write();
        if st.security == SecurityPhase::Locked {
            return;
        }
        if matches!(st.phase, SessionPhase::Submitting | SessionPhase::Completed) {
            return;
        }
        // Autosave stops arming from here on
        st.phase = SessionPhase::Submitting;
        st.autosave.deadline = None;
    }

    // Best-effort flush of the current answer; failures follow the usual
    // save policy and never block submission
    answer::flush_current(api, state, events).await;

    let attempt_id = state.read().attempt.attempt_id.clone();
    match api.submit_test(&attempt_id).await {
        Ok(response) => {
            let mut st = state.write();
            st.attempt.status = response.status;
            tracing::info!(status = ?response.status, "Test attempt submitted");
        }
        Err(err) => {
            tracing::warn!(error = %err, "Submit call failed; proceeding to completion anyway");
        }
    }

    {
        let mut st = state.write();
        st.phase = SessionPhase::Completed;
        st.autosave.dirty = false;
        st.autosave.deadline = None;
    }
    let _ = events.send(SessionEvent::Submitted).await;
}
