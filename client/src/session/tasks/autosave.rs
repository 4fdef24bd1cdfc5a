//! # Autosave Task
//!
//! Fires when the debounce deadline elapses: captures the current question's
//! index and text, spawns the save, and reports completion back to the
//! engine loop. The in-flight flag keeps saves from overlapping; when the
//! timer collides with an unresolved save, the deadline is re-armed so the
//! dirty answer is retried instead of dropped.

use super::TaskOutcome;
use crate::core::service::TestApi;
use crate::session::events::SessionEvent;
use crate::session::handlers::answer;
use crate::session::state::{SessionPhase, SessionState};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// The debounce deadline elapsed: spawn a save for the current answer.
pub(crate) fn fire(
    api: &Arc<dyn TestApi>,
    state: &Arc<RwLock<SessionState>>,
    outcome_tx: &Sender<TaskOutcome>,
    autosave_delay: Duration,
) {
    let payload = {
        let mut st = state.write();
        st.autosave.deadline = None;

        if st.phase != SessionPhase::Active {
            return;
        }
        if st.autosave.in_flight {
            // Previous save unresolved; retry after it settles
            st.autosave.deadline = Some(Instant::now() + autosave_delay);
            return;
        }
        if !st.autosave.dirty {
            return;
        }

        st.autosave.dirty = false;
        st.autosave.in_flight = true;

        let index = st.current_index;
        let answer = st.answers.get(&index).cloned().unwrap_or_default();
        (
            st.attempt.attempt_id.clone(),
            index,
            answer,
            st.time_on_question(),
        )
    };

    let (attempt_id, index, answer, elapsed) = payload;
    let api = Arc::clone(api);
    let tx = outcome_tx.clone();

    tokio::spawn(async move {
        let result = api
            .save_answer(&attempt_id, index, &answer, elapsed)
            .await;
        // Index travels with the result so a save resolving after
        // navigation is still attributed to the question it was for
        let _ = tx.send(TaskOutcome::SaveFinished { index, result }).await;
    });
}

/// A spawned save finished; clear the in-flight flag and apply the shared
/// save-failure policy.
pub(crate) async fn apply_outcome(
    state: &Arc<RwLock<SessionState>>,
    events: &Sender<SessionEvent>,
    outcome: TaskOutcome,
) {
    let TaskOutcome::SaveFinished { index, result } = outcome;

    state.write().autosave.in_flight = false;
    answer::apply_save_result(state, events, index, result).await;
}
