//! # Navigation Handler
//!
//! Moving between questions: flush the current answer first, then move the
//! pointer. The index is engine state only; the backend learns positions
//! through the saves themselves.

use crate::core::service::TestApi;
use crate::session::events::{Navigation, SessionEvent};
use crate::session::handlers::answer;
use crate::session::state::{SecurityPhase, SessionPhase, SessionState};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::time::Instant;

pub(crate) async fn handle_navigate(
    api: &Arc<dyn TestApi>,
    state: &Arc<RwLock<SessionState>>,
    events: &Sender<SessionEvent>,
    nav: Navigation,
) {
    {
        let st = state.read();
        if st.security == SecurityPhase::Locked || st.phase == SessionPhase::Submitting {
            return;
        }
    }

    // Flush before moving so the save targets the question being left
    answer::flush_current(api, state, events).await;

    let mut st = state.write();
    let last_index = st.attempt.total_questions.saturating_sub(1);
    let target = match nav {
        Navigation::Next => st.current_index.saturating_add(1),
        Navigation::Prev => st.current_index.saturating_sub(1),
        Navigation::Jump(index) => index,
    };

    st.current_index = target.min(last_index);
    st.question_started = Instant::now();
}
