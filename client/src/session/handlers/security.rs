//! # Security Handlers
//!
//! Incident forwarding and bypass-code unlock. The client holds no
//! violation-counting logic of its own: the state machine moves only on the
//! values the backend returns.

use crate::core::service::TestApi;
use crate::session::events::SessionEvent;
use crate::session::state::{SecurityPhase, SessionPhase, SessionState};
use crate::utils::validation::validate_bypass_code;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::tests::IncidentType;
use std::sync::Arc;

/// Forward a detected anti-cheat event and apply the backend's verdict.
pub(crate) async fn handle_incident(
    api: &Arc<dyn TestApi>,
    state: &Arc<RwLock<SessionState>>,
    events: &Sender<SessionEvent>,
    kind: IncidentType,
) {
    let test_id = {
        let st = state.read();
        if st.phase != SessionPhase::Active || st.security == SecurityPhase::Locked {
            return;
        }
        st.attempt.test_id.clone()
    };

    let verdict = match api.report_incident(&test_id, kind).await {
        Ok(verdict) => verdict,
        Err(err) => {
            // Losing an incident report must never break the student's session
            tracing::warn!(error = %err, incident = ?kind, "Failed to report security incident");
            return;
        }
    };

    {
        let mut st = state.write();
        st.attempt.violation_count = verdict.violation_count;
        if verdict.locked {
            st.security = SecurityPhase::Locked;
            st.autosave.deadline = None;
            st.autosave.dirty = false;
        } else if verdict.warning_issued {
            st.security = SecurityPhase::Warned {
                violation_count: verdict.violation_count,
            };
        }
    }

    if verdict.locked {
        let _ = events
            .send(SessionEvent::SessionLocked {
                violation_count: verdict.violation_count,
            })
            .await;
    } else if verdict.warning_issued {
        let _ = events
            .send(SessionEvent::SecurityWarning {
                violation_count: verdict.violation_count,
            })
            .await;
    }
}

/// Redeem a bypass code. Success resets the whole session from the returned
/// fresh attempt.
pub(crate) async fn handle_unlock(
    api: &Arc<dyn TestApi>,
    state: &Arc<RwLock<SessionState>>,
    events: &Sender<SessionEvent>,
    bypass_code: String,
) {
    {
        let st = state.read();
        if st.security != SecurityPhase::Locked {
            return;
        }
    }

    let check = validate_bypass_code(&bypass_code);
    if !check.is_valid {
        let _ = events
            .send(SessionEvent::UnlockFailed {
                message: check.error.unwrap_or_else(|| "Invalid code".to_string()),
            })
            .await;
        return;
    }

    let attempt_id = state.read().attempt.attempt_id.clone();
    match api.unlock_attempt(&attempt_id, &bypass_code).await {
        Ok(response) => {
            state.write().reset_from(response.attempt);
            tracing::info!("Attempt unlocked, session reset to fresh attempt");
            let _ = events.send(SessionEvent::SessionUnlocked).await;
        }
        Err(err) => {
            tracing::warn!(error = %err, "Unlock attempt failed");
            let _ = events
                .send(SessionEvent::UnlockFailed {
                    message: err.to_string(),
                })
                .await;
        }
    }
}
