//! # Session State Types
//!
//! All state for one test-taking session: the in-memory answer map, the
//! current question pointer, mirrored attempt fields, autosave bookkeeping,
//! and the security phase.
//!
//! The backend is authoritative for attempt status, violation count, and the
//! lock flag; everything here is a mirror of the last response seen.

use shared::dto::tests::{AttemptStatus, StartTestResponse, TestQuestion};
use std::collections::HashMap;
use tokio::time::Instant;
use uuid::Uuid;

/// Lifecycle of the client-side session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Attempt in progress; edits and autosave are live.
    Active,
    /// Submit requested; autosave stops arming.
    Submitting,
    /// Submission finished (successfully or not - the student is never
    /// stranded on an error screen).
    Completed,
    /// The backend reported the attempt gone (404 on save); no further
    /// saves are issued for the rest of the session.
    Inactive,
}

/// Security/lockout state machine, driven entirely by backend verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityPhase {
    /// No violations reported, or none that drew a warning.
    Clear,
    /// The backend issued a warning after a reported violation.
    Warned { violation_count: u32 },
    /// The backend locked the attempt; only an unlock command is accepted.
    Locked,
}

/// Attempt fields mirrored from the last backend response.
#[derive(Debug, Clone)]
pub struct AttemptInfo {
    pub attempt_id: String,
    pub test_id: String,
    pub status: AttemptStatus,
    pub attempt_number: u32,
    pub total_questions: u32,
    pub violation_count: u32,
}

/// Autosave bookkeeping.
#[derive(Debug)]
pub(crate) struct AutosaveState {
    /// Debounce deadline; re-armed on every edit, `None` when idle.
    pub deadline: Option<Instant>,
    /// A spawned save is still unresolved.
    pub in_flight: bool,
    /// The current answer changed since it was last handed to a save.
    pub dirty: bool,
}

impl AutosaveState {
    fn idle() -> Self {
        Self {
            deadline: None,
            in_flight: false,
            dirty: false,
        }
    }
}

/// Full state of one test-taking session.
#[derive(Debug)]
pub struct SessionState {
    pub attempt: AttemptInfo,
    pub questions: Vec<TestQuestion>,
    /// Answer map keyed by question index.
    pub answers: HashMap<u32, String>,
    pub current_index: u32,
    /// When the student landed on the current question (time-on-question).
    pub question_started: Instant,
    pub phase: SessionPhase,
    pub security: SecurityPhase,
    pub(crate) autosave: AutosaveState,
    /// Correlates all log lines of this session.
    pub trace_id: Uuid,
}

impl SessionState {
    /// Build session state from a start/resume response.
    ///
    /// Seeds the answer map from `saved_answers` (keys the backend renders as
    /// strings; unparsable keys are dropped), the question pointer from
    /// `current_question`, and the security phase from the reported
    /// violation count and lock flag.
    pub fn new(start: StartTestResponse) -> Self {
        let answers = start
            .saved_answers
            .iter()
            .filter_map(|(key, value)| key.parse::<u32>().ok().map(|idx| (idx, value.clone())))
            .collect();

        let security = if start.is_locked {
            SecurityPhase::Locked
        } else if start.violation_count > 0 {
            SecurityPhase::Warned {
                violation_count: start.violation_count,
            }
        } else {
            SecurityPhase::Clear
        };

        let phase = if start.status == AttemptStatus::InProgress {
            SessionPhase::Active
        } else {
            SessionPhase::Inactive
        };

        let last_index = start.total_questions.saturating_sub(1);

        Self {
            attempt: AttemptInfo {
                attempt_id: start.test_attempt_id,
                test_id: start.test_id,
                status: start.status,
                attempt_number: start.attempt_number,
                total_questions: start.total_questions,
                violation_count: start.violation_count,
            },
            questions: start.questions,
            answers,
            current_index: start.current_question.min(last_index),
            question_started: Instant::now(),
            phase,
            security,
            autosave: AutosaveState::idle(),
            trace_id: Uuid::new_v4(),
        }
    }

    /// Replace everything with a fresh attempt (bypass-code unlock resets the
    /// attempt from scratch). The trace id survives so logs stay correlated.
    pub fn reset_from(&mut self, start: StartTestResponse) {
        let trace_id = self.trace_id;
        *self = SessionState::new(start);
        self.trace_id = trace_id;
    }

    /// Whether answer edits are currently accepted.
    pub fn can_edit(&self) -> bool {
        self.phase == SessionPhase::Active && self.security != SecurityPhase::Locked
    }

    /// The current question's answer, if any.
    pub fn current_answer(&self) -> Option<&String> {
        self.answers.get(&self.current_index)
    }

    /// Whole seconds spent on the current question so far.
    pub fn time_on_question(&self) -> u64 {
        self.question_started.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn start_response() -> StartTestResponse {
        StartTestResponse {
            test_attempt_id: "att-1".into(),
            test_id: "t-1".into(),
            status: AttemptStatus::InProgress,
            attempt_number: 1,
            current_question: 2,
            total_questions: 5,
            saved_answers: HashMap::from([
                ("0".to_string(), "alpha".to_string()),
                ("2".to_string(), "gamma".to_string()),
                ("bogus".to_string(), "dropped".to_string()),
            ]),
            violation_count: 0,
            is_locked: false,
            questions: vec![],
        }
    }

    #[tokio::test]
    async fn test_new_seeds_answers_and_pointer() {
        let state = SessionState::new(start_response());

        assert_eq!(state.current_index, 2);
        assert_eq!(state.answers.get(&0).map(String::as_str), Some("alpha"));
        assert_eq!(state.answers.get(&2).map(String::as_str), Some("gamma"));
        // Unparsable key dropped
        assert_eq!(state.answers.len(), 2);
        assert_eq!(state.phase, SessionPhase::Active);
        assert_eq!(state.security, SecurityPhase::Clear);
        assert!(state.can_edit());
    }

    #[tokio::test]
    async fn test_new_with_lock_and_violations() {
        let mut start = start_response();
        start.violation_count = 3;
        start.is_locked = true;

        let state = SessionState::new(start);
        assert_eq!(state.security, SecurityPhase::Locked);
        assert!(!state.can_edit());
    }

    #[tokio::test]
    async fn test_new_with_warning_only() {
        let mut start = start_response();
        start.violation_count = 1;

        let state = SessionState::new(start);
        assert_eq!(
            state.security,
            SecurityPhase::Warned { violation_count: 1 }
        );
        assert!(state.can_edit());
    }

    #[tokio::test]
    async fn test_submitted_attempt_starts_inactive() {
        let mut start = start_response();
        start.status = AttemptStatus::Submitted;

        let state = SessionState::new(start);
        assert_eq!(state.phase, SessionPhase::Inactive);
        assert!(!state.can_edit());
    }

    #[tokio::test]
    async fn test_out_of_range_pointer_is_clamped() {
        let mut start = start_response();
        start.current_question = 99;

        let state = SessionState::new(start);
        assert_eq!(state.current_index, 4);
    }

    #[tokio::test]
    async fn test_reset_keeps_trace_id() {
        let mut state = SessionState::new(start_response());
        let trace_id = state.trace_id;
        state.answers.insert(1, "edited".into());

        state.reset_from(start_response());
        assert_eq!(state.trace_id, trace_id);
        assert!(!state.answers.contains_key(&1));
    }
}
