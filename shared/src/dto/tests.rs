//! Test attempt, autosave, and security-incident DTOs.
//!
//! The backend is authoritative for all attempt state: status, current
//! question pointer, violation count, and lock flag. The client only mirrors
//! the values returned here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle status of a test attempt, owned by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    InProgress,
    Submitted,
    Evaluated,
}

/// A single question within a test, as served to the student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestQuestion {
    pub index: u32,
    pub prompt: String,
    /// Optional reading passage or source material attached to the question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage: Option<String>,
}

/// Response to `GET /v1/student/tests/{test_id}/start`.
///
/// Starting a test either creates a fresh attempt or resumes the existing
/// in-progress one; `saved_answers` carries whatever the backend has from
/// earlier autosaves, keyed by question index rendered as a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartTestResponse {
    pub test_attempt_id: String,
    pub test_id: String,
    pub status: AttemptStatus,
    pub attempt_number: u32,
    pub current_question: u32,
    pub total_questions: u32,
    #[serde(default)]
    pub saved_answers: HashMap<String, String>,
    pub violation_count: u32,
    pub is_locked: bool,
    #[serde(default)]
    pub questions: Vec<TestQuestion>,
}

/// Request body for `POST /v1/student/tests/{attempt_id}/save-answer`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveAnswerRequest {
    pub question_index: u32,
    pub answer: String,
    pub time_spent_seconds: u64,
}

/// Response body for a successful save-answer call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveAnswerResponse {
    pub saved: bool,
}

/// Response to `POST /v1/student/tests/{attempt_id}/submit`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitTestResponse {
    pub test_attempt_id: String,
    pub status: AttemptStatus,
}

/// Kind of anti-cheat event detected on the client.
///
/// The client only forwards these; the backend counts violations and decides
/// warning/lock outcomes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IncidentType {
    TabSwitch,
    FocusLoss,
    ContextMenu,
    CopyAttempt,
    PasteAttempt,
}

/// Request body for `POST /v1/student/tests/{test_id}/security-incident`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecurityIncidentRequest {
    pub incident_type: IncidentType,
}

/// Backend verdict after an incident report.
///
/// `warning_issued` and `locked` are the only inputs to the client-side
/// security state machine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecurityIncidentResponse {
    pub violation_count: u32,
    pub warning_issued: bool,
    pub locked: bool,
}

/// Request body for `POST /v1/student/tests/tests/{attempt_id}/unlock`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnlockRequest {
    pub bypass_code: String,
}

/// Response to a successful unlock: a fresh attempt, started from scratch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnlockResponse {
    pub attempt: StartTestResponse,
}

/// Graded results for a finished attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestResultsResponse {
    pub test_attempt_id: String,
    pub status: AttemptStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_status_wire_format() {
        let json = serde_json::to_string(&AttemptStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let status: AttemptStatus = serde_json::from_str("\"evaluated\"").unwrap();
        assert_eq!(status, AttemptStatus::Evaluated);
    }

    #[test]
    fn test_start_response_defaults_missing_maps() {
        // Older backend versions omit saved_answers/questions on a fresh attempt
        let json = r#"{
            "test_attempt_id": "att-1",
            "test_id": "t-9",
            "status": "in_progress",
            "attempt_number": 1,
            "current_question": 0,
            "total_questions": 5,
            "violation_count": 0,
            "is_locked": false
        }"#;
        let resp: StartTestResponse = serde_json::from_str(json).unwrap();
        assert!(resp.saved_answers.is_empty());
        assert!(resp.questions.is_empty());
    }

    #[test]
    fn test_incident_type_wire_format() {
        let json = serde_json::to_string(&IncidentType::TabSwitch).unwrap();
        assert_eq!(json, "\"tab_switch\"");
    }
}
