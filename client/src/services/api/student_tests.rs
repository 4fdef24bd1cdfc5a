//! # Student Test Endpoints
//!
//! The test attempt lifecycle: start/resume, answer autosave, submission,
//! security incident reporting, and bypass-code unlock.

use super::client::ApiClient;
use crate::core::error::Result;
use shared::dto::tests::{
    IncidentType, SaveAnswerRequest, SaveAnswerResponse, SecurityIncidentRequest,
    SecurityIncidentResponse, StartTestResponse, SubmitTestResponse, TestResultsResponse,
    UnlockRequest, UnlockResponse,
};

/// Start or resume an attempt for a test.
#[tracing::instrument(skip(client))]
pub async fn start_test(client: &ApiClient, test_id: &str) -> Result<StartTestResponse> {
    tracing::info!("Starting test attempt");
    let response: StartTestResponse = client
        .get_json(&format!("/v1/student/tests/{}/start", test_id))
        .await?;
    tracing::info!(
        attempt_id = %response.test_attempt_id,
        attempt_number = response.attempt_number,
        resumed_answers = response.saved_answers.len(),
        locked = response.is_locked,
        "Test attempt ready"
    );
    Ok(response)
}

/// Persist one answer with its time-on-question.
#[tracing::instrument(skip(client, answer), fields(question_index = question_index))]
pub async fn save_answer(
    client: &ApiClient,
    attempt_id: &str,
    question_index: u32,
    answer: &str,
    time_spent_seconds: u64,
) -> Result<SaveAnswerResponse> {
    let request = SaveAnswerRequest {
        question_index,
        answer: answer.to_string(),
        time_spent_seconds,
    };
    client
        .post_json(
            &format!("/v1/student/tests/{}/save-answer", attempt_id),
            &request,
        )
        .await
}

/// Submit the attempt for grading.
#[tracing::instrument(skip(client))]
pub async fn submit_test(client: &ApiClient, attempt_id: &str) -> Result<SubmitTestResponse> {
    tracing::info!("Submitting test attempt");
    client
        .post_json(&format!("/v1/student/tests/{}/submit", attempt_id), &())
        .await
}

/// Forward a detected anti-cheat event. The backend counts violations and
/// returns its verdict; the client never computes thresholds itself.
#[tracing::instrument(skip(client))]
pub async fn report_incident(
    client: &ApiClient,
    test_id: &str,
    incident: IncidentType,
) -> Result<SecurityIncidentResponse> {
    let request = SecurityIncidentRequest {
        incident_type: incident,
    };
    let response: SecurityIncidentResponse = client
        .post_json(
            &format!("/v1/student/tests/{}/security-incident", test_id),
            &request,
        )
        .await?;
    tracing::warn!(
        violation_count = response.violation_count,
        locked = response.locked,
        "Security incident reported"
    );
    Ok(response)
}

/// Redeem a bypass code for a locked attempt.
///
/// The doubled `tests/tests` path segment is the backend's actual route.
#[tracing::instrument(skip(client, bypass_code))]
pub async fn unlock_attempt(
    client: &ApiClient,
    attempt_id: &str,
    bypass_code: &str,
) -> Result<UnlockResponse> {
    tracing::info!("Attempting unlock with bypass code");
    let request = UnlockRequest {
        bypass_code: bypass_code.to_string(),
    };
    client
        .post_json(
            &format!("/v1/student/tests/tests/{}/unlock", attempt_id),
            &request,
        )
        .await
}

/// Fetch graded results for a finished attempt.
pub async fn test_results(client: &ApiClient, attempt_id: &str) -> Result<TestResultsResponse> {
    client
        .get_json(&format!("/v1/student/tests/{}/results", attempt_id))
        .await
}
