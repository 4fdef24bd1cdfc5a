//! # UMA Test Endpoints
//!
//! The platform's second test flavor. Attempt semantics are identical to the
//! standard test module; only the route prefix differs.

use super::client::ApiClient;
use crate::core::error::Result;
use shared::dto::tests::{
    IncidentType, SaveAnswerRequest, SaveAnswerResponse, SecurityIncidentRequest,
    SecurityIncidentResponse, StartTestResponse, SubmitTestResponse, UnlockRequest, UnlockResponse,
};

/// [`TestApi`](crate::core::service::TestApi) adapter that routes a session
/// through the UMA endpoints, so the same engine drives both test flavors.
pub struct UmaApi(pub std::sync::Arc<ApiClient>);

#[async_trait::async_trait]
impl crate::core::service::TestApi for UmaApi {
    async fn start_test(&self, test_id: &str) -> Result<StartTestResponse> {
        start_test(&self.0, test_id).await
    }

    async fn save_answer(
        &self,
        attempt_id: &str,
        question_index: u32,
        answer: &str,
        time_spent_seconds: u64,
    ) -> Result<()> {
        save_answer(&self.0, attempt_id, question_index, answer, time_spent_seconds)
            .await
            .map(|_| ())
    }

    async fn submit_test(&self, attempt_id: &str) -> Result<SubmitTestResponse> {
        submit_test(&self.0, attempt_id).await
    }

    async fn report_incident(
        &self,
        test_id: &str,
        incident: IncidentType,
    ) -> Result<SecurityIncidentResponse> {
        report_incident(&self.0, test_id, incident).await
    }

    async fn unlock_attempt(&self, attempt_id: &str, bypass_code: &str) -> Result<UnlockResponse> {
        unlock_attempt(&self.0, attempt_id, bypass_code).await
    }
}

/// Start or resume a UMA test attempt.
#[tracing::instrument(skip(client))]
pub async fn start_test(client: &ApiClient, test_id: &str) -> Result<StartTestResponse> {
    client
        .get_json(&format!("/v1/student/umatests/{}/start", test_id))
        .await
}

/// Persist one answer with its time-on-question.
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
            &format!("/v1/student/umatests/{}/save-answer", attempt_id),
            &request,
        )
        .await
}

/// Submit the attempt for grading.
#[tracing::instrument(skip(client))]
pub async fn submit_test(client: &ApiClient, attempt_id: &str) -> Result<SubmitTestResponse> {
    client
        .post_json(&format!("/v1/student/umatests/{}/submit", attempt_id), &())
        .await
}

/// Forward a detected anti-cheat event.
pub async fn report_incident(
    client: &ApiClient,
    test_id: &str,
    incident: IncidentType,
) -> Result<SecurityIncidentResponse> {
    let request = SecurityIncidentRequest {
        incident_type: incident,
    };
    client
        .post_json(
            &format!("/v1/student/umatests/{}/security-incident", test_id),
            &request,
        )
        .await
}

/// Redeem a bypass code for a locked attempt.
pub async fn unlock_attempt(
    client: &ApiClient,
    attempt_id: &str,
    bypass_code: &str,
) -> Result<UnlockResponse> {
    let request = UnlockRequest {
        bypass_code: bypass_code.to_string(),
    };
    client
        .post_json(
            &format!("/v1/student/umatests/{}/unlock", attempt_id),
            &request,
        )
        .await
}
