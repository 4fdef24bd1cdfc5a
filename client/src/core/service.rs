//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::error::Result;
use async_trait::async_trait;
use shared::dto::tests::{
    IncidentType, SecurityIncidentResponse, StartTestResponse, SubmitTestResponse, UnlockResponse,
};

/// The slice of the backend API the test-session engine depends on.
///
/// Implemented by [`crate::services::api::ApiClient`] for production and by
/// hand-rolled mocks in the integration tests.
#[async_trait]
pub trait TestApi: Send + Sync {
    /// Start (or resume) an attempt for a test.
    async fn start_test(&self, test_id: &str) -> Result<StartTestResponse>;

    /// Persist one answer with its time-on-question.
    async fn save_answer(
        &self,
        attempt_id: &str,
        question_index: u32,
        answer: &str,
        time_spent_seconds: u64,
    ) -> Result<()>;

    /// Submit the attempt for grading.
    async fn submit_test(&self, attempt_id: &str) -> Result<SubmitTestResponse>;

    /// Forward a detected anti-cheat event; the response carries the
    /// backend's verdict (warning / lock).
    async fn report_incident(
        &self,
        test_id: &str,
        incident: IncidentType,
    ) -> Result<SecurityIncidentResponse>;

    /// Redeem a bypass code for a locked attempt, resetting it from scratch.
    async fn unlock_attempt(&self, attempt_id: &str, bypass_code: &str) -> Result<UnlockResponse>;
}
