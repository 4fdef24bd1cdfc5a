//! # Assignment Module Endpoints
//!
//! Thin wrappers for the debate, writing, and vocabulary modules.

use super::client::ApiClient;
use crate::core::error::Result;
use shared::dto::assignments::{
    DebateAssignment, VocabularySet, WritingSubmissionRequest, WritingSubmissionResponse,
};

/// Fetch a debate assignment with its round structure.
pub async fn debate_assignment(
    client: &ApiClient,
    assignment_id: &str,
) -> Result<DebateAssignment> {
    client
        .get_json(&format!("/v1/student/debate/{}", assignment_id))
        .await
}

/// Submit a writing draft (or final submission).
#[tracing::instrument(skip(client, content), fields(assignment_id = %assignment_id, is_final = is_final))]
pub async fn submit_writing(
    client: &ApiClient,
    assignment_id: &str,
    content: &str,
    is_final: bool,
) -> Result<WritingSubmissionResponse> {
    let request = WritingSubmissionRequest {
        assignment_id: assignment_id.to_string(),
        content: content.to_string(),
        word_count: content.split_whitespace().count() as u32,
        is_final,
    };
    client.post_json("/v1/student/writing/submit", &request).await
}

/// Fetch a vocabulary set for practice.
pub async fn vocabulary_set(client: &ApiClient, set_id: &str) -> Result<VocabularySet> {
    client
        .get_json(&format!("/v1/student/vocabulary/{}", set_id))
        .await
}
