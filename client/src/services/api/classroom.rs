//! # Classroom Endpoints
//!
//! Listing the student's classrooms and their assignments.

use super::client::ApiClient;
use crate::core::error::Result;
use shared::dto::classroom::{
    AssignmentListResponse, Classroom, ClassroomAssignment, ClassroomListResponse,
    JoinClassroomRequest,
};

/// List the classrooms the student belongs to.
pub async fn list_classrooms(client: &ApiClient) -> Result<Vec<Classroom>> {
    let response: ClassroomListResponse = client.get_json("/v1/student/classrooms").await?;
    Ok(response.classrooms)
}

/// List assignments for one classroom.
pub async fn classroom_assignments(
    client: &ApiClient,
    classroom_id: &str,
) -> Result<Vec<ClassroomAssignment>> {
    let response: AssignmentListResponse = client
        .get_json(&format!(
            "/v1/student/classrooms/{}/assignments",
            classroom_id
        ))
        .await?;
    Ok(response.assignments)
}

/// Join a classroom by invite code.
#[tracing::instrument(skip(client))]
pub async fn join_classroom(client: &ApiClient, class_code: &str) -> Result<Classroom> {
    let request = JoinClassroomRequest {
        class_code: class_code.to_string(),
    };
    client.post_json("/v1/student/classrooms/join", &request).await
}
