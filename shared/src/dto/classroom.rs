//! Classroom and assignment listing DTOs.

use serde::{Deserialize, Serialize};

/// A classroom the student belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Classroom {
    pub id: String,
    pub name: String,
    pub teacher_name: String,
    pub student_count: u32,
}

/// An assignment attached to a classroom.
///
/// `module` distinguishes the platform's assignment flavors (reading,
/// vocabulary, debate, writing, lecture, test, umatest).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassroomAssignment {
    pub id: String,
    pub classroom_id: String,
    pub module: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub completed: bool,
}

/// Response to `GET /v1/student/classrooms`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassroomListResponse {
    pub classrooms: Vec<Classroom>,
}

/// Response to `GET /v1/student/classrooms/{id}/assignments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignmentListResponse {
    pub assignments: Vec<ClassroomAssignment>,
}

/// Request body for joining a classroom by invite code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinClassroomRequest {
    pub class_code: String,
}
