//! Debate, writing, and vocabulary module DTOs.
//!
//! Thin mirrors of the backend shapes; the client does no business logic
//! with these beyond request shaping.

use serde::{Deserialize, Serialize};

/// A debate assignment with its resolution and per-round structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebateAssignment {
    pub id: String,
    pub title: String,
    pub resolution: String,
    pub rounds: u32,
    pub current_round: u32,
}

/// Request body for submitting a writing assignment draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WritingSubmissionRequest {
    pub assignment_id: String,
    pub content: String,
    pub word_count: u32,
    pub is_final: bool,
}

/// Response to a writing submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WritingSubmissionResponse {
    pub submission_id: String,
    pub status: String,
}

/// A single vocabulary entry within a set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabularyWord {
    pub word: String,
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_sentence: Option<String>,
}

/// A vocabulary set assigned for practice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabularySet {
    pub id: String,
    pub title: String,
    pub words: Vec<VocabularyWord>,
}
