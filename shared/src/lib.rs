//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the student client and the
//! Academy backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and token refresh DTOs
//!   - **[`dto::tests`]**: Test attempt, autosave, and security-incident DTOs
//!   - **[`dto::classroom`]**: Classroom and assignment listing DTOs
//!   - **[`dto::assignments`]**: Debate / writing / vocabulary module DTOs
//! - **[`utils`]**: Shared display helpers (duration formatting, name truncation)
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using default `serde` behavior:
//! - Field names are **snake_case** in Rust and on the wire
//! - Optional fields are omitted when `None`
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage in the client
//!
//! ```rust,no_run
//! use shared::dto::tests::{SaveAnswerRequest, SaveAnswerResponse};
//!
//! let request = SaveAnswerRequest {
//!     question_index: 3,
//!     answer: "The author argues that...".to_string(),
//!     time_spent_seconds: 42,
//! };
//! # let _ = request;
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
