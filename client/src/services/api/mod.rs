//! # Backend API Client Module
//!
//! HTTP client for the Academy backend REST API. One async function per
//! backend endpoint; no business logic beyond request shaping.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and documentation
//! ├── client.rs        - ApiClient, token refresh, and 401 replay
//! ├── auth.rs          - Authentication endpoints (login, logout)
//! ├── student_tests.rs - Test attempt endpoints (start, save, submit, incident, unlock)
//! ├── umatest.rs       - UMA test attempt endpoints (same shape, /umatests prefix)
//! ├── classroom.rs     - Classroom listing and join endpoints
//! └── assignments.rs   - Debate / writing / vocabulary endpoints
//! ```

pub mod assignments;
pub mod auth;
pub mod classroom;
pub mod client;
pub mod student_tests;
pub mod umatest;

pub use client::ApiClient;
