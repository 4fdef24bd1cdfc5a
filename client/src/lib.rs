//! # Academy Student Client - Library Root
//!
//! A headless client library for the Academy learning platform backend.
//! It owns everything between the rendering layer and the wire: token
//! storage, an authenticated HTTP client with proactive refresh, thin
//! per-endpoint API modules, and the test-taking session engine
//! (autosave, navigation, submission, security lockout).
//!
//! ## Architecture
//!
//! ```text
//! embedder (UI, any framework)
//!   │  SessionCommand                 ▲  SessionEvent
//!   ▼                                 │
//! ┌──────────────────────────────────────────────────┐
//! │  session::TestSession (event loop, tokio task)   │
//! │  - answer map, current question, debounce timer  │
//! │  - security FSM driven by backend verdicts       │
//! └────────────────────┬─────────────────────────────┘
//!                      │ TestApi trait
//! ┌────────────────────▼─────────────────────────────┐
//! │  services::api::ApiClient                        │
//! │  - bearer attach, proactive refresh              │
//! │  - single-flight refresh, retry-once on 401      │
//! └────────────────────┬─────────────────────────────┘
//!                      │ HTTP (JSON)
//!                      ▼
//!               Academy backend
//! ```
//!
//! ## Module Structure
//!
//! - **core**: error type, configuration, and the [`core::service::TestApi`]
//!   trait seam used for dependency injection in tests
//! - **services**: token store and the backend HTTP client
//!   - `api`: one async function per backend endpoint
//!   - `token`: access/refresh token storage with expiry bookkeeping
//! - **session**: the test-session engine (state, events, handlers, tasks)
//! - **logging**: tracing initialization with rotating file output
//! - **utils**: input validation helpers
//!
//! ## Core Concepts
//!
//! The session engine is a single tokio task owning a `tokio::select!` loop
//! over the command channel, the autosave deadline, and completions of
//! spawned save tasks. State lives in `Arc<RwLock<SessionState>>` and locks
//! are held briefly. Everything the backend is authoritative for (attempt
//! status, violation count, lock flag) is only mirrored, never computed.

pub mod core;
pub mod logging;
pub mod services;
pub mod session;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::{ApiError, Result};
pub use services::api::ApiClient;
pub use session::{SessionCommand, SessionEvent, TestSession};
