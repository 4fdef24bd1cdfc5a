//! # Core Types
//!
//! Error types, configuration, and service traits shared across the client.

pub mod config;
pub mod error;
pub mod service;

pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use service::TestApi;
