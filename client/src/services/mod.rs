//! # External Services
//!
//! Backend HTTP client and token/session storage.

pub mod api;
pub mod token;

pub use api::ApiClient;
pub use token::TokenStore;
