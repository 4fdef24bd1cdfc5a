//! # Authentication Endpoints
//!
//! Login and logout. Token refresh lives inside [`ApiClient`] because it is
//! part of the request pipeline, not a user-facing operation.

use super::client::ApiClient;
use crate::core::error::Result;
use shared::dto::auth::{AuthResponse, LoginRequest};

/// Login with username/email and password. On success the returned tokens
/// are stored in the client's [`crate::services::token::TokenStore`].
#[tracing::instrument(skip(client, password), fields(email_or_username = %email_or_username))]
pub async fn login(
    client: &ApiClient,
    email_or_username: String,
    password: String,
) -> Result<AuthResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest {
        email_or_username,
        password,
    };

    let result: Result<AuthResponse> = client.post_json_public("/v1/auth/login", &request).await;

    match &result {
        Ok(auth) => {
            client.tokens().store(auth);
            tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
        }
        Err(err) => {
            tracing::warn!(error = %err, duration_ms = start.elapsed().as_millis(), "Login failed");
        }
    }

    result
}

/// Log out: best-effort invalidation on the backend, then drop local tokens.
pub async fn logout(client: &ApiClient) -> Result<()> {
    let result: Result<serde_json::Value> = client.post_json("/v1/auth/logout", &()).await;
    client.tokens().clear();

    match result {
        Ok(_) => Ok(()),
        Err(err) => {
            // Local logout already happened; the backend call is advisory
            tracing::debug!(error = %err, "Backend logout call failed");
            Ok(())
        }
    }
}
