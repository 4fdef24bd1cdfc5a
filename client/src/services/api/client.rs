//! # API Client
//!
//! Authenticated HTTP client for the Academy backend.
//!
//! Responsibilities beyond plain request sending:
//!
//! - attach the bearer token from the shared [`TokenStore`]
//! - proactively refresh an access token that is about to expire
//! - keep refresh **single-flight**: requests that hit the client while a
//!   refresh is in flight wait on that refresh and then proceed with the new
//!   token, instead of racing their own refresh calls
//! - retry a request exactly once after a 401
//! - on unrecoverable auth failure, distinguish exam endpoints (soft
//!   [`ApiError::Unauthorized`], never interrupt a test in progress) from
//!   everything else ([`ApiError::SessionExpired`], embedder logs out)

use crate::core::config::ClientConfig;
use crate::core::error::{ApiError, Result};
use crate::services::token::TokenStore;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dto::auth::{ErrorResponse, RefreshRequest, RefreshResponse};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Serializes token refreshes so only one is ever in flight.
///
/// This is the request-buffering queue of the original design expressed with
/// an async mutex: late arrivals block on [`RefreshGate::run`], and the
/// double-check after acquiring the lock lets them skip the refresh a
/// previous holder already completed.
pub(crate) struct RefreshGate {
    lock: Mutex<()>,
}

impl RefreshGate {
    pub(crate) fn new() -> Self {
        Self { lock: Mutex::new(()) }
    }

    /// Run `refresh` unless `already_fresh` reports that the token this
    /// caller considered stale has been replaced in the meantime.
    ///
    /// Returns `Ok(true)` when this caller performed the refresh itself.
    pub(crate) async fn run<C, F, Fut>(&self, already_fresh: C, refresh: F) -> Result<bool>
    where
        C: Fn() -> bool,
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<()>>,
    {
        if already_fresh() {
            return Ok(false);
        }

        let _guard = self.lock.lock().await;

        // Re-check: the flight we waited on may have refreshed for us
        if already_fresh() {
            return Ok(false);
        }

        refresh().await?;
        Ok(true)
    }
}

/// HTTP client for communicating with the Academy backend.
///
/// Cheap to share as `Arc<ApiClient>`; the inner `reqwest::Client` keeps a
/// connection pool for HTTP/2 multiplexing.
pub struct ApiClient {
    pub(crate) http: Client,
    config: ClientConfig,
    tokens: Arc<TokenStore>,
    refresh_gate: RefreshGate,
}

impl ApiClient {
    /// Create a client with the given configuration and an empty token store.
    ///
    /// The client is configured with a request timeout to prevent a hung
    /// backend from stalling the session engine.
    pub fn new(config: ClientConfig) -> Self {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            tokens: Arc::new(TokenStore::new()),
            refresh_gate: RefreshGate::new(),
            config,
        }
    }

    /// Create a client configured from the environment (`ACADEMY_API_URL`).
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Handle to the shared token store (for the embedder's login screen).
    pub fn tokens(&self) -> Arc<TokenStore> {
        Arc::clone(&self.tokens)
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.config.api_url
    }

    // ==================== REQUEST HELPERS ====================

    /// Authorized GET returning a decoded JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request_with_auth(Method::GET, path, None).await?;
        decode(response).await
    }

    /// Authorized POST with a JSON body, returning a decoded JSON body.
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self.request_with_auth(Method::POST, path, Some(body)).await?;
        decode(response).await
    }

    /// Unauthenticated POST (login). No bearer token, no refresh handling.
    pub(crate) async fn post_json_public<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await?;
        let response = check_status(response).await?;
        decode(response).await
    }

    /// Send an authorized request, refreshing proactively and replaying once
    /// on 401.
    async fn request_with_auth(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response> {
        self.ensure_fresh_token().await;

        let response = self.send_once(method.clone(), path, body.as_ref()).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return check_status(response).await;
        }

        tracing::debug!(path, "Request returned 401, refreshing and replaying once");
        if let Err(err) = self.refresh_tokens().await {
            tracing::warn!(error = %err, path, "Token refresh after 401 failed");
            return Err(self.auth_failure(path));
        }

        let response = self.send_once(method, path, body.as_ref()).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(self.auth_failure(path));
        }
        check_status(response).await
    }

    async fn send_once(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response> {
        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url(), path));

        if let Some(token) = self.tokens.access_token() {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    // ==================== TOKEN REFRESH ====================

    /// Refresh before sending when the access token is inside the proactive
    /// window. Failures are non-fatal here; the 401 path gets the final say.
    async fn ensure_fresh_token(&self) {
        if !self.tokens.expires_within(self.config.refresh_window) {
            return;
        }
        if let Err(err) = self.refresh_tokens().await {
            tracing::warn!(error = %err, "Proactive token refresh failed, continuing with current token");
        }
    }

    /// Single-flight refresh: concurrent callers wait on the in-flight
    /// refresh and skip their own once the token has rotated.
    async fn refresh_tokens(&self) -> Result<()> {
        let stale = self.tokens.access_token();
        self.refresh_gate
            .run(|| self.tokens.access_token() != stale, || self.do_refresh())
            .await
            .map(|_| ())
    }

    async fn do_refresh(&self) -> Result<()> {
        let Some(refresh_token) = self.tokens.refresh_token() else {
            return Err(ApiError::Unauthorized);
        };

        let request = RefreshRequest { refresh_token };
        let response = self
            .http
            .post(format!("{}/v1/auth/refresh", self.base_url()))
            .json(&request)
            .send()
            .await?;
        let response = check_status(response).await?;
        let refreshed: RefreshResponse = decode(response).await?;

        self.tokens.store_refreshed(&refreshed);
        tracing::debug!("Access token refreshed");
        Ok(())
    }

    /// Classify an unrecoverable auth failure by endpoint. Exam endpoints
    /// degrade to a soft error so a test in progress is never interrupted;
    /// everything else ends the login session.
    fn auth_failure(&self, path: &str) -> ApiError {
        if is_exam_path(path) {
            ApiError::Unauthorized
        } else {
            self.tokens.clear();
            ApiError::SessionExpired
        }
    }
}

// Implement the TestApi seam for the real client by delegating to the
// endpoint functions. The session engine only sees the trait.
#[async_trait::async_trait]
impl crate::core::service::TestApi for ApiClient {
    async fn start_test(&self, test_id: &str) -> Result<shared::dto::tests::StartTestResponse> {
        super::student_tests::start_test(self, test_id).await
    }

    async fn save_answer(
        &self,
        attempt_id: &str,
        question_index: u32,
        answer: &str,
        time_spent_seconds: u64,
    ) -> Result<()> {
        super::student_tests::save_answer(self, attempt_id, question_index, answer, time_spent_seconds)
            .await
            .map(|_| ())
    }

    async fn submit_test(&self, attempt_id: &str) -> Result<shared::dto::tests::SubmitTestResponse> {
        super::student_tests::submit_test(self, attempt_id).await
    }

    async fn report_incident(
        &self,
        test_id: &str,
        incident: shared::dto::tests::IncidentType,
    ) -> Result<shared::dto::tests::SecurityIncidentResponse> {
        super::student_tests::report_incident(self, test_id, incident).await
    }

    async fn unlock_attempt(
        &self,
        attempt_id: &str,
        bypass_code: &str,
    ) -> Result<shared::dto::tests::UnlockResponse> {
        super::student_tests::unlock_attempt(self, attempt_id, bypass_code).await
    }
}

/// Exam-taking endpoints are exempt from the logout-on-auth-failure policy.
fn is_exam_path(path: &str) -> bool {
    path.starts_with("/v1/student/tests/") || path.starts_with("/v1/student/umatests/")
}

/// Map a response's status to the client error model, parsing the backend's
/// uniform error body when one is present.
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }

    let message = response
        .json::<ErrorResponse>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::RwLock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_exam_path_detection() {
        assert!(is_exam_path("/v1/student/tests/42/save-answer"));
        assert!(is_exam_path("/v1/student/umatests/42/submit"));
        assert!(!is_exam_path("/v1/student/classrooms"));
        assert!(!is_exam_path("/v1/auth/refresh"));
    }

    #[tokio::test]
    async fn test_refresh_gate_is_single_flight() {
        let gate = Arc::new(RefreshGate::new());
        let token = Arc::new(RwLock::new("stale".to_string()));
        let refresh_calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let gate = Arc::clone(&gate);
            let token = Arc::clone(&token);
            let refresh_calls = Arc::clone(&refresh_calls);
            handles.push(tokio::spawn(async move {
                let stale = "stale".to_string();
                gate.run(
                    || *token.read() != stale,
                    || async {
                        refresh_calls.fetch_add(1, Ordering::SeqCst);
                        // Hold the gate long enough for the others to queue up
                        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                        *token.write() = "fresh".to_string();
                        Ok(())
                    },
                )
                .await
            }));
        }

        let mut performed = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap() {
                performed += 1;
            }
        }

        // Exactly one caller actually hit the refresh endpoint
        assert_eq!(refresh_calls.load(Ordering::SeqCst), 1);
        assert_eq!(performed, 1);
        assert_eq!(*token.read(), "fresh");
    }

    #[tokio::test]
    async fn test_refresh_gate_skips_when_already_fresh() {
        let gate = RefreshGate::new();
        let ran = gate
            .run(
                || true,
                || async { panic!("refresh must not run when token is fresh") },
            )
            .await
            .unwrap();
        assert!(!ran);
    }
}
