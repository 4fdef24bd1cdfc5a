//! # Token Storage
//!
//! Holds the access/refresh token pair with expiry bookkeeping. Shared as
//! `Arc<TokenStore>` between the API client and the embedder; interior
//! mutability via `parking_lot::RwLock` so reads stay cheap on the hot path.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use parking_lot::RwLock;
use shared::dto::auth::{AuthResponse, RefreshResponse};
use std::time::Duration;

#[derive(Debug, Clone)]
struct Tokens {
    access_token: String,
    refresh_token: String,
    /// Absolute expiry computed from `expires_in` at store time. `None` when
    /// the backend did not report a lifetime; proactive refresh is then
    /// disabled and the reactive 401 path takes over.
    expires_at: Option<DateTime<Utc>>,
}

/// Thread-safe store for the current login session's tokens.
#[derive(Debug, Default)]
pub struct TokenStore {
    inner: RwLock<Option<Tokens>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store tokens from a successful login.
    pub fn store(&self, auth: &AuthResponse) {
        let tokens = Tokens {
            access_token: auth.access_token.clone(),
            refresh_token: auth.refresh_token.clone(),
            expires_at: Some(Utc::now() + ChronoDuration::seconds(auth.expires_in)),
        };
        *self.inner.write() = Some(tokens);
    }

    /// Replace tokens after a refresh. The backend rotates the refresh token,
    /// so both halves are overwritten.
    pub fn store_refreshed(&self, refreshed: &RefreshResponse) {
        let expires_at = refreshed
            .expires_in
            .map(|secs| Utc::now() + ChronoDuration::seconds(secs));
        let tokens = Tokens {
            access_token: refreshed.access_token.clone(),
            refresh_token: refreshed.refresh_token.clone(),
            expires_at,
        };
        *self.inner.write() = Some(tokens);
    }

    /// Current access token, if logged in.
    pub fn access_token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|t| t.access_token.clone())
    }

    /// Current refresh token, if logged in.
    pub fn refresh_token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|t| t.refresh_token.clone())
    }

    /// Drop all tokens (logout or hard auth failure).
    pub fn clear(&self) {
        *self.inner.write() = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_some()
    }

    /// True when the access token expires within `window` (or already has).
    /// Unknown expiry reads as "not expiring" so the 401 path decides.
    pub fn expires_within(&self, window: Duration) -> bool {
        let guard = self.inner.read();
        let Some(tokens) = guard.as_ref() else {
            return false;
        };
        let Some(expires_at) = tokens.expires_at else {
            return false;
        };
        let window = ChronoDuration::from_std(window).unwrap_or(ChronoDuration::zero());
        Utc::now() + window >= expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::auth::UserInfo;

    fn auth_response(expires_in: i64) -> AuthResponse {
        AuthResponse {
            user: UserInfo {
                id: "u-1".into(),
                username: "student".into(),
                email: "student@example.com".into(),
                role: "student".into(),
                created_at: Utc::now(),
            },
            access_token: "access-1".into(),
            refresh_token: "refresh-1".into(),
            expires_in,
        }
    }

    #[test]
    fn test_store_and_read_back() {
        let store = TokenStore::new();
        assert!(!store.is_authenticated());

        store.store(&auth_response(3600));
        assert_eq!(store.access_token().as_deref(), Some("access-1"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
        assert!(store.is_authenticated());

        store.clear();
        assert!(store.access_token().is_none());
    }

    #[test]
    fn test_expires_within_window() {
        let store = TokenStore::new();
        store.store(&auth_response(30));

        // 30s lifetime is inside a 60s window, outside a 5s one
        assert!(store.expires_within(Duration::from_secs(60)));
        assert!(!store.expires_within(Duration::from_secs(5)));
    }

    #[test]
    fn test_unknown_expiry_never_proactive() {
        let store = TokenStore::new();
        store.store_refreshed(&RefreshResponse {
            access_token: "access-2".into(),
            refresh_token: "refresh-2".into(),
            expires_in: None,
        });

        assert!(!store.expires_within(Duration::from_secs(3600)));
        assert_eq!(store.access_token().as_deref(), Some("access-2"));
    }

    #[test]
    fn test_refresh_rotates_both_tokens() {
        let store = TokenStore::new();
        store.store(&auth_response(3600));
        store.store_refreshed(&RefreshResponse {
            access_token: "access-2".into(),
            refresh_token: "refresh-2".into(),
            expires_in: Some(3600),
        });

        assert_eq!(store.access_token().as_deref(), Some("access-2"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh-2"));
    }
}
