use gloo::timers::future::TimeoutFuture;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use consts::API_BASE_URL;

use crate::storage;
use crate::types::{ReferralTreeData, ReferralTreeResponse, UserSummary};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("authorization missing or expired (via {endpoint})")]
    Unauthorized { endpoint: String },
    #[error("server responded with status {status}")]
    Status { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response body: {0}")]
    MalformedBody(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Endpoints that establish or tear down a session rather than consume
/// one. A 401 from these is an ordinary form error and must not purge
/// the stored session.
pub fn is_auth_endpoint(path: &str) -> bool {
    matches!(
        path,
        "auth/login" | "auth/signup" | "auth/verify-otp" | "auth/resend-otp" | "auth/logout"
    )
}

/// Retry behavior for idempotent requests. The default performs no
/// automatic retries; failed fetches surface a manual "Try Again"
/// instead of hammering the backing API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub backoff_ms: u32,
}

impl RetryPolicy {
    pub const fn none() -> Self {
        Self {
            attempts: 0,
            backoff_ms: 0,
        }
    }

    pub const fn fixed(attempts: u32, backoff_ms: u32) -> Self {
        Self {
            attempts,
            backoff_ms,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// The single remote-API abstraction: base URL, bearer-token injection
/// from durable storage, JSON decoding and the retry policy all live
/// here so failure handling stays in one place.
#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    http: Client,
    retry: RetryPolicy,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(API_BASE_URL.clone())
    }
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            http: Client::new(),
            retry: RetryPolicy::none(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        resp: reqwest::Response,
    ) -> Result<T, ApiError> {
        match resp.status() {
            s if s.is_success() => resp
                .json::<T>()
                .await
                .map_err(|e| ApiError::MalformedBody(e.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized {
                endpoint: path.to_string(),
            }),
            s => Err(ApiError::Status { status: s.as_u16() }),
        }
    }

    async fn get_json_once<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path)?;
        let mut req = self.http.get(url);
        if let Some(token) = storage::auth_token() {
            req = req.bearer_auth(token);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(path, resp).await
    }

    /// GET with the configured retry policy. Only network-level
    /// failures are retried; HTTP errors are final.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let mut attempt = 0;
        loop {
            match self.get_json_once(path).await {
                Err(ApiError::Network(e)) if attempt < self.retry.attempts => {
                    attempt += 1;
                    log::warn!("retrying {path} after network error ({attempt}): {e}");
                    TimeoutFuture::new(self.retry.backoff_ms * attempt).await;
                }
                other => return other,
            }
        }
    }

    /// POST without retries; mutations are never replayed automatically.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        let mut req = self.http.post(url).json(body);
        if let Some(token) = storage::auth_token() {
            req = req.bearer_auth(token);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(path, resp).await
    }

    /// The current session's referral tree.
    pub async fn own_tree(&self) -> Result<ReferralTreeData, ApiError> {
        let resp: ReferralTreeResponse = self.get_json("referrals/tree").await?;
        Ok(resp.referral_tree)
    }

    /// An arbitrary member's referral tree. The id is opaque; the only
    /// client-side validation is non-emptiness.
    pub async fn member_tree(&self, member_id: &str) -> Result<ReferralTreeData, ApiError> {
        if member_id.trim().is_empty() {
            return Err(ApiError::InvalidRequest("member id is empty".to_string()));
        }
        let resp: ReferralTreeResponse = self
            .get_json(&format!("referrals/tree/{member_id}"))
            .await?;
        Ok(resp.referral_tree)
    }

    /// A single user's profile, used for avatars and the detail popup.
    pub async fn user_profile(&self, id: &str) -> Result<UserSummary, ApiError> {
        if id.trim().is_empty() {
            return Err(ApiError::InvalidRequest("user id is empty".to_string()));
        }
        self.get_json(&format!("users/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_endpoints_are_exempt_from_session_purge() {
        assert!(is_auth_endpoint("auth/login"));
        assert!(is_auth_endpoint("auth/verify-otp"));
        assert!(is_auth_endpoint("auth/logout"));
        assert!(!is_auth_endpoint("referrals/tree"));
        assert!(!is_auth_endpoint("users/u1"));
    }

    #[test]
    fn default_policy_never_retries() {
        assert_eq!(RetryPolicy::default(), RetryPolicy::none());
        assert_eq!(RetryPolicy::none().attempts, 0);
    }

    #[test]
    fn empty_member_id_is_rejected_without_a_request() {
        let client = ApiClient::default();
        let res = futures_lite_block_on(client.member_tree("  "));
        assert_eq!(
            res,
            Err(ApiError::InvalidRequest("member id is empty".to_string()))
        );
    }

    // Minimal block_on for futures that resolve without I/O.
    fn futures_lite_block_on<F: std::future::Future>(fut: F) -> F::Output {
        use std::sync::Arc;
        use std::task::{Context, Poll, Wake, Waker};

        struct NoopWake;
        impl Wake for NoopWake {
            fn wake(self: Arc<Self>) {}
        }

        let waker = Waker::from(Arc::new(NoopWake));
        let mut cx = Context::from_waker(&waker);
        let mut fut = std::pin::pin!(fut);
        loop {
            if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }
}
