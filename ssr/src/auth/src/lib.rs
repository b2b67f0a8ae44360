use serde::{Deserialize, Serialize};

use utils::api::{ApiClient, ApiError};
use utils::types::UserSummary;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpVerifyRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpResendRequest {
    pub email: String,
}

/// Token plus the freshly minted user summary; callers hand both to
/// the session state, which is the single session writer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSuccess {
    pub token: String,
    pub user: UserSummary,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

pub async fn login(client: &ApiClient, req: &LoginRequest) -> Result<AuthSuccess, ApiError> {
    client.post_json("auth/login", req).await
}

/// Registers an account; the server mails an OTP and the signup stays
/// pending until it is verified.
pub async fn signup(client: &ApiClient, req: &SignupRequest) -> Result<MessageResponse, ApiError> {
    client.post_json("auth/signup", req).await
}

pub async fn verify_otp(
    client: &ApiClient,
    req: &OtpVerifyRequest,
) -> Result<AuthSuccess, ApiError> {
    client.post_json("auth/verify-otp", req).await
}

pub async fn resend_otp(
    client: &ApiClient,
    req: &OtpResendRequest,
) -> Result<MessageResponse, ApiError> {
    client.post_json("auth/resend-otp", req).await
}

/// Best-effort server-side invalidation. The local purge happens
/// regardless of the outcome here.
pub async fn logout(client: &ApiClient) -> Result<MessageResponse, ApiError> {
    client.post_json("auth/logout", &()).await
}
