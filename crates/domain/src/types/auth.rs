//! Authentication payloads
//!
//! Login and refresh exchanges for staff accounts.

use serde::{Deserialize, Serialize};

/// Credentials submitted by the login surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Staff account profile returned alongside tokens on login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub onboarding_step: String,
    pub is_onboarding_complete: bool,
    pub role: String,
    pub phone_number: String,
}

/// Successful login response.
///
/// The refresh token is only issued here; the refresh exchange below may
/// replace the access token without rotating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

/// Body for the refresh-token exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Refresh exchange result.
///
/// `refresh_token` is present only when the server rotates it; the stored
/// refresh token stays valid otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}
