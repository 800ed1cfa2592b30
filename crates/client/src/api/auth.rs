//! Authentication service
//!
//! Login, logout, and the password-reset flow. Login is the only path
//! that persists a refresh token; logout is the only caller-driven
//! session end.

use std::sync::Arc;

use gatescan_common::auth::SessionEndReason;
use gatescan_common::storage::{FileStore, KeyValueStore};
use gatescan_domain::{
    LoginRequest, LoginResponse, ResetPasswordInitiateRequest, ResetPasswordInitiateResponse,
    ResetPasswordSubmitRequest, ResetPasswordSubmitResponse, VerifyOtpRequest, VerifyOtpResponse,
};
use tracing::{info, instrument};

use crate::http::client::ApiClient;
use crate::http::errors::ClientResult;

const LOGIN_PATH: &str = "/auth/login";
const RESET_INITIATE_PATH: &str = "/reset-password/initiate";
const RESET_VERIFY_PATH: &str = "/reset-password/verify";
const RESET_SUBMIT_PATH: &str = "/reset-password/submit";

/// Authentication endpoints.
pub struct AuthApi<S: KeyValueStore = FileStore> {
    client: Arc<ApiClient<S>>,
}

impl<S: KeyValueStore> AuthApi<S> {
    #[must_use]
    pub fn new(client: Arc<ApiClient<S>>) -> Self {
        Self { client }
    }

    /// Authenticate with email and password.
    ///
    /// On success the returned tokens are persisted through the token
    /// store before this method returns, so `has_valid_token()` holds
    /// immediately after.
    ///
    /// # Errors
    /// Returns the backend error unchanged on failure; login is a public
    /// endpoint, so a 401 here never triggers a refresh.
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<LoginResponse> {
        let response: LoginResponse = self.client.post(LOGIN_PATH, credentials).await?;

        self.client
            .token_store()
            .set_tokens(&response.access_token, Some(&response.refresh_token))
            .await;

        info!("login succeeded");
        Ok(response)
    }

    /// End the session: clear stored tokens and signal the navigation
    /// layer.
    pub async fn logout(&self) {
        self.client.token_store().clear_tokens().await;
        self.client.session_events().session_ended(SessionEndReason::LoggedOut);
        info!("logged out");
    }

    /// Start the password-reset flow by requesting an OTP email.
    ///
    /// # Errors
    /// Returns the backend error unchanged on failure.
    pub async fn reset_password_initiate(
        &self,
        email: &str,
    ) -> ClientResult<ResetPasswordInitiateResponse> {
        let request = ResetPasswordInitiateRequest { email: email.to_string() };
        self.client.post(RESET_INITIATE_PATH, &request).await
    }

    /// Verify the OTP sent to the account email.
    ///
    /// # Errors
    /// Returns the backend error unchanged on failure.
    pub async fn verify_otp(&self, request: &VerifyOtpRequest) -> ClientResult<VerifyOtpResponse> {
        self.client.post(RESET_VERIFY_PATH, request).await
    }

    /// Submit the new password to complete the reset flow.
    ///
    /// # Errors
    /// Returns the backend error unchanged on failure.
    pub async fn reset_password_submit(
        &self,
        request: &ResetPasswordSubmitRequest,
    ) -> ClientResult<ResetPasswordSubmitResponse> {
        self.client.post(RESET_SUBMIT_PATH, request).await
    }
}
