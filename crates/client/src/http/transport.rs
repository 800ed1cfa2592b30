//! HTTP wire layer
//!
//! Thin reqwest wrapper that executes a [`RequestDescriptor`] against the
//! configured base URL and converts wire results into [`ApiResponse`] /
//! [`ClientError`] values. Non-success statuses become errors here so the
//! recovery hook upstream only has to pattern-match.

use std::time::Duration;

use gatescan_domain::ApiErrorBody;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::errors::{ClientError, ClientResult};
use super::request::RequestDescriptor;

/// Successful response: status plus decoded JSON body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// Deserialize the body into `T`.
    ///
    /// # Errors
    /// Returns `ClientError::Decode` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(self) -> ClientResult<T> {
        serde_json::from_value(self.body).map_err(|err| ClientError::Decode(err.to_string()))
    }
}

/// HTTP transport over a shared reqwest client.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `base_url` with the given request timeout.
    ///
    /// # Errors
    /// Returns `ClientError::Config` if the underlying client cannot be
    /// built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ClientError::Config(format!("failed to build http client: {err}")))?;

        Ok(Self { client, base_url: base_url.into() })
    }

    /// Execute a descriptor and return the decoded response.
    ///
    /// # Errors
    /// - `ClientError::Network` for connection-level failures
    /// - `ClientError::Status` for non-success responses (the message is
    ///   taken from the backend error payload when one is present)
    /// - `ClientError::Decode` when a success body is not valid JSON
    pub async fn send(&self, request: &RequestDescriptor) -> ClientResult<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, %url, "sending request");

        let mut builder =
            self.client.request(request.method.clone(), &url).headers(request.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response =
            builder.send().await.map_err(|err| ClientError::Network(err.to_string()))?;

        let status = response.status();
        debug!(method = %request.method, %url, %status, "received response");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                path: request.path.clone(),
                message: error_message(status, &text),
            });
        }

        // 204/205 have no body by RFC spec; decode as null.
        let body = if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            Value::Null
        } else {
            let bytes =
                response.bytes().await.map_err(|err| ClientError::Network(err.to_string()))?;
            if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes)
                    .map_err(|err| ClientError::Decode(err.to_string()))?
            }
        };

        Ok(ApiResponse { status: status.as_u16(), body })
    }
}

/// Prefer the backend's structured error message when the body carries
/// one; fall back to the raw body, then the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return parsed.to_string();
    }

    if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("request failed").to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for http::transport.
    use super::*;

    #[test]
    fn error_message_prefers_structured_payload() {
        let body = r#"{"message":"Failed to verify scan","cause":"ticket already scanned"}"#;
        let message = error_message(StatusCode::CONFLICT, body);
        assert_eq!(message, "Failed to verify scan: ticket already scanned");
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, "upstream down"), "upstream down");
    }

    #[test]
    fn error_message_uses_status_reason_for_empty_body() {
        assert_eq!(error_message(StatusCode::UNAUTHORIZED, "  "), "Unauthorized");
    }

    #[test]
    fn api_response_json_decode_error() {
        let response = ApiResponse { status: 200, body: serde_json::json!({"foo": 1}) };
        let result: ClientResult<Vec<String>> = response.json();
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }
}
