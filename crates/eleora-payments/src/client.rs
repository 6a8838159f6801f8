//! Payment-session client.

use crate::types::{CreateSessionRequest, CreateSessionResponse};
use crate::PaymentError;
use async_trait::async_trait;

/// Collaborator that turns a list of priced items into a redirect URL.
///
/// A trait so checkout orchestration can be exercised against a failing
/// stub without a running session server.
#[async_trait]
pub trait SessionClient: Send + Sync {
    async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<CreateSessionResponse, PaymentError>;
}

/// HTTP client for the payment-session server.
pub struct HttpSessionClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSessionClient {
    /// Create a client against a session-server base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SessionClient for HttpSessionClient {
    async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<CreateSessionResponse, PaymentError> {
        let url = format!("{}/create-checkout-session", self.base_url.trim_end_matches('/'));
        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
