use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::EmailJsCredentials;
use crate::contact::TemplateParams;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Couldn't reach the email relay: {0}")]
    Network(String),
    #[error("Email relay rejected the message ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Delivers one contact message. Implementations are not expected to retry.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync + 'static {
    async fn send(
        &self,
        credentials: &EmailJsCredentials,
        params: &TemplateParams,
    ) -> Result<(), TransportError>;
}

#[derive(Serialize, Debug)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

impl<'a> SendRequest<'a> {
    fn new(credentials: &'a EmailJsCredentials, params: &'a TemplateParams) -> Self {
        Self {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: params,
        }
    }
}

/// EmailJS REST endpoint, called straight from the browser with the public key.
#[derive(Debug, Clone)]
pub struct EmailJsTransport {
    endpoint: String,
}

impl Default for EmailJsTransport {
    fn default() -> Self {
        Self::new(EMAILJS_SEND_URL)
    }
}

impl EmailJsTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Transport for EmailJsTransport {
    async fn send(
        &self,
        credentials: &EmailJsCredentials,
        params: &TemplateParams,
    ) -> Result<(), TransportError> {
        let response = reqwest::Client::new()
            .post(&self.endpoint)
            .json(&SendRequest::new(credentials, params))
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(TransportError::Rejected { status, body })
    }
}
