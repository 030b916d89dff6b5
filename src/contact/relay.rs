//! Email relay
//!
//! Messages are delivered by EmailJS: one JSON POST carrying the service id,
//! template id, public key and the three form fields. Only success or failure
//! is consumed from the response.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::form::ContactMessage;

/// EmailJS REST endpoint
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Relay identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            service_id: "YOUR_SERVICE_ID".to_string(),
            template_id: "YOUR_TEMPLATE_ID".to_string(),
            public_key: "YOUR_PUBLIC_KEY".to_string(),
            endpoint: EMAILJS_ENDPOINT.to_string(),
        }
    }
}

impl RelayConfig {
    /// Still using the shipped placeholder identifiers
    pub fn is_placeholder(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .any(|v| v.is_empty() || v.starts_with("YOUR_"))
    }
}

/// Request body as EmailJS expects it
#[derive(Debug, Serialize)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactMessage,
}

impl<'a> RelayRequest<'a> {
    pub fn new(config: &'a RelayConfig, message: &'a ContactMessage) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: message,
        }
    }
}

/// Something that can deliver a contact message
#[allow(async_fn_in_trait)]
pub trait Relay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

/// Relay backed by the EmailJS REST API
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        if config.is_placeholder() {
            log::warn!("Contact relay uses placeholder ids; messages will be rejected");
        }
        Self { config }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

#[cfg(target_arch = "wasm32")]
impl Relay for EmailJsRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        use gloo_net::http::Request;

        let response = Request::post(&self.config.endpoint)
            .json(&RelayRequest::new(&self.config, message))
            .map_err(|e| RelayError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected { status, body });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let config = RelayConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk_123".to_string(),
            endpoint: EMAILJS_ENDPOINT.to_string(),
        };
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
        };
        let json = serde_json::to_string(&RelayRequest::new(&config, &message)).expect("encodes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["service_id"], "service_abc");
        assert_eq!(value["template_id"], "template_xyz");
        assert_eq!(value["user_id"], "pk_123");
        assert_eq!(value["template_params"]["email"], "ada@example.com");
        assert_eq!(value["template_params"]["message"], "Hi");
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(RelayConfig::default().is_placeholder());
        let real = RelayConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk_123".to_string(),
            ..RelayConfig::default()
        };
        assert!(!real.is_placeholder());
    }
}
