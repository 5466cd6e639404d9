//! 传输层：执行实际网络 I/O 的协作者契约及默认 HTTP 实现。
//!
//! Transport layer.
//!
//! [`AgentTransport`] is the contract the facade consumes. The facade only ever
//! hands it payloads that already passed validation, and re-wraps every
//! [`TransportError`] it returns. [`HttpTransport`] is the default
//! implementation over reqwest.

mod http;

pub use http::HttpTransport;

use crate::types::Agent;
use async_trait::async_trait;

/// Network collaborator behind [`LuxIqSdk`](crate::LuxIqSdk).
#[async_trait]
pub trait AgentTransport: Send + Sync {
    async fn create_agent(&self, payload: &serde_json::Value) -> Result<Agent, TransportError>;

    async fn list_agents(&self) -> Result<Vec<Agent>, TransportError>;

    /// `Ok(None)` when the service has no agent with this name.
    async fn get_agent_by_name(&self, name: &str) -> Result<Option<Agent>, TransportError>;

    /// Returns the agent's textual reply.
    async fn chat_with_agent(&self, agent_name: &str, message: &str)
        -> Result<String, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Human-readable message without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            TransportError::Http(e) => e.to_string(),
            TransportError::Status { message, .. } => message.clone(),
            TransportError::Decode(m) | TransportError::Other(m) => m.clone(),
        }
    }
}
