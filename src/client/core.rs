use crate::client::operation::{with_operation, Operation};
use crate::client::validation::{validate_agent_name, validate_chat_request, validate_create_agent};
use crate::config::{load_dotenv, ResolvedConfig, SdkConfig};
use crate::transport::{AgentTransport, HttpTransport};
use crate::types::{Agent, ChatRequest, CreateAgentRequest};
use crate::{Error, Result};
use std::sync::Arc;
use tracing::info;

/// Entry point to the LuxIQ agent API.
///
/// Each operation validates its input, makes at most one transport call, and
/// reports any failure as [`Error::Operation`](crate::Error::Operation) with an
/// operation-specific prefix. Invalid input never reaches the transport.
#[derive(Clone)]
pub struct LuxIqSdk {
    config: ResolvedConfig,
    transport: Arc<dyn AgentTransport>,
}

impl std::fmt::Debug for LuxIqSdk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LuxIqSdk")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LuxIqSdk {
    /// Initialize the SDK with the default HTTP transport.
    ///
    /// Loads `.env` if present, then resolves configuration: explicit values,
    /// then `LUXIQ_API_KEY` / `LUXIQ_API_URL`, then defaults. Fails with
    /// [`Error::Configuration`](crate::Error::Configuration) when no API key
    /// can be found.
    pub fn initialize(config: Option<SdkConfig>) -> Result<Self> {
        load_dotenv();
        let resolved = ResolvedConfig::resolve(config.as_ref())?;
        let transport = HttpTransport::new(&resolved)?;
        info!(api_url = %resolved.api_url, "LuxIQ SDK initialized");
        Ok(Self::with_transport(resolved, Arc::new(transport)))
    }

    /// Build an SDK over a caller-provided transport.
    pub fn with_transport(config: ResolvedConfig, transport: Arc<dyn AgentTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Create a new agent and return it as the service reports it.
    pub async fn create_agent(&self, request: &CreateAgentRequest) -> Result<Agent> {
        with_operation(Operation::CreateAgent, async {
            let payload = serde_json::to_value(request).map_err(|e| {
                Error::validation(format!("Failed to serialize agent: {}", e))
            })?;
            validate_create_agent(&payload)?;
            Ok::<_, Error>(self.transport.create_agent(&payload).await?)
        })
        .await
    }

    /// List all agents visible to this API key.
    pub async fn list_agents(&self) -> Result<Vec<Agent>> {
        with_operation(Operation::ListAgents, async {
            Ok::<_, Error>(self.transport.list_agents().await?)
        })
        .await
    }

    /// Look an agent up by name. `Ok(None)` if the service has no such agent.
    pub async fn get_agent_by_name(&self, name: &str) -> Result<Option<Agent>> {
        with_operation(Operation::GetAgent, async {
            validate_agent_name(name)?;
            Ok::<_, Error>(self.transport.get_agent_by_name(name).await?)
        })
        .await
    }

    /// Send `message` to the named agent and return its reply.
    pub async fn chat_with_agent(&self, agent_name: &str, message: &str) -> Result<String> {
        with_operation(Operation::ChatWithAgent, async {
            validate_chat_request(&ChatRequest::new(agent_name, message))?;
            Ok::<_, Error>(self.transport.chat_with_agent(agent_name, message).await?)
        })
        .await
    }
}
