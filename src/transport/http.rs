use super::{AgentTransport, TransportError};
use crate::config::ResolvedConfig;
use crate::types::{Agent, ChatResponse};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

const USER_AGENT: &str = concat!("luxiq-sdk/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed transport for the LuxIQ REST API.
///
/// Endpoints (relative to the resolved API URL):
/// - `POST /api/agents`
/// - `GET /api/agents`
/// - `GET /api/agents/{name}`
/// - `POST /api/agents/{name}/chat`
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &ResolvedConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    ///
    /// The base URL is parsed here rather than at construction, so a malformed
    /// URL surfaces as a failed call.
    fn endpoint(&self, segments: &[&str]) -> std::result::Result<Url, TransportError> {
        let mut url = Url::parse(self.base_url.trim()).map_err(|e| {
            TransportError::Other(format!("Invalid API URL '{}': {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                TransportError::Other(format!("API URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&serde_json::Value>,
    ) -> std::result::Result<(StatusCode, Option<T>), TransportError> {
        let url = self.endpoint(segments)?;
        tracing::debug!("{} {}", method, url.path());

        let mut request = self
            .client
            .request(method, url)
            .bearer_auth(&self.api_key)
            .header("accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Ok((status, None));
        }
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: error_message(status, &text),
            });
        }

        let value = serde_json::from_str(&text).map_err(|e| {
            TransportError::Decode(format!("{} (status {})", e, status.as_u16()))
        })?;
        Ok((status, Some(value)))
    }

    /// Like `send`, but a 404 is a failure rather than an absent resource.
    async fn send_expecting<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&serde_json::Value>,
    ) -> std::result::Result<T, TransportError> {
        match self.send(method, segments, body).await? {
            (_, Some(value)) => Ok(value),
            (status, None) => Err(TransportError::Status {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Not Found")
                    .to_string(),
            }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AgentList {
    Bare(Vec<Agent>),
    Wrapped { agents: Vec<Agent> },
}

#[async_trait]
impl AgentTransport for HttpTransport {
    async fn create_agent(
        &self,
        payload: &serde_json::Value,
    ) -> std::result::Result<Agent, TransportError> {
        self.send_expecting(Method::POST, &["api", "agents"], Some(payload))
            .await
    }

    async fn list_agents(&self) -> std::result::Result<Vec<Agent>, TransportError> {
        let list: AgentList = self
            .send_expecting(Method::GET, &["api", "agents"], None)
            .await?;
        Ok(match list {
            AgentList::Bare(agents) | AgentList::Wrapped { agents } => agents,
        })
    }

    async fn get_agent_by_name(
        &self,
        name: &str,
    ) -> std::result::Result<Option<Agent>, TransportError> {
        // A `null` body decodes to `Some(None)`.
        let (_, agent) = self
            .send::<Option<Agent>>(Method::GET, &["api", "agents", name], None)
            .await?;
        Ok(agent.flatten())
    }

    async fn chat_with_agent(
        &self,
        agent_name: &str,
        message: &str,
    ) -> std::result::Result<String, TransportError> {
        let body = serde_json::json!({ "message": message });
        let reply: ChatResponse = self
            .send_expecting(
                Method::POST,
                &["api", "agents", agent_name, "chat"],
                Some(&body),
            )
            .await?;
        Ok(reply.response)
    }
}

/// Pick the most useful message out of an error response body.
///
/// Recognizes `{"error": "..."}`, `{"error": {"message": "..."}}` and
/// `{"message": "..."}`; otherwise falls back to the raw body, then the
/// status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        let found = json
            .get("error")
            .and_then(|e| e.as_str().or_else(|| e.get("message").and_then(|m| m.as_str())))
            .or_else(|| json.get("message").and_then(|m| m.as_str()));
        if let Some(msg) = found.filter(|m| !m.is_empty()) {
            return msg.to_string();
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .map(String::from)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
