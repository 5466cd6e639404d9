//! Uniform failure wrapping for the public agent operations.

use crate::{Error, Result};
use std::future::Future;

/// The public operations of [`LuxIqSdk`](crate::LuxIqSdk).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateAgent,
    ListAgents,
    GetAgent,
    ChatWithAgent,
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Operation::CreateAgent => "create_agent",
            Operation::ListAgents => "list_agents",
            Operation::GetAgent => "get_agent_by_name",
            Operation::ChatWithAgent => "chat_with_agent",
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Operation::CreateAgent => "Failed to create agent: ",
            Operation::ListAgents => "Failed to list agents: ",
            Operation::GetAgent => "Failed to get agent: ",
            Operation::ChatWithAgent => "Failed to chat with agent: ",
        }
    }

    pub fn unknown_message(&self) -> &'static str {
        match self {
            Operation::CreateAgent => "Unknown error occurred when creating agent",
            Operation::ListAgents => "Unknown error occurred when listing agents",
            Operation::GetAgent => "Unknown error occurred when getting agent",
            Operation::ChatWithAgent => "Unknown error occurred when chatting with agent",
        }
    }

    /// Re-wrap any failure as [`Error::Operation`]. The original category is dropped.
    pub fn wrap(&self, err: Error) -> Error {
        let raw = err.raw_message();
        if raw.is_empty() {
            Error::operation(self.unknown_message())
        } else {
            Error::operation(format!("{}{}", self.prefix(), raw))
        }
    }
}

/// Run `action` and normalize its failure through [`Operation::wrap`].
pub async fn with_operation<T, Fut>(op: Operation, action: Fut) -> Result<T>
where
    Fut: Future<Output = Result<T>>,
{
    tracing::debug!(operation = op.label(), "starting");
    action.await.map_err(|e| {
        let wrapped = op.wrap(e);
        tracing::warn!(operation = op.label(), error = %wrapped, "operation failed");
        wrapped
    })
}
