//! 请求校验：在任何网络调用之前检查请求负载的结构与类型。
//!
//! Request validation.
//!
//! Validators are pure: they inspect a payload and either accept it or return
//! [`Error::Validation`]. They never touch the network.

use crate::types::ChatRequest;
use crate::{Error, ErrorContext, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

pub(crate) const AGENT_NAME_REQUIRED: &str = "Agent name must be a non-empty string";

/// Creation payload schema. Only `name` is required; other known attributes
/// are type-checked when present and unknown attributes pass through.
fn create_agent_schema() -> Value {
    serde_json::json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": { "type": "string", "minLength": 1 },
            "description": { "type": "string" },
            "personality": { "type": "string" },
            "instructions": { "type": "string" },
            "model": { "type": "string" },
            "temperature": { "type": "number", "minimum": 0, "maximum": 2 },
            "tags": { "type": "array", "items": { "type": "string" } },
            "metadata": { "type": "object" }
        },
        "additionalProperties": true
    })
}

static CREATE_AGENT_SCHEMA: Lazy<std::result::Result<JSONSchema, String>> = Lazy::new(|| {
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&create_agent_schema())
        .map_err(|e| e.to_string())
});

/// Validate an agent creation payload against the creation schema.
///
/// The first violation is reported; its JSON pointer lands in the error
/// context's `field_path`.
pub fn validate_create_agent(payload: &Value) -> Result<()> {
    let schema = CREATE_AGENT_SCHEMA.as_ref().map_err(|e| {
        Error::validation_with_context(
            format!("Failed to compile schema: {}", e),
            ErrorContext::new().with_source("create_agent_schema"),
        )
    })?;

    if let Err(mut errors) = schema.validate(payload) {
        if let Some(first) = errors.next() {
            let path = first.instance_path.to_string();
            let message = if path.is_empty() {
                first.to_string()
            } else {
                format!("{}: {}", path.trim_start_matches('/'), first)
            };
            return Err(Error::validation_with_context(
                message,
                ErrorContext::new()
                    .with_field_path(if path.is_empty() { "/".to_string() } else { path })
                    .with_source("create_agent_schema"),
            ));
        }
    }

    Ok(())
}

/// Both the agent name and the message must be non-empty.
pub fn validate_chat_request(request: &ChatRequest) -> Result<()> {
    if request.agent_name.is_empty() {
        return Err(Error::validation_with_context(
            "agentName: must be a non-empty string",
            ErrorContext::new()
                .with_field_path("agentName")
                .with_source("chat_request_validator"),
        ));
    }
    if request.message.is_empty() {
        return Err(Error::validation_with_context(
            "message: must be a non-empty string",
            ErrorContext::new()
                .with_field_path("message")
                .with_source("chat_request_validator"),
        ));
    }
    Ok(())
}

/// Lookup precondition for [`LuxIqSdk::get_agent_by_name`](crate::LuxIqSdk::get_agent_by_name).
pub fn validate_agent_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::validation_with_context(
            AGENT_NAME_REQUIRED,
            ErrorContext::new()
                .with_field_path("name")
                .with_source("agent_name_validator"),
        ));
    }
    Ok(())
}
