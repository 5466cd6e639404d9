//! 类型系统模块：LuxIQ 智能体 API 的请求与响应数据类型。
//!
//! # Types Module
//!
//! Strongly-typed representations of the payloads exchanged with the LuxIQ
//! agent-management API.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Agent`] | A named remote agent as returned by the service |
//! | [`CreateAgentRequest`] | Desired attributes for a new agent |
//! | [`ChatRequest`] | An agent name paired with a message |
//! | [`ChatResponse`] | Wire envelope carrying the agent's reply |

pub mod agent;
pub mod chat;

pub use agent::{Agent, CreateAgentRequest};
pub use chat::{ChatRequest, ChatResponse};
