//! # luxiq-sdk
//!
//! LuxIQ 智能体管理 API 的 Rust 客户端：本地校验请求、转发到远程服务，并统一错误。
//!
//! Rust client for the LuxIQ agent-management API.
//!
//! ## Overview
//!
//! The SDK validates every request locally, forwards it to the LuxIQ service,
//! and reports failures through one uniform error contract.
//!
//! - **Validate first**: a payload that fails its schema is never sent
//! - **Uniform errors**: every operation fails with [`Error::Operation`], whose
//!   message is prefixed with the operation (e.g. `"Failed to create agent: "`)
//! - **Pluggable transport**: the default [`transport::HttpTransport`] can be
//!   replaced by any [`transport::AgentTransport`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use luxiq_sdk::{CreateAgentRequest, LuxIqSdk, SdkConfig};
//!
//! #[tokio::main]
//! async fn main() -> luxiq_sdk::Result<()> {
//!     // Falls back to LUXIQ_API_KEY / LUXIQ_API_URL when not given explicitly.
//!     let sdk = LuxIqSdk::initialize(Some(SdkConfig::new().api_key("your-api-key")))?;
//!
//!     let agent = sdk
//!         .create_agent(&CreateAgentRequest::new("support-bot").description("Answers tickets"))
//!         .await?;
//!     let reply = sdk.chat_with_agent(&agent.name, "Hello!").await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | The [`LuxIqSdk`] facade, validators and failure wrapping |
//! | [`config`] | Configuration resolution (explicit > environment > default) |
//! | [`transport`] | Transport contract and the default HTTP implementation |
//! | [`types`] | Agent and chat payload types |

pub mod client;
pub mod config;
pub mod prelude;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::LuxIqSdk;
pub use config::{ResolvedConfig, SdkConfig};
pub use types::{Agent, ChatRequest, CreateAgentRequest};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
