//! Minimal prelude for application code.

pub use crate::client::LuxIqSdk;
pub use crate::config::SdkConfig;
pub use crate::types::{Agent, CreateAgentRequest};
pub use crate::{Error, Result};
