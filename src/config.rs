//! 配置解析：显式配置 > 环境变量 > 默认值。
//!
//! Configuration resolution.
//!
//! Every value is resolved by the same precedence: an explicit value passed by
//! the application, then the process environment, then a built-in default.
//! A value that is present but empty counts as absent. The environment is read
//! here and nowhere else, once, when the SDK is constructed.

use crate::{Error, ErrorContext, Result};
use std::time::Duration;

/// Production base URL of the LuxIQ API.
pub const DEFAULT_API_URL: &str = "https://luxiq-api.vercel.app";

/// Default request timeout applied by the HTTP transport.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_KEY: &str = "LUXIQ_API_KEY";
pub const ENV_API_URL: &str = "LUXIQ_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "LUXIQ_HTTP_TIMEOUT_SECS";

const MISSING_API_KEY: &str =
    "Missing API Key. Set LUXIQ_API_KEY environment variable or pass in config.";

/// Explicit configuration supplied by the application. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SdkConfig {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl SdkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// The effective configuration of one SDK instance.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub api_url: String,
    pub timeout: Duration,
}

// Keep the key out of logs and panics.
impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_key", &"***")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ResolvedConfig {
    /// Resolve against the process environment.
    pub fn resolve(explicit: Option<&SdkConfig>) -> Result<Self> {
        Self::resolve_with(explicit, |key| std::env::var(key).ok())
    }

    /// Resolve with an injectable environment lookup.
    pub fn resolve_with<F>(explicit: Option<&SdkConfig>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let explicit_str = |v: Option<&String>| v.filter(|s| !s.is_empty()).cloned();

        let api_key = explicit_str(explicit.and_then(|c| c.api_key.as_ref()))
            .or_else(|| env(ENV_API_KEY))
            .ok_or_else(|| {
                Error::configuration_with_context(
                    MISSING_API_KEY,
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_source("config_resolver"),
                )
            })?;

        let api_url = explicit_str(explicit.and_then(|c| c.api_url.as_ref()))
            .or_else(|| env(ENV_API_URL))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout = explicit
            .and_then(|c| c.timeout)
            .or_else(|| {
                env(ENV_TIMEOUT_SECS)
                    .and_then(|s| s.trim().parse::<u64>().ok())
                    .map(Duration::from_secs)
            })
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            api_key,
            api_url,
            timeout,
        })
    }
}

/// Load a `.env` file from the working directory (or its parents) into the
/// process environment. A missing file is not an error.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }
}
