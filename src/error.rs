use crate::transport::TransportError;
use thiserror::Error;

/// Where a configuration or validation failure originated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Offending field, e.g. `"api_key"` or a JSON pointer such as `"/temperature"`
    pub field_path: Option<String>,
    /// Component that raised the error, e.g. `"config_resolver"`
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Unified error type for the LuxIQ SDK.
///
/// Only `Configuration` (at initialization) and `Operation` (from every public
/// agent operation) ever reach application code. `Validation` and `Transport`
/// are produced below the facade and re-wrapped before they are returned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("{message}")]
    Operation { message: String },
}

// Renders as " (field: /name, source: create_agent_schema)", or nothing when empty.
fn format_context(ctx: &ErrorContext) -> String {
    let parts: Vec<String> = [("field", &ctx.field_path), ("source", &ctx.source)]
        .into_iter()
        .filter_map(|(label, value)| value.as_ref().map(|v| format!("{}: {}", label, v)))
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::validation_with_context(msg, ErrorContext::new())
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn operation(msg: impl Into<String>) -> Self {
        Error::Operation {
            message: msg.into(),
        }
    }

    /// The bare failure message, without category prefix or context suffix.
    ///
    /// This is what the facade splices after its operation prefix, so a
    /// validation failure reads `"Failed to get agent: Agent name must be a
    /// non-empty string"` rather than repeating "Validation error".
    pub fn raw_message(&self) -> String {
        match self {
            Error::Configuration { message, .. }
            | Error::Validation { message, .. }
            | Error::Operation { message } => message.clone(),
            Error::Transport(e) => e.message(),
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::Validation { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    pub fn is_operation(&self) -> bool {
        matches!(self, Error::Operation { .. })
    }
}
