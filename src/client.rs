//! Client facade for the LuxIQ agent API.
//!
//! The public surface is [`LuxIqSdk`]; validation and failure wrapping live in
//! submodules under `src/client/`.

pub mod core;
pub mod operation;
pub mod validation;

pub use self::core::LuxIqSdk;
pub use operation::{with_operation, Operation};
pub use validation::{validate_agent_name, validate_chat_request, validate_create_agent};
