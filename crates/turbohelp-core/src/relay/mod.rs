//! The chat relay: system prompt plus the single upstream call per request.

pub mod prompt;
pub mod service;

pub use prompt::SYSTEM_PROMPT;
pub use service::ChatRelay;
