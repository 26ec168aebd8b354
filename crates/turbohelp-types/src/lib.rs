//! Shared domain types for the TurboHelp chat relay.
//!
//! Conversation turns, the inbound chat request and its boundary validation,
//! upstream completion shapes, relay configuration, and the error types the
//! other crates map onto HTTP responses.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
