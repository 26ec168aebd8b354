//! Relay logic and provider trait definitions for TurboHelp.
//!
//! This crate defines the `LlmProvider` port that the infrastructure layer
//! implements, and the `ChatRelay` that turns a validated client request into
//! exactly one upstream completion call. It depends only on `turbohelp-types`
//! -- never on `turbohelp-infra` or any HTTP crate.

pub mod llm;
pub mod relay;
