//! Infrastructure layer for TurboHelp.
//!
//! Contains the concrete implementation of the `LlmProvider` port defined in
//! `turbohelp-core` (an OpenAI-compatible chat-completions client) and the
//! optional `turbohelp.toml` configuration loader.

pub mod config;
pub mod llm;
