//! HTTP layer for TurboHelp.
//!
//! Axum routes under `/api/`, permissive CORS, request tracing, and static
//! hosting of the front-end page for everything else.

pub mod error;
pub mod handlers;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;
