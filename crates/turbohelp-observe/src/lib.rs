//! Observability setup for TurboHelp: structured logging with an optional
//! OpenTelemetry bridge.

pub mod tracing_setup;
