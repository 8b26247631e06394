//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink lives with the terminal UI in the binary

mod json;

pub use json::JsonEventSink;
