//! Deploy Event Port
//!
//! Provides an observable interface for the deployment pipeline.
//! Enables progress reporting, JSON event streams, and debugging.

use crate::domain::entities::{DnsRecord, ServiceEndpoints};
use crate::domain::value_objects::DeployStep;

/// Event emitted during a deployment
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Pipeline started
    Started {
        project: String,
        region: String,
        service: String,
        image: String,
    },

    /// A step is about to invoke the platform
    StepStarted { step: DeployStep },

    /// A step finished successfully
    StepCompleted { step: DeployStep },

    /// Authentication check found a session
    AccountDetected { account: String },

    /// Service URL resolved
    ServiceReady { endpoints: ServiceEndpoints },

    /// Operator declined domain mapping
    DomainSkipped,

    /// Domain mapping created
    DomainMapped {
        domain: String,
        records: Vec<DnsRecord>,
    },

    /// A step failed; the pipeline stops here
    Failed { step: DeployStep, error: String },

    /// Pipeline finished
    Completed { duration_ms: u64 },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Step-by-step progress in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
