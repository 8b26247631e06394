//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                project,
                region,
                service,
                image,
            } => serde_json::json!({
                "event": "start",
                "command": "deploy",
                "project": project,
                "region": region,
                "service": service,
                "image": image,
            }),

            DeployEvent::StepStarted { step } => serde_json::json!({
                "event": "step_start",
                "command": "deploy",
                "step": step,
                "index": step.number(),
            }),

            DeployEvent::StepCompleted { step } => serde_json::json!({
                "event": "step_complete",
                "command": "deploy",
                "step": step,
                "index": step.number(),
            }),

            DeployEvent::AccountDetected { account } => serde_json::json!({
                "event": "account",
                "command": "deploy",
                "account": account,
            }),

            DeployEvent::ServiceReady { endpoints } => serde_json::json!({
                "event": "service_ready",
                "command": "deploy",
                "url": endpoints.url,
                "docs": endpoints.docs,
                "health": endpoints.health,
            }),

            DeployEvent::DomainSkipped => serde_json::json!({
                "event": "domain_skipped",
                "command": "deploy",
            }),

            DeployEvent::DomainMapped { domain, records } => serde_json::json!({
                "event": "domain_mapped",
                "command": "deploy",
                "domain": domain,
                "records": records,
            }),

            DeployEvent::Failed { step, error } => serde_json::json!({
                "event": "step_failed",
                "command": "deploy",
                "step": step,
                "index": step.number(),
                "error": error,
            }),

            DeployEvent::Completed { duration_ms } => serde_json::json!({
                "event": "complete",
                "command": "deploy",
                "status": "success",
                "duration_ms": duration_ms,
            }),
        };

        self.write_event(json);
    }
}
