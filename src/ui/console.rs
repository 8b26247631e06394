//! Console Event Sink
//!
//! Step-by-step progress lines for text mode. gcloud output for the
//! streamed steps (build, deploy) appears between a step's start and
//! completion lines.

use std::io::{self, Write};
use std::sync::Mutex;

use runcast::domain::ports::{DeployEvent, DeployEventSink};
use runcast::DeployStep;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct ConsoleEventSink {
    color: bool,
    unicode: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(color: bool, unicode: bool) -> Self {
        Self::with_writer(color, unicode, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(color: bool, unicode: bool, writer: W) -> Self {
        Self {
            color,
            unicode,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn step_line(&self, icon: Icon, step: DeployStep, text: &str) -> String {
        format!(
            "{} {} {}",
            icon.colored(self.color, self.unicode),
            ColoredText::dim(format!("[{}/{}]", step.number(), DeployStep::ALL.len()))
                .render(self.color),
            text
        )
    }

    fn detail_line(&self, text: &str) -> String {
        format!("    {} {}", Icon::Arrow.colored(self.color, self.unicode), text)
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let line = match event {
            DeployEvent::StepStarted { step } => {
                self.step_line(Icon::Progress, step, &format!("{}...", step.title()))
            }
            DeployEvent::StepCompleted { step } => self.step_line(Icon::Success, step, step.title()),
            DeployEvent::AccountDetected { account } => {
                self.detail_line(&format!("Authenticated as {}", account))
            }
            DeployEvent::ServiceReady { endpoints } => self.detail_line(&endpoints.url),
            DeployEvent::DomainSkipped => self.step_line(
                Icon::Skipped,
                DeployStep::MapDomain,
                &ColoredText::dim("Custom domain skipped").render(self.color),
            ),
            DeployEvent::DomainMapped { domain, records } => self.detail_line(&format!(
                "{} mapped ({} DNS record{})",
                domain,
                records.len(),
                if records.len() == 1 { "" } else { "s" }
            )),
            DeployEvent::Failed { step, .. } => self.step_line(
                Icon::Error,
                step,
                &ColoredText::error(format!("{} failed", step.title())).render(self.color),
            ),
            DeployEvent::Started { .. } | DeployEvent::Completed { .. } => return,
        };
        self.write_line(&line);
    }
}
