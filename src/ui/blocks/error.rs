use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// How many trailing stderr lines to show
const STDERR_TAIL: usize = 10;

/// Boxed error: where it happened, what failed, how to fix it
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    title: String,
    message: String,
    command: Option<String>,
    stderr: Option<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            command: None,
            stderr: None,
            fix: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn with_stderr(mut self, stderr: &str) -> Self {
        let lines: Vec<&str> = stderr.trim_end().lines().collect();
        let start = lines.len().saturating_sub(STDERR_TAIL);
        self.stderr = Some(lines[start..].join("\n"));
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::error(format!("ERROR: {}", self.title))
            .bold()
            .render(supports_color);
        let mut panel = Panel::with_title(title).style(PanelStyle::Error);

        panel.add_empty();
        panel.add_line(self.message.clone());

        if let Some(command) = &self.command {
            panel.add_empty();
            panel.add_line(ColoredText::dim(format!("$ {}", command)).render(supports_color));
        }

        if let Some(stderr) = self.stderr.as_deref().filter(|s| !s.is_empty()) {
            panel.add_empty();
            for line in stderr.lines() {
                panel.add_line(ColoredText::dim(line).render(supports_color));
            }
        }

        if let Some(fix) = &self.fix {
            panel.add_empty();
            panel.add_line(format!("FIX: {}", fix));
        }

        panel.render(supports_color, supports_unicode)
    }
}
