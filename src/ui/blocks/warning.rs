use runcast::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// One line per unknown config key, with a suggestion when one is close
    pub fn config_warnings(warnings: &[ConfigWarning]) -> Self {
        let mut block = Self::new("Config warnings");
        for w in warnings {
            let location = match w.line {
                Some(line) => format!("{}:{}", w.file.display(), line),
                None => w.file.display().to_string(),
            };
            let mut line = format!("unknown key '{}' in {}", w.key, location);
            if let Some(suggestion) = &w.suggestion {
                line.push_str(&format!(" (did you mean '{}'?)", suggestion));
            }
            block.add_line(line);
        }
        block
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(self.title.as_str()).bold().render(supports_color)
        );
        let mut panel = Panel::with_title(header).style(PanelStyle::Warning);
        for line in &self.lines {
            panel.add_line(line.clone());
        }
        panel.render(supports_color, supports_unicode)
    }
}
