use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Boxed outcome of a command: key/value rows, notes, next step
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    rows: Vec<(String, String)>,
    notes: Vec<String>,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    fn new(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            rows: Vec::new(),
            notes: Vec::new(),
            warnings: Vec::new(),
            next_step: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, true)
    }

    pub fn failure(title: impl Into<String>) -> Self {
        Self::new(title, false)
    }

    pub fn add_row(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push((label.into(), value.into()));
    }

    /// Free-form line shown below the rows
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon, title) = if self.success {
            (
                PanelStyle::Success,
                Icon::Success,
                ColoredText::success(self.title.as_str()),
            )
        } else {
            (
                PanelStyle::Error,
                Icon::Error,
                ColoredText::error(self.title.as_str()),
            )
        };

        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );

        let mut panel = Panel::with_title(header).style(style);

        if !self.rows.is_empty() {
            panel.add_empty();
            let label_width = self.rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
            for (label, value) in &self.rows {
                let padded = format!("{}{}", label, " ".repeat(label_width - label.width()));
                panel.add_line(format!(
                    "{}  {}",
                    ColoredText::dim(padded).render(supports_color),
                    value
                ));
            }
        }

        if !self.notes.is_empty() {
            panel.add_empty();
            for note in &self.notes {
                panel.add_line(note.clone());
            }
        }

        if !self.warnings.is_empty() {
            panel.add_empty();
            for warning in &self.warnings {
                panel.add_line(format!(
                    "{} {}",
                    Icon::Warning.colored(supports_color, supports_unicode),
                    warning
                ));
            }
        }

        if let Some(next_step) = &self.next_step {
            panel.add_empty();
            panel.add_line(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        panel.render(supports_color, supports_unicode)
    }
}
