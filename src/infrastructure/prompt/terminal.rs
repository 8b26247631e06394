//! Interactive terminal prompt

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use crate::domain::ports::{DomainPrompt, PromptError};
use crate::domain::value_objects::DomainName;

/// Prompts through `dialoguer`; requires a terminal on stdin/stderr.
#[derive(Default)]
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

fn interaction(err: dialoguer::Error) -> PromptError {
    PromptError::Interaction(err.to_string())
}

impl DomainPrompt for TerminalPrompt {
    fn confirm_mapping(&self, service: &str) -> Result<bool, PromptError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(format!("Map a custom domain to {}?", service))
            .default(false)
            .interact()
            .map_err(interaction)
    }

    fn domain(&self) -> Result<DomainName, PromptError> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt("Domain")
            .validate_with(|input: &String| -> Result<(), String> {
                DomainName::parse(input).map(drop).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(interaction)?;

        DomainName::parse(&answer).map_err(|reason| PromptError::InvalidDomain {
            input: answer,
            reason,
        })
    }
}
