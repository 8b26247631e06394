//! Line-based prompt for piped or redirected stdin

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use crate::domain::ports::{DomainPrompt, PromptError};
use crate::domain::value_objects::DomainName;

/// Reads answers one line at a time, writing questions to `output`.
///
/// End of input at the confirmation question counts as "no"; end of input
/// at the domain question is `PromptError::Closed`.
pub struct LinePrompt<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl LinePrompt<io::StdinLock<'static>, io::Stderr> {
    /// Questions on stderr, answers from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    fn ask(&self, question: &str) -> Result<Option<String>, PromptError> {
        {
            let mut out = self
                .output
                .lock()
                .map_err(|_| PromptError::Interaction("output lock poisoned".to_string()))?;
            write!(out, "{}", question)?;
            out.flush()?;
        }

        let mut input = self
            .input
            .lock()
            .map_err(|_| PromptError::Interaction("input lock poisoned".to_string()))?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output.into_inner().unwrap()
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
}

impl<R: BufRead, W: Write> DomainPrompt for LinePrompt<R, W> {
    fn confirm_mapping(&self, service: &str) -> Result<bool, PromptError> {
        let question = format!("Map a custom domain to {}? [y/N] ", service);
        Ok(self.ask(&question)?.is_some_and(|a| is_yes(&a)))
    }

    fn domain(&self) -> Result<DomainName, PromptError> {
        let answer = self
            .ask("Domain (e.g. api.example.com): ")?
            .ok_or(PromptError::Closed)?;
        DomainName::parse(&answer).map_err(|reason| PromptError::InvalidDomain {
            input: answer,
            reason,
        })
    }
}
