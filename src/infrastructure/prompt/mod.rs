//! `DomainPrompt` implementations
//!
//! - `TerminalPrompt` - dialoguer prompts when stdin is a terminal
//! - `LinePrompt` - plain line reads for piped input

mod line;
mod terminal;

pub use line::LinePrompt;
pub use terminal::TerminalPrompt;
