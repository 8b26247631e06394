//! gcloud Invocations
//!
//! `GcloudCommand` is the argument list for one CLI call plus how its
//! output should be handled. `CommandRunner` executes it; `ProcessRunner`
//! is the real implementation on top of `std::process::Command`.

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Mutex;

use crate::domain::ports::PlatformError;

/// How a command's output is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Read stdout/stderr; used for queries whose output is parsed
    Capture,
    /// Hand the terminal to the command so the operator sees progress
    Stream,
}

/// Arguments for a single gcloud call (program name excluded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcloudCommand {
    args: Vec<String>,
    mode: OutputMode,
}

impl GcloudCommand {
    pub fn capture<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            mode: OutputMode::Capture,
        }
    }

    pub fn stream<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            mode: OutputMode::Stream,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append `--name=value`
    pub fn flag(self, name: &str, value: impl std::fmt::Display) -> Self {
        self.arg(format!("--{}={}", name, value))
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Copy-pasteable command line
    pub fn display(&self, program: &str) -> String {
        std::iter::once(program)
            .chain(self.args.iter().map(String::as_str))
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Quote `s` for a POSIX shell when it contains anything unusual.
pub fn shell_quote(s: &str) -> String {
    let safe = !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '-' | '_' | '.' | '/' | ':' | '=' | ',' | '@' | '+')
        });
    if safe {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}

/// Captured output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Executes gcloud commands
///
/// Implementations must return `PlatformError::CommandFailed` for a
/// non-zero exit so callers never see a failed command as success.
pub trait CommandRunner {
    fn run(&self, program: &str, command: &GcloudCommand) -> Result<CommandOutput, PlatformError>;
}

/// Runs commands as child processes, blocking until they exit
pub struct ProcessRunner {
    /// Echo command lines (1) and captured output (2+) to the log writer
    verbose: u8,
    /// Capture even `Stream` commands (keeps stdout clean for NDJSON)
    capture_all: bool,
    log: Mutex<Box<dyn Write + Send>>,
}

impl ProcessRunner {
    pub fn new(verbose: u8, capture_all: bool) -> Self {
        Self {
            verbose,
            capture_all,
            log: Mutex::new(Box::new(std::io::stderr())),
        }
    }

    /// Create a runner logging to a custom writer (for testing)
    pub fn with_log<W: Write + Send + 'static>(verbose: u8, capture_all: bool, log: W) -> Self {
        Self {
            verbose,
            capture_all,
            log: Mutex::new(Box::new(log)),
        }
    }

    fn log_line(&self, line: &str) {
        if let Ok(mut log) = self.log.lock() {
            let _ = writeln!(log, "{}", line);
            let _ = log.flush();
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, command: &GcloudCommand) -> Result<CommandOutput, PlatformError> {
        let display = command.display(program);
        if self.verbose > 0 {
            self.log_line(&format!("$ {}", display));
        }

        let mut cmd = Command::new(program);
        cmd.args(command.args());

        let streaming = command.mode() == OutputMode::Stream && !self.capture_all;
        if streaming {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        } else {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
        }

        let spawn_error = |source| PlatformError::Spawn {
            program: program.to_string(),
            source,
        };

        let (status, output) = if streaming {
            (cmd.status().map_err(spawn_error)?, CommandOutput::default())
        } else {
            let out = cmd.output().map_err(spawn_error)?;
            let output = CommandOutput {
                stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            };
            (out.status, output)
        };

        if self.verbose > 1 {
            for line in output.stdout.lines() {
                self.log_line(&format!("  {}", line));
            }
        }

        if !status.success() {
            return Err(PlatformError::CommandFailed {
                command: display,
                code: status.code(),
                stderr: output.stderr,
            });
        }

        Ok(output)
    }
}
