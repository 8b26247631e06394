use runcast::application::INSTALL_URL;
use runcast::domain::ports::PlatformError;
use runcast::RuncastError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::json::events::ErrorEvent;

/// Process exit status for a failed command
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<RuncastError>()
        .map(RuncastError::exit_code)
        .unwrap_or(1)
}

fn platform_source(err: &RuncastError) -> Option<&PlatformError> {
    match err {
        RuncastError::Step { source, .. } => Some(source),
        _ => None,
    }
}

fn failed_command(err: &PlatformError) -> Option<&str> {
    match err {
        PlatformError::CommandFailed { command, .. }
        | PlatformError::UnexpectedOutput { command, .. } => Some(command),
        PlatformError::Spawn { .. } => None,
    }
}

fn fix_for(err: &RuncastError) -> Option<String> {
    match err {
        RuncastError::NotAuthenticated => Some("Run `gcloud auth login`, then retry.".to_string()),
        RuncastError::InvalidProjectId { .. } => {
            Some("Pass a project id like `my-project-123`, or set [project] id.".to_string())
        }
        RuncastError::InvalidDomain { .. } => {
            Some("Use a fully-qualified host name such as `api.example.com`.".to_string())
        }
        RuncastError::InvalidConfig { file, .. } => {
            Some(format!("Fix the TOML syntax in {}.", file.display()))
        }
        RuncastError::InvalidSetting { key, .. } => {
            Some(format!("Set `{}` in runcast.toml.", key))
        }
        RuncastError::Step { source, .. } if source.is_not_installed() => {
            Some(format!("Install the Google Cloud CLI: {}", INSTALL_URL))
        }
        RuncastError::Step { .. } => {
            Some("Run `runcast check` to verify gcloud and your project.".to_string())
        }
        RuncastError::Prompt(_) | RuncastError::Io(_) => None,
    }
}

fn title_for(err: &RuncastError) -> &'static str {
    match err.failed_step() {
        Some(step) => step.title(),
        None => match err {
            RuncastError::InvalidProjectId { .. } => "Invalid project id",
            RuncastError::InvalidDomain { .. } => "Invalid domain",
            RuncastError::InvalidConfig { .. } | RuncastError::InvalidSetting { .. } => {
                "Invalid config"
            }
            _ => "Runcast",
        },
    }
}

fn format_runcast_error(err: &RuncastError, supports_color: bool, supports_unicode: bool) -> String {
    let mut block = ErrorBlock::new(title_for(err), err.to_string());

    if let Some(source) = platform_source(err) {
        if let Some(command) = failed_command(source) {
            block = block.with_command(command);
        }
        if let Some(stderr) = source.stderr() {
            block = block.with_stderr(stderr);
        }
    }
    if let Some(fix) = fix_for(err) {
        block = block.with_fix(fix);
    }

    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(runcast) = err.downcast_ref::<RuncastError>() {
        return format_runcast_error(runcast, supports_color, supports_unicode);
    }

    format!("[ERROR] {:#}\n", err)
}

fn error_event<'a>(command: &'a str, err: &'a anyhow::Error) -> ErrorEvent<'a> {
    match err.downcast_ref::<RuncastError>() {
        Some(runcast) => ErrorEvent::new(command, runcast.code(), runcast.to_string())
            .with_exit_code(runcast.exit_code())
            .with_step(runcast.failed_step())
            .with_stderr(platform_source(runcast).and_then(PlatformError::stderr))
            .with_help(fix_for(runcast)),
        None => ErrorEvent::new(command, "error", format!("{:#}", err)),
    }
}

pub fn print_error(err: &anyhow::Error, command: &str, json: bool) {
    if json {
        let _ = crate::ui::json::emit_event(&error_event(command, err));
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_github_actions {
        let title = err
            .downcast_ref::<RuncastError>()
            .map(title_for)
            .unwrap_or("Runcast");
        println!(
            "{}",
            github_actions_annotation(AnnotationLevel::Error, &err.to_string(), Some(title))
        );
    }

    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
