pub mod check;
pub mod deploy;
pub mod url;

use std::path::PathBuf;

use anyhow::Result;

use runcast::config::LoadedConfig;
use runcast::presentation::{Cli, ColorWhen};

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;

/// Flags shared by every command
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub verbose: u8,
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            color: cli.color,
            verbose: cli.verbose,
            config: cli.config.clone(),
        }
    }
}

/// Resolve configuration for the current directory and report any
/// unknown keys.
pub(crate) fn load_config(command: &str, globals: &GlobalArgs) -> Result<(LoadedConfig, UiContext)> {
    let cwd = std::env::current_dir()?;
    let loaded = runcast::config::resolve(globals.config.as_deref(), &cwd)?;
    let ui = UiContext::new(globals.json, globals.verbose, globals.color, &loaded.config);

    if loaded.warnings.is_empty() {
        return Ok((loaded, ui));
    }

    if ui.json {
        let mut out = std::io::stdout().lock();
        for w in &loaded.warnings {
            let _ = crate::ui::json::write_typed_event(
                &mut out,
                &serde_json::json!({
                    "event": "warning",
                    "command": command,
                    "kind": "unknown_config_key",
                    "key": w.key,
                    "file": w.file.display().to_string(),
                    "line": w.line,
                    "suggestion": w.suggestion,
                }),
            );
        }
    } else {
        if ui.caps.is_github_actions {
            for w in &loaded.warnings {
                println!(
                    "{}",
                    github_actions_annotation(
                        AnnotationLevel::Warning,
                        &format!("unknown key '{}' in {}", w.key, w.file.display()),
                        Some("Runcast config"),
                    )
                );
            }
        }
        eprint!(
            "{}",
            WarningBlock::config_warnings(&loaded.warnings).render(ui.color, ui.unicode)
        );
    }

    Ok((loaded, ui))
}

pub(crate) fn config_source(loaded: &LoadedConfig) -> Option<String> {
    loaded.source.as_ref().map(|p| p.display().to_string())
}
