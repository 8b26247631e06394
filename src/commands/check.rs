use anyhow::Result;

use runcast::presentation::factory::{create_check_use_case, RunnerOptions};

use super::{load_config, GlobalArgs};
use crate::ui::json::events::{CheckEvent, CompleteEvent, StartEvent};

pub fn cmd_check(project: Option<&str>, globals: &GlobalArgs) -> Result<()> {
    let (loaded, ui) = load_config("check", globals)?;
    let config = loaded.config.to_deploy_config(project)?;

    if ui.json {
        let _ = crate::ui::json::emit_event(&StartEvent::new("check"));
    } else {
        print!(
            "{}",
            crate::ui::views::check::render_check_header(
                config.project().as_str(),
                &loaded.config.platform.gcloud,
                ui.color,
                ui.unicode
            )
        );
    }

    let options = RunnerOptions {
        verbose: ui.verbose,
        capture_all: true,
    };
    let result = create_check_use_case(&loaded.config, options).execute(config.project());

    if ui.json {
        for item in &result.items {
            let _ = crate::ui::json::emit_event(&CheckEvent::new(item));
        }
        let complete = if result.is_success() {
            CompleteEvent::success("check")
        } else {
            CompleteEvent::failure("check")
        };
        let _ = crate::ui::json::emit_event(&complete);
    } else {
        print!(
            "{}",
            crate::ui::views::check::render_check_result(&result, ui.color, ui.unicode)
        );
    }

    if !result.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
