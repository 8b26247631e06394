use anyhow::Result;

use runcast::domain::entities::BACKEND_API;
use runcast::presentation::factory::{create_deploy_use_case, RunnerOptions};

use super::{load_config, GlobalArgs};
use crate::ui::json::events::EndpointsEvent;

pub fn cmd_url(project: Option<&str>, globals: &GlobalArgs) -> Result<()> {
    let (loaded, ui) = load_config("url", globals)?;
    let config = loaded.config.to_deploy_config(project)?;

    let options = RunnerOptions {
        verbose: ui.verbose,
        capture_all: true,
    };
    let endpoints = create_deploy_use_case(&loaded.config, options).resolve_endpoints(&config)?;

    if ui.json {
        crate::ui::json::emit_event(&EndpointsEvent::new(
            config.service_name(),
            &endpoints,
            &BACKEND_API,
        ))?;
    } else {
        print!(
            "{}",
            crate::ui::views::url::render_endpoints(
                config.service_name(),
                &endpoints,
                ui.color,
                ui.unicode
            )
        );
    }

    Ok(())
}
