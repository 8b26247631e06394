use std::sync::Arc;

use anyhow::Result;

use runcast::domain::ports::DeployEventSink;
use runcast::infrastructure::gcloud::deploy_plan;
use runcast::infrastructure::JsonEventSink;
use runcast::presentation::factory::{
    create_deploy_use_case, create_domain_prompt, PromptSource, RunnerOptions,
};
use runcast::presentation::DeployArgs;

use super::{config_source, load_config, GlobalArgs};
use crate::ui::console::ConsoleEventSink;

pub fn cmd_deploy(args: &DeployArgs, globals: &GlobalArgs) -> Result<()> {
    let (loaded, ui) = load_config("deploy", globals)?;
    let config = loaded.config.to_deploy_config(args.project.as_deref())?;
    let source = PromptSource::select(
        args.domain.as_deref(),
        args.no_domain,
        ui.json,
        ui.interactive(),
    )?;

    if args.dry_run {
        let plan = deploy_plan(&loaded.config.platform.gcloud, &config, source.planned_domain());
        if ui.json {
            println!("{}", serde_json::to_string(&plan)?);
        } else {
            let prompted = matches!(source, PromptSource::Terminal | PromptSource::Lines);
            print!(
                "{}",
                crate::ui::views::plan::render_plan(
                    config.project().as_str(),
                    &plan,
                    prompted,
                    ui.color,
                    ui.unicode
                )
            );
        }
        return Ok(());
    }

    if !ui.json {
        print!(
            "{}",
            crate::ui::views::deploy::render_deploy_header(
                &config,
                config_source(&loaded).as_deref(),
                ui.color,
                ui.unicode
            )
        );
    }

    let options = RunnerOptions {
        verbose: ui.verbose,
        capture_all: ui.json,
    };
    let use_case = create_deploy_use_case(&loaded.config, options);
    let sink: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(ui.color, ui.unicode))
    };
    let prompt = create_domain_prompt(source);

    let result = use_case.execute_with_events(&config, prompt.as_ref(), sink)?;

    if !ui.json {
        print!(
            "\n{}",
            crate::ui::views::deploy::render_deploy_summary(&result, ui.color, ui.unicode)
        );
    }

    Ok(())
}
