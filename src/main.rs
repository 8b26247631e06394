//! Runcast CLI - deploy the backend to Google Cloud Run
//!
//! Usage: runcast [PROJECT_ID] | runcast <COMMAND>
//!
//! Commands:
//!   deploy  Build the image and deploy the service (default)
//!   check   Check gcloud installation, session and project
//!   url     Print the URL and endpoints of the deployed service

use anyhow::Result;
use clap::Parser;

use runcast::presentation::{Cli, Commands};

mod commands;
mod ui;

use commands::GlobalArgs;

fn main() {
    let cli = Cli::parse();
    let globals = GlobalArgs::from_cli(&cli);
    let command = cli.into_command();
    let name = command_name(&command);

    if let Err(err) = run(command, &globals) {
        ui::error::print_error(&err, name, globals.json);
        std::process::exit(ui::error::exit_code(&err));
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Deploy(_) => "deploy",
        Commands::Check { .. } => "check",
        Commands::Url { .. } => "url",
    }
}

fn run(command: Commands, globals: &GlobalArgs) -> Result<()> {
    match command {
        Commands::Deploy(args) => commands::deploy::cmd_deploy(&args, globals),
        Commands::Check { project } => commands::check::cmd_check(project.as_deref(), globals),
        Commands::Url { project } => commands::url::cmd_url(project.as_deref(), globals),
    }
}
