//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - `runcast [PROJECT_ID]` without a subcommand deploys

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Runcast - deploy the backend to Google Cloud Run
#[derive(Parser, Debug)]
#[command(name = "runcast")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "Run 'runcast check' first to verify gcloud and your session.")]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v prints gcloud commands, -vv also their output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./runcast.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub deploy: DeployArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployArgs {
    /// Google Cloud project ID (default from config)
    #[arg(value_name = "PROJECT_ID")]
    pub project: Option<String>,

    /// Print the gcloud commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Map this custom domain without prompting
    #[arg(long, value_name = "DOMAIN", conflicts_with = "no_domain")]
    pub domain: Option<String>,

    /// Skip the domain mapping prompt
    #[arg(long)]
    pub no_domain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the image and deploy the service (default)
    Deploy(DeployArgs),

    /// Check gcloud installation, session and project
    Check {
        /// Google Cloud project ID (default from config)
        #[arg(value_name = "PROJECT_ID")]
        project: Option<String>,
    },

    /// Print the URL and endpoints of the deployed service
    Url {
        /// Google Cloud project ID (default from config)
        #[arg(value_name = "PROJECT_ID")]
        project: Option<String>,
    },
}

impl Cli {
    /// The command to run; bare `runcast [PROJECT_ID]` is a deploy.
    pub fn into_command(self) -> Commands {
        match self.command {
            Some(command) => command,
            None => Commands::Deploy(self.deploy),
        }
    }
}
