//! Roost command-line interface
//!
//! Runs account, relationship and session records through the profile
//! engine and prints the resulting controls as JSON.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use roost_cli::{commands, InputFiles};
use roost_profile::DefaultRowAction;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roost")]
#[command(about = "Roost - profile action and menu composition", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = "roost.toml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the full profile header decision
    Decide(InputArgs),

    /// Resolve the compact account-row controls
    Row {
        #[command(flatten)]
        input: InputArgs,

        /// Button offered for accounts with no notable relationship
        #[arg(long, value_enum, default_value = "follow")]
        default_action: RowDefault,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Account JSON file
    #[arg(long)]
    account: PathBuf,

    /// Relationship JSON file; omit while it is still loading
    #[arg(long)]
    relationship: Option<PathBuf>,

    /// Session JSON file; omit for an anonymous viewer
    #[arg(long)]
    session: Option<PathBuf>,

    /// Treat the subject as hidden from this viewer
    #[arg(long)]
    hidden: bool,
}

impl From<InputArgs> for InputFiles {
    fn from(args: InputArgs) -> Self {
        Self {
            account: args.account,
            relationship: args.relationship,
            session: args.session,
            hidden: args.hidden,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum RowDefault {
    Follow,
    Mute,
    Block,
}

impl From<RowDefault> for DefaultRowAction {
    fn from(value: RowDefault) -> Self {
        match value {
            RowDefault::Follow => Self::Follow,
            RowDefault::Mute => Self::Mute,
            RowDefault::Block => Self::Block,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the JSON output
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(&cli.config)?;
    tracing::debug!(local_domain = %config.local_domain, "configuration loaded");

    let output = match cli.command {
        Commands::Decide(input) => commands::decide(config, &input.into())?,
        Commands::Row {
            input,
            default_action,
        } => commands::row(config, &input.into(), default_action.into())?,
    };
    println!("{output}");
    Ok(())
}
