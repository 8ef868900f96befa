//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pacx::output::OutputConfig;

use crate::commands;

/// pacx - One set of commands for every package manager
#[derive(Parser, Debug)]
#[command(name = "pacx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Directory holding the <manager>.lua scripts.
    ///
    /// Defaults to `$XDG_CONFIG_HOME/pacx`, or the platform config directory
    /// (`~/.config/pacx` on Linux).
    #[arg(long, global = true, value_name = "DIR", env = "PACX_CONFIG_DIR")]
    config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show information about packages
    Info(commands::PackageArgs),

    /// Install packages
    #[command(visible_aliases = ["add", "i"])]
    Install(commands::BulkPackageArgs),

    /// Uninstall packages
    Uninstall(commands::PackageArgs),

    /// List installed packages of package managers
    List(commands::ManagerArgs),

    /// Show outdated packages of package managers
    Outdated(commands::ManagerArgs),

    /// Upgrade packages, or everything a package manager installed
    #[command(mut_arg("packages", |arg| arg
        .value_name("MANAGER[:PACKAGE]")
        .help("Packages in the form manager:package, or bare managers to upgrade everything")))]
    // `mut_arg` re-appends `packages`; re-append `flags` so it stays the last positional
    #[command(mut_arg("flags", |arg| arg))]
    Upgrade(commands::BulkPackageArgs),

    /// Show why a package is installed
    Why(commands::PackageArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

/// Settings every command needs besides its own arguments.
#[derive(Debug)]
pub struct Context {
    pub config_dir: Option<PathBuf>,
    pub output: OutputConfig,
}

impl Cli {
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::from_env_and_flag(&self.color)
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let context = Context {
            output: self.output_config(),
            config_dir: self.config_dir,
        };

        match self.command {
            Commands::Info(args) => commands::info::execute(&context, args),
            Commands::Install(args) => commands::install::execute(&context, args),
            Commands::Uninstall(args) => commands::uninstall::execute(&context, args),
            Commands::List(args) => commands::list::execute(&context, args),
            Commands::Outdated(args) => commands::outdated::execute(&context, args),
            Commands::Upgrade(args) => commands::upgrade::execute(&context, args),
            Commands::Why(args) => commands::why::execute(&context, args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` records to stderr. `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str) {
    let mut builder = env_logger::Builder::new();
    match std::env::var("RUST_LOG") {
        Ok(filters) if !filters.is_empty() => builder.parse_filters(&filters),
        _ => builder.parse_filters(level),
    };
    builder.format_timestamp(None).format_target(false);

    // A second initialisation (e.g. from tests) keeps the first logger
    let _ = builder.try_init();
}
