//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `pacx`
//! command-line tool. Each verb lives in its own file and forwards to
//! [`run_verb`], which parses the targets, opens a [`Session`] on the
//! configured script directory, and runs the batch.
//!
//! ## Structure
//!
//! The argument structs are shared because every verb takes the same shape
//! of input:
//! - [`PackageArgs`] for verbs that act on `manager:package` targets.
//! - [`BulkPackageArgs`] adds `--keep-going` for verbs that may run over
//!   many packages unattended.
//! - [`ManagerArgs`] for verbs that act on whole package managers.

pub mod completions;
pub mod info;
pub mod install;
pub mod list;
pub mod outdated;
pub mod uninstall;
pub mod upgrade;
pub mod why;

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use pacx::batch::{self, BatchOptions, Policy};
use pacx::defaults;
use pacx::output;
use pacx::session::Session;
use pacx::target::parse_targets;
use pacx::verb::Verb;

use crate::cli::Context;

/// Arguments for verbs that act on packages
#[derive(Args, Debug)]
pub struct PackageArgs {
    /// Packages to operate on, in the form manager:package
    #[arg(value_name = "MANAGER:PACKAGE")]
    pub packages: Vec<String>,

    /// Print the source of the function without executing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Flags to pass to the package manager
    #[arg(last = true, value_name = "FLAGS")]
    pub flags: Vec<String>,
}

/// Arguments for package verbs that support collecting every failure
#[derive(Args, Debug)]
pub struct BulkPackageArgs {
    #[command(flatten)]
    pub common: PackageArgs,

    /// Keep going after a failure and report all failures at the end
    #[arg(short = 'k', long)]
    pub keep_going: bool,
}

/// Arguments for verbs that act on package managers
#[derive(Args, Debug)]
pub struct ManagerArgs {
    /// Package managers to operate on
    #[arg(value_name = "MANAGER")]
    pub managers: Vec<String>,

    /// Print the source of the function without executing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Flags to pass to the package manager
    #[arg(last = true, value_name = "FLAGS")]
    pub flags: Vec<String>,
}

impl PackageArgs {
    fn options(&self, policy: Policy) -> BatchOptions {
        BatchOptions {
            policy,
            dry_run: self.dry_run,
            flags: self.flags.clone(),
        }
    }
}

impl BulkPackageArgs {
    fn options(&self) -> BatchOptions {
        let policy = if self.keep_going {
            Policy::CollectAll
        } else {
            Policy::FailFast
        };
        self.common.options(policy)
    }
}

impl ManagerArgs {
    fn options(&self) -> BatchOptions {
        BatchOptions {
            policy: Policy::FailFast,
            dry_run: self.dry_run,
            flags: self.flags.clone(),
        }
    }
}

/// Run `verb` over `tokens` and print any dry-run previews.
pub fn run_verb(
    context: &Context,
    verb: Verb,
    tokens: &[String],
    options: BatchOptions,
) -> Result<()> {
    let targets = parse_targets(verb, tokens)?;
    let config_dir = defaults::resolve_config_dir(context.config_dir.as_deref())?;
    let mut session = Session::new(config_dir);

    let mut previews = Vec::new();
    let result = batch::run(&mut session, verb, &targets, &options, &mut previews);

    // Previews gathered before a failure are still shown
    if !previews.is_empty() {
        let text = String::from_utf8_lossy(&previews);
        let mut stdout = io::stdout().lock();
        stdout.write_all(output::preview(&context.output, &text).as_bytes())?;
        stdout.flush()?;
    }

    result?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacx::error::{ConfigLoadKind, Error};
    use pacx::output::OutputConfig;
    use std::fs;
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> Context {
        Context {
            config_dir: Some(dir.path().to_path_buf()),
            output: OutputConfig::without_color(),
        }
    }

    #[test]
    fn test_run_verb_rejects_empty_targets_before_loading() {
        let dir = TempDir::new().unwrap();
        let err = run_verb(&context(&dir), Verb::Install, &[], BatchOptions::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "no package specified");
    }

    #[test]
    fn test_run_verb_reports_missing_manager() {
        let dir = TempDir::new().unwrap();
        let err = run_verb(
            &context(&dir),
            Verb::List,
            &["nope".to_string()],
            BatchOptions::default(),
        )
        .unwrap_err();

        let err = err.downcast::<Error>().unwrap();
        assert_eq!(err.config_load_kind(), Some(ConfigLoadKind::NotFound));
    }

    #[test]
    fn test_run_verb_success() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("apt.lua"), "return { Why = function(pkg) end }").unwrap();

        run_verb(
            &context(&dir),
            Verb::Why,
            &["apt:curl".to_string()],
            BatchOptions::default(),
        )
        .unwrap();
    }

    #[test]
    fn test_keep_going_selects_collect_all() {
        let args = BulkPackageArgs {
            common: PackageArgs {
                packages: vec!["apt:curl".to_string()],
                dry_run: true,
                flags: vec!["-y".to_string()],
            },
            keep_going: true,
        };
        let options = args.options();
        assert_eq!(options.policy, Policy::CollectAll);
        assert!(options.dry_run);
        assert_eq!(options.flags, vec!["-y"]);

        let args = BulkPackageArgs {
            keep_going: false,
            ..args
        };
        assert_eq!(args.options().policy, Policy::FailFast);
    }
}
