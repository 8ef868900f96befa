//! # Info Command Implementation
//!
//! This module implements the `info` subcommand, which asks each package's
//! manager to describe it through the script's `Info(package)` callback.
//!
//! Targets run in order. Managers without an `Info` callback are reported
//! together at the end; the first callback failure stops the command.

use anyhow::Result;

use pacx::batch::Policy;
use pacx::verb::Verb;

use super::PackageArgs;
use crate::cli::Context;

/// Execute the `info` command.
pub fn execute(context: &Context, args: PackageArgs) -> Result<()> {
    let options = args.options(Policy::FailFast);
    super::run_verb(context, Verb::Info, &args.packages, options)
}
