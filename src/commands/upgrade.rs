//! # Upgrade Command Implementation
//!
//! This module implements the `upgrade` subcommand. Targets may be
//! `manager:package`, which calls `Upgrade(package)`, or a bare manager
//! name, which calls `Upgrade()` to upgrade everything that manager
//! installed.
//!
//! Like `install`, it accepts `--keep-going` to run every target and report
//! all failures together.

use anyhow::Result;

use pacx::verb::Verb;

use super::BulkPackageArgs;
use crate::cli::Context;

/// Execute the `upgrade` command.
pub fn execute(context: &Context, args: BulkPackageArgs) -> Result<()> {
    let options = args.options();
    super::run_verb(context, Verb::Upgrade, &args.common.packages, options)
}
