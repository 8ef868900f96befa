//! # Install Command Implementation
//!
//! This module implements the `install` subcommand (aliases `add` and `i`),
//! dispatching each `manager:package` target to the script's
//! `Install(package)` callback.
//!
//! ## Failure handling
//!
//! - **Default**: the first failing callback stops the command; managers
//!   without `Install` are listed once every target has run.
//! - **`--keep-going`**: every target runs, managers without `Install` are
//!   skipped, and all failures are reported together.

use anyhow::Result;

use pacx::verb::Verb;

use super::BulkPackageArgs;
use crate::cli::Context;

/// Execute the `install` command.
pub fn execute(context: &Context, args: BulkPackageArgs) -> Result<()> {
    let options = args.options();
    super::run_verb(context, Verb::Install, &args.common.packages, options)
}
