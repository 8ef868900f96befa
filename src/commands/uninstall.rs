//! # Uninstall Command Implementation
//!
//! Dispatches each `manager:package` target to the script's
//! `Uninstall(package)` callback.

use anyhow::Result;

use pacx::batch::Policy;
use pacx::verb::Verb;

use super::PackageArgs;
use crate::cli::Context;

/// Execute the `uninstall` command.
pub fn execute(context: &Context, args: PackageArgs) -> Result<()> {
    let options = args.options(Policy::FailFast);
    super::run_verb(context, Verb::Uninstall, &args.packages, options)
}
