//! # Why Command Implementation
//!
//! Dispatches each `manager:package` target to the script's `Why(package)`
//! callback, which should explain why the package is installed.

use anyhow::Result;

use pacx::batch::Policy;
use pacx::verb::Verb;

use super::PackageArgs;
use crate::cli::Context;

/// Execute the `why` command.
pub fn execute(context: &Context, args: PackageArgs) -> Result<()> {
    let options = args.options(Policy::FailFast);
    super::run_verb(context, Verb::Why, &args.packages, options)
}
