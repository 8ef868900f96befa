//! # Outdated Command Implementation
//!
//! Calls each named package manager's `Outdated()` callback, once per
//! distinct manager.

use anyhow::Result;

use pacx::verb::Verb;

use super::ManagerArgs;
use crate::cli::Context;

/// Execute the `outdated` command.
pub fn execute(context: &Context, args: ManagerArgs) -> Result<()> {
    let options = args.options();
    super::run_verb(context, Verb::Outdated, &args.managers, options)
}
