//! # List Command Implementation
//!
//! This module implements the `list` subcommand, which calls each named
//! package manager's `List()` callback.
//!
//! Manager names are sorted and deduplicated first, so `pacx list apt apt`
//! loads and runs the `apt` script once.

use anyhow::Result;

use pacx::verb::Verb;

use super::ManagerArgs;
use crate::cli::Context;

/// Execute the `list` command.
pub fn execute(context: &Context, args: ManagerArgs) -> Result<()> {
    let options = args.options();
    super::run_verb(context, Verb::List, &args.managers, options)
}
