//! # Batch Execution
//!
//! Drives one verb across every target of a command and folds the per-target
//! [`Outcome`]s into a single result.
//!
//! ## Policies
//!
//! - **[`Policy::FailFast`]**: managers that do not implement the verb are
//!   collected and the batch keeps going; the first callback failure aborts
//!   the remaining targets. A non-empty undefined set becomes
//!   [`Error::FunctionUndefined`] once every target has run.
//! - **[`Policy::CollectAll`]**: every target runs. Undefined managers are
//!   skipped silently and all callback failures are returned together as
//!   [`Error::Batch`].
//!
//! Script load failures abort the batch under either policy.

use std::collections::BTreeSet;
use std::io::Write;

use log::info;

use crate::error::{Error, ExecutionError, Result};
use crate::manager::{ManagerConfig, Outcome};
use crate::session::Session;
use crate::target::Target;
use crate::verb::{Scope, Verb};

/// How a batch reacts to callback failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    #[default]
    FailFast,
    CollectAll,
}

/// Options shared by every target of a batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub policy: Policy,
    /// Print the bound function's source instead of calling it.
    pub dry_run: bool,
    /// Extra arguments for the package manager, passed to every callback as
    /// one trailing space-joined string.
    pub flags: Vec<String>,
}

/// What a batch observed, before it is turned into a command result.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Managers lacking the verb, sorted and unique.
    pub undefined: BTreeSet<String>,
    pub failures: Vec<ExecutionError>,
    pub succeeded: usize,
}

impl BatchReport {
    /// Fold the report into the command result for `verb`.
    pub fn into_result(self, verb: Verb, policy: Policy) -> Result<()> {
        match policy {
            Policy::FailFast => {
                if let Some(failure) = self.failures.into_iter().next() {
                    return Err(failure.into());
                }
                if !self.undefined.is_empty() {
                    return Err(Error::FunctionUndefined {
                        verb,
                        managers: self.undefined.into_iter().collect(),
                    });
                }
                Ok(())
            }
            Policy::CollectAll => {
                if self.failures.is_empty() {
                    Ok(())
                } else {
                    Err(Error::Batch {
                        failures: self.failures,
                    })
                }
            }
        }
    }
}

/// Dispatch `verb` to every target in order.
///
/// Dry-run previews are written to `out`.
pub fn run<W: Write>(
    session: &mut Session,
    verb: Verb,
    targets: &[Target],
    options: &BatchOptions,
    out: &mut W,
) -> Result<()> {
    let report = collect(session, verb, targets, options, out)?;
    info!(
        "{}: {} succeeded, {} undefined, {} failed",
        verb,
        report.succeeded,
        report.undefined.len(),
        report.failures.len()
    );
    report.into_result(verb, options.policy)
}

/// Run every target and record the outcomes.
///
/// Under [`Policy::FailFast`] this stops after the first failure, which is
/// then the last entry in `failures`.
pub fn collect<W: Write>(
    session: &mut Session,
    verb: Verb,
    targets: &[Target],
    options: &BatchOptions,
    out: &mut W,
) -> Result<BatchReport> {
    if targets.is_empty() {
        return Err(Error::invalid_argument(match verb.scope() {
            Scope::Package => "no package specified",
            _ => "no package manager specified",
        }));
    }

    let mut report = BatchReport::default();

    for target in targets {
        let config = session.config(&target.manager)?;
        let args = callback_args(verb, target, &options.flags);

        let outcome = if options.dry_run {
            preview(config, verb, &args, out)?
        } else {
            config.invoke(verb, &args)
        };

        match outcome {
            Outcome::Success => report.succeeded += 1,
            Outcome::Undefined(manager) => {
                if options.policy == Policy::CollectAll {
                    info!("{manager} does not define {verb}, skipping");
                }
                report.undefined.insert(manager);
            }
            Outcome::Failure(failure) => {
                report.failures.push(failure);
                if options.policy == Policy::FailFast {
                    break;
                }
            }
        }
    }

    Ok(report)
}

/// Positional arguments for one callback: the package, then the joined flags.
///
/// A whole-manager target of a verb that also takes packages keeps the
/// package slot as `nil`, so flags always arrive second.
fn callback_args(verb: Verb, target: &Target, flags: &[String]) -> Vec<Option<String>> {
    let mut args = Vec::with_capacity(2);
    match &target.package {
        Some(package) => args.push(Some(package.clone())),
        None if verb.scope() == Scope::Either && !flags.is_empty() => args.push(None),
        None => {}
    }
    if !flags.is_empty() {
        args.push(Some(flags.join(" ")));
    }
    args
}

fn preview<W: Write>(
    config: &ManagerConfig,
    verb: Verb,
    args: &[Option<String>],
    out: &mut W,
) -> Result<Outcome> {
    if config.bindings().get(verb).is_none() {
        return Ok(Outcome::Undefined(config.name().to_string()));
    }

    let quoted: Vec<String> = args
        .iter()
        .map(|arg| match arg {
            Some(arg) => format!("{arg:?}"),
            None => "nil".to_string(),
        })
        .collect();
    writeln!(
        out,
        "-- {}: {}({})",
        config.name(),
        verb.field(),
        quoted.join(", ")
    )?;
    match config.function_source(verb) {
        Some(src) => write!(out, "{src}")?,
        None => writeln!(out, "-- source unavailable")?,
    }

    Ok(Outcome::Success)
}
