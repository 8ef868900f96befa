//! # pacx
//!
//! One set of verbs (`install`, `uninstall`, `list`, `outdated`, `upgrade`,
//! `info`, `why`) for every package manager. pacx implements no package
//! manager itself: each one is a small Lua script in the user's config
//! directory that returns a table of callbacks.
//!
//! ## Quick Example
//!
//! ```no_run
//! use pacx::batch::{self, BatchOptions};
//! use pacx::session::Session;
//! use pacx::target::parse_targets;
//! use pacx::verb::Verb;
//!
//! let config_dir = pacx::defaults::resolve_config_dir(None)?;
//! let targets = parse_targets(Verb::Install, &["apt:curl", "brew:wget"])?;
//!
//! let mut session = Session::new(config_dir);
//! batch::run(
//!     &mut session,
//!     Verb::Install,
//!     &targets,
//!     &BatchOptions::default(),
//!     &mut std::io::stdout(),
//! )?;
//! # Ok::<(), pacx::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Targets (`target`)**: `manager:package` tokens, or bare manager names
//!   for manager-wide verbs.
//! - **Manager scripts (`manager`)**: loading a script into its own Lua
//!   state and dispatching a verb to its callback in an isolated coroutine.
//! - **Sessions (`session`)**: loading each manager at most once per command.
//! - **Batches (`batch`)**: running a verb over every target and folding the
//!   outcomes into one result.
//!
//! ## Execution Flow
//!
//! 1.  **Parse**: split tokens into targets, deduplicating manager-only ones.
//! 2.  **Load**: evaluate each distinct manager's script on first use.
//! 3.  **Dispatch**: call the verb's callback for each target in order.
//! 4.  **Aggregate**: report managers lacking the verb, or the failure that
//!     stopped the batch.

pub mod batch;
pub mod defaults;
pub mod error;
pub mod manager;
pub mod output;
pub mod session;
pub mod target;
pub mod verb;

#[cfg(test)]
mod target_proptest;
