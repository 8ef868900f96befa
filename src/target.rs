//! # Target Parsing
//!
//! Turns raw command-line tokens into [`Target`]s. Package-scoped verbs take
//! `manager:package` tokens, split on the first colon only so package names
//! may themselves contain colons. Manager-scoped verbs take bare manager
//! names, which are sorted and deduplicated so each script loads once.

use crate::error::{Error, Result};
use crate::verb::{Scope, Verb};

/// A single unit of work within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Manager name, also the base name of its script.
    pub manager: String,
    /// Package to operate on; `None` for manager-wide operations.
    pub package: Option<String>,
}

impl Target {
    /// Parse a `manager:package` token.
    pub fn parse_package(token: &str) -> Result<Self> {
        let (manager, package) = token.split_once(':').ok_or_else(|| {
            Error::invalid_argument(format!(
                "invalid target '{token}': expected the form manager:package"
            ))
        })?;
        validate_manager(manager, token)?;
        if package.is_empty() {
            return Err(Error::invalid_argument(format!(
                "invalid target '{token}': missing package name"
            )));
        }

        Ok(Target {
            manager: manager.to_string(),
            package: Some(package.to_string()),
        })
    }

    /// Parse a bare manager token.
    pub fn parse_manager(token: &str) -> Result<Self> {
        validate_manager(token, token)?;
        Ok(Target {
            manager: token.to_string(),
            package: None,
        })
    }
}

/// Parse every token for `verb`, preserving input order.
///
/// Manager-scoped verbs get their managers sorted and deduplicated. An empty
/// token list is rejected.
pub fn parse_targets<S: AsRef<str>>(verb: Verb, tokens: &[S]) -> Result<Vec<Target>> {
    if tokens.is_empty() {
        let message = match verb.scope() {
            Scope::Package => "no package specified",
            Scope::Manager | Scope::Either => "no package manager specified",
        };
        return Err(Error::invalid_argument(message));
    }

    match verb.scope() {
        Scope::Package => tokens
            .iter()
            .map(|token| Target::parse_package(token.as_ref()))
            .collect(),
        Scope::Manager => {
            let mut managers: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
            managers.sort_unstable();
            managers.dedup();
            managers.into_iter().map(Target::parse_manager).collect()
        }
        Scope::Either => tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                if token.contains(':') {
                    Target::parse_package(token)
                } else {
                    Target::parse_manager(token)
                }
            })
            .collect(),
    }
}

fn validate_manager(manager: &str, token: &str) -> Result<()> {
    if manager.is_empty() {
        return Err(Error::invalid_argument(format!(
            "invalid target '{token}': missing package manager"
        )));
    }
    if manager.contains(':') {
        return Err(Error::invalid_argument(format!(
            "invalid package manager name '{manager}': this command takes bare manager names"
        )));
    }
    if manager.starts_with('.') || manager.contains(['/', '\\']) {
        return Err(Error::invalid_argument(format!(
            "invalid package manager name '{manager}'"
        )));
    }
    Ok(())
}
