//! The closed set of verbs pacx dispatches to manager scripts.

use std::fmt;

/// What a verb's command-line tokens name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Tokens are `manager:package`.
    Package,
    /// Tokens are bare manager names, deduplicated before loading.
    Manager,
    /// Tokens may be either form.
    Either,
}

/// One of the operations a manager script may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verb {
    Info,
    Install,
    Uninstall,
    List,
    Outdated,
    Upgrade,
    Why,
}

impl Verb {
    /// Every verb, in the order bindings are read from a script.
    pub const ALL: [Verb; 7] = [
        Verb::Info,
        Verb::Install,
        Verb::Uninstall,
        Verb::List,
        Verb::Outdated,
        Verb::Upgrade,
        Verb::Why,
    ];

    /// Lowercase name used on the command line and in messages.
    pub fn name(self) -> &'static str {
        match self {
            Verb::Info => "info",
            Verb::Install => "install",
            Verb::Uninstall => "uninstall",
            Verb::List => "list",
            Verb::Outdated => "outdated",
            Verb::Upgrade => "upgrade",
            Verb::Why => "why",
        }
    }

    /// Field name looked up in the table a manager script returns.
    pub fn field(self) -> &'static str {
        match self {
            Verb::Info => "Info",
            Verb::Install => "Install",
            Verb::Uninstall => "Uninstall",
            Verb::List => "List",
            Verb::Outdated => "Outdated",
            Verb::Upgrade => "Upgrade",
            Verb::Why => "Why",
        }
    }

    pub fn scope(self) -> Scope {
        match self {
            Verb::List | Verb::Outdated => Scope::Manager,
            Verb::Upgrade => Scope::Either,
            Verb::Info | Verb::Install | Verb::Uninstall | Verb::Why => Scope::Package,
        }
    }

    /// Look a verb up by its script field name.
    pub fn from_field(field: &str) -> Option<Verb> {
        Verb::ALL.into_iter().find(|verb| verb.field() == field)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
