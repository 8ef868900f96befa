//! # Error Handling
//!
//! This module defines the centralized error type for `pacx`. It uses
//! `thiserror` to build a single `Error` enum covering every failure a
//! command run can produce, with messages that are shown to the user
//! verbatim.
//!
//! ## Taxonomy
//!
//! - **`InvalidArgument`**: malformed `manager:package` tokens or an empty
//!   target list. Raised before any script is loaded.
//! - **Configuration load failures** (`ConfigNotFound`, `ConfigScript`,
//!   `ConfigShape`): fatal for the whole command. Use
//!   [`Error::config_load_kind`] to classify them.
//! - **`Execution`**: a callback raised an error inside its script.
//! - **`FunctionUndefined`**: the batch-level report of managers that do not
//!   implement the requested verb. Manager names are sorted and unique.
//! - **`Batch`**: every execution failure of a collect-all run.
//! - **`Io`**: writing command output failed.
//!
//! "Not defined" is never produced by the dispatcher itself; it is an
//! [`Outcome`](crate::manager::Outcome) variant that the batch aggregator
//! folds into `FunctionUndefined`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::verb::Verb;

/// Which stage of configuration loading failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLoadKind {
    /// The script file does not exist or could not be read.
    NotFound,
    /// The script failed while evaluating its top level.
    ScriptError,
    /// The script evaluated to something other than a table of callbacks.
    BadShape,
}

/// A callback that raised an error while running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionError {
    /// Manager whose script failed.
    pub manager: String,
    /// Verb that was being dispatched.
    pub verb: Verb,
    /// The script's own error message.
    pub cause: String,
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to execute function {}: {}", self.verb, self.cause)
    }
}

impl std::error::Error for ExecutionError {}

/// Main error type for pacx operations
#[derive(Error, Debug)]
pub enum Error {
    /// A target token was malformed or no targets were given.
    #[error("{message}")]
    InvalidArgument { message: String },

    /// Neither an override nor a platform config directory is available.
    #[error("failed to find config directory\n  hint: set XDG_CONFIG_HOME or pass --config-dir")]
    ConfigDirUnavailable,

    /// The manager's script could not be read.
    #[error("failed to open config file {} for {manager}: {source}\n  hint: create it and return a table such as {{ Install = function(pkg) ... end }}", path.display())]
    ConfigNotFound {
        manager: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manager's script raised an error while being evaluated.
    #[error("failed to load config file {}: {message}", path.display())]
    ConfigScript {
        manager: String,
        path: PathBuf,
        message: String,
    },

    /// The manager's script did not return a table of callbacks.
    #[error("failed to load configuration for {manager} from {}: {message}\n  hint: the script must end with `return {{ ... }}` whose fields are functions", path.display())]
    ConfigShape {
        manager: String,
        path: PathBuf,
        message: String,
    },

    /// A callback failed at runtime.
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// Some managers do not implement the requested verb.
    #[error("function {verb} is not defined for {}", managers.join(", "))]
    FunctionUndefined { verb: Verb, managers: Vec<String> },

    /// All callback failures of a collect-all run, one per line.
    #[error("{}", failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))]
    Batch { failures: Vec<ExecutionError> },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    /// Classify a configuration load failure, or `None` for any other error.
    pub fn config_load_kind(&self) -> Option<ConfigLoadKind> {
        match self {
            Error::ConfigNotFound { .. } => Some(ConfigLoadKind::NotFound),
            Error::ConfigScript { .. } => Some(ConfigLoadKind::ScriptError),
            Error::ConfigShape { .. } => Some(ConfigLoadKind::BadShape),
            _ => None,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
