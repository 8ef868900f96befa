//! # Manager Scripts
//!
//! A package manager is defined by a Lua script at
//! `<config-dir>/<manager>.lua` that evaluates to a table of callbacks:
//!
//! ```lua
//! return {
//!     Install = function(pkg) os.execute("apt-get install -y " .. pkg) end,
//!     List = function() os.execute("apt list --installed") end,
//! }
//! ```
//!
//! ## Loading
//!
//! [`ManagerConfig::load`] reads the script, evaluates its top level in a
//! fresh Lua state, and extracts one optional binding per [`Verb`]. No
//! callback runs during loading.
//!
//! ## Dispatch
//!
//! [`ManagerConfig::invoke`] runs a binding inside its own coroutine, so an
//! error raised by the script comes back as [`Outcome::Failure`] instead of
//! unwinding through the host. A missing binding is [`Outcome::Undefined`],
//! never an error.
//!
//! Each `ManagerConfig` owns its Lua state exclusively; dropping it closes
//! the state.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use mlua::{Function, Lua, Table, ThreadStatus, Value, Variadic};

use crate::defaults;
use crate::error::{Error, ExecutionError, Result};
use crate::verb::Verb;

/// Result of dispatching one verb to one manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The callback returned normally.
    Success,
    /// The manager does not implement the verb.
    Undefined(String),
    /// The callback raised an error.
    Failure(ExecutionError),
}

/// Callbacks a manager script exposes, one slot per verb.
#[derive(Debug, Default, Clone)]
pub struct Bindings {
    pub info: Option<Function>,
    pub install: Option<Function>,
    pub uninstall: Option<Function>,
    pub list: Option<Function>,
    pub outdated: Option<Function>,
    pub upgrade: Option<Function>,
    pub why: Option<Function>,
}

impl Bindings {
    pub fn get(&self, verb: Verb) -> Option<&Function> {
        self.slot(verb).as_ref()
    }

    fn slot(&self, verb: Verb) -> &Option<Function> {
        match verb {
            Verb::Info => &self.info,
            Verb::Install => &self.install,
            Verb::Uninstall => &self.uninstall,
            Verb::List => &self.list,
            Verb::Outdated => &self.outdated,
            Verb::Upgrade => &self.upgrade,
            Verb::Why => &self.why,
        }
    }

    fn slot_mut(&mut self, verb: Verb) -> &mut Option<Function> {
        match verb {
            Verb::Info => &mut self.info,
            Verb::Install => &mut self.install,
            Verb::Uninstall => &mut self.uninstall,
            Verb::List => &mut self.list,
            Verb::Outdated => &mut self.outdated,
            Verb::Upgrade => &mut self.upgrade,
            Verb::Why => &mut self.why,
        }
    }

    /// Verbs with a bound callback, in [`Verb::ALL`] order.
    pub fn defined(&self) -> Vec<Verb> {
        Verb::ALL
            .into_iter()
            .filter(|verb| self.get(*verb).is_some())
            .collect()
    }
}

/// One manager's loaded script and the Lua state that owns it.
#[derive(Debug)]
pub struct ManagerConfig {
    name: String,
    path: PathBuf,
    source: String,
    bindings: Bindings,
    // Declared last so the bindings are released before the state closes.
    lua: Lua,
}

impl ManagerConfig {
    /// Load `<config_dir>/<manager>.lua`.
    pub fn load(config_dir: &Path, manager: &str) -> Result<Self> {
        let path = defaults::script_path(config_dir, manager);
        debug!("loading {} config from {}", manager, path.display());

        let source = fs::read_to_string(&path).map_err(|source| Error::ConfigNotFound {
            manager: manager.to_string(),
            path: path.clone(),
            source,
        })?;

        Self::from_source(manager, path, source)
    }

    /// Evaluate `source` as the script for `manager`.
    ///
    /// `path` is only used for error messages and chunk naming.
    pub fn from_source(manager: &str, path: PathBuf, source: String) -> Result<Self> {
        let lua = Lua::new();

        let value = lua
            .load(source.as_str())
            .set_name(format!("@{}", path.display()))
            .eval::<Value>()
            .map_err(|err| Error::ConfigScript {
                manager: manager.to_string(),
                path: path.clone(),
                message: lua_message(&err),
            })?;

        let table = match value {
            Value::Table(table) => table,
            other => {
                return Err(Error::ConfigShape {
                    manager: manager.to_string(),
                    path,
                    message: format!("expected a table, got {}", lua_type(&other)),
                })
            }
        };

        let bindings = extract_bindings(&table).map_err(|message| Error::ConfigShape {
            manager: manager.to_string(),
            path: path.clone(),
            message,
        })?;
        debug!("{} defines {:?}", manager, bindings.defined());

        Ok(ManagerConfig {
            name: manager.to_string(),
            path,
            source,
            bindings,
            lua,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Run the binding for `verb` with positional arguments. `None` is passed
    /// to the script as `nil`.
    pub fn invoke(&self, verb: Verb, args: &[Option<String>]) -> Outcome {
        let Some(function) = self.bindings.get(verb) else {
            debug!("{} does not define {}", self.name, verb.field());
            return Outcome::Undefined(self.name.clone());
        };

        debug!("calling {}.{}{:?}", self.name, verb.field(), args);
        match self.call_isolated(function, args) {
            Ok(()) => Outcome::Success,
            Err(err) => Outcome::Failure(ExecutionError {
                manager: self.name.clone(),
                verb,
                cause: lua_message(&err),
            }),
        }
    }

    fn call_isolated(&self, function: &Function, args: &[Option<String>]) -> mlua::Result<()> {
        let thread = self.lua.create_thread(function.clone())?;
        let args: Variadic<Option<String>> = args.iter().cloned().collect();
        thread.resume::<()>(args)?;

        if thread.status() == ThreadStatus::Resumable {
            warn!(
                "{}: callback yielded before returning; treating it as finished",
                self.name
            );
        }
        Ok(())
    }

    /// Source lines of the function bound to `verb`, if any.
    pub fn function_source(&self, verb: Verb) -> Option<String> {
        let info = self.bindings.get(verb)?.info();
        let first = info.line_defined?.max(1);
        let last = info.last_line_defined?;

        let mut src = String::new();
        for line in self
            .source
            .lines()
            .skip(first - 1)
            .take((last + 1).saturating_sub(first))
        {
            src.push_str(line);
            src.push('\n');
        }
        Some(src)
    }
}

impl Drop for ManagerConfig {
    fn drop(&mut self) {
        debug!("closing script engine for {}", self.name);
    }
}

fn extract_bindings(table: &Table) -> std::result::Result<Bindings, String> {
    let mut bindings = Bindings::default();

    for verb in Verb::ALL {
        let value: Value = table.get(verb.field()).map_err(|err| lua_message(&err))?;
        match value {
            Value::Nil => {}
            Value::Function(function) => *bindings.slot_mut(verb) = Some(function),
            other => {
                return Err(format!(
                    "field {} must be a function, got {}",
                    verb.field(),
                    lua_type(&other)
                ))
            }
        }
    }

    for pair in table.clone().pairs::<Value, Value>() {
        let (key, _) = pair.map_err(|err| lua_message(&err))?;
        if let Value::String(key) = key {
            let key = key.to_string_lossy().to_string();
            if Verb::from_field(&key).is_none() {
                debug!("ignoring unknown field {key}");
            }
        }
    }

    Ok(bindings)
}

/// Type name as Lua's `type()` reports it. The engine splits numbers into
/// integer and float subtypes, which scripts never see.
fn lua_type(value: &Value) -> &'static str {
    match value {
        Value::Integer(_) | Value::Number(_) => "number",
        other => other.type_name(),
    }
}

/// The script-facing part of an engine error, without the stack traceback.
fn lua_message(err: &mlua::Error) -> String {
    let message = match err {
        mlua::Error::RuntimeError(message) | mlua::Error::SyntaxError { message, .. } => {
            message.clone()
        }
        other => other.to_string(),
    };

    match message.split_once("\nstack traceback:") {
        Some((head, _)) => head.to_string(),
        None => message,
    }
}
