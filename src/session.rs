//! Per-command cache of loaded manager scripts.
//!
//! A [`Session`] loads each manager's script the first time it is asked for
//! and hands out the same [`ManagerConfig`] afterwards. Dropping the session
//! closes every Lua state it owns, whichever way the command exits.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::manager::ManagerConfig;

#[derive(Debug)]
pub struct Session {
    config_dir: PathBuf,
    configs: BTreeMap<String, ManagerConfig>,
}

impl Session {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Session {
            config_dir: config_dir.into(),
            configs: BTreeMap::new(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// The config for `manager`, loading its script on first use.
    pub fn config(&mut self, manager: &str) -> Result<&ManagerConfig> {
        if !self.configs.contains_key(manager) {
            let config = ManagerConfig::load(&self.config_dir, manager)?;
            self.configs.insert(manager.to_string(), config);
        } else {
            debug!("reusing loaded config for {manager}");
        }

        // Inserted above when missing
        Ok(&self.configs[manager])
    }

    /// Names of the managers loaded so far, sorted.
    pub fn loaded(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }
}
