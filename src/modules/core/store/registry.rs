//! Store registry holding one backend per mode

use envref_types::StoreMode;
use std::str::FromStr;

use crate::error::{EnvrefError, Result};

use super::process::ProcessEnv;
use super::table::{EnvTable, ServerTable};
use super::traits::{process_vars, Store};

/// Owns the backend for every [`StoreMode`]
pub struct StoreRegistry {
    env: Box<dyn Store>,
    server: Box<dyn Store>,
    process: Box<dyn Store>,
}

impl StoreRegistry {
    /// Create a registry whose tables start as a copy of the process environment
    pub fn new() -> Self {
        Self {
            env: Box::new(EnvTable::from_process()),
            server: Box::new(ServerTable::from_pairs(process_vars())),
            process: Box::new(ProcessEnv::new()),
        }
    }

    /// Create a registry with empty tables
    ///
    /// The `ProcessEnv` backend still reads the live process environment.
    pub fn empty() -> Self {
        Self {
            env: Box::new(EnvTable::new()),
            server: Box::new(ServerTable::new()),
            process: Box::new(ProcessEnv::new()),
        }
    }

    /// Replace the backend serving `mode`
    pub fn with_store(mut self, mode: StoreMode, store: Box<dyn Store>) -> Self {
        *self.slot(mode) = store;
        self
    }

    /// Backend serving `mode`
    pub fn store(&self, mode: StoreMode) -> &dyn Store {
        match mode {
            StoreMode::Env => self.env.as_ref(),
            StoreMode::Server => self.server.as_ref(),
            StoreMode::ProcessEnv => self.process.as_ref(),
        }
    }

    /// Mutable backend serving `mode`
    pub fn store_mut(&mut self, mode: StoreMode) -> &mut dyn Store {
        self.slot(mode).as_mut()
    }

    fn slot(&mut self, mode: StoreMode) -> &mut Box<dyn Store> {
        match mode {
            StoreMode::Env => &mut self.env,
            StoreMode::Server => &mut self.server,
            StoreMode::ProcessEnv => &mut self.process,
        }
    }
}

/// Parse a store mode name (env, server, putenv)
pub fn parse_mode(name: &str) -> Result<StoreMode> {
    StoreMode::from_str(name).map_err(|_| EnvrefError::InvalidMode(name.to_string()))
}

impl Default for StoreRegistry {
    fn default() -> Self {
        Self::new()
    }
}
