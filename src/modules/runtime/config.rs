//! Environment configuration

use envref_core::{EnvTable, StoreRegistry};
use envref_types::StoreMode;
use serde::{Deserialize, Serialize};

/// Options for composing an [`Env`](crate::Env)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Mode used when an operation does not name one
    pub default_mode: StoreMode,

    /// Whether loaded files replace values that are already set
    pub override_existing: bool,

    /// Seed the in-memory tables from the process environment
    pub seed_from_process: bool,

    /// Whether the environment table can list variable names
    pub enumerable: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            default_mode: StoreMode::Env,
            override_existing: false,
            seed_from_process: true,
            enumerable: true,
        }
    }
}

impl EnvConfig {
    /// Configuration for isolated use: empty tables, nothing inherited
    pub fn isolated() -> Self {
        Self {
            seed_from_process: false,
            ..Self::default()
        }
    }

    /// Build the store registry described by this configuration
    pub fn registry(&self) -> StoreRegistry {
        let registry = if self.seed_from_process {
            StoreRegistry::new()
        } else {
            StoreRegistry::empty()
        };

        if self.enumerable {
            return registry;
        }

        let table = if self.seed_from_process {
            EnvTable::from_process()
        } else {
            EnvTable::new()
        };
        registry.with_store(StoreMode::Env, Box::new(table.with_enumeration(false)))
    }
}
