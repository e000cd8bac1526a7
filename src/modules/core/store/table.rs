//! In-memory table backends

use super::traits::{process_vars, sanitize, Store, Vars};
use envref_types::StoreMode;

/// Ordered in-memory table shared by the table backends
#[derive(Debug, Clone, Default)]
struct Table {
    vars: Vars,
}

impl Table {
    fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut table = Self::default();
        for (name, value) in pairs {
            let name: String = name.into();
            table.set(&name, value.as_ref());
        }
        table
    }

    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        if name.is_empty() {
            return;
        }
        self.vars.insert(name.to_string(), sanitize(value));
    }
}

/// Environment variable table
///
/// Seeded from the process environment by [`EnvTable::from_process`], then
/// mutated independently of it. A host that hides the environment name list
/// is modelled with [`EnvTable::with_enumeration`].
#[derive(Debug, Clone)]
pub struct EnvTable {
    table: Table,
    enumerable: bool,
}

impl EnvTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            table: Table::default(),
            enumerable: true,
        }
    }

    /// Create a table holding a copy of the current process environment
    pub fn from_process() -> Self {
        Self::from_pairs(process_vars())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        Self {
            table: Table::from_pairs(pairs),
            enumerable: true,
        }
    }

    /// Set whether variable names can be listed
    pub fn with_enumeration(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }
}

impl Default for EnvTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for EnvTable {
    fn get(&self, name: &str) -> Option<String> {
        self.table.get(name)
    }

    fn get_all(&self) -> Vars {
        self.table.vars.clone()
    }

    fn set(&mut self, name: &str, value: &str) {
        self.table.set(name, value);
    }

    fn supports_enumeration(&self) -> bool {
        self.enumerable
    }

    fn mode(&self) -> StoreMode {
        StoreMode::Env
    }
}

/// Server/request parameter table
#[derive(Debug, Clone, Default)]
pub struct ServerTable {
    table: Table,
}

impl ServerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        Self {
            table: Table::from_pairs(pairs),
        }
    }
}

impl Store for ServerTable {
    fn get(&self, name: &str) -> Option<String> {
        self.table.get(name)
    }

    fn get_all(&self) -> Vars {
        self.table.vars.clone()
    }

    fn set(&mut self, name: &str, value: &str) {
        self.table.set(name, value);
    }

    fn mode(&self) -> StoreMode {
        StoreMode::Server
    }
}
