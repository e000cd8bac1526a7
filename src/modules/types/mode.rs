//! Store mode definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend a store operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreMode {
    /// Environment variable table
    #[default]
    Env,
    /// Server/request parameter table
    Server,
    /// Process environment through the getter/setter pair
    #[serde(rename = "putenv", alias = "process")]
    ProcessEnv,
}

impl fmt::Display for StoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreMode::Env => write!(f, "env"),
            StoreMode::Server => write!(f, "server"),
            StoreMode::ProcessEnv => write!(f, "putenv"),
        }
    }
}

impl FromStr for StoreMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "env" => Ok(StoreMode::Env),
            "server" => Ok(StoreMode::Server),
            "putenv" | "process" | "getenv" => Ok(StoreMode::ProcessEnv),
            _ => Err(format!("Unknown store mode: {}", s)),
        }
    }
}

impl StoreMode {
    /// Returns all store modes
    pub fn all() -> &'static [StoreMode] {
        &[StoreMode::Env, StoreMode::Server, StoreMode::ProcessEnv]
    }

    /// Stable numeric code for this mode
    pub fn code(&self) -> u8 {
        match self {
            StoreMode::Env => 1,
            StoreMode::Server => 2,
            StoreMode::ProcessEnv => 3,
        }
    }

    /// Look up a mode by its numeric code
    pub fn from_code(code: u8) -> Option<StoreMode> {
        Self::all().iter().copied().find(|mode| mode.code() == code)
    }
}
