//! CLI commands

mod dump;
mod get;
mod group;
mod require;

pub use dump::DumpCommand;
pub use get::GetCommand;
pub use group::GroupCommand;
pub use require::RequireCommand;

use anyhow::Context;
use clap::{Parser, Subcommand};
use envref_core::parse_mode;
use envref_runtime::{Env, EnvConfig};
use envref_types::StoreMode;
use std::path::{Path, PathBuf};

/// Definition file read when no `--file` is given
pub const DEFAULT_FILE: &str = ".env";

/// envref - Typed configuration variables from definition files
#[derive(Parser, Debug)]
#[command(name = "envref")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Definition file to load (repeatable, loaded in order)
    ///
    /// Defaults to `.env` in the working directory when it exists.
    #[arg(short = 'f', long = "file", global = true)]
    pub files: Vec<PathBuf>,

    /// Let later definitions replace values that are already set
    #[arg(long = "override", global = true)]
    pub override_existing: bool,

    /// Store to load into and read from (env, server, putenv)
    #[arg(short, long, global = true, value_parser = parse_mode)]
    pub mode: Option<StoreMode>,

    /// Start from empty tables instead of the process environment
    #[arg(long, global = true)]
    pub isolated: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a variable as a typed JSON value
    Get(GetCommand),

    /// Print every variable as a JSON object
    Dump(DumpCommand),

    /// Fail unless every named variable is set and not null
    Require(RequireCommand),

    /// Print the variables sharing a prefix, prefix removed
    Group(GroupCommand),
}

impl Cli {
    /// Environment configuration selected by the flags
    pub fn config(&self) -> EnvConfig {
        let base = if self.isolated {
            EnvConfig::isolated()
        } else {
            EnvConfig::default()
        };
        EnvConfig {
            default_mode: self.mode.unwrap_or_default(),
            override_existing: self.override_existing,
            ..base
        }
    }

    /// Files to load, accounting for the `.env` fallback
    pub fn definition_files(&self) -> Vec<PathBuf> {
        if !self.files.is_empty() {
            return self.files.clone();
        }
        let fallback = Path::new(DEFAULT_FILE);
        if fallback.exists() {
            vec![fallback.to_path_buf()]
        } else {
            Vec::new()
        }
    }

    /// Build the environment and load the definition files into it
    pub fn load(&self) -> anyhow::Result<Env> {
        let config = self.config();
        let mut env = Env::with_config(&config);
        let files = self.definition_files();

        env.load(&files, config.override_existing, Some(config.default_mode))
            .with_context(|| format!("Failed to load {} definition file(s)", files.len()))?;

        Ok(env)
    }
}
