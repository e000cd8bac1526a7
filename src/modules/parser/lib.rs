//! Definition file parsing for envref
//!
//! This crate turns `key=value` definition files into ordered assignments
//! and resolves `${NAME}` references against a store.

pub mod dotenv;
pub mod env;

pub use dotenv::{DotenvParser, ParsedAssignment};
pub use env::ReferenceResolver;

use envref_core::{EnvrefError, Result};
use std::path::Path;

/// Parse a definition file from a path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<ParsedAssignment>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| EnvrefError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_string(&content))
}

/// Parse definitions from a string
pub fn parse_string(content: &str) -> Vec<ParsedAssignment> {
    DotenvParser::parse(content)
}
