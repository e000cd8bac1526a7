//! envref CLI
//!
//! This crate provides the command-line interface for envref:
//! - get: Print one variable as a typed value
//! - dump: Print every variable
//! - require: Fail unless variables are set
//! - group: Print variables sharing a prefix

pub mod commands;

pub use commands::{Cli, Commands};
