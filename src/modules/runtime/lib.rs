//! Runtime for envref
//!
//! This crate composes the stores, parser and coercion into the [`Env`]
//! facade: load definition files, then read variables back as typed values.

pub mod config;
pub mod env;
pub mod loader;

pub use config::EnvConfig;
pub use env::Env;
pub use loader::{LoadReport, Loader};
