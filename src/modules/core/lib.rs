//! Core logic for envref
//!
//! This crate contains the variable stores and their backends, the coercion
//! ladder that turns raw strings into typed values, prefix extraction, and the
//! error type shared by every envref crate.

pub mod coerce;
pub mod error;
pub mod prefix;
pub mod store;

pub use error::{EnvrefError, Result};
pub use store::{parse_mode, EnvTable, ProcessEnv, ServerTable, Store, StoreRegistry};
