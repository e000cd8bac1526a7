//! Type definitions for envref
//!
//! This crate contains the shared types used across the envref crates:
//! the store mode selector and the typed values produced by coercion.

pub mod mode;
pub mod value;

pub use mode::StoreMode;
pub use value::{ArrayValue, PrefixedGroup, TypedValue};
