//! Variable stores
//!
//! A store is an ordered `name -> raw string` table. Three interchangeable
//! backends exist, one per [`StoreMode`](envref_types::StoreMode), and the
//! [`StoreRegistry`] owns one of each.

mod process;
mod registry;
mod table;
mod traits;

pub use process::ProcessEnv;
pub use registry::{parse_mode, StoreRegistry};
pub use table::{EnvTable, ServerTable};
pub use traits::{process_vars, sanitize, Store, Vars};
