//! Process environment backend

use super::traits::{process_vars, sanitize, Store, Vars};
use envref_types::StoreMode;
use tracing::warn;

/// Getter/setter pair over the live process environment
///
/// Reads go straight to `std::env`, so values set by anything else in the
/// process are visible. Names and values the platform cannot represent
/// (empty names, `=` or NUL in a name, NUL in a value) are refused with a
/// warning instead of written.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }

    fn is_representable(name: &str, value: &str) -> bool {
        !name.is_empty() && !name.contains(['=', '\0']) && !value.contains('\0')
    }
}

impl Store for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        std::env::var(name).ok()
    }

    fn get_all(&self) -> Vars {
        process_vars()
    }

    fn set(&mut self, name: &str, value: &str) {
        let value = sanitize(value);
        if !Self::is_representable(name, &value) {
            warn!(name, "Refusing to write unrepresentable process environment variable");
            return;
        }
        std::env::set_var(name, value);
    }

    fn mode(&self) -> StoreMode {
        StoreMode::ProcessEnv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_env_round_trip() {
        let mut store = ProcessEnv::new();
        store.set("ENVREF_PROCESS_TEST_A", "value\twith tab");
        assert_eq!(
            store.get("ENVREF_PROCESS_TEST_A").as_deref(),
            Some("valuewith tab")
        );
        assert_eq!(
            std::env::var("ENVREF_PROCESS_TEST_A").unwrap(),
            "valuewith tab"
        );
        assert!(store.get_all().contains_key("ENVREF_PROCESS_TEST_A"));
        std::env::remove_var("ENVREF_PROCESS_TEST_A");
    }

    #[test]
    fn test_process_env_refuses_bad_names() {
        let mut store = ProcessEnv::new();
        store.set("", "x");
        store.set("ENVREF=BAD", "x");
        assert_eq!(store.get("ENVREF=BAD"), None);
        assert_eq!(store.get(""), None);
    }

    #[test]
    fn test_process_env_missing() {
        assert_eq!(ProcessEnv::new().get("ENVREF_PROCESS_TEST_MISSING_12345"), None);
    }
}
