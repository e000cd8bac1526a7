//! Store trait definition

use envref_types::StoreMode;
use indexmap::IndexMap;

/// Ordered snapshot of a store
pub type Vars = IndexMap<String, String>;

/// Trait for variable stores
///
/// All backends implement this trait to provide a unified interface over
/// tables of raw string values. Stores never hold typed values.
pub trait Store {
    /// Raw value for `name`, unmodified
    fn get(&self, name: &str) -> Option<String>;

    /// Every variable, in insertion order where the backend has one
    fn get_all(&self) -> Vars;

    /// Write `value` under `name`, replacing any previous value
    ///
    /// Implementations pass the value through [`sanitize`] first.
    fn set(&mut self, name: &str, value: &str);

    /// Check whether `name` holds a value
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether `get_all` can list variable names at all
    fn supports_enumeration(&self) -> bool {
        true
    }

    /// The mode this backend serves
    fn mode(&self) -> StoreMode;
}

/// Strip newline, carriage return and tab characters from a value
pub fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\t'))
        .collect()
}

/// Snapshot of the process environment
///
/// Entries whose name or value is not valid UTF-8 are skipped.
pub fn process_vars() -> Vars {
    std::env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("a\tb\r\nc"), "abc");
        assert_eq!(sanitize("plain value"), "plain value");
        assert_eq!(sanitize(""), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_process_vars_skips_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var("ENVREF_TRAITS_TEST_BAD", OsStr::from_bytes(b"\xff\xfe"));
        std::env::set_var("ENVREF_TRAITS_TEST_GOOD", "fine");

        let vars = process_vars();
        assert!(!vars.contains_key("ENVREF_TRAITS_TEST_BAD"));
        assert_eq!(
            vars.get("ENVREF_TRAITS_TEST_GOOD").map(String::as_str),
            Some("fine")
        );

        std::env::remove_var("ENVREF_TRAITS_TEST_BAD");
        std::env::remove_var("ENVREF_TRAITS_TEST_GOOD");
    }
}
