//! `${NAME}` reference resolution

use envref_core::coerce;
use envref_core::Store;
use envref_types::TypedValue;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

/// Regex pattern for variable references: ${VAR_NAME}
static REFERENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Za-z0-9_]+)\}").unwrap());

/// Rewrites `${NAME}` references using the current store contents
///
/// Resolution is a single forward pass. A reference to a key that was
/// rewritten earlier in the same pass sees the rewritten value; anything
/// later sees the value as it was loaded. Unknown or null references are
/// left in place.
pub struct ReferenceResolver;

impl ReferenceResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve references in each of `keys`, in order, writing results back
    ///
    /// Returns the number of values that changed.
    pub fn resolve<'a, I>(&self, store: &mut dyn Store, keys: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut rewritten = 0;

        for key in keys {
            let Some(value) = store.get(key) else {
                continue;
            };
            if !Self::has_references(&value) {
                continue;
            }

            let resolved = self.substitute(&*store, &value);
            if resolved != value {
                store.set(key, &resolved);
                rewritten += 1;
            }
        }

        rewritten
    }

    /// Substitute references in `value` without writing anything
    pub fn substitute(&self, store: &dyn Store, value: &str) -> String {
        REFERENCE_PATTERN
            .replace_all(value, |cap: &Captures<'_>| {
                let name = &cap[1];
                match coerce::scalar(store.get(name).as_deref(), TypedValue::Null) {
                    TypedValue::Null => {
                        debug!(reference = name, "Leaving unresolved reference in place");
                        cap[0].to_string()
                    }
                    found => found.to_raw_string(),
                }
            })
            .into_owned()
    }

    /// Check if a string may contain references
    pub fn has_references(content: &str) -> bool {
        content.contains("${")
    }
}

impl Default for ReferenceResolver {
    fn default() -> Self {
        Self::new()
    }
}
