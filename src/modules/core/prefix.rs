//! Prefix extraction

use envref_types::{PrefixedGroup, TypedValue};
use tracing::debug;

use crate::coerce;
use crate::error::{EnvrefError, Result};
use crate::store::Store;

/// Collect every variable whose name starts with `prefix`
///
/// Names are matched case-insensitively (ASCII) and keep their original case
/// after the prefix is stripped. Values go through the scalar ladder.
pub fn extract(store: &dyn Store, prefix: &str) -> Result<PrefixedGroup> {
    let vars = store.get_all();

    if vars.is_empty() && !store.supports_enumeration() {
        return Err(EnvrefError::ConfigUnavailable(format!(
            "Cannot get a list of the current variables from the {} store",
            store.mode()
        )));
    }

    if prefix.is_empty() {
        return Err(EnvrefError::EmptyPrefix);
    }

    let group: PrefixedGroup = vars
        .iter()
        .filter(|(name, _)| starts_with_ignore_case(name, prefix))
        .map(|(name, raw)| {
            (
                name[prefix.len()..].to_string(),
                coerce::scalar(Some(raw), TypedValue::Null),
            )
        })
        .collect();

    debug!(prefix, matched = group.len(), "Extracted prefixed group");
    Ok(group)
}

/// ASCII case-insensitive prefix test
pub fn starts_with_ignore_case(subject: &str, prefix: &str) -> bool {
    subject
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
