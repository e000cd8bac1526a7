//! Definition file loader

use envref_core::{Result, Store};
use envref_parser::{parse_file, ReferenceResolver};
use indexmap::IndexSet;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of a single load call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Files read
    pub files: usize,
    /// Keys written, in first-write order
    pub written: IndexSet<String>,
    /// Assignments skipped because the key was already set
    pub skipped: usize,
    /// Values rewritten by reference resolution
    pub resolved: usize,
}

/// Loads definition files into a store
///
/// Files are read in order. Without `override_existing`, a key that already
/// holds a value keeps it, so the first definition wins both across files and
/// within one file. References are resolved once, after every file is
/// written, and only over the keys this call wrote.
pub struct Loader {
    resolver: ReferenceResolver,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            resolver: ReferenceResolver::new(),
        }
    }

    /// Load `paths` into `store`
    ///
    /// A file that cannot be read aborts the call. Values already written
    /// from earlier files stay in the store and are left unresolved.
    pub fn load<I>(
        &self,
        store: &mut dyn Store,
        paths: I,
        override_existing: bool,
    ) -> Result<LoadReport>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut report = LoadReport::default();

        for path in paths {
            let path = path.as_ref();
            let assignments = parse_file(path)?;
            debug!(
                path = %path.display(),
                assignments = assignments.len(),
                "Parsed definition file"
            );

            for assignment in assignments {
                if !override_existing && store.contains(&assignment.key) {
                    debug!(key = %assignment.key, "Keeping existing value");
                    report.skipped += 1;
                    continue;
                }

                store.set(&assignment.key, &assignment.value);
                report.written.insert(assignment.key);
            }

            report.files += 1;
        }

        report.resolved = self
            .resolver
            .resolve(store, report.written.iter().map(String::as_str));

        info!(
            mode = %store.mode(),
            files = report.files,
            written = report.written.len(),
            skipped = report.skipped,
            resolved = report.resolved,
            "Loaded definitions"
        );

        Ok(report)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
