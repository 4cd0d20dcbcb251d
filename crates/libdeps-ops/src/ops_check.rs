//! Operation: resolve every library in the manifest as a root.

use std::path::Path;

use libdeps_core::config::CandidateOrder;
use libdeps_core::{Configuration, LibraryName};
use libdeps_resolver::{LibraryIndex, ResolveError};
use libdeps_util::errors::LibDepsError;
use libdeps_util::progress;

/// Outcome of resolving one library name as the root.
#[derive(Debug)]
pub struct CheckEntry {
    pub name: LibraryName,
    pub result: Result<Configuration, ResolveError>,
}

/// Resolve each registered library name in turn, in name order.
pub fn check_index(index: &LibraryIndex, order: CandidateOrder) -> Vec<CheckEntry> {
    index
        .library_names()
        .into_iter()
        .map(|name| CheckEntry {
            name: name.clone(),
            result: index.resolve_with(name.as_str(), order),
        })
        .collect()
}

/// Check the manifest; fails if any library has no consistent configuration.
pub fn check(manifest_path: &Path, order: CandidateOrder) -> miette::Result<()> {
    let index = crate::load_index(manifest_path)?;
    let entries = check_index(&index, order);

    let mut failed = 0usize;
    for entry in &entries {
        match &entry.result {
            Ok(config) => {
                let version = config
                    .root_version()
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                progress::status_info("Ok", &format!("{} v{version}", entry.name));
            }
            Err(e) => {
                failed += 1;
                tracing::debug!("{} failed: {e}", entry.name);
                progress::status_warn("Conflict", &entry.name.to_string());
                if let ResolveError::UnsatisfiableGraph { conflicts, .. } = e {
                    for c in conflicts.iter() {
                        println!("  {c}");
                    }
                }
            }
        }
    }

    if failed > 0 {
        return Err(LibDepsError::Resolution {
            message: format!(
                "{failed} of {} libraries have no consistent configuration",
                entries.len()
            ),
        }
        .into());
    }
    progress::status("Checked", &format!("{} libraries", entries.len()));
    Ok(())
}
