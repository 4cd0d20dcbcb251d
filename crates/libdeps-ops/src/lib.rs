//! High-level operations behind the `libdeps` commands.
//!
//! Each `ops_*` module loads an index manifest into a [`LibraryIndex`],
//! runs one query against it and prints the result.

pub mod ops_check;
pub mod ops_resolve;
pub mod ops_tree;
pub mod ops_versions;

use std::path::Path;

use libdeps_core::manifest::IndexManifest;
use libdeps_resolver::LibraryIndex;

/// Load a `libdeps.toml` and register every library and pin it declares.
pub fn load_index(manifest_path: &Path) -> miette::Result<LibraryIndex> {
    let manifest = IndexManifest::from_path(manifest_path)?;
    index_from_manifest(&manifest)
}

/// Register a parsed manifest into a fresh index.
///
/// Pinned libraries that have no `[[library]]` entry of their own are
/// registered on first mention, so a manifest only needs entries for
/// versions that declare pins.
pub fn index_from_manifest(manifest: &IndexManifest) -> miette::Result<LibraryIndex> {
    let mut index = LibraryIndex::new();
    for decl in manifest.pins()? {
        index.add_key(&decl.library);
        for dep in &decl.requires {
            index.add_key(dep);
            index.add_dependency_key(&decl.library, dep)?;
        }
    }
    tracing::debug!(
        "loaded {} library versions with {} pins",
        index.len(),
        index.edge_count()
    );
    Ok(index)
}
