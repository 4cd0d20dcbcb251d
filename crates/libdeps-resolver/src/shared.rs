//! A [`LibraryIndex`] shared between threads.

use std::sync::Arc;

use libdeps_core::config::CandidateOrder;
use libdeps_core::{Configuration, LibraryVersionKey, Version};
use parking_lot::RwLock;

use crate::error::ResolveError;
use crate::index::LibraryIndex;

/// Reader/writer wrapper around a registry.
///
/// Registration takes the write lock; resolution and queries take the read
/// lock, so any number of resolves run in parallel against a stable index.
/// Clones share the same index.
#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    inner: Arc<RwLock<LibraryIndex>>,
}

impl SharedIndex {
    pub fn new(index: LibraryIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    pub fn add_library(&self, name: &str, version: &Version) -> bool {
        self.inner.write().add_library(name, version)
    }

    pub fn add_dependency(
        &self,
        from: &LibraryVersionKey,
        to: &LibraryVersionKey,
    ) -> Result<(), ResolveError> {
        self.inner.write().add_dependency_key(from, to)
    }

    pub fn contains(&self, name: &str, version: &Version) -> bool {
        self.inner.read().contains(name, version)
    }

    /// Snapshot of the registered versions of `name`.
    pub fn versions(&self, name: &str) -> Vec<Version> {
        self.inner.read().versions(name).iter().cloned().collect()
    }

    pub fn resolve(&self, root: &str) -> Result<Configuration, ResolveError> {
        self.inner.read().resolve(root)
    }

    pub fn resolve_with(
        &self,
        root: &str,
        order: CandidateOrder,
    ) -> Result<Configuration, ResolveError> {
        self.inner.read().resolve_with(root, order)
    }

    /// Run `f` with shared access to the index.
    pub fn read<R>(&self, f: impl FnOnce(&LibraryIndex) -> R) -> R {
        let guard = self.inner.read();
        f(&*guard)
    }

    /// Run `f` with exclusive access to the index.
    pub fn write<R>(&self, f: impl FnOnce(&mut LibraryIndex) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut *guard)
    }
}

impl From<LibraryIndex> for SharedIndex {
    fn from(index: LibraryIndex) -> Self {
        Self::new(index)
    }
}
