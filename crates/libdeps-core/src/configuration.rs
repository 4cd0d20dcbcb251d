//! The result of a successful resolution.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::library::{LibraryName, LibraryVersionKey, Version};

/// Exactly one chosen version per library reachable from the root.
///
/// Built once by the resolver and never mutated afterwards. Entries iterate
/// in library-name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    root: LibraryName,
    libraries: BTreeMap<LibraryName, Version>,
}

impl Configuration {
    pub fn new(root: LibraryName, libraries: BTreeMap<LibraryName, Version>) -> Self {
        Self { root, libraries }
    }

    /// Name of the library the configuration was resolved for.
    pub fn root(&self) -> &LibraryName {
        &self.root
    }

    /// The chosen root version, i.e. the candidate that succeeded.
    pub fn root_version(&self) -> Option<&Version> {
        self.libraries.get(&self.root)
    }

    pub fn root_key(&self) -> Option<LibraryVersionKey> {
        self.root_version()
            .map(|v| LibraryVersionKey::new(self.root.clone(), v.clone()))
    }

    pub fn get(&self, name: &str) -> Option<&Version> {
        self.libraries.get(name)
    }

    pub fn contains_library(&self, name: &str) -> bool {
        self.libraries.contains_key(name)
    }

    /// True when `key.name` is assigned exactly `key.version`.
    pub fn contains(&self, key: &LibraryVersionKey) -> bool {
        self.libraries
            .get(&key.name)
            .is_some_and(|v| *v == key.version)
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LibraryName, &Version)> {
        self.libraries.iter()
    }

    /// All chosen artifacts as keys, in name order.
    pub fn keys(&self) -> impl Iterator<Item = LibraryVersionKey> + '_ {
        self.libraries
            .iter()
            .map(|(name, version)| LibraryVersionKey::new(name.clone(), version.clone()))
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = (&'a LibraryName, &'a Version);
    type IntoIter = std::collections::btree_map::Iter<'a, LibraryName, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.libraries.iter()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, version) in &self.libraries {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{name}:{version}")?;
        }
        Ok(())
    }
}
