use std::fmt;

use libdeps_core::Version;

/// The registered versions of one library, ascending and duplicate-free.
///
/// Only [`crate::LibraryIndex`] inserts into the lists it owns; callers see
/// them through shared references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionList {
    versions: Vec<Version>,
}

impl VersionList {
    pub const fn new() -> Self {
        Self {
            versions: Vec::new(),
        }
    }

    /// Insert in sorted position. Returns `false` if an equal version is
    /// already present, in which case the stored one is kept.
    pub(crate) fn insert(&mut self, version: Version) -> bool {
        match self.versions.binary_search(&version) {
            Ok(_) => false,
            Err(pos) => {
                self.versions.insert(pos, version);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn contains(&self, version: &Version) -> bool {
        self.versions.binary_search(version).is_ok()
    }

    pub fn get(&self, i: usize) -> Option<&Version> {
        self.versions.get(i)
    }

    /// Oldest registered version.
    pub fn first(&self) -> Option<&Version> {
        self.versions.first()
    }

    /// Newest registered version.
    pub fn last(&self) -> Option<&Version> {
        self.versions.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Version> {
        self.versions.iter()
    }

    pub fn as_slice(&self) -> &[Version] {
        &self.versions
    }
}

impl FromIterator<Version> for VersionList {
    fn from_iter<I: IntoIterator<Item = Version>>(iter: I) -> Self {
        let mut list = Self::new();
        for v in iter {
            list.insert(v);
        }
        list
    }
}

impl<'a> IntoIterator for &'a VersionList {
    type Item = &'a Version;
    type IntoIter = std::slice::Iter<'a, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.versions.iter()
    }
}

impl PartialEq<[Version]> for VersionList {
    fn eq(&self, other: &[Version]) -> bool {
        self.versions == other
    }
}

impl fmt::Display for VersionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.versions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
