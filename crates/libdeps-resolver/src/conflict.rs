//! Version conflicts met while trying candidate root versions.

use std::fmt;

use libdeps_core::{LibraryName, LibraryVersionKey, Version};

/// Why each abandoned candidate was abandoned, in the order they were tried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictReport {
    pub conflicts: Vec<VersionConflict>,
}

/// The first pin that contradicted an earlier assignment during one
/// candidate's traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConflict {
    /// Root version the traversal started from.
    pub candidate: Version,
    pub library: LibraryName,
    /// Version already chosen for `library` in this traversal.
    pub assigned: Version,
    /// Version the offending pin asked for.
    pub requested: Version,
    /// Artifact that declared the offending pin.
    pub required_by: LibraryVersionKey,
}

impl ConflictReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, conflict: VersionConflict) {
        self.conflicts.push(conflict);
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VersionConflict> {
        self.conflicts.iter()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conflicts.is_empty() {
            return write!(f, "No version conflicts.");
        }
        writeln!(f, "Version conflicts ({}):", self.conflicts.len())?;
        for c in &self.conflicts {
            writeln!(f, "  {c}")?;
        }
        Ok(())
    }
}

impl fmt::Display for VersionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "candidate {}: {} requires {}:{} but {} is already {}",
            self.candidate,
            self.required_by,
            self.library,
            self.requested,
            self.library,
            self.assigned
        )
    }
}
