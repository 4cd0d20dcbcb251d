//! Single-root resolution over exact pins.
//!
//! Because every pin names one exact version, the only real choice is which
//! version of the root to start from. Each candidate root version gets one
//! breadth-first walk of its closure: the first pin that reaches a library
//! fixes that library's version, and any later pin to a different version of
//! the same library abandons the candidate. The assignment map doubles as the
//! visited set, so a library's pins are followed at most once per candidate
//! and cycles terminate.

use std::collections::{BTreeMap, HashMap, VecDeque};

use libdeps_core::config::CandidateOrder;
use libdeps_core::{Configuration, LibraryName, Version};
use petgraph::graph::NodeIndex;
use petgraph::Direction;

use crate::conflict::{ConflictReport, VersionConflict};
use crate::error::ResolveError;
use crate::index::LibraryIndex;

impl LibraryIndex {
    /// Resolve `root`, trying its registered versions oldest first.
    ///
    /// Returns the configuration of the first candidate whose closure is
    /// consistent. When several root versions would succeed, the lowest one
    /// wins.
    pub fn resolve(&self, root: &str) -> Result<Configuration, ResolveError> {
        self.resolve_with(root, CandidateOrder::Ascending)
    }

    /// Resolve `root`, trying its registered versions in `order`.
    pub fn resolve_with(
        &self,
        root: &str,
        order: CandidateOrder,
    ) -> Result<Configuration, ResolveError> {
        let versions = self.versions(root);
        if versions.is_empty() {
            return Err(ResolveError::NoSuchLibrary {
                name: LibraryName::from(root),
            });
        }

        let candidates: Vec<&Version> = match order {
            CandidateOrder::Ascending => versions.iter().collect(),
            CandidateOrder::Descending => versions.iter().rev().collect(),
        };

        let mut conflicts = ConflictReport::new();
        for candidate in candidates {
            let Some(start) = self.node(root, candidate) else {
                continue;
            };
            tracing::debug!("trying {root}:{candidate}");
            match self.walk(start) {
                Ok(assignment) => {
                    let config = Configuration::new(LibraryName::from(root), assignment);
                    tracing::debug!("resolved {root}:{candidate} to {} libraries", config.len());
                    return Ok(config);
                }
                Err(conflict) => {
                    tracing::debug!("abandoned {root}:{candidate}: {conflict}");
                    conflicts.add(conflict);
                }
            }
        }

        Err(ResolveError::UnsatisfiableGraph {
            name: LibraryName::from(root),
            conflicts,
        })
    }

    /// Walk the closure of one candidate root key.
    fn walk(&self, start: NodeIndex) -> Result<BTreeMap<LibraryName, Version>, VersionConflict> {
        let root = self.key(start);
        let mut assigned: HashMap<&LibraryName, &Version> = HashMap::new();
        assigned.insert(&root.name, &root.version);

        let mut queue: VecDeque<NodeIndex> = VecDeque::new();
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for next in self.neighbors(current, Direction::Outgoing) {
                let pin = self.key(next);
                tracing::trace!("{} pins {pin}", self.key(current));
                match assigned.get(&pin.name) {
                    None => {
                        assigned.insert(&pin.name, &pin.version);
                        queue.push_back(next);
                    }
                    Some(&version) if *version == pin.version => {}
                    Some(&version) => {
                        return Err(VersionConflict {
                            candidate: root.version.clone(),
                            library: pin.name.clone(),
                            assigned: version.clone(),
                            requested: pin.version.clone(),
                            required_by: self.key(current).clone(),
                        });
                    }
                }
            }
        }

        Ok(assigned
            .into_iter()
            .map(|(name, version)| (name.clone(), version.clone()))
            .collect())
    }
}
