//! The mutable library registry.

use std::collections::HashMap;

use libdeps_core::{LibraryName, LibraryVersionKey, Version};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::error::ResolveError;
use crate::version_list::VersionList;

static NO_VERSIONS: VersionList = VersionList::new();

/// Registered library versions and the exact pins between them.
///
/// Every registered `name:version` is one node of a petgraph `DiGraph`; a
/// pin is an edge `from -> to`. Pins may only join registered nodes, and the
/// graph may contain cycles.
#[derive(Debug, Clone, Default)]
pub struct LibraryIndex {
    graph: DiGraph<LibraryVersionKey, ()>,
    /// Lookup from name, then version, to node index.
    nodes: HashMap<LibraryName, HashMap<Version, NodeIndex>>,
    versions: HashMap<LibraryName, VersionList>,
}

impl LibraryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name:version`. Returns `false` if it was already registered.
    pub fn add_library(&mut self, name: &str, version: &Version) -> bool {
        if self.node(name, version).is_some() {
            return false;
        }
        let name = LibraryName::from(name);
        let idx = self
            .graph
            .add_node(LibraryVersionKey::new(name.clone(), version.clone()));
        self.nodes
            .entry(name.clone())
            .or_default()
            .insert(version.clone(), idx);
        self.versions
            .entry(name)
            .or_default()
            .insert(version.clone());
        tracing::trace!("registered {}", self.graph[idx]);
        true
    }

    /// Register a parsed key. Same semantics as [`Self::add_library`].
    pub fn add_key(&mut self, key: &LibraryVersionKey) -> bool {
        self.add_library(key.name.as_str(), &key.version)
    }

    pub fn contains(&self, name: &str, version: &Version) -> bool {
        self.node(name, version).is_some()
    }

    /// Registered versions of `name`, ascending. Empty for unknown names.
    pub fn versions(&self, name: &str) -> &VersionList {
        self.versions.get(name).unwrap_or(&NO_VERSIONS)
    }

    /// Pin `from_name:from_version` to exactly `to_name:to_version`.
    ///
    /// Both endpoints must already be registered; the source is checked
    /// first. Pinning the same pair twice records a single edge.
    pub fn add_dependency(
        &mut self,
        from_name: &str,
        from_version: &Version,
        to_name: &str,
        to_version: &Version,
    ) -> Result<(), ResolveError> {
        let from = self
            .node(from_name, from_version)
            .ok_or_else(|| unknown(from_name, from_version))?;
        let to = self
            .node(to_name, to_version)
            .ok_or_else(|| unknown(to_name, to_version))?;

        if self.graph.edges(from).any(|e| e.target() == to) {
            tracing::trace!("{} already pins {}", self.graph[from], self.graph[to]);
            return Ok(());
        }
        self.graph.add_edge(from, to, ());
        tracing::trace!("{} -> {}", self.graph[from], self.graph[to]);
        Ok(())
    }

    /// Key-based form of [`Self::add_dependency`].
    pub fn add_dependency_key(
        &mut self,
        from: &LibraryVersionKey,
        to: &LibraryVersionKey,
    ) -> Result<(), ResolveError> {
        self.add_dependency(from.name.as_str(), &from.version, to.name.as_str(), &to.version)
    }

    /// Direct pins of `name:version`, sorted by key. Empty if unregistered.
    pub fn dependencies(&self, name: &str, version: &Version) -> Vec<&LibraryVersionKey> {
        self.node(name, version)
            .map(|idx| self.neighbors(idx, Direction::Outgoing))
            .unwrap_or_default()
            .into_iter()
            .map(|idx| &self.graph[idx])
            .collect()
    }

    /// Registered versions that pin `name:version`, sorted by key.
    pub fn dependents(&self, name: &str, version: &Version) -> Vec<&LibraryVersionKey> {
        self.node(name, version)
            .map(|idx| self.neighbors(idx, Direction::Incoming))
            .unwrap_or_default()
            .into_iter()
            .map(|idx| &self.graph[idx])
            .collect()
    }

    /// Every library name with at least one registered version, sorted.
    pub fn library_names(&self) -> Vec<&LibraryName> {
        let mut names: Vec<&LibraryName> = self.versions.keys().collect();
        names.sort();
        names
    }

    /// Number of registered `name:version` keys.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Number of distinct pins.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn node(&self, name: &str, version: &Version) -> Option<NodeIndex> {
        self.nodes.get(name)?.get(version).copied()
    }

    pub(crate) fn key(&self, idx: NodeIndex) -> &LibraryVersionKey {
        &self.graph[idx]
    }

    /// Neighbours in one direction, sorted by key so traversals and
    /// listings are deterministic.
    pub(crate) fn neighbors(&self, idx: NodeIndex, dir: Direction) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self.graph.neighbors_directed(idx, dir).collect();
        out.sort_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));
        out
    }
}

fn unknown(name: &str, version: &Version) -> ResolveError {
    ResolveError::UnknownLibrary {
        name: LibraryName::from(name),
        version: version.clone(),
    }
}
