//! Rendering of a resolved configuration as a dependency graph.

use std::collections::{HashMap, HashSet};

use libdeps_core::{Configuration, LibraryName, LibraryVersionKey};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::index::LibraryIndex;

/// The chosen artifacts of one configuration and the pins between them.
pub struct ResolvedGraph {
    graph: DiGraph<LibraryVersionKey, ()>,
    /// Lookup from library name to its (single) node.
    index: HashMap<LibraryName, NodeIndex>,
    pub root: Option<NodeIndex>,
}

impl ResolvedGraph {
    /// Build the graph of `config`, taking edges from the pins in `index`.
    pub fn from_configuration(index: &LibraryIndex, config: &Configuration) -> Self {
        let mut graph = DiGraph::new();
        let mut lookup = HashMap::new();
        for key in config.keys() {
            let name = key.name.clone();
            let idx = graph.add_node(key);
            lookup.insert(name, idx);
        }

        for (name, version) in config {
            let Some(&from) = lookup.get(name) else {
                continue;
            };
            for dep in index.dependencies(name.as_str(), version) {
                if let Some(&to) = lookup.get(&dep.name) {
                    if graph[to].version == dep.version {
                        graph.add_edge(from, to, ());
                    }
                }
            }
        }

        let root = lookup.get(config.root()).copied();
        Self {
            graph,
            index: lookup,
            root,
        }
    }

    /// Look up a library by name.
    pub fn find(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &LibraryVersionKey {
        &self.graph[idx]
    }

    /// Direct dependencies of a node, sorted by key.
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.sorted(idx, Direction::Outgoing)
    }

    /// Reverse dependencies (who depends on this node), sorted by key.
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.sorted(idx, Direction::Incoming)
    }

    fn sorted(&self, idx: NodeIndex, dir: Direction) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self.graph.neighbors_directed(idx, dir).collect();
        out.sort_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));
        out
    }

    /// Print the dependency tree below the root.
    ///
    /// A node already on the current path is printed but not expanded, so
    /// cycles back into the root end after one step.
    pub fn print_tree(&self, max_depth: Option<usize>) -> String {
        let mut output = String::new();
        let Some(root) = self.root else {
            return output;
        };

        output.push_str(&format!("{}\n", self.graph[root]));

        let mut visited = HashSet::new();
        visited.insert(root);

        let deps = self.dependencies_of(root);
        let count = deps.len();
        for (i, idx) in deps.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(&mut output, *idx, "", is_last, 1, max_depth, &mut visited);
        }

        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];
        output.push_str(&format!("{prefix}{connector}{node}\n"));

        if let Some(max) = max_depth {
            if depth >= max {
                return;
            }
        }

        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let deps = self.dependencies_of(idx);
        let count = deps.len();
        for (i, child) in deps.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(
                output,
                *child,
                &child_prefix,
                is_last,
                depth + 1,
                max_depth,
                visited,
            );
        }

        visited.remove(&idx);
    }

    /// Find the path from the root to a library.
    pub fn find_path(&self, name: &str) -> Option<Vec<&LibraryVersionKey>> {
        let root = self.root?;
        let target = self.find(name)?;
        let mut path = Vec::new();
        let mut visited = HashSet::new();
        if self.dfs_path(root, target, &mut path, &mut visited) {
            Some(path.iter().map(|&idx| &self.graph[idx]).collect())
        } else {
            None
        }
    }

    fn dfs_path(
        &self,
        current: NodeIndex,
        target: NodeIndex,
        path: &mut Vec<NodeIndex>,
        visited: &mut HashSet<NodeIndex>,
    ) -> bool {
        path.push(current);
        if current == target {
            return true;
        }
        if !visited.insert(current) {
            path.pop();
            return false;
        }
        for child in self.dependencies_of(current) {
            if self.dfs_path(child, target, path, visited) {
                return true;
            }
        }
        path.pop();
        false
    }

    /// Inverted tree: what in the configuration depends on `name`.
    pub fn print_inverted_tree(&self, name: &str) -> String {
        let mut output = String::new();
        let Some(idx) = self.find(name) else {
            return output;
        };

        output.push_str(&format!("{}\n", self.graph[idx]));

        let mut visited = HashSet::new();
        visited.insert(idx);

        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, dep_idx) in dependents.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_inverted_subtree(&mut output, *dep_idx, "", is_last, &mut visited);
        }

        output
    }

    fn print_inverted_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];
        output.push_str(&format!("{prefix}{connector}{node}\n"));

        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, dep_idx) in dependents.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_inverted_subtree(output, *dep_idx, &child_prefix, is_last, visited);
        }

        visited.remove(&idx);
    }

    /// Number of pins between chosen artifacts.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of libraries, root included.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
