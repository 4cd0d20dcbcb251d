//! Operation: display the dependency tree of a resolved configuration.

use std::path::Path;

use libdeps_core::config::CandidateOrder;
use libdeps_resolver::ResolvedGraph;

/// Options for `libdeps tree`.
#[derive(Debug, Default)]
pub struct TreeOptions {
    /// Maximum tree depth to display.
    pub depth: Option<usize>,
    /// Show the path from the root to this library.
    pub why: Option<String>,
    /// Show what depends on this library.
    pub inverted: Option<String>,
    pub order: CandidateOrder,
}

/// Resolve `root` and print its dependency tree.
pub fn tree(manifest_path: &Path, root: &str, opts: &TreeOptions) -> miette::Result<()> {
    let index = crate::load_index(manifest_path)?;
    let config = index.resolve_with(root, opts.order)?;
    let graph = ResolvedGraph::from_configuration(&index, &config);
    print!("{}", render(&graph, opts));
    Ok(())
}

/// Render the view selected by `opts`.
pub fn render(graph: &ResolvedGraph, opts: &TreeOptions) -> String {
    if let Some(ref target) = opts.why {
        return match graph.find_path(target) {
            Some(path) => {
                let mut out = format!("Path to {target}:\n");
                for (i, key) in path.iter().enumerate() {
                    let indent = "  ".repeat(i);
                    out.push_str(&format!("{indent}{key}\n"));
                }
                out
            }
            None => format!("Library '{target}' is not part of the configuration.\n"),
        };
    }

    if let Some(ref target) = opts.inverted {
        let inverted = graph.print_inverted_tree(target);
        return if inverted.is_empty() {
            format!("Library '{target}' is not part of the configuration.\n")
        } else {
            inverted
        };
    }

    graph.print_tree(opts.depth)
}
