//! Handler for `libdeps tree`.

use std::path::Path;

use libdeps_core::config::GlobalConfig;
use libdeps_ops::ops_tree::{self, TreeOptions};
use miette::Result;

pub fn exec(
    manifest: &Path,
    root: &str,
    depth: Option<usize>,
    why: Option<String>,
    inverted: Option<String>,
    descending: bool,
    config: &GlobalConfig,
) -> Result<()> {
    let opts = TreeOptions {
        depth,
        why,
        inverted,
        order: super::candidate_order(descending, config),
    };
    ops_tree::tree(manifest, root, &opts)
}
