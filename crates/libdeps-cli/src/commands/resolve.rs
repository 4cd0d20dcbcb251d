//! Handler for `libdeps resolve`.

use std::path::Path;

use libdeps_core::config::{GlobalConfig, OutputFormat};
use libdeps_ops::ops_resolve::{self, ResolveOptions};
use miette::Result;

pub fn exec(
    manifest: &Path,
    root: &str,
    json: bool,
    descending: bool,
    config: &GlobalConfig,
) -> Result<()> {
    let opts = ResolveOptions {
        order: super::candidate_order(descending, config),
        format: if json {
            OutputFormat::Json
        } else {
            config.output.format
        },
    };
    ops_resolve::resolve(manifest, root, &opts)
}
