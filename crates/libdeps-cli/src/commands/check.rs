//! Check command implementation.

use std::path::Path;

use libdeps_core::config::GlobalConfig;
use miette::Result;

pub fn exec(manifest: &Path, descending: bool, config: &GlobalConfig) -> Result<()> {
    libdeps_ops::ops_check::check(manifest, super::candidate_order(descending, config))
}
