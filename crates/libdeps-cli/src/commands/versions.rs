//! Handler for `libdeps versions`.

use std::path::Path;

use miette::Result;

pub fn exec(manifest: &Path, name: &str) -> Result<()> {
    libdeps_ops::ops_versions::versions(manifest, name)
}
