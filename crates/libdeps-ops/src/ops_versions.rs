//! Operation: list the registered versions of a library.

use std::path::Path;

use libdeps_util::progress;

/// Print every registered version of `name`, oldest first.
pub fn versions(manifest_path: &Path, name: &str) -> miette::Result<()> {
    let index = crate::load_index(manifest_path)?;
    let versions = index.versions(name);
    if versions.is_empty() {
        progress::status_warn("Missing", &format!("no versions of `{name}` are registered"));
        return Ok(());
    }
    for version in versions {
        let pins = index.dependencies(name, version);
        if pins.is_empty() {
            println!("{version}");
        } else {
            let pins: Vec<String> = pins.iter().map(|k| k.to_string()).collect();
            println!("{version} -> {}", pins.join(", "));
        }
    }
    Ok(())
}
