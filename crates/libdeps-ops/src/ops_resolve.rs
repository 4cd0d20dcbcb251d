//! Operation: resolve one root library.

use std::path::Path;

use libdeps_core::config::{CandidateOrder, OutputFormat};
use libdeps_core::Configuration;
use libdeps_util::errors::LibDepsError;
use libdeps_util::progress;

/// Options for `libdeps resolve`.
#[derive(Debug, Default)]
pub struct ResolveOptions {
    pub order: CandidateOrder,
    pub format: OutputFormat,
}

/// Resolve `root` from the manifest and print the configuration.
pub fn resolve(manifest_path: &Path, root: &str, opts: &ResolveOptions) -> miette::Result<()> {
    let index = crate::load_index(manifest_path)?;
    let config = index.resolve_with(root, opts.order)?;

    if let Some(version) = config.root_version() {
        progress::status(
            "Resolved",
            &format!("{root} v{version} ({} libraries)", config.len()),
        );
    }
    print!("{}", render(&config, opts.format)?);
    Ok(())
}

/// Render a configuration: one `name version` line per library, or JSON.
pub fn render(config: &Configuration, format: OutputFormat) -> miette::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (name, version) in config {
                out.push_str(&format!("{name} {version}\n"));
            }
            Ok(out)
        }
        OutputFormat::Json => serde_json::to_string_pretty(config)
            .map(|s| s + "\n")
            .map_err(|e| {
                LibDepsError::Generic {
                    message: format!("Failed to serialize configuration: {e}"),
                }
                .into()
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libdeps_core::manifest::IndexManifest;

    fn sample() -> Configuration {
        let manifest = IndexManifest::parse_toml(
            r#"
[[library]]
name = "Root"
version = "1.0.0"
requires = ["A:1.0.0"]
"#,
        )
        .unwrap();
        crate::index_from_manifest(&manifest)
            .unwrap()
            .resolve("Root")
            .unwrap()
    }

    #[test]
    fn render_text() {
        assert_eq!(
            render(&sample(), OutputFormat::Text).unwrap(),
            "A 1.0.0\nRoot 1.0.0\n"
        );
    }

    #[test]
    fn render_json() {
        let out = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["root"], "Root");
        assert_eq!(value["libraries"]["A"], "1.0.0");
    }
}
