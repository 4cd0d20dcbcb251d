use serde::{Deserialize, Serialize};
use std::path::Path;

use libdeps_util::errors::LibDepsError;

use crate::library::LibraryVersionKey;

/// The parsed representation of a `libdeps.toml` index manifest.
///
/// ```toml
/// [[library]]
/// name = "Root"
/// version = "1.0.0"
/// requires = ["A:1.0.0"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexManifest {
    #[serde(default, rename = "library")]
    pub libraries: Vec<LibraryEntry>,
}

/// One published library version and the exact versions it pins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub requires: Vec<String>,
}

/// A manifest entry with every key parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinDeclaration {
    pub library: LibraryVersionKey,
    pub requires: Vec<LibraryVersionKey>,
}

impl IndexManifest {
    /// Load and parse a manifest from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LibDepsError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content)
    }

    /// Parse a manifest from TOML text.
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            LibDepsError::Manifest {
                message: format!("Failed to parse libdeps.toml: {e}"),
            }
            .into()
        })
    }

    /// Turn every entry into typed keys, failing on the first malformed one.
    pub fn pins(&self) -> miette::Result<Vec<PinDeclaration>> {
        let mut out = Vec::with_capacity(self.libraries.len());
        for entry in &self.libraries {
            let library = parse_key(&format!("{}:{}", entry.name, entry.version))?;
            let requires = entry
                .requires
                .iter()
                .map(|spec| parse_key(spec))
                .collect::<miette::Result<Vec<_>>>()?;
            tracing::debug!("{library} pins {} libraries", requires.len());
            out.push(PinDeclaration { library, requires });
        }
        Ok(out)
    }
}

fn parse_key(spec: &str) -> miette::Result<LibraryVersionKey> {
    LibraryVersionKey::parse(spec).map_err(|e| {
        LibDepsError::Manifest {
            message: e.to_string(),
        }
        .into()
    })
}
