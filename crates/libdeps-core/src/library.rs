//! Library identity: names, semantic versions and `name:version` keys.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Case-sensitive identifier of a library, independent of any version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryName(String);

impl LibraryName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LibraryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LibraryName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LibraryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LibraryName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for LibraryName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for LibraryName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LibraryName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A published semantic version.
///
/// Ordering and equality follow semver precedence: major, minor, patch and
/// pre-release identifiers take part, build metadata does not. `1.0.0+a` and
/// `1.0.0+b` are the same version; `Display` still prints the original text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(semver::Version);

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(semver::Version::new(major, minor, patch))
    }

    pub fn parse(text: &str) -> Result<Self, semver::Error> {
        semver::Version::parse(text).map(Self)
    }

    pub fn as_semver(&self) -> &semver::Version {
        &self.0
    }

    pub fn is_prerelease(&self) -> bool {
        !self.0.pre.is_empty()
    }
}

impl From<semver::Version> for Version {
    fn from(version: semver::Version) -> Self {
        Self(version)
    }
}

impl FromStr for Version {
    type Err = semver::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (&self.0, &other.0);
        a.major
            .cmp(&b.major)
            .then(a.minor.cmp(&b.minor))
            .then(a.patch.cmp(&b.patch))
            .then_with(|| a.pre.cmp(&b.pre))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

// Must agree with `Eq`: build metadata is left out.
impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.major.hash(state);
        self.0.minor.hash(state);
        self.0.patch.hash(state);
        self.0.pre.hash(state);
    }
}

/// One published artifact: a library name at one exact version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LibraryVersionKey {
    pub name: LibraryName,
    pub version: Version,
}

/// Why a `name:version` string could not be turned into a key.
#[derive(Debug, Error)]
pub enum KeyParseError {
    #[error("invalid library spec `{spec}`: expected `name:version`")]
    MissingSeparator { spec: String },

    #[error("invalid library spec `{spec}`: library name is empty")]
    EmptyName { spec: String },

    #[error("invalid library spec `{spec}`: {source}")]
    InvalidVersion {
        spec: String,
        #[source]
        source: semver::Error,
    },
}

impl LibraryVersionKey {
    pub fn new(name: impl Into<LibraryName>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    /// Parse `"name:version"` into a key.
    ///
    /// Splits on the last `:`, so names may themselves contain colons
    /// (`org.example:core:1.2.0` names `org.example:core`).
    pub fn parse(spec: &str) -> Result<Self, KeyParseError> {
        let spec = spec.trim();
        let (name, version) = spec
            .rsplit_once(':')
            .ok_or_else(|| KeyParseError::MissingSeparator {
                spec: spec.to_string(),
            })?;
        if name.is_empty() {
            return Err(KeyParseError::EmptyName {
                spec: spec.to_string(),
            });
        }
        let version = Version::parse(version).map_err(|source| KeyParseError::InvalidVersion {
            spec: spec.to_string(),
            source,
        })?;
        Ok(Self::new(name, version))
    }
}

impl FromStr for LibraryVersionKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LibraryVersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn v(text: &str) -> Version {
        Version::parse(text).unwrap()
    }

    #[test]
    fn build_metadata_ignored_for_equality() {
        assert_eq!(v("1.0.0+linux"), v("1.0.0+darwin"));
        assert_eq!(v("1.0.0+linux").cmp(&v("1.0.0")), Ordering::Equal);
        assert_eq!(v("1.0.0+linux").to_string(), "1.0.0+linux");
    }

    #[test]
    fn hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(v("2.1.0+a"));
        assert!(set.contains(&v("2.1.0+b")));
        assert!(!set.insert(v("2.1.0")));
    }

    #[test]
    fn prerelease_sorts_before_release() {
        assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
        assert!(v("1.0.0-alpha.1") < v("1.0.0-beta"));
        assert!(v("1.0.0-rc.1") < v("1.0.0"));
        assert!(v("1.0.0-rc.1").is_prerelease());
    }

    #[test]
    fn numeric_ordering() {
        assert!(v("1.0.0") < v("1.0.1"));
        assert!(v("1.0.9") < v("1.0.10"));
        assert!(v("1.9.0") < v("2.0.0"));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_ne!(LibraryName::from("Root"), LibraryName::from("root"));
        assert_eq!(LibraryName::from("Root"), "Root");
    }

    #[test]
    fn parse_key() {
        let key = LibraryVersionKey::parse("Root:1.0.0").unwrap();
        assert_eq!(key.name, "Root");
        assert_eq!(key.version, Version::new(1, 0, 0));
        assert_eq!(key.to_string(), "Root:1.0.0");
    }

    #[test]
    fn parse_key_with_colon_in_name() {
        let key: LibraryVersionKey = "org.example:core:1.2.0".parse().unwrap();
        assert_eq!(key.name, "org.example:core");
        assert_eq!(key.version, v("1.2.0"));
    }

    #[test]
    fn parse_key_errors() {
        assert!(matches!(
            LibraryVersionKey::parse("Root"),
            Err(KeyParseError::MissingSeparator { .. })
        ));
        assert!(matches!(
            LibraryVersionKey::parse(":1.0.0"),
            Err(KeyParseError::EmptyName { .. })
        ));
        assert!(matches!(
            LibraryVersionKey::parse("Root:1.0"),
            Err(KeyParseError::InvalidVersion { .. })
        ));
    }
}
