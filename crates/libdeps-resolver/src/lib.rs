//! Library registry and resolution engine.
//!
//! [`LibraryIndex`] records published library versions and the exact
//! version-to-version pins between them. [`LibraryIndex::resolve`] picks one
//! version per reachable library for a given root, trying the root's
//! registered versions in turn until one yields a closure without conflicts.

pub mod conflict;
pub mod error;
pub mod graph;
pub mod index;
pub mod resolver;
pub mod shared;
pub mod version_list;

pub use conflict::{ConflictReport, VersionConflict};
pub use error::ResolveError;
pub use graph::ResolvedGraph;
pub use index::LibraryIndex;
pub use shared::SharedIndex;
pub use version_list::VersionList;
