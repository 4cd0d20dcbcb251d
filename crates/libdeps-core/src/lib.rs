//! Core data types for libdeps.
//!
//! This crate defines the values the resolver works over: library names,
//! semantic versions with build metadata excluded from comparison, the
//! `name:version` keys that form the nodes of the dependency graph, and the
//! configuration a resolution produces. It also holds the text-facing pieces
//! that sit in front of the resolver: the key parser, the `libdeps.toml`
//! index manifest, and the global configuration file.
//!
//! This crate is intentionally free of graph logic.

pub mod config;
pub mod configuration;
pub mod library;
pub mod manifest;

pub use configuration::Configuration;
pub use library::{KeyParseError, LibraryName, LibraryVersionKey, Version};
