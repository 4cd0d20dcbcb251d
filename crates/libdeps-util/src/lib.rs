//! Shared utilities for the libdeps workspace.
//!
//! Cross-cutting concerns used by the other libdeps crates: the
//! application-level error type and Cargo-style status lines.

pub mod errors;
pub mod progress;
