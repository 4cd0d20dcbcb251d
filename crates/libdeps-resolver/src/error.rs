use libdeps_core::{LibraryName, Version};
use miette::Diagnostic;
use thiserror::Error;

use crate::conflict::ConflictReport;

/// Failures reported by the registry and the resolver.
///
/// All of them describe the input data; none leaves the index modified.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    /// An edge endpoint was never registered.
    #[error("Unknown library {name}:{version}")]
    #[diagnostic(
        code(libdeps::unknown_library),
        help("Register the library version before pinning it")
    )]
    UnknownLibrary { name: LibraryName, version: Version },

    /// The resolution root has no registered versions.
    #[error("No versions of `{name}` are registered")]
    #[diagnostic(code(libdeps::no_such_library))]
    NoSuchLibrary { name: LibraryName },

    /// Every candidate root version ran into a version conflict.
    #[error("No consistent configuration exists for `{name}`\n{conflicts}")]
    #[diagnostic(
        code(libdeps::unsatisfiable),
        help("Each pin is exact; publish a version whose pins agree or drop the conflicting one")
    )]
    UnsatisfiableGraph {
        name: LibraryName,
        conflicts: ConflictReport,
    },
}
