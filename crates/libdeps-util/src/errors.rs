use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for libdeps operations outside the resolver core.
#[derive(Debug, Error, Diagnostic)]
pub enum LibDepsError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed index manifest (e.g. libdeps.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Each entry needs a `name`, a `version` and `name:version` pins"))]
    Manifest { message: String },

    /// Invalid global configuration.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.libdeps/config.toml"))]
    Config { message: String },

    /// Resolution did not produce a configuration.
    #[error("Dependency resolution failed: {message}")]
    Resolution { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type LibDepsResult<T> = miette::Result<T>;
