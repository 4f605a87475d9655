use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all stubkit operations.
#[derive(Debug, Error, Diagnostic)]
pub enum StubkitError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed configuration (stubkit.toml).
    #[error("Config error: {message}")]
    #[diagnostic(help("Check your stubkit.toml for syntax errors"))]
    Config { message: String },

    /// A packages list file could not be read or was missing.
    #[error("Packages file error: {message}")]
    Packages { message: String },

    /// A POM or metadata document could not be parsed.
    #[error("Document error: {message}")]
    Document { message: String },

    /// Network request or download failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Stub generation for a coordinate failed.
    #[error("Generation failed: {message}")]
    Generate { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type StubkitResult<T> = miette::Result<T>;
