//! Error types for s9-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use thiserror::Error;

/// Result type alias for s9-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for s9-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A path string used a scheme other than file/s3/none
    #[error("invalid URI scheme, must be one of file/s3/NONE")]
    InvalidScheme,

    /// An operation requiring an s3:// path was given something else
    #[error("requires objects to be prefixed with s3://")]
    SchemeMismatch,

    /// Configuration file error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failure reported by the storage service, propagated unmodified
    #[error("{0}")]
    Service(String),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Get the appropriate process exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidScheme | Error::SchemeMismatch | Error::Config(_) => 2, // UsageError
            Error::Service(_) => 3, // NetworkError
            _ => 1,                 // GeneralError
        }
    }
}
