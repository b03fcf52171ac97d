//! Error types for s3cli-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for s3cli-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for s3cli-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong number of positional arguments
    #[error("Invalid number of arguments: expected {expected}, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },

    /// Positional command is neither `get` nor `put`
    #[error("Invalid command: {0}")]
    UnknownCommand(String),

    /// Flag syntax error reported by the argument parser
    #[error("{0}")]
    InvalidArguments(String),

    /// Default configuration path could not be determined
    #[error("Could not resolve configuration path: {0}")]
    Resolution(String),

    /// Configuration file could not be opened or read
    #[error("Failed to open config file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON or has mistyped fields
    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Static credentials selected but a key is empty
    #[error("access_key_id or secret_access_key is missing")]
    MissingCredentials,

    /// Ambient credentials selected but a key is set inline
    #[error(
        "Can't use access_key_id and secret_access_key with env_or_profile credentials_source"
    )]
    ConflictingCredentials,

    /// credentials_source is not a recognized value
    #[error("Incorrect credentials_source: {0}")]
    UnsupportedCredentialsSource(String),

    /// Local file involved in a transfer could not be read or written
    #[error("Local file error {}: {source}", path.display())]
    LocalFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Authentication or permission failure reported by the store
    #[error("Access denied: {0}")]
    Auth(String),

    /// Remote object does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport failure talking to the store
    #[error("Network error: {0}")]
    Network(String),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::ArgumentCount { .. }
            | Error::UnknownCommand(_)
            | Error::InvalidArguments(_)
            | Error::FileAccess { .. }
            | Error::Parse { .. }
            | Error::MissingCredentials
            | Error::ConflictingCredentials
            | Error::UnsupportedCredentialsSource(_) => 2, // UsageError
            Error::Network(_) => 3,                        // NetworkError
            Error::Auth(_) => 4,                           // AuthError
            Error::NotFound(_) => 5,                       // NotFound
            Error::Resolution(_) | Error::LocalFile { .. } => 1, // GeneralError
        }
    }
}
