//! s3cli-core: Core library for the s3cli blob-storage client
//!
//! This crate provides everything the client decides before talking to the
//! network:
//! - Configuration loading with defaults
//! - Credential source validation
//! - Positional command validation
//! - The BlobStore trait and transfer dispatch
//!
//! This crate is designed to be independent of any specific S3 SDK.

pub mod config;
pub mod credentials;
pub mod error;
pub mod invocation;
pub mod traits;
pub mod transfer;

pub use config::{Config, CredentialsSource, TlsPolicy};
pub use credentials::{ResolvedCredentials, validate};
pub use error::{Error, Result};
pub use invocation::{Command, Invocation, validate_command};
pub use traits::BlobStore;
pub use transfer::{TransferReport, dispatch};
