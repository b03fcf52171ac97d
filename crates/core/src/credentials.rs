//! Credential source validation
//!
//! A configuration selects exactly one way of authenticating. Validation
//! checks that the key pair in the file agrees with that choice and returns
//! the credentials the client should be built with. It has no side effects
//! and runs before any transport or credential provider exists.

use std::fmt;

use crate::config::{Config, CredentialsSource};
use crate::error::{Error, Result};

/// Credentials that passed validation
#[derive(Clone, PartialEq, Eq)]
pub enum ResolvedCredentials {
    /// Explicit key pair from the configuration file
    Static {
        access_key_id: String,
        secret_access_key: String,
    },

    /// Key pair left to the environment or the local AWS profile
    EnvOrProfile,
}

impl ResolvedCredentials {
    pub fn source(&self) -> CredentialsSource {
        match self {
            Self::Static { .. } => CredentialsSource::Static,
            Self::EnvOrProfile => CredentialsSource::EnvOrProfile,
        }
    }
}

impl fmt::Debug for ResolvedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static { access_key_id, .. } => f
                .debug_struct("Static")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"<redacted>")
                .finish(),
            Self::EnvOrProfile => f.write_str("EnvOrProfile"),
        }
    }
}

/// Check that the key pair in `config` is consistent with its credentials source
pub fn validate(config: &Config) -> Result<ResolvedCredentials> {
    let has_key = !config.access_key_id.is_empty();
    let has_secret = !config.secret_access_key.is_empty();

    match &config.credentials_source {
        CredentialsSource::Static => {
            if !has_key || !has_secret {
                return Err(Error::MissingCredentials);
            }
            Ok(ResolvedCredentials::Static {
                access_key_id: config.access_key_id.clone(),
                secret_access_key: config.secret_access_key.clone(),
            })
        }
        CredentialsSource::EnvOrProfile => {
            if has_key || has_secret {
                return Err(Error::ConflictingCredentials);
            }
            Ok(ResolvedCredentials::EnvOrProfile)
        }
        CredentialsSource::Other(value) => {
            Err(Error::UnsupportedCredentialsSource(value.clone()))
        }
    }
}
