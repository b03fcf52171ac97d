//! Configuration loading
//!
//! The configuration file is a JSON object stored at `~/.s3cli` unless a path
//! is given with `-c`. Every field is optional: the file is read into a
//! [`ConfigOverlay`] and merged onto [`Config::default`].

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// File name of the default configuration, relative to the home directory
pub const DEFAULT_CONFIG_FILE: &str = ".s3cli";

/// Default S3 port
pub const DEFAULT_PORT: i64 = 443;

/// Default AWS region
pub const DEFAULT_REGION: &str = "us-east-1";

/// Where the client takes its access key pair from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CredentialsSource {
    /// Key pair given inline in the configuration file
    #[default]
    Static,

    /// Key pair discovered from environment variables or the AWS profile
    EnvOrProfile,

    /// Unrecognized value, kept verbatim and rejected at validation
    Other(String),
}

impl CredentialsSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static => "static",
            Self::EnvOrProfile => "env_or_profile",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for CredentialsSource {
    fn from(value: String) -> Self {
        match value.as_str() {
            // Blank values fall back to static
            "" | "static" => Self::Static,
            "env_or_profile" => Self::EnvOrProfile,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for CredentialsSource {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl fmt::Display for CredentialsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Certificate-chain verification policy for HTTPS connections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsPolicy {
    /// Verify the peer certificate chain (default)
    VerifyPeer,

    /// Accept any peer certificate chain
    SkipPeerVerification,
}

/// Resolved connection and authentication parameters for one invocation
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket_name: String,
    pub credentials_source: CredentialsSource,

    /// Custom endpoint host. Loaded but not applied to the S3 endpoint.
    pub host: String,

    /// Custom endpoint port. Loaded but not applied to the S3 endpoint.
    pub port: i64,

    pub region: String,
    pub ssl_verify_peer: bool,
    pub use_ssl: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key_id: String::new(),
            secret_access_key: String::new(),
            bucket_name: String::new(),
            credentials_source: CredentialsSource::Static,
            host: String::new(),
            port: DEFAULT_PORT,
            region: DEFAULT_REGION.to_string(),
            ssl_verify_peer: true,
            use_ssl: true,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.secret_access_key.is_empty() {
            ""
        } else {
            "<redacted>"
        };

        f.debug_struct("Config")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &secret)
            .field("bucket_name", &self.bucket_name)
            .field("credentials_source", &self.credentials_source)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("region", &self.region)
            .field("ssl_verify_peer", &self.ssl_verify_peer)
            .field("use_ssl", &self.use_ssl)
            .finish()
    }
}

/// Partial configuration as it appears in the file
///
/// A missing key and an explicit `null` both leave the default in place.
/// Unknown keys are ignored and a repeated key keeps its last value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigOverlay {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub bucket_name: Option<String>,
    pub credentials_source: Option<String>,
    pub host: Option<String>,
    pub port: Option<i64>,
    pub region: Option<String>,
    pub ssl_verify_peer: Option<bool>,
    pub use_ssl: Option<bool>,
}

impl Config {
    /// Apply every field present in `overlay` on top of `self`
    pub fn merge(mut self, overlay: ConfigOverlay) -> Self {
        if let Some(v) = overlay.access_key_id {
            self.access_key_id = v;
        }
        if let Some(v) = overlay.secret_access_key {
            self.secret_access_key = v;
        }
        if let Some(v) = overlay.bucket_name {
            self.bucket_name = v;
        }
        if let Some(v) = overlay.credentials_source {
            self.credentials_source = CredentialsSource::from(v);
        }
        if let Some(v) = overlay.host {
            self.host = v;
        }
        if let Some(v) = overlay.port {
            self.port = v;
        }
        if let Some(v) = overlay.region {
            self.region = v;
        }
        if let Some(v) = overlay.ssl_verify_peer {
            self.ssl_verify_peer = v;
        }
        if let Some(v) = overlay.use_ssl {
            self.use_ssl = v;
        }
        self
    }

    /// Parse a configuration from a JSON document
    ///
    /// The document must be a JSON object.
    pub fn from_json(content: &[u8]) -> std::result::Result<Self, serde_json::Error> {
        // Going through a map rejects arrays and scalars, and lets later
        // duplicate keys replace earlier ones
        let fields: Map<String, Value> = serde_json::from_slice(content)?;
        let overlay: ConfigOverlay = serde_json::from_value(Value::Object(fields))?;
        Ok(Self::default().merge(overlay))
    }

    /// TLS policy derived from `ssl_verify_peer`
    pub fn tls_policy(&self) -> TlsPolicy {
        if self.ssl_verify_peer {
            TlsPolicy::VerifyPeer
        } else {
            TlsPolicy::SkipPeerVerification
        }
    }
}

/// Default configuration path: `$HOME/.s3cli`
pub fn default_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| Error::Resolution("Could not determine home directory".into()))?;
    Ok(home.join(DEFAULT_CONFIG_FILE))
}

/// Load the configuration file at `path`
///
/// Fails with [`Error::FileAccess`] when the file cannot be opened or read and
/// with [`Error::Parse`] when its content is not a valid configuration.
pub fn load(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading configuration");

    let file_access = |source: std::io::Error| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut content = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut content))
        .map_err(file_access)?;

    let config = Config::from_json(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
