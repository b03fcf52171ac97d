//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the BlobStore trait from s3cli-core.

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use s3cli_core::{BlobStore, Config, CredentialsSource, Error, Result, TlsPolicy};

use crate::{provider, tls};

/// Buckets are always addressed in the URL path, never as a subdomain
pub const FORCE_PATH_STYLE: bool = true;

/// S3 client bound to one bucket
///
/// Building the client never touches the network. Connectivity and
/// credentials are first exercised by the transfer itself.
#[derive(Debug)]
pub struct BlobstoreClient {
    inner: aws_sdk_s3::Client,
    bucket: String,
    region: String,
    tls_policy: TlsPolicy,
    credentials_source: CredentialsSource,
}

impl BlobstoreClient {
    /// Create a new client from a loaded configuration
    ///
    /// Credential validation runs first; on failure its error is returned
    /// unchanged and nothing else is constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let credentials = s3cli_core::validate(config)?;

        if !config.host.is_empty() {
            tracing::warn!(
                host = %config.host,
                port = config.port,
                "custom host and port are not applied to the S3 endpoint"
            );
        }

        let tls_policy = config.tls_policy();
        let builder = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .force_path_style(FORCE_PATH_STYLE)
            .credentials_provider(provider::credentials_provider(&credentials));
        let s3_config = tls::apply(builder, tls_policy).build();

        tracing::debug!(
            region = %config.region,
            bucket = %config.bucket_name,
            credentials_source = %credentials.source(),
            ?tls_policy,
            "built S3 client"
        );

        Ok(Self {
            inner: aws_sdk_s3::Client::from_conf(s3_config),
            bucket: config.bucket_name.clone(),
            region: config.region.clone(),
            tls_policy,
            credentials_source: credentials.source(),
        })
    }

    /// Get the underlying aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.inner
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn force_path_style(&self) -> bool {
        FORCE_PATH_STYLE
    }

    pub fn tls_policy(&self) -> TlsPolicy {
        self.tls_policy
    }

    pub fn credentials_source(&self) -> &CredentialsSource {
        &self.credentials_source
    }
}

/// Map an SDK failure onto the error taxonomy, keeping the full cause chain
fn sdk_error<E>(err: E, key: &str) -> Error
where
    E: std::error::Error + 'static,
{
    let message = DisplayErrorContext(&err).to_string();

    if message.contains("NoSuchKey") || message.contains("NotFound") {
        Error::NotFound(format!("{key}: {message}"))
    } else if message.contains("AccessDenied")
        || message.contains("InvalidAccessKeyId")
        || message.contains("SignatureDoesNotMatch")
        || message.contains("credentials")
    {
        Error::Auth(message)
    } else {
        Error::Network(message)
    }
}

fn local_file_error(path: &Path, source: std::io::Error) -> Error {
    Error::LocalFile {
        path: path.to_path_buf(),
        source,
    }
}

/// Stream `body` into `writer`, returning the number of bytes written
///
/// Read failures are network errors, write failures are local file errors.
async fn write_body<W>(mut body: ByteStream, writer: &mut W, key: &str, dest: &Path) -> Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0u64;
    while let Some(chunk) = body.try_next().await.map_err(|e| {
        Error::Network(format!("Failed to download {key}: {}", DisplayErrorContext(&e)))
    })? {
        writer
            .write_all(&chunk)
            .await
            .map_err(|e| local_file_error(dest, e))?;
        written += chunk.len() as u64;
    }
    writer.flush().await.map_err(|e| local_file_error(dest, e))?;
    Ok(written)
}

/// Write an object body to `dest`, removing the file again if the transfer fails
async fn download_to(body: ByteStream, key: &str, dest: &Path) -> Result<u64> {
    let mut file = tokio::fs::File::create(dest)
        .await
        .map_err(|e| local_file_error(dest, e))?;

    let result = write_body(body, &mut file, key, dest).await;
    drop(file);

    if result.is_err() {
        if let Err(e) = tokio::fs::remove_file(dest).await {
            tracing::warn!(path = %dest.display(), error = %e, "failed to remove partial download");
        }
    }
    result
}

#[async_trait]
impl BlobStore for BlobstoreClient {
    async fn get(&self, key: &str, dest: &Path) -> Result<u64> {
        let response = self
            .inner
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| sdk_error(e, key))?;

        download_to(response.body, key, dest).await
    }

    async fn put(&self, src: &Path, key: &str) -> Result<u64> {
        let size = tokio::fs::metadata(src)
            .await
            .map_err(|e| local_file_error(src, e))?
            .len();

        let body = ByteStream::from_path(src)
            .await
            .map_err(|e| local_file_error(src, std::io::Error::other(e)))?;

        let content_type = mime_guess::from_path(src)
            .first()
            .map(|m| m.essence_str().to_string());

        self.inner
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .set_content_type(content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| sdk_error(e, key))?;

        Ok(size)
    }
}
