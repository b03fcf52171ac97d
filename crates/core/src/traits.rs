//! BlobStore trait definition
//!
//! This trait is the seam between the CLI and the object-storage SDK. The S3
//! adapter implements it; tests mock it.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Single-object transfers against one bucket
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Download object `key` into the local file `dest`, returning the bytes written
    async fn get(&self, key: &str, dest: &Path) -> Result<u64>;

    /// Upload the local file `src` as object `key`, returning the bytes sent
    async fn put(&self, src: &Path, key: &str) -> Result<u64>;
}
