//! s3cli-s3: S3 SDK adapter for the s3cli client
//!
//! This crate builds the aws-sdk-s3 client from a validated configuration and
//! implements the BlobStore trait with it. It is the only crate that directly
//! depends on the AWS SDK.

pub mod client;
pub mod provider;
mod tls;

pub use client::BlobstoreClient;
