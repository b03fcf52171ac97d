//! Transfer dispatch
//!
//! Routes a validated [`Invocation`] to the matching [`BlobStore`] operation.

use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::invocation::{Command, Invocation};
use crate::traits::BlobStore;

/// Outcome of a completed transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReport {
    pub command: Command,
    pub source: String,
    pub destination: String,
    pub bytes: u64,
}

impl fmt::Display for TransferReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Perform the transfer described by `invocation`
///
/// `get` reads object `source` into local file `destination`; `put` uploads
/// local file `source` to object `destination`.
pub async fn dispatch<S>(store: &S, invocation: &Invocation) -> Result<TransferReport>
where
    S: BlobStore + ?Sized,
{
    let Invocation {
        command,
        source,
        destination,
    } = invocation;

    tracing::debug!(%command, %source, %destination, "starting transfer");

    let bytes = match command {
        Command::Get => store.get(source, Path::new(destination)).await?,
        Command::Put => store.put(Path::new(source), destination).await?,
    };

    tracing::debug!(bytes, "transfer complete");

    Ok(TransferReport {
        command: *command,
        source: source.clone(),
        destination: destination.clone(),
        bytes,
    })
}
