//! Transfer step: run the get or put and report the result

use s3cli_core::{BlobStore, Invocation, dispatch};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, ProgressBar};

/// Run the transfer, showing a spinner while it is in flight
pub async fn execute<S>(store: &S, invocation: &Invocation, formatter: &Formatter) -> ExitCode
where
    S: BlobStore + ?Sized,
{
    let spinner = ProgressBar::spinner(&format!(
        "{} {} -> {}",
        invocation.command, invocation.source, invocation.destination
    ));
    let result = dispatch(store, invocation).await;
    spinner.finish_and_clear();

    match result {
        Ok(report) => {
            formatter.success(&format!(
                "{report} ({})",
                humansize::format_size(report.bytes, humansize::BINARY)
            ));
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!(
                "Failed to {} {}: {e}",
                invocation.command, invocation.source
            ));
            ExitCode::from(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use s3cli_core::{Error, Result, validate_command};
    use std::path::Path;

    /// Store with a fixed answer for every call
    struct FixedStore {
        missing: bool,
    }

    #[async_trait]
    impl BlobStore for FixedStore {
        async fn get(&self, key: &str, _dest: &Path) -> Result<u64> {
            if self.missing {
                Err(Error::NotFound(key.to_string()))
            } else {
                Ok(1024)
            }
        }

        async fn put(&self, src: &Path, _key: &str) -> Result<u64> {
            Err(Error::LocalFile {
                path: src.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }
    }

    #[tokio::test]
    async fn test_successful_get() {
        let invocation = validate_command(&["get", "k", "p"]).unwrap();
        let code = execute(
            &FixedStore { missing: false },
            &invocation,
            &Formatter::with_colors(false),
        )
        .await;
        assert_eq!(code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_missing_object() {
        let invocation = validate_command(&["get", "k", "p"]).unwrap();
        let code = execute(
            &FixedStore { missing: true },
            &invocation,
            &Formatter::with_colors(false),
        )
        .await;
        assert_eq!(code, ExitCode::NotFound);
    }

    #[tokio::test]
    async fn test_unreadable_local_file() {
        let invocation = validate_command(&["put", "/no/such/file", "k"]).unwrap();
        let code = execute(
            &FixedStore { missing: false },
            &invocation,
            &Formatter::with_colors(false),
        )
        .await;
        assert_eq!(code, ExitCode::GeneralError);
    }
}
