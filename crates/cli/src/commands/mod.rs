//! Command execution
//!
//! One invocation runs a fixed pipeline: resolve the configuration path,
//! validate the positional command, load the configuration, build the client
//! and finally transfer. Any failure before the transfer stops the process
//! without touching the network.

use std::path::PathBuf;

use s3cli_core::{Invocation, Result, config, validate_command};
use s3cli_s3::BlobstoreClient;

use crate::args::Cli;
use crate::exit_code::ExitCode;
use crate::output::Formatter;

mod transfer;

/// Everything decided before the first network call
#[derive(Debug)]
pub struct Prepared {
    pub config_path: PathBuf,
    pub invocation: Invocation,
    pub client: BlobstoreClient,
}

/// Run every step up to (not including) the transfer
pub fn prepare(cli: Cli) -> Result<Prepared> {
    let (config_path, args) = cli.resolve_config_path()?;
    let invocation = validate_command(&args)?;
    let config = config::load(&config_path)?;
    let client = BlobstoreClient::new(&config)?;

    Ok(Prepared {
        config_path,
        invocation,
        client,
    })
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let formatter = Formatter::new();

    let prepared = match prepare(cli) {
        Ok(prepared) => prepared,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from(&e);
        }
    };

    tracing::debug!(config = %prepared.config_path.display(), "configuration resolved");
    transfer::execute(&prepared.client, &prepared.invocation, &formatter).await
}
