//! s3cli - get or put a single object in an S3-compatible store
//!
//! Usage: `s3cli [-c <config>] <get|put> <source> <destination>`

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use s3cli::args;
use s3cli::commands;
use s3cli::exit_code::ExitCode;
use s3cli::output::Formatter;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout only carries results
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let exit_code = match args::parse(std::env::args_os()) {
        Ok(cli) => commands::execute(cli).await,
        Err(e) => {
            Formatter::new().error(&e.to_string());
            ExitCode::from(&e)
        }
    };
    tracing::debug!(%exit_code, "exiting");

    std::process::exit(exit_code.as_i32());
}
