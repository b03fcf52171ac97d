//! Command-line arguments
//!
//! `s3cli [-c <PATH>] <command> <source> <destination>`
//!
//! Flag parsing stops at the first positional argument; everything after it
//! is handed to [`validate_command`](s3cli_core::validate_command) untouched.
//! Malformed flags become [`Error::InvalidArguments`] so they are reported and
//! mapped to an exit code like every other failure.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use s3cli_core::{Error, Result, config};

/// Binary name used when parsing argument lists without one
const BIN_NAME: &str = "s3cli";

/// s3cli - get or put a single object in an S3-compatible store
#[derive(Parser, Debug)]
#[command(name = "s3cli")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file [default: ~/.s3cli]
    #[arg(short = 'c', value_name = "PATH")]
    pub config: Option<String>,

    /// <command> <source> <destination>, where command is `get` or `put`
    #[arg(trailing_var_arg = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    /// Split the configuration path from the positional arguments
    ///
    /// Without `-c` (or with an empty value) the path defaults to `$HOME/.s3cli`.
    pub fn resolve_config_path(self) -> Result<(PathBuf, Vec<String>)> {
        let path = match self.config {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => config::default_path()?,
        };
        Ok((path, self.args))
    }
}

/// Parse an argument list whose first item is the program name
///
/// `--help` and `--version` print their output and exit the process.
pub fn parse<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => Err(Error::InvalidArguments(e.to_string().trim_end().to_string())),
    }
}

/// Parse a raw argument list (without the program name) and resolve the config path
pub fn resolve_config_path<I, T>(raw_args: I) -> Result<(PathBuf, Vec<String>)>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = std::iter::once(OsString::from(BIN_NAME))
        .chain(raw_args.into_iter().map(Into::into));
    parse(args)?.resolve_config_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let (path, rest) = resolve_config_path(["-c", "/tmp/x", "get", "k", "p"]).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/x"));
        assert_eq!(rest, vec!["get", "k", "p"]);
    }

    #[test]
    fn test_explicit_config_path_without_positionals() {
        let (path, rest) = resolve_config_path(["-c", "/some/path", "get"]).unwrap();
        assert_eq!(path, PathBuf::from("/some/path"));
        assert_eq!(rest, vec!["get"]);
    }

    #[test]
    fn test_default_config_path() {
        let (path, rest) = resolve_config_path(["get", "source", "destination"]).unwrap();
        assert!(path.to_string_lossy().ends_with("/.s3cli"));
        assert_eq!(rest, vec!["get", "source", "destination"]);
    }

    #[test]
    fn test_empty_config_flag_falls_back_to_default() {
        let (path, _) = resolve_config_path(["-c", "", "get", "k", "p"]).unwrap();
        assert!(path.to_string_lossy().ends_with("/.s3cli"));
    }

    #[test]
    fn test_flags_after_first_positional_are_positional() {
        let (path, rest) = resolve_config_path(["get", "-c", "/tmp/x", "k"]).unwrap();
        assert!(path.to_string_lossy().ends_with("/.s3cli"));
        assert_eq!(rest, vec!["get", "-c", "/tmp/x", "k"]);
    }

    #[test]
    fn test_config_flag_without_value() {
        let err = resolve_config_path(["-c"]).unwrap_err();
        assert!(matches!(err, Error::InvalidArguments(_)));
    }

    #[test]
    fn test_parse_maps_clap_errors() {
        let err = parse(["s3cli", "--bogus"]).unwrap_err();
        match err {
            Error::InvalidArguments(message) => assert!(message.contains("--bogus")),
            other => panic!("expected InvalidArguments, got {other:?}"),
        }
        assert_eq!(
            parse(["s3cli", "-c", "/tmp/x", "get", "k", "p"]).unwrap().config.as_deref(),
            Some("/tmp/x")
        );
    }

    #[test]
    fn test_no_arguments() {
        let (_, rest) = resolve_config_path(Vec::<String>::new()).unwrap();
        assert!(rest.is_empty());
    }
}
