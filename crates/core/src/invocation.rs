//! Positional command line: `<command> <source> <destination>`

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of positional arguments every invocation takes
pub const POSITIONAL_ARGS: usize = 3;

/// Transfer direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Download object `source` into local file `destination`
    Get,

    /// Upload local file `source` to object `destination`
    Put,
}

impl Command {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Put => "put",
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "get" => Ok(Self::Get),
            "put" => Ok(Self::Put),
            other => Err(Error::UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub source: String,
    pub destination: String,
}

/// Validate the positional arguments left over after flag parsing
pub fn validate_command<S: AsRef<str>>(args: &[S]) -> Result<Invocation> {
    let [command, source, destination] = args else {
        return Err(Error::ArgumentCount {
            expected: POSITIONAL_ARGS,
            actual: args.len(),
        });
    };

    Ok(Invocation {
        command: command.as_ref().parse()?,
        source: source.as_ref().to_string(),
        destination: destination.as_ref().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_put() {
        for (cmd, expected) in [("get", Command::Get), ("put", Command::Put)] {
            let invocation = validate_command(&[cmd, "dummyKey", "localPath"]).unwrap();
            assert_eq!(invocation.command, expected);
            assert_eq!(invocation.source, "dummyKey");
            assert_eq!(invocation.destination, "localPath");
        }
    }

    #[test]
    fn test_unknown_command() {
        let err = validate_command(&["badCommand", "dummyKey", "localPath"]).unwrap_err();
        assert!(matches!(err, Error::UnknownCommand(ref c) if c == "badCommand"));
    }

    #[test]
    fn test_command_is_case_sensitive() {
        let err = validate_command(&["GET", "k", "p"]).unwrap_err();
        assert!(matches!(err, Error::UnknownCommand(_)));
    }

    #[test]
    fn test_wrong_argument_count() {
        for args in [&["get"][..], &["get", "k"][..], &["get", "k", "p", "extra"][..], &[][..]] {
            let err = validate_command(args).unwrap_err();
            assert!(
                matches!(err, Error::ArgumentCount { expected: 3, actual } if actual == args.len()),
                "args: {args:?}"
            );
        }
    }

    #[test]
    fn test_count_checked_before_command() {
        let err = validate_command(&["bad"]).unwrap_err();
        assert!(matches!(err, Error::ArgumentCount { .. }));
    }

    #[test]
    fn test_accepts_owned_strings() {
        let args = vec!["put".to_string(), "a.txt".to_string(), "a".to_string()];
        let invocation = validate_command(&args).unwrap();
        assert_eq!(invocation.command.to_string(), "put");
    }
}
