//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use crate::config::ConfigError;
use crate::translation::TranslateError;

/// Maps a command failure to a process exit code.
///
/// Translation failures get a code per error kind, config problems get
/// `CONFIG`, anything else exits with 1.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    if let Some(translate_err) = err.downcast_ref::<TranslateError>() {
        translate_err.exit_code()
    } else if err.downcast_ref::<ConfigError>().is_some() {
        exitcode::CONFIG
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_for_translate_errors() {
        let err = anyhow::Error::from(TranslateError::InvalidInput);
        assert_eq!(exit_code(&err), exitcode::DATAERR);

        let err = anyhow::Error::from(TranslateError::Upstream {
            status: 429,
            body: String::new(),
        });
        assert_eq!(exit_code(&err), exitcode::UNAVAILABLE);
    }

    #[test]
    fn test_exit_code_for_config_error_with_context() {
        let result: Result<(), ConfigError> = Err(ConfigError::ZeroTimeout);
        let err = result.context("while loading settings").unwrap_err();
        assert_eq!(exit_code(&err), exitcode::CONFIG);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 1);
    }
}
