//! Error types for PVS-Link CLI.
//!
//! CliError wraps ClientError from the shared library and adds CLI-specific variants.

use std::path::PathBuf;

use pvs_link_core::error::{ClientError, SchemaError};
use thiserror::Error;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
    pub const GATEWAY_ERROR: i32 = 3;
    pub const INVALID_ARGS: i32 = 4;
    pub const INVALID_DATA: i32 = 5;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Arguments that parse but cannot form a request.
    #[error("{0}")]
    Usage(String),

    #[error("input file {}: {source}", .path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: InputFileError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why an input file could not be used.
#[derive(Error, Debug)]
pub enum InputFileError {
    #[error("cannot read: {0}")]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Invalid(#[from] SchemaError),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Client(e) => match e {
                ClientError::Schema(_) => exit_codes::INVALID_DATA,
                ClientError::Transport(_) => exit_codes::NETWORK_ERROR,
                ClientError::Gateway(_) => exit_codes::GATEWAY_ERROR,
            },
            CliError::Usage(_) => exit_codes::INVALID_ARGS,
            CliError::InputFile { .. } => exit_codes::INVALID_DATA,
            CliError::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        CliError::Client(ClientError::Schema(e))
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Usage("x".into()).exit_code(), exit_codes::INVALID_ARGS);

        let schema = SchemaError {
            record: "PingOptions".to_string(),
            path: "address".to_string(),
            message: "missing field `address`".to_string(),
        };
        let file = CliError::InputFile {
            path: PathBuf::from("ping.json"),
            source: schema.clone().into(),
        };
        assert_eq!(file.exit_code(), exit_codes::INVALID_DATA);
        assert_eq!(
            file.to_string(),
            "input file ping.json: invalid PingOptions at `address`: missing field `address`"
        );
        assert_eq!(CliError::from(schema).exit_code(), exit_codes::INVALID_DATA);
    }
}
