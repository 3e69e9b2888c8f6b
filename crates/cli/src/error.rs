//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: generator error (invalid bound, inverted range, empty spec)
//! - 11: I/O error (reading or writing vector files)
//! - 12: input error (unknown variant, missing method argument)
//! - 13: serialization error
//! - 14: parity mismatch found by `verify`

use legacy_rng_core::RngError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A generator-level error.
    Rng(RngError),
    /// An I/O error (file read or write).
    Io(String),
    /// A user input error (bad variant name, missing `--bound`).
    Input(String),
    /// A serialization error (JSON parse or output failure).
    Serialization(String),
    /// `verify` found this many values that differ from the recorded set.
    Mismatch(usize),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Rng(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::Mismatch(_) => 14,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Rng(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
            CliError::Mismatch(n) => write!(f, "{n} value(s) differ from the recorded vectors"),
        }
    }
}

impl From<RngError> for CliError {
    fn from(e: RngError) -> Self {
        CliError::Rng(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_error_exit_code_is_10() {
        let err = CliError::from(RngError::InvalidArgument {
            name: "bound",
            reason: "must be positive, got 0".into(),
        });
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("bound"));
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("write failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("unknown variant".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn mismatch_exit_code_is_14_and_reports_count() {
        let err = CliError::Mismatch(3);
        assert_eq!(err.exit_code(), 14);
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
