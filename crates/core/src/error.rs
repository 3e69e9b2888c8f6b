//! Error types for the legacy generator core.

use thiserror::Error;

/// Errors produced by generator and vector operations.
///
/// Every failing call leaves the generator state exactly as it was before the
/// call, so a caller can recover by retrying with a valid argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RngError {
    /// An argument was outside the domain the reference accepts.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },
}

impl RngError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        RngError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_includes_name_and_reason() {
        let err = RngError::invalid("bound", "must be positive, got 0");
        let msg = format!("{err}");
        assert!(msg.contains("bound"), "missing argument name in: {msg}");
        assert!(msg.contains("got 0"), "missing reason in: {msg}");
    }

    #[test]
    fn invalid_helper_builds_the_variant() {
        let err = RngError::invalid("min", "greater than max");
        assert_eq!(
            err,
            RngError::InvalidArgument {
                name: "min",
                reason: "greater than max".into(),
            }
        );
    }

    #[test]
    fn rng_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RngError>();
    }

    #[test]
    fn rng_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<RngError>();
    }
}
