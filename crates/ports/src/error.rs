use thiserror::Error;

/// Failures a time source can report.
///
/// Every variant represents test-author misuse, never a transient
/// condition, so none of them are retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("no more times to provide")]
    InvalidState,

    #[error("sequence has no more instants to provide")]
    ExhaustedSequence,

    #[error("calling {operation}() is not supported with sequences")]
    UnsupportedOperation { operation: &'static str },
}

pub type ClockResult<T> = std::result::Result<T, ClockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_operation_names_the_call() {
        let err = ClockError::UnsupportedOperation { operation: "tick" };
        assert_eq!(
            err.to_string(),
            "calling tick() is not supported with sequences"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(ClockError::InvalidState, ClockError::InvalidState);
        assert_ne!(ClockError::InvalidState, ClockError::ExhaustedSequence);
    }
}
