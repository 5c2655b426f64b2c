//! Error Types
//!
//! The formatting utilities perform no I/O; the only failure is a caller
//! passing an absent value where a present one is required. Negative
//! repeat counts and indentation depths are unrepresentable (`usize`
//! parameters), so no precondition-violation variant exists.

use thiserror::Error;

/// Errors produced by the formatting utilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// An absent value was passed where a present one is required, e.g. a
    /// `None` element in the sequence given to [`join`](crate::text::join).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for the fallible formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = FormatError::InvalidArgument("element 0 is absent".to_owned());
        assert_eq!(err.to_string(), "invalid argument: element 0 is absent");
    }
}
