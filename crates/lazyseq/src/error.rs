//! Error types for the lazyseq crate.

use thiserror::Error;

/// Errors raised when a combinator is called with unusable arguments.
///
/// Errors are produced synchronously, before any element of the source is
/// pulled. Failures inside caller-supplied capabilities are never wrapped in
/// this type; they surface from the pull that triggered them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A required argument (source, capability or function) was absent.
    #[error("invalid argument: {name} cannot be absent")]
    InvalidArgument { name: &'static str },
}

impl SequenceError {
    /// Returns the name of the offending argument.
    pub fn argument(&self) -> &'static str {
        match self {
            SequenceError::InvalidArgument { name } => name,
        }
    }
}

/// Result type for lazyseq operations.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Unwraps a present argument or reports it as invalid.
pub(crate) fn require<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or_else(|| {
        tracing::debug!(argument = name, "rejected absent argument");
        SequenceError::InvalidArgument { name }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_present() {
        assert_eq!(require(Some(3), "source"), Ok(3));
    }

    #[test]
    fn require_absent() {
        let err = require::<i32>(None, "predicate").unwrap_err();
        assert_eq!(err, SequenceError::InvalidArgument { name: "predicate" });
        assert_eq!(err.argument(), "predicate");
    }

    #[test]
    fn error_display() {
        let err = SequenceError::InvalidArgument { name: "comparer" };
        assert_eq!(err.to_string(), "invalid argument: comparer cannot be absent");
    }
}
