use thiserror::Error;

/// Failures raised by terminal reducers and by operators with
/// out-of-domain parameters.
///
/// Building a pipeline never inspects data, so these surface only when a
/// sequence is consumed, or when a parameter is rejected up front.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// The reducer needs at least one element, but the sequence is empty.
    #[error("sequence contains no elements")]
    EmptySequence,
    /// No element satisfies the predicate.
    #[error("no element satisfies the predicate")]
    NoMatch,
    /// More than one element satisfies the predicate where exactly one
    /// was required.
    #[error("more than one element satisfies the predicate")]
    AmbiguousMatch,
    /// A parameter is outside of its domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = Error::InvalidArgument {
            name: "size",
            reason: "must be greater than zero",
        };
        assert_eq!(
            error.to_string(),
            "invalid argument `size`: must be greater than zero"
        );
        assert_eq!(Error::EmptySequence.to_string(), "sequence contains no elements");
    }
}
