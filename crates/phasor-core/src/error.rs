//! Error types shared by keys and terms.

use phasor_rings::ConversionError;
use thiserror::Error;

/// Errors raised while building or re-expressing keys.
///
/// These are modelling errors, not transient faults: they are reported to
/// the caller immediately and never retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A key or symbol set was used with arguments of the wrong shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric conversion could not preserve a value.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`].
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}

/// Result alias for fallible key operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use phasor_rings::SafeCast;

    #[test]
    fn test_display() {
        let err = Error::invalid_argument("two symbols inserted at once");
        assert_eq!(err.to_string(), "invalid argument: two symbols inserted at once");
    }

    #[test]
    fn test_conversion_is_forwarded_unchanged() {
        let cause = SafeCast::<u8>::safe_cast(&1000u32).unwrap_err();
        let err = Error::from(cause.clone());
        assert_eq!(err.to_string(), cause.to_string());
        assert_eq!(err, Error::Conversion(cause));
    }
}
