//! Error types for range based sorting.
//!
//! Whole-slice sorts can't fail. Errors only arise when the caller hands in explicit
//! bounds, or when a fallible comparator reports a fault.

use core::convert::Infallible;
use core::fmt::{self, Display, Formatter};
use std::error::Error;

/// Error returned by the range based and fallible sort functions.
///
/// `E` is the error type of a fallible comparator. For the plain comparator forms it is
/// [`Infallible`] and the `Comparator` variant can't be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError<E = Infallible> {
    /// `left` or `right` lie outside `[0, len)` for a non-empty range.
    OutOfRange {
        /// Inclusive lower bound as passed by the caller.
        left: isize,
        /// Inclusive upper bound as passed by the caller.
        right: isize,
        /// Length of the sequence.
        len: usize,
    },

    /// The comparator failed. The sequence holds an unspecified permutation of its original
    /// elements.
    Comparator(E),
}

impl<E> SortError<E> {
    /// Returns `true` if the error stems from invalid bounds.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Maps the comparator error, leaving `OutOfRange` as is.
    pub fn map_comparator<U>(self, f: impl FnOnce(E) -> U) -> SortError<U> {
        match self {
            Self::OutOfRange { left, right, len } => SortError::OutOfRange { left, right, len },
            Self::Comparator(err) => SortError::Comparator(f(err)),
        }
    }
}

impl SortError<Infallible> {
    /// Widens an error from an infallible comparator to any comparator error type.
    pub fn widen<U>(self) -> SortError<U> {
        self.map_comparator(|never| match never {})
    }
}

impl<E: Display> Display for SortError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { left, right, len } => {
                write!(f, "Range [{left}, {right}] out of bounds for length {len}")
            }
            Self::Comparator(err) => write!(f, "Comparator failed: {err}"),
        }
    }
}

impl<E: Error + 'static> Error for SortError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfRange { .. } => None,
            Self::Comparator(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Boom;

    impl Display for Boom {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write!(f, "boom")
        }
    }

    impl Error for Boom {}

    #[test]
    fn display() {
        let err: SortError = SortError::OutOfRange {
            left: 0,
            right: 6,
            len: 6,
        };
        assert_eq!(err.to_string(), "Range [0, 6] out of bounds for length 6");

        let err = SortError::Comparator(Boom);
        assert_eq!(err.to_string(), "Comparator failed: boom");
    }

    #[test]
    fn source_is_comparator_error() {
        let err = SortError::Comparator(Boom);
        assert!(err.source().is_some());
        assert!(!err.is_out_of_range());

        let err: SortError<Boom> = SortError::OutOfRange {
            left: -1,
            right: 2,
            len: 2,
        };
        assert!(err.source().is_none());
        assert!(err.is_out_of_range());
    }

    #[test]
    fn widen_keeps_bounds() {
        let err: SortError = SortError::OutOfRange {
            left: 3,
            right: 9,
            len: 4,
        };
        let widened: SortError<Boom> = err.widen();
        assert_eq!(
            widened,
            SortError::OutOfRange {
                left: 3,
                right: 9,
                len: 4
            }
        );
    }
}
