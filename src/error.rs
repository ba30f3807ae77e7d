//! Error types for the combinators.
//!
//! Combinators fail only when one of their documented preconditions is
//! violated. Errors raised inside a caller-supplied function value are never
//! wrapped: the fallible variants (`try_fold`, `try_map_s`) return them to
//! the caller unchanged.

use thiserror::Error;

/// Represents a precondition violation detected by a combinator.
///
/// # Examples
///
/// ```rust
/// use lambdacraft::error::CombinatorError;
///
/// let error = CombinatorError::InvalidArgument {
///     operation: "map",
///     reason: "destination holds 2 elements but the source has 3".to_string(),
/// };
/// assert_eq!(
///     format!("{error}"),
///     "map: invalid argument: destination holds 2 elements but the source has 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CombinatorError {
    /// A length or buffer argument is inconsistent with the sequence.
    #[error("{operation}: invalid argument: {reason}")]
    InvalidArgument {
        /// The combinator or constructor that rejected the argument.
        operation: &'static str,
        /// Human readable description of the inconsistency.
        reason: String,
    },

    /// A linked traversal did not reach the empty marker within the limit.
    #[error("{operation}: traversal did not terminate within {limit} elements")]
    NonTerminatingTraversal {
        /// The combinator that was traversing.
        operation: &'static str,
        /// The number of elements visited before giving up.
        limit: usize,
    },

    /// A working buffer could not be allocated.
    #[error("{operation}: out of memory while reserving room for {requested} elements")]
    OutOfMemory {
        /// The combinator that failed to allocate.
        operation: &'static str,
        /// The element capacity that was requested.
        requested: usize,
    },
}

impl CombinatorError {
    pub(crate) fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        let error = Self::InvalidArgument {
            operation,
            reason: reason.into(),
        };
        tracing::debug!(%error, "rejected argument");
        error
    }

    /// Returns the name of the operation that produced this error.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::InvalidArgument { operation, .. }
            | Self::NonTerminatingTraversal { operation, .. }
            | Self::OutOfMemory { operation, .. } => operation,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = CombinatorError> = std::result::Result<T, E>;

static_assertions::assert_impl_all!(CombinatorError: Send, Sync, std::error::Error);
