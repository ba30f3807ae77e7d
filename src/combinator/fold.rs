//! Fold (reduce) over sequences.

use crate::config::TraversalLimit;
use crate::error::{CombinatorError, Result};
use crate::sequence::{Cursor, Sequence};

/// Folds a sequence into a single accumulated value.
///
/// The accumulator starts at `initial`; every element, in order, replaces it
/// with `combine(accumulator, element)`. An empty sequence returns `initial`
/// unchanged.
///
/// # Errors
///
/// Only linked sequences can fail, with
/// [`CombinatorError::NonTerminatingTraversal`].
///
/// # Examples
///
/// ```rust
/// use lambdacraft::combinator::fold;
///
/// let numbers = [1, 2, 3, 4, 5];
/// assert_eq!(fold(&numbers, |accumulator, value| accumulator + value, 0).unwrap(), 15);
///
/// let empty: [i32; 0] = [];
/// assert_eq!(fold(&empty, |accumulator, value| accumulator + value, 7).unwrap(), 7);
/// ```
pub fn fold<S, B, F>(sequence: S, mut combine: F, initial: B) -> Result<B>
where
    S: Sequence,
    F: FnMut(B, S::Element) -> B,
{
    try_fold(
        sequence,
        |accumulator, element| Ok::<B, CombinatorError>(combine(accumulator, element)),
        initial,
    )
}

/// Folds a sequence with a combining function that may fail.
///
/// The first error returned by `combine` stops the traversal and is handed
/// back exactly as raised.
///
/// # Errors
///
/// Returns the error raised by `combine`, or a traversal error converted
/// through `X: From<CombinatorError>`.
///
/// # Examples
///
/// ```rust
/// use lambdacraft::combinator::try_fold;
/// use lambdacraft::error::CombinatorError;
///
/// #[derive(Debug, PartialEq)]
/// enum SumError {
///     Overflow,
///     Traversal(CombinatorError),
/// }
///
/// impl From<CombinatorError> for SumError {
///     fn from(error: CombinatorError) -> Self {
///         Self::Traversal(error)
///     }
/// }
///
/// let checked_sum = |numbers: &[u8]| {
///     try_fold(numbers, |total: u8, value| total.checked_add(*value).ok_or(SumError::Overflow), 0)
/// };
/// assert_eq!(checked_sum(&[100, 100]), Ok(200));
/// assert_eq!(checked_sum(&[200, 100]), Err(SumError::Overflow));
/// ```
pub fn try_fold<S, B, X, F>(sequence: S, mut combine: F, initial: B) -> Result<B, X>
where
    S: Sequence,
    F: FnMut(B, S::Element) -> Result<B, X>,
    X: From<CombinatorError>,
{
    let mut cursor = sequence.cursor();
    let mut accumulator = initial;
    let mut steps = 0usize;
    while let Some(element) = cursor.advance()? {
        accumulator = combine(accumulator, element)?;
        steps += 1;
    }
    tracing::trace!(operation = "fold", steps, "fold finished");
    Ok(accumulator)
}

/// Folds a linked sequence given by its head and a `next` function value.
///
/// For every element, `combine(accumulator, &element)` runs first and
/// `next(&element)` second, so `next` observes whatever `combine` changed in
/// state the two share. Bounded by the default [`TraversalLimit`].
///
/// # Errors
///
/// Returns [`CombinatorError::NonTerminatingTraversal`] when `next` has not
/// reached the empty marker within the default limit.
///
/// # Examples
///
/// ```rust
/// use lambdacraft::combinator::fold_s;
///
/// struct Argument {
///     item: String,
///     next: Option<Box<Argument>>,
/// }
///
/// let list = Argument {
///     item: "lambda".to_string(),
///     next: Some(Box::new(Argument { item: "craft".to_string(), next: None })),
/// };
///
/// let total_length = fold_s(
///     Some(&list),
///     |value| value.next.as_deref(),
///     |accumulator, value| accumulator + value.item.len(),
///     0,
/// )
/// .unwrap();
/// assert_eq!(total_length, 11);
/// ```
pub fn fold_s<E, N, B, F>(first: Option<E>, next: N, combine: F, initial: B) -> Result<B>
where
    N: FnMut(&E) -> Option<E>,
    F: FnMut(B, &E) -> B,
{
    fold_s_with_limit(first, next, combine, initial, TraversalLimit::default())
}

/// [`fold_s`] with an explicit traversal limit.
///
/// # Errors
///
/// Returns [`CombinatorError::NonTerminatingTraversal`] when `next` has not
/// reached the empty marker within `limit`.
pub fn fold_s_with_limit<E, N, B, F>(
    first: Option<E>,
    next: N,
    mut combine: F,
    initial: B,
    limit: TraversalLimit,
) -> Result<B>
where
    N: FnMut(&E) -> Option<E>,
    F: FnMut(B, &E) -> B,
{
    try_fold_chain(
        first,
        next,
        |accumulator, element| Ok::<B, CombinatorError>(combine(accumulator, element)),
        initial,
        limit,
        "fold_s",
    )
}

/// Combines each element before asking `next` for its successor.
pub(crate) fn try_fold_chain<E, N, B, X, F>(
    first: Option<E>,
    mut next: N,
    mut combine: F,
    initial: B,
    limit: TraversalLimit,
    operation: &'static str,
) -> Result<B, X>
where
    N: FnMut(&E) -> Option<E>,
    F: FnMut(B, &E) -> Result<B, X>,
    X: From<CombinatorError>,
{
    let mut current = first;
    let mut accumulator = initial;
    let mut visited = 0usize;
    while let Some(element) = current {
        limit.check(visited, operation)?;
        accumulator = combine(accumulator, &element)?;
        current = next(&element);
        visited += 1;
    }
    tracing::trace!(operation, visited, "fold finished");
    Ok(accumulator)
}
