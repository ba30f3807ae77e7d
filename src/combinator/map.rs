//! Map over contiguous and linked sequences.
//!
//! Contiguous maps write into a caller-owned buffer and never allocate.
//! Linked maps build a brand new chain: the transform for the last element
//! runs first and every later call receives the chain built so far, so each
//! freshly produced element can link itself to it.

use smallvec::SmallVec;

use crate::config::TraversalLimit;
use crate::error::{CombinatorError, Result};
use crate::sequence::{Cursor, IntoContiguous, LinkedSequence, Sequence};

/// Chains up to this length are buffered without touching the heap.
const INLINE_CHAIN: usize = 32;

type PendingChain<E> = SmallVec<[E; INLINE_CHAIN]>;

/// Writes `transform(source[i])` into `destination[i]` for every index.
///
/// Returns the number of written elements. `destination` may be longer than
/// the source; the extra slots are left untouched.
///
/// # Errors
///
/// Returns [`CombinatorError::InvalidArgument`] when `destination` is shorter
/// than the source. Nothing is written in that case.
///
/// # Examples
///
/// ```rust
/// use lambdacraft::combinator::map;
///
/// let values = [1, 2, 3, 4, 5];
/// let mut squared = [0; 5];
/// assert_eq!(map(&values, |value| value * value, &mut squared), Ok(5));
/// assert_eq!(squared, [1, 4, 9, 16, 25]);
///
/// let mut too_small = [0; 4];
/// assert!(map(&values, |value| value * value, &mut too_small).is_err());
/// ```
pub fn map<'a, S, U, F>(source: S, mut transform: F, destination: &mut [U]) -> Result<usize>
where
    S: IntoContiguous<'a>,
    F: FnMut(&'a S::Element) -> U,
{
    try_map(
        source,
        |element| Ok::<U, CombinatorError>(transform(element)),
        destination,
    )
}

/// [`map`] with a transform that may fail.
///
/// Elements before the failing index have already been written when the
/// error is returned.
///
/// # Errors
///
/// Returns the first error raised by `transform`, or
/// [`CombinatorError::InvalidArgument`] (converted through `X::from`) when
/// `destination` is shorter than the source.
pub fn try_map<'a, S, U, X, F>(
    source: S,
    mut transform: F,
    destination: &mut [U],
) -> Result<usize, X>
where
    S: IntoContiguous<'a>,
    F: FnMut(&'a S::Element) -> Result<U, X>,
    X: From<CombinatorError>,
{
    let source = source.into_contiguous();
    if destination.len() < source.len() {
        return Err(CombinatorError::invalid_argument(
            "map",
            format!(
                "destination holds {} elements but the source has {}",
                destination.len(),
                source.len()
            ),
        )
        .into());
    }
    for (slot, element) in destination.iter_mut().zip(source.as_slice()) {
        *slot = transform(element)?;
    }
    tracing::trace!(operation = "map", length = source.len(), "map finished");
    Ok(source.len())
}

/// Replaces every element of `buffer` by `transform(element)`, in order.
///
/// Each element is read before it is overwritten, so the transform always
/// observes the original value at that index.
///
/// # Examples
///
/// ```rust
/// use lambdacraft::combinator::map_in_place;
///
/// let mut values = vec![1.1, 2.1, 3.1];
/// map_in_place(&mut values, |value| value * 2.0);
/// assert_eq!(values, vec![2.2, 4.2, 6.2]);
/// ```
pub fn map_in_place<T, F>(buffer: &mut [T], mut transform: F)
where
    F: FnMut(&T) -> T,
{
    for slot in buffer.iter_mut() {
        let mapped = transform(&*slot);
        *slot = mapped;
    }
}

/// Builds a new chain by transforming a linked sequence.
///
/// Semantically `map_s(empty) = empty` and
/// `map_s(e) = transform(e, map_s(next(e)))`: the transform receives the
/// source element together with the already mapped remainder, and returns
/// the new head. The source chain is not modified; the new chain belongs to
/// the caller.
///
/// The work is done in two passes (collect the source elements, then build
/// from tail to head), so arbitrarily long chains do not consume call stack.
///
/// # Errors
///
/// - [`CombinatorError::NonTerminatingTraversal`] when `next` does not reach
///   the empty marker within the default limit.
/// - [`CombinatorError::OutOfMemory`] when the collection buffer cannot
///   grow. No transform has run at that point.
///
/// # Examples
///
/// ```rust
/// use lambdacraft::combinator::map_s;
///
/// struct Node {
///     data: i32,
///     next: Option<Box<Node>>,
/// }
///
/// let head = Node {
///     data: 1,
///     next: Some(Box::new(Node { data: 2, next: Some(Box::new(Node { data: 3, next: None })) })),
/// };
///
/// let squared = map_s(
///     Some(&head),
///     |value| value.next.as_deref(),
///     |value, next| Box::new(Node { data: value.data * value.data, next }),
/// )
/// .unwrap();
///
/// let mut data = Vec::new();
/// let mut cursor = squared.as_deref();
/// while let Some(node) = cursor {
///     data.push(node.data);
///     cursor = node.next.as_deref();
/// }
/// assert_eq!(data, vec![1, 4, 9]);
/// ```
pub fn map_s<E, N, O, F>(first: Option<E>, next: N, transform: F) -> Result<Option<O>>
where
    N: FnMut(&E) -> Option<E>,
    F: FnMut(E, Option<O>) -> O,
{
    map_s_with_limit(first, next, transform, TraversalLimit::default())
}

/// [`map_s`] with an explicit traversal limit.
///
/// # Errors
///
/// Same as [`map_s`], with `limit` in place of the default.
pub fn map_s_with_limit<E, N, O, F>(
    first: Option<E>,
    next: N,
    mut transform: F,
    limit: TraversalLimit,
) -> Result<Option<O>>
where
    N: FnMut(&E) -> Option<E>,
    F: FnMut(E, Option<O>) -> O,
{
    try_map_s_with_limit(
        first,
        next,
        |element, tail| Ok::<O, CombinatorError>(transform(element, tail)),
        limit,
    )
}

/// [`map_s`] with a transform that may fail.
///
/// The build is all-or-nothing: when `transform` fails, the partially built
/// chain (already handed to that failing call as its tail) is dropped, and
/// the error is returned unchanged.
///
/// # Errors
///
/// Returns the first error raised by `transform`, or a traversal/allocation
/// error converted through `X: From<CombinatorError>`.
///
/// # Examples
///
/// ```rust
/// use lambdacraft::combinator::try_map_s;
/// use lambdacraft::error::CombinatorError;
///
/// let values = [4, 9, -1, 16];
/// let roots: Result<Option<Vec<u32>>, CombinatorError> = try_map_s(
///     Some(0usize),
///     |index| (*index + 1 < values.len()).then(|| index + 1),
///     |index, tail: Option<Vec<u32>>| {
///         let value = values[index];
///         if value < 0 {
///             return Err(CombinatorError::InvalidArgument {
///                 operation: "sqrt",
///                 reason: format!("negative input {value}"),
///             });
///         }
///         let mut roots = tail.unwrap_or_default();
///         roots.insert(0, f64::from(value).sqrt() as u32);
///         Ok(roots)
///     },
/// );
/// assert!(roots.is_err());
/// ```
pub fn try_map_s<E, N, O, X, F>(first: Option<E>, next: N, transform: F) -> Result<Option<O>, X>
where
    N: FnMut(&E) -> Option<E>,
    F: FnMut(E, Option<O>) -> Result<O, X>,
    X: From<CombinatorError>,
{
    try_map_s_with_limit(first, next, transform, TraversalLimit::default())
}

/// [`try_map_s`] with an explicit traversal limit.
///
/// # Errors
///
/// Same as [`try_map_s`], with `limit` in place of the default.
pub fn try_map_s_with_limit<E, N, O, X, F>(
    first: Option<E>,
    next: N,
    mut transform: F,
    limit: TraversalLimit,
) -> Result<Option<O>, X>
where
    N: FnMut(&E) -> Option<E>,
    F: FnMut(E, Option<O>) -> Result<O, X>,
    X: From<CombinatorError>,
{
    let sequence = LinkedSequence::new(first, next)
        .with_limit(limit)
        .named("map_s");
    let pending = collect_chain(sequence)?;
    let length = pending.len();

    let mut mapped = None;
    for element in pending.into_iter().rev() {
        mapped = Some(transform(element, mapped)?);
    }
    tracing::trace!(operation = "map_s", length, "map_s finished");
    Ok(mapped)
}

/// Drains a sequence into a buffer whose growth is checked.
fn collect_chain<S: Sequence>(sequence: S) -> Result<PendingChain<S::Element>> {
    let mut cursor = sequence.cursor();
    let mut pending = PendingChain::new();
    while let Some(element) = cursor.advance()? {
        if pending.len() == pending.capacity() {
            let requested = pending.len() * 2;
            pending.try_reserve(pending.len()).map_err(|error| {
                tracing::warn!(?error, requested, "map_s buffer allocation failed");
                CombinatorError::OutOfMemory {
                    operation: "map_s",
                    requested,
                }
            })?;
        }
        pending.push(element);
    }
    Ok(pending)
}
