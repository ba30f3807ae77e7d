//! Combinators specialized to [`Linked`] node types.
//!
//! These are thin wrappers that supply [`Linked::link`] as the `next`
//! function value, plus [`release`], which tears a boxed chain down one node
//! at a time.

use super::fold::try_fold_chain;
use super::for_each::foreach_s_with_limit;
use super::map::map_s;
use crate::config::TraversalLimit;
use crate::error::{CombinatorError, Result};
use crate::sequence::Linked;

/// Folds a chain of [`Linked`] nodes starting at `head`.
///
/// # Errors
///
/// Returns
/// [`CombinatorError::NonTerminatingTraversal`](crate::error::CombinatorError::NonTerminatingTraversal)
/// when the chain is longer than the default traversal limit.
pub fn fold_linked<'a, N, B, F>(head: Option<&'a N>, mut combine: F, initial: B) -> Result<B>
where
    N: Linked,
    F: FnMut(B, &'a N) -> B,
{
    try_fold_chain(
        head,
        |node: &&'a N| Linked::link(*node),
        |accumulator, node: &&'a N| Ok::<B, CombinatorError>(combine(accumulator, *node)),
        initial,
        TraversalLimit::default(),
        "fold_linked",
    )
}

/// Maps a chain of [`Linked`] nodes into a new chain.
///
/// See [`map_s`] for the calling order of `transform`.
///
/// # Errors
///
/// Same as [`map_s`].
pub fn map_linked<'a, N, O, F>(head: Option<&'a N>, transform: F) -> Result<Option<O>>
where
    N: Linked,
    F: FnMut(&'a N, Option<O>) -> O,
{
    map_s(head, |node: &&'a N| Linked::link(*node), transform)
}

/// Drops a boxed chain iteratively and returns how many nodes were released.
///
/// Dropping the head of a long `Option<Box<Node>>` chain directly recurses
/// once per node; this walks the chain with [`foreach_s`](super::foreach_s)
/// instead, detaching each successor before its predecessor is freed.
///
/// # Errors
///
/// Never fails in practice: an owned chain cannot be cyclic, so the
/// traversal runs unbounded. The `Result` keeps the signature aligned with
/// the other linked combinators.
///
/// # Examples
///
/// ```rust
/// use lambdacraft::combinator::release;
/// use lambdacraft::sequence::Linked;
///
/// #[derive(Linked)]
/// struct Node {
///     #[link]
///     next: Option<Box<Node>>,
/// }
///
/// let mut head = None;
/// for _ in 0..100_000 {
///     head = Some(Box::new(Node { next: head }));
/// }
/// assert_eq!(release(head).unwrap(), 100_000);
/// ```
pub fn release<N: Linked>(head: Option<Box<N>>) -> Result<usize> {
    let mut released = 0usize;
    foreach_s_with_limit(
        head,
        |mut node: Box<N>| {
            let forward = node.take_link();
            drop(node);
            released += 1;
            forward
        },
        TraversalLimit::Unbounded,
    )?;
    tracing::trace!(operation = "release", released, "chain released");
    Ok(released)
}
