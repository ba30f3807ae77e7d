//! Traversal for side effects.

use crate::config::TraversalLimit;
use crate::error::Result;
use crate::sequence::{Cursor, Sequence};

/// Walks a linked chain with a step function that also picks the successor.
///
/// `current` starts at `first`; while it is not the empty marker it becomes
/// `step(current)`. The element is moved into `step`, so `step` may release
/// it, as long as it captures the forward link first. Ownership makes that
/// order the only one that compiles:
///
/// ```rust
/// use lambdacraft::combinator::foreach_s;
///
/// struct Node {
///     item: &'static str,
///     next: Option<Box<Node>>,
/// }
///
/// let list = Box::new(Node {
///     item: "a",
///     next: Some(Box::new(Node { item: "b", next: None })),
/// });
///
/// let mut released = Vec::new();
/// foreach_s(Some(list), |mut node| {
///     let forward = node.next.take();
///     released.push(node.item);
///     drop(node);
///     forward
/// })
/// .unwrap();
/// assert_eq!(released, vec!["a", "b"]);
/// ```
///
/// `step` may also return an element other than the natural successor.
///
/// # Errors
///
/// Returns
/// [`CombinatorError::NonTerminatingTraversal`](crate::error::CombinatorError::NonTerminatingTraversal)
/// when the empty marker has not been reached within the default limit.
pub fn foreach_s<E, F>(first: Option<E>, step: F) -> Result<()>
where
    F: FnMut(E) -> Option<E>,
{
    foreach_s_with_limit(first, step, TraversalLimit::default())
}

/// [`foreach_s`] with an explicit traversal limit.
///
/// # Errors
///
/// Returns
/// [`CombinatorError::NonTerminatingTraversal`](crate::error::CombinatorError::NonTerminatingTraversal)
/// when the empty marker has not been reached within `limit`. The element
/// that would have been visited next is dropped.
pub fn foreach_s_with_limit<E, F>(first: Option<E>, mut step: F, limit: TraversalLimit) -> Result<()>
where
    F: FnMut(E) -> Option<E>,
{
    let mut current = first;
    let mut visited = 0usize;
    while let Some(element) = current {
        limit.check(visited, "foreach_s")?;
        current = step(element);
        visited += 1;
    }
    tracing::trace!(operation = "foreach_s", visited, "traversal finished");
    Ok(())
}

/// Calls `action` on every element of a sequence, in order.
///
/// # Errors
///
/// Only linked sequences can fail, with
/// [`CombinatorError::NonTerminatingTraversal`](crate::error::CombinatorError::NonTerminatingTraversal).
///
/// # Examples
///
/// ```rust
/// use lambdacraft::combinator::for_each;
///
/// let mut total = 0;
/// for_each(&[1, 2, 3], |value| total += value).unwrap();
/// assert_eq!(total, 6);
/// ```
pub fn for_each<S, F>(sequence: S, mut action: F) -> Result<()>
where
    S: Sequence,
    F: FnMut(S::Element),
{
    let mut cursor = sequence.cursor();
    let mut visited = 0usize;
    while let Some(element) = cursor.advance()? {
        action(element);
        visited += 1;
    }
    tracing::trace!(operation = "for_each", visited, "traversal finished");
    Ok(())
}
