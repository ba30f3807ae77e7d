//! Linked sequences driven by a caller-supplied `next` function value.

use std::fmt;

use super::cursor::{Cursor, Sequence};
use crate::config::TraversalLimit;
use crate::error::Result;

/// A chain of elements connected by a caller-defined successor relation.
///
/// The empty marker is `None`. `E` is an element handle: a reference, an
/// index into a table, an `Rc`, or anything else `next` knows how to follow.
/// Following `next` must eventually yield `None`; a chain that is still going
/// after [`TraversalLimit`] elements is reported as
/// [`CombinatorError::NonTerminatingTraversal`](crate::error::CombinatorError::NonTerminatingTraversal).
///
/// The cursor hands elements out by value, so it calls `next` on an element
/// just before returning it. When the consumer and `next` share state, use
/// [`fold_s`](crate::combinator::fold_s), which calls `next` only after the
/// element has been combined.
///
/// # Examples
///
/// ```rust
/// use lambdacraft::combinator::fold;
/// use lambdacraft::sequence::LinkedSequence;
///
/// struct Node {
///     weight: u32,
///     next: Option<Box<Node>>,
/// }
///
/// let chain = Node { weight: 1, next: Some(Box::new(Node { weight: 2, next: None })) };
/// let sequence = LinkedSequence::new(Some(&chain), |node| node.next.as_deref());
///
/// assert_eq!(fold(sequence, |total, node| total + node.weight, 0).unwrap(), 3);
/// ```
pub struct LinkedSequence<E, F> {
    first: Option<E>,
    next: F,
    limit: TraversalLimit,
    operation: &'static str,
}

impl<E, F> LinkedSequence<E, F>
where
    F: FnMut(&E) -> Option<E>,
{
    /// Creates a sequence starting at `first`, with the default limit.
    #[must_use]
    pub fn new(first: Option<E>, next: F) -> Self {
        Self {
            first,
            next,
            limit: TraversalLimit::default(),
            operation: "linked traversal",
        }
    }

    /// Replaces the traversal limit.
    #[must_use]
    pub fn with_limit(mut self, limit: TraversalLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Returns the traversal limit.
    #[must_use]
    pub const fn limit(&self) -> TraversalLimit {
        self.limit
    }

    /// Returns whether the sequence starts at the empty marker.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub(crate) fn named(mut self, operation: &'static str) -> Self {
        self.operation = operation;
        self
    }
}

impl<E: fmt::Debug, F> fmt::Debug for LinkedSequence<E, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LinkedSequence")
            .field("first", &self.first)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

impl<E, F> Sequence for LinkedSequence<E, F>
where
    F: FnMut(&E) -> Option<E>,
{
    type Element = E;
    type Cursor = LinkedCursor<E, F>;

    fn cursor(self) -> Self::Cursor {
        LinkedCursor {
            current: self.first,
            next: self.next,
            visited: 0,
            limit: self.limit,
            operation: self.operation,
        }
    }
}

/// Cursor over a [`LinkedSequence`].
pub struct LinkedCursor<E, F> {
    current: Option<E>,
    next: F,
    visited: usize,
    limit: TraversalLimit,
    operation: &'static str,
}

impl<E, F> LinkedCursor<E, F> {
    /// Returns how many elements have been handed out so far.
    #[must_use]
    pub const fn visited(&self) -> usize {
        self.visited
    }
}

impl<E: fmt::Debug, F> fmt::Debug for LinkedCursor<E, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LinkedCursor")
            .field("current", &self.current)
            .field("visited", &self.visited)
            .finish_non_exhaustive()
    }
}

impl<E, F> Cursor for LinkedCursor<E, F>
where
    F: FnMut(&E) -> Option<E>,
{
    type Element = E;

    fn current(&self) -> Option<&E> {
        self.current.as_ref()
    }

    fn advance(&mut self) -> Result<Option<E>> {
        if self.current.is_none() {
            return Ok(None);
        }
        self.limit.check(self.visited, self.operation)?;
        let element = self.current.take();
        if let Some(element) = element.as_ref() {
            self.current = (self.next)(element);
            self.visited += 1;
        }
        Ok(element)
    }
}

/// A node type that owns its successor.
///
/// Usually derived: mark the successor field (of type `Option<Box<Self>>`)
/// with `#[link]`.
///
/// ```rust
/// use lambdacraft::sequence::Linked;
///
/// #[derive(Linked)]
/// struct Node {
///     data: i32,
///     #[link]
///     next: Option<Box<Node>>,
/// }
///
/// let mut head = Node { data: 1, next: Some(Box::new(Node { data: 2, next: None })) };
/// assert_eq!(head.link().map(|node| node.data), Some(2));
/// assert_eq!(head.take_link().map(|node| node.data), Some(2));
/// assert!(head.link().is_none());
/// ```
pub trait Linked: Sized {
    /// Borrows the successor.
    fn link(&self) -> Option<&Self>;

    /// Detaches and returns the successor, leaving `self` as the last node.
    fn take_link(&mut self) -> Option<Box<Self>>;
}

/// A borrowed traversal over [`Linked`] nodes.
pub type NodeSequence<'a, N> = LinkedSequence<&'a N, fn(&&'a N) -> Option<&'a N>>;

impl<'a, N: Linked> NodeSequence<'a, N> {
    /// Traverses `head` and its successors through [`Linked::link`].
    #[must_use]
    pub fn from_node(head: Option<&'a N>) -> Self {
        Self::new(head, |node: &&'a N| Linked::link(*node))
    }
}
