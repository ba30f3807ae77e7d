//! The cursor and sequence traits.

use crate::error::Result;

/// A position inside a sequence.
///
/// A cursor starts on the first element (or exhausted, for an empty
/// sequence). [`advance`](Cursor::advance) hands out the current element and
/// moves to its successor, so every element is produced exactly once and in
/// order.
pub trait Cursor {
    /// The element handle produced by this cursor.
    type Element;

    /// Returns the element the cursor is positioned on.
    fn current(&self) -> Option<&Self::Element>;

    /// Returns whether the cursor has moved past the last element.
    fn is_exhausted(&self) -> bool {
        self.current().is_none()
    }

    /// Moves the current element out and steps to its successor.
    ///
    /// Returns `Ok(None)` once exhausted.
    ///
    /// # Errors
    ///
    /// Linked cursors fail with
    /// [`CombinatorError::NonTerminatingTraversal`](crate::error::CombinatorError::NonTerminatingTraversal)
    /// when the traversal limit is reached before the empty marker.
    fn advance(&mut self) -> Result<Option<Self::Element>>;

    /// Adapts the cursor into an iterator of `Result<Element>`.
    ///
    /// The iterator yields at most one error and then stops.
    fn into_elements(self) -> Elements<Self>
    where
        Self: Sized,
    {
        Elements {
            cursor: self,
            failed: false,
        }
    }
}

/// Anything that can be enumerated through a [`Cursor`].
pub trait Sequence {
    /// The element handle produced by the cursor.
    type Element;
    /// The cursor type.
    type Cursor: Cursor<Element = Self::Element>;

    /// Positions a new cursor on the first element.
    fn cursor(self) -> Self::Cursor;

    /// Returns the exact number of elements when it is known without
    /// traversing.
    fn length_hint(&self) -> Option<usize> {
        None
    }
}

/// Iterator returned by [`Cursor::into_elements`].
#[derive(Debug)]
pub struct Elements<C> {
    cursor: C,
    failed: bool,
}

impl<C: Cursor> Iterator for Elements<C> {
    type Item = Result<C::Element>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.cursor.advance() {
            Ok(element) => element.map(Ok),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

impl<C: Cursor> std::iter::FusedIterator for Elements<C> {}
