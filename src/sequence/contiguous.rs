//! Contiguous, index-addressable sequences.

use std::fmt::Display;

use super::cursor::{Cursor, Sequence};
use crate::error::{CombinatorError, Result};

/// A borrowed buffer with a logical length.
///
/// The logical length may be shorter than the buffer, never longer. The
/// buffer is never resized or written through this type.
///
/// # Examples
///
/// ```rust
/// use lambdacraft::sequence::{Contiguous, Sequence};
///
/// let buffer = [1, 2, 3, 4];
/// let prefix = Contiguous::with_length(&buffer, 2).unwrap();
/// assert_eq!(prefix.len(), 2);
/// assert_eq!(prefix.as_slice(), &[1, 2]);
///
/// assert!(Contiguous::with_length(&buffer, -1).is_err());
/// assert!(Contiguous::with_length(&buffer, 5).is_err());
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Contiguous<'a, T> {
    elements: &'a [T],
}

impl<T> Clone for Contiguous<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Contiguous<'_, T> {}

impl<'a, T> Contiguous<'a, T> {
    /// Views the whole buffer.
    #[inline]
    #[must_use]
    pub const fn new(elements: &'a [T]) -> Self {
        Self { elements }
    }

    /// Views the first `length` elements of the buffer.
    ///
    /// `length` may be any integer type, mirroring callers that carry sizes
    /// around as signed counts.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatorError::InvalidArgument`] when `length` is negative
    /// or exceeds the buffer.
    pub fn with_length<L>(elements: &'a [T], length: L) -> Result<Self>
    where
        L: TryInto<usize> + Copy + Display,
    {
        let Ok(logical_length) = length.try_into() else {
            return Err(CombinatorError::invalid_argument(
                "Contiguous::with_length",
                format!("length {length} is not a valid element count"),
            ));
        };
        elements.get(..logical_length).map(Self::new).ok_or_else(|| {
            CombinatorError::invalid_argument(
                "Contiguous::with_length",
                format!(
                    "length {logical_length} exceeds the buffer of {} elements",
                    elements.len()
                ),
            )
        })
    }

    /// Returns the logical length.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the logical length is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the logical elements as a slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &'a [T] {
        self.elements
    }
}

/// Conversion into a [`Contiguous`] view.
///
/// Implemented for slices, arrays, vectors and [`Contiguous`] itself, so
/// contiguous-only combinators accept any of them.
pub trait IntoContiguous<'a> {
    /// The element type of the buffer.
    type Element: 'a;

    /// Views `self` as a contiguous sequence.
    fn into_contiguous(self) -> Contiguous<'a, Self::Element>;
}

impl<'a, T> IntoContiguous<'a> for Contiguous<'a, T> {
    type Element = T;

    fn into_contiguous(self) -> Contiguous<'a, T> {
        self
    }
}

impl<'a, T> IntoContiguous<'a> for &'a [T] {
    type Element = T;

    fn into_contiguous(self) -> Contiguous<'a, T> {
        Contiguous::new(self)
    }
}

impl<'a, T> IntoContiguous<'a> for &'a Vec<T> {
    type Element = T;

    fn into_contiguous(self) -> Contiguous<'a, T> {
        Contiguous::new(self.as_slice())
    }
}

impl<'a, T, const N: usize> IntoContiguous<'a> for &'a [T; N] {
    type Element = T;

    fn into_contiguous(self) -> Contiguous<'a, T> {
        Contiguous::new(self.as_slice())
    }
}

/// Cursor over a [`Contiguous`] sequence, visiting indices in increasing order.
#[derive(Debug, Clone)]
pub struct ContiguousCursor<'a, T> {
    current: Option<&'a T>,
    remaining: std::slice::Iter<'a, T>,
    position: usize,
}

impl<T> ContiguousCursor<'_, T> {
    /// Returns the index of the current element.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<'a, T> Cursor for ContiguousCursor<'a, T> {
    type Element = &'a T;

    #[inline]
    fn current(&self) -> Option<&Self::Element> {
        self.current.as_ref()
    }

    #[inline]
    fn advance(&mut self) -> Result<Option<Self::Element>> {
        let element = self.current.take();
        if element.is_some() {
            self.current = self.remaining.next();
            self.position += 1;
        }
        Ok(element)
    }
}

impl<'a, T> Sequence for Contiguous<'a, T> {
    type Element = &'a T;
    type Cursor = ContiguousCursor<'a, T>;

    fn cursor(self) -> Self::Cursor {
        let mut remaining = self.elements.iter();
        ContiguousCursor {
            current: remaining.next(),
            remaining,
            position: 0,
        }
    }

    fn length_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<'a, T> Sequence for &'a [T] {
    type Element = &'a T;
    type Cursor = ContiguousCursor<'a, T>;

    fn cursor(self) -> Self::Cursor {
        Contiguous::new(self).cursor()
    }

    fn length_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Element = &'a T;
    type Cursor = ContiguousCursor<'a, T>;

    fn cursor(self) -> Self::Cursor {
        self.into_contiguous().cursor()
    }

    fn length_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Element = &'a T;
    type Cursor = ContiguousCursor<'a, T>;

    fn cursor(self) -> Self::Cursor {
        self.into_contiguous().cursor()
    }

    fn length_hint(&self) -> Option<usize> {
        Some(N)
    }
}
