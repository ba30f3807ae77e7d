//! A uniform way to enumerate elements.
//!
//! The combinators never care where their elements come from. They consume a
//! [`Sequence`], which hands out a [`Cursor`]; the cursor exposes the current
//! element, whether it is exhausted, and a way to step to the successor.
//!
//! Two shapes are provided:
//!
//! - [`Contiguous`]: a bounds-known buffer addressed by index. Slices,
//!   arrays and vectors are sequences directly.
//! - [`LinkedSequence`]: a head element plus a caller-supplied `next`
//!   function value. Any pointer-like chain fits, whatever the node type.
//!
//! Node types that own their successor can implement [`Linked`] (usually
//! through `#[derive(Linked)]`) and get a ready-made `next`.
//!
//! # Examples
//!
//! ```rust
//! use lambdacraft::sequence::{Cursor, Sequence, LinkedSequence};
//!
//! // A chain encoded in a table: index -> successor index.
//! let successors = [Some(2), None, Some(1)];
//! let mut cursor = LinkedSequence::new(Some(0usize), |index: &usize| successors[*index]).cursor();
//!
//! let mut visited = Vec::new();
//! while let Some(index) = cursor.advance().unwrap() {
//!     visited.push(index);
//! }
//! assert_eq!(visited, vec![0, 2, 1]);
//! assert!(cursor.is_exhausted());
//! ```

mod contiguous;
mod cursor;
mod linked;

pub use contiguous::{Contiguous, ContiguousCursor, IntoContiguous};
pub use cursor::{Cursor, Elements, Sequence};
pub use linked::{Linked, LinkedCursor, LinkedSequence, NodeSequence};

#[cfg(feature = "derive")]
pub use lambdacraft_derive::Linked;
