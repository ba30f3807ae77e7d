//! Derive macro for lambdacraft linked node types.
//!
//! # Available Derive Macros
//!
//! - [`Linked`]: Implements `lambdacraft::sequence::Linked` for a struct
//!   that owns its successor
//!
//! # Example
//!
//! ```rust,ignore
//! use lambdacraft::sequence::Linked;
//! use lambdacraft::combinator::fold_linked;
//!
//! #[derive(Linked)]
//! struct Node {
//!     data: i32,
//!     #[link]
//!     next: Option<Box<Node>>,
//! }
//!
//! let head = Node { data: 1, next: Some(Box::new(Node { data: 2, next: None })) };
//! let total = fold_linked(Some(&head), |total, node| total + node.data, 0).unwrap();
//! assert_eq!(total, 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod linked;

use proc_macro::TokenStream;

/// Derive macro implementing `Linked` for a node struct.
///
/// Exactly one field must carry the `#[link]` attribute, and its type must
/// be `Option<Box<Self>>`. Named and tuple structs are both accepted.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::lambdacraft::sequence::Linked for Node {
///     fn link(&self) -> Option<&Self> { self.next.as_deref() }
///     fn take_link(&mut self) -> Option<Box<Self>> { self.next.take() }
/// }
/// ```
///
/// # Generics
///
/// Generic parameters and where clauses are carried over:
///
/// ```rust,ignore
/// #[derive(Linked)]
/// struct Cell<T> {
///     value: T,
///     #[link]
///     next: Option<Box<Cell<T>>>,
/// }
/// ```
///
/// # Errors
///
/// Compilation fails with a spanned message when the input is not a struct,
/// has no `#[link]` field, or has more than one.
#[proc_macro_derive(Linked, attributes(link))]
pub fn derive_linked(input: TokenStream) -> TokenStream {
    linked::derive_linked_impl(input)
}
