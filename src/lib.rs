//! # lambdacraft
//!
//! Inline function values and higher-order combinators over sequences.
//!
//! ## Overview
//!
//! - **Function values**: `lambda!` and `compose!` macros, plus the
//!   `identity`, `constant` and `flip` combinators
//! - **Sequences**: one cursor abstraction over contiguous buffers and over
//!   caller-defined linked chains
//! - **Combinators**: `fold`, `map` and `for_each` over any sequence, and the
//!   linked forms `fold_s`, `map_s` and `foreach_s`
//!
//! Every precondition the combinators rely on is checked: inconsistent
//! lengths, undersized destination buffers, chains that never reach their
//! empty marker, and allocation failure while rebuilding a chain all come
//! back as a [`CombinatorError`](error::CombinatorError).
//!
//! ## Feature Flags
//!
//! - `function`: `lambda!`, `compose!` and the elementary function values
//! - `sequence`: the `Cursor`/`Sequence` abstraction
//! - `combinator`: fold, map and for-each
//! - `derive`: `#[derive(Linked)]` for node types
//! - `serde`: (de)serialization of [`TraversalLimit`](config::TraversalLimit)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambdacraft::prelude::*;
//!
//! #[derive(Linked)]
//! struct Node {
//!     data: i32,
//!     #[link]
//!     next: Option<Box<Node>>,
//! }
//!
//! let head = Node {
//!     data: 1,
//!     next: Some(Box::new(Node { data: 2, next: Some(Box::new(Node { data: 3, next: None })) })),
//! };
//!
//! let squared = map_linked(
//!     Some(&head),
//!     lambda!(Box<Node>, (value: &Node, next: Option<Box<Node>>), {
//!         Box::new(Node { data: value.data * value.data, next })
//!     }),
//! )
//! .unwrap();
//!
//! let total = fold_linked(squared.as_deref(), |total, node| total + node.data, 0).unwrap();
//! assert_eq!(total, 14);
//! assert_eq!(release(squared).unwrap(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the macros, traits and combinators.
///
/// # Usage
///
/// ```rust
/// use lambdacraft::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::TraversalLimit;
    pub use crate::error::CombinatorError;

    #[cfg(feature = "function")]
    pub use crate::function::*;
    #[cfg(feature = "function")]
    pub use crate::{compose, lambda};

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;
}

pub mod config;
pub mod error;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "combinator")]
pub mod combinator;
