//! Higher-order combinators over sequences.
//!
//! | Combinator          | Sequence   | Function value                     | Result                  |
//! |---------------------|------------|------------------------------------|-------------------------|
//! | [`fold`]            | any        | `(accumulator, element) -> accumulator` | final accumulator  |
//! | [`fold_s`]          | linked     | `next` + `(accumulator, &element) -> accumulator` | final accumulator |
//! | [`map`]             | contiguous | `element -> element'`              | fills a caller buffer   |
//! | [`map_s`]           | linked     | `next` + `(element, mapped_tail) -> element'` | new chain head |
//! | [`foreach_s`]       | linked     | `element -> next element`          | nothing                 |
//! | [`for_each`]        | any        | `element -> ()`                    | nothing                 |
//!
//! Every combinator is synchronous and single pass, calls its function
//! values exactly once per element in traversal order, and never mutates its
//! source. Precondition violations are reported as
//! [`CombinatorError`](crate::error::CombinatorError); errors raised by the
//! function values themselves go through the `try_` variants untouched.
//!
//! # Examples
//!
//! ```rust
//! use lambdacraft::combinator::{fold, map};
//!
//! let nested_value = 0.01;
//! let numbers = [1.1, 2.1, 3.1, 4.1, 5.1, 6.1, 7.1, 8.1, 9.1];
//!
//! let total = fold(&numbers, |accumulator, value| accumulator + value + nested_value, 0.0_f64).unwrap();
//! assert!((total - 45.99).abs() < 1e-9);
//!
//! let mut shifted = [0.0; 9];
//! map(&numbers, |value| value + 0.5, &mut shifted).unwrap();
//! assert!((shifted[0] - 1.6).abs() < 1e-9);
//! assert!((shifted[8] - 9.6).abs() < 1e-9);
//! ```

mod fold;
mod for_each;
mod map;
mod nodes;

pub use fold::{fold, fold_s, fold_s_with_limit, try_fold};
pub use for_each::{for_each, foreach_s, foreach_s_with_limit};
pub use map::{map, map_in_place, map_s, map_s_with_limit, try_map, try_map_s, try_map_s_with_limit};
pub use nodes::{fold_linked, map_linked, release};
