//! Function values.
//!
//! A function value is an ordinary Rust closure. This module adds the small
//! vocabulary the combinators are usually called with:
//!
//! - [`lambda!`]: a closure with an explicit parameter list and return type
//! - [`compose!`]: right-to-left composition of unary function values
//! - [`identity`], [`constant`], [`flip`]: the I, K and C combinators
//!
//! # Capture semantics
//!
//! Every function value built by [`lambda!`] is a `move` closure: free
//! variables of the body are captured once, when the closure is created, and
//! the same captured environment is reused for every element a combinator
//! feeds it. Capture by reference is expressed by capturing a reference.
//!
//! ```
//! use lambdacraft::lambda;
//! use lambdacraft::combinator::fold;
//!
//! let nested_value = 0.01;
//! let numbers = [1.1, 2.1, 3.1];
//!
//! let total = fold(
//!     &numbers,
//!     lambda!(f64, (accumulator: f64, value: &f64), { accumulator + value + nested_value }),
//!     0.0,
//! )
//! .unwrap();
//! assert!((total - 6.33).abs() < 1e-9);
//! ```

mod compose_macro;
mod lambda_macro;
mod utils;

pub use utils::{after, constant, flip, identity};
