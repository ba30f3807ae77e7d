//! The `compose!` macro for fusing element transforms.

/// Fuses transforms into one function value, applied right to left.
///
/// `compose!(f, g, h)` behaves like `|x| f(g(h(x)))`. The macro nests
/// [`after`](crate::function::after), so the result is an `FnMut` that can be
/// handed straight to a combinator: mapping once with `compose!(g, f)`
/// writes the same buffer as mapping with `f` into a scratch buffer and then
/// with `g`.
///
/// # Examples
///
/// ```
/// use lambdacraft::combinator::map;
/// use lambdacraft::compose;
///
/// let readings = [1.1, 2.1, 3.1];
/// let calibrate = |value: &f64| value + 0.5;
/// let to_tenths = |value: f64| (value * 10.0).round() as i64;
///
/// let mut tenths = [0; 3];
/// map(&readings, compose!(to_tenths, calibrate), &mut tenths).unwrap();
/// assert_eq!(tenths, [16, 26, 36]);
/// ```
///
/// A single function value is returned as is:
///
/// ```
/// use lambdacraft::compose;
///
/// let negate = compose!(|value: i32| -value);
/// assert_eq!(negate(4), -4);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($inner_functions:expr),+ $(,)?) => {
        $crate::function::after($outer_function, $crate::compose!($($inner_functions),+))
    };
}
