//! Elementary function values.

/// Returns its argument unchanged.
///
/// Mapping a sequence with `identity` copies it element for element.
///
/// ```
/// use lambdacraft::function::identity;
///
/// assert_eq!(identity(7), 7);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function value that ignores its input and returns `value`.
///
/// ```
/// use lambdacraft::function::constant;
///
/// let zeros: Vec<i32> = ["a", "b"].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of a binary function value.
///
/// Handy for turning an `(element, accumulator)` step into the
/// `(accumulator, element)` shape that `fold` expects.
///
/// ```
/// use lambdacraft::function::flip;
///
/// let prepend = |element: char, accumulator: String| format!("{element}{accumulator}");
/// let step = flip(prepend);
/// assert_eq!(step("bc".to_string(), 'a'), "abc");
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Runs `inner`, then feeds its result to `outer`.
///
/// This is the two-function case of [`compose!`](crate::compose). Both
/// function values may carry mutable state, so the result is `FnMut`.
///
/// ```
/// use lambdacraft::function::after;
///
/// let mut describe = after(|length: usize| format!("{length} bytes"), str::len);
/// assert_eq!(describe("lambda"), "6 bytes");
/// ```
#[inline]
pub fn after<A, B, C, F, G>(mut outer: F, mut inner: G) -> impl FnMut(A) -> C
where
    F: FnMut(B) -> C,
    G: FnMut(A) -> B,
{
    move |input| outer(inner(input))
}
