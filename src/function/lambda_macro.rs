//! The `lambda!` macro for inline function values.

/// Builds a function value from a return type, a parameter list and a body.
///
/// Two spellings are accepted:
///
/// - `lambda!(ReturnType, (name: Type, ...), { body })`
/// - `lambda!((name: Type, ...) -> ReturnType { body })`
///
/// Both expand to a `move` closure with exactly the given parameters, so the
/// result can be stored, passed to a combinator, or called immediately.
/// Parameters are plain identifiers; there are no implicit names such as
/// `value` or `acc` bound behind the caller's back.
///
/// # Examples
///
/// ## Immediate invocation
///
/// ```
/// use lambdacraft::lambda;
///
/// let greater = lambda!(bool, (left: i32, right: i32), { left > right })(3, 2);
/// assert!(greater);
/// ```
///
/// ## Arrow spelling
///
/// ```
/// use lambdacraft::lambda;
///
/// let square = lambda!((value: i64) -> i64 { value * value });
/// assert_eq!(square(12), 144);
/// ```
///
/// ## Captured environment
///
/// ```
/// use lambdacraft::lambda;
///
/// let offset = 0.5;
/// let shift = lambda!(f64, (value: &f64), { value + offset });
/// assert_eq!(shift(&1.0), 1.5);
/// assert_eq!(shift(&2.0), 2.5);
/// ```
///
/// ## Passing to a sort comparator
///
/// ```
/// use lambdacraft::lambda;
///
/// let mut values = vec![3, 1, 2];
/// values.sort_by(lambda!(std::cmp::Ordering, (left: &i32, right: &i32), { right.cmp(left) }));
/// assert_eq!(values, vec![3, 2, 1]);
/// ```
#[macro_export]
macro_rules! lambda {
    (($($parameter:ident : $parameter_type:ty),* $(,)?) -> $return_type:ty $body:block) => {
        move |$($parameter: $parameter_type),*| -> $return_type { $body }
    };

    ($return_type:ty, ($($parameter:ident : $parameter_type:ty),* $(,)?), $body:block $(,)?) => {
        move |$($parameter: $parameter_type),*| -> $return_type { $body }
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn test_lambda_without_parameters() {
        let answer = lambda!(i32, (), { 42 });
        assert_eq!(answer(), 42);
    }

    #[rstest]
    fn test_lambda_captures_once() {
        let mut factor = 2;
        let scale = lambda!(i32, (value: i32), { value * factor });
        factor = 10;
        assert_eq!(scale(3), 6);
        assert_eq!(factor, 10);
    }

    #[rstest]
    fn test_lambda_arrow_spelling_with_trailing_comma() {
        let join = lambda!((left: &str, right: &str,) -> String { format!("{left}{right}") });
        assert_eq!(join("ab", "cd"), "abcd");
    }

    #[rstest]
    fn test_lambda_capturing_a_reference() {
        let labels = vec!["zero", "one", "two"];
        let labels_ref = &labels;
        let label = lambda!(String, (index: usize), { labels_ref[index].to_string() });
        assert_eq!(label(2), "two");
        assert_eq!(labels.len(), 3);
    }
}
