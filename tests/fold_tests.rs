//! Scenario tests for `fold`, `try_fold` and `fold_s`.

#![cfg(feature = "combinator")]

use lambdacraft::combinator::{fold, fold_s, fold_s_with_limit, try_fold};
use lambdacraft::config::TraversalLimit;
use lambdacraft::error::CombinatorError;
use lambdacraft::lambda;
use lambdacraft::sequence::{Contiguous, LinkedSequence};
use rstest::rstest;

const SAMPLE_VALUES: [f64; 9] = [1.1, 2.1, 3.1, 4.1, 5.1, 6.1, 7.1, 8.1, 9.1];

// =============================================================================
// Contiguous sequences
// =============================================================================

#[rstest]
fn test_fold_with_captured_offset_matches_expected_total() {
    let nested_value = 0.01;
    let result = fold(
        &SAMPLE_VALUES,
        lambda!(f64, (accumulator: f64, value: &f64), { accumulator + value + nested_value }),
        0.0,
    )
    .unwrap();
    assert!((result - 45.99).abs() < 1e-9, "got {result}");
}

#[rstest]
#[case(vec![], 0)]
#[case(vec![5], 5)]
#[case(vec![1, 2, 3, 4, 5], 15)]
#[case(vec![-4, 4, -4], -4)]
fn test_fold_sums(#[case] values: Vec<i64>, #[case] expected: i64) {
    assert_eq!(fold(&values, |accumulator, value| accumulator + value, 0).unwrap(), expected);
}

#[rstest]
fn test_fold_over_logical_prefix_only() {
    let buffer = [1, 2, 3, 100, 200];
    let prefix = Contiguous::with_length(&buffer, 3).unwrap();
    assert_eq!(fold(prefix, |accumulator, value| accumulator + value, 0).unwrap(), 6);
}

#[rstest]
fn test_fold_builds_a_chain_by_prepending() {
    let arguments = ["lambda", "craft", "demo"];
    let reversed = fold(
        &arguments,
        |mut accumulator: Vec<&str>, argument| {
            accumulator.insert(0, argument);
            accumulator
        },
        Vec::new(),
    )
    .unwrap();
    assert_eq!(reversed, vec!["demo", "craft", "lambda"]);
}

#[rstest]
fn test_fold_does_not_mutate_the_source() {
    let values = vec![3, 1, 2];
    let _ = fold(&values, |accumulator: Vec<i32>, value| [accumulator, vec![*value]].concat(), Vec::new());
    assert_eq!(values, vec![3, 1, 2]);
}

#[derive(Debug, PartialEq)]
enum ParseError {
    NotANumber(String),
    Combinator(CombinatorError),
}

impl From<CombinatorError> for ParseError {
    fn from(error: CombinatorError) -> Self {
        Self::Combinator(error)
    }
}

#[rstest]
fn test_try_fold_passes_body_errors_through_unchanged() {
    let words = ["1", "2", "three", "4"];
    let outcome = try_fold(
        &words,
        |total: u32, word| {
            word.parse::<u32>()
                .map(|number| total + number)
                .map_err(|_| ParseError::NotANumber((*word).to_string()))
        },
        0,
    );
    assert_eq!(outcome, Err(ParseError::NotANumber("three".to_string())));
}

// =============================================================================
// Linked sequences
// =============================================================================

struct Item {
    weight: u32,
    next: Option<Box<Item>>,
}

fn items(weights: &[u32]) -> Option<Box<Item>> {
    weights
        .iter()
        .rev()
        .fold(None, |next, weight| Some(Box::new(Item { weight: *weight, next })))
}

#[rstest]
fn test_fold_s_sums_weights_of_three_items() {
    let head = items(&[3, 5, 7]);
    let total = fold_s(
        head.as_deref(),
        |value| value.next.as_deref(),
        |accumulator, value| accumulator + value.weight,
        0,
    )
    .unwrap();
    assert_eq!(total, 15);
}

#[rstest]
fn test_fold_s_on_empty_chain_returns_initial() {
    let total = fold_s(
        None::<&Item>,
        |value| value.next.as_deref(),
        |accumulator, value| accumulator + value.weight,
        42,
    )
    .unwrap();
    assert_eq!(total, 42);
}

#[rstest]
fn test_fold_s_over_an_index_table() {
    // 0 -> 3 -> 1 -> end
    let successors = [Some(3usize), None, None, Some(1)];
    let order = fold_s(
        Some(0usize),
        |index| successors[*index],
        |mut order: Vec<usize>, index| {
            order.push(*index);
            order
        },
        Vec::new(),
    )
    .unwrap();
    assert_eq!(order, vec![0, 3, 1]);
}

#[rstest]
fn test_fold_s_detects_a_cycle() {
    // 0 -> 1 -> 2 -> 0 -> ...
    let successors = [1usize, 2, 0];
    let outcome = fold_s_with_limit(
        Some(0usize),
        |index| Some(successors[*index]),
        |count: usize, _| count + 1,
        0,
        TraversalLimit::bounded(100).unwrap(),
    );
    assert_eq!(
        outcome,
        Err(CombinatorError::NonTerminatingTraversal {
            operation: "fold_s",
            limit: 100
        })
    );
}

#[rstest]
fn test_fold_accepts_a_prebuilt_linked_sequence() {
    let head = items(&[1, 1, 1, 1]);
    let sequence = LinkedSequence::new(head.as_deref(), |value| value.next.as_deref())
        .with_limit(TraversalLimit::unbounded());
    assert_eq!(fold(sequence, |count: usize, _| count + 1, 0).unwrap(), 4);
}
