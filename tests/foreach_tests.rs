//! Scenario tests for `foreach_s`, `for_each` and `release`.

#![cfg(feature = "combinator")]

use std::cell::RefCell;
use std::rc::Rc;

use lambdacraft::combinator::{for_each, foreach_s, foreach_s_with_limit, release};
use lambdacraft::config::TraversalLimit;
use lambdacraft::error::CombinatorError;
use lambdacraft::sequence::{Contiguous, Linked};
use rstest::rstest;

/// Node that records its own release in a shared log.
struct Node {
    id: u32,
    log: Rc<RefCell<Vec<u32>>>,
    next: Option<Box<Node>>,
}

impl Drop for Node {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.id);
    }
}

impl Linked for Node {
    fn link(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    fn take_link(&mut self) -> Option<Box<Self>> {
        self.next.take()
    }
}

fn chain(length: u32, log: &Rc<RefCell<Vec<u32>>>) -> Option<Box<Node>> {
    (1..=length).rev().fold(None, |next, id| {
        Some(Box::new(Node {
            id,
            log: Rc::clone(log),
            next,
        }))
    })
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(64)]
fn test_foreach_s_releasing_visits_every_node_once_in_order(#[case] length: u32) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let head = chain(length, &log);
    let mut visited = Vec::new();

    foreach_s(head, |mut value| {
        let forward = value.next.take();
        visited.push(value.id);
        drop(value);
        forward
    })
    .unwrap();

    let expected: Vec<u32> = (1..=length).collect();
    assert_eq!(visited, expected);
    assert_eq!(*log.borrow(), expected);
}

#[rstest]
fn test_foreach_s_step_may_redirect_traversal() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let head = chain(6, &log);
    let mut visited = Vec::new();

    // Visit every other node; the skipped ones are released by the step.
    foreach_s(head, |mut value| {
        visited.push(value.id);
        let skipped = value.next.take();
        skipped.and_then(|mut skipped| skipped.next.take())
    })
    .unwrap();

    assert_eq!(visited, vec![1, 3, 5]);
    let mut released = log.borrow().clone();
    released.sort_unstable();
    assert_eq!(released, vec![1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn test_foreach_s_limit_releases_the_remainder() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let head = chain(5, &log);

    let outcome = foreach_s_with_limit(
        head,
        |mut value| value.next.take(),
        TraversalLimit::bounded(2).unwrap(),
    );

    assert_eq!(
        outcome,
        Err(CombinatorError::NonTerminatingTraversal {
            operation: "foreach_s",
            limit: 2
        })
    );
    assert_eq!(log.borrow().len(), 5);
}

#[rstest]
fn test_release_long_chain_without_recursion() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let head = chain(250_000, &log);
    assert_eq!(release(head).unwrap(), 250_000);
    assert_eq!(log.borrow().len(), 250_000);
    assert_eq!(log.borrow().first(), Some(&1));
    assert_eq!(log.borrow().last(), Some(&250_000));
}

#[rstest]
fn test_for_each_over_contiguous_prefix() {
    let buffer = ["a", "b", "c", "d"];
    let mut joined = String::new();
    for_each(Contiguous::with_length(&buffer, 3).unwrap(), |letter| joined.push_str(letter)).unwrap();
    assert_eq!(joined, "abc");
}
