//! The demonstration programs, as plain functions.
//!
//! Each function performs one demo and returns what the binary prints, so the
//! scenarios can be checked without capturing stdout.

use lambdacraft::combinator::{fold, fold_s, foreach_s, map, map_linked, release};
use lambdacraft::lambda;
use lambdacraft::sequence::Linked;

/// The nine sample values shared by the array demos.
pub const SAMPLE_VALUES: [f64; 9] = [1.1, 2.1, 3.1, 4.1, 5.1, 6.1, 7.1, 8.1, 9.1];

/// Folds [`SAMPLE_VALUES`], adding a captured offset at every step.
///
/// # Errors
///
/// Propagates combinator errors (none occur for a contiguous source).
pub fn fold_array() -> lambdacraft::error::Result<f64> {
    let nested_value = 0.01;
    fold(
        &SAMPLE_VALUES,
        lambda!(f64, (accumulator: f64, value: &f64), { accumulator + value + nested_value }),
        0.0,
    )
}

/// Maps [`SAMPLE_VALUES`] through a captured offset into a separate buffer.
///
/// Returns `(source, mapped)` pairs.
///
/// # Errors
///
/// Propagates combinator errors (none occur: the buffer is sized to match).
pub fn map_array() -> lambdacraft::error::Result<Vec<(f64, f64)>> {
    let nested_value = 0.5;
    let mut mapped_numbers = [0.0; SAMPLE_VALUES.len()];
    map(
        &SAMPLE_VALUES,
        lambda!(f64, (value: &f64), { value + nested_value }),
        &mut mapped_numbers,
    )?;
    Ok(SAMPLE_VALUES.into_iter().zip(mapped_numbers).collect())
}

/// A list cell holding one command-line argument.
#[derive(Debug)]
pub struct ArgumentCell {
    /// The argument text.
    pub item: String,
    /// The following cell.
    pub next: Option<Box<ArgumentCell>>,
}

/// What the linked-list fold demo reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSummary {
    /// Arguments in list order (the reverse of the input, since cells are prepended).
    pub items: Vec<String>,
    /// Sum of the argument lengths in bytes.
    pub total_length: usize,
    /// Number of cells released by the final traversal.
    pub released: usize,
}

/// Builds a list from `arguments`, measures it, and releases it.
///
/// The list is built with [`fold`] (each argument is prepended), measured
/// with [`fold_s`], and released cell by cell with [`foreach_s`].
///
/// # Errors
///
/// Propagates combinator errors.
pub fn fold_struct(arguments: &[String]) -> lambdacraft::error::Result<ArgumentSummary> {
    let list = fold(
        arguments,
        |accumulator: Option<Box<ArgumentCell>>, value| {
            Some(Box::new(ArgumentCell {
                item: value.clone(),
                next: accumulator,
            }))
        },
        None,
    )?;

    let items = fold_s(
        list.as_deref(),
        |value| value.next.as_deref(),
        |mut items: Vec<String>, value| {
            items.push(value.item.clone());
            items
        },
        Vec::new(),
    )?;

    let total_length = fold_s(
        list.as_deref(),
        |value| value.next.as_deref(),
        |accumulator, value| accumulator + value.item.len(),
        0,
    )?;

    let mut released = 0;
    foreach_s(list, |mut value| {
        let forward = value.next.take();
        tracing::debug!(item = %value.item, "releasing cell");
        drop(value);
        released += 1;
        forward
    })?;

    Ok(ArgumentSummary {
        items,
        total_length,
        released,
    })
}

/// A node of the integer list used by the linked-list map demo.
#[derive(Debug, Linked)]
pub struct Node {
    /// Payload.
    pub data: i32,
    /// Successor.
    #[link]
    pub next: Option<Box<Node>>,
}

fn collect_data(head: Option<&Node>) -> lambdacraft::error::Result<Vec<i32>> {
    lambdacraft::combinator::fold_linked(
        head,
        |mut data: Vec<i32>, node| {
            data.push(node.data);
            data
        },
        Vec::new(),
    )
}

/// Squares the list `1 -> 2 -> 3` into a new list.
///
/// Returns the data of the original list (read after the map, to show it
/// is untouched) and of the mapped list.
///
/// # Errors
///
/// Propagates combinator errors.
pub fn map_struct() -> lambdacraft::error::Result<(Vec<i32>, Vec<i32>)> {
    let head = Some(Box::new(Node {
        data: 1,
        next: Some(Box::new(Node {
            data: 2,
            next: Some(Box::new(Node {
                data: 3,
                next: None,
            })),
        })),
    }));

    let new_head = map_linked(
        head.as_deref(),
        lambda!(Box<Node>, (value: &Node, next: Option<Box<Node>>), {
            Box::new(Node {
                data: value.data * value.data,
                next,
            })
        }),
    )?;

    let original = collect_data(head.as_deref())?;
    let mapped = collect_data(new_head.as_deref())?;

    release(head)?;
    release(new_head)?;
    Ok((original, mapped))
}
