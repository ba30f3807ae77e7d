//! Traversal configuration.
//!
//! Linked traversals rely on the caller's promise that following `next`
//! eventually reaches the empty marker. [`TraversalLimit`] turns a broken
//! promise (a cyclic or runaway chain) into a
//! [`CombinatorError::NonTerminatingTraversal`] instead of an endless loop.
//!
//! The process-wide default can be overridden with the
//! `LAMBDACRAFT_MAX_TRAVERSAL_STEPS` environment variable, which accepts a
//! positive integer or the word `unbounded`.
//!
//! # Examples
//!
//! ```rust
//! use lambdacraft::config::TraversalLimit;
//!
//! let limit: TraversalLimit = "128".parse().unwrap();
//! assert_eq!(limit.max_steps(), Some(128));
//!
//! let limit: TraversalLimit = "unbounded".parse().unwrap();
//! assert_eq!(limit.max_steps(), None);
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::{CombinatorError, Result};

/// Default maximum number of elements a linked traversal may visit.
pub const DEFAULT_MAX_STEPS: usize = 1 << 24;

/// Environment variable consulted by [`TraversalLimit::from_env`].
pub const MAX_STEPS_ENV: &str = "LAMBDACRAFT_MAX_TRAVERSAL_STEPS";

const UNBOUNDED_KEYWORD: &str = "unbounded";

const DEFAULT_BOUND: NonZeroUsize = match NonZeroUsize::new(DEFAULT_MAX_STEPS) {
    Some(bound) => bound,
    None => panic!("DEFAULT_MAX_STEPS must be non-zero"),
};

/// Safety bound on the number of elements a linked traversal may visit.
///
/// A chain with exactly `max_steps` elements is accepted; the element after
/// that trips the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LimitRepr", into = "LimitRepr")
)]
pub enum TraversalLimit {
    /// Fail after visiting this many elements.
    Bounded(NonZeroUsize),
    /// Trust the caller completely; a cyclic chain never terminates.
    Unbounded,
}

impl TraversalLimit {
    /// Creates a bounded limit.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatorError::InvalidArgument`] when `max_steps` is zero.
    pub fn bounded(max_steps: usize) -> Result<Self> {
        NonZeroUsize::new(max_steps).map(Self::Bounded).ok_or_else(|| {
            CombinatorError::invalid_argument("TraversalLimit::bounded", "limit must be positive")
        })
    }

    /// Creates a limit that never trips.
    #[inline]
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::Unbounded
    }

    /// Returns the maximum number of visited elements, if bounded.
    #[inline]
    #[must_use]
    pub const fn max_steps(&self) -> Option<usize> {
        match self {
            Self::Bounded(bound) => Some(bound.get()),
            Self::Unbounded => None,
        }
    }

    /// Reads the limit from `LAMBDACRAFT_MAX_TRAVERSAL_STEPS`.
    ///
    /// Falls back to the default when the variable is unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_setting(std::env::var(MAX_STEPS_ENV).ok().as_deref())
    }

    /// Resolves an optional textual setting the same way [`from_env`](Self::from_env) does.
    #[must_use]
    pub fn from_setting(setting: Option<&str>) -> Self {
        match setting.map(str::parse::<Self>) {
            None => Self::default(),
            Some(Ok(limit)) => limit,
            Some(Err(error)) => {
                tracing::warn!(%error, variable = MAX_STEPS_ENV, "ignoring traversal limit setting");
                Self::default()
            }
        }
    }

    /// Fails when `visited` elements already exhaust the limit.
    pub(crate) fn check(self, visited: usize, operation: &'static str) -> Result<()> {
        match self {
            Self::Bounded(bound) if visited >= bound.get() => {
                tracing::warn!(operation, limit = bound.get(), "linked traversal exceeded its limit");
                Err(CombinatorError::NonTerminatingTraversal {
                    operation,
                    limit: bound.get(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for TraversalLimit {
    fn default() -> Self {
        Self::Bounded(DEFAULT_BOUND)
    }
}

impl fmt::Display for TraversalLimit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(bound) => write!(formatter, "{bound}"),
            Self::Unbounded => formatter.write_str(UNBOUNDED_KEYWORD),
        }
    }
}

impl FromStr for TraversalLimit {
    type Err = CombinatorError;

    fn from_str(setting: &str) -> Result<Self> {
        let setting = setting.trim();
        if setting.eq_ignore_ascii_case(UNBOUNDED_KEYWORD) {
            return Ok(Self::Unbounded);
        }
        let max_steps = setting.parse::<usize>().map_err(|error| {
            CombinatorError::invalid_argument(
                "TraversalLimit::from_str",
                format!("`{setting}` is neither a step count nor `{UNBOUNDED_KEYWORD}`: {error}"),
            )
        })?;
        Self::bounded(max_steps)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum LimitRepr {
    Steps(usize),
    Keyword(String),
}

#[cfg(feature = "serde")]
impl TryFrom<LimitRepr> for TraversalLimit {
    type Error = CombinatorError;

    fn try_from(repr: LimitRepr) -> Result<Self> {
        match repr {
            LimitRepr::Steps(max_steps) => Self::bounded(max_steps),
            LimitRepr::Keyword(keyword) => keyword.parse(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<TraversalLimit> for LimitRepr {
    fn from(limit: TraversalLimit) -> Self {
        match limit {
            TraversalLimit::Bounded(bound) => Self::Steps(bound.get()),
            TraversalLimit::Unbounded => Self::Keyword(UNBOUNDED_KEYWORD.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_is_bounded() {
        assert_eq!(TraversalLimit::default().max_steps(), Some(DEFAULT_MAX_STEPS));
    }

    #[rstest]
    fn test_bounded_rejects_zero() {
        assert!(matches!(
            TraversalLimit::bounded(0),
            Err(CombinatorError::InvalidArgument { .. })
        ));
    }

    #[rstest]
    #[case("42", Some(42))]
    #[case(" 7 ", Some(7))]
    #[case("unbounded", None)]
    #[case("UNBOUNDED", None)]
    fn test_parse(#[case] setting: &str, #[case] expected: Option<usize>) {
        let limit: TraversalLimit = setting.parse().unwrap();
        assert_eq!(limit.max_steps(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("lots")]
    fn test_parse_rejects(#[case] setting: &str) {
        assert!(setting.parse::<TraversalLimit>().is_err());
    }

    #[rstest]
    fn test_from_setting_falls_back_to_default() {
        assert_eq!(TraversalLimit::from_setting(None), TraversalLimit::default());
        assert_eq!(
            TraversalLimit::from_setting(Some("garbage")),
            TraversalLimit::default()
        );
        assert_eq!(
            TraversalLimit::from_setting(Some("unbounded")),
            TraversalLimit::Unbounded
        );
    }

    #[rstest]
    fn test_check_accepts_exactly_the_bound() {
        let limit = TraversalLimit::bounded(3).unwrap();
        assert!(limit.check(2, "fold_s").is_ok());
        assert_eq!(
            limit.check(3, "fold_s"),
            Err(CombinatorError::NonTerminatingTraversal {
                operation: "fold_s",
                limit: 3
            })
        );
        assert!(TraversalLimit::Unbounded.check(usize::MAX, "fold_s").is_ok());
    }

    #[rstest]
    fn test_display_round_trips_through_parse() {
        for limit in [TraversalLimit::bounded(9).unwrap(), TraversalLimit::Unbounded] {
            assert_eq!(limit.to_string().parse::<TraversalLimit>().unwrap(), limit);
        }
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_serde_accepts_number_or_keyword() {
        let bounded: TraversalLimit = serde_json::from_str("64").unwrap();
        assert_eq!(bounded.max_steps(), Some(64));
        let unbounded: TraversalLimit = serde_json::from_str("\"unbounded\"").unwrap();
        assert_eq!(unbounded, TraversalLimit::Unbounded);
        assert!(serde_json::from_str::<TraversalLimit>("0").is_err());
        assert_eq!(serde_json::to_string(&bounded).unwrap(), "64");
    }
}
