//! Per-query filter hook
//!
//! A caller can attach a hook to [`Options::filter`] to encode cross-cutting
//! policy ("only touch queries whose source matches X") without modifying the
//! evaluation logic. The hook runs once per query, receives the query's
//! original text and parsed conditions, and answers with a
//! [`FilterDirective`]. Queries the hook abstains on fall through to the
//! default range logic untouched.
//!
//! [`Options::filter`]: crate::Options

use crate::condition::Condition;

/// Snapshot of one query handed to the filter hook
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescriptor {
    /// The query's original text, as split from the query list
    pub source: String,
    /// Parsed conditions in source order, including unrecognized ones
    pub conditions: Vec<Condition>,
}

/// Decision returned by the filter hook for one query
///
/// # Examples
///
/// ```
/// use demq::{FilterDirective, MqParser, Options};
///
/// // Strip print-targeted queries, leave everything else to range logic.
/// let parser = MqParser::new(Options {
///     filter: Some(Box::new(|query| {
///         if query.source.contains("print") {
///             FilterDirective::Uniform(false)
///         } else {
///             FilterDirective::Auto
///         }
///     })),
///     ..Options::default()
/// })
/// .unwrap();
///
/// let list = parser.parse("print and (width >= 100px), (width >= 200px)");
/// assert_eq!(list.render().as_deref(), Some("(width >= 200px)"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FilterDirective {
    /// No opinion; default match and render logic governs the query.
    Auto,
    /// The boolean decides the query's match verdict and, uniformly, whether
    /// every condition is kept (`true`) or dropped (`false`) in rendering.
    Uniform(bool),
    /// Per-condition render overrides, one slot per condition in source
    /// order. `None` slots defer to default render logic; missing slots are
    /// treated as `None`, surplus slots are ignored.
    ///
    /// A `PerCondition` directive never makes the query non-matching: it is a
    /// render-level override only, and the query's match verdict is `true`
    /// even when every slot is `Some(false)` (the query then renders empty
    /// and the caller unwraps the block). A hook that wants the block removed
    /// must return `Uniform(false)`. An all-`None` directive is equivalent to
    /// [`FilterDirective::Auto`].
    PerCondition(Vec<Option<bool>>),
}

impl From<bool> for FilterDirective {
    fn from(keep: bool) -> Self {
        FilterDirective::Uniform(keep)
    }
}

impl From<Vec<Option<bool>>> for FilterDirective {
    fn from(slots: Vec<Option<bool>>) -> Self {
        FilterDirective::PerCondition(slots)
    }
}

/// A directive normalized against a concrete query: a match verdict plus one
/// render slot per condition.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FilterOverride {
    pub matches: bool,
    pub conditions: Vec<Option<bool>>,
}

impl FilterDirective {
    /// Normalizes the directive for a query with `condition_count`
    /// conditions. Returns `None` when the hook effectively abstained.
    pub(crate) fn normalize(self, condition_count: usize) -> Option<FilterOverride> {
        match self {
            FilterDirective::Auto => None,
            FilterDirective::Uniform(keep) => Some(FilterOverride {
                matches: keep,
                conditions: vec![Some(keep); condition_count],
            }),
            FilterDirective::PerCondition(mut slots) => {
                slots.resize(condition_count, None);
                if slots.iter().all(Option::is_none) {
                    return None;
                }
                Some(FilterOverride {
                    matches: true,
                    conditions: slots,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_abstains() {
        assert_eq!(FilterDirective::Auto.normalize(2), None);
    }

    #[test]
    fn test_uniform_fills_every_slot() {
        let ov = FilterDirective::Uniform(true).normalize(2).unwrap();
        assert!(ov.matches);
        assert_eq!(ov.conditions, vec![Some(true), Some(true)]);

        let ov = FilterDirective::Uniform(false).normalize(1).unwrap();
        assert!(!ov.matches);
        assert_eq!(ov.conditions, vec![Some(false)]);
    }

    #[test]
    fn test_per_condition_always_matches() {
        let ov = FilterDirective::PerCondition(vec![Some(false), Some(false)])
            .normalize(2)
            .unwrap();
        assert!(ov.matches);
    }

    #[test]
    fn test_per_condition_pads_and_truncates() {
        let ov = FilterDirective::PerCondition(vec![Some(true)])
            .normalize(3)
            .unwrap();
        assert_eq!(ov.conditions, vec![Some(true), None, None]);

        let ov = FilterDirective::PerCondition(vec![Some(true), Some(false), Some(true)])
            .normalize(1)
            .unwrap();
        assert_eq!(ov.conditions, vec![Some(true)]);
    }

    #[test]
    fn test_all_none_slots_abstain() {
        assert_eq!(FilterDirective::PerCondition(vec![None, None]).normalize(2), None);
        assert_eq!(FilterDirective::PerCondition(vec![None]).normalize(3), None);
    }
}
