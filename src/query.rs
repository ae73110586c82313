//! Queries and query lists
//!
//! A query is an AND-combined group of conditions (`(width >= 200px) and
//! (width < 400px)`); a query list is an OR-combined, comma-separated
//! sequence of queries. The query derives an effective lower bound (the
//! greatest lower threshold in the group) and an effective upper bound (the
//! least upper threshold); only those two gate matching. Other same-direction
//! bounds are implied by the tighter clause and drop from rendered output.
//!
//! The double-bound shorthand `200px <= width <= 400px` is expanded into two
//! single-sided clauses joined by `and` before the group is split, so each
//! half parses and renders independently.

use crate::condition::{BoundDirection, Comparison, Condition};
use crate::config::{Options, WidthRange};
use crate::filter::{FilterOverride, QueryDescriptor};

/// The clause that actually constrains a query on one side
#[derive(Debug, Clone, Copy, PartialEq)]
struct EffectiveBound {
    /// Index into the query's condition list
    index: usize,
    comparison: Comparison,
}

/// An AND-combined group of conditions
///
/// Constructed by [`QueryList::parse`]; evaluated against the configured
/// range via [`Query::matches`] and [`Query::render`].
///
/// [`QueryList::parse`]: crate::MqParser::parse
#[derive(Debug)]
pub struct Query {
    source: String,
    conditions: Vec<Condition>,
    lower: Option<EffectiveBound>,
    upper: Option<EffectiveBound>,
    overridden: Option<FilterOverride>,
}

impl Query {
    pub(crate) fn parse(source: &str, opts: &Options) -> Self {
        let expanded = expand_double_bounds(source);
        let conditions: Vec<Condition> = split_conjunction(&expanded)
            .into_iter()
            .map(Condition::parse)
            .collect();

        let lower = effective_bound(&conditions, BoundDirection::Lower);
        let upper = effective_bound(&conditions, BoundDirection::Upper);

        let overridden = opts.filter.as_ref().and_then(|hook| {
            let descriptor = QueryDescriptor {
                source: source.to_string(),
                conditions: conditions.clone(),
            };
            hook(&descriptor).normalize(conditions.len())
        });

        Query {
            source: source.to_string(),
            conditions,
            lower,
            upper,
            overridden,
        }
    }

    /// The query's original text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parsed conditions in source order
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Whether any width in `range` can satisfy every condition in the group.
    ///
    /// A filter override replaces the verdict outright. A query with no
    /// recognized bounds always matches. A degenerate group (lower bound not
    /// strictly below the upper bound) never matches, independent of the
    /// range. Otherwise the query's interval must intersect `range`, where a
    /// shared endpoint only counts when the touching bound is inclusive.
    pub fn matches(&self, range: WidthRange) -> bool {
        if let Some(overridden) = &self.overridden {
            return overridden.matches;
        }

        if self.lower.is_none() && self.upper.is_none() {
            return true;
        }

        if let (Some(lower), Some(upper)) = (&self.lower, &self.upper) {
            if lower.comparison.value >= upper.comparison.value {
                return false;
            }
        }

        let start_ok = match &self.lower {
            None => true,
            Some(lower) => {
                range.max > lower.comparison.value
                    || (lower.comparison.inclusive && range.max == lower.comparison.value)
            }
        };
        let end_ok = match &self.upper {
            None => true,
            Some(upper) => {
                range.min < upper.comparison.value
                    || (upper.comparison.inclusive && range.min == upper.comparison.value)
            }
        };

        start_ok && end_ok
    }

    /// Re-renders the group with clauses implied by `range` removed.
    ///
    /// Surviving clauses keep their source order and are joined with
    /// `" and "`. Returns `None` when nothing survives; if the query itself
    /// matched, the caller should then unwrap the block rather than delete
    /// it.
    pub fn render(&self, range: WidthRange) -> Option<String> {
        let mut parts: Vec<&str> = Vec::new();
        for (index, condition) in self.conditions.iter().enumerate() {
            let slot = self
                .overridden
                .as_ref()
                .and_then(|ov| ov.conditions.get(index).copied().flatten());
            let effective = self.is_effective(index);
            if let Some(text) = condition.render(slot, effective, range) {
                if !text.is_empty() {
                    parts.push(text);
                }
            }
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" and "))
        }
    }

    fn is_effective(&self, index: usize) -> bool {
        self.lower.as_ref().is_some_and(|b| b.index == index)
            || self.upper.as_ref().is_some_and(|b| b.index == index)
    }
}

/// An OR-combined, comma-separated sequence of queries, evaluated against
/// the range it was parsed with
///
/// # Examples
///
/// ```
/// use demq::{MqParser, Options};
///
/// let parser = MqParser::new(Options {
///     min_value: 200.0,
///     max_value: 500.0,
///     ..Options::default()
/// })
/// .unwrap();
///
/// let list = parser.parse("(max-width: 100px), (min-width: 300px)");
/// assert!(list.matches());
/// assert_eq!(list.render().as_deref(), Some("(min-width: 300px)"));
/// ```
#[derive(Debug)]
pub struct QueryList {
    range: WidthRange,
    queries: Vec<Query>,
}

impl QueryList {
    pub(crate) fn parse(input: &str, opts: &Options) -> Self {
        let queries = input
            .split(',')
            .map(|query| Query::parse(query.trim(), opts))
            .collect();
        QueryList {
            range: opts.range(),
            queries,
        }
    }

    /// The parsed queries in source order
    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    /// True iff at least one query matches. When false the caller removes
    /// the whole block.
    pub fn matches(&self) -> bool {
        self.queries.iter().any(|query| query.matches(self.range))
    }

    /// Joins the renderings of matching queries with `", "`. Queries that
    /// cannot match within the range are left out. Returns `None` when no
    /// condition text survives at all; a matching list that renders `None`
    /// means every query is implied by the range and the caller should
    /// unwrap the block.
    pub fn render(&self) -> Option<String> {
        let parts: Vec<String> = self
            .queries
            .iter()
            .filter(|query| query.matches(self.range))
            .filter_map(|query| query.render(self.range))
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

fn effective_bound(conditions: &[Condition], direction: BoundDirection) -> Option<EffectiveBound> {
    let mut best: Option<EffectiveBound> = None;
    for (index, condition) in conditions.iter().enumerate() {
        let Some(comparison) = condition.comparison else {
            continue;
        };
        if comparison.direction != direction {
            continue;
        }
        let tighter = match (&best, direction) {
            (None, _) => true,
            // Strict comparison: the first of equal thresholds stays
            // effective, later duplicates drop as implied.
            (Some(b), BoundDirection::Lower) => comparison.value > b.comparison.value,
            (Some(b), BoundDirection::Upper) => comparison.value < b.comparison.value,
        };
        if tighter {
            best = Some(EffectiveBound { index, comparison });
        }
    }
    best
}

/// Splits a query on the standalone conjunction keyword. `and` inside a
/// longer word (`landscape`) does not split.
fn split_conjunction(query: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let bytes = query.as_bytes();

    for (idx, _) in query.match_indices("and") {
        if idx < start {
            continue;
        }
        let before_ws = idx > 0 && bytes[idx - 1].is_ascii_whitespace();
        let after_ws = idx + 3 < bytes.len() && bytes[idx + 3].is_ascii_whitespace();
        if before_ws && after_ws {
            parts.push(query[start..idx].trim());
            start = idx + 3;
        }
    }
    parts.push(query[start..].trim());

    parts
}

/// Rewrites every double-bound shorthand `A <op1> width <op2> B` into
/// `A <op1> width) and (width <op2> B`, so each side parses as an ordinary
/// single-sided clause.
fn expand_double_bounds(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut rest = source;

    while let Some((prefix, op1, op2, tail)) = match_double_bound(rest) {
        result.push_str(prefix);
        result.push_str(op1);
        result.push_str(" width) and (width ");
        result.push_str(op2);
        rest = tail;
    }
    result.push_str(rest);

    result
}

/// Finds the first `<op> width <op>` occurrence. Returns the text before the
/// first operator, both operator runs, and the remaining text after the
/// second operator.
fn match_double_bound(source: &str) -> Option<(&str, &str, &str, &str)> {
    fn op_run(s: &str) -> usize {
        s.find(|c| !matches!(c, '<' | '>' | '=')).unwrap_or(s.len())
    }
    fn skip_ws(s: &str) -> usize {
        s.find(|c: char| !c.is_whitespace()).unwrap_or(s.len())
    }

    let mut search = 0;
    while let Some(offset) = source[search..].find(['<', '>', '=']) {
        let op1_start = search + offset;
        let op1_len = op_run(&source[op1_start..]);
        let op1_end = op1_start + op1_len;

        // Candidate pattern: op run, optional whitespace, the word `width`,
        // optional whitespace, second op run.
        let after_op1 = op1_end + skip_ws(&source[op1_end..]);
        if source[after_op1..].starts_with("width") {
            let after_width = after_op1 + "width".len();
            let op2_start = after_width + skip_ws(&source[after_width..]);
            let op2_len = op_run(&source[op2_start..]);
            if op2_len > 0 {
                return Some((
                    &source[..op1_start],
                    &source[op1_start..op1_end],
                    &source[op2_start..op2_start + op2_len],
                    &source[op2_start + op2_len..],
                ));
            }
        }

        search = op1_end;
    }

    None
}
