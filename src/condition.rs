//! Width comparison clauses
//!
//! A condition is one clause of a media query, e.g. `(min-width: 200px)` or
//! `(200px < width)`. Two surface syntaxes describe the same comparison:
//!
//! - **Regular form**: `min-width: 200px` / `max-width: 400px`. Inclusive by
//!   definition.
//! - **Range form**: `width >= 200px`, `width < 400px`, or with the value on
//!   the left: `200px <= width` (the operator direction flips).
//!
//! Before tokenizing, the regular form is rewritten to the relational form
//! (`min-width:` becomes `width >=`, `max-width:` becomes `width <=`) so both
//! syntaxes funnel through one matcher. A caller cannot distinguish
//! `(min-width: 200px)` from `(width >= 200px)` for matching decisions;
//! rendering always returns the original source text.
//!
//! Anything else — non-pixel units, unrelated features like `orientation`,
//! malformed operators, missing operands — leaves the condition unrecognized.
//! An unrecognized condition always matches and always renders verbatim: the
//! engine only removes or rewrites what it positively understands.

use crate::config::WidthRange;

/// Relational operator in a range-form clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// `<`
    LessThan,
    /// `<=`
    LessThanEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanEqual,
}

impl ComparisonOp {
    /// Parses an operator token.
    ///
    /// A bare `=` carries no direction the engine can bound against, and
    /// malformed runs like `=>` or `=<` are rejected; either way the clause
    /// containing them ends up unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "<" => Some(ComparisonOp::LessThan),
            "<=" => Some(ComparisonOp::LessThanEqual),
            ">" => Some(ComparisonOp::GreaterThan),
            ">=" => Some(ComparisonOp::GreaterThanEqual),
            _ => None,
        }
    }

    /// Mirrors the operator, for clauses with the value on the left.
    ///
    /// `200px <= width` asserts the same bound as `width >= 200px`.
    pub fn flip(self) -> Self {
        match self {
            ComparisonOp::LessThan => ComparisonOp::GreaterThan,
            ComparisonOp::LessThanEqual => ComparisonOp::GreaterThanEqual,
            ComparisonOp::GreaterThan => ComparisonOp::LessThan,
            ComparisonOp::GreaterThanEqual => ComparisonOp::LessThanEqual,
        }
    }

    fn direction(self) -> BoundDirection {
        match self {
            ComparisonOp::GreaterThan | ComparisonOp::GreaterThanEqual => BoundDirection::Lower,
            ComparisonOp::LessThan | ComparisonOp::LessThanEqual => BoundDirection::Upper,
        }
    }

    fn inclusive(self) -> bool {
        matches!(
            self,
            ComparisonOp::LessThanEqual | ComparisonOp::GreaterThanEqual
        )
    }
}

/// Whether a comparison bounds the width from below or above
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundDirection {
    /// `width > N` / `width >= N` / `min-width: N`
    Lower,
    /// `width < N` / `width <= N` / `max-width: N`
    Upper,
}

/// One recognized width bound: direction, endpoint inclusivity, and the
/// pixel threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// Which side of the width this clause bounds
    pub direction: BoundDirection,
    /// Whether the threshold itself satisfies the clause
    pub inclusive: bool,
    /// Threshold in pixels
    pub value: f32,
}

/// A single clause of a query
///
/// The source text is retained verbatim; rendering either returns it
/// unchanged or drops the clause entirely, never rewrites it.
///
/// # Examples
///
/// ```
/// use demq::{BoundDirection, Condition};
///
/// let cond = Condition::parse("(min-width: 200px)");
/// let cmp = cond.comparison.unwrap();
/// assert_eq!(cmp.direction, BoundDirection::Lower);
/// assert!(cmp.inclusive);
/// assert_eq!(cmp.value, 200.0);
///
/// // Unrelated or non-pixel clauses pass through untouched.
/// assert!(Condition::parse("(orientation: portrait)").comparison.is_none());
/// assert!(Condition::parse("(width >= 20em)").comparison.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Original clause text, kept for passthrough rendering
    pub source: String,
    /// Parsed bound, or `None` when the clause is not a recognized
    /// width-pixel comparison
    pub comparison: Option<Comparison>,
}

impl Condition {
    /// Parses one clause. Never fails: input that does not match a supported
    /// width comparison yields an unrecognized condition.
    pub fn parse(source: &str) -> Self {
        Condition {
            source: source.to_string(),
            comparison: parse_comparison(source),
        }
    }

    /// Returns true when the clause was understood as a width-pixel
    /// comparison.
    pub fn is_recognized(&self) -> bool {
        self.comparison.is_some()
    }

    /// Decides whether this clause survives in the rewritten query.
    ///
    /// Precedence: a filter override wins outright, an unrecognized clause is
    /// always kept, a bound shadowed by a tighter clause in the same group
    /// (`effective == false`) is always dropped, and otherwise the bound is
    /// kept only while it still excludes some width in `range`. An exclusive
    /// bound sitting exactly on the matching range endpoint is kept: the
    /// exclusivity is information the range alone does not carry.
    pub(crate) fn render(
        &self,
        override_slot: Option<bool>,
        effective: bool,
        range: WidthRange,
    ) -> Option<&str> {
        if let Some(keep) = override_slot {
            return keep.then_some(self.source.as_str());
        }

        let Some(cmp) = self.comparison else {
            return Some(self.source.as_str());
        };

        if !effective {
            return None;
        }

        // Exact equality is intentional: thresholds and range endpoints are
        // integer pixel counts.
        let informative = match cmp.direction {
            BoundDirection::Lower => {
                cmp.value > range.min || (!cmp.inclusive && cmp.value == range.min)
            }
            BoundDirection::Upper => {
                cmp.value < range.max || (!cmp.inclusive && cmp.value == range.max)
            }
        };

        informative.then_some(self.source.as_str())
    }
}

// ============================================================================
// Clause tokenizer
// ============================================================================

#[derive(Debug, PartialEq)]
enum Token {
    Atom(String),
    Op(String),
}

/// Splits a clause into atoms and operator runs. Whitespace, parentheses and
/// commas delimit atoms; runs of `<`, `>`, `=` form operator tokens.
fn tokenize(input: &str) -> Vec<Token> {
    fn flush_atom(buf: &mut String, tokens: &mut Vec<Token>) {
        if !buf.is_empty() {
            tokens.push(Token::Atom(std::mem::take(buf)));
        }
    }
    fn flush_op(op: &mut String, tokens: &mut Vec<Token>) {
        if !op.is_empty() {
            tokens.push(Token::Op(std::mem::take(op)));
        }
    }

    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut op = String::new();

    for c in input.chars() {
        match c {
            '<' | '>' | '=' => {
                flush_atom(&mut buf, &mut tokens);
                op.push(c);
            }
            c if c.is_whitespace() || c == '(' || c == ')' || c == ',' => {
                flush_atom(&mut buf, &mut tokens);
                flush_op(&mut op, &mut tokens);
            }
            _ => {
                flush_op(&mut op, &mut tokens);
                buf.push(c);
            }
        }
    }
    flush_atom(&mut buf, &mut tokens);
    flush_op(&mut op, &mut tokens);

    tokens
}

/// Parses `Npx` where `N` is an unsigned integer. Any other unit or a
/// decimal value is not understood.
fn parse_px(atom: &str) -> Option<f32> {
    let digits = atom.strip_suffix("px")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn parse_comparison(source: &str) -> Option<Comparison> {
    let normalized = source
        .replacen("min-width:", "width >=", 1)
        .replacen("max-width:", "width <=", 1);
    let tokens = tokenize(&normalized);

    let width_idx = tokens
        .iter()
        .position(|t| matches!(t, Token::Atom(a) if a == "width"))?;

    // Value on the left: `200px <= width`. The left side wins when present.
    if width_idx >= 2 {
        if let (Token::Atom(value), Token::Op(op)) =
            (&tokens[width_idx - 2], &tokens[width_idx - 1])
        {
            let op = ComparisonOp::parse(op)?.flip();
            let value = parse_px(value)?;
            return Some(Comparison {
                direction: op.direction(),
                inclusive: op.inclusive(),
                value,
            });
        }
    }

    // Value on the right: `width <= 400px`.
    if let (Some(Token::Op(op)), Some(Token::Atom(value))) =
        (tokens.get(width_idx + 1), tokens.get(width_idx + 2))
    {
        let op = ComparisonOp::parse(op)?;
        let value = parse_px(value)?;
        return Some(Comparison {
            direction: op.direction(),
            inclusive: op.inclusive(),
            value,
        });
    }

    None
}
