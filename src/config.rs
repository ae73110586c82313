//! Evaluator configuration
//!
//! [`Options`] is built once, validated at [`MqParser::new`], and immutable
//! afterwards. The configured range is the caller's guarantee about which
//! widths the stylesheet will ever be presented with; both endpoints default
//! to unbounded.
//!
//! [`MqParser::new`]: crate::MqParser::new

use crate::filter::{FilterDirective, QueryDescriptor};

/// Per-query decision hook, consulted once per query before default range
/// logic runs. See [`FilterDirective`] for the contract.
pub type QueryFilter = Box<dyn Fn(&QueryDescriptor) -> FilterDirective + Send + Sync>;

/// The inclusive interval of widths the caller guarantees will be presented
/// to the stylesheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthRange {
    /// Lower endpoint in pixels
    pub min: f32,
    /// Upper endpoint in pixels
    pub max: f32,
}

impl WidthRange {
    /// The range covering every width
    pub const UNBOUNDED: WidthRange = WidthRange {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    /// Creates a range from explicit endpoints
    pub fn new(min: f32, max: f32) -> Self {
        WidthRange { min, max }
    }

    /// Returns false when the endpoints are inverted or not comparable
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

impl Default for WidthRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Evaluator configuration
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
/// assert!(parser.parse("(min-width: 300px)").matches());
/// assert!(!parser.parse("(max-width: 100px)").matches());
/// ```
pub struct Options {
    /// Smallest width that will ever be presented (default unbounded)
    pub min_value: f32,
    /// Largest width that will ever be presented (default unbounded)
    pub max_value: f32,
    /// Optional per-query decision hook
    pub filter: Option<QueryFilter>,
}

impl Options {
    /// The configured range as an interval
    pub fn range(&self) -> WidthRange {
        WidthRange::new(self.min_value, self.max_value)
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            min_value: f32::NEG_INFINITY,
            max_value: f32::INFINITY,
            filter: None,
        }
    }
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("filter", &self.filter.as_ref().map(|_| "..."))
            .finish()
    }
}
