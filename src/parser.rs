//! Engine entry point
//!
//! [`MqParser`] holds the validated configuration and turns raw condition
//! text into evaluated [`QueryList`]s. One parser can process any number of
//! blocks; each call builds a fresh query list and leaves no state behind,
//! so concurrent calls over independent blocks need no synchronization.

use crate::config::Options;
use crate::error::{Error, Result};
use crate::query::QueryList;

/// Evaluates and rewrites width-based condition text against the configured
/// supported-width range
///
/// The caller contract for a located conditional block:
///
/// 1. Pass the block's raw condition text to [`MqParser::parse`].
/// 2. If [`QueryList::matches`] is false, remove the block entirely.
/// 3. Otherwise [`QueryList::render`]: `Some(text)` replaces the block's
///    condition text; `None` means every condition is implied by the range
///    and the block should be unwrapped (contents kept, wrapper dropped).
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
/// let list = parser.parse("(min-width: 100px) and (max-width: 400px)");
/// assert!(list.matches());
/// assert_eq!(list.render().as_deref(), Some("(max-width: 400px)"));
///
/// // Unreachable within 200..=500px: the caller removes the block.
/// assert!(!parser.parse("(max-width: 100px)").matches());
///
/// // Fully implied by the range: the caller unwraps the block.
/// let list = parser.parse("(min-width: 200px)");
/// assert!(list.matches());
/// assert_eq!(list.render(), None);
/// ```
#[derive(Debug)]
pub struct MqParser {
    options: Options,
}

impl MqParser {
    /// Creates a parser from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when `min_value` exceeds `max_value`
    /// or either endpoint is NaN.
    pub fn new(options: Options) -> Result<Self> {
        if !options.range().is_valid() {
            return Err(Error::InvalidRange {
                min: options.min_value,
                max: options.max_value,
            });
        }
        Ok(MqParser { options })
    }

    /// The configuration this parser was built with
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parses a raw query list. Never fails: clauses that are not recognized
    /// width comparisons are carried through as opaque, always-preserved
    /// conditions.
    pub fn parse(&self, input: &str) -> QueryList {
        QueryList::parse(input, &self.options)
    }
}
