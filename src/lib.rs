//! demq — width-based media condition evaluation and rewriting
//!
//! Given a supported-width range the caller guarantees (for example "this
//! stylesheet is only ever served between 200px and 500px"), this crate
//! decides for each media query list whether it can still match, and
//! re-renders the minimal equivalent condition text: clauses guaranteed true
//! for every width in the range drop out, queries that can never be true are
//! excluded, and a block whose query list can never match should be removed
//! by the caller altogether.
//!
//! The crate is the pure evaluation engine. Locating `@media` / `@import`
//! rules in a stylesheet and mutating the surrounding CSS are the caller's
//! job; the engine consumes raw condition text and produces a verdict plus
//! replacement text.
//!
//! # Overview
//!
//! - A **condition** is one width comparison: `(min-width: 200px)`,
//!   `(width > 200px)`, `(200px < width)` are all understood; anything else
//!   (non-pixel units, `orientation`, malformed input) is carried through
//!   untouched.
//! - A **query** AND-combines conditions; only its tightest lower and upper
//!   bounds gate matching.
//! - A **query list** OR-combines comma-separated queries.
//! - An optional **filter hook** lets the caller override per-query
//!   decisions while unreferenced queries fall through to range logic.
//!
//! # Examples
//!
//! ```
//! use demq::{MqParser, Options};
//!
//! let parser = MqParser::new(Options {
//!     min_value: 200.0,
//!     max_value: 500.0,
//!     ..Options::default()
//! })
//! .unwrap();
//!
//! let list = parser.parse("(width <= 100px), (width >= 200px) and (width < 400px)");
//! assert!(list.matches());
//! // The first query is unreachable, the 200px bound is implied.
//! assert_eq!(list.render().as_deref(), Some("(width < 400px)"));
//! ```

pub mod condition;
pub mod config;
pub mod error;
pub mod filter;
pub mod parser;
pub mod query;

pub use condition::{BoundDirection, Comparison, ComparisonOp, Condition};
pub use config::{Options, QueryFilter, WidthRange};
pub use error::{Error, Result};
pub use filter::{FilterDirective, QueryDescriptor};
pub use parser::MqParser;
pub use query::{Query, QueryList};
