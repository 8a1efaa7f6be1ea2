//! Free-text query execution over the search index.
//!
//! Matching is a case-insensitive substring test; there is no tokenization,
//! stemming or scoring. Results keep index order.

mod engine;
mod highlight;
mod snippet;

pub use engine::{QueryEngine, QueryResult};
pub use highlight::{escape_html, highlight_query, query_pattern, MARK_CLOSE, MARK_OPEN};
pub use snippet::create_snippet;
