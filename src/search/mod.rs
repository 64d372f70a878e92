//! Fuzzy search over the flattened sidebar.
//!
//! Split into the match/score primitive (`matcher`), the query grammar
//! (`query`), and the filter-and-rank pass over flat entries (`index`).

pub mod index;
pub mod matcher;
pub mod query;

pub use index::{SearchHit, SearchIndex};
pub use matcher::{has_match, score, SCORE_MAX, SCORE_MIN};
pub use query::Query;
