//! Index and fuzzy-search locally installed API documentation.
//!
//! The crate scans documentation roots into a typed page hierarchy,
//! flattens it into a searchable list with a uri→path registry, resolves
//! structural paths back to rows of an expandable browse view, and ranks
//! fuzzy matches over the flattened entries. The UI layer consuming these
//! pieces (content rendering, shortcuts, scrolling) lives elsewhere.

pub mod cli;
pub mod error;
pub mod flatten;
pub mod indexer;
pub mod page;
pub mod resolver;
pub mod search;
pub mod symbol;
pub mod sync;
pub mod tracing;

pub use error::{Result, ScanError};
pub use flatten::{flatten, FlatEntry, PathRegistry, SidebarPath};
pub use indexer::{default_roots, scan, ScanFailure, ScanOutcome};
pub use page::{Page, PageTree};
pub use resolver::{resolve_index, scroll_target, visible_row_count, ExpansionState};
pub use search::{SearchHit, SearchIndex};
pub use symbol::{LibraryIndex, Symbol, SymbolKind, Tag};
pub use sync::{BrowseSelection, SelectionOutcome, SyncCoordinator, SyncState};
