//! Hierarchical page model for the browse sidebar.
//!
//! Pages form an acyclic forest: namespace roots at the top level, section
//! and owner groupings below them, symbol leaves at the bottom. Siblings are
//! kept in case-sensitive lexicographic order by name at all times, via
//! sorted insertion, so the final tree shape does not depend on the order in
//! which concurrent scans complete.

use crate::symbol::Tag;

/// A node in the documentation hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Display name in the sidebar.
    pub name: String,
    /// Category of the entry. Grouping nodes ("Classes", "Instance
    /// Methods", ...) carry no tag.
    pub tag: Option<Tag>,
    /// Haystack used when fuzzy-searching the sidebar. Empty for pure
    /// grouping nodes, which are browsable but not searchable.
    pub search_key: String,
    /// Locator of the rendered documentation for this entry.
    pub uri: String,
    /// Child pages, ordered by name.
    pub children: Vec<Page>,
}

impl Page {
    /// A searchable leaf entry.
    pub fn leaf(
        name: impl Into<String>,
        tag: Tag,
        search_key: impl Into<String>,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tag: Some(tag),
            search_key: search_key.into(),
            uri: uri.into(),
            children: Vec::new(),
        }
    }

    /// A grouping node: browsable, not searchable.
    pub fn group(name: impl Into<String>, uri: impl Into<String>, children: Vec<Page>) -> Self {
        Self {
            name: name.into(),
            tag: None,
            search_key: String::new(),
            uri: uri.into(),
            children,
        }
    }

    /// Inserts `child` keeping `self.children` sorted by name.
    pub fn insert_sorted(&mut self, child: Page) {
        insert_sorted(&mut self.children, child);
    }
}

/// Inserts `page` into `pages` at its sorted position.
///
/// Equal names insert after existing entries, so the result is the same for
/// every insertion order.
pub fn insert_sorted(pages: &mut Vec<Page>, page: Page) {
    let at = pages.partition_point(|existing| existing.name <= page.name);
    pages.insert(at, page);
}

/// The forest of all scanned namespaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageTree {
    /// Top-level namespace pages, ordered by name.
    pub roots: Vec<Page>,
}

impl PageTree {
    /// Inserts a namespace root at its sorted position.
    pub fn insert_sorted(&mut self, page: Page) {
        insert_sorted(&mut self.roots, page);
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
