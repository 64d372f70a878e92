//! Resolution of structural paths to absolute rows of the browse view.
//!
//! The browse view is a linear list in which only children of expanded
//! nodes are visible. Resolving a [`SidebarPath`] answers "which visible
//! row will this node be on", force-expanding every collapsed ancestor on
//! the way down so the answer is guaranteed to be a real row.

use crate::flatten::SidebarPath;
use crate::page::{Page, PageTree};
use std::collections::HashSet;

/// Per-node expansion flags for the browse view, keyed by structural path.
///
/// Collapsed is the default; only expanded nodes are recorded. The browse
/// view owns this state. The resolver consults it and force-expands
/// ancestors, nothing else mutates it from this crate.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: HashSet<SidebarPath>,
}

impl ExpansionState {
    pub fn is_expanded(&self, path: &[usize]) -> bool {
        self.expanded.contains(path)
    }

    pub fn set_expanded(&mut self, path: &[usize], expanded: bool) {
        if expanded {
            self.expanded.insert(path.to_vec());
        } else {
            self.expanded.remove(path);
        }
    }

    /// Collapses every node, e.g. when re-presenting the browse view.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}

/// Absolute row of `path` in the linear browse view.
///
/// Counts the visible rows preceding the target, expanding every strict
/// ancestor as a side effect; the target's own expansion is left untouched.
///
/// `path` must come from [`crate::flatten::flatten`] over this same tree.
/// Anything else is a caller bug and panics.
pub fn resolve_index(
    tree: &PageTree,
    path: &[usize],
    expansion: &mut ExpansionState,
) -> usize {
    assert!(!path.is_empty(), "empty sidebar path");

    let mut index = 0;
    let mut siblings: &[Page] = &tree.roots;
    let mut prefix: SidebarPath = Vec::with_capacity(path.len());

    for (depth, &coord) in path.iter().enumerate() {
        // Sibling coordinates are 1-based below the root level.
        let base = usize::from(depth > 0);
        let offset = coord.checked_sub(base).expect("invalid sidebar path");

        for (i, page) in siblings[..offset].iter().enumerate() {
            prefix.push(i + base);
            index += 1 + visible_subtree_rows(page, &mut prefix, expansion);
            prefix.pop();
        }

        prefix.push(coord);
        if depth + 1 < path.len() {
            expansion.set_expanded(&prefix, true);
            // The ancestor row itself is already counted.
            index += 1;
            siblings = &siblings[offset].children;
        }
    }
    index
}

/// Total number of visible rows under the given expansion state.
pub fn visible_row_count(tree: &PageTree, expansion: &ExpansionState) -> usize {
    let mut rows = 0;
    let mut prefix: SidebarPath = vec![0];
    for (offset, page) in tree.roots.iter().enumerate() {
        prefix[0] = offset;
        rows += 1 + visible_subtree_rows(page, &mut prefix, expansion);
    }
    rows
}

/// Row to scroll to so the row at `index` ends up visible even though the
/// view may not have finished its layout pass: overshoot by one, except for
/// the last row.
pub fn scroll_target(index: usize, visible_rows: usize) -> usize {
    if index + 1 == visible_rows { index } else { index + 1 }
}

/// Number of visible rows inside `page`'s subtree (the page's own row not
/// included). `prefix` is the page's path and is restored before returning.
fn visible_subtree_rows(
    page: &Page,
    prefix: &mut SidebarPath,
    expansion: &ExpansionState,
) -> usize {
    if !expansion.is_expanded(prefix) {
        return 0;
    }
    let mut rows = 0;
    prefix.push(0);
    for (offset, child) in page.children.iter().enumerate() {
        *prefix.last_mut().expect("prefix never empties") = offset + 1;
        rows += 1 + visible_subtree_rows(child, prefix, expansion);
    }
    prefix.pop();
    rows
}
