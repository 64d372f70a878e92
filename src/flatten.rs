//! Pre-order flattening of the page tree into the searchable list.
//!
//! Flattening runs exactly once per load, after every scan task has
//! settled. It produces two things in a single traversal: the flat list the
//! search view filters, and the registry mapping each page's uri to its
//! structural sidebar path for deep-linking back into the browse view.

use crate::page::{Page, PageTree};
use crate::symbol::Tag;
use std::collections::HashMap;

/// Structural address of a node: one sibling offset per depth level.
///
/// The root level is 0-based. Every deeper level is 1-based, because within
/// a subtree the owning row itself occupies offset zero, the same
/// convention the resolver's relative counter uses.
pub type SidebarPath = Vec<usize>;

/// One searchable row of the flattened sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEntry {
    pub name: String,
    pub tag: Tag,
    /// Haystack for the fuzzy matcher.
    pub search_key: String,
    pub uri: String,
}

/// Map from page uri to its structural sidebar path.
///
/// Built once per flatten pass. When several nodes share a uri the entry
/// registered last wins; children are registered before their parent, so
/// the shallowest such node takes precedence.
#[derive(Debug, Clone, Default)]
pub struct PathRegistry {
    paths: HashMap<String, SidebarPath>,
}

impl PathRegistry {
    pub fn get(&self, uri: &str) -> Option<&SidebarPath> {
        self.paths.get(uri)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn insert(&mut self, uri: &str, path: &[usize]) {
        self.paths.insert(uri.to_string(), path.to_vec());
    }
}

/// Flattens the tree in pre-order, collecting searchable entries and
/// registering every node's path.
pub fn flatten(tree: &PageTree) -> (Vec<FlatEntry>, PathRegistry) {
    let mut entries = Vec::new();
    let mut registry = PathRegistry::default();
    let mut path: SidebarPath = vec![0];
    flatten_level(&tree.roots, &mut path, &mut entries, &mut registry);
    (entries, registry)
}

fn flatten_level(
    pages: &[Page],
    path: &mut SidebarPath,
    entries: &mut Vec<FlatEntry>,
    registry: &mut PathRegistry,
) {
    for page in pages {
        if !page.search_key.is_empty() {
            let tag = page.tag.expect("searchable page must carry a tag");
            entries.push(FlatEntry {
                name: page.name.clone(),
                tag,
                search_key: page.search_key.clone(),
                uri: page.uri.clone(),
            });
        }
        if !page.children.is_empty() {
            path.push(1);
            flatten_level(&page.children, path, entries, registry);
            path.pop();
        }
        registry.insert(&page.uri, path);
        *path.last_mut().expect("path never empties") += 1;
    }
}
