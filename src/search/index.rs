//! Filtering and ranking of the flattened sidebar entries.

use super::matcher::{has_match, score};
use super::query::Query;
use crate::flatten::FlatEntry;

/// One ranked search result.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub entry: FlatEntry,
    pub score: f64,
}

/// Searchable snapshot of the flattened sidebar.
///
/// Immutable after construction; every query change recomputes the full
/// result set, which is fine at the few-thousand-entry scale documentation
/// sets reach.
#[derive(Debug, Default)]
pub struct SearchIndex {
    entries: Vec<FlatEntry>,
}

impl SearchIndex {
    pub fn new(entries: Vec<FlatEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FlatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps entries matching `raw_query` and ranks them best-first.
    ///
    /// The sort is stable, so entries with equal scores keep their flat
    /// (pre-order) relative order across repeated identical calls.
    pub fn filter(&self, raw_query: &str) -> Vec<SearchHit> {
        let query = Query::parse(raw_query);
        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .filter(|entry| query.tag.is_none_or(|tag| entry.tag == tag))
            .filter_map(|entry| {
                let haystack = query.haystack(&entry.search_key);
                if !has_match(&query.needle, &haystack) {
                    return None;
                }
                Some(SearchHit {
                    entry: entry.clone(),
                    score: score(&query.needle, &haystack),
                })
            })
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Tag;

    fn entry(name: &str, tag: Tag, search_key: &str) -> FlatEntry {
        FlatEntry {
            name: name.to_string(),
            tag,
            search_key: search_key.to_string(),
            uri: format!("file:///{name}"),
        }
    }

    fn sample_index() -> SearchIndex {
        SearchIndex::new(vec![
            entry("Gtk-4.0", Tag::Namespace, "Gtk-4.0"),
            entry("Button", Tag::Class, "GtkButton"),
            entry("ButtonBox", Tag::Class, "GtkButtonBox"),
            entry("clicked", Tag::Signal, "GtkButton::clicked"),
            entry("new", Tag::Constructor, "gtk_button_new"),
        ])
    }

    #[test]
    fn tag_prefix_restricts_hits_to_that_tag() {
        let hits = sample_index().filter("class:Button");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|hit| hit.entry.tag == Tag::Class));
        let names: Vec<_> = hits.iter().map(|h| h.entry.name.as_str()).collect();
        assert!(names.contains(&"Button"));
        assert!(names.contains(&"ButtonBox"));
    }

    #[test]
    fn non_matching_entries_are_dropped() {
        let hits = sample_index().filter("clicked");
        let names: Vec<_> = hits.iter().map(|h| h.entry.name.as_str()).collect();
        assert_eq!(names, ["clicked"]);
    }

    #[test]
    fn exact_key_match_ranks_first() {
        let hits = sample_index().filter("GtkButton");
        assert_eq!(hits[0].entry.name, "Button");
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn case_insensitive_queries_fold_the_haystack() {
        let hits = sample_index().filter("gtkbutton");
        let names: Vec<_> = hits.iter().map(|h| h.entry.name.as_str()).collect();
        assert!(names.contains(&"Button"));
    }

    #[test]
    fn tie_order_is_stable_across_calls() {
        let index = SearchIndex::new(vec![
            entry("a", Tag::Constant, "same_key"),
            entry("b", Tag::Constant, "same_key"),
            entry("c", Tag::Constant, "same_key"),
        ]);
        let first: Vec<_> = index
            .filter("samekey")
            .iter()
            .map(|h| h.entry.name.clone())
            .collect();
        let second: Vec<_> = index
            .filter("samekey")
            .iter()
            .map(|h| h.entry.name.clone())
            .collect();
        assert_eq!(first, ["a", "b", "c"]);
        assert_eq!(first, second);
    }
}
