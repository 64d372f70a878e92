//! Query grammar for sidebar search.
//!
//! A query is an optional `tag:` prefix followed by free text. The prefix
//! restricts hits to one category and is stripped before matching; the
//! remaining text loses all whitespace, and its casing decides the
//! comparison mode: any uppercase character makes the match case-sensitive,
//! otherwise needle and haystack both fold to lowercase.

use crate::symbol::Tag;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static TAG_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    let tags = Tag::ALL.map(Tag::as_str).join("|");
    Regex::new(&format!(r"^(?i)({tags})\s*:\s*")).expect("tag prefix pattern")
});

/// A parsed search query.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Restricts hits to entries with exactly this tag.
    pub tag: Option<Tag>,
    /// Needle handed to the matcher: whitespace stripped, folded to
    /// lowercase unless the match is case-sensitive.
    pub needle: String,
    pub case_sensitive: bool,
}

impl Query {
    pub fn parse(input: &str) -> Self {
        let (tag, rest) = match TAG_PREFIX.captures(input) {
            Some(captures) => {
                let tag = Tag::parse(&captures[1]);
                let rest = &input[captures[0].len()..];
                (tag, rest)
            }
            None => (None, input),
        };

        let needle: String = rest.split_whitespace().collect();
        let folded = needle.to_lowercase();
        let case_sensitive = needle != folded;
        Self {
            tag,
            needle: if case_sensitive { needle } else { folded },
            case_sensitive,
        }
    }

    /// The haystack in this query's comparison mode.
    pub fn haystack<'a>(&self, search_key: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(search_key)
        } else {
            Cow::Owned(search_key.to_lowercase())
        }
    }
}
