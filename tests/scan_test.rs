mod common;

use assert2::check;
use common::{button_metadata, empty_metadata, DocsRoot};
use docshelf::indexer::scan;
use docshelf::symbol::Tag;

/// Libraries end up in name order no matter which load finishes first.
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_loads_yield_a_sorted_tree() {
    let docs = DocsRoot::new();
    // Create in reverse name order; loads complete in whatever order the
    // runtime schedules them.
    docs.create_library("zeta", &empty_metadata("Zeta", "1.0"));
    docs.create_library("beta", &empty_metadata("Beta", "2.0"));
    docs.create_library("alpha", &empty_metadata("Alpha", "1.0"));

    let outcome = scan(&[docs.path().to_path_buf()]).await;
    check!(outcome.failures.is_empty());

    let names: Vec<_> = outcome.tree.roots.iter().map(|p| p.name.as_str()).collect();
    check!(names == ["Alpha-1.0", "Beta-2.0", "Zeta-1.0"]);
}

/// Scanning two roots merges their namespaces into one ordered level.
#[tokio::test(flavor = "multi_thread")]
async fn multiple_roots_merge_into_one_tree() {
    let first = DocsRoot::new();
    first.create_library("beta", &empty_metadata("Beta", "2.0"));
    let second = DocsRoot::new();
    second.create_library("alpha", &empty_metadata("Alpha", "1.0"));

    let outcome = scan(&[first.path().to_path_buf(), second.path().to_path_buf()]).await;
    let names: Vec<_> = outcome.tree.roots.iter().map(|p| p.name.as_str()).collect();
    check!(names == ["Alpha-1.0", "Beta-2.0"]);
}

/// A denylisted directory never appears, even with valid metadata inside.
#[tokio::test(flavor = "multi_thread")]
async fn denylisted_library_never_appears() {
    let docs = DocsRoot::new();
    docs.create_library("atk", &empty_metadata("Atk", "1.0"));
    docs.create_library("gtk-4.0", &empty_metadata("Gtk", "4.0"));

    let outcome = scan(&[docs.path().to_path_buf()]).await;
    check!(outcome.failures.is_empty());
    let names: Vec<_> = outcome.tree.roots.iter().map(|p| p.name.as_str()).collect();
    check!(names == ["Gtk-4.0"]);
}

/// A directory without index.json is not documentation and not an error.
#[tokio::test(flavor = "multi_thread")]
async fn missing_metadata_is_silently_absent() {
    let docs = DocsRoot::new();
    docs.create_bare_dir("random-package");
    docs.create_library("gtk-4.0", &empty_metadata("Gtk", "4.0"));

    let outcome = scan(&[docs.path().to_path_buf()]).await;
    check!(outcome.failures.is_empty());
    check!(outcome.tree.roots.len() == 1);
}

/// One broken library is reported and isolated; siblings still load.
#[tokio::test(flavor = "multi_thread")]
async fn malformed_metadata_is_isolated() {
    let docs = DocsRoot::new();
    docs.create_library("broken", "{ not json");
    docs.create_library("gtk-4.0", &empty_metadata("Gtk", "4.0"));

    let outcome = scan(&[docs.path().to_path_buf()]).await;
    check!(outcome.failures.len() == 1);
    check!(outcome.failures[0].library.ends_with("broken"));

    let names: Vec<_> = outcome.tree.roots.iter().map(|p| p.name.as_str()).collect();
    check!(names == ["Gtk-4.0"]);
}

/// A root that does not exist contributes nothing.
#[tokio::test(flavor = "multi_thread")]
async fn nonexistent_root_is_silent() {
    let docs = DocsRoot::new();
    docs.create_library("gtk-4.0", &empty_metadata("Gtk", "4.0"));
    let missing = docs.path().join("no-such-root");

    let outcome = scan(&[docs.path().to_path_buf(), missing]).await;
    check!(outcome.failures.is_empty());
    check!(outcome.tree.roots.len() == 1);
}

/// Full shape of a loaded library: sections, owners, subsections, links.
#[tokio::test(flavor = "multi_thread")]
async fn library_tree_has_sections_and_member_subsections() {
    let docs = DocsRoot::new();
    let dir = docs.create_library("gtk-4.0", button_metadata());

    let outcome = scan(&[docs.path().to_path_buf()]).await;
    let ns = &outcome.tree.roots[0];
    check!(ns.name == "Gtk-4.0");
    check!(ns.tag == Some(Tag::Namespace));
    check!(ns.uri == format!("file://{}/index.html", dir.display()));

    let sections: Vec<_> = ns.children.iter().map(|p| p.name.as_str()).collect();
    check!(sections == ["Classes", "Functions"]);

    let classes = &ns.children[0];
    check!(classes.uri.ends_with("index.html#classes"));
    check!(classes.search_key.is_empty(), "groups are not searchable");

    let button = &classes.children[0];
    check!(button.name == "Button");
    check!(button.uri == format!("file://{}/class.Button.html", dir.display()));

    let subsections: Vec<_> = button.children.iter().map(|p| p.name.as_str()).collect();
    check!(subsections == ["Constructors", "Instance Methods", "Properties", "Signals"]);

    // Label has no members, so no subsections were attached.
    let label = &classes.children[1];
    check!(label.name == "Label");
    check!(label.children.is_empty());

    let functions = &ns.children[1];
    let init = &functions.children[0];
    check!(init.uri == format!("file://{}/func.init.html", dir.display()));
    check!(init.search_key == "gtk_init");
    check!(init.tag == Some(Tag::Function));
}
