//! Shared test fixtures and utilities for integration tests.
//!
//! Each test gets an isolated temporary documentation root, populated with
//! whatever library layouts the test needs. The directory is cleaned up on
//! drop.

use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary documentation root for test isolation.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct DocsRoot {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl DocsRoot {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a library directory with the given `index.json` content and
    /// an empty `index.html` next to it.
    pub fn create_library(&self, name: &str, metadata: &str) -> PathBuf {
        let dir = self.root.join(name);
        std::fs::create_dir_all(&dir)
            .unwrap_or_else(|e| panic!("Failed to create library '{}': {}", name, e));
        std::fs::write(dir.join("index.json"), metadata)
            .unwrap_or_else(|e| panic!("Failed to write metadata for '{}': {}", name, e));
        std::fs::write(dir.join("index.html"), "<html></html>")
            .unwrap_or_else(|e| panic!("Failed to write index.html for '{}': {}", name, e));
        dir
    }

    /// Creates a directory that carries no metadata file at all.
    pub fn create_bare_dir(&self, name: &str) -> PathBuf {
        let dir = self.root.join(name);
        std::fs::create_dir_all(&dir)
            .unwrap_or_else(|e| panic!("Failed to create directory '{}': {}", name, e));
        dir
    }
}

/// Minimal valid metadata for a library with no symbols.
#[allow(dead_code)]
pub fn empty_metadata(ns: &str, version: &str) -> String {
    format!(r#"{{"meta": {{"ns": "{ns}", "version": "{version}"}}, "symbols": []}}"#)
}

/// Metadata for a library with one class, a few members and a function,
/// enough to exercise sections, subsections and search.
#[allow(dead_code)]
pub fn button_metadata() -> &'static str {
    r#"{
        "meta": {"ns": "Gtk", "version": "4.0"},
        "symbols": [
            {"type": "class", "name": "Button", "ctype": "GtkButton"},
            {"type": "class", "name": "Label", "ctype": "GtkLabel"},
            {"type": "ctor", "name": "new", "ident": "gtk_button_new", "type_name": "Button"},
            {"type": "method", "name": "set_label", "ident": "gtk_button_set_label", "type_name": "Button"},
            {"type": "signal", "name": "clicked", "type_name": "Button"},
            {"type": "property", "name": "label", "type_name": "Button"},
            {"type": "function", "name": "init", "ident": "gtk_init"}
        ]
    }"#
}

/// An isolated root populated with one realistic library.
#[fixture]
#[allow(dead_code)]
pub fn gtk_docs() -> DocsRoot {
    let docs = DocsRoot::new();
    docs.create_library("gtk-4.0", button_metadata());
    docs
}
