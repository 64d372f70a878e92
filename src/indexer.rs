//! Scanning of installed documentation sets.
//!
//! Each root directory is enumerated in bounded batches; every candidate
//! library directory is loaded concurrently in its own task. Failures are
//! isolated per library: a broken metadata file is recorded and logged, and
//! the rest of the scan proceeds. The resulting tree shape is deterministic
//! regardless of completion order because every insertion is sorted.

use crate::error::ScanError;
use crate::page::{insert_sorted, Page, PageTree};
use crate::symbol::{LibraryIndex, Symbol, SymbolKind, Tag};
use futures::future::join_all;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::task::JoinSet;

/// Directory names never scanned, regardless of content. These ship
/// duplicate or non-gi-docgen documentation bundles.
const IGNORED_LIBRARIES: &[&str] = &[
    "atk",
    "javascriptcoregtk-4.1",
    "libhandy-1",
    "libnotify-0",
    "webkit2gtk-4.1",
    "webkit2gtk-web-extension-4.1",
];

/// Directory entries are listed in batches of this size to bound memory and
/// open-handle usage on large installations.
const SCAN_BATCH_SIZE: usize = 10;

/// Top-level section catalog: record kind, sidebar label, link anchor.
const SECTIONS: &[(SymbolKind, &str, &str)] = &[
    (SymbolKind::Class, "Classes", "#classes"),
    (SymbolKind::Content, "Addition Documentation", "#extra"),
    (SymbolKind::Interface, "Interfaces", "#interfaces"),
    (SymbolKind::Record, "Structs", "#structs"),
    (SymbolKind::Alias, "Aliases", "#aliases"),
    (SymbolKind::Enum, "Enumerations", "#enums"),
    (SymbolKind::Bitfield, "Bitfields", "#bitfields"),
    (SymbolKind::Function, "Functions", "#functions"),
    (SymbolKind::FunctionMacro, "Function Macros", "#function_macros"),
    (SymbolKind::Domain, "Error Domains", "#domains"),
    (SymbolKind::Callback, "Callbacks", "#callbacks"),
    (SymbolKind::Constant, "Constants", "#constants"),
];

/// Member subsection catalog, attached under the owning declaration.
const SUBSECTIONS: &[(SymbolKind, &str, &str)] = &[
    (SymbolKind::Ctor, "Constructors", "#constructors"),
    (SymbolKind::TypeFunc, "Functions", "#type-functions"),
    (SymbolKind::Method, "Instance Methods", "#methods"),
    (SymbolKind::Property, "Properties", "#properties"),
    (SymbolKind::Signal, "Signals", "#signals"),
    (SymbolKind::ClassMethod, "Class Methods", "#class-methods"),
    (SymbolKind::Vfunc, "Virtual Methods", "#virtual-methods"),
];

/// Section kinds whose entries can own member subsections.
const OWNER_KINDS: &[SymbolKind] = &[
    SymbolKind::Class,
    SymbolKind::Interface,
    SymbolKind::Record,
    SymbolKind::Domain,
];

/// Result of scanning a set of roots.
///
/// `failures` lists the libraries that could not be loaded; they are simply
/// absent from `tree`, never partially present.
#[derive(Debug)]
pub struct ScanOutcome {
    pub tree: PageTree,
    pub failures: Vec<ScanFailure>,
}

/// One isolated per-library failure.
#[derive(Debug)]
pub struct ScanFailure {
    /// The library directory (or root, for listing errors) that failed.
    pub library: PathBuf,
    pub error: ScanError,
}

/// Conventional documentation locations scanned when the caller does not
/// pass explicit roots.
pub fn default_roots() -> Vec<PathBuf> {
    let mut roots = vec![
        PathBuf::from("/usr/share/doc"),
        PathBuf::from("/usr/share/gtk-doc/html"),
        PathBuf::from("/app/share/doc"),
    ];
    if let Some(data) = dirs::data_dir() {
        roots.push(data.join("doc"));
    }
    roots
}

/// Scans every root concurrently and merges the results into one tree.
///
/// Roots that do not exist contribute nothing. There is no cancellation: the
/// future settles once every per-library load has finished, success or not.
pub async fn scan(roots: &[PathBuf]) -> ScanOutcome {
    let scans = roots.iter().map(|root| scan_root(root.clone()));
    let mut tree = PageTree::default();
    let mut failures = Vec::new();
    for (pages, root_failures) in join_all(scans).await {
        for page in pages {
            tree.insert_sorted(page);
        }
        failures.extend(root_failures);
    }
    tracing::info!(
        "scan finished: {} namespaces, {} failures",
        tree.roots.len(),
        failures.len()
    );
    ScanOutcome { tree, failures }
}

/// Scans the immediate subdirectories of one root.
async fn scan_root(root: PathBuf) -> (Vec<Page>, Vec<ScanFailure>) {
    let mut pages = Vec::new();
    let mut failures = Vec::new();

    let mut entries = match fs::read_dir(&root).await {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return (pages, failures),
        Err(err) => {
            failures.push(ScanFailure {
                library: root.clone(),
                error: ScanError::Io { path: root, source: err },
            });
            return (pages, failures);
        }
    };

    let mut loads = JoinSet::new();
    let mut done = false;
    while !done {
        let mut batch = Vec::with_capacity(SCAN_BATCH_SIZE);
        while batch.len() < SCAN_BATCH_SIZE {
            match entries.next_entry().await {
                Ok(Some(entry)) => batch.push(entry),
                Ok(None) => {
                    done = true;
                    break;
                }
                Err(err) => {
                    failures.push(ScanFailure {
                        library: root.clone(),
                        error: ScanError::Io { path: root.clone(), source: err },
                    });
                    done = true;
                    break;
                }
            }
        }

        for entry in batch {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if IGNORED_LIBRARIES.contains(&name.as_str()) {
                tracing::debug!("skipping denylisted library '{name}'");
                continue;
            }
            match entry.file_type().await {
                Ok(file_type) if file_type.is_dir() => {}
                _ => continue,
            }
            let dir = entry.path();
            loads.spawn(async move {
                load_library(&dir)
                    .await
                    .map_err(|error| ScanFailure { library: dir, error })
            });
        }
    }

    // Join every in-flight load before returning; one failure never aborts
    // its siblings.
    while let Some(joined) = loads.join_next().await {
        match joined {
            Ok(Ok(Some(page))) => insert_sorted(&mut pages, page),
            Ok(Ok(None)) => {}
            Ok(Err(failure)) => {
                tracing::warn!(
                    "failed to load {}: {}",
                    failure.library.display(),
                    failure.error
                );
                failures.push(failure);
            }
            Err(err) => tracing::warn!("library load task failed: {err}"),
        }
    }

    (pages, failures)
}

/// Loads one library directory into a namespace page.
///
/// Returns `Ok(None)` when the directory has no metadata file at all: that
/// is the normal state of non-documentation directories, not an error.
async fn load_library(dir: &Path) -> Result<Option<Page>, ScanError> {
    let metadata_path = dir.join("index.json");
    let bytes = match fs::read(&metadata_path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(ScanError::Io { path: metadata_path, source: err });
        }
    };
    let index: LibraryIndex = serde_json::from_slice(&bytes)
        .map_err(|err| ScanError::Parse { path: metadata_path, source: err })?;

    let namespace = index.meta.namespace();
    let index_uri = file_uri(&dir.join("index.html"));
    let children = build_children(&index, &file_uri(dir), &index_uri);
    tracing::debug!("loaded {namespace} ({} symbols)", index.symbols.len());

    Ok(Some(Page {
        name: namespace.clone(),
        tag: Some(Tag::Namespace),
        search_key: namespace,
        uri: index_uri,
        children,
    }))
}

/// Routes a library's symbols into sections and member subsections.
fn build_children(index: &LibraryIndex, dir_uri: &str, index_uri: &str) -> Vec<Page> {
    let mut sections: HashMap<SymbolKind, Vec<Page>> = HashMap::new();
    let mut members: HashMap<String, HashMap<SymbolKind, Vec<Page>>> = HashMap::new();

    for symbol in &index.symbols {
        let Some(page) = leaf_for(symbol, &index.meta.ns, dir_uri) else {
            continue;
        };
        if SECTIONS.iter().any(|(kind, ..)| *kind == symbol.kind) {
            insert_sorted(sections.entry(symbol.kind).or_default(), page);
        } else if SUBSECTIONS.iter().any(|(kind, ..)| *kind == symbol.kind)
            && let Some(owner) = symbol.type_name.clone()
        {
            insert_sorted(
                members.entry(owner).or_default().entry(symbol.kind).or_default(),
                page,
            );
        }
        // Anything else has no placement and is dropped.
    }

    // Attach member subsections under their owning declarations. Members
    // whose owner never materialized are dropped with the map.
    for owner_kind in OWNER_KINDS {
        let Some(owners) = sections.get_mut(owner_kind) else {
            continue;
        };
        for owner in owners.iter_mut() {
            let Some(mut buckets) = members.remove(&owner.name) else {
                continue;
            };
            for (member_kind, label, anchor) in SUBSECTIONS {
                let Some(children) = buckets.remove(member_kind) else {
                    continue;
                };
                owner.insert_sorted(Page::group(
                    *label,
                    format!("{}{anchor}", owner.uri),
                    children,
                ));
            }
        }
    }

    let mut pages = Vec::new();
    for (kind, label, anchor) in SECTIONS {
        let Some(children) = sections.remove(kind) else {
            continue;
        };
        insert_sorted(
            &mut pages,
            Page::group(*label, format!("{index_uri}{anchor}"), children),
        );
    }
    pages
}

/// Builds the leaf page for one symbol, or `None` when it cannot be linked.
fn leaf_for(symbol: &Symbol, ns: &str, dir_uri: &str) -> Option<Page> {
    let tag = symbol.tag()?;
    let link = symbol.link()?;
    Some(Page::leaf(
        symbol.name.clone(),
        tag,
        symbol.search_key(ns),
        format!("{dir_uri}/{link}"),
    ))
}

fn file_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}
