//! Metadata model for per-library `index.json` files.
//!
//! A library's metadata is a flat list of symbol records, each tagged with a
//! closed `type` vocabulary. Three total mappings derive everything the
//! sidebar needs from a record: its category tag, the relative link to its
//! rendered page, and the string the fuzzy matcher runs against. All three
//! are exhaustive `match`es so a new record type cannot silently fall
//! through.

use serde::Deserialize;
use std::fmt;

/// Top-level structure of a library's `index.json`.
#[derive(Debug, Deserialize)]
pub struct LibraryIndex {
    pub meta: Meta,
    #[serde(default)]
    pub symbols: Vec<Symbol>,
}

/// Namespace identity of one library at one version.
#[derive(Debug, Deserialize)]
pub struct Meta {
    pub ns: String,
    pub version: String,
}

impl Meta {
    /// The `{name}-{version}` identifier shown for the library root.
    pub fn namespace(&self) -> String {
        format!("{}-{}", self.ns, self.version)
    }
}

/// One symbol record from the metadata file.
///
/// Only `type` and `name` are reliably present; the remaining fields are
/// type-specific and deserialize to `None` when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Symbol {
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    #[serde(default)]
    pub name: String,
    /// C identifier, for functions, constants and the like.
    pub ident: Option<String>,
    /// C type name, for type declarations.
    pub ctype: Option<String>,
    /// Name of the owning type, for members.
    pub type_name: Option<String>,
    /// Name of the associated class struct, for class methods.
    pub struct_for: Option<String>,
    /// Pre-rendered link target, for additional content pages.
    pub href: Option<String>,
}

/// Closed set of record types understood by the indexer.
///
/// Anything else deserializes to [`SymbolKind::Unknown`] and is dropped
/// without placement rather than failing the whole library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Alias,
    Bitfield,
    Callback,
    Class,
    ClassMethod,
    Constant,
    Content,
    Ctor,
    Domain,
    Enum,
    Function,
    FunctionMacro,
    Interface,
    Method,
    Property,
    Record,
    Signal,
    TypeFunc,
    Vfunc,
    #[serde(other)]
    Unknown,
}

impl Symbol {
    /// Category label for the record, the vocabulary `tag:` query prefixes
    /// filter on. `None` for unrecognized record types.
    pub fn tag(&self) -> Option<Tag> {
        Some(match self.kind {
            SymbolKind::Alias => Tag::Alias,
            SymbolKind::Bitfield => Tag::Bitfield,
            SymbolKind::Callback => Tag::Callback,
            SymbolKind::Class => Tag::Class,
            SymbolKind::ClassMethod => Tag::Method,
            SymbolKind::Constant => Tag::Constant,
            SymbolKind::Content => Tag::Additional,
            SymbolKind::Ctor => Tag::Constructor,
            SymbolKind::Domain => Tag::Error,
            SymbolKind::Enum => Tag::Enum,
            SymbolKind::Function => Tag::Function,
            SymbolKind::FunctionMacro => Tag::Macro,
            SymbolKind::Interface => Tag::Interface,
            SymbolKind::Method => Tag::Method,
            SymbolKind::Property => Tag::Property,
            SymbolKind::Record => Tag::Struct,
            SymbolKind::Signal => Tag::Signal,
            SymbolKind::TypeFunc => Tag::Function,
            SymbolKind::Vfunc => Tag::Vfunc,
            SymbolKind::Unknown => return None,
        })
    }

    /// Relative link to the rendered page for this record, matching the
    /// file names the documentation generator writes next to `index.json`.
    /// `None` when the record cannot be linked (unrecognized type, content
    /// without an href, member without an owner).
    pub fn link(&self) -> Option<String> {
        let name = &self.name;
        Some(match self.kind {
            SymbolKind::Alias => format!("alias.{name}.html"),
            SymbolKind::Bitfield => format!("flags.{name}.html"),
            SymbolKind::Callback => format!("callback.{name}.html"),
            SymbolKind::Class => format!("class.{name}.html"),
            SymbolKind::ClassMethod => {
                format!("class_method.{}.{name}.html", self.class_struct()?)
            }
            SymbolKind::Constant => format!("const.{name}.html"),
            SymbolKind::Content => self.href.clone()?,
            SymbolKind::Ctor => format!("ctor.{}.{name}.html", self.owner()?),
            SymbolKind::Domain => format!("error.{name}.html"),
            SymbolKind::Enum => format!("enum.{name}.html"),
            SymbolKind::Function => format!("func.{name}.html"),
            SymbolKind::FunctionMacro => format!("func.{name}.html"),
            SymbolKind::Interface => format!("iface.{name}.html"),
            SymbolKind::Method => format!("method.{}.{name}.html", self.owner()?),
            SymbolKind::Property => format!("property.{}.{name}.html", self.owner()?),
            SymbolKind::Record => format!("struct.{name}.html"),
            SymbolKind::Signal => format!("signal.{}.{name}.html", self.owner()?),
            SymbolKind::TypeFunc => format!("type_func.{}.{name}.html", self.owner()?),
            SymbolKind::Vfunc => format!("vfunc.{}.{name}.html", self.owner()?),
            SymbolKind::Unknown => return None,
        })
    }

    /// String the fuzzy matcher runs against. Empty when the metadata lacks
    /// the field the kind derives its key from; such entries stay browsable
    /// but are excluded from search.
    pub fn search_key(&self, ns: &str) -> String {
        match self.kind {
            SymbolKind::Alias
            | SymbolKind::Bitfield
            | SymbolKind::Callback
            | SymbolKind::Class
            | SymbolKind::Domain
            | SymbolKind::Enum
            | SymbolKind::Interface
            | SymbolKind::Record => self.ctype.clone().unwrap_or_default(),

            SymbolKind::ClassMethod
            | SymbolKind::Constant
            | SymbolKind::Ctor
            | SymbolKind::Function
            | SymbolKind::FunctionMacro
            | SymbolKind::Method
            | SymbolKind::TypeFunc => self.ident.clone().unwrap_or_default(),

            SymbolKind::Property => self.member_key(ns, ":"),
            SymbolKind::Signal => self.member_key(ns, "::"),
            SymbolKind::Vfunc => self.member_key(ns, "."),

            SymbolKind::Content => self.name.clone(),
            SymbolKind::Unknown => String::new(),
        }
    }

    fn owner(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    fn class_struct(&self) -> Option<&str> {
        self.struct_for.as_deref().or(self.type_name.as_deref())
    }

    fn member_key(&self, ns: &str, separator: &str) -> String {
        match &self.type_name {
            Some(owner) => format!("{ns}{owner}{separator}{}", self.name),
            None => String::new(),
        }
    }
}

/// Closed category vocabulary for documentation entries.
///
/// This is also the vocabulary of `tag:` query prefixes. `Namespace` only
/// originates from library roots and `Union` from nothing at all, but both
/// remain valid query restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Additional,
    Alias,
    Bitfield,
    Callback,
    Class,
    Constant,
    Constructor,
    Enum,
    Error,
    Function,
    Interface,
    Namespace,
    Macro,
    Method,
    Property,
    Signal,
    Struct,
    Union,
    Vfunc,
}

impl Tag {
    /// Every tag accepted by the `tag:` query prefix.
    pub const ALL: [Self; 19] = [
        Self::Additional,
        Self::Alias,
        Self::Bitfield,
        Self::Callback,
        Self::Class,
        Self::Constant,
        Self::Constructor,
        Self::Enum,
        Self::Error,
        Self::Function,
        Self::Interface,
        Self::Namespace,
        Self::Macro,
        Self::Method,
        Self::Property,
        Self::Signal,
        Self::Struct,
        Self::Union,
        Self::Vfunc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Additional => "additional",
            Self::Alias => "alias",
            Self::Bitfield => "bitfield",
            Self::Callback => "callback",
            Self::Class => "class",
            Self::Constant => "constant",
            Self::Constructor => "constructor",
            Self::Enum => "enum",
            Self::Error => "error",
            Self::Function => "function",
            Self::Interface => "interface",
            Self::Namespace => "namespace",
            Self::Macro => "macro",
            Self::Method => "method",
            Self::Property => "property",
            Self::Signal => "signal",
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Vfunc => "vfunc",
        }
    }

    /// Case-insensitive lookup, used by the query grammar.
    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
