//! Facts model: the resolved symbol table and type hierarchy of a snapshot.
//!
//! This module provides the semantic program data model rules read from:
//! - [`File`]: Source files the snapshot was resolved from
//! - [`Symbol`]: Symbol definitions (types, methods, fields, variables)
//! - [`InheritanceInfo`]: `extends` / `implements` edges between types
//!
//! The [`FactsStore`] provides in-memory storage with:
//! - Ordered maps for O(log n) ID lookups and deterministic iteration
//! - Postings lists for efficient queries (container → members, name → symbols)
//! - Hierarchy indexes (child → superclass, child → parents, parent → children)
//!
//! # Ownership Model
//!
//! Every symbol except top-level types has a container: the symbol whose body
//! lexically declares it. A method's container is its owning type; a member
//! class's container is the enclosing type; a local class's container is the
//! method that declares it.
//!
//! # Schema Versioning
//!
//! The [`FACTS_SCHEMA_VERSION`] constant tracks breaking changes to the
//! serialized [`FactsSnapshot`] layout.

use crate::span::{FileId, Span};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// ============================================================================
// Schema Version
// ============================================================================

/// Schema version for facts serialization.
///
/// Increment this when:
/// - Adding/removing fields from serialized structs
/// - Changing field types or serialization format
/// - Breaking changes to enum variants
pub const FACTS_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a symbol within a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new symbol ID.
    pub fn new(id: u32) -> Self {
        SymbolId(id)
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sym_{}", self.0)
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Kind of symbol definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Class,
    Interface,
    Enum,
    Method,
    Constructor,
    Field,
    #[default]
    Variable,
    Parameter,
}

impl SymbolKind {
    /// Whether this kind declares a type (class, interface or enum).
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            SymbolKind::Class | SymbolKind::Interface | SymbolKind::Enum
        )
    }

    /// Whether this kind is a method (constructors excluded).
    pub fn is_method(&self) -> bool {
        matches!(self, SymbolKind::Method)
    }
}

/// Semantic modifier on a symbol.
///
/// This enum is `#[non_exhaustive]` so modifiers can be added without
/// breaking downstream matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Modifier {
    /// `static` member or nested type.
    Static,
    /// `abstract` method or class.
    Abstract,
    /// `final` method, class or variable.
    Final,
    /// `default` interface method.
    Default,
}

/// How a type inherits from one of its parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InheritanceKind {
    /// `extends`: the superclass of a class, or a super-interface of an interface.
    #[default]
    Extends,
    /// `implements`: an interface implemented by a class or enum.
    Implements,
}

// ============================================================================
// Facts Tables
// ============================================================================

/// A source file in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// Unique identifier for this file.
    pub file_id: FileId,
    /// Workspace-relative path.
    pub path: String,
}

impl File {
    /// Create a new file entry.
    pub fn new(file_id: FileId, path: impl Into<String>) -> Self {
        File {
            file_id,
            path: path.into(),
        }
    }
}

/// A symbol definition (type, method, field, etc.).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Unique identifier for this symbol.
    pub symbol_id: SymbolId,
    /// Kind of symbol.
    pub kind: SymbolKind,
    /// Symbol name (empty for anonymous classes).
    pub name: String,
    /// File where this symbol is declared.
    pub decl_file_id: FileId,
    /// Byte span of the symbol name in the declaration.
    pub decl_span: Span,
    /// Container symbol (owning type of a method, enclosing type of a member class).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_symbol_id: Option<SymbolId>,
    /// Declared modifiers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
}

impl Symbol {
    /// Create a new symbol entry with no container or modifiers.
    pub fn new(
        symbol_id: SymbolId,
        kind: SymbolKind,
        name: impl Into<String>,
        decl_file_id: FileId,
        decl_span: Span,
    ) -> Self {
        Symbol {
            symbol_id,
            kind,
            name: name.into(),
            decl_file_id,
            decl_span,
            container_symbol_id: None,
            modifiers: Vec::new(),
        }
    }

    /// Set the container symbol.
    pub fn with_container(mut self, container: SymbolId) -> Self {
        self.container_symbol_id = Some(container);
        self
    }

    /// Add a modifier.
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        if !self.modifiers.contains(&modifier) {
            self.modifiers.push(modifier);
        }
        self
    }

    /// Check for a declared modifier.
    pub fn has(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Whether the symbol is explicitly declared `static`.
    pub fn is_static(&self) -> bool {
        self.has(Modifier::Static)
    }
}

/// Inheritance relationship between types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritanceInfo {
    /// The child type (subtype).
    pub child_id: SymbolId,
    /// The parent type (supertype).
    pub parent_id: SymbolId,
    /// `extends` or `implements`.
    #[serde(default)]
    pub kind: InheritanceKind,
}

impl InheritanceInfo {
    /// Create an `extends` relationship.
    pub fn extends(child_id: SymbolId, parent_id: SymbolId) -> Self {
        InheritanceInfo {
            child_id,
            parent_id,
            kind: InheritanceKind::Extends,
        }
    }

    /// Create an `implements` relationship.
    pub fn implements(child_id: SymbolId, parent_id: SymbolId) -> Self {
        InheritanceInfo {
            child_id,
            parent_id,
            kind: InheritanceKind::Implements,
        }
    }
}

/// Serialized form of a [`FactsStore`].
///
/// Only the primary tables are serialized; indexes are rebuilt on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactsSnapshot {
    #[serde(default)]
    pub files: Vec<File>,
    #[serde(default)]
    pub symbols: Vec<Symbol>,
    #[serde(default)]
    pub inheritance: Vec<InheritanceInfo>,
}

// ============================================================================
// FactsStore
// ============================================================================

/// In-memory store for the resolved model of one snapshot.
///
/// Provides:
/// - Lookup by ID for files and symbols
/// - Postings lists for member and name queries
/// - Deterministic iteration order (sorted by ID)
#[derive(Debug)]
pub struct FactsStore {
    /// Schema version for serialization compatibility checks.
    pub schema_version: u32,

    // Primary storage (BTreeMap for deterministic iteration)
    files: BTreeMap<FileId, File>,
    symbols: BTreeMap<SymbolId, Symbol>,

    // Inheritance relationships
    inheritance: Vec<InheritanceInfo>,
    /// class_symbol_id → superclass_symbol_id (first `extends` edge wins)
    superclass_of: HashMap<SymbolId, SymbolId>,
    /// child_symbol_id → parent_symbol_ids[] (declaration order)
    parents_of: HashMap<SymbolId, Vec<SymbolId>>,
    /// parent_symbol_id → child_symbol_ids[]
    children_of: HashMap<SymbolId, Vec<SymbolId>>,

    // Secondary indexes
    /// Map from file path to FileId.
    file_by_path: HashMap<String, FileId>,
    /// Map from symbol name to SymbolIds (multiple symbols can have same name).
    symbols_by_name: HashMap<String, Vec<SymbolId>>,
    /// container_symbol_id → member symbol_ids[].
    members_by_container: HashMap<SymbolId, Vec<SymbolId>>,

    // ID generators
    next_file_id: u32,
    next_symbol_id: u32,
}

impl Default for FactsStore {
    fn default() -> Self {
        FactsStore {
            schema_version: FACTS_SCHEMA_VERSION,
            files: BTreeMap::new(),
            symbols: BTreeMap::new(),
            inheritance: Vec::new(),
            superclass_of: HashMap::new(),
            parents_of: HashMap::new(),
            children_of: HashMap::new(),
            file_by_path: HashMap::new(),
            symbols_by_name: HashMap::new(),
            members_by_container: HashMap::new(),
            next_file_id: 0,
            next_symbol_id: 0,
        }
    }
}

impl FactsStore {
    /// Create a new empty FactsStore.
    pub fn new() -> Self {
        FactsStore::default()
    }

    /// Build a store from its serialized tables, rebuilding every index.
    ///
    /// References between tables are not validated here: a symbol whose
    /// container is missing is stored as-is and surfaces later, when a rule
    /// needs to resolve it.
    pub fn from_snapshot(snapshot: FactsSnapshot) -> Self {
        let mut store = FactsStore::new();
        for file in snapshot.files {
            store.next_file_id = store.next_file_id.max(file.file_id.0 + 1);
            store.insert_file(file);
        }
        for symbol in snapshot.symbols {
            store.next_symbol_id = store.next_symbol_id.max(symbol.symbol_id.0 + 1);
            store.insert_symbol(symbol);
        }
        for info in snapshot.inheritance {
            store.insert_inheritance(info);
        }
        store
    }

    /// Serialize the primary tables.
    pub fn to_snapshot(&self) -> FactsSnapshot {
        FactsSnapshot {
            files: self.files.values().cloned().collect(),
            symbols: self.symbols.values().cloned().collect(),
            inheritance: self.inheritance.clone(),
        }
    }

    // ========================================================================
    // ID Generation
    // ========================================================================

    /// Generate the next FileId.
    pub fn next_file_id(&mut self) -> FileId {
        let id = FileId::new(self.next_file_id);
        self.next_file_id += 1;
        id
    }

    /// Generate the next SymbolId.
    pub fn next_symbol_id(&mut self) -> SymbolId {
        let id = SymbolId::new(self.next_symbol_id);
        self.next_symbol_id += 1;
        id
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert a file.
    pub fn insert_file(&mut self, file: File) {
        self.file_by_path.insert(file.path.clone(), file.file_id);
        self.files.insert(file.file_id, file);
    }

    /// Insert a symbol.
    pub fn insert_symbol(&mut self, symbol: Symbol) {
        // Update name index
        self.symbols_by_name
            .entry(symbol.name.clone())
            .or_default()
            .push(symbol.symbol_id);

        // Update member index
        if let Some(container) = symbol.container_symbol_id {
            self.members_by_container
                .entry(container)
                .or_default()
                .push(symbol.symbol_id);
        }

        self.symbols.insert(symbol.symbol_id, symbol);
    }

    /// Insert an inheritance relationship.
    ///
    /// Records that `child_id` inherits from `parent_id`. The first `extends`
    /// edge recorded for a child is its superclass; later ones are kept as
    /// parents only.
    pub fn insert_inheritance(&mut self, info: InheritanceInfo) {
        if info.kind == InheritanceKind::Extends {
            self.superclass_of
                .entry(info.child_id)
                .or_insert(info.parent_id);
        }

        self.parents_of
            .entry(info.child_id)
            .or_default()
            .push(info.parent_id);

        self.children_of
            .entry(info.parent_id)
            .or_default()
            .push(info.child_id);

        self.inheritance.push(info);
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Get a file by ID.
    pub fn file(&self, id: FileId) -> Option<&File> {
        self.files.get(&id)
    }

    /// Get a file by path.
    pub fn file_by_path(&self, path: &str) -> Option<&File> {
        self.file_by_path
            .get(path)
            .and_then(|id| self.files.get(id))
    }

    /// Get a symbol by ID.
    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(&id)
    }

    /// Number of symbols in the store.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// All symbols, ordered by ID.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    /// Get all symbols with a given name.
    ///
    /// Returns symbols in deterministic order (by SymbolId).
    pub fn symbols_named(&self, name: &str) -> Vec<&Symbol> {
        self.symbols_by_name
            .get(name)
            .map(|ids| {
                let mut symbols: Vec<_> =
                    ids.iter().filter_map(|id| self.symbols.get(id)).collect();
                symbols.sort_by_key(|s| s.symbol_id);
                symbols
            })
            .unwrap_or_default()
    }

    /// Get the symbols a container declares directly.
    ///
    /// Returns symbols in deterministic order (by SymbolId).
    pub fn members_of(&self, container: SymbolId) -> Vec<&Symbol> {
        self.members_by_container
            .get(&container)
            .map(|ids| {
                let mut symbols: Vec<_> =
                    ids.iter().filter_map(|id| self.symbols.get(id)).collect();
                symbols.sort_by_key(|s| s.symbol_id);
                symbols
            })
            .unwrap_or_default()
    }

    /// Get the recorded superclass of a type, if any.
    pub fn superclass_of(&self, symbol_id: SymbolId) -> Option<SymbolId> {
        self.superclass_of.get(&symbol_id).copied()
    }

    /// Get all child types of a type.
    ///
    /// Returns the symbol IDs of types that directly inherit from the given type.
    pub fn children_of_class(&self, symbol_id: SymbolId) -> Vec<SymbolId> {
        self.children_of
            .get(&symbol_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Get all parent types of a type, in declaration order.
    ///
    /// Returns the symbol IDs of types that the given type directly inherits from.
    pub fn parents_of_class(&self, symbol_id: SymbolId) -> Vec<SymbolId> {
        self.parents_of.get(&symbol_id).cloned().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> Span {
        Span::new(0, 1)
    }

    mod store {
        use super::*;

        #[test]
        fn insert_and_lookup_symbol() {
            let mut store = FactsStore::new();
            let file_id = store.next_file_id();
            store.insert_file(File::new(file_id, "Outer.java"));

            let outer = store.next_symbol_id();
            let method = store.next_symbol_id();
            store.insert_symbol(Symbol::new(outer, SymbolKind::Class, "Outer", file_id, span()));
            store.insert_symbol(
                Symbol::new(method, SymbolKind::Method, "m", file_id, span()).with_container(outer),
            );

            assert_eq!(store.symbol(outer).map(|s| s.name.as_str()), Some("Outer"));
            assert_eq!(store.file_by_path("Outer.java").map(|f| f.file_id), Some(file_id));
            let members: Vec<_> = store.members_of(outer).iter().map(|s| s.symbol_id).collect();
            assert_eq!(members, vec![method]);
        }

        #[test]
        fn symbols_named_is_sorted() {
            let mut store = FactsStore::new();
            let file_id = FileId::new(0);
            store.insert_symbol(Symbol::new(SymbolId(7), SymbolKind::Method, "m", file_id, span()));
            store.insert_symbol(Symbol::new(SymbolId(2), SymbolKind::Method, "m", file_id, span()));

            let ids: Vec<_> = store.symbols_named("m").iter().map(|s| s.symbol_id).collect();
            assert_eq!(ids, vec![SymbolId(2), SymbolId(7)]);
            assert!(store.symbols_named("missing").is_empty());
        }

        #[test]
        fn first_extends_edge_is_superclass() {
            let mut store = FactsStore::new();
            store.insert_inheritance(InheritanceInfo::implements(SymbolId(0), SymbolId(3)));
            store.insert_inheritance(InheritanceInfo::extends(SymbolId(0), SymbolId(1)));
            store.insert_inheritance(InheritanceInfo::extends(SymbolId(0), SymbolId(2)));

            assert_eq!(store.superclass_of(SymbolId(0)), Some(SymbolId(1)));
            assert_eq!(
                store.parents_of_class(SymbolId(0)),
                vec![SymbolId(3), SymbolId(1), SymbolId(2)]
            );
            assert_eq!(store.children_of_class(SymbolId(1)), vec![SymbolId(0)]);
        }
    }

    mod snapshot {
        use super::*;

        #[test]
        fn from_snapshot_rebuilds_indexes_and_id_counters() {
            let file_id = FileId::new(0);
            let snapshot = FactsSnapshot {
                files: vec![File::new(file_id, "A.java")],
                symbols: vec![
                    Symbol::new(SymbolId(0), SymbolKind::Class, "A", file_id, span()),
                    Symbol::new(SymbolId(4), SymbolKind::Method, "run", file_id, span())
                        .with_container(SymbolId(0))
                        .with_modifier(Modifier::Static),
                ],
                inheritance: vec![],
            };

            let mut store = FactsStore::from_snapshot(snapshot.clone());
            assert_eq!(store.members_of(SymbolId(0)).len(), 1);
            assert!(store.symbol(SymbolId(4)).is_some_and(Symbol::is_static));
            assert_eq!(store.next_symbol_id(), SymbolId(5));
            assert_eq!(store.next_file_id(), FileId(1));
            assert_eq!(store.to_snapshot(), snapshot);
        }

        #[test]
        fn symbol_json_omits_empty_optionals() {
            let symbol = Symbol::new(SymbolId(1), SymbolKind::Method, "m", FileId(0), span());
            let json = serde_json::to_value(&symbol).unwrap();
            assert_eq!(json["kind"], "method");
            assert!(json.get("container_symbol_id").is_none());
            assert!(json.get("modifiers").is_none());
        }

        #[test]
        fn inheritance_kind_defaults_to_extends() {
            let info: InheritanceInfo =
                serde_json::from_str(r#"{"child_id": 1, "parent_id": 0}"#).unwrap();
            assert_eq!(info.kind, InheritanceKind::Extends);
        }
    }
}
