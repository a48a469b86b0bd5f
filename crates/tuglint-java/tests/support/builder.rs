//! Model builder for integration tests.

use tuglint_core::facts::{
    FactsStore, File, InheritanceInfo, Modifier, Symbol, SymbolId, SymbolKind,
};
use tuglint_core::span::{FileId, Span};
use tuglint_java::snapshot::Snapshot;
use tuglint_java::tree::{ClassTree, CompilationUnit};

/// Builds a [`FactsStore`] one declaration at a time.
pub struct ModelBuilder {
    store: FactsStore,
    file_id: FileId,
}

#[allow(dead_code)]
impl ModelBuilder {
    /// Start a model with a single source file at `path`.
    pub fn new(path: &str) -> Self {
        let mut store = FactsStore::new();
        let file_id = store.next_file_id();
        store.insert_file(File::new(file_id, path));
        ModelBuilder { store, file_id }
    }

    pub fn file_id(&self) -> FileId {
        self.file_id
    }

    fn declare(
        &mut self,
        kind: SymbolKind,
        name: &str,
        container: Option<SymbolId>,
        modifiers: &[Modifier],
    ) -> SymbolId {
        let id = self.store.next_symbol_id();
        let mut symbol = Symbol::new(id, kind, name, self.file_id, Span::default());
        if let Some(container) = container {
            symbol = symbol.with_container(container);
        }
        for modifier in modifiers {
            symbol = symbol.with_modifier(*modifier);
        }
        self.store.insert_symbol(symbol);
        id
    }

    /// Declare a top-level class.
    pub fn class(&mut self, name: &str) -> SymbolId {
        self.declare(SymbolKind::Class, name, None, &[])
    }

    /// Declare a top-level interface.
    pub fn interface(&mut self, name: &str) -> SymbolId {
        self.declare(SymbolKind::Interface, name, None, &[])
    }

    /// Declare a class nested in `container` (a type, method or anything else).
    pub fn nested_class(&mut self, name: &str, container: SymbolId) -> SymbolId {
        self.declare(SymbolKind::Class, name, Some(container), &[])
    }

    /// Declare a `static` class nested in `container`.
    pub fn static_nested_class(&mut self, name: &str, container: SymbolId) -> SymbolId {
        self.declare(SymbolKind::Class, name, Some(container), &[Modifier::Static])
    }

    /// Declare an instance method.
    pub fn method(&mut self, name: &str, owner: SymbolId) -> SymbolId {
        self.declare(SymbolKind::Method, name, Some(owner), &[])
    }

    /// Declare a static method.
    pub fn static_method(&mut self, name: &str, owner: SymbolId) -> SymbolId {
        self.declare(SymbolKind::Method, name, Some(owner), &[Modifier::Static])
    }

    /// Declare a field.
    pub fn field(&mut self, name: &str, owner: SymbolId) -> SymbolId {
        self.declare(SymbolKind::Field, name, Some(owner), &[])
    }

    pub fn extends(&mut self, child: SymbolId, parent: SymbolId) -> &mut Self {
        self.store
            .insert_inheritance(InheritanceInfo::extends(child, parent));
        self
    }

    pub fn implements(&mut self, child: SymbolId, parent: SymbolId) -> &mut Self {
        self.store
            .insert_inheritance(InheritanceInfo::implements(child, parent));
        self
    }

    /// Finish with the given top-level trees as the file's only unit.
    pub fn build(self, types: Vec<ClassTree>) -> Snapshot {
        Snapshot {
            units: vec![CompilationUnit {
                file_id: self.file_id,
                package: None,
                types,
            }],
            store: self.store,
        }
    }
}
