//! Capability traits through which rules read the resolved model.
//!
//! Rules never inspect storage directly. They ask two narrow questions:
//! - [`TypeQuery`]: hierarchy shape (superclass, supertypes, subtyping)
//! - [`SymbolQuery`]: symbol facts (kind, owner, static-ness, member lookup)
//!
//! [`FactsStore`] implements both. Test doubles can implement them over any
//! other representation.

use std::collections::{HashSet, VecDeque};

use crate::facts::{FactsStore, Symbol, SymbolId, SymbolKind};

/// Queries over the type hierarchy.
pub trait TypeQuery {
    /// The direct superclass of a class, if recorded.
    ///
    /// Interfaces have no superclass; their `extends` edges are
    /// super-interfaces and appear only in [`TypeQuery::supertypes`].
    fn direct_superclass(&self, ty: SymbolId) -> Option<SymbolId>;

    /// All direct supertypes (superclass and interfaces) in declaration order.
    fn supertypes(&self, ty: SymbolId) -> Vec<SymbolId>;

    /// Whether `sub` is `sup` or inherits from it, transitively.
    ///
    /// Cycles in malformed hierarchies terminate: each type is visited once.
    fn is_subtype_of(&self, sub: SymbolId, sup: SymbolId) -> bool {
        if sub == sup {
            return true;
        }
        let mut seen = HashSet::from([sub]);
        let mut queue = VecDeque::from([sub]);
        while let Some(current) = queue.pop_front() {
            for parent in self.supertypes(current) {
                if parent == sup {
                    return true;
                }
                if seen.insert(parent) {
                    queue.push_back(parent);
                }
            }
        }
        false
    }
}

/// Queries over symbols and type members.
pub trait SymbolQuery: TypeQuery {
    /// Look up a symbol by ID.
    fn symbol(&self, id: SymbolId) -> Option<&Symbol>;

    /// Symbols declared directly in the body of `container` named `name`.
    fn declared_members(&self, container: SymbolId, name: &str) -> Vec<SymbolId>;

    /// The container (owner) of a symbol.
    fn owner_of(&self, id: SymbolId) -> Option<SymbolId> {
        self.symbol(id).and_then(|s| s.container_symbol_id)
    }

    /// The kind of a symbol.
    fn kind_of(&self, id: SymbolId) -> Option<SymbolKind> {
        self.symbol(id).map(|s| s.kind)
    }

    /// Whether a symbol is declared `static`. Unknown symbols are not static.
    fn is_static(&self, id: SymbolId) -> bool {
        self.symbol(id).is_some_and(Symbol::is_static)
    }

    /// Members named `name` visible in the scope of type `ty`.
    ///
    /// Includes members declared by `ty` itself followed by members inherited
    /// from its supertypes, breadth first, each type visited once. No
    /// filtering by kind, static-ness or accessibility is applied.
    fn lookup_members(&self, ty: SymbolId, name: &str) -> Vec<SymbolId> {
        let mut found = Vec::new();
        let mut seen = HashSet::from([ty]);
        let mut queue = VecDeque::from([ty]);
        while let Some(current) = queue.pop_front() {
            for member in self.declared_members(current, name) {
                if !found.contains(&member) {
                    found.push(member);
                }
            }
            for parent in self.supertypes(current) {
                if seen.insert(parent) {
                    queue.push_back(parent);
                }
            }
        }
        found
    }
}

impl TypeQuery for FactsStore {
    fn direct_superclass(&self, ty: SymbolId) -> Option<SymbolId> {
        match self.symbol(ty).map(|s| s.kind) {
            Some(SymbolKind::Interface) => None,
            _ => self.superclass_of(ty),
        }
    }

    fn supertypes(&self, ty: SymbolId) -> Vec<SymbolId> {
        self.parents_of_class(ty)
    }
}

impl SymbolQuery for FactsStore {
    fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        FactsStore::symbol(self, id)
    }

    fn declared_members(&self, container: SymbolId, name: &str) -> Vec<SymbolId> {
        self.members_of(container)
            .into_iter()
            .filter(|s| s.name == name)
            .map(|s| s.symbol_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{InheritanceInfo, Modifier, Symbol};
    use crate::span::{FileId, Span};

    fn add(store: &mut FactsStore, kind: SymbolKind, name: &str, container: Option<SymbolId>) -> SymbolId {
        let id = store.next_symbol_id();
        let mut symbol = Symbol::new(id, kind, name, FileId(0), Span::new(0, 0));
        if let Some(container) = container {
            symbol = symbol.with_container(container);
        }
        store.insert_symbol(symbol);
        id
    }

    mod hierarchy {
        use super::*;

        #[test]
        fn subtype_is_reflexive_and_transitive() {
            let mut store = FactsStore::new();
            let a = add(&mut store, SymbolKind::Class, "A", None);
            let b = add(&mut store, SymbolKind::Class, "B", None);
            let c = add(&mut store, SymbolKind::Class, "C", None);
            store.insert_inheritance(InheritanceInfo::extends(b, a));
            store.insert_inheritance(InheritanceInfo::extends(c, b));

            assert!(store.is_subtype_of(c, c));
            assert!(store.is_subtype_of(c, a));
            assert!(!store.is_subtype_of(a, c));
        }

        #[test]
        fn subtype_through_interfaces() {
            let mut store = FactsStore::new();
            let runnable = add(&mut store, SymbolKind::Interface, "Runnable", None);
            let task = add(&mut store, SymbolKind::Interface, "Task", None);
            let job = add(&mut store, SymbolKind::Class, "Job", None);
            store.insert_inheritance(InheritanceInfo::extends(task, runnable));
            store.insert_inheritance(InheritanceInfo::implements(job, task));

            assert!(store.is_subtype_of(job, runnable));
            assert_eq!(store.direct_superclass(job), None);
            assert_eq!(store.direct_superclass(task), None);
        }

        #[test]
        fn cyclic_hierarchy_terminates() {
            let mut store = FactsStore::new();
            let a = add(&mut store, SymbolKind::Class, "A", None);
            let b = add(&mut store, SymbolKind::Class, "B", None);
            let unrelated = add(&mut store, SymbolKind::Class, "X", None);
            store.insert_inheritance(InheritanceInfo::extends(a, b));
            store.insert_inheritance(InheritanceInfo::extends(b, a));

            assert!(store.is_subtype_of(a, b));
            assert!(!store.is_subtype_of(a, unrelated));
        }
    }

    mod members {
        use super::*;

        #[test]
        fn lookup_includes_inherited_members_own_first() {
            let mut store = FactsStore::new();
            let base = add(&mut store, SymbolKind::Class, "Base", None);
            let base_m = add(&mut store, SymbolKind::Method, "m", Some(base));
            let outer = add(&mut store, SymbolKind::Class, "Outer", None);
            let outer_m = add(&mut store, SymbolKind::Method, "m", Some(outer));
            store.insert_inheritance(InheritanceInfo::extends(outer, base));

            assert_eq!(store.lookup_members(outer, "m"), vec![outer_m, base_m]);
            assert_eq!(store.lookup_members(base, "m"), vec![base_m]);
            assert!(store.lookup_members(outer, "n").is_empty());
        }

        #[test]
        fn lookup_is_unfiltered() {
            let mut store = FactsStore::new();
            let outer = add(&mut store, SymbolKind::Class, "Outer", None);
            let id = store.next_symbol_id();
            store.insert_symbol(
                Symbol::new(id, SymbolKind::Field, "m", FileId(0), Span::new(0, 0))
                    .with_container(outer)
                    .with_modifier(Modifier::Static),
            );

            assert_eq!(store.lookup_members(outer, "m"), vec![id]);
            assert!(store.is_static(id));
            assert_eq!(store.kind_of(id), Some(SymbolKind::Field));
            assert_eq!(store.owner_of(id), Some(outer));
        }
    }
}
