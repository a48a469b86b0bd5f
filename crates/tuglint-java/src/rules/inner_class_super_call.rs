// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! S2388: inner class calls to super class methods should be unambiguous.
//!
//! Inside an inner class, an unqualified call `m()` reads as if it could
//! bind to the enclosing class. When the enclosing class does have a member
//! named `m` but the call actually resolves to a method inherited from one of
//! the inner class's own ancestors, the reader's expectation and the real
//! binding differ. Such calls should be written `super.m()`.
//!
//! ```java
//! class Outer {
//!     void m() {}
//!     class Inner extends Base {   // Base declares m()
//!         void n() { m(); }        // flagged: resolves to Base.m
//!     }
//! }
//! ```
//!
//! Three pieces:
//! - [`inner_class`]: decides whether a declaration is an inner class whose
//!   superclass is not its enclosing class
//! - [`is_ambiguous_inherited_call`]: decides whether one call site is ambiguous
//! - [`check`]: walks the body of an eligible declaration and reports each
//!   ambiguous call in source order

use tracing::trace;
use tuglint_core::error::CheckError;
use tuglint_core::facts::{SymbolId, SymbolKind};
use tuglint_core::query::SymbolQuery;
use tuglint_core::span::FileId;

use super::{Priority, Remediation, Rule, RuleContext, RuleMetadata};
use crate::finding::Finding;
use crate::tree::{ClassTree, TypeKind};
use crate::visitor::{InvocationCollector, InvocationSite};

/// Rule key.
pub const RULE_KEY: &str = "S2388";

static METADATA: RuleMetadata = RuleMetadata {
    key: RULE_KEY,
    name: "Inner class calls to super class methods should be unambiguous",
    description: "An unqualified call inside an inner class that resolves to a method \
                  inherited from the inner class's superclass chain is ambiguous when the \
                  enclosing class also has a member of that name. Prefix the call with \
                  \"super.\" to make the binding explicit.",
    tags: &["pitfall"],
    priority: Priority::Major,
    activated_by_default: true,
    remediation: Remediation::Constant { minutes: 5 },
};

static NODES: [TypeKind; 2] = [TypeKind::Class, TypeKind::Interface];

/// Message reported for a call to `name`.
pub fn message(name: &str) -> String {
    format!("Prefix this call to \"{}\" with \"super.\".", name)
}

/// The S2388 rule.
#[derive(Debug, Default, Clone, Copy)]
pub struct InnerClassSuperCall;

impl InnerClassSuperCall {
    pub fn new() -> Self {
        InnerClassSuperCall
    }
}

impl Rule for InnerClassSuperCall {
    fn metadata(&self) -> &RuleMetadata {
        &METADATA
    }

    fn nodes_to_visit(&self) -> &[TypeKind] {
        &NODES
    }

    fn visit_node(
        &self,
        ctx: &RuleContext<'_>,
        tree: &ClassTree,
    ) -> Result<Vec<Finding>, CheckError> {
        check(ctx.model, ctx.file_id, tree)
    }
}

// ============================================================================
// Nesting Classifier
// ============================================================================

/// An inner class eligible for checking, with its enclosing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InnerClass {
    /// The inner class.
    pub symbol: SymbolId,
    /// Its lexically enclosing type.
    pub enclosing: SymbolId,
}

/// The enclosing type of `decl`, if it is an inner (non-static nested) type.
///
/// Returns `Ok(None)` for top-level types, static nested types, types nested
/// in a method or initializer, and declarations without a resolved symbol.
/// Nested interfaces and enums, and types declared in an interface, are
/// implicitly static.
pub fn enclosing_type<M: SymbolQuery + ?Sized>(
    model: &M,
    decl: &ClassTree,
) -> Result<Option<SymbolId>, CheckError> {
    let Some(id) = decl.symbol else {
        return Ok(None);
    };
    let symbol = model.symbol(id).ok_or_else(|| CheckError::UnknownSymbol {
        declaration: decl.display_name().to_string(),
        symbol: id,
    })?;
    if !symbol.kind.is_type() {
        return Err(CheckError::NotAType {
            declaration: decl.display_name().to_string(),
            symbol: id,
        });
    }
    let Some(container_id) = symbol.container_symbol_id else {
        return Ok(None);
    };
    let container = model
        .symbol(container_id)
        .ok_or_else(|| CheckError::UnresolvedContainer {
            declaration: decl.display_name().to_string(),
            container: container_id,
        })?;
    if !container.kind.is_type() {
        return Ok(None);
    }
    let implicitly_static =
        symbol.kind != SymbolKind::Class || container.kind == SymbolKind::Interface;
    if symbol.is_static() || implicitly_static {
        return Ok(None);
    }
    Ok(Some(container_id))
}

/// Classify `decl`: `Some` when it is an inner class whose direct
/// superclass is not its enclosing type.
pub fn inner_class<M: SymbolQuery + ?Sized>(
    model: &M,
    decl: &ClassTree,
) -> Result<Option<InnerClass>, CheckError> {
    let (Some(symbol), Some(enclosing)) = (decl.symbol, enclosing_type(model, decl)?) else {
        return Ok(None);
    };
    if model.direct_superclass(symbol) == Some(enclosing) {
        return Ok(None);
    }
    Ok(Some(InnerClass { symbol, enclosing }))
}

/// Whether `decl` is an inner class eligible for checking.
pub fn is_eligible_inner_class<M: SymbolQuery + ?Sized>(
    model: &M,
    decl: &ClassTree,
) -> Result<bool, CheckError> {
    Ok(inner_class(model, decl)?.is_some())
}

// ============================================================================
// Ambiguity Predicate
// ============================================================================

/// Whether an unqualified call inside `inner` is ambiguous.
///
/// All must hold:
/// 1. the call resolves to a method
/// 2. the method is not static
/// 3. its owner is a strict ancestor of the inner class
/// 4. its owner is not the enclosing type
/// 5. the enclosing type has some member with the called name
///
/// The member lookup in step 5 is unfiltered: static and private members of
/// the enclosing type count. Missing data makes the call unambiguous.
pub fn is_ambiguous_inherited_call<M: SymbolQuery + ?Sized>(
    model: &M,
    site: &InvocationSite<'_>,
    inner: &InnerClass,
) -> bool {
    let Some(method) = site.symbol.and_then(|id| model.symbol(id)) else {
        return false;
    };
    if !method.kind.is_method() || method.is_static() {
        return false;
    }
    let Some(owner) = method.container_symbol_id else {
        return false;
    };
    if owner == inner.symbol || owner == inner.enclosing {
        return false;
    }
    if !model.is_subtype_of(inner.symbol, owner) {
        return false;
    }
    !model.lookup_members(inner.enclosing, site.name).is_empty()
}

// ============================================================================
// Traversal Driver
// ============================================================================

/// Check one declaration, returning findings in source order.
///
/// Only the declaration's own body is walked. Nested class declarations are
/// checked when the engine reaches them.
pub fn check<M: SymbolQuery + ?Sized>(
    model: &M,
    file_id: FileId,
    decl: &ClassTree,
) -> Result<Vec<Finding>, CheckError> {
    let Some(inner) = inner_class(model, decl)? else {
        trace!(class = decl.display_name(), "not an eligible inner class");
        return Ok(Vec::new());
    };

    let findings: Vec<Finding> = InvocationCollector::collect(decl)
        .into_iter()
        .filter(|site| is_ambiguous_inherited_call(model, site, &inner))
        .map(|site| Finding {
            rule_key: RULE_KEY,
            file_id,
            span: site.span,
            method_name: site.name.to_string(),
            message: message(site.name),
        })
        .collect();

    trace!(
        class = decl.display_name(),
        findings = findings.len(),
        "checked inner class"
    );
    Ok(findings)
}
