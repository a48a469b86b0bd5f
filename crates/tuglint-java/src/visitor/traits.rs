// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definitions for tree traversal.

use crate::tree::{
    CatchTree, ClassTree, CompilationUnit, Expression, Member, MethodInvocation, MethodTree,
    Statement, VariableTree,
};

/// Result of visiting a node - controls traversal behavior.
///
/// When a visitor method returns a `VisitResult`, it controls how the walker
/// proceeds with traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Continue traversal into children.
    ///
    /// After visiting children, `leave_*` will be called for this node.
    #[default]
    Continue,

    /// Skip children, continue with siblings.
    ///
    /// The walker will not descend into this node's children, but `leave_*`
    /// will still be called for this node.
    SkipChildren,

    /// Stop traversal entirely.
    ///
    /// No further `visit_*` or `leave_*` methods will be called. The walk
    /// function will return immediately.
    Stop,
}

/// Generates `visit_*` / `leave_*` pairs with default implementations.
///
/// ```ignore
/// visitor_methods! { 'a;
///     visit_class, leave_class: ClassTree,
/// }
/// ```
macro_rules! visitor_methods {
    ($lt:lifetime;
        $(
            $(#[$meta:meta])*
            $visit:ident, $leave:ident : $node_type:ty
        ),* $(,)?
    ) => {
        $(
            $(#[$meta])*
            #[doc = concat!("Visit a [`", stringify!($node_type), "`] node.")]
            #[doc = ""]
            #[doc = "Called before descending into children. Return `VisitResult` to control traversal."]
            #[allow(unused_variables)]
            fn $visit(&mut self, node: &$lt $node_type) -> VisitResult {
                VisitResult::Continue
            }

            $(#[$meta])*
            #[doc = concat!("Leave a [`", stringify!($node_type), "`] node.")]
            #[doc = ""]
            #[doc = "Called after all children have been visited. Called even if `SkipChildren` was returned."]
            #[allow(unused_variables)]
            fn $leave(&mut self, node: &$lt $node_type) {}
        )*
    };
}

/// Immutable visitor for tree traversal.
///
/// Implement this trait to traverse a tree without modifying it. Each node
/// kind has a `visit_*` method (called before children) and a `leave_*`
/// method (called after children). Nodes are borrowed for `'a`, so a visitor
/// may keep references into the tree it walks.
///
/// Generic hooks (`visit_statement`, `visit_expression`) fire for every node
/// of that category; specific hooks (`visit_method_invocation`) fire after the
/// generic one for the matching variant.
pub trait Visitor<'a> {
    visitor_methods! { 'a;
        visit_compilation_unit, leave_compilation_unit: CompilationUnit,
        visit_class, leave_class: ClassTree,
        visit_member, leave_member: Member,
        visit_method, leave_method: MethodTree,
        visit_variable, leave_variable: VariableTree,
        visit_catch, leave_catch: CatchTree,
        visit_statement, leave_statement: Statement,
        visit_expression, leave_expression: Expression,
        visit_method_invocation, leave_method_invocation: MethodInvocation,
    }
}
