// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk functions for tree traversal.
//!
//! - **Pre-order**: `visit_*` is called before descending into children
//! - **Post-order**: `leave_*` is called after all children have been visited
//! - **Source order**: Children are visited left-to-right, top-to-bottom
//!
//! # Control Flow
//!
//! - `VisitResult::Continue` - traverse into children
//! - `VisitResult::SkipChildren` - skip children but still call `leave_*`
//! - `VisitResult::Stop` - halt traversal immediately (no `leave_*` called)

use super::traits::{VisitResult, Visitor};
use crate::tree::{
    CaseTree, CatchTree, ClassTree, CompilationUnit, Expression, LambdaBody, Member, MethodInvocation,
    MethodSelect, MethodTree, Statement, VariableTree,
};

/// Propagate `Stop` out of the enclosing walk function.
macro_rules! walk_or_stop {
    ($walk:expr) => {
        if $walk == VisitResult::Stop {
            return VisitResult::Stop;
        }
    };
}

// ============================================================================
// Unit and declaration walks
// ============================================================================

/// Walk a [`CompilationUnit`] and every top-level type in it.
pub fn walk_compilation_unit<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &'a CompilationUnit,
) -> VisitResult {
    match visitor.visit_compilation_unit(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for class in &node.types {
                walk_or_stop!(walk_class(visitor, class));
            }
        }
    }
    visitor.leave_compilation_unit(node);
    VisitResult::Continue
}

/// Walk a [`ClassTree`] node.
///
/// Traversal order:
/// 1. `visit_class`
/// 2. Walk each member (in source order)
/// 3. `leave_class`
pub fn walk_class<'a, V: Visitor<'a>>(visitor: &mut V, node: &'a ClassTree) -> VisitResult {
    match visitor.visit_class(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for member in &node.members {
                walk_or_stop!(walk_member(visitor, member));
            }
        }
    }
    visitor.leave_class(node);
    VisitResult::Continue
}

/// Walk a class body [`Member`].
pub fn walk_member<'a, V: Visitor<'a>>(visitor: &mut V, node: &'a Member) -> VisitResult {
    match visitor.visit_member(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let inner = match node {
                Member::Method(method) | Member::Constructor(method) => walk_method(visitor, method),
                Member::Field(field) => walk_variable(visitor, field),
                Member::Initializer(init) => walk_statements(visitor, &init.body),
                Member::Class(class) => walk_class(visitor, class),
            };
            walk_or_stop!(inner);
        }
    }
    visitor.leave_member(node);
    VisitResult::Continue
}

/// Walk a [`MethodTree`]: parameters, then body.
pub fn walk_method<'a, V: Visitor<'a>>(visitor: &mut V, node: &'a MethodTree) -> VisitResult {
    match visitor.visit_method(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for param in &node.parameters {
                walk_or_stop!(walk_variable(visitor, param));
            }
            if let Some(body) = &node.body {
                walk_or_stop!(walk_statements(visitor, body));
            }
        }
    }
    visitor.leave_method(node);
    VisitResult::Continue
}

/// Walk a [`VariableTree`] and its initializer.
pub fn walk_variable<'a, V: Visitor<'a>>(visitor: &mut V, node: &'a VariableTree) -> VisitResult {
    match visitor.visit_variable(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if let Some(init) = &node.initializer {
                walk_or_stop!(walk_expression(visitor, init));
            }
        }
    }
    visitor.leave_variable(node);
    VisitResult::Continue
}

// ============================================================================
// Statement walks
// ============================================================================

/// Walk a sequence of statements in order.
pub fn walk_statements<'a, V: Visitor<'a>>(visitor: &mut V, nodes: &'a [Statement]) -> VisitResult {
    for stmt in nodes {
        walk_or_stop!(walk_statement(visitor, stmt));
    }
    VisitResult::Continue
}

fn walk_expressions<'a, V: Visitor<'a>>(visitor: &mut V, nodes: &'a [Expression]) -> VisitResult {
    for expr in nodes {
        walk_or_stop!(walk_expression(visitor, expr));
    }
    VisitResult::Continue
}

/// Walk a [`Statement`] node.
pub fn walk_statement<'a, V: Visitor<'a>>(visitor: &mut V, node: &'a Statement) -> VisitResult {
    match visitor.visit_statement(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            walk_or_stop!(walk_statement_children(visitor, node));
        }
    }
    visitor.leave_statement(node);
    VisitResult::Continue
}

fn walk_statement_children<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &'a Statement,
) -> VisitResult {
    match node {
        Statement::Expression { expression }
        | Statement::Throw { expression }
        | Statement::Yield { expression } => walk_expression(visitor, expression),
        Statement::LocalVariable(var) => walk_variable(visitor, var),
        Statement::LocalClass(class) => walk_class(visitor, class),
        Statement::Block { statements } => walk_statements(visitor, statements),
        Statement::Return { expression } => match expression {
            Some(expr) => walk_expression(visitor, expr),
            None => VisitResult::Continue,
        },
        Statement::If {
            condition,
            then_branch,
            else_branch,
        } => {
            walk_or_stop!(walk_expression(visitor, condition));
            walk_or_stop!(walk_statements(visitor, then_branch));
            walk_statements(visitor, else_branch)
        }
        Statement::While { condition, body } => {
            walk_or_stop!(walk_expression(visitor, condition));
            walk_statements(visitor, body)
        }
        Statement::DoWhile { body, condition } => {
            walk_or_stop!(walk_statements(visitor, body));
            walk_expression(visitor, condition)
        }
        Statement::For {
            initializer,
            condition,
            update,
            body,
        } => {
            walk_or_stop!(walk_statements(visitor, initializer));
            if let Some(cond) = condition {
                walk_or_stop!(walk_expression(visitor, cond));
            }
            walk_or_stop!(walk_expressions(visitor, update));
            walk_statements(visitor, body)
        }
        Statement::ForEach {
            variable,
            iterable,
            body,
        } => {
            walk_or_stop!(walk_variable(visitor, variable));
            walk_or_stop!(walk_expression(visitor, iterable));
            walk_statements(visitor, body)
        }
        Statement::Switch { selector, cases } => walk_switch(visitor, selector, cases),
        Statement::Try {
            resources,
            body,
            catches,
            finally,
        } => {
            for resource in resources {
                walk_or_stop!(walk_variable(visitor, resource));
            }
            walk_or_stop!(walk_statements(visitor, body));
            for catch in catches {
                walk_or_stop!(walk_catch(visitor, catch));
            }
            walk_statements(visitor, finally)
        }
        Statement::Synchronized { lock, body } => {
            walk_or_stop!(walk_expression(visitor, lock));
            walk_statements(visitor, body)
        }
        Statement::Labeled { statement, .. } => walk_statement(visitor, statement),
        Statement::Assert { condition, detail } => {
            walk_or_stop!(walk_expression(visitor, condition));
            match detail {
                Some(expr) => walk_expression(visitor, expr),
                None => VisitResult::Continue,
            }
        }
        Statement::Break | Statement::Continue | Statement::Empty => VisitResult::Continue,
    }
}

/// Selector, then each case's labels and body. Shared by switch statements
/// and switch expressions.
fn walk_switch<'a, V: Visitor<'a>>(
    visitor: &mut V,
    selector: &'a Expression,
    cases: &'a [CaseTree],
) -> VisitResult {
    walk_or_stop!(walk_expression(visitor, selector));
    for case in cases {
        walk_or_stop!(walk_expressions(visitor, &case.labels));
        walk_or_stop!(walk_statements(visitor, &case.body));
    }
    VisitResult::Continue
}

/// Walk a [`CatchTree`]: parameter, then body.
pub fn walk_catch<'a, V: Visitor<'a>>(visitor: &mut V, node: &'a CatchTree) -> VisitResult {
    match visitor.visit_catch(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            walk_or_stop!(walk_variable(visitor, &node.parameter));
            walk_or_stop!(walk_statements(visitor, &node.body));
        }
    }
    visitor.leave_catch(node);
    VisitResult::Continue
}

// ============================================================================
// Expression walks
// ============================================================================

/// Walk an [`Expression`] node.
///
/// Method invocations additionally get `visit_method_invocation` /
/// `leave_method_invocation`, nested inside the generic expression hooks.
pub fn walk_expression<'a, V: Visitor<'a>>(visitor: &mut V, node: &'a Expression) -> VisitResult {
    match visitor.visit_expression(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            walk_or_stop!(walk_expression_children(visitor, node));
        }
    }
    visitor.leave_expression(node);
    VisitResult::Continue
}

fn walk_expression_children<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &'a Expression,
) -> VisitResult {
    match node {
        Expression::MethodInvocation(inv) => walk_method_invocation(visitor, inv),
        Expression::Identifier { .. }
        | Expression::Literal { .. }
        | Expression::This { .. }
        | Expression::Super { .. } => VisitResult::Continue,
        Expression::MemberSelect { expression, .. }
        | Expression::Parenthesized { expression }
        | Expression::TypeCast { expression, .. }
        | Expression::InstanceOf { expression, .. }
        | Expression::MethodReference { expression, .. } => walk_expression(visitor, expression),
        Expression::Unary { operand, .. } => walk_expression(visitor, operand),
        Expression::Binary { left, right, .. } => {
            walk_or_stop!(walk_expression(visitor, left));
            walk_expression(visitor, right)
        }
        Expression::Assignment {
            variable,
            expression,
            ..
        } => {
            walk_or_stop!(walk_expression(visitor, variable));
            walk_expression(visitor, expression)
        }
        Expression::Conditional {
            condition,
            if_true,
            if_false,
        } => {
            walk_or_stop!(walk_expression(visitor, condition));
            walk_or_stop!(walk_expression(visitor, if_true));
            walk_expression(visitor, if_false)
        }
        Expression::ArrayAccess { expression, index } => {
            walk_or_stop!(walk_expression(visitor, expression));
            walk_expression(visitor, index)
        }
        Expression::NewArray {
            dimensions,
            initializers,
        } => {
            walk_or_stop!(walk_expressions(visitor, dimensions));
            walk_expressions(visitor, initializers)
        }
        Expression::NewClass {
            enclosing,
            arguments,
            body,
            ..
        } => {
            if let Some(outer) = enclosing {
                walk_or_stop!(walk_expression(visitor, outer));
            }
            walk_or_stop!(walk_expressions(visitor, arguments));
            match body {
                Some(class) => walk_class(visitor, class),
                None => VisitResult::Continue,
            }
        }
        Expression::Lambda { parameters, body } => {
            for param in parameters {
                walk_or_stop!(walk_variable(visitor, param));
            }
            match body {
                LambdaBody::Expression(expr) => walk_expression(visitor, expr),
                LambdaBody::Block(stmts) => walk_statements(visitor, stmts),
            }
        }
        Expression::Switch {
            selector, cases, ..
        } => walk_switch(visitor, selector, cases),
    }
}

/// Walk a [`MethodInvocation`]: receiver (if qualified), then arguments.
pub fn walk_method_invocation<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &'a MethodInvocation,
) -> VisitResult {
    match visitor.visit_method_invocation(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if let MethodSelect::MemberSelect { expression, .. } = &node.method_select {
                walk_or_stop!(walk_expression(visitor, expression));
            }
            walk_or_stop!(walk_expressions(visitor, &node.arguments));
        }
    }
    visitor.leave_method_invocation(node);
    VisitResult::Continue
}
