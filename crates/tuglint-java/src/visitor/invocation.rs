// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! InvocationCollector visitor for unqualified call sites.
//!
//! # What is Collected?
//!
//! - **Unqualified calls**: `foo()`, `process(x)`
//! - Calls nested anywhere in the body: receivers, arguments, lambda bodies,
//!   arguments of `new` expressions
//!
//! Qualified calls (`this.foo()`, `super.foo()`, `obj.foo()`) are walked for
//! their receivers and arguments but not collected themselves.
//!
//! # What is Not Walked?
//!
//! Nested class declarations (member, local and anonymous bodies). Each of
//! those is its own declaration and is checked in its own pass.

use tuglint_core::facts::SymbolId;
use tuglint_core::span::Span;

use super::dispatch::walk_member;
use super::traits::{VisitResult, Visitor};
use crate::tree::{ClassTree, MethodInvocation, MethodSelect};

/// An invocation whose method-select is a bare identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationSite<'a> {
    /// The invoked name as written.
    pub name: &'a str,
    /// Resolved target method, if resolution succeeded.
    pub symbol: Option<SymbolId>,
    /// Span of the whole invocation expression.
    pub span: Span,
}

/// A visitor that collects unqualified invocation sites of one class body.
#[derive(Default)]
pub struct InvocationCollector<'a> {
    sites: Vec<InvocationSite<'a>>,
}

impl<'a> InvocationCollector<'a> {
    /// Create a new InvocationCollector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect unqualified invocation sites from the body of `class`.
    ///
    /// Returns the sites in source order.
    pub fn collect(class: &'a ClassTree) -> Vec<InvocationSite<'a>> {
        let mut collector = InvocationCollector::new();
        for member in &class.members {
            walk_member(&mut collector, member);
        }
        collector.sites
    }
}

impl<'a> Visitor<'a> for InvocationCollector<'a> {
    fn visit_class(&mut self, _node: &'a ClassTree) -> VisitResult {
        VisitResult::SkipChildren
    }

    fn visit_method_invocation(&mut self, node: &'a MethodInvocation) -> VisitResult {
        if let MethodSelect::Identifier { name, .. } = &node.method_select {
            self.sites.push(InvocationSite {
                name,
                symbol: node.symbol,
                span: node.span,
            });
        }
        VisitResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{
        Expression, LambdaBody, Member, MethodTree, Statement, TypeKind, VariableTree,
    };

    fn unqualified(name: &str, start: u64, arguments: Vec<Expression>) -> Expression {
        Expression::MethodInvocation(MethodInvocation {
            method_select: MethodSelect::Identifier {
                name: name.to_string(),
                span: Span::new(start, start + name.len() as u64),
            },
            arguments,
            symbol: Some(SymbolId(start as u32)),
            span: Span::new(start, start + name.len() as u64 + 2),
        })
    }

    fn qualified(receiver: Expression, name: &str, arguments: Vec<Expression>) -> Expression {
        Expression::MethodInvocation(MethodInvocation {
            method_select: MethodSelect::MemberSelect {
                expression: Box::new(receiver),
                identifier: name.to_string(),
                span: Span::default(),
            },
            arguments,
            symbol: None,
            span: Span::default(),
        })
    }

    fn class_with(members: Vec<Member>) -> ClassTree {
        ClassTree {
            kind: TypeKind::Class,
            name: Some("C".to_string()),
            symbol: None,
            members,
            span: Span::default(),
        }
    }

    fn method_member(body: Vec<Statement>) -> Member {
        Member::Method(MethodTree {
            name: "m".to_string(),
            symbol: None,
            parameters: vec![],
            body: Some(body),
            span: Span::default(),
        })
    }

    fn names(sites: &[InvocationSite<'_>]) -> Vec<String> {
        sites.iter().map(|s| s.name.to_string()).collect()
    }

    #[test]
    fn collects_in_source_order_across_members() {
        let class = class_with(vec![
            Member::Field(VariableTree {
                name: "f".to_string(),
                symbol: None,
                initializer: Some(unqualified("init", 1, vec![])),
                span: Span::default(),
            }),
            method_member(vec![Statement::Return {
                expression: Some(unqualified("outer", 10, vec![unqualified("arg", 20, vec![])])),
            }]),
        ]);
        let sites = InvocationCollector::collect(&class);
        assert_eq!(names(&sites), vec!["init", "outer", "arg"]);
        assert_eq!(sites[1].symbol, Some(SymbolId(10)));
        assert_eq!(sites[1].span, Span::new(10, 17));
    }

    #[test]
    fn qualified_calls_are_walked_not_collected() {
        let class = class_with(vec![method_member(vec![Statement::Expression {
            expression: qualified(
                unqualified("receiver", 1, vec![]),
                "foo",
                vec![unqualified("argument", 30, vec![])],
            ),
        }])]);
        let sites = InvocationCollector::collect(&class);
        assert_eq!(names(&sites), vec!["receiver", "argument"]);
    }

    #[test]
    fn lambdas_and_new_arguments_are_walked_nested_classes_are_not() {
        let anonymous = class_with(vec![method_member(vec![Statement::Expression {
            expression: unqualified("hidden", 90, vec![]),
        }])]);
        let class = class_with(vec![
            method_member(vec![
                Statement::Expression {
                    expression: Expression::Lambda {
                        parameters: vec![],
                        body: LambdaBody::Expression(Box::new(unqualified("inLambda", 5, vec![]))),
                    },
                },
                Statement::Expression {
                    expression: Expression::NewClass {
                        enclosing: None,
                        type_name: "Task".to_string(),
                        arguments: vec![unqualified("ctorArg", 40, vec![])],
                        body: Some(Box::new(anonymous)),
                        span: Span::default(),
                    },
                },
                Statement::LocalClass(class_with(vec![method_member(vec![
                    Statement::Expression {
                        expression: unqualified("local", 60, vec![]),
                    },
                ])])),
            ]),
            Member::Class(class_with(vec![method_member(vec![Statement::Expression {
                expression: unqualified("member", 70, vec![]),
            }])])),
        ]);
        let sites = InvocationCollector::collect(&class);
        assert_eq!(names(&sites), vec!["inLambda", "ctorArg"]);
    }
}
