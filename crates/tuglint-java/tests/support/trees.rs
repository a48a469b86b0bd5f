//! Tree construction helpers for integration tests.

#![allow(dead_code)]

use tuglint_core::facts::SymbolId;
use tuglint_core::span::Span;
use tuglint_java::tree::{
    CaseTree, ClassTree, Expression, LambdaBody, Member, MethodInvocation, MethodSelect, MethodTree,
    Statement, TypeKind, VariableTree,
};

/// A named class declaration bound to `symbol`.
pub fn class(name: &str, symbol: SymbolId, members: Vec<Member>) -> ClassTree {
    ClassTree {
        kind: TypeKind::Class,
        name: Some(name.to_string()),
        symbol: Some(symbol),
        members,
        span: Span::default(),
    }
}

/// An anonymous class body bound to `symbol`.
pub fn anonymous(symbol: SymbolId, members: Vec<Member>) -> ClassTree {
    ClassTree {
        kind: TypeKind::Class,
        name: None,
        symbol: Some(symbol),
        members,
        span: Span::default(),
    }
}

/// A method declaration with a statement body.
pub fn method(name: &str, body: Vec<Statement>) -> Member {
    Member::Method(MethodTree {
        name: name.to_string(),
        symbol: None,
        parameters: vec![],
        body: Some(body),
        span: Span::default(),
    })
}

/// A field declaration with an initializer.
pub fn field(name: &str, initializer: Expression) -> Member {
    Member::Field(VariableTree {
        name: name.to_string(),
        symbol: None,
        initializer: Some(initializer),
        span: Span::default(),
    })
}

/// `name(arguments)` resolved to `target`, spanning `[start, start + name.len() + 2)`.
pub fn call(name: &str, target: SymbolId, start: u64, arguments: Vec<Expression>) -> Expression {
    Expression::MethodInvocation(MethodInvocation {
        method_select: MethodSelect::Identifier {
            name: name.to_string(),
            span: Span::new(start, start + name.len() as u64),
        },
        arguments,
        symbol: Some(target),
        span: Span::new(start, start + name.len() as u64 + 2),
    })
}

/// `super.name()` resolved to `target`.
pub fn super_call(name: &str, target: SymbolId) -> Expression {
    Expression::MethodInvocation(MethodInvocation {
        method_select: MethodSelect::MemberSelect {
            expression: Box::new(Expression::Super {
                span: Span::default(),
            }),
            identifier: name.to_string(),
            span: Span::default(),
        },
        arguments: vec![],
        symbol: Some(target),
        span: Span::default(),
    })
}

/// `() -> body`
pub fn lambda(body: Expression) -> Expression {
    Expression::Lambda {
        parameters: vec![],
        body: LambdaBody::Expression(Box::new(body)),
    }
}

/// `new type_name(arguments) { body }`
pub fn new_anonymous(type_name: &str, arguments: Vec<Expression>, body: ClassTree) -> Expression {
    Expression::NewClass {
        enclosing: None,
        type_name: type_name.to_string(),
        arguments,
        body: Some(Box::new(body)),
        span: Span::default(),
    }
}

pub fn literal(value: &str) -> Expression {
    Expression::Literal {
        value: value.to_string(),
        span: Span::default(),
    }
}

/// `outer.new type_name()`
pub fn new_qualified(outer: Expression, type_name: &str) -> Expression {
    Expression::NewClass {
        enclosing: Some(Box::new(outer)),
        type_name: type_name.to_string(),
        arguments: vec![],
        body: None,
        span: Span::default(),
    }
}

/// `switch (selector) { case label -> { yield result; } }`
pub fn switch_yield(selector: Expression, label: Expression, result: Expression) -> Expression {
    Expression::Switch {
        selector: Box::new(selector),
        cases: vec![CaseTree {
            labels: vec![label],
            body: vec![Statement::Yield { expression: result }],
        }],
        span: Span::default(),
    }
}

/// `assert condition : detail;`
pub fn assert_stmt(condition: Expression, detail: Option<Expression>) -> Statement {
    Statement::Assert { condition, detail }
}

pub fn stmt(expression: Expression) -> Statement {
    Statement::Expression { expression }
}
