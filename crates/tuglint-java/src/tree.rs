// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Resolved tree model for Java compilation units.
//!
//! The tree is produced by an external front end after name resolution, so
//! nodes that name a declaration or a call target carry the [`SymbolId`] it
//! resolved to. Unresolved references carry `None`.
//!
//! Every enum is serialized as a tagged union keyed by `"kind"`:
//!
//! ```json
//! { "kind": "method_invocation",
//!   "method_select": { "kind": "identifier", "name": "foo" },
//!   "arguments": [],
//!   "symbol": 12 }
//! ```
//!
//! Spans default to `[0, 0)` when omitted.

use serde::{Deserialize, Serialize};
use tuglint_core::facts::SymbolId;
use tuglint_core::span::{FileId, Span};

/// One source file: its top-level type declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub file_id: FileId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default)]
    pub types: Vec<ClassTree>,
}

/// Declaration kind of a [`ClassTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
}

/// A class, interface or enum declaration, named or anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTree {
    pub kind: TypeKind,
    /// Simple name. `None` for anonymous class bodies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resolved class symbol. `None` when resolution failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SymbolId>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub span: Span,
}

impl ClassTree {
    /// Name used in diagnostics: the simple name, or `<anonymous>`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

/// A member of a class body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    Method(MethodTree),
    Constructor(MethodTree),
    Field(VariableTree),
    /// Instance or static initializer block.
    Initializer(InitializerTree),
    /// Member class, interface or enum.
    Class(ClassTree),
}

/// A method or constructor declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodTree {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SymbolId>,
    #[serde(default)]
    pub parameters: Vec<VariableTree>,
    /// `None` for abstract and interface methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<Statement>>,
    #[serde(default)]
    pub span: Span,
}

/// A field, local variable or parameter declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableTree {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SymbolId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Expression>,
    #[serde(default)]
    pub span: Span,
}

/// An initializer block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializerTree {
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub body: Vec<Statement>,
}

/// A catch clause of a `try` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchTree {
    pub parameter: VariableTree,
    #[serde(default)]
    pub body: Vec<Statement>,
}

/// A case group of a `switch` statement or expression.
///
/// Arrow cases (`case A -> expr;`) carry their result as a single
/// expression statement or `yield`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseTree {
    /// Case labels. Empty for `default`.
    #[serde(default)]
    pub labels: Vec<Expression>,
    #[serde(default)]
    pub body: Vec<Statement>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    Expression {
        expression: Expression,
    },
    LocalVariable(VariableTree),
    /// Class declared inside a method body.
    LocalClass(ClassTree),
    Block {
        #[serde(default)]
        statements: Vec<Statement>,
    },
    Return {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expression: Option<Expression>,
    },
    Throw {
        expression: Expression,
    },
    If {
        condition: Expression,
        #[serde(default)]
        then_branch: Vec<Statement>,
        #[serde(default)]
        else_branch: Vec<Statement>,
    },
    While {
        condition: Expression,
        #[serde(default)]
        body: Vec<Statement>,
    },
    DoWhile {
        #[serde(default)]
        body: Vec<Statement>,
        condition: Expression,
    },
    For {
        #[serde(default)]
        initializer: Vec<Statement>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Expression>,
        #[serde(default)]
        update: Vec<Expression>,
        #[serde(default)]
        body: Vec<Statement>,
    },
    ForEach {
        variable: VariableTree,
        iterable: Expression,
        #[serde(default)]
        body: Vec<Statement>,
    },
    Switch {
        selector: Expression,
        #[serde(default)]
        cases: Vec<CaseTree>,
    },
    Try {
        #[serde(default)]
        resources: Vec<VariableTree>,
        #[serde(default)]
        body: Vec<Statement>,
        #[serde(default)]
        catches: Vec<CatchTree>,
        #[serde(default)]
        finally: Vec<Statement>,
    },
    Synchronized {
        lock: Expression,
        #[serde(default)]
        body: Vec<Statement>,
    },
    Labeled {
        label: String,
        statement: Box<Statement>,
    },
    Assert {
        condition: Expression,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        detail: Option<Expression>,
    },
    /// Result of a switch expression case.
    Yield {
        expression: Expression,
    },
    Break,
    Continue,
    Empty,
}

/// The callee part of a method invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MethodSelect {
    /// Unqualified call: `foo()`.
    Identifier {
        name: String,
        #[serde(default)]
        span: Span,
    },
    /// Qualified call: `expr.foo()`, `super.foo()`, `Outer.this.foo()`.
    MemberSelect {
        expression: Box<Expression>,
        identifier: String,
        #[serde(default)]
        span: Span,
    },
}

impl MethodSelect {
    /// The invoked method name.
    pub fn name(&self) -> &str {
        match self {
            MethodSelect::Identifier { name, .. } => name,
            MethodSelect::MemberSelect { identifier, .. } => identifier,
        }
    }
}

/// A method invocation expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInvocation {
    pub method_select: MethodSelect,
    #[serde(default)]
    pub arguments: Vec<Expression>,
    /// Resolved target method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SymbolId>,
    #[serde(default)]
    pub span: Span,
}

/// Body of a lambda expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LambdaBody {
    Expression(Box<Expression>),
    Block(Vec<Statement>),
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expression {
    MethodInvocation(MethodInvocation),
    Identifier {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        symbol: Option<SymbolId>,
        #[serde(default)]
        span: Span,
    },
    MemberSelect {
        expression: Box<Expression>,
        identifier: String,
        #[serde(default)]
        span: Span,
    },
    Literal {
        value: String,
        #[serde(default)]
        span: Span,
    },
    This {
        #[serde(default)]
        span: Span,
    },
    Super {
        #[serde(default)]
        span: Span,
    },
    Parenthesized {
        expression: Box<Expression>,
    },
    Unary {
        operator: String,
        operand: Box<Expression>,
    },
    Binary {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Assignment {
        operator: String,
        variable: Box<Expression>,
        expression: Box<Expression>,
    },
    Conditional {
        condition: Box<Expression>,
        if_true: Box<Expression>,
        if_false: Box<Expression>,
    },
    TypeCast {
        type_name: String,
        expression: Box<Expression>,
    },
    InstanceOf {
        expression: Box<Expression>,
        type_name: String,
    },
    ArrayAccess {
        expression: Box<Expression>,
        index: Box<Expression>,
    },
    NewArray {
        #[serde(default)]
        dimensions: Vec<Expression>,
        #[serde(default)]
        initializers: Vec<Expression>,
    },
    /// Instance creation, optionally with an anonymous class body.
    ///
    /// `enclosing` is the explicit outer instance of a qualified creation
    /// such as `outer.new Inner()`.
    NewClass {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        enclosing: Option<Box<Expression>>,
        type_name: String,
        #[serde(default)]
        arguments: Vec<Expression>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<Box<ClassTree>>,
        #[serde(default)]
        span: Span,
    },
    Lambda {
        #[serde(default)]
        parameters: Vec<VariableTree>,
        body: LambdaBody,
    },
    MethodReference {
        expression: Box<Expression>,
        identifier: String,
    },
    Switch {
        selector: Box<Expression>,
        #[serde(default)]
        cases: Vec<CaseTree>,
        #[serde(default)]
        span: Span,
    },
}
