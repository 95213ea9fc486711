// csvb_ast/expression - Expression nodes and related constructs
use crate::statement::Statement;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// A C# expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Literal(Literal, Span),

    Identifier(Identifier),

    /// `Name<T, U>` with explicit type arguments in expression position.
    GenericName {
        name: Identifier,
        type_args: Vec<TypeRef>,
        span: Span,
    },

    /// A predefined type keyword used in expression position (`int.Parse`).
    PredefinedType(PredefinedType, Span),

    Binary {
        left: Box<Expression>,
        op: BinaryOp,
        right: Box<Expression>,
        span: Span,
    },

    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
        span: Span,
    },

    PostfixUnary {
        op: PostfixOp,
        operand: Box<Expression>,
        span: Span,
    },

    Assignment {
        target: Box<Expression>,
        op: AssignmentOp,
        value: Box<Expression>,
        span: Span,
    },

    /// Ternary conditional `c ? a : b`.
    Conditional {
        condition: Box<Expression>,
        when_true: Box<Expression>,
        when_false: Box<Expression>,
        span: Span,
    },

    // Member access: obj.Property, obj.Method<T>
    MemberAccess {
        object: Box<Expression>,
        name: Identifier,
        type_args: Vec<TypeRef>,
        span: Span,
    },

    // Null-conditional member access: obj?.Property
    NullSafeMemberAccess {
        object: Box<Expression>,
        name: Identifier,
        span: Span,
    },

    Invocation {
        callee: Box<Expression>,
        args: Vec<Argument>,
        span: Span,
    },

    ElementAccess {
        object: Box<Expression>,
        args: Vec<Expression>,
        span: Span,
    },

    /// `new T(args) { initializer }`.
    ObjectCreation {
        target_type: TypeRef,
        args: Vec<Argument>,
        initializer: Option<InitializerExpression>,
        span: Span,
    },

    /// `new T[sizes] { ... }` or `new[] { ... }` when `element_type` is None.
    ArrayCreation {
        element_type: Option<TypeRef>,
        rank_sizes: Vec<Option<Expression>>,
        initializer: Option<InitializerExpression>,
        span: Span,
    },

    /// `new { A = 1, b.C }`.
    AnonymousObject {
        members: Vec<AnonymousObjectMember>,
        span: Span,
    },

    /// A bare `{ ... }` initializer appearing in expression position, e.g.
    /// nested inside a collection initializer.
    Initializer(InitializerExpression),

    Cast {
        target_type: TypeRef,
        expr: Box<Expression>,
        span: Span,
    },

    /// `e is T`.
    Is {
        expr: Box<Expression>,
        target_type: TypeRef,
        span: Span,
    },

    /// `e is T name` (declaration pattern). Conversion is best-effort.
    IsPattern {
        expr: Box<Expression>,
        target_type: TypeRef,
        name: Identifier,
        span: Span,
    },

    /// `e as T`.
    As {
        expr: Box<Expression>,
        target_type: TypeRef,
        span: Span,
    },

    TypeOf { target_type: TypeRef, span: Span },

    SizeOf { target_type: TypeRef, span: Span },

    /// `default(T)` or a bare `default`.
    Default {
        target_type: Option<TypeRef>,
        span: Span,
    },

    /// `checked(e)` / `unchecked(e)`.
    Checked {
        checked: bool,
        expr: Box<Expression>,
        span: Span,
    },

    /// `stackalloc T[n]`.
    StackAlloc {
        target_type: TypeRef,
        size: Option<Box<Expression>>,
        span: Span,
    },

    /// `__makeref(e)`.
    MakeRef { expr: Box<Expression>, span: Span },

    /// `__reftype(e)`.
    RefType { expr: Box<Expression>, span: Span },

    /// `__refvalue(e, T)`.
    RefValue {
        expr: Box<Expression>,
        target_type: TypeRef,
        span: Span,
    },

    Lambda {
        params: Vec<Parameter>,
        body: LambdaBody,
        is_async: bool,
        span: Span,
    },

    Query(Box<QueryExpression>),

    /// `$"text {expr} text"`.
    Interpolated {
        parts: Vec<InterpolatedPart>,
        span: Span,
    },

    Paren { expr: Box<Expression>, span: Span },

    Tuple { elements: Vec<Argument>, span: Span },

    NameOf { expr: Box<Expression>, span: Span },

    Await { expr: Box<Expression>, span: Span },

    /// `throw e` in expression position.
    Throw { expr: Box<Expression>, span: Span },

    This(Span),
    Base(Span),
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Literal(_, span)
            | Expression::GenericName { span, .. }
            | Expression::PredefinedType(_, span)
            | Expression::Binary { span, .. }
            | Expression::Unary { span, .. }
            | Expression::PostfixUnary { span, .. }
            | Expression::Assignment { span, .. }
            | Expression::Conditional { span, .. }
            | Expression::MemberAccess { span, .. }
            | Expression::NullSafeMemberAccess { span, .. }
            | Expression::Invocation { span, .. }
            | Expression::ElementAccess { span, .. }
            | Expression::ObjectCreation { span, .. }
            | Expression::ArrayCreation { span, .. }
            | Expression::AnonymousObject { span, .. }
            | Expression::Cast { span, .. }
            | Expression::Is { span, .. }
            | Expression::IsPattern { span, .. }
            | Expression::As { span, .. }
            | Expression::TypeOf { span, .. }
            | Expression::SizeOf { span, .. }
            | Expression::Default { span, .. }
            | Expression::Checked { span, .. }
            | Expression::StackAlloc { span, .. }
            | Expression::MakeRef { span, .. }
            | Expression::RefType { span, .. }
            | Expression::RefValue { span, .. }
            | Expression::Lambda { span, .. }
            | Expression::Interpolated { span, .. }
            | Expression::Paren { span, .. }
            | Expression::Tuple { span, .. }
            | Expression::NameOf { span, .. }
            | Expression::Await { span, .. }
            | Expression::Throw { span, .. }
            | Expression::This(span)
            | Expression::Base(span) => *span,
            Expression::Identifier(identifier) => identifier.span,
            Expression::Initializer(initializer) => initializer.span,
            Expression::Query(query) => query.span,
        }
    }

    /// Whether this is the `null` literal, after stripping parentheses.
    pub fn is_null_literal(&self) -> bool {
        match self {
            Expression::Literal(Literal::Null, _) => true,
            Expression::Paren { expr, .. } => expr.is_null_literal(),
            _ => false,
        }
    }
}

/// An invocation or creation argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub name: Option<Identifier>,
    pub modifier: Option<ParamModifier>,
    pub value: Expression,
    pub span: Span,
}

/// `{ a, b }` / `{ A = 1 }` initializer bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializerExpression {
    pub kind: InitializerKind,
    pub elements: Vec<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitializerKind {
    /// `new T { A = 1, B = 2 }` - elements are assignments.
    Object,
    /// `new List<T> { a, b }` or a bare array initializer.
    Collection,
}

/// One member of an anonymous object creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousObjectMember {
    /// Explicit name when written `Name = value`; inferred otherwise.
    pub name: Option<Identifier>,
    pub value: Expression,
    pub span: Span,
}

/// A method or lambda parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub attribute_lists: Vec<crate::declaration::AttributeList>,
    pub modifiers: Vec<ParamModifier>,
    pub param_type: Option<TypeRef>,
    pub name: Identifier,
    pub default_value: Option<Expression>,
    pub span: Span,
}

/// Lambda bodies are either a single expression or a statement block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LambdaBody {
    Expression(Box<Expression>),
    Block(Vec<Statement>),
}

/// One part of an interpolated string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InterpolatedPart {
    Text(String),
    Expression {
        expr: Expression,
        /// `{e,alignment:format}` suffix text, kept verbatim.
        format: Option<String>,
    },
}

/// A LINQ query comprehension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryExpression {
    pub from: FromClause,
    pub body: QueryBody,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryBody {
    pub clauses: Vec<QueryClause>,
    pub finish: SelectOrGroup,
    /// `into name ...` continuation.
    pub continuation: Option<Box<QueryContinuation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryContinuation {
    pub name: Identifier,
    pub body: QueryBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FromClause {
    pub range_type: Option<TypeRef>,
    pub name: Identifier,
    pub source: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryClause {
    From(FromClause),
    Where { condition: Expression, span: Span },
    Let {
        name: Identifier,
        value: Expression,
        span: Span,
    },
    OrderBy {
        orderings: Vec<Ordering>,
        span: Span,
    },
    Join(JoinClause),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ordering {
    pub expr: Expression,
    pub descending: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinClause {
    pub range_type: Option<TypeRef>,
    pub name: Identifier,
    pub source: Expression,
    pub left_key: Expression,
    pub right_key: Expression,
    /// `into g` makes this a group join.
    pub into: Option<Identifier>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectOrGroup {
    Select { expr: Expression, span: Span },
    GroupBy {
        element: Expression,
        key: Expression,
        span: Span,
    },
}
