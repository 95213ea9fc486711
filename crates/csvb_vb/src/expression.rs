// csvb_vb/expression - VB expression nodes
use crate::token::VbIdentifier;
use serde::{Deserialize, Serialize};

/// A VB expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VbExpression {
    Literal(VbLiteral),

    Identifier(VbIdentifier),

    /// `Name(Of T, U)` with explicit type arguments.
    GenericName {
        name: VbIdentifier,
        type_args: Vec<VbTypeRef>,
    },

    Binary {
        left: Box<VbExpression>,
        op: VbBinaryOp,
        right: Box<VbExpression>,
    },

    Unary {
        op: VbUnaryOp,
        operand: Box<VbExpression>,
    },

    MemberAccess {
        object: Box<VbExpression>,
        name: VbIdentifier,
        type_args: Vec<VbTypeRef>,
    },

    /// `obj?.Name`
    NullSafeMemberAccess {
        object: Box<VbExpression>,
        name: VbIdentifier,
    },

    Invocation {
        callee: Box<VbExpression>,
        args: Vec<VbArgument>,
    },

    /// The ternary/coalescing `If(...)` intrinsic - three or two arguments.
    IfIntrinsic { args: Vec<VbExpression> },

    /// `TypeOf e Is T` / `TypeOf e IsNot T`.
    TypeOfIs {
        expr: Box<VbExpression>,
        target: VbTypeRef,
        negated: bool,
    },

    TryCast {
        expr: Box<VbExpression>,
        target: VbTypeRef,
    },

    CType {
        expr: Box<VbExpression>,
        target: VbTypeRef,
    },

    GetType { target: VbTypeRef },

    New {
        target: VbTypeRef,
        args: Vec<VbArgument>,
        initializer: Option<VbInitializer>,
    },

    /// `New With { .A = 1, .B = b }`
    NewAnonymous { members: Vec<VbAnonymousMember> },

    /// `New T(bound) { ... }` array creation - bounds are VB upper bounds.
    ArrayCreation {
        element: VbTypeRef,
        bounds: Vec<Option<VbExpression>>,
        initializer: Option<VbInitializer>,
    },

    /// A bare `{ ... }` initializer in expression position.
    CollectionLiteral(Vec<VbExpression>),

    Lambda {
        kind: VbLambdaKind,
        params: Vec<VbParameter>,
        body: VbLambdaBody,
        is_async: bool,
    },

    Query(VbQueryExpression),

    Interpolated { parts: Vec<VbInterpolatedPart> },

    Paren(Box<VbExpression>),

    Tuple { elements: Vec<VbExpression> },

    NameOf(Box<VbExpression>),

    Await(Box<VbExpression>),

    Me,
    MyBase,
}

impl VbExpression {
    pub fn identifier(text: impl Into<String>) -> Self {
        VbExpression::Identifier(VbIdentifier::new(text))
    }

    pub fn string_literal(value: impl Into<String>) -> Self {
        VbExpression::Literal(VbLiteral::String(value.into()))
    }
}

/// Literals carry rendered numeric text but raw string/char values; the
/// renderer applies VB quote-doubling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VbLiteral {
    /// Rendered numeric text (`42`, `&H1F`, `3.5`).
    Number(String),
    String(String),
    Char(char),
    Boolean(bool),
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VbBinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    IntegerDivide,
    Modulo,
    /// String concatenation `&`.
    Concatenate,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Is,
    IsNot,
    AndAlso,
    OrElse,
    And,
    Or,
    Xor,
    ShiftLeft,
    ShiftRight,
}

impl VbBinaryOp {
    pub fn token(&self) -> &'static str {
        match self {
            VbBinaryOp::Add => "+",
            VbBinaryOp::Subtract => "-",
            VbBinaryOp::Multiply => "*",
            VbBinaryOp::Divide => "/",
            VbBinaryOp::IntegerDivide => "\\",
            VbBinaryOp::Modulo => "Mod",
            VbBinaryOp::Concatenate => "&",
            VbBinaryOp::Equal => "=",
            VbBinaryOp::NotEqual => "<>",
            VbBinaryOp::Less => "<",
            VbBinaryOp::LessEqual => "<=",
            VbBinaryOp::Greater => ">",
            VbBinaryOp::GreaterEqual => ">=",
            VbBinaryOp::Is => "Is",
            VbBinaryOp::IsNot => "IsNot",
            VbBinaryOp::AndAlso => "AndAlso",
            VbBinaryOp::OrElse => "OrElse",
            VbBinaryOp::And => "And",
            VbBinaryOp::Or => "Or",
            VbBinaryOp::Xor => "Xor",
            VbBinaryOp::ShiftLeft => "<<",
            VbBinaryOp::ShiftRight => ">>",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VbUnaryOp {
    Plus,
    Minus,
    Not,
}

impl VbUnaryOp {
    pub fn token(&self) -> &'static str {
        match self {
            VbUnaryOp::Plus => "+",
            VbUnaryOp::Minus => "-",
            VbUnaryOp::Not => "Not",
        }
    }
}

/// An invocation argument, optionally named (`name:=value`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbArgument {
    pub name: Option<VbIdentifier>,
    pub value: VbExpression,
}

impl VbArgument {
    pub fn positional(value: VbExpression) -> Self {
        Self { name: None, value }
    }
}

/// Object (`With {...}`) or collection (`From {...}` / `{...}`) initializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VbInitializer {
    Object(Vec<(VbIdentifier, VbExpression)>),
    Collection(Vec<VbExpression>),
}

/// One member of a `New With { ... }` creation; `name` is None for
/// inferred-field members (`.b.C` style projections keep their source
/// expression).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbAnonymousMember {
    pub name: Option<VbIdentifier>,
    pub value: VbExpression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VbLambdaKind {
    Sub,
    Function,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VbLambdaBody {
    Expression(Box<VbExpression>),
    Block(Vec<crate::statement::VbStatement>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbParameter {
    pub modifiers: Vec<VbParamModifier>,
    pub name: VbIdentifier,
    pub param_type: Option<VbTypeRef>,
    pub default_value: Option<VbExpression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VbParamModifier {
    ByVal,
    ByRef,
    ParamArray,
    Optional,
}

impl VbParamModifier {
    pub fn keyword(&self) -> &'static str {
        match self {
            VbParamModifier::ByVal => "ByVal",
            VbParamModifier::ByRef => "ByRef",
            VbParamModifier::ParamArray => "ParamArray",
            VbParamModifier::Optional => "Optional",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VbInterpolatedPart {
    Text(String),
    Expression {
        expr: VbExpression,
        format: Option<String>,
    },
}

/// A VB type reference. Names are stored pre-rendered (dotted, escaped as
/// needed) with generic arguments kept structural for `(Of ...)` rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VbTypeRef {
    Named {
        name: String,
        type_args: Vec<VbTypeRef>,
    },
    Array {
        element: Box<VbTypeRef>,
        rank: usize,
    },
    Nullable { inner: Box<VbTypeRef> },
    Tuple { elements: Vec<VbTypeRef> },
}

impl VbTypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        VbTypeRef::Named {
            name: name.into(),
            type_args: vec![],
        }
    }
}

/// A rendered-inline VB query (`From x In xs Where ... Select ...`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbQueryExpression {
    pub clauses: Vec<VbQueryClause>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VbQueryClause {
    From {
        variable: VbIdentifier,
        var_type: Option<VbTypeRef>,
        source: VbExpression,
    },
    Where(VbExpression),
    Let {
        variable: VbIdentifier,
        value: VbExpression,
    },
    OrderBy(Vec<VbOrdering>),
    Join {
        variable: VbIdentifier,
        var_type: Option<VbTypeRef>,
        source: VbExpression,
        left_key: VbExpression,
        right_key: VbExpression,
    },
    GroupJoin {
        variable: VbIdentifier,
        source: VbExpression,
        left_key: VbExpression,
        right_key: VbExpression,
        into: VbIdentifier,
    },
    Select(VbExpression),
    /// `Group element By key Into name = Group` (name omitted without a
    /// query continuation).
    GroupBy {
        element: VbExpression,
        key: VbExpression,
        into: Option<VbIdentifier>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbOrdering {
    pub expr: VbExpression,
    pub descending: bool,
}
