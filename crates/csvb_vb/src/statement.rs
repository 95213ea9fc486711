// csvb_vb/statement - VB statement nodes
use crate::expression::{VbExpression, VbTypeRef};
use crate::token::VbIdentifier;
use crate::trivia::VbTrivia;
use serde::{Deserialize, Serialize};

/// A VB statement plus the trivia that renders around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbStatement {
    pub leading_trivia: Vec<VbTrivia>,
    /// End-of-line comment rendered after the statement text.
    pub trailing_comment: Option<String>,
    pub kind: VbStatementKind,
}

impl VbStatement {
    pub fn new(kind: VbStatementKind) -> Self {
        Self {
            leading_trivia: vec![],
            trailing_comment: None,
            kind,
        }
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::new(VbStatementKind::Comment(text.into()))
    }

    pub fn with_leading_trivia(mut self, trivia: Vec<VbTrivia>) -> Self {
        self.leading_trivia = trivia;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VbStatementKind {
    /// A standalone comment line.
    Comment(String),

    /// Renders nothing itself; exists to carry leading trivia (comments,
    /// directives) that has no statement to attach to.
    Empty,

    LocalDeclaration {
        is_const: bool,
        declarators: Vec<VbVariableDeclarator>,
    },

    Assignment {
        target: VbExpression,
        op: VbAssignOp,
        value: VbExpression,
    },

    /// An expression evaluated for effect (call statements).
    Expression(VbExpression),

    If {
        condition: VbExpression,
        then_statements: Vec<VbStatement>,
        else_ifs: Vec<VbElseIf>,
        else_statements: Option<Vec<VbStatement>>,
    },

    /// `For v [As T] = from To to [Step s] ... Next`
    ForNext {
        variable: VbIdentifier,
        var_type: Option<VbTypeRef>,
        from: VbExpression,
        to: VbExpression,
        step: Option<VbExpression>,
        body: Vec<VbStatement>,
    },

    ForEach {
        variable: VbIdentifier,
        var_type: Option<VbTypeRef>,
        source: VbExpression,
        body: Vec<VbStatement>,
    },

    While {
        condition: VbExpression,
        body: Vec<VbStatement>,
    },

    /// `Do ... Loop While c` (post-test).
    DoLoop {
        body: Vec<VbStatement>,
        condition: VbExpression,
    },

    SelectCase {
        expr: VbExpression,
        cases: Vec<VbCaseBlock>,
    },

    Exit(VbExitKind),

    Continue(VbContinueKind),

    Return(Option<VbExpression>),

    Throw(Option<VbExpression>),

    GoTo(String),

    Label(String),

    Using {
        resources: Vec<VbVariableDeclarator>,
        expr: Option<VbExpression>,
        body: Vec<VbStatement>,
    },

    SyncLock {
        expr: VbExpression,
        body: Vec<VbStatement>,
    },

    Try {
        body: Vec<VbStatement>,
        catches: Vec<VbCatchBlock>,
        finally_statements: Option<Vec<VbStatement>>,
    },
}

/// `name [As T] [= initializer]`, used by `Dim`, `Const`, and `Using`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbVariableDeclarator {
    pub name: VbIdentifier,
    pub var_type: Option<VbTypeRef>,
    pub initializer: Option<VbExpression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VbAssignOp {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ConcatenateAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
}

impl VbAssignOp {
    pub fn token(&self) -> &'static str {
        match self {
            VbAssignOp::Assign => "=",
            VbAssignOp::AddAssign => "+=",
            VbAssignOp::SubtractAssign => "-=",
            VbAssignOp::MultiplyAssign => "*=",
            VbAssignOp::DivideAssign => "/=",
            VbAssignOp::ConcatenateAssign => "&=",
            VbAssignOp::ShiftLeftAssign => "<<=",
            VbAssignOp::ShiftRightAssign => ">>=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbElseIf {
    pub condition: VbExpression,
    pub statements: Vec<VbStatement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbCaseBlock {
    pub clauses: Vec<VbCaseClause>,
    pub statements: Vec<VbStatement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VbCaseClause {
    Expression(VbExpression),
    Else,
}

/// Construct-specific `Exit` statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VbExitKind {
    For,
    While,
    Do,
    Select,
    Sub,
    Function,
}

impl VbExitKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            VbExitKind::For => "For",
            VbExitKind::While => "While",
            VbExitKind::Do => "Do",
            VbExitKind::Select => "Select",
            VbExitKind::Sub => "Sub",
            VbExitKind::Function => "Function",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VbContinueKind {
    For,
    While,
    Do,
}

impl VbContinueKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            VbContinueKind::For => "For",
            VbContinueKind::While => "While",
            VbContinueKind::Do => "Do",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbCatchBlock {
    pub name: Option<VbIdentifier>,
    pub exception_type: Option<VbTypeRef>,
    pub filter: Option<VbExpression>,
    pub statements: Vec<VbStatement>,
}
