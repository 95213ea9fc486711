// csvb_vb/declaration - VB member blocks and the compilation unit
use crate::expression::{VbArgument, VbExpression, VbParameter, VbTypeRef};
use crate::statement::{VbStatement, VbVariableDeclarator};
use crate::token::VbIdentifier;
use crate::trivia::VbTrivia;
use serde::{Deserialize, Serialize};

/// Root of a converted VB file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VbCompilationUnit {
    pub imports: Vec<VbImport>,
    /// `<Assembly: ...>` attribute statement, emitted only when non-empty.
    pub assembly_attributes: Vec<VbAttribute>,
    pub members: Vec<VbMember>,
    pub trailing_trivia: Vec<VbTrivia>,
}

impl VbCompilationUnit {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbImport {
    /// Rendered imports target (`System.Collections.Generic`,
    /// `Alias = Target`).
    pub name: String,
    pub leading_trivia: Vec<VbTrivia>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbAttribute {
    pub name: String,
    pub args: Vec<VbExpression>,
}

/// A member declaration plus surrounding trivia.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbMember {
    pub leading_trivia: Vec<VbTrivia>,
    pub kind: VbMemberKind,
}

impl VbMember {
    pub fn new(kind: VbMemberKind) -> Self {
        Self {
            leading_trivia: vec![],
            kind,
        }
    }

    pub fn with_leading_trivia(mut self, trivia: Vec<VbTrivia>) -> Self {
        self.leading_trivia = trivia;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VbMemberKind {
    Namespace {
        name: String,
        members: Vec<VbMember>,
    },
    Type(VbTypeBlock),
    Enum(VbEnumBlock),
    Delegate(VbDelegateDecl),
    Method(VbMethodBlock),
    Operator(VbOperatorBlock),
    Property(VbPropertyBlock),
    Field(VbFieldDecl),
    Event(VbEventDecl),
    /// A member-position placeholder comment.
    Comment(String),
    /// Renders nothing itself; carries trivia with no member to attach to.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VbTypeBlockKind {
    Class,
    Module,
    Structure,
    Interface,
}

impl VbTypeBlockKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            VbTypeBlockKind::Class => "Class",
            VbTypeBlockKind::Module => "Module",
            VbTypeBlockKind::Structure => "Structure",
            VbTypeBlockKind::Interface => "Interface",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbTypeBlock {
    pub kind: VbTypeBlockKind,
    pub attributes: Vec<VbAttribute>,
    pub modifiers: Vec<VbModifier>,
    pub name: VbIdentifier,
    pub type_params: Vec<VbTypeParam>,
    pub inherits: Vec<VbTypeRef>,
    pub implements: Vec<VbTypeRef>,
    pub members: Vec<VbMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbTypeParam {
    pub name: VbIdentifier,
    /// `As {C1, C2}` constraint renderings (`New`, `Class`, `Structure`,
    /// or a type).
    pub constraints: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbEnumBlock {
    pub attributes: Vec<VbAttribute>,
    pub modifiers: Vec<VbModifier>,
    pub name: VbIdentifier,
    pub base_type: Option<VbTypeRef>,
    pub members: Vec<VbEnumMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbEnumMember {
    pub leading_trivia: Vec<VbTrivia>,
    pub name: VbIdentifier,
    pub value: Option<VbExpression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbDelegateDecl {
    pub attributes: Vec<VbAttribute>,
    pub modifiers: Vec<VbModifier>,
    pub is_sub: bool,
    pub name: VbIdentifier,
    pub type_params: Vec<VbTypeParam>,
    pub params: Vec<VbParameter>,
    pub return_type: Option<VbTypeRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VbMethodKind {
    Sub,
    Function,
    /// `Sub New`.
    Constructor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbMethodBlock {
    pub kind: VbMethodKind,
    pub attributes: Vec<VbAttribute>,
    pub modifiers: Vec<VbModifier>,
    pub name: VbIdentifier,
    pub type_params: Vec<VbTypeParam>,
    pub params: Vec<VbParameter>,
    /// Present for Functions; attributes here came from `[return: ...]`.
    pub return_type: Option<VbTypeRef>,
    pub return_attributes: Vec<VbAttribute>,
    /// Rendered implements clause (`Implements IFoo.Bar`).
    pub implements: Option<String>,
    /// None for MustOverride and interface members (no End Sub/Function).
    pub body: Option<Vec<VbStatement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbOperatorBlock {
    pub attributes: Vec<VbAttribute>,
    pub modifiers: Vec<VbModifier>,
    /// Operator token or pseudo-operator name (`=`, `<>`, `CType`,
    /// `op_Increment`).
    pub operator: String,
    pub params: Vec<VbParameter>,
    pub return_type: Option<VbTypeRef>,
    pub body: Vec<VbStatement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbPropertyBlock {
    pub attributes: Vec<VbAttribute>,
    pub modifiers: Vec<VbModifier>,
    /// Indexers become `Default Property Item(params)`.
    pub is_default: bool,
    pub name: VbIdentifier,
    pub params: Vec<VbParameter>,
    pub prop_type: Option<VbTypeRef>,
    pub implements: Option<String>,
    /// Empty for auto-properties (no accessor blocks rendered).
    pub accessors: Vec<VbAccessor>,
    pub initializer: Option<VbExpression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbAccessor {
    pub kind: VbAccessorKind,
    pub modifiers: Vec<VbModifier>,
    pub body: Vec<VbStatement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VbAccessorKind {
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbFieldDecl {
    pub attributes: Vec<VbAttribute>,
    pub modifiers: Vec<VbModifier>,
    pub is_const: bool,
    pub declarators: Vec<VbVariableDeclarator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbEventDecl {
    pub attributes: Vec<VbAttribute>,
    pub modifiers: Vec<VbModifier>,
    pub name: VbIdentifier,
    pub event_type: VbTypeRef,
}

/// VB modifier keywords in declaration position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VbModifier {
    Public,
    Private,
    Protected,
    Friend,
    Shared,
    Shadows,
    MustInherit,
    NotInheritable,
    MustOverride,
    Overridable,
    Overrides,
    NotOverridable,
    ReadOnly,
    WriteOnly,
    Partial,
    Async,
    Widening,
    Narrowing,
}

impl VbModifier {
    pub fn keyword(&self) -> &'static str {
        match self {
            VbModifier::Public => "Public",
            VbModifier::Private => "Private",
            VbModifier::Protected => "Protected",
            VbModifier::Friend => "Friend",
            VbModifier::Shared => "Shared",
            VbModifier::Shadows => "Shadows",
            VbModifier::MustInherit => "MustInherit",
            VbModifier::NotInheritable => "NotInheritable",
            VbModifier::MustOverride => "MustOverride",
            VbModifier::Overridable => "Overridable",
            VbModifier::Overrides => "Overrides",
            VbModifier::NotOverridable => "NotOverridable",
            VbModifier::ReadOnly => "ReadOnly",
            VbModifier::WriteOnly => "WriteOnly",
            VbModifier::Partial => "Partial",
            VbModifier::Async => "Async",
            VbModifier::Widening => "Widening",
            VbModifier::Narrowing => "Narrowing",
        }
    }
}

/// Helper retained for constructor-chaining statements; renders
/// `MyBase.New(args)` / `Me.New(args)` as an expression statement.
pub fn constructor_chain_call(to_base: bool, args: Vec<VbArgument>) -> VbExpression {
    let receiver = if to_base {
        VbExpression::MyBase
    } else {
        VbExpression::Me
    };
    VbExpression::Invocation {
        callee: Box::new(VbExpression::MemberAccess {
            object: Box::new(receiver),
            name: VbIdentifier::unescaped("New"),
            type_args: vec![],
        }),
        args,
    }
}
