// csvb_ast/declaration - Member declarations and the compilation unit
use crate::expression::{Expression, Parameter};
use crate::statement::{BlockStatement, VariableDeclarator};
use crate::trivia::Trivia;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Root node for an entire source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub externs: Vec<ExternAliasDirective>,
    pub usings: Vec<UsingDirective>,
    /// Assembly/module-level attribute lists (`[assembly: ...]`).
    pub attribute_lists: Vec<AttributeList>,
    pub members: Vec<MemberDecl>,
    /// Trivia left at the very end of the file.
    pub trailing_trivia: Vec<Trivia>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternAliasDirective {
    pub name: Identifier,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsingDirective {
    pub is_static: bool,
    pub alias: Option<Identifier>,
    pub target: TypeRef,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

/// `[Target: Attr(args), Attr2]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeList {
    pub target: Option<AttributeTarget>,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeTarget {
    Assembly,
    Module,
    Return,
    Field,
    Method,
    Param,
    Property,
    Event,
    Type,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: TypeRef,
    pub args: Vec<Expression>,
    pub span: Span,
}

/// A member declaration at file, namespace, or type scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MemberDecl {
    Namespace(NamespaceDecl),
    Type(TypeDecl),
    Enum(EnumDecl),
    Delegate(DelegateDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
    Destructor(DestructorDecl),
    Property(PropertyDecl),
    Indexer(IndexerDecl),
    Field(FieldDecl),
    Event(EventDecl),
    Operator(OperatorDecl),
    ConversionOperator(ConversionOperatorDecl),
}

impl MemberDecl {
    pub fn span(&self) -> Span {
        match self {
            MemberDecl::Namespace(d) => d.span,
            MemberDecl::Type(d) => d.span,
            MemberDecl::Enum(d) => d.span,
            MemberDecl::Delegate(d) => d.span,
            MemberDecl::Method(d) => d.span,
            MemberDecl::Constructor(d) => d.span,
            MemberDecl::Destructor(d) => d.span,
            MemberDecl::Property(d) => d.span,
            MemberDecl::Indexer(d) => d.span,
            MemberDecl::Field(d) => d.span,
            MemberDecl::Event(d) => d.span,
            MemberDecl::Operator(d) => d.span,
            MemberDecl::ConversionOperator(d) => d.span,
        }
    }

    pub fn leading_trivia(&self) -> &[Trivia] {
        match self {
            MemberDecl::Namespace(d) => &d.leading_trivia,
            MemberDecl::Type(d) => &d.leading_trivia,
            MemberDecl::Enum(d) => &d.leading_trivia,
            MemberDecl::Delegate(d) => &d.leading_trivia,
            MemberDecl::Method(d) => &d.leading_trivia,
            MemberDecl::Constructor(d) => &d.leading_trivia,
            MemberDecl::Destructor(d) => &d.leading_trivia,
            MemberDecl::Property(d) => &d.leading_trivia,
            MemberDecl::Indexer(d) => &d.leading_trivia,
            MemberDecl::Field(d) => &d.leading_trivia,
            MemberDecl::Event(d) => &d.leading_trivia,
            MemberDecl::Operator(d) => &d.leading_trivia,
            MemberDecl::ConversionOperator(d) => &d.leading_trivia,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceDecl {
    /// Dotted name, one identifier per segment.
    pub name: Vec<Identifier>,
    pub usings: Vec<UsingDirective>,
    pub members: Vec<MemberDecl>,
    /// Trivia gathered at the closing brace.
    pub end_trivia: Vec<Trivia>,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
}

/// Class, struct, or interface declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub kind: TypeKind,
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    pub type_params: Vec<Identifier>,
    pub constraints: Vec<TypeParamConstraint>,
    /// Base class and/or implemented interfaces, in source order. The
    /// grammar does not distinguish the two; the converter applies its
    /// naming heuristic.
    pub base_list: Vec<TypeRef>,
    pub members: Vec<MemberDecl>,
    /// Trivia gathered at the closing brace.
    pub end_trivia: Vec<Trivia>,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

/// `where T : IComparable, new()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParamConstraint {
    pub param: Identifier,
    pub constraints: Vec<ConstraintKind>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstraintKind {
    Type(TypeRef),
    Constructor,
    Class,
    Struct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    pub base_type: Option<TypeRef>,
    pub members: Vec<EnumMember>,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: Identifier,
    pub value: Option<Expression>,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegateDecl {
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    pub return_type: TypeRef,
    pub name: Identifier,
    pub type_params: Vec<Identifier>,
    pub params: Vec<Parameter>,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    pub return_type: TypeRef,
    /// `IFoo.Bar` explicit interface qualification, when present.
    pub explicit_interface: Option<TypeRef>,
    pub name: Identifier,
    pub type_params: Vec<Identifier>,
    pub constraints: Vec<TypeParamConstraint>,
    pub params: Vec<Parameter>,
    /// None for abstract/extern/interface methods.
    pub body: Option<BlockStatement>,
    /// `=> expr` body.
    pub expression_body: Option<Expression>,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

impl MethodDecl {
    pub fn is_extension(&self) -> bool {
        self.params
            .first()
            .map(|p| p.modifiers.contains(&ParamModifier::This))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    pub params: Vec<Parameter>,
    pub initializer: Option<ConstructorInitializer>,
    pub body: Option<BlockStatement>,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

/// `: base(args)` / `: this(args)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorInitializer {
    pub kind: ConstructorInitializerKind,
    pub args: Vec<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructorInitializerKind {
    Base,
    This,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestructorDecl {
    pub attribute_lists: Vec<AttributeList>,
    pub name: Identifier,
    pub body: Option<BlockStatement>,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    pub prop_type: TypeRef,
    pub explicit_interface: Option<TypeRef>,
    pub name: Identifier,
    pub accessors: Vec<Accessor>,
    /// `=> expr` body (getter-only shorthand).
    pub expression_body: Option<Expression>,
    /// `= initial;` auto-property initializer.
    pub initializer: Option<Expression>,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexerDecl {
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    pub prop_type: TypeRef,
    pub params: Vec<Parameter>,
    pub accessors: Vec<Accessor>,
    pub expression_body: Option<Expression>,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessor {
    pub kind: AccessorKind,
    pub modifiers: Vec<Modifier>,
    /// None for auto-accessors (`get;`).
    pub body: Option<BlockStatement>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessorKind {
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    pub field_type: TypeRef,
    pub declarators: Vec<VariableDeclarator>,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDecl {
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    pub event_type: TypeRef,
    pub name: Identifier,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

/// Overloadable operator tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorKind {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Bang,
    EqualEqual,
    BangEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    ShiftLeft,
    ShiftRight,
    True,
    False,
    Increment,
    Decrement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorDecl {
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    pub return_type: TypeRef,
    pub operator: OperatorKind,
    pub params: Vec<Parameter>,
    pub body: Option<BlockStatement>,
    pub expression_body: Option<Expression>,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionOperatorDecl {
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    /// true for `implicit`, false for `explicit`.
    pub implicit: bool,
    pub target_type: TypeRef,
    pub params: Vec<Parameter>,
    pub body: Option<BlockStatement>,
    pub expression_body: Option<Expression>,
    pub leading_trivia: Vec<Trivia>,
    pub span: Span,
}
