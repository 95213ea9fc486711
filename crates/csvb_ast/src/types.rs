// csvb_ast/types - Basic types, operators, and position information
use serde::{Deserialize, Serialize};

/// Position information for syntax nodes.
///
/// Lines and columns are 1-based; offsets are byte offsets into the original
/// source text so node text can be recovered for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl Span {
    pub fn new(
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
            start_offset,
            end_offset,
        }
    }

    pub fn dummy() -> Self {
        Self::default()
    }

    /// Smallest span covering both inputs.
    pub fn merge(self, other: Span) -> Span {
        let (start_line, start_column, start_offset) = if self.start_offset <= other.start_offset {
            (self.start_line, self.start_column, self.start_offset)
        } else {
            (other.start_line, other.start_column, other.start_offset)
        };
        let (end_line, end_column, end_offset) = if self.end_offset >= other.end_offset {
            (self.end_line, self.end_column, self.end_offset)
        } else {
            (other.end_line, other.end_column, other.end_offset)
        };
        Span {
            start_line,
            start_column,
            end_line,
            end_column,
            start_offset,
            end_offset,
        }
    }

    /// Whether the spanned text crosses a line boundary.
    pub fn is_multi_line(&self) -> bool {
        self.end_line > self.start_line
    }

    /// Slice the original source text covered by this span.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        let start = self.start_offset.min(source.len());
        let end = self.end_offset.min(source.len());
        &source[start..end]
    }
}

/// An identifier together with its source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub text: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// Literal values.
///
/// Numbers keep their raw source text so hex prefixes and suffixes survive
/// until the token converter decides how to re-format them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    String { value: String, verbatim: bool },
    Number(String),
    Boolean(bool),
    Character(char),
    Null,
}

/// C# predefined type keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredefinedType {
    Bool,
    Byte,
    SByte,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    Float,
    Double,
    Decimal,
    Char,
    String,
    Object,
    Void,
}

impl PredefinedType {
    /// The C# keyword spelling.
    pub fn keyword(&self) -> &'static str {
        match self {
            PredefinedType::Bool => "bool",
            PredefinedType::Byte => "byte",
            PredefinedType::SByte => "sbyte",
            PredefinedType::Short => "short",
            PredefinedType::UShort => "ushort",
            PredefinedType::Int => "int",
            PredefinedType::UInt => "uint",
            PredefinedType::Long => "long",
            PredefinedType::ULong => "ulong",
            PredefinedType::Float => "float",
            PredefinedType::Double => "double",
            PredefinedType::Decimal => "decimal",
            PredefinedType::Char => "char",
            PredefinedType::String => "string",
            PredefinedType::Object => "object",
            PredefinedType::Void => "void",
        }
    }

    pub fn from_keyword(text: &str) -> Option<Self> {
        Some(match text {
            "bool" => PredefinedType::Bool,
            "byte" => PredefinedType::Byte,
            "sbyte" => PredefinedType::SByte,
            "short" => PredefinedType::Short,
            "ushort" => PredefinedType::UShort,
            "int" => PredefinedType::Int,
            "uint" => PredefinedType::UInt,
            "long" => PredefinedType::Long,
            "ulong" => PredefinedType::ULong,
            "float" => PredefinedType::Float,
            "double" => PredefinedType::Double,
            "decimal" => PredefinedType::Decimal,
            "char" => PredefinedType::Char,
            "string" => PredefinedType::String,
            "object" => PredefinedType::Object,
            "void" => PredefinedType::Void,
            _ => return None,
        })
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    // Comparison
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    // Logical (short-circuit)
    And,
    Or,
    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    // Null handling
    Coalesce,
}

/// Prefix unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    BitNot,
    PreIncrement,
    PreDecrement,
    AddressOf,
    Dereference,
}

/// Postfix unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostfixOp {
    Increment,
    Decrement,
}

/// Assignment operators, simple and compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentOp {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
}

/// Declaration modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Internal,
    Static,
    Abstract,
    Sealed,
    Virtual,
    Override,
    Readonly,
    Const,
    New,
    Partial,
    Async,
    Unsafe,
    Extern,
    Volatile,
}

impl Modifier {
    pub fn from_keyword(text: &str) -> Option<Self> {
        Some(match text {
            "public" => Modifier::Public,
            "private" => Modifier::Private,
            "protected" => Modifier::Protected,
            "internal" => Modifier::Internal,
            "static" => Modifier::Static,
            "abstract" => Modifier::Abstract,
            "sealed" => Modifier::Sealed,
            "virtual" => Modifier::Virtual,
            "override" => Modifier::Override,
            "readonly" => Modifier::Readonly,
            "const" => Modifier::Const,
            "new" => Modifier::New,
            "partial" => Modifier::Partial,
            "async" => Modifier::Async,
            "unsafe" => Modifier::Unsafe,
            "extern" => Modifier::Extern,
            "volatile" => Modifier::Volatile,
            _ => return None,
        })
    }
}

/// Parameter modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamModifier {
    Ref,
    Out,
    Params,
    /// `this` on the first parameter of an extension method.
    This,
}

/// One segment of a possibly-qualified, possibly-generic type name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSegment {
    pub name: Identifier,
    pub type_args: Vec<TypeRef>,
}

/// A type reference as written in source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeRef {
    Predefined(PredefinedType, Span),
    /// `Foo`, `A.B.C<D>` - one segment per dotted part.
    Named { segments: Vec<TypeSegment>, span: Span },
    Array {
        element: Box<TypeRef>,
        rank: usize,
        span: Span,
    },
    Nullable { inner: Box<TypeRef>, span: Span },
    Pointer { inner: Box<TypeRef>, span: Span },
    Tuple {
        elements: Vec<(Option<Identifier>, TypeRef)>,
        span: Span,
    },
    /// `var` in a declaration position.
    Var(Span),
}

impl TypeRef {
    pub fn span(&self) -> Span {
        match self {
            TypeRef::Predefined(_, span)
            | TypeRef::Named { span, .. }
            | TypeRef::Array { span, .. }
            | TypeRef::Nullable { span, .. }
            | TypeRef::Pointer { span, .. }
            | TypeRef::Tuple { span, .. }
            | TypeRef::Var(span) => *span,
        }
    }

    /// The rightmost simple name, if this is a named type.
    pub fn simple_name(&self) -> Option<&str> {
        match self {
            TypeRef::Named { segments, .. } => {
                segments.last().map(|segment| segment.name.text.as_str())
            }
            _ => None,
        }
    }
}
