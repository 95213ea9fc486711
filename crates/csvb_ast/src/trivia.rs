// csvb_ast/trivia - Comments, whitespace, and preprocessor directives
use crate::types::Span;
use serde::{Deserialize, Serialize};

/// Non-semantic text attached to a token.
///
/// Comment variants store the body with the comment marker already stripped;
/// the converter re-attaches the target language's marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Trivia {
    Whitespace(String),
    EndOfLine(String),
    /// `// body`
    LineComment(String),
    /// `/* body */` - body may span lines.
    BlockComment(String),
    /// One `/// body` line of a documentation comment.
    DocComment(String),
    Directive(DirectiveTrivia),
    /// Source text excluded by an inactive `#if` region, kept verbatim.
    DisabledText(String),
}

/// A preprocessor directive, split out of the raw trivia stream.
///
/// `raw` always holds the full directive line as written, so directives with
/// no target-language equivalent can be echoed into a placeholder comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectiveTrivia {
    pub kind: DirectiveKind,
    pub raw: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DirectiveKind {
    Region { name: String },
    EndRegion,
    If { condition: String },
    Elif { condition: String },
    Else,
    EndIf,
    Define { symbol: String },
    Undef { symbol: String },
    Pragma { text: String },
    Line { text: String },
    Warning { text: String },
    Error { text: String },
    Nullable { text: String },
    /// A directive the lexer did not recognize. Conversion of this kind is a
    /// hard failure rather than a silent drop.
    Unknown,
}
