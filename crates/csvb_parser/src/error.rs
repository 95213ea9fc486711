use csvb_ast::Span;
use serde::{Deserialize, Serialize};

/// Error variants produced while parsing C# source.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
pub enum ParseError {
    #[error("Unexpected token `{found}` at line {}: expected {expected}", span.start_line)]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("Unrecognized input `{text}` at line {}", span.start_line)]
    UnrecognizedInput { text: String, span: Span },

    #[error("Input continues past the end of the parsed {construct} at line {}", span.start_line)]
    TrailingInput { construct: String, span: Span },

    #[error("Malformed literal `{text}`: {message}")]
    MalformedLiteral {
        text: String,
        message: String,
        span: Span,
    },
}

impl ParseError {
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnrecognizedInput { span, .. }
            | ParseError::TrailingInput { span, .. }
            | ParseError::MalformedLiteral { span, .. } => Some(*span),
            ParseError::UnexpectedEof { .. } => None,
        }
    }
}
