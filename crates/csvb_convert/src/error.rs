use csvb_ast::Span;
use csvb_parser::ParseError;

/// Error variants produced while converting C# syntax to VB.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// A node, token, or trivia kind with no registered conversion rule and
    /// no soft fallback. Aborts the whole conversion.
    #[error("No conversion is implemented for {construct}")]
    NotImplemented {
        construct: String,
        span: Option<Span>,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl ConvertError {
    pub fn not_implemented(construct: impl Into<String>, span: Option<Span>) -> Self {
        ConvertError::NotImplemented {
            construct: construct.into(),
            span,
        }
    }
}
