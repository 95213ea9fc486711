// csvb_vb/trivia - Target-side trivia
use serde::{Deserialize, Serialize};

/// Trivia attached to a VB statement or member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VbTrivia {
    /// `' body`
    Comment(String),
    /// `''' body` documentation comment line.
    DocComment(String),
    Directive(VbDirective),
    /// Inactive source preserved verbatim under a false `#If`.
    DisabledText(String),
}

/// VB preprocessor directives with a structural source counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VbDirective {
    Region(String),
    EndRegion,
    If(String),
    ElseIf(String),
    Else,
    EndIf,
}
