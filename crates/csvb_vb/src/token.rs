// csvb_vb/token - Target-side tokens produced by the token converter
use crate::keywords::is_reserved_word;
use serde::{Deserialize, Serialize};

/// A single converted VB token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VbToken {
    pub kind: VbTokenKind,
    /// Rendered token text. For escaped identifiers this is the bare
    /// identifier; brackets are applied by `render_text`.
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VbTokenKind {
    Identifier { escaped: bool },
    Keyword,
    Literal,
    Punctuation,
    /// A source token with no VB equivalent. Never silently dropped; the
    /// caller still relocates its trivia.
    Empty,
}

impl VbToken {
    pub fn keyword(text: impl Into<String>) -> Self {
        Self {
            kind: VbTokenKind::Keyword,
            text: text.into(),
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            kind: VbTokenKind::Literal,
            text: text.into(),
        }
    }

    pub fn punctuation(text: impl Into<String>) -> Self {
        Self {
            kind: VbTokenKind::Punctuation,
            text: text.into(),
        }
    }

    pub fn empty() -> Self {
        Self {
            kind: VbTokenKind::Empty,
            text: String::new(),
        }
    }

    /// Build an identifier token, escaping when the text collides with a
    /// reserved word and escaping is allowed in this position.
    pub fn identifier(text: impl Into<String>, allow_escape: bool) -> Self {
        let text = text.into();
        let escaped = allow_escape && is_reserved_word(&text);
        Self {
            kind: VbTokenKind::Identifier { escaped },
            text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind == VbTokenKind::Empty
    }

    /// Final source spelling, with identifier escaping applied.
    pub fn render_text(&self) -> String {
        match self.kind {
            VbTokenKind::Identifier { escaped: true } => format!("[{}]", self.text),
            _ => self.text.clone(),
        }
    }
}

/// An identifier as stored in the VB tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VbIdentifier {
    pub text: String,
    pub escaped: bool,
}

impl VbIdentifier {
    /// Escapes automatically when the text is a reserved word.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let escaped = is_reserved_word(&text);
        Self { text, escaped }
    }

    /// Never escaped, for positions where collision is impossible
    /// (after a member-access dot).
    pub fn unescaped(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            escaped: false,
        }
    }

    pub fn render(&self) -> String {
        if self.escaped {
            format!("[{}]", self.text)
        } else {
            self.text.clone()
        }
    }
}

impl From<VbToken> for VbIdentifier {
    fn from(token: VbToken) -> Self {
        let escaped = matches!(token.kind, VbTokenKind::Identifier { escaped: true });
        Self {
            text: token.text,
            escaped,
        }
    }
}
