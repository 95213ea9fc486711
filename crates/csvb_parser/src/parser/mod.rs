// csvb_parser/parser - Recursive-descent C# parser
//
// One module per grammar category: types, expressions, statements,
// declarations. All share the token cursor defined here.
use crate::error::ParseError;
use csvb_ast::{Identifier, Span, Token, TokenKind, Trivia};

mod declarations;
mod expressions;
mod statements;
mod types;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Names of enclosing type declarations, used to recognize constructors.
    pub(crate) type_name_stack: Vec<String>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            type_name_stack: Vec::new(),
        }
    }

    // -- cursor -------------------------------------------------------------

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub(crate) fn peek_at(&self, lookahead: usize) -> &Token {
        let index = (self.pos + lookahead).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    pub(crate) fn kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.kind() == TokenKind::Eof
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Keyword or identifier text at the cursor.
    pub(crate) fn word(&self) -> Option<&str> {
        self.peek().word()
    }

    pub(crate) fn at_word(&self, text: &str) -> bool {
        self.word() == Some(text)
    }

    pub(crate) fn word_at(&self, lookahead: usize) -> Option<&str> {
        self.peek_at(lookahead).word()
    }

    pub(crate) fn eat_word(&mut self, text: &str) -> bool {
        if self.at_word(text) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_word(&mut self, text: &str) -> Result<Token, ParseError> {
        if self.at_word(text) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&format!("`{}`", text)))
        }
    }

    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.peek();
        if token.kind == TokenKind::Eof {
            ParseError::UnexpectedEof {
                expected: expected.to_string(),
            }
        } else {
            ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.text.clone(),
                span: token.span,
            }
        }
    }

    pub(crate) fn snapshot(&self) -> usize {
        self.pos
    }

    pub(crate) fn restore(&mut self, snapshot: usize) {
        self.pos = snapshot;
    }

    // -- spans and trivia ---------------------------------------------------

    pub(crate) fn span_here(&self) -> Span {
        self.peek().span
    }

    /// Span of the most recently consumed token.
    pub(crate) fn prev_span(&self) -> Span {
        if self.pos == 0 {
            self.peek().span
        } else {
            self.tokens[self.pos - 1].span
        }
    }

    pub(crate) fn span_from(&self, start: Span) -> Span {
        start.merge(self.prev_span())
    }

    /// Leading trivia of the token at the cursor (a statement or member
    /// about to be parsed).
    pub(crate) fn leading_trivia_here(&self) -> Vec<Trivia> {
        self.peek().leading_trivia.clone()
    }

    /// Trailing trivia of the most recently consumed token.
    pub(crate) fn trailing_trivia_behind(&self) -> Vec<Trivia> {
        if self.pos == 0 {
            vec![]
        } else {
            self.tokens[self.pos - 1].trailing_trivia.clone()
        }
    }

    pub(crate) fn identifier(&mut self) -> Result<Identifier, ParseError> {
        let token = self.expect(TokenKind::Identifier, "an identifier")?;
        Ok(Identifier::new(token.text, token.span))
    }

    /// Two adjacent `>` tokens form a right shift; the lexer leaves them
    /// split so generic argument lists close correctly.
    pub(crate) fn at_shift_right(&self) -> bool {
        self.check(TokenKind::Greater)
            && self.peek_at(1).kind == TokenKind::Greater
            && self.peek().span.end_offset == self.peek_at(1).span.start_offset
    }

    /// Checks whether the whole input was consumed, for the entry points'
    /// ordered-fallback contract.
    pub(crate) fn expect_eof(&self, construct: &str) -> Result<(), ParseError> {
        if self.is_eof() {
            Ok(())
        } else {
            Err(ParseError::TrailingInput {
                construct: construct.to_string(),
                span: self.peek().span,
            })
        }
    }
}
