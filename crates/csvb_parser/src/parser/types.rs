// csvb_parser/parser/types - Type reference parsing
use super::Parser;
use crate::error::ParseError;
use csvb_ast::{PredefinedType, TokenKind, TypeRef, TypeSegment};

impl Parser {
    /// Parse a type reference, including suffixes (`?`, `*`, `[]`).
    pub(crate) fn parse_type(&mut self) -> Result<TypeRef, ParseError> {
        let start = self.span_here();
        let mut result = self.parse_type_core()?;

        loop {
            match self.kind() {
                TokenKind::Question => {
                    self.advance();
                    result = TypeRef::Nullable {
                        inner: Box::new(result),
                        span: self.span_from(start),
                    };
                }
                TokenKind::Star => {
                    self.advance();
                    result = TypeRef::Pointer {
                        inner: Box::new(result),
                        span: self.span_from(start),
                    };
                }
                TokenKind::OpenBracket => {
                    // Array ranks only; `[0]` here would be an element
                    // access, which type positions never contain.
                    if !matches!(
                        self.peek_at(1).kind,
                        TokenKind::CloseBracket | TokenKind::Comma
                    ) {
                        break;
                    }
                    self.advance();
                    let mut rank = 1;
                    while self.eat(TokenKind::Comma).is_some() {
                        rank += 1;
                    }
                    self.expect(TokenKind::CloseBracket, "`]`")?;
                    result = TypeRef::Array {
                        element: Box::new(result),
                        rank,
                        span: self.span_from(start),
                    };
                }
                _ => break,
            }
        }
        Ok(result)
    }

    fn parse_type_core(&mut self) -> Result<TypeRef, ParseError> {
        let start = self.span_here();

        if self.kind() == TokenKind::Keyword {
            if let Some(predefined) = self
                .word()
                .and_then(PredefinedType::from_keyword)
            {
                let token = self.advance();
                return Ok(TypeRef::Predefined(predefined, token.span));
            }
            return Err(self.unexpected("a type"));
        }

        if self.check(TokenKind::OpenParen) {
            return self.parse_tuple_type();
        }

        if self.at_word("var")
            && !matches!(self.peek_at(1).kind, TokenKind::Dot | TokenKind::Less)
        {
            let token = self.advance();
            return Ok(TypeRef::Var(token.span));
        }

        let mut segments = vec![self.parse_type_segment()?];
        while self.check(TokenKind::Dot) && self.peek_at(1).kind == TokenKind::Identifier {
            self.advance();
            segments.push(self.parse_type_segment()?);
        }
        Ok(TypeRef::Named {
            segments,
            span: self.span_from(start),
        })
    }

    fn parse_type_segment(&mut self) -> Result<TypeSegment, ParseError> {
        let name = self.identifier()?;
        let mut type_args = Vec::new();
        if self.check(TokenKind::Less) {
            self.advance();
            loop {
                type_args.push(self.parse_type()?);
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
            self.expect(TokenKind::Greater, "`>`")?;
        }
        Ok(TypeSegment { name, type_args })
    }

    fn parse_tuple_type(&mut self) -> Result<TypeRef, ParseError> {
        let start = self.span_here();
        self.expect(TokenKind::OpenParen, "`(`")?;
        let mut elements = Vec::new();
        loop {
            let element_type = self.parse_type()?;
            let name = if self.check(TokenKind::Identifier)
                && matches!(
                    self.peek_at(1).kind,
                    TokenKind::Comma | TokenKind::CloseParen
                ) {
                Some(self.identifier()?)
            } else {
                None
            };
            elements.push((name, element_type));
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect(TokenKind::CloseParen, "`)`")?;
        Ok(TypeRef::Tuple {
            elements,
            span: self.span_from(start),
        })
    }

    /// Backtracking probe: can the upcoming tokens be read as a type?
    pub(crate) fn try_parse_type(&mut self) -> Option<TypeRef> {
        let snapshot = self.snapshot();
        match self.parse_type() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.restore(snapshot);
                None
            }
        }
    }
}
