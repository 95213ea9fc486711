// csvb_parser/parser/expressions - Precedence-climbing expression parser
//
// Precedence, low to high: assignment/ternary, ??, ||, &&, |, ^, &,
// equality, relational (with `is`/`as`), shift, additive, multiplicative,
// unary, postfix.
use super::Parser;
use crate::error::ParseError;
use crate::lexer::tokenize;
use csvb_ast::*;

impl Parser {
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Result<Expression, ParseError> {
        let start = self.span_here();
        let left = self.parse_conditional()?;
        let op = match self.kind() {
            TokenKind::Equal => AssignmentOp::Assign,
            TokenKind::PlusEqual => AssignmentOp::AddAssign,
            TokenKind::MinusEqual => AssignmentOp::SubtractAssign,
            TokenKind::StarEqual => AssignmentOp::MultiplyAssign,
            TokenKind::SlashEqual => AssignmentOp::DivideAssign,
            TokenKind::PercentEqual => AssignmentOp::ModuloAssign,
            TokenKind::AmpEqual => AssignmentOp::AndAssign,
            TokenKind::PipeEqual => AssignmentOp::OrAssign,
            TokenKind::CaretEqual => AssignmentOp::XorAssign,
            TokenKind::LessLessEqual => AssignmentOp::ShiftLeftAssign,
            TokenKind::GreaterGreaterEqual => AssignmentOp::ShiftRightAssign,
            _ => return Ok(left),
        };
        self.advance();
        let value = self.parse_assignment()?;
        Ok(Expression::Assignment {
            target: Box::new(left),
            op,
            value: Box::new(value),
            span: self.span_from(start),
        })
    }

    fn parse_conditional(&mut self) -> Result<Expression, ParseError> {
        let start = self.span_here();
        let condition = self.parse_coalesce()?;
        if !self.check(TokenKind::Question) {
            return Ok(condition);
        }
        self.advance();
        let when_true = self.parse_expression()?;
        self.expect(TokenKind::Colon, "`:`")?;
        let when_false = self.parse_expression()?;
        Ok(Expression::Conditional {
            condition: Box::new(condition),
            when_true: Box::new(when_true),
            when_false: Box::new(when_false),
            span: self.span_from(start),
        })
    }

    fn parse_coalesce(&mut self) -> Result<Expression, ParseError> {
        let start = self.span_here();
        let left = self.parse_binary(0)?;
        if self.eat(TokenKind::QuestionQuestion).is_none() {
            return Ok(left);
        }
        let right = self.parse_coalesce()?;
        Ok(Expression::Binary {
            left: Box::new(left),
            op: BinaryOp::Coalesce,
            right: Box::new(right),
            span: self.span_from(start),
        })
    }

    /// Left-associative binary levels from `||` down to equality; relational
    /// and tighter levels continue below.
    fn parse_binary(&mut self, level: usize) -> Result<Expression, ParseError> {
        const LEVELS: usize = 6;
        if level >= LEVELS {
            return self.parse_relational();
        }
        let start = self.span_here();
        let mut left = self.parse_binary(level + 1)?;
        loop {
            let op = match (level, self.kind()) {
                (0, TokenKind::PipePipe) => BinaryOp::Or,
                (1, TokenKind::AmpAmp) => BinaryOp::And,
                (2, TokenKind::Pipe) => BinaryOp::BitOr,
                (3, TokenKind::Caret) => BinaryOp::BitXor,
                (4, TokenKind::Amp) => BinaryOp::BitAnd,
                (5, TokenKind::EqualEqual) => BinaryOp::Equal,
                (5, TokenKind::BangEqual) => BinaryOp::NotEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_binary(level + 1)?;
            left = Expression::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
                span: self.span_from(start),
            };
        }
        Ok(left)
    }

    /// Relational comparisons plus `is` / `as`, between equality and shift.
    fn parse_relational(&mut self) -> Result<Expression, ParseError> {
        let start = self.span_here();
        let mut left = self.parse_shift()?;
        loop {
            if self.at_word("is") {
                self.advance();
                let target_type = self.parse_type()?;
                if self.check(TokenKind::Identifier) && !self.at_query_keyword() {
                    let name = self.identifier()?;
                    left = Expression::IsPattern {
                        expr: Box::new(left),
                        target_type,
                        name,
                        span: self.span_from(start),
                    };
                } else {
                    left = Expression::Is {
                        expr: Box::new(left),
                        target_type,
                        span: self.span_from(start),
                    };
                }
                continue;
            }
            if self.at_word("as") {
                self.advance();
                let target_type = self.parse_type()?;
                left = Expression::As {
                    expr: Box::new(left),
                    target_type,
                    span: self.span_from(start),
                };
                continue;
            }
            let op = match self.kind() {
                TokenKind::Less => BinaryOp::Less,
                TokenKind::LessEqual => BinaryOp::LessEqual,
                TokenKind::Greater if !self.at_shift_right() => BinaryOp::Greater,
                TokenKind::GreaterEqual => BinaryOp::GreaterEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_shift()?;
            left = Expression::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
                span: self.span_from(start),
            };
        }
        Ok(left)
    }

    fn parse_shift(&mut self) -> Result<Expression, ParseError> {
        let start = self.span_here();
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.kind() {
                TokenKind::LessLess => BinaryOp::ShiftLeft,
                TokenKind::Greater if self.at_shift_right() => {
                    self.advance(); // first `>` of the pair
                    BinaryOp::ShiftRight
                }
                _ => break,
            };
            self.advance();
            let right = self.parse_additive()?;
            left = Expression::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
                span: self.span_from(start),
            };
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expression, ParseError> {
        let start = self.span_here();
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expression::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
                span: self.span_from(start),
            };
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expression, ParseError> {
        let start = self.span_here();
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.kind() {
                TokenKind::Star => BinaryOp::Multiply,
                TokenKind::Slash => BinaryOp::Divide,
                TokenKind::Percent => BinaryOp::Modulo,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = Expression::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
                span: self.span_from(start),
            };
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expression, ParseError> {
        let start = self.span_here();
        let op = match self.kind() {
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Minus),
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            TokenKind::PlusPlus => Some(UnaryOp::PreIncrement),
            TokenKind::MinusMinus => Some(UnaryOp::PreDecrement),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let operand = self.parse_unary()?;
            return Ok(Expression::Unary {
                op,
                operand: Box::new(operand),
                span: self.span_from(start),
            });
        }

        if self.at_word("await") && self.token_starts_expression(1) {
            self.advance();
            let operand = self.parse_unary()?;
            return Ok(Expression::Await {
                expr: Box::new(operand),
                span: self.span_from(start),
            });
        }

        if self.at_word("throw") {
            self.advance();
            let operand = self.parse_expression()?;
            return Ok(Expression::Throw {
                expr: Box::new(operand),
                span: self.span_from(start),
            });
        }

        if self.check(TokenKind::OpenParen) {
            if let Some(cast) = self.try_parse_cast()? {
                return Ok(cast);
            }
        }

        let primary = self.parse_primary()?;
        self.parse_postfix(primary)
    }

    /// `(T)x` versus `(x)`: accept a cast only when the parenthesized text
    /// reads entirely as a type and what follows can begin a cast operand.
    /// A bare named type additionally requires the operand not to open with
    /// `(`, so `(x)(y)` stays an invocation of `(x)`.
    fn try_parse_cast(&mut self) -> Result<Option<Expression>, ParseError> {
        let snapshot = self.snapshot();
        let start = self.span_here();
        self.advance(); // (
        let Some(target_type) = self.try_parse_type() else {
            self.restore(snapshot);
            return Ok(None);
        };
        if self.eat(TokenKind::CloseParen).is_none() {
            self.restore(snapshot);
            return Ok(None);
        }
        let plain_name = matches!(
            target_type,
            TypeRef::Named { ref segments, .. } if segments.len() == 1
                && segments[0].type_args.is_empty()
        );
        let operand_ok = match self.kind() {
            TokenKind::Identifier
            | TokenKind::IntLiteral
            | TokenKind::RealLiteral
            | TokenKind::StringLiteral
            | TokenKind::VerbatimStringLiteral
            | TokenKind::InterpolatedStringLiteral
            | TokenKind::CharLiteral
            | TokenKind::Bang
            | TokenKind::Tilde => true,
            TokenKind::OpenParen => !plain_name,
            TokenKind::Keyword => self.token_starts_expression(0),
            _ => false,
        };
        if !operand_ok {
            self.restore(snapshot);
            return Ok(None);
        }
        let expr = self.parse_unary()?;
        Ok(Some(Expression::Cast {
            target_type,
            expr: Box::new(expr),
            span: self.span_from(start),
        }))
    }

    fn token_starts_expression(&self, lookahead: usize) -> bool {
        let token = self.peek_at(lookahead);
        match token.kind {
            TokenKind::Identifier
            | TokenKind::IntLiteral
            | TokenKind::RealLiteral
            | TokenKind::StringLiteral
            | TokenKind::VerbatimStringLiteral
            | TokenKind::InterpolatedStringLiteral
            | TokenKind::CharLiteral
            | TokenKind::OpenParen
            | TokenKind::Bang
            | TokenKind::Tilde
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus => true,
            TokenKind::Keyword => matches!(
                token.text.as_str(),
                "this"
                    | "base"
                    | "new"
                    | "typeof"
                    | "default"
                    | "sizeof"
                    | "checked"
                    | "unchecked"
                    | "stackalloc"
                    | "true"
                    | "false"
                    | "null"
                    | "delegate"
                    | "__makeref"
                    | "__reftype"
                    | "__refvalue"
            ) || PredefinedType::from_keyword(&token.text).is_some(),
            _ => false,
        }
    }

    fn parse_postfix(&mut self, mut expr: Expression) -> Result<Expression, ParseError> {
        let start = expr.span();
        loop {
            match self.kind() {
                TokenKind::Dot => {
                    self.advance();
                    let name = self.identifier()?;
                    let type_args = self.try_parse_invocation_type_args();
                    expr = Expression::MemberAccess {
                        object: Box::new(expr),
                        name,
                        type_args,
                        span: self.span_from(start),
                    };
                }
                TokenKind::QuestionDot => {
                    self.advance();
                    let name = self.identifier()?;
                    expr = Expression::NullSafeMemberAccess {
                        object: Box::new(expr),
                        name,
                        span: self.span_from(start),
                    };
                }
                TokenKind::OpenParen => {
                    let args = self.parse_argument_list()?;
                    expr = Expression::Invocation {
                        callee: Box::new(expr),
                        args,
                        span: self.span_from(start),
                    };
                }
                TokenKind::OpenBracket => {
                    self.advance();
                    let mut args = Vec::new();
                    loop {
                        args.push(self.parse_expression()?);
                        if self.eat(TokenKind::Comma).is_none() {
                            break;
                        }
                    }
                    self.expect(TokenKind::CloseBracket, "`]`")?;
                    expr = Expression::ElementAccess {
                        object: Box::new(expr),
                        args,
                        span: self.span_from(start),
                    };
                }
                TokenKind::PlusPlus => {
                    self.advance();
                    expr = Expression::PostfixUnary {
                        op: PostfixOp::Increment,
                        operand: Box::new(expr),
                        span: self.span_from(start),
                    };
                }
                TokenKind::MinusMinus => {
                    self.advance();
                    expr = Expression::PostfixUnary {
                        op: PostfixOp::Decrement,
                        operand: Box::new(expr),
                        span: self.span_from(start),
                    };
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    /// `<T, U>` immediately followed by `(` - explicit generic invocation.
    fn try_parse_invocation_type_args(&mut self) -> Vec<TypeRef> {
        if !self.check(TokenKind::Less) {
            return vec![];
        }
        let snapshot = self.snapshot();
        self.advance();
        let mut type_args = Vec::new();
        loop {
            match self.try_parse_type() {
                Some(parsed) => type_args.push(parsed),
                None => {
                    self.restore(snapshot);
                    return vec![];
                }
            }
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        if self.eat(TokenKind::Greater).is_none() || !self.check(TokenKind::OpenParen) {
            self.restore(snapshot);
            return vec![];
        }
        type_args
    }

    pub(crate) fn parse_argument_list(&mut self) -> Result<Vec<Argument>, ParseError> {
        self.expect(TokenKind::OpenParen, "`(`")?;
        let mut args = Vec::new();
        if !self.check(TokenKind::CloseParen) {
            loop {
                args.push(self.parse_argument()?);
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        self.expect(TokenKind::CloseParen, "`)`")?;
        Ok(args)
    }

    fn parse_argument(&mut self) -> Result<Argument, ParseError> {
        let start = self.span_here();
        let name = if self.check(TokenKind::Identifier)
            && self.peek_at(1).kind == TokenKind::Colon
        {
            let name = self.identifier()?;
            self.advance(); // :
            Some(name)
        } else {
            None
        };
        let modifier = if self.eat_word("ref") {
            Some(ParamModifier::Ref)
        } else if self.eat_word("out") {
            Some(ParamModifier::Out)
        } else {
            None
        };
        let value = self.parse_expression()?;
        Ok(Argument {
            name,
            modifier,
            value,
            span: self.span_from(start),
        })
    }

    // -- primaries ----------------------------------------------------------

    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        match self.kind() {
            TokenKind::IntLiteral | TokenKind::RealLiteral => {
                let token = self.advance();
                Ok(Expression::Literal(Literal::Number(token.text), token.span))
            }
            TokenKind::StringLiteral | TokenKind::VerbatimStringLiteral => {
                let token = self.advance();
                let value = match token.value {
                    TokenValue::String(value) => value,
                    _ => String::new(),
                };
                Ok(Expression::Literal(
                    Literal::String {
                        value,
                        verbatim: token.kind == TokenKind::VerbatimStringLiteral,
                    },
                    token.span,
                ))
            }
            TokenKind::InterpolatedStringLiteral => self.parse_interpolated(),
            TokenKind::CharLiteral => {
                let token = self.advance();
                let value = match token.value {
                    TokenValue::Char(value) => value,
                    _ => '\0',
                };
                Ok(Expression::Literal(Literal::Character(value), token.span))
            }
            TokenKind::Keyword => self.parse_keyword_primary(),
            TokenKind::Identifier => self.parse_identifier_primary(),
            TokenKind::OpenParen => self.parse_paren_primary(),
            _ => Err(self.unexpected("an expression")),
        }
    }

    fn parse_keyword_primary(&mut self) -> Result<Expression, ParseError> {
        let start = self.span_here();
        let word = self.word().unwrap_or_default().to_string();
        match word.as_str() {
            "true" => {
                let token = self.advance();
                Ok(Expression::Literal(Literal::Boolean(true), token.span))
            }
            "false" => {
                let token = self.advance();
                Ok(Expression::Literal(Literal::Boolean(false), token.span))
            }
            "null" => {
                let token = self.advance();
                Ok(Expression::Literal(Literal::Null, token.span))
            }
            "this" => {
                let token = self.advance();
                Ok(Expression::This(token.span))
            }
            "base" => {
                let token = self.advance();
                Ok(Expression::Base(token.span))
            }
            "new" => self.parse_new(),
            "typeof" => {
                self.advance();
                self.expect(TokenKind::OpenParen, "`(`")?;
                let target_type = self.parse_type()?;
                self.expect(TokenKind::CloseParen, "`)`")?;
                Ok(Expression::TypeOf {
                    target_type,
                    span: self.span_from(start),
                })
            }
            "sizeof" => {
                self.advance();
                self.expect(TokenKind::OpenParen, "`(`")?;
                let target_type = self.parse_type()?;
                self.expect(TokenKind::CloseParen, "`)`")?;
                Ok(Expression::SizeOf {
                    target_type,
                    span: self.span_from(start),
                })
            }
            "default" => {
                self.advance();
                let target_type = if self.check(TokenKind::OpenParen) {
                    self.advance();
                    let parsed = self.parse_type()?;
                    self.expect(TokenKind::CloseParen, "`)`")?;
                    Some(parsed)
                } else {
                    None
                };
                Ok(Expression::Default {
                    target_type,
                    span: self.span_from(start),
                })
            }
            "checked" | "unchecked" => {
                self.advance();
                self.expect(TokenKind::OpenParen, "`(`")?;
                let expr = self.parse_expression()?;
                self.expect(TokenKind::CloseParen, "`)`")?;
                Ok(Expression::Checked {
                    checked: word == "checked",
                    expr: Box::new(expr),
                    span: self.span_from(start),
                })
            }
            "stackalloc" => {
                self.advance();
                let target_type = self.parse_type()?;
                let size = if self.eat(TokenKind::OpenBracket).is_some() {
                    let size = self.parse_expression()?;
                    self.expect(TokenKind::CloseBracket, "`]`")?;
                    Some(Box::new(size))
                } else {
                    None
                };
                Ok(Expression::StackAlloc {
                    target_type,
                    size,
                    span: self.span_from(start),
                })
            }
            "__makeref" => {
                self.advance();
                self.expect(TokenKind::OpenParen, "`(`")?;
                let expr = self.parse_expression()?;
                self.expect(TokenKind::CloseParen, "`)`")?;
                Ok(Expression::MakeRef {
                    expr: Box::new(expr),
                    span: self.span_from(start),
                })
            }
            "__reftype" => {
                self.advance();
                self.expect(TokenKind::OpenParen, "`(`")?;
                let expr = self.parse_expression()?;
                self.expect(TokenKind::CloseParen, "`)`")?;
                Ok(Expression::RefType {
                    expr: Box::new(expr),
                    span: self.span_from(start),
                })
            }
            "__refvalue" => {
                self.advance();
                self.expect(TokenKind::OpenParen, "`(`")?;
                let expr = self.parse_expression()?;
                self.expect(TokenKind::Comma, "`,`")?;
                let target_type = self.parse_type()?;
                self.expect(TokenKind::CloseParen, "`)`")?;
                Ok(Expression::RefValue {
                    expr: Box::new(expr),
                    target_type,
                    span: self.span_from(start),
                })
            }
            "delegate" => self.parse_anonymous_method(),
            _ => {
                if let Some(predefined) = PredefinedType::from_keyword(&word) {
                    let token = self.advance();
                    return Ok(Expression::PredefinedType(predefined, token.span));
                }
                Err(self.unexpected("an expression"))
            }
        }
    }

    fn parse_identifier_primary(&mut self) -> Result<Expression, ParseError> {
        // Query comprehension.
        if self.at_word("from") {
            let snapshot = self.snapshot();
            match self.parse_query() {
                Ok(query) => return Ok(query),
                Err(_) => self.restore(snapshot),
            }
        }

        // nameof(expr).
        if self.at_word("nameof") && self.peek_at(1).kind == TokenKind::OpenParen {
            let start = self.span_here();
            self.advance();
            self.advance();
            let expr = self.parse_expression()?;
            self.expect(TokenKind::CloseParen, "`)`")?;
            return Ok(Expression::NameOf {
                expr: Box::new(expr),
                span: self.span_from(start),
            });
        }

        // async lambdas.
        if self.at_word("async") {
            let next = self.peek_at(1);
            if next.kind == TokenKind::Identifier && self.peek_at(2).kind == TokenKind::FatArrow {
                self.advance();
                return self.parse_lambda_single_param(true);
            }
            if next.kind == TokenKind::OpenParen && self.paren_lambda_ahead(1) {
                self.advance();
                return self.parse_lambda_parenthesized(true);
            }
        }

        // `x => ...`
        if self.peek_at(1).kind == TokenKind::FatArrow {
            return self.parse_lambda_single_param(false);
        }

        let name = self.identifier()?;
        let type_args = self.try_parse_invocation_type_args();
        if type_args.is_empty() {
            Ok(Expression::Identifier(name))
        } else {
            let span = self.span_from(name.span);
            Ok(Expression::GenericName {
                name,
                type_args,
                span,
            })
        }
    }

    fn parse_paren_primary(&mut self) -> Result<Expression, ParseError> {
        if self.paren_lambda_ahead(0) {
            return self.parse_lambda_parenthesized(false);
        }
        let start = self.span_here();
        self.advance(); // (
        let first = self.parse_expression()?;
        if self.check(TokenKind::Comma) {
            // Tuple expression.
            let mut elements = vec![Argument {
                name: None,
                modifier: None,
                value: first,
                span: start,
            }];
            while self.eat(TokenKind::Comma).is_some() {
                elements.push(self.parse_argument()?);
            }
            self.expect(TokenKind::CloseParen, "`)`")?;
            return Ok(Expression::Tuple {
                elements,
                span: self.span_from(start),
            });
        }
        self.expect(TokenKind::CloseParen, "`)`")?;
        Ok(Expression::Paren {
            expr: Box::new(first),
            span: self.span_from(start),
        })
    }

    /// Does a balanced `( ... )` starting at `lookahead` lead into `=>`?
    fn paren_lambda_ahead(&self, lookahead: usize) -> bool {
        if self.peek_at(lookahead).kind != TokenKind::OpenParen {
            return false;
        }
        let mut depth = 0usize;
        let mut index = lookahead;
        loop {
            let token = self.peek_at(index);
            match token.kind {
                TokenKind::OpenParen => depth += 1,
                TokenKind::CloseParen => {
                    depth -= 1;
                    if depth == 0 {
                        return self.peek_at(index + 1).kind == TokenKind::FatArrow;
                    }
                }
                TokenKind::Eof => return false,
                _ => {}
            }
            index += 1;
        }
    }

    fn parse_lambda_single_param(&mut self, is_async: bool) -> Result<Expression, ParseError> {
        let start = self.span_here();
        let name = self.identifier()?;
        let param = Parameter {
            attribute_lists: vec![],
            modifiers: vec![],
            param_type: None,
            name,
            default_value: None,
            span: start,
        };
        self.expect(TokenKind::FatArrow, "`=>`")?;
        let body = self.parse_lambda_body()?;
        Ok(Expression::Lambda {
            params: vec![param],
            body,
            is_async,
            span: self.span_from(start),
        })
    }

    fn parse_lambda_parenthesized(&mut self, is_async: bool) -> Result<Expression, ParseError> {
        let start = self.span_here();
        self.expect(TokenKind::OpenParen, "`(`")?;
        let mut params = Vec::new();
        if !self.check(TokenKind::CloseParen) {
            loop {
                params.push(self.parse_lambda_parameter()?);
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        self.expect(TokenKind::CloseParen, "`)`")?;
        self.expect(TokenKind::FatArrow, "`=>`")?;
        let body = self.parse_lambda_body()?;
        Ok(Expression::Lambda {
            params,
            body,
            is_async,
            span: self.span_from(start),
        })
    }

    fn parse_lambda_parameter(&mut self) -> Result<Parameter, ParseError> {
        let start = self.span_here();
        let mut modifiers = Vec::new();
        if self.eat_word("ref") {
            modifiers.push(ParamModifier::Ref);
        } else if self.eat_word("out") {
            modifiers.push(ParamModifier::Out);
        }
        // Typed parameter when a type is followed by a name.
        let snapshot = self.snapshot();
        if let Some(param_type) = self.try_parse_type() {
            if self.check(TokenKind::Identifier) {
                let name = self.identifier()?;
                return Ok(Parameter {
                    attribute_lists: vec![],
                    modifiers,
                    param_type: Some(param_type),
                    name,
                    default_value: None,
                    span: self.span_from(start),
                });
            }
            self.restore(snapshot);
        }
        let name = self.identifier()?;
        Ok(Parameter {
            attribute_lists: vec![],
            modifiers,
            param_type: None,
            name,
            default_value: None,
            span: self.span_from(start),
        })
    }

    fn parse_lambda_body(&mut self) -> Result<LambdaBody, ParseError> {
        if self.check(TokenKind::OpenBrace) {
            let block = self.parse_block()?;
            let statements = match block {
                Statement::Block(block) => block.statements,
                other => vec![other],
            };
            Ok(LambdaBody::Block(statements))
        } else {
            Ok(LambdaBody::Expression(Box::new(self.parse_expression()?)))
        }
    }

    /// C# 2 anonymous method: `delegate (params) { body }`.
    fn parse_anonymous_method(&mut self) -> Result<Expression, ParseError> {
        let start = self.span_here();
        self.expect_word("delegate")?;
        let mut params = Vec::new();
        if self.check(TokenKind::OpenParen) {
            self.advance();
            if !self.check(TokenKind::CloseParen) {
                loop {
                    params.push(self.parse_lambda_parameter()?);
                    if self.eat(TokenKind::Comma).is_none() {
                        break;
                    }
                }
            }
            self.expect(TokenKind::CloseParen, "`)`")?;
        }
        let body = self.parse_lambda_body()?;
        Ok(Expression::Lambda {
            params,
            body,
            is_async: false,
            span: self.span_from(start),
        })
    }

    // -- object/array creation ----------------------------------------------

    fn parse_new(&mut self) -> Result<Expression, ParseError> {
        let start = self.span_here();
        self.expect_word("new")?;

        // Anonymous object.
        if self.check(TokenKind::OpenBrace) {
            return self.parse_anonymous_object(start);
        }

        // Implicitly-typed array: `new[] { ... }`.
        if self.check(TokenKind::OpenBracket) {
            self.advance();
            self.expect(TokenKind::CloseBracket, "`]`")?;
            let initializer = self.parse_initializer_expression()?;
            return Ok(Expression::ArrayCreation {
                element_type: None,
                rank_sizes: vec![],
                initializer: Some(initializer),
                span: self.span_from(start),
            });
        }

        let target_type = self.parse_type()?;

        // Sized array creation: `new T[5]`, `new T[5][]`.
        if self.check(TokenKind::OpenBracket) {
            self.advance();
            let mut rank_sizes = Vec::new();
            if !self.check(TokenKind::CloseBracket) {
                loop {
                    rank_sizes.push(Some(self.parse_expression()?));
                    if self.eat(TokenKind::Comma).is_none() {
                        break;
                    }
                }
            }
            self.expect(TokenKind::CloseBracket, "`]`")?;
            let mut element_type = target_type;
            while self.check(TokenKind::OpenBracket)
                && self.peek_at(1).kind == TokenKind::CloseBracket
            {
                self.advance();
                self.advance();
                element_type = TypeRef::Array {
                    element: Box::new(element_type),
                    rank: 1,
                    span: self.span_from(start),
                };
            }
            let initializer = if self.check(TokenKind::OpenBrace) {
                Some(self.parse_initializer_expression()?)
            } else {
                None
            };
            return Ok(Expression::ArrayCreation {
                element_type: Some(element_type),
                rank_sizes,
                initializer,
                span: self.span_from(start),
            });
        }

        let args = if self.check(TokenKind::OpenParen) {
            self.parse_argument_list()?
        } else {
            vec![]
        };
        let initializer = if self.check(TokenKind::OpenBrace) {
            Some(self.parse_initializer_expression()?)
        } else {
            None
        };
        Ok(Expression::ObjectCreation {
            target_type,
            args,
            initializer,
            span: self.span_from(start),
        })
    }

    fn parse_anonymous_object(&mut self, start: Span) -> Result<Expression, ParseError> {
        self.expect(TokenKind::OpenBrace, "`{`")?;
        let mut members = Vec::new();
        while !self.check(TokenKind::CloseBrace) {
            let member_start = self.span_here();
            let name = if self.check(TokenKind::Identifier)
                && self.peek_at(1).kind == TokenKind::Equal
            {
                let name = self.identifier()?;
                self.advance(); // =
                Some(name)
            } else {
                None
            };
            let value = self.parse_expression()?;
            members.push(AnonymousObjectMember {
                name,
                value,
                span: self.span_from(member_start),
            });
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect(TokenKind::CloseBrace, "`}`")?;
        Ok(Expression::AnonymousObject {
            members,
            span: self.span_from(start),
        })
    }

    /// `{ ... }` initializer; classified as Object when every element is an
    /// assignment to a simple name, Collection otherwise.
    pub(crate) fn parse_initializer_expression(
        &mut self,
    ) -> Result<InitializerExpression, ParseError> {
        let start = self.span_here();
        self.expect(TokenKind::OpenBrace, "`{`")?;
        let mut elements = Vec::new();
        while !self.check(TokenKind::CloseBrace) {
            if self.check(TokenKind::OpenBrace) {
                let nested = self.parse_initializer_expression()?;
                elements.push(Expression::Initializer(nested));
            } else {
                elements.push(self.parse_expression()?);
            }
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect(TokenKind::CloseBrace, "`}`")?;
        let object_shaped = !elements.is_empty()
            && elements.iter().all(|element| {
                matches!(
                    element,
                    Expression::Assignment {
                        target,
                        op: AssignmentOp::Assign,
                        ..
                    } if matches!(target.as_ref(), Expression::Identifier(_))
                )
            });
        Ok(InitializerExpression {
            kind: if object_shaped {
                InitializerKind::Object
            } else {
                InitializerKind::Collection
            },
            elements,
            span: self.span_from(start),
        })
    }

    // -- interpolated strings -----------------------------------------------

    fn parse_interpolated(&mut self) -> Result<Expression, ParseError> {
        let token = self.advance();
        let raw = match &token.value {
            TokenValue::String(value) => value.clone(),
            _ => String::new(),
        };
        let mut parts = Vec::new();
        let mut text = String::new();
        let chars: Vec<char> = raw.chars().collect();
        let mut index = 0;
        while index < chars.len() {
            let c = chars[index];
            if c == '{' && chars.get(index + 1) == Some(&'{') {
                text.push('{');
                index += 2;
                continue;
            }
            if c == '}' && chars.get(index + 1) == Some(&'}') {
                text.push('}');
                index += 2;
                continue;
            }
            if c == '{' {
                if !text.is_empty() {
                    parts.push(InterpolatedPart::Text(std::mem::take(&mut text)));
                }
                // Find the matching close brace.
                let mut depth = 1usize;
                let mut end = index + 1;
                let mut in_string = false;
                while end < chars.len() {
                    let inner = chars[end];
                    if in_string {
                        if inner == '\\' {
                            end += 1;
                        } else if inner == '"' {
                            in_string = false;
                        }
                    } else {
                        match inner {
                            '"' => in_string = true,
                            '{' => depth += 1,
                            '}' => {
                                depth -= 1;
                                if depth == 0 {
                                    break;
                                }
                            }
                            _ => {}
                        }
                    }
                    end += 1;
                }
                let hole: String = chars[index + 1..end].iter().collect();
                let (expr_text, format) = split_interpolation_hole(&hole);
                let mut inner_parser = Parser::new(tokenize(&expr_text));
                let expr = inner_parser.parse_expression()?;
                inner_parser.expect_eof("interpolated expression")?;
                parts.push(InterpolatedPart::Expression { expr, format });
                index = end + 1;
                continue;
            }
            text.push(c);
            index += 1;
        }
        if !text.is_empty() {
            parts.push(InterpolatedPart::Text(text));
        }
        Ok(Expression::Interpolated {
            parts,
            span: token.span,
        })
    }

    // -- queries ------------------------------------------------------------

    pub(crate) fn at_query_keyword(&self) -> bool {
        matches!(
            self.word(),
            Some(
                "from" | "where" | "let" | "orderby" | "join" | "select" | "group" | "into"
                    | "on" | "equals" | "by" | "ascending" | "descending"
            )
        )
    }

    fn parse_query(&mut self) -> Result<Expression, ParseError> {
        let start = self.span_here();
        let from = self.parse_from_clause()?;
        let body = self.parse_query_body()?;
        Ok(Expression::Query(Box::new(QueryExpression {
            from,
            body,
            span: self.span_from(start),
        })))
    }

    fn parse_from_clause(&mut self) -> Result<FromClause, ParseError> {
        let start = self.span_here();
        self.expect_word("from")?;
        let (range_type, name) = self.parse_range_variable()?;
        self.expect_word("in")?;
        let source = self.parse_expression()?;
        Ok(FromClause {
            range_type,
            name,
            source,
            span: self.span_from(start),
        })
    }

    /// `[type] name` before an `in` keyword.
    fn parse_range_variable(
        &mut self,
    ) -> Result<(Option<TypeRef>, Identifier), ParseError> {
        let snapshot = self.snapshot();
        if let Some(range_type) = self.try_parse_type() {
            if self.check(TokenKind::Identifier) && self.word_at(1) == Some("in") {
                let name = self.identifier()?;
                return Ok((Some(range_type), name));
            }
            self.restore(snapshot);
        }
        let name = self.identifier()?;
        Ok((None, name))
    }

    fn parse_query_body(&mut self) -> Result<QueryBody, ParseError> {
        let mut clauses = Vec::new();
        let finish = loop {
            if self.at_word("from") {
                clauses.push(QueryClause::From(self.parse_from_clause()?));
            } else if self.at_word("where") {
                let start = self.span_here();
                self.advance();
                let condition = self.parse_expression()?;
                clauses.push(QueryClause::Where {
                    condition,
                    span: self.span_from(start),
                });
            } else if self.at_word("let") {
                let start = self.span_here();
                self.advance();
                let name = self.identifier()?;
                self.expect(TokenKind::Equal, "`=`")?;
                let value = self.parse_expression()?;
                clauses.push(QueryClause::Let {
                    name,
                    value,
                    span: self.span_from(start),
                });
            } else if self.at_word("orderby") {
                let start = self.span_here();
                self.advance();
                let mut orderings = Vec::new();
                loop {
                    let expr = self.parse_expression()?;
                    let descending = if self.eat_word("descending") {
                        true
                    } else {
                        self.eat_word("ascending");
                        false
                    };
                    orderings.push(Ordering { expr, descending });
                    if self.eat(TokenKind::Comma).is_none() {
                        break;
                    }
                }
                clauses.push(QueryClause::OrderBy {
                    orderings,
                    span: self.span_from(start),
                });
            } else if self.at_word("join") {
                let start = self.span_here();
                self.advance();
                let (range_type, name) = self.parse_range_variable()?;
                self.expect_word("in")?;
                let source = self.parse_expression()?;
                self.expect_word("on")?;
                let left_key = self.parse_expression()?;
                self.expect_word("equals")?;
                let right_key = self.parse_expression()?;
                let into = if self.eat_word("into") {
                    Some(self.identifier()?)
                } else {
                    None
                };
                clauses.push(QueryClause::Join(JoinClause {
                    range_type,
                    name,
                    source,
                    left_key,
                    right_key,
                    into,
                    span: self.span_from(start),
                }));
            } else if self.at_word("select") {
                let start = self.span_here();
                self.advance();
                let expr = self.parse_expression()?;
                break SelectOrGroup::Select {
                    expr,
                    span: self.span_from(start),
                };
            } else if self.at_word("group") {
                let start = self.span_here();
                self.advance();
                let element = self.parse_expression()?;
                self.expect_word("by")?;
                let key = self.parse_expression()?;
                break SelectOrGroup::GroupBy {
                    element,
                    key,
                    span: self.span_from(start),
                };
            } else {
                return Err(self.unexpected("a query clause"));
            }
        };
        let continuation = if self.eat_word("into") {
            let name = self.identifier()?;
            let body = self.parse_query_body()?;
            Some(Box::new(QueryContinuation { name, body }))
        } else {
            None
        };
        Ok(QueryBody {
            clauses,
            finish,
            continuation,
        })
    }
}

fn split_interpolation_hole(hole: &str) -> (String, Option<String>) {
    let chars: Vec<char> = hole.chars().collect();
    let mut depth = 0usize;
    let mut in_string = false;
    for (index, c) in chars.iter().enumerate() {
        if in_string {
            if *c == '\\' {
                continue;
            }
            if *c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' | ':' if depth == 0 => {
                let expr: String = chars[..index].iter().collect();
                let format: String = chars[index..].iter().collect();
                return (expr, Some(format));
            }
            _ => {}
        }
    }
    (hole.to_string(), None)
}
