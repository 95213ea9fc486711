// csvb_parser/parser/statements - Statement parsing
use super::Parser;
use crate::error::ParseError;
use csvb_ast::*;

impl Parser {
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let leading_trivia = self.leading_trivia_here();
        let start = self.span_here();

        if self.check(TokenKind::OpenBrace) {
            return self.parse_block();
        }
        if self.check(TokenKind::Semicolon) {
            self.advance();
            return Ok(Statement::Empty(EmptyStatement {
                leading_trivia,
                trailing_trivia: self.trailing_trivia_behind(),
                span: self.span_from(start),
            }));
        }

        // Label: `name: statement`.
        if self.check(TokenKind::Identifier)
            && self.peek_at(1).kind == TokenKind::Colon
            && !self.at_word("default")
        {
            let label = self.identifier()?;
            self.advance(); // :
            let statement = self.parse_statement()?;
            return Ok(Statement::Labeled(LabeledStatement {
                label,
                statement: Box::new(statement),
                leading_trivia,
                trailing_trivia: vec![],
                span: self.span_from(start),
            }));
        }

        let word = self.word().map(str::to_string);
        if let Some(word) = word.as_deref() {
            match word {
                "if" => return self.parse_if(leading_trivia),
                "while" => return self.parse_while(leading_trivia),
                "do" => return self.parse_do_while(leading_trivia),
                "for" => return self.parse_for(leading_trivia),
                "foreach" => return self.parse_foreach(leading_trivia),
                "switch" => return self.parse_switch(leading_trivia),
                "break" => {
                    self.advance();
                    self.expect(TokenKind::Semicolon, "`;`")?;
                    return Ok(Statement::Break(BreakStatement {
                        leading_trivia,
                        trailing_trivia: self.trailing_trivia_behind(),
                        span: self.span_from(start),
                    }));
                }
                "continue" => {
                    self.advance();
                    self.expect(TokenKind::Semicolon, "`;`")?;
                    return Ok(Statement::Continue(ContinueStatement {
                        leading_trivia,
                        trailing_trivia: self.trailing_trivia_behind(),
                        span: self.span_from(start),
                    }));
                }
                "return" => {
                    self.advance();
                    let value = if self.check(TokenKind::Semicolon) {
                        None
                    } else {
                        Some(self.parse_expression()?)
                    };
                    self.expect(TokenKind::Semicolon, "`;`")?;
                    return Ok(Statement::Return(ReturnStatement {
                        value,
                        leading_trivia,
                        trailing_trivia: self.trailing_trivia_behind(),
                        span: self.span_from(start),
                    }));
                }
                "throw" => {
                    self.advance();
                    let value = if self.check(TokenKind::Semicolon) {
                        None
                    } else {
                        Some(self.parse_expression()?)
                    };
                    self.expect(TokenKind::Semicolon, "`;`")?;
                    return Ok(Statement::Throw(ThrowStatement {
                        value,
                        leading_trivia,
                        trailing_trivia: self.trailing_trivia_behind(),
                        span: self.span_from(start),
                    }));
                }
                "goto" => return self.parse_goto(leading_trivia),
                "try" => return self.parse_try(leading_trivia),
                "using" => return self.parse_using(leading_trivia),
                "lock" => return self.parse_lock(leading_trivia),
                "checked" | "unchecked" if self.peek_at(1).kind == TokenKind::OpenBrace => {
                    let checked = word == "checked";
                    self.advance();
                    let block = self.parse_block_raw()?;
                    return Ok(Statement::Checked(CheckedStatement {
                        checked,
                        block,
                        leading_trivia,
                        trailing_trivia: self.trailing_trivia_behind(),
                        span: self.span_from(start),
                    }));
                }
                "unsafe" => {
                    self.advance();
                    let block = self.parse_block_raw()?;
                    return Ok(Statement::Unsafe(UnsafeStatement {
                        block,
                        leading_trivia,
                        trailing_trivia: self.trailing_trivia_behind(),
                        span: self.span_from(start),
                    }));
                }
                "fixed" => {
                    self.advance();
                    self.expect(TokenKind::OpenParen, "`(`")?;
                    let declaration = self.parse_variable_declaration()?;
                    self.expect(TokenKind::CloseParen, "`)`")?;
                    let body = self.parse_statement()?;
                    return Ok(Statement::Fixed(FixedStatement {
                        declaration,
                        body: Box::new(body),
                        leading_trivia,
                        trailing_trivia: vec![],
                        span: self.span_from(start),
                    }));
                }
                "yield" if matches!(self.word_at(1), Some("return") | Some("break")) => {
                    self.advance();
                    let value = if self.eat_word("return") {
                        Some(self.parse_expression()?)
                    } else {
                        self.expect_word("break")?;
                        None
                    };
                    self.expect(TokenKind::Semicolon, "`;`")?;
                    return Ok(Statement::Yield(YieldStatement {
                        value,
                        leading_trivia,
                        trailing_trivia: self.trailing_trivia_behind(),
                        span: self.span_from(start),
                    }));
                }
                "const" => {
                    self.advance();
                    let mut declaration = self.parse_variable_declaration()?;
                    declaration.is_const = true;
                    self.expect(TokenKind::Semicolon, "`;`")?;
                    return Ok(Statement::LocalDeclaration(LocalDeclarationStatement {
                        declaration,
                        leading_trivia,
                        trailing_trivia: self.trailing_trivia_behind(),
                        span: self.span_from(start),
                    }));
                }
                _ => {}
            }
        }

        // Local declaration, local function, or expression statement.
        if let Some(statement) = self.try_parse_declaration_statement(&leading_trivia)? {
            return Ok(statement);
        }

        let expr = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "`;`")?;
        Ok(Statement::Expression(ExpressionStatement {
            expr,
            leading_trivia,
            trailing_trivia: self.trailing_trivia_behind(),
            span: self.span_from(start),
        }))
    }

    pub(crate) fn parse_block(&mut self) -> Result<Statement, ParseError> {
        Ok(Statement::Block(self.parse_block_raw()?))
    }

    pub(crate) fn parse_block_raw(&mut self) -> Result<BlockStatement, ParseError> {
        let leading_trivia = self.leading_trivia_here();
        let start = self.span_here();
        self.expect(TokenKind::OpenBrace, "`{`")?;
        let mut statements = Vec::new();
        while !self.check(TokenKind::CloseBrace) && !self.is_eof() {
            statements.push(self.parse_statement()?);
        }
        let end_trivia = self.leading_trivia_here();
        self.expect(TokenKind::CloseBrace, "`}`")?;
        Ok(BlockStatement {
            statements,
            end_trivia,
            leading_trivia,
            trailing_trivia: self.trailing_trivia_behind(),
            span: self.span_from(start),
        })
    }

    /// `T a = x, b`, also used by `for`, `using`, and `fixed` headers.
    pub(crate) fn parse_variable_declaration(&mut self) -> Result<VariableDeclaration, ParseError> {
        let start = self.span_here();
        let var_type = self.parse_type()?;
        let mut declarators = Vec::new();
        loop {
            let declarator_start = self.span_here();
            let name = self.identifier()?;
            let initializer = if self.eat(TokenKind::Equal).is_some() {
                if self.check(TokenKind::OpenBrace) {
                    Some(Expression::Initializer(
                        self.parse_initializer_expression()?,
                    ))
                } else {
                    Some(self.parse_expression()?)
                }
            } else {
                None
            };
            declarators.push(VariableDeclarator {
                name,
                initializer,
                span: self.span_from(declarator_start),
            });
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        Ok(VariableDeclaration {
            var_type,
            declarators,
            is_const: false,
            span: self.span_from(start),
        })
    }

    /// Backtracking dispatch between `T x = ...;`, a local function, and a
    /// plain expression statement.
    fn try_parse_declaration_statement(
        &mut self,
        leading_trivia: &[Trivia],
    ) -> Result<Option<Statement>, ParseError> {
        let snapshot = self.snapshot();
        let start = self.span_here();

        let Some(var_type) = self.try_parse_type() else {
            return Ok(None);
        };
        if !self.check(TokenKind::Identifier) {
            self.restore(snapshot);
            return Ok(None);
        }
        // `await x;` reads as a declaration of type `await`; it is not one.
        if matches!(
            &var_type,
            TypeRef::Named { segments, .. }
                if segments.len() == 1
                    && segments[0].type_args.is_empty()
                    && segments[0].name.text == "await"
        ) {
            self.restore(snapshot);
            return Ok(None);
        }

        // Local function: `T Name(...) { ... }`.
        if self.peek_at(1).kind == TokenKind::OpenParen {
            let name = self.identifier()?;
            if let Some(params) = self.try_parse_parameter_list() {
                if self.check(TokenKind::OpenBrace) {
                    let block = self.parse_block_raw()?;
                    return Ok(Some(Statement::LocalFunction(LocalFunctionStatement {
                        return_type: var_type,
                        name,
                        params,
                        body: block.statements,
                        leading_trivia: leading_trivia.to_vec(),
                        trailing_trivia: self.trailing_trivia_behind(),
                        span: self.span_from(start),
                    })));
                }
            }
            self.restore(snapshot);
            return Ok(None);
        }

        // Declarator must be followed by `=`, `,` or `;` to be a
        // declaration; otherwise this was an expression after all.
        if !matches!(
            self.peek_at(1).kind,
            TokenKind::Equal | TokenKind::Comma | TokenKind::Semicolon
        ) {
            self.restore(snapshot);
            return Ok(None);
        }

        self.restore(snapshot);
        let declaration = self.parse_variable_declaration()?;
        self.expect(TokenKind::Semicolon, "`;`")?;
        Ok(Some(Statement::LocalDeclaration(LocalDeclarationStatement {
            declaration,
            leading_trivia: leading_trivia.to_vec(),
            trailing_trivia: self.trailing_trivia_behind(),
            span: self.span_from(start),
        })))
    }

    fn try_parse_parameter_list(&mut self) -> Option<Vec<Parameter>> {
        let snapshot = self.snapshot();
        match self.parse_parameter_list() {
            Ok(params) => Some(params),
            Err(_) => {
                self.restore(snapshot);
                None
            }
        }
    }

    fn parse_if(&mut self, leading_trivia: Vec<Trivia>) -> Result<Statement, ParseError> {
        let start = self.span_here();
        self.expect_word("if")?;
        self.expect(TokenKind::OpenParen, "`(`")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        let then_branch = self.parse_statement()?;
        let else_branch = if self.eat_word("else") {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Statement::If(IfStatement {
            condition,
            then_branch: Box::new(then_branch),
            else_branch,
            leading_trivia,
            trailing_trivia: vec![],
            span: self.span_from(start),
        }))
    }

    fn parse_while(&mut self, leading_trivia: Vec<Trivia>) -> Result<Statement, ParseError> {
        let start = self.span_here();
        self.expect_word("while")?;
        self.expect(TokenKind::OpenParen, "`(`")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        let body = self.parse_statement()?;
        Ok(Statement::While(WhileStatement {
            condition,
            body: Box::new(body),
            leading_trivia,
            trailing_trivia: vec![],
            span: self.span_from(start),
        }))
    }

    fn parse_do_while(&mut self, leading_trivia: Vec<Trivia>) -> Result<Statement, ParseError> {
        let start = self.span_here();
        self.expect_word("do")?;
        let body = self.parse_statement()?;
        self.expect_word("while")?;
        self.expect(TokenKind::OpenParen, "`(`")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        self.expect(TokenKind::Semicolon, "`;`")?;
        Ok(Statement::DoWhile(DoWhileStatement {
            body: Box::new(body),
            condition,
            leading_trivia,
            trailing_trivia: self.trailing_trivia_behind(),
            span: self.span_from(start),
        }))
    }

    fn parse_for(&mut self, leading_trivia: Vec<Trivia>) -> Result<Statement, ParseError> {
        let start = self.span_here();
        self.expect_word("for")?;
        self.expect(TokenKind::OpenParen, "`(`")?;

        let mut declaration = None;
        let mut initializers = Vec::new();
        if !self.check(TokenKind::Semicolon) {
            let snapshot = self.snapshot();
            let declaration_ok = self
                .try_parse_type()
                .map(|_| self.check(TokenKind::Identifier))
                .unwrap_or(false);
            self.restore(snapshot);
            if declaration_ok {
                declaration = Some(self.parse_variable_declaration()?);
            } else {
                loop {
                    initializers.push(self.parse_expression()?);
                    if self.eat(TokenKind::Comma).is_none() {
                        break;
                    }
                }
            }
        }
        self.expect(TokenKind::Semicolon, "`;`")?;

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Semicolon, "`;`")?;

        let mut incrementors = Vec::new();
        if !self.check(TokenKind::CloseParen) {
            loop {
                incrementors.push(self.parse_expression()?);
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        self.expect(TokenKind::CloseParen, "`)`")?;
        let body = self.parse_statement()?;
        Ok(Statement::For(ForStatement {
            declaration,
            initializers,
            condition,
            incrementors,
            body: Box::new(body),
            leading_trivia,
            trailing_trivia: vec![],
            span: self.span_from(start),
        }))
    }

    fn parse_foreach(&mut self, leading_trivia: Vec<Trivia>) -> Result<Statement, ParseError> {
        let start = self.span_here();
        self.expect_word("foreach")?;
        self.expect(TokenKind::OpenParen, "`(`")?;
        let item_type = self.parse_type()?;
        let name = self.identifier()?;
        self.expect_word("in")?;
        let source = self.parse_expression()?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        let body = self.parse_statement()?;
        Ok(Statement::ForEach(ForEachStatement {
            item_type,
            name,
            source,
            body: Box::new(body),
            leading_trivia,
            trailing_trivia: vec![],
            span: self.span_from(start),
        }))
    }

    fn parse_switch(&mut self, leading_trivia: Vec<Trivia>) -> Result<Statement, ParseError> {
        let start = self.span_here();
        self.expect_word("switch")?;
        self.expect(TokenKind::OpenParen, "`(`")?;
        let expr = self.parse_expression()?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        self.expect(TokenKind::OpenBrace, "`{`")?;

        let mut sections = Vec::new();
        while !self.check(TokenKind::CloseBrace) && !self.is_eof() {
            let section_start = self.span_here();
            let mut labels = Vec::new();
            loop {
                if self.eat_word("case") {
                    let value = self.parse_expression()?;
                    self.expect(TokenKind::Colon, "`:`")?;
                    labels.push(SwitchLabel::Case(value));
                } else if self.at_word("default")
                    && self.peek_at(1).kind == TokenKind::Colon
                {
                    self.advance();
                    self.advance();
                    labels.push(SwitchLabel::Default);
                } else {
                    break;
                }
            }
            if labels.is_empty() {
                return Err(self.unexpected("`case` or `default`"));
            }
            let mut statements = Vec::new();
            while !self.at_word("case")
                && !(self.at_word("default") && self.peek_at(1).kind == TokenKind::Colon)
                && !self.check(TokenKind::CloseBrace)
                && !self.is_eof()
            {
                statements.push(self.parse_statement()?);
            }
            sections.push(SwitchSection {
                labels,
                statements,
                span: self.span_from(section_start),
            });
        }
        self.expect(TokenKind::CloseBrace, "`}`")?;
        Ok(Statement::Switch(SwitchStatement {
            expr,
            sections,
            leading_trivia,
            trailing_trivia: self.trailing_trivia_behind(),
            span: self.span_from(start),
        }))
    }

    fn parse_goto(&mut self, leading_trivia: Vec<Trivia>) -> Result<Statement, ParseError> {
        let start = self.span_here();
        self.expect_word("goto")?;
        let kind = if self.eat_word("case") {
            GotoKind::Case(self.parse_expression()?)
        } else if self.eat_word("default") {
            GotoKind::Default
        } else {
            GotoKind::Label(self.identifier()?)
        };
        self.expect(TokenKind::Semicolon, "`;`")?;
        Ok(Statement::Goto(GotoStatement {
            kind,
            leading_trivia,
            trailing_trivia: self.trailing_trivia_behind(),
            span: self.span_from(start),
        }))
    }

    fn parse_try(&mut self, leading_trivia: Vec<Trivia>) -> Result<Statement, ParseError> {
        let start = self.span_here();
        self.expect_word("try")?;
        let block = self.parse_block_raw()?;
        let mut catches = Vec::new();
        while self.at_word("catch") {
            let catch_start = self.span_here();
            self.advance();
            let mut exception_type = None;
            let mut name = None;
            if self.eat(TokenKind::OpenParen).is_some() {
                exception_type = Some(self.parse_type()?);
                if self.check(TokenKind::Identifier) {
                    name = Some(self.identifier()?);
                }
                self.expect(TokenKind::CloseParen, "`)`")?;
            }
            let filter = if self.eat_word("when") {
                self.expect(TokenKind::OpenParen, "`(`")?;
                let filter = self.parse_expression()?;
                self.expect(TokenKind::CloseParen, "`)`")?;
                Some(filter)
            } else {
                None
            };
            let block = self.parse_block_raw()?;
            catches.push(CatchClause {
                exception_type,
                name,
                filter,
                block,
                span: self.span_from(catch_start),
            });
        }
        let finally_block = if self.eat_word("finally") {
            Some(self.parse_block_raw()?)
        } else {
            None
        };
        Ok(Statement::Try(TryStatement {
            block,
            catches,
            finally_block,
            leading_trivia,
            trailing_trivia: vec![],
            span: self.span_from(start),
        }))
    }

    fn parse_using(&mut self, leading_trivia: Vec<Trivia>) -> Result<Statement, ParseError> {
        let start = self.span_here();
        self.expect_word("using")?;
        self.expect(TokenKind::OpenParen, "`(`")?;

        let snapshot = self.snapshot();
        let declaration_ok = self
            .try_parse_type()
            .map(|_| self.check(TokenKind::Identifier))
            .unwrap_or(false);
        self.restore(snapshot);

        let (declaration, expr) = if declaration_ok {
            (Some(self.parse_variable_declaration()?), None)
        } else {
            (None, Some(self.parse_expression()?))
        };
        self.expect(TokenKind::CloseParen, "`)`")?;
        let body = self.parse_statement()?;
        Ok(Statement::Using(UsingStatement {
            declaration,
            expr,
            body: Box::new(body),
            leading_trivia,
            trailing_trivia: vec![],
            span: self.span_from(start),
        }))
    }

    fn parse_lock(&mut self, leading_trivia: Vec<Trivia>) -> Result<Statement, ParseError> {
        let start = self.span_here();
        self.expect_word("lock")?;
        self.expect(TokenKind::OpenParen, "`(`")?;
        let expr = self.parse_expression()?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        let body = self.parse_statement()?;
        Ok(Statement::Lock(LockStatement {
            expr,
            body: Box::new(body),
            leading_trivia,
            trailing_trivia: vec![],
            span: self.span_from(start),
        }))
    }
}
