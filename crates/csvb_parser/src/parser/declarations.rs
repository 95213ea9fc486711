// csvb_parser/parser/declarations - Compilation units, types, and members
use super::Parser;
use crate::error::ParseError;
use csvb_ast::*;

impl Parser {
    pub(crate) fn parse_compilation_unit(&mut self) -> Result<CompilationUnit, ParseError> {
        let start = self.span_here();
        let mut externs = Vec::new();
        let mut usings = Vec::new();
        let mut attribute_lists = Vec::new();
        let mut members = Vec::new();

        while self.at_word("extern") {
            let leading_trivia = self.leading_trivia_here();
            let extern_start = self.span_here();
            self.advance();
            self.expect_word("alias")?;
            let name = self.identifier()?;
            self.expect(TokenKind::Semicolon, "`;`")?;
            externs.push(ExternAliasDirective {
                name,
                leading_trivia,
                span: self.span_from(extern_start),
            });
        }

        while self.at_word("using") && !self.using_is_statement() {
            usings.push(self.parse_using_directive()?);
        }

        // Assembly-level attribute lists.
        while self.check(TokenKind::OpenBracket)
            && (self.attribute_target_ahead("assembly") || self.attribute_target_ahead("module"))
        {
            attribute_lists.push(self.parse_attribute_list()?);
        }

        while !self.is_eof() {
            members.push(self.parse_member()?);
        }

        Ok(CompilationUnit {
            externs,
            usings,
            attribute_lists,
            members,
            trailing_trivia: self.peek().leading_trivia.clone(),
            span: self.span_from(start),
        })
    }

    /// Distinguishes `using (x) { }` / `using T x = ...` statements from
    /// `using Foo.Bar;` directives when parsing a bare statement.
    fn using_is_statement(&self) -> bool {
        self.peek_at(1).kind == TokenKind::OpenParen
    }

    fn parse_using_directive(&mut self) -> Result<UsingDirective, ParseError> {
        let leading_trivia = self.leading_trivia_here();
        let start = self.span_here();
        self.expect_word("using")?;
        let is_static = self.eat_word("static");
        let alias = if self.check(TokenKind::Identifier)
            && self.peek_at(1).kind == TokenKind::Equal
        {
            let alias = self.identifier()?;
            self.advance(); // =
            Some(alias)
        } else {
            None
        };
        let target = self.parse_type()?;
        self.expect(TokenKind::Semicolon, "`;`")?;
        Ok(UsingDirective {
            is_static,
            alias,
            target,
            leading_trivia,
            span: self.span_from(start),
        })
    }

    fn attribute_target_ahead(&self, target: &str) -> bool {
        self.peek_at(1).word() == Some(target) && self.peek_at(2).kind == TokenKind::Colon
    }

    pub(crate) fn parse_attribute_lists(&mut self) -> Result<Vec<AttributeList>, ParseError> {
        let mut lists = Vec::new();
        while self.check(TokenKind::OpenBracket) {
            lists.push(self.parse_attribute_list()?);
        }
        Ok(lists)
    }

    fn parse_attribute_list(&mut self) -> Result<AttributeList, ParseError> {
        let start = self.span_here();
        self.expect(TokenKind::OpenBracket, "`[`")?;
        let target = if self.peek_at(1).kind == TokenKind::Colon {
            let target = match self.word() {
                Some("assembly") => Some(AttributeTarget::Assembly),
                Some("module") => Some(AttributeTarget::Module),
                Some("return") => Some(AttributeTarget::Return),
                Some("field") => Some(AttributeTarget::Field),
                Some("method") => Some(AttributeTarget::Method),
                Some("param") => Some(AttributeTarget::Param),
                Some("property") => Some(AttributeTarget::Property),
                Some("event") => Some(AttributeTarget::Event),
                Some("type") => Some(AttributeTarget::Type),
                _ => None,
            };
            if target.is_some() {
                self.advance();
                self.advance(); // :
            }
            target
        } else {
            None
        };
        let mut attributes = Vec::new();
        loop {
            let attr_start = self.span_here();
            let name = self.parse_type()?;
            let mut args = Vec::new();
            if self.check(TokenKind::OpenParen) {
                self.advance();
                if !self.check(TokenKind::CloseParen) {
                    loop {
                        args.push(self.parse_expression()?);
                        if self.eat(TokenKind::Comma).is_none() {
                            break;
                        }
                    }
                }
                self.expect(TokenKind::CloseParen, "`)`")?;
            }
            attributes.push(Attribute {
                name,
                args,
                span: self.span_from(attr_start),
            });
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect(TokenKind::CloseBracket, "`]`")?;
        Ok(AttributeList {
            target,
            attributes,
            span: self.span_from(start),
        })
    }

    fn parse_modifiers(&mut self) -> Vec<Modifier> {
        let mut modifiers = Vec::new();
        loop {
            // `partial` is contextual: only a modifier right before a type
            // keyword or another modifier run.
            if self.at_word("partial")
                && matches!(self.word_at(1), Some("class" | "struct" | "interface"))
            {
                self.advance();
                modifiers.push(Modifier::Partial);
                continue;
            }
            if self.at_word("async")
                && (self.peek_at(1).kind == TokenKind::Keyword
                    || self.peek_at(1).kind == TokenKind::Identifier)
                && !self.at_query_keyword_at(1)
            {
                self.advance();
                modifiers.push(Modifier::Async);
                continue;
            }
            let Some(word) = self.word() else { break };
            if self.kind() != TokenKind::Keyword {
                break;
            }
            match Modifier::from_keyword(word) {
                // `new` only acts as a modifier before another declaration
                // keyword or type; a bare `new` starts an expression.
                Some(Modifier::New) => {
                    if matches!(
                        self.peek_at(1).kind,
                        TokenKind::Keyword | TokenKind::Identifier
                    ) && self.word_at(1) != Some("new")
                    {
                        self.advance();
                        modifiers.push(Modifier::New);
                    } else {
                        break;
                    }
                }
                Some(modifier) => {
                    self.advance();
                    modifiers.push(modifier);
                }
                None => break,
            }
        }
        modifiers
    }

    fn at_query_keyword_at(&self, lookahead: usize) -> bool {
        matches!(
            self.word_at(lookahead),
            Some(
                "from" | "where" | "let" | "orderby" | "join" | "select" | "group" | "into"
                    | "on" | "equals" | "by" | "ascending" | "descending"
            )
        )
    }

    pub(crate) fn parse_member(&mut self) -> Result<MemberDecl, ParseError> {
        let leading_trivia = self.leading_trivia_here();
        let start = self.span_here();

        if self.at_word("namespace") {
            return self.parse_namespace(leading_trivia);
        }

        let attribute_lists = self.parse_attribute_lists()?;
        let modifiers = self.parse_modifiers();

        let word = self.word().map(str::to_string);
        if let Some(word) = word.as_deref() {
            match word {
                "class" | "struct" | "interface" => {
                    return self.parse_type_decl(leading_trivia, attribute_lists, modifiers)
                }
                "enum" => return self.parse_enum(leading_trivia, attribute_lists, modifiers),
                "delegate" => {
                    return self.parse_delegate(leading_trivia, attribute_lists, modifiers)
                }
                "event" => return self.parse_event(leading_trivia, attribute_lists, modifiers),
                "implicit" | "explicit" => {
                    return self.parse_conversion_operator(
                        leading_trivia,
                        attribute_lists,
                        modifiers,
                        word == "implicit",
                    )
                }
                _ => {}
            }
        }

        // Destructor: `~Name() { }`.
        if self.check(TokenKind::Tilde) {
            self.advance();
            let name = self.identifier()?;
            self.expect(TokenKind::OpenParen, "`(`")?;
            self.expect(TokenKind::CloseParen, "`)`")?;
            let body = Some(self.parse_block_raw()?);
            return Ok(MemberDecl::Destructor(DestructorDecl {
                attribute_lists,
                name,
                body,
                leading_trivia,
                span: self.span_from(start),
            }));
        }

        // Constructor: bare `Name(` matching the enclosing type.
        if self.check(TokenKind::Identifier)
            && self.peek_at(1).kind == TokenKind::OpenParen
            && self
                .type_name_stack
                .last()
                .map(|enclosing| self.peek().text == *enclosing)
                .unwrap_or(false)
        {
            return self.parse_constructor(leading_trivia, attribute_lists, modifiers);
        }

        let return_type = self.parse_type()?;
        self.parse_typed_member(leading_trivia, attribute_lists, modifiers, return_type, start)
    }

    fn parse_namespace(&mut self, leading_trivia: Vec<Trivia>) -> Result<MemberDecl, ParseError> {
        let start = self.span_here();
        self.expect_word("namespace")?;
        let mut name = vec![self.identifier()?];
        while self.eat(TokenKind::Dot).is_some() {
            name.push(self.identifier()?);
        }
        self.expect(TokenKind::OpenBrace, "`{`")?;
        let mut usings = Vec::new();
        while self.at_word("using") && !self.using_is_statement() {
            usings.push(self.parse_using_directive()?);
        }
        let mut members = Vec::new();
        while !self.check(TokenKind::CloseBrace) && !self.is_eof() {
            members.push(self.parse_member()?);
        }
        let end_trivia = self.leading_trivia_here();
        self.expect(TokenKind::CloseBrace, "`}`")?;
        Ok(MemberDecl::Namespace(NamespaceDecl {
            name,
            usings,
            members,
            end_trivia,
            leading_trivia,
            span: self.span_from(start),
        }))
    }

    fn parse_type_decl(
        &mut self,
        leading_trivia: Vec<Trivia>,
        attribute_lists: Vec<AttributeList>,
        modifiers: Vec<Modifier>,
    ) -> Result<MemberDecl, ParseError> {
        let start = self.span_here();
        let kind = match self.word() {
            Some("class") => TypeKind::Class,
            Some("struct") => TypeKind::Struct,
            Some("interface") => TypeKind::Interface,
            _ => return Err(self.unexpected("a type declaration")),
        };
        self.advance();
        let name = self.identifier()?;
        let type_params = self.parse_type_param_list()?;

        let mut base_list = Vec::new();
        if self.eat(TokenKind::Colon).is_some() {
            loop {
                base_list.push(self.parse_type()?);
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        let constraints = self.parse_constraint_clauses()?;

        self.expect(TokenKind::OpenBrace, "`{`")?;
        self.type_name_stack.push(name.text.clone());
        let mut members = Vec::new();
        while !self.check(TokenKind::CloseBrace) && !self.is_eof() {
            match self.parse_member() {
                Ok(member) => members.push(member),
                Err(error) => {
                    self.type_name_stack.pop();
                    return Err(error);
                }
            }
        }
        self.type_name_stack.pop();
        let end_trivia = self.leading_trivia_here();
        self.expect(TokenKind::CloseBrace, "`}`")?;
        self.eat(TokenKind::Semicolon);

        Ok(MemberDecl::Type(TypeDecl {
            kind,
            attribute_lists,
            modifiers,
            name,
            type_params,
            constraints,
            base_list,
            members,
            end_trivia,
            leading_trivia,
            span: self.span_from(start),
        }))
    }

    fn parse_type_param_list(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut type_params = Vec::new();
        if self.eat(TokenKind::Less).is_some() {
            loop {
                type_params.push(self.identifier()?);
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
            self.expect(TokenKind::Greater, "`>`")?;
        }
        Ok(type_params)
    }

    fn parse_constraint_clauses(&mut self) -> Result<Vec<TypeParamConstraint>, ParseError> {
        let mut clauses = Vec::new();
        while self.at_word("where") {
            let start = self.span_here();
            self.advance();
            let param = self.identifier()?;
            self.expect(TokenKind::Colon, "`:`")?;
            let mut constraints = Vec::new();
            loop {
                if self.at_word("new") && self.peek_at(1).kind == TokenKind::OpenParen {
                    self.advance();
                    self.advance();
                    self.expect(TokenKind::CloseParen, "`)`")?;
                    constraints.push(ConstraintKind::Constructor);
                } else if self.at_word("class") {
                    self.advance();
                    constraints.push(ConstraintKind::Class);
                } else if self.at_word("struct") {
                    self.advance();
                    constraints.push(ConstraintKind::Struct);
                } else {
                    constraints.push(ConstraintKind::Type(self.parse_type()?));
                }
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
            clauses.push(TypeParamConstraint {
                param,
                constraints,
                span: self.span_from(start),
            });
        }
        Ok(clauses)
    }

    fn parse_enum(
        &mut self,
        leading_trivia: Vec<Trivia>,
        attribute_lists: Vec<AttributeList>,
        modifiers: Vec<Modifier>,
    ) -> Result<MemberDecl, ParseError> {
        let start = self.span_here();
        self.expect_word("enum")?;
        let name = self.identifier()?;
        let base_type = if self.eat(TokenKind::Colon).is_some() {
            Some(self.parse_type()?)
        } else {
            None
        };
        self.expect(TokenKind::OpenBrace, "`{`")?;
        let mut members = Vec::new();
        while !self.check(TokenKind::CloseBrace) && !self.is_eof() {
            let member_trivia = self.leading_trivia_here();
            let member_start = self.span_here();
            let member_name = self.identifier()?;
            let value = if self.eat(TokenKind::Equal).is_some() {
                Some(self.parse_expression()?)
            } else {
                None
            };
            members.push(EnumMember {
                name: member_name,
                value,
                leading_trivia: member_trivia,
                span: self.span_from(member_start),
            });
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect(TokenKind::CloseBrace, "`}`")?;
        self.eat(TokenKind::Semicolon);
        Ok(MemberDecl::Enum(EnumDecl {
            attribute_lists,
            modifiers,
            name,
            base_type,
            members,
            leading_trivia,
            span: self.span_from(start),
        }))
    }

    fn parse_delegate(
        &mut self,
        leading_trivia: Vec<Trivia>,
        attribute_lists: Vec<AttributeList>,
        modifiers: Vec<Modifier>,
    ) -> Result<MemberDecl, ParseError> {
        let start = self.span_here();
        self.expect_word("delegate")?;
        let return_type = self.parse_type()?;
        let name = self.identifier()?;
        let type_params = self.parse_type_param_list()?;
        let params = self.parse_parameter_list()?;
        self.expect(TokenKind::Semicolon, "`;`")?;
        Ok(MemberDecl::Delegate(DelegateDecl {
            attribute_lists,
            modifiers,
            return_type,
            name,
            type_params,
            params,
            leading_trivia,
            span: self.span_from(start),
        }))
    }

    fn parse_event(
        &mut self,
        leading_trivia: Vec<Trivia>,
        attribute_lists: Vec<AttributeList>,
        modifiers: Vec<Modifier>,
    ) -> Result<MemberDecl, ParseError> {
        let start = self.span_here();
        self.expect_word("event")?;
        let event_type = self.parse_type()?;
        let name = self.identifier()?;
        self.expect(TokenKind::Semicolon, "`;`")?;
        Ok(MemberDecl::Event(EventDecl {
            attribute_lists,
            modifiers,
            event_type,
            name,
            leading_trivia,
            span: self.span_from(start),
        }))
    }

    fn parse_constructor(
        &mut self,
        leading_trivia: Vec<Trivia>,
        attribute_lists: Vec<AttributeList>,
        modifiers: Vec<Modifier>,
    ) -> Result<MemberDecl, ParseError> {
        let start = self.span_here();
        let name = self.identifier()?;
        let params = self.parse_parameter_list()?;
        let initializer = if self.eat(TokenKind::Colon).is_some() {
            let init_start = self.span_here();
            let kind = if self.eat_word("base") {
                ConstructorInitializerKind::Base
            } else {
                self.expect_word("this")?;
                ConstructorInitializerKind::This
            };
            let args = self
                .parse_argument_list()?
                .into_iter()
                .map(|argument| argument.value)
                .collect();
            Some(ConstructorInitializer {
                kind,
                args,
                span: self.span_from(init_start),
            })
        } else {
            None
        };
        let body = Some(self.parse_block_raw()?);
        Ok(MemberDecl::Constructor(ConstructorDecl {
            attribute_lists,
            modifiers,
            name,
            params,
            initializer,
            body,
            leading_trivia,
            span: self.span_from(start),
        }))
    }

    fn parse_conversion_operator(
        &mut self,
        leading_trivia: Vec<Trivia>,
        attribute_lists: Vec<AttributeList>,
        modifiers: Vec<Modifier>,
        implicit: bool,
    ) -> Result<MemberDecl, ParseError> {
        let start = self.span_here();
        self.advance(); // implicit | explicit
        self.expect_word("operator")?;
        let target_type = self.parse_type()?;
        let params = self.parse_parameter_list()?;
        let (body, expression_body) = self.parse_member_body()?;
        Ok(MemberDecl::ConversionOperator(ConversionOperatorDecl {
            attribute_lists,
            modifiers,
            implicit,
            target_type,
            params,
            body,
            expression_body,
            leading_trivia,
            span: self.span_from(start),
        }))
    }

    /// Members that start with a type: method, operator, property, indexer,
    /// field.
    fn parse_typed_member(
        &mut self,
        leading_trivia: Vec<Trivia>,
        attribute_lists: Vec<AttributeList>,
        modifiers: Vec<Modifier>,
        return_type: TypeRef,
        start: Span,
    ) -> Result<MemberDecl, ParseError> {
        // Operator declaration.
        if self.at_word("operator") {
            self.advance();
            let operator = self.parse_operator_kind()?;
            let params = self.parse_parameter_list()?;
            let (body, expression_body) = self.parse_member_body()?;
            return Ok(MemberDecl::Operator(OperatorDecl {
                attribute_lists,
                modifiers,
                return_type,
                operator,
                params,
                body,
                expression_body,
                leading_trivia,
                span: self.span_from(start),
            }));
        }

        // Indexer.
        if self.at_word("this") {
            self.advance();
            self.expect(TokenKind::OpenBracket, "`[`")?;
            let mut params = Vec::new();
            loop {
                params.push(self.parse_parameter()?);
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
            self.expect(TokenKind::CloseBracket, "`]`")?;
            if self.check(TokenKind::FatArrow) {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::Semicolon, "`;`")?;
                return Ok(MemberDecl::Indexer(IndexerDecl {
                    attribute_lists,
                    modifiers,
                    prop_type: return_type,
                    params,
                    accessors: vec![],
                    expression_body: Some(expr),
                    leading_trivia,
                    span: self.span_from(start),
                }));
            }
            let accessors = self.parse_accessor_list()?;
            return Ok(MemberDecl::Indexer(IndexerDecl {
                attribute_lists,
                modifiers,
                prop_type: return_type,
                params,
                accessors,
                expression_body: None,
                leading_trivia,
                span: self.span_from(start),
            }));
        }

        // Possibly-qualified member name; a dotted name is an explicit
        // interface implementation.
        let (explicit_interface, name) = self.parse_member_name()?;

        // Method.
        let type_params = self.parse_type_param_list()?;
        if self.check(TokenKind::OpenParen) {
            let params = self.parse_parameter_list()?;
            let constraints = self.parse_constraint_clauses()?;
            let (body, expression_body) = self.parse_member_body()?;
            return Ok(MemberDecl::Method(MethodDecl {
                attribute_lists,
                modifiers,
                return_type,
                explicit_interface,
                name,
                type_params,
                constraints,
                params,
                body,
                expression_body,
                leading_trivia,
                span: self.span_from(start),
            }));
        }

        // Property.
        if self.check(TokenKind::OpenBrace) {
            let accessors = self.parse_accessor_list()?;
            let initializer = if self.eat(TokenKind::Equal).is_some() {
                let value = self.parse_expression()?;
                self.expect(TokenKind::Semicolon, "`;`")?;
                Some(value)
            } else {
                None
            };
            return Ok(MemberDecl::Property(PropertyDecl {
                attribute_lists,
                modifiers,
                prop_type: return_type,
                explicit_interface,
                name,
                accessors,
                expression_body: None,
                initializer,
                leading_trivia,
                span: self.span_from(start),
            }));
        }
        if self.check(TokenKind::FatArrow) {
            self.advance();
            let expr = self.parse_expression()?;
            self.expect(TokenKind::Semicolon, "`;`")?;
            return Ok(MemberDecl::Property(PropertyDecl {
                attribute_lists,
                modifiers,
                prop_type: return_type,
                explicit_interface,
                name,
                accessors: vec![],
                expression_body: Some(expr),
                initializer: None,
                leading_trivia,
                span: self.span_from(start),
            }));
        }

        // Field with one or more declarators.
        let mut declarators = Vec::new();
        let mut current_name = name;
        loop {
            let declarator_start = current_name.span;
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
                name: current_name,
                initializer,
                span: self.span_from(declarator_start),
            });
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
            current_name = self.identifier()?;
        }
        self.expect(TokenKind::Semicolon, "`;`")?;
        Ok(MemberDecl::Field(FieldDecl {
            attribute_lists,
            modifiers,
            field_type: return_type,
            declarators,
            leading_trivia,
            span: self.span_from(start),
        }))
    }

    /// `Name` or `IFoo.Name` / `Namespace.IFoo.Name`.
    fn parse_member_name(&mut self) -> Result<(Option<TypeRef>, Identifier), ParseError> {
        let start = self.span_here();
        let mut segments = vec![self.parse_member_name_segment()?];
        while self.check(TokenKind::Dot) {
            self.advance();
            segments.push(self.parse_member_name_segment()?);
        }
        let last = segments.pop().expect("at least one segment");
        let name = last.name;
        if segments.is_empty() {
            Ok((None, name))
        } else {
            let span = self.span_from(start);
            Ok((Some(TypeRef::Named { segments, span }), name))
        }
    }

    fn parse_member_name_segment(&mut self) -> Result<TypeSegment, ParseError> {
        let name = self.identifier()?;
        // Generic arguments belong to the method type-parameter list when
        // this is the final segment, so consume them only when another `.`
        // follows the closing `>` (a qualifier like `IFoo<int>.Bar`).
        let mut type_args = Vec::new();
        if self.check(TokenKind::Less) {
            let snapshot = self.snapshot();
            self.advance();
            let mut parsed = Vec::new();
            let ok = loop {
                match self.try_parse_type() {
                    Some(arg) => parsed.push(arg),
                    None => break false,
                }
                if self.eat(TokenKind::Comma).is_some() {
                    continue;
                }
                break self.eat(TokenKind::Greater).is_some();
            };
            if ok && self.check(TokenKind::Dot) {
                type_args = parsed;
            } else {
                self.restore(snapshot);
            }
        }
        Ok(TypeSegment { name, type_args })
    }

    fn parse_operator_kind(&mut self) -> Result<OperatorKind, ParseError> {
        let kind = match self.kind() {
            TokenKind::Plus => OperatorKind::Plus,
            TokenKind::Minus => OperatorKind::Minus,
            TokenKind::Star => OperatorKind::Star,
            TokenKind::Slash => OperatorKind::Slash,
            TokenKind::Percent => OperatorKind::Percent,
            TokenKind::Amp => OperatorKind::Amp,
            TokenKind::Pipe => OperatorKind::Pipe,
            TokenKind::Caret => OperatorKind::Caret,
            TokenKind::Tilde => OperatorKind::Tilde,
            TokenKind::Bang => OperatorKind::Bang,
            TokenKind::EqualEqual => OperatorKind::EqualEqual,
            TokenKind::BangEqual => OperatorKind::BangEqual,
            TokenKind::LessEqual => OperatorKind::LessEqual,
            TokenKind::GreaterEqual => OperatorKind::GreaterEqual,
            TokenKind::LessLess => OperatorKind::ShiftLeft,
            TokenKind::PlusPlus => OperatorKind::Increment,
            TokenKind::MinusMinus => OperatorKind::Decrement,
            TokenKind::Less => OperatorKind::Less,
            TokenKind::Greater => {
                if self.at_shift_right() {
                    self.advance();
                    OperatorKind::ShiftRight
                } else {
                    OperatorKind::Greater
                }
            }
            TokenKind::Keyword if self.at_word("true") => OperatorKind::True,
            TokenKind::Keyword if self.at_word("false") => OperatorKind::False,
            _ => return Err(self.unexpected("an overloadable operator")),
        };
        self.advance();
        Ok(kind)
    }

    pub(crate) fn parse_parameter_list(&mut self) -> Result<Vec<Parameter>, ParseError> {
        self.expect(TokenKind::OpenParen, "`(`")?;
        let mut params = Vec::new();
        if !self.check(TokenKind::CloseParen) {
            loop {
                params.push(self.parse_parameter()?);
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        self.expect(TokenKind::CloseParen, "`)`")?;
        Ok(params)
    }

    pub(crate) fn parse_parameter(&mut self) -> Result<Parameter, ParseError> {
        let start = self.span_here();
        let attribute_lists = self.parse_attribute_lists()?;
        let mut modifiers = Vec::new();
        loop {
            if self.eat_word("ref") {
                modifiers.push(ParamModifier::Ref);
            } else if self.eat_word("out") {
                modifiers.push(ParamModifier::Out);
            } else if self.eat_word("params") {
                modifiers.push(ParamModifier::Params);
            } else if self.eat_word("this") {
                modifiers.push(ParamModifier::This);
            } else {
                break;
            }
        }
        let param_type = self.parse_type()?;
        let name = self.identifier()?;
        let default_value = if self.eat(TokenKind::Equal).is_some() {
            Some(self.parse_expression()?)
        } else {
            None
        };
        Ok(Parameter {
            attribute_lists,
            modifiers,
            param_type: Some(param_type),
            name,
            default_value,
            span: self.span_from(start),
        })
    }

    /// Block body, expression body, or bare `;`.
    fn parse_member_body(
        &mut self,
    ) -> Result<(Option<BlockStatement>, Option<Expression>), ParseError> {
        if self.check(TokenKind::OpenBrace) {
            return Ok((Some(self.parse_block_raw()?), None));
        }
        if self.check(TokenKind::FatArrow) {
            self.advance();
            let expr = self.parse_expression()?;
            self.expect(TokenKind::Semicolon, "`;`")?;
            return Ok((None, Some(expr)));
        }
        self.expect(TokenKind::Semicolon, "`;`")?;
        Ok((None, None))
    }

    fn parse_accessor_list(&mut self) -> Result<Vec<Accessor>, ParseError> {
        self.expect(TokenKind::OpenBrace, "`{`")?;
        let mut accessors = Vec::new();
        while !self.check(TokenKind::CloseBrace) && !self.is_eof() {
            let start = self.span_here();
            let _ = self.parse_attribute_lists()?;
            let modifiers = self.parse_modifiers();
            let kind = if self.eat_word("get") {
                AccessorKind::Get
            } else if self.eat_word("set") {
                AccessorKind::Set
            } else {
                return Err(self.unexpected("`get` or `set`"));
            };
            let body = if self.check(TokenKind::OpenBrace) {
                Some(self.parse_block_raw()?)
            } else if self.check(TokenKind::FatArrow) {
                self.advance();
                let expr = self.parse_expression()?;
                let span = expr.span();
                self.expect(TokenKind::Semicolon, "`;`")?;
                Some(BlockStatement {
                    statements: vec![Statement::Return(ReturnStatement {
                        value: Some(expr),
                        leading_trivia: vec![],
                        trailing_trivia: vec![],
                        span,
                    })],
                    end_trivia: vec![],
                    leading_trivia: vec![],
                    trailing_trivia: vec![],
                    span,
                })
            } else {
                self.expect(TokenKind::Semicolon, "`;`")?;
                None
            };
            accessors.push(Accessor {
                kind,
                modifiers,
                body,
                span: self.span_from(start),
            });
        }
        self.expect(TokenKind::CloseBrace, "`}`")?;
        Ok(accessors)
    }
}
