// csvb_convert/statements - Statement conversion
//
// Every rule returns a list of VB statements: a single C# statement may
// expand (a `for` with a declaration), collapse (a dropped trailing
// `break`), or vanish (an empty statement).
use crate::context::{ConvertContext, EnclosingKind};
use crate::error::ConvertError;
use crate::expressions::{add_one, subtract_one};
use crate::tokens::convert_identifier;
use crate::trivia::{convert_trivia_list, first_comment_text};
use crate::{fallback, Converter};
use csvb_ast::*;
use csvb_vb::{
    render_expression, VbAssignOp, VbBinaryOp, VbCaseBlock, VbCaseClause, VbCatchBlock,
    VbContinueKind, VbElseIf, VbExitKind, VbExpression, VbIdentifier, VbLiteral, VbStatement,
    VbStatementKind, VbVariableDeclarator,
};

impl<'a> Converter<'a> {
    pub(crate) fn convert_statement(
        &self,
        statement: &Statement,
        ctx: &mut ConvertContext,
    ) -> Result<Vec<VbStatement>, ConvertError> {
        let mut converted = match statement {
            Statement::Block(block) => self.convert_block(block, ctx)?,
            Statement::LocalDeclaration(decl) => {
                vec![VbStatement::new(self.convert_local_declaration(&decl.declaration)?)]
            }
            Statement::Expression(expr_statement) => {
                self.convert_expression_statement(&expr_statement.expr)?
            }
            Statement::If(if_statement) => self.convert_if(if_statement, ctx)?,
            Statement::For(for_statement) => self.convert_for(for_statement, ctx)?,
            Statement::ForEach(foreach) => {
                ctx.enter(EnclosingKind::ForEach);
                let body = self.convert_embedded_body(&foreach.body, ctx);
                ctx.exit();
                vec![VbStatement::new(VbStatementKind::ForEach {
                    variable: convert_identifier(&foreach.name.text, false, self.options)
                        .into(),
                    var_type: self.convert_declared_type(&foreach.item_type)?,
                    source: self.convert_expression(&foreach.source)?,
                    body: body?,
                })]
            }
            Statement::While(while_statement) => {
                ctx.enter(EnclosingKind::While);
                let body = self.convert_embedded_body(&while_statement.body, ctx);
                ctx.exit();
                vec![VbStatement::new(VbStatementKind::While {
                    condition: self.convert_expression(&while_statement.condition)?,
                    body: body?,
                })]
            }
            Statement::DoWhile(do_while) => {
                ctx.enter(EnclosingKind::Do);
                let body = self.convert_embedded_body(&do_while.body, ctx);
                ctx.exit();
                vec![VbStatement::new(VbStatementKind::DoLoop {
                    body: body?,
                    condition: self.convert_expression(&do_while.condition)?,
                })]
            }
            Statement::Switch(switch) => self.convert_switch(switch, ctx)?,
            Statement::Break(break_statement) => {
                vec![self.convert_break(break_statement, ctx)]
            }
            Statement::Continue(continue_statement) => {
                vec![self.convert_continue(continue_statement, ctx)]
            }
            Statement::Return(return_statement) => {
                vec![VbStatement::new(VbStatementKind::Return(
                    return_statement
                        .value
                        .as_ref()
                        .map(|value| self.convert_expression(value))
                        .transpose()?,
                ))]
            }
            Statement::Throw(throw_statement) => {
                vec![VbStatement::new(VbStatementKind::Throw(
                    throw_statement
                        .value
                        .as_ref()
                        .map(|value| self.convert_expression(value))
                        .transpose()?,
                ))]
            }
            Statement::Goto(goto_statement) => vec![self.convert_goto(goto_statement)?],
            Statement::Labeled(labeled) => {
                let mut statements = vec![VbStatement::new(VbStatementKind::Label(
                    labeled.label.text.clone(),
                ))];
                statements.extend(self.convert_statement(&labeled.statement, ctx)?);
                statements
            }
            Statement::Using(using) => self.convert_using(using, ctx)?,
            Statement::Lock(lock) => {
                let body = self.convert_embedded_body(&lock.body, ctx)?;
                vec![VbStatement::new(VbStatementKind::SyncLock {
                    expr: self.convert_expression(&lock.expr)?,
                    body,
                })]
            }
            Statement::Try(try_statement) => self.convert_try(try_statement, ctx)?,
            // Placeholder approximation: iterator lowering is out of scope,
            // a plain Return keeps the output well-formed.
            Statement::Yield(yield_statement) => {
                vec![VbStatement::new(VbStatementKind::Return(
                    yield_statement
                        .value
                        .as_ref()
                        .map(|value| self.convert_expression(value))
                        .transpose()?,
                ))]
            }
            // Overflow-checking and unsafe wrappers drop; bodies survive.
            Statement::Checked(checked) => self.convert_block(&checked.block, ctx)?,
            Statement::Unsafe(unsafe_statement) => {
                self.convert_block(&unsafe_statement.block, ctx)?
            }
            Statement::Fixed(fixed) => {
                let mut statements = vec![VbStatement::new(
                    self.convert_local_declaration(&fixed.declaration)?,
                )];
                statements.extend(self.convert_embedded_body(&fixed.body, ctx)?);
                statements
            }
            Statement::LocalFunction(local_fn) => {
                vec![fallback::unconverted_statement(
                    local_fn.span.text(self.source),
                    "VbStatement",
                )]
            }
            Statement::Empty(_) => vec![],
        };

        self.attach_statement_trivia(
            &mut converted,
            statement.leading_trivia(),
            statement.trailing_trivia(),
        )?;
        Ok(converted)
    }

    /// Converted trivia goes onto the first produced statement; a trailing
    /// comment onto the last. Comment-only statements materialize when the
    /// conversion produced nothing to hang them on.
    fn attach_statement_trivia(
        &self,
        statements: &mut Vec<VbStatement>,
        leading: &[Trivia],
        trailing: &[Trivia],
    ) -> Result<(), ConvertError> {
        let converted_leading = convert_trivia_list(leading)?;
        if !converted_leading.is_empty() {
            match statements.first_mut() {
                Some(first) => {
                    let mut merged = converted_leading;
                    merged.append(&mut first.leading_trivia);
                    first.leading_trivia = merged;
                }
                None => {
                    statements.push(
                        VbStatement::new(VbStatementKind::Empty)
                            .with_leading_trivia(converted_leading),
                    );
                }
            }
        }
        if let Some(comment) = first_comment_text(trailing) {
            if let Some(last) = statements.last_mut() {
                if last.trailing_comment.is_none() {
                    last.trailing_comment = Some(comment);
                }
            }
        }
        Ok(())
    }

    fn convert_block(
        &self,
        block: &BlockStatement,
        ctx: &mut ConvertContext,
    ) -> Result<Vec<VbStatement>, ConvertError> {
        let mut statements = Vec::new();
        for statement in &block.statements {
            statements.extend(self.convert_statement(statement, ctx)?);
        }
        let end_trivia = convert_trivia_list(&block.end_trivia)?;
        if !end_trivia.is_empty() {
            statements.push(
                VbStatement::new(VbStatementKind::Empty).with_leading_trivia(end_trivia),
            );
        }
        Ok(statements)
    }

    /// A loop/using/lock body: blocks flatten, single statements wrap.
    pub(crate) fn convert_embedded_body(
        &self,
        body: &Statement,
        ctx: &mut ConvertContext,
    ) -> Result<Vec<VbStatement>, ConvertError> {
        match body {
            Statement::Block(block) => {
                let mut statements = self.convert_block(block, ctx)?;
                self.attach_statement_trivia(
                    &mut statements,
                    &block.leading_trivia,
                    &block.trailing_trivia,
                )?;
                Ok(statements)
            }
            other => self.convert_statement(other, ctx),
        }
    }

    pub(crate) fn convert_local_declaration(
        &self,
        declaration: &VariableDeclaration,
    ) -> Result<VbStatementKind, ConvertError> {
        let var_type = self.convert_declared_type(&declaration.var_type)?;
        let declarators = declaration
            .declarators
            .iter()
            .map(|declarator| {
                Ok(VbVariableDeclarator {
                    name: convert_identifier(&declarator.name.text, false, self.options).into(),
                    var_type: var_type.clone(),
                    initializer: declarator
                        .initializer
                        .as_ref()
                        .map(|init| self.convert_expression(init))
                        .transpose()?,
                })
            })
            .collect::<Result<Vec<_>, ConvertError>>()?;
        Ok(VbStatementKind::LocalDeclaration {
            is_const: declaration.is_const,
            declarators,
        })
    }

    /// Expression statements: assignments and increments become VB
    /// assignment statements, everything else is a call statement.
    pub(crate) fn convert_expression_statement(
        &self,
        expr: &Expression,
    ) -> Result<Vec<VbStatement>, ConvertError> {
        match expr {
            Expression::Assignment {
                target, op, value, ..
            } => Ok(vec![VbStatement::new(
                self.convert_assignment(target, *op, value)?,
            )]),
            Expression::PostfixUnary {
                op, operand, ..
            } => {
                let target = self.convert_expression(operand)?;
                let vb_op = match op {
                    PostfixOp::Increment => VbAssignOp::AddAssign,
                    PostfixOp::Decrement => VbAssignOp::SubtractAssign,
                };
                Ok(vec![VbStatement::new(VbStatementKind::Assignment {
                    target,
                    op: vb_op,
                    value: VbExpression::Literal(VbLiteral::Number("1".to_string())),
                })])
            }
            Expression::Unary {
                op: op @ (UnaryOp::PreIncrement | UnaryOp::PreDecrement),
                operand,
                ..
            } => {
                let target = self.convert_expression(operand)?;
                let vb_op = if *op == UnaryOp::PreIncrement {
                    VbAssignOp::AddAssign
                } else {
                    VbAssignOp::SubtractAssign
                };
                Ok(vec![VbStatement::new(VbStatementKind::Assignment {
                    target,
                    op: vb_op,
                    value: VbExpression::Literal(VbLiteral::Number("1".to_string())),
                })])
            }
            other => Ok(vec![VbStatement::new(VbStatementKind::Expression(
                self.convert_expression(other)?,
            ))]),
        }
    }

    /// Compound assignments with no VB counterpart desugar to
    /// `x = x op y`, duplicating the target; the four arithmetic compounds
    /// map one-to-one.
    fn convert_assignment(
        &self,
        target: &Expression,
        op: AssignmentOp,
        value: &Expression,
    ) -> Result<VbStatementKind, ConvertError> {
        let vb_target = self.convert_expression(target)?;
        let vb_value = self.convert_expression(value)?;

        let direct = match op {
            AssignmentOp::Assign => Some(VbAssignOp::Assign),
            AssignmentOp::AddAssign => Some(VbAssignOp::AddAssign),
            AssignmentOp::SubtractAssign => Some(VbAssignOp::SubtractAssign),
            AssignmentOp::MultiplyAssign => Some(VbAssignOp::MultiplyAssign),
            AssignmentOp::DivideAssign => Some(VbAssignOp::DivideAssign),
            _ => None,
        };
        if let Some(vb_op) = direct {
            return Ok(VbStatementKind::Assignment {
                target: vb_target,
                op: vb_op,
                value: vb_value,
            });
        }

        let desugared_op = match op {
            AssignmentOp::ModuloAssign => VbBinaryOp::Modulo,
            AssignmentOp::AndAssign => VbBinaryOp::And,
            AssignmentOp::OrAssign => VbBinaryOp::Or,
            AssignmentOp::XorAssign => VbBinaryOp::Xor,
            AssignmentOp::ShiftLeftAssign => VbBinaryOp::ShiftLeft,
            AssignmentOp::ShiftRightAssign => VbBinaryOp::ShiftRight,
            _ => unreachable!("direct forms handled above"),
        };
        Ok(VbStatementKind::Assignment {
            target: vb_target.clone(),
            op: VbAssignOp::Assign,
            value: VbExpression::Binary {
                left: Box::new(vb_target),
                op: desugared_op,
                right: Box::new(vb_value),
            },
        })
    }

    fn convert_if(
        &self,
        if_statement: &IfStatement,
        ctx: &mut ConvertContext,
    ) -> Result<Vec<VbStatement>, ConvertError> {
        let condition = self.convert_expression(&if_statement.condition)?;
        let then_statements = self.convert_embedded_body(&if_statement.then_branch, ctx)?;

        // Flatten `else if` chains into ElseIf blocks.
        let mut else_ifs = Vec::new();
        let mut else_statements = None;
        let mut cursor = if_statement.else_branch.as_deref();
        while let Some(else_branch) = cursor {
            match else_branch {
                Statement::If(nested) => {
                    else_ifs.push(VbElseIf {
                        condition: self.convert_expression(&nested.condition)?,
                        statements: self.convert_embedded_body(&nested.then_branch, ctx)?,
                    });
                    cursor = nested.else_branch.as_deref();
                }
                other => {
                    else_statements = Some(self.convert_embedded_body(other, ctx)?);
                    cursor = None;
                }
            }
        }

        Ok(vec![VbStatement::new(VbStatementKind::If {
            condition,
            then_statements,
            else_ifs,
            else_statements,
        })])
    }

    fn convert_switch(
        &self,
        switch: &SwitchStatement,
        ctx: &mut ConvertContext,
    ) -> Result<Vec<VbStatement>, ConvertError> {
        let expr = self.convert_expression(&switch.expr)?;
        let mut cases = Vec::new();
        ctx.enter(EnclosingKind::Select);
        let result = (|| -> Result<(), ConvertError> {
            for section in &switch.sections {
                let clauses = section
                    .labels
                    .iter()
                    .map(|label| {
                        Ok(match label {
                            SwitchLabel::Case(value) => {
                                VbCaseClause::Expression(self.convert_expression(value)?)
                            }
                            SwitchLabel::Default => VbCaseClause::Else,
                        })
                    })
                    .collect::<Result<Vec<_>, ConvertError>>()?;

                // A break that merely ends the section is fall-through
                // prevention; VB needs none.
                let mut body: &[Statement] = &section.statements;
                if let Some((Statement::Break(_), rest)) = body.split_last() {
                    body = rest;
                }
                let mut statements = Vec::new();
                for statement in body {
                    statements.extend(self.convert_statement(statement, ctx)?);
                }
                cases.push(VbCaseBlock { clauses, statements });
            }
            Ok(())
        })();
        ctx.exit();
        result?;

        Ok(vec![VbStatement::new(VbStatementKind::SelectCase {
            expr,
            cases,
        })])
    }

    fn convert_break(
        &self,
        break_statement: &BreakStatement,
        ctx: &ConvertContext,
    ) -> VbStatement {
        let kind = match ctx.breakable() {
            Some(EnclosingKind::ForNext) | Some(EnclosingKind::ForEach) => VbExitKind::For,
            Some(EnclosingKind::While) => VbExitKind::While,
            Some(EnclosingKind::Do) => VbExitKind::Do,
            Some(EnclosingKind::Select) => VbExitKind::Select,
            None => {
                return fallback::unconverted_statement(
                    break_statement.span.text(self.source),
                    "VbStatement",
                )
            }
        };
        VbStatement::new(VbStatementKind::Exit(kind))
    }

    fn convert_continue(
        &self,
        continue_statement: &ContinueStatement,
        ctx: &ConvertContext,
    ) -> VbStatement {
        let kind = match ctx.continuable() {
            Some(EnclosingKind::ForNext) | Some(EnclosingKind::ForEach) => VbContinueKind::For,
            Some(EnclosingKind::While) => VbContinueKind::While,
            Some(EnclosingKind::Do) => VbContinueKind::Do,
            _ => {
                return fallback::unconverted_statement(
                    continue_statement.span.text(self.source),
                    "VbStatement",
                )
            }
        };
        VbStatement::new(VbStatementKind::Continue(kind))
    }

    /// Three goto shapes. Case labels reuse the case expression's rendered
    /// text, which can alias distinct cases whose text coincides; the same
    /// simplification the source system makes.
    fn convert_goto(&self, goto_statement: &GotoStatement) -> Result<VbStatement, ConvertError> {
        let label = match &goto_statement.kind {
            GotoKind::Label(name) => name.text.clone(),
            GotoKind::Case(value) => {
                let rendered = render_expression(&self.convert_expression(value)?);
                format!("Case{}", rendered.replace(' ', ""))
            }
            GotoKind::Default => "CaseElse".to_string(),
        };
        Ok(VbStatement::new(VbStatementKind::GoTo(label)))
    }

    fn convert_using(
        &self,
        using: &UsingStatement,
        ctx: &mut ConvertContext,
    ) -> Result<Vec<VbStatement>, ConvertError> {
        let body = self.convert_embedded_body(&using.body, ctx)?;
        let (resources, expr) = match (&using.declaration, &using.expr) {
            (Some(declaration), _) => {
                let var_type = self.convert_declared_type(&declaration.var_type)?;
                let resources = declaration
                    .declarators
                    .iter()
                    .map(|declarator| {
                        Ok(VbVariableDeclarator {
                            name: convert_identifier(
                                &declarator.name.text,
                                false,
                                self.options,
                            )
                            .into(),
                            var_type: var_type.clone(),
                            initializer: declarator
                                .initializer
                                .as_ref()
                                .map(|init| self.convert_expression(init))
                                .transpose()?,
                        })
                    })
                    .collect::<Result<Vec<_>, ConvertError>>()?;
                (resources, None)
            }
            (None, Some(expr)) => (vec![], Some(self.convert_expression(expr)?)),
            (None, None) => (vec![], None),
        };
        Ok(vec![VbStatement::new(VbStatementKind::Using {
            resources,
            expr,
            body,
        })])
    }

    fn convert_try(
        &self,
        try_statement: &TryStatement,
        ctx: &mut ConvertContext,
    ) -> Result<Vec<VbStatement>, ConvertError> {
        let body = self.convert_block(&try_statement.block, ctx)?;
        let catches = try_statement
            .catches
            .iter()
            .map(|catch| self.convert_catch(catch, ctx))
            .collect::<Result<Vec<_>, _>>()?;
        let finally_statements = try_statement
            .finally_block
            .as_ref()
            .map(|finally| self.convert_block(finally, ctx))
            .transpose()?;
        Ok(vec![VbStatement::new(VbStatementKind::Try {
            body,
            catches,
            finally_statements,
        })])
    }

    /// Catch headers: no declaration, a type with a bound name, or a type
    /// alone. VB requires an identifier before `As`, so the nameless form
    /// synthesizes one.
    fn convert_catch(
        &self,
        catch: &CatchClause,
        ctx: &mut ConvertContext,
    ) -> Result<VbCatchBlock, ConvertError> {
        let statements = self.convert_block(&catch.block, ctx)?;
        let exception_type = catch
            .exception_type
            .as_ref()
            .map(|ty| self.convert_type(ty))
            .transpose()?;
        let name = match (&catch.name, &exception_type) {
            (Some(name), _) => Some(VbIdentifier::from(convert_identifier(
                &name.text,
                false,
                self.options,
            ))),
            (None, Some(_)) => Some(VbIdentifier::unescaped("__unused")),
            (None, None) => None,
        };
        Ok(VbCatchBlock {
            name,
            exception_type,
            filter: catch
                .filter
                .as_ref()
                .map(|filter| self.convert_expression(filter))
                .transpose()?,
            statements,
        })
    }

    // -- the for classifier --------------------------------------------------

    /// Two-tier `for` lowering: the restricted counted-loop shape gets the
    /// native `For ... To ... Step`, everything else a general `While`.
    fn convert_for(
        &self,
        for_statement: &ForStatement,
        ctx: &mut ConvertContext,
    ) -> Result<Vec<VbStatement>, ConvertError> {
        if let Some(simple) = classify_simple_for(for_statement) {
            return self.lower_simple_for(for_statement, simple, ctx);
        }
        self.lower_complex_for(for_statement, ctx)
    }

    fn lower_simple_for(
        &self,
        for_statement: &ForStatement,
        simple: SimpleFor<'_>,
        ctx: &mut ConvertContext,
    ) -> Result<Vec<VbStatement>, ConvertError> {
        ctx.enter(EnclosingKind::ForNext);
        let body = self.convert_embedded_body(&for_statement.body, ctx);
        ctx.exit();

        let bound = self.convert_expression(simple.bound)?;
        // Strict comparisons adjust the inclusive VB bound by one so the
        // iteration count is preserved exactly.
        let to = match simple.op {
            BinaryOp::Less => subtract_one(bound),
            BinaryOp::Greater => add_one(bound),
            _ => bound,
        };
        let step = match simple.step {
            StepKind::One => None,
            StepKind::MinusOne => Some(VbExpression::Literal(VbLiteral::Number(
                "-1".to_string(),
            ))),
            StepKind::Add(expr) => Some(self.convert_expression(expr)?),
            StepKind::Subtract(expr) => Some(negate(self.convert_expression(expr)?)),
        };

        Ok(vec![VbStatement::new(VbStatementKind::ForNext {
            variable: convert_identifier(&simple.variable.text, false, self.options).into(),
            var_type: simple
                .var_type
                .map(|ty| self.convert_type(ty))
                .transpose()?,
            from: self.convert_expression(simple.from)?,
            to,
            step,
            body: body?,
        })])
    }

    fn lower_complex_for(
        &self,
        for_statement: &ForStatement,
        ctx: &mut ConvertContext,
    ) -> Result<Vec<VbStatement>, ConvertError> {
        let mut statements = Vec::new();
        if let Some(declaration) = &for_statement.declaration {
            statements.push(VbStatement::new(
                self.convert_local_declaration(declaration)?,
            ));
        }
        for initializer in &for_statement.initializers {
            statements.extend(self.convert_expression_statement(initializer)?);
        }

        let condition = match &for_statement.condition {
            Some(condition) => self.convert_expression(condition)?,
            // An absent condition means "loop forever".
            None => VbExpression::Literal(VbLiteral::Boolean(true)),
        };

        ctx.enter(EnclosingKind::While);
        let body_result = (|| -> Result<Vec<VbStatement>, ConvertError> {
            let mut body = self.convert_embedded_body(&for_statement.body, ctx)?;
            for incrementor in &for_statement.incrementors {
                body.extend(self.convert_expression_statement(incrementor)?);
            }
            Ok(body)
        })();
        ctx.exit();

        statements.push(VbStatement::new(VbStatementKind::While {
            condition,
            body: body_result?,
        }));
        Ok(statements)
    }
}

struct SimpleFor<'a> {
    variable: &'a Identifier,
    /// None when the declared type is inferred (`var`).
    var_type: Option<&'a TypeRef>,
    from: &'a Expression,
    op: BinaryOp,
    bound: &'a Expression,
    step: StepKind<'a>,
}

enum StepKind<'a> {
    One,
    MinusOne,
    Add(&'a Expression),
    Subtract(&'a Expression),
}

/// Simple iff: one declared variable with an initializer whose type is
/// inferred or built-in, a `variable op bound` comparison for a relational
/// op, and one incrementor that is an increment/decrement or compound
/// add/subtract of that same variable.
fn classify_simple_for(for_statement: &ForStatement) -> Option<SimpleFor<'_>> {
    let declaration = for_statement.declaration.as_ref()?;
    if !for_statement.initializers.is_empty() || declaration.declarators.len() != 1 {
        return None;
    }
    let declarator = &declaration.declarators[0];
    let from = declarator.initializer.as_ref()?;
    let variable = &declarator.name;
    let var_type = match &declaration.var_type {
        TypeRef::Var(_) => None,
        predefined @ TypeRef::Predefined(..) => Some(predefined),
        _ => return None,
    };

    let condition = for_statement.condition.as_ref()?;
    let Expression::Binary {
        left,
        op: op @ (BinaryOp::Less | BinaryOp::LessEqual | BinaryOp::Greater | BinaryOp::GreaterEqual),
        right,
        ..
    } = condition
    else {
        return None;
    };
    if !is_same_identifier(left, variable) {
        return None;
    }

    if for_statement.incrementors.len() != 1 {
        return None;
    }
    let step = match &for_statement.incrementors[0] {
        Expression::PostfixUnary { op, operand, .. } if is_same_identifier(operand, variable) => {
            match op {
                PostfixOp::Increment => StepKind::One,
                PostfixOp::Decrement => StepKind::MinusOne,
            }
        }
        Expression::Unary { op, operand, .. } if is_same_identifier(operand, variable) => {
            match op {
                UnaryOp::PreIncrement => StepKind::One,
                UnaryOp::PreDecrement => StepKind::MinusOne,
                _ => return None,
            }
        }
        Expression::Assignment {
            target,
            op: AssignmentOp::AddAssign,
            value,
            ..
        } if is_same_identifier(target, variable) => StepKind::Add(value),
        Expression::Assignment {
            target,
            op: AssignmentOp::SubtractAssign,
            value,
            ..
        } if is_same_identifier(target, variable) => StepKind::Subtract(value),
        _ => return None,
    };

    Some(SimpleFor {
        variable,
        var_type,
        from,
        op: *op,
        bound: right,
        step,
    })
}

fn is_same_identifier(expr: &Expression, identifier: &Identifier) -> bool {
    matches!(expr, Expression::Identifier(name) if name.text == identifier.text)
}

/// Negate a step expression, folding numeric literals.
fn negate(expr: VbExpression) -> VbExpression {
    if let VbExpression::Literal(VbLiteral::Number(text)) = &expr {
        if let Ok(value) = text.parse::<i64>() {
            return VbExpression::Literal(VbLiteral::Number((-value).to_string()));
        }
    }
    VbExpression::Unary {
        op: csvb_vb::VbUnaryOp::Minus,
        operand: Box::new(expr),
    }
}
