// csvb_convert/expressions - Expression node conversion
use crate::context::ConvertContext;
use crate::error::ConvertError;
use crate::tokens::{convert_identifier, convert_numeric_text, convert_string_value, predefined_type_name};
use crate::{fallback, Converter};
use csvb_ast::*;
use csvb_vb::{
    render_type, VbAnonymousMember, VbArgument, VbBinaryOp, VbExpression, VbIdentifier,
    VbInitializer, VbInterpolatedPart, VbLambdaBody, VbLambdaKind, VbLiteral, VbOrdering,
    VbParamModifier, VbParameter, VbQueryClause, VbQueryExpression, VbStatementKind, VbUnaryOp,
};

impl<'a> Converter<'a> {
    pub(crate) fn convert_expression(
        &self,
        expr: &Expression,
    ) -> Result<VbExpression, ConvertError> {
        match expr {
            Expression::Literal(literal, span) => self.convert_literal(literal, *span),

            Expression::Identifier(identifier) => Ok(VbExpression::Identifier(
                convert_identifier(&identifier.text, false, self.options).into(),
            )),

            Expression::GenericName {
                name, type_args, ..
            } => Ok(VbExpression::GenericName {
                name: convert_identifier(&name.text, false, self.options).into(),
                type_args: type_args
                    .iter()
                    .map(|arg| self.convert_type(arg))
                    .collect::<Result<Vec<_>, _>>()?,
            }),

            Expression::PredefinedType(predefined, _) => Ok(VbExpression::Identifier(
                VbIdentifier::unescaped(predefined_type_name(*predefined)),
            )),

            Expression::Binary {
                left,
                op,
                right,
                ..
            } => self.convert_binary(left, *op, right),

            Expression::Unary { op, operand, span } => self.convert_unary(*op, operand, *span),

            Expression::PostfixUnary { span, .. } => {
                // Increment and decrement are statements in VB; in expression
                // position there is nothing to build.
                Ok(self.fallback_expression(*span))
            }

            Expression::Assignment { span, .. } => Ok(self.fallback_expression(*span)),

            Expression::Conditional {
                condition,
                when_true,
                when_false,
                ..
            } => Ok(VbExpression::IfIntrinsic {
                args: vec![
                    self.convert_expression(condition)?,
                    self.convert_expression(when_true)?,
                    self.convert_expression(when_false)?,
                ],
            }),

            Expression::MemberAccess {
                object,
                name,
                type_args,
                ..
            } => Ok(VbExpression::MemberAccess {
                object: Box::new(self.convert_expression(object)?),
                name: convert_identifier(&name.text, true, self.options).into(),
                type_args: type_args
                    .iter()
                    .map(|arg| self.convert_type(arg))
                    .collect::<Result<Vec<_>, _>>()?,
            }),

            Expression::NullSafeMemberAccess { object, name, .. } => {
                Ok(VbExpression::NullSafeMemberAccess {
                    object: Box::new(self.convert_expression(object)?),
                    name: convert_identifier(&name.text, true, self.options).into(),
                })
            }

            Expression::Invocation { callee, args, .. } => Ok(VbExpression::Invocation {
                callee: Box::new(self.convert_expression(callee)?),
                args: self.convert_arguments(args)?,
            }),

            // VB element access uses parentheses, so the node shape is an
            // invocation.
            Expression::ElementAccess { object, args, .. } => Ok(VbExpression::Invocation {
                callee: Box::new(self.convert_expression(object)?),
                args: args
                    .iter()
                    .map(|arg| Ok(VbArgument::positional(self.convert_expression(arg)?)))
                    .collect::<Result<Vec<_>, ConvertError>>()?,
            }),

            Expression::ObjectCreation {
                target_type,
                args,
                initializer,
                ..
            } => Ok(VbExpression::New {
                target: self.convert_type(target_type)?,
                args: self.convert_arguments(args)?,
                initializer: initializer
                    .as_ref()
                    .map(|init| self.convert_initializer(init))
                    .transpose()?,
            }),

            Expression::ArrayCreation {
                element_type,
                rank_sizes,
                initializer,
                ..
            } => self.convert_array_creation(
                element_type.as_ref(),
                rank_sizes,
                initializer.as_ref(),
            ),

            Expression::AnonymousObject { members, .. } => Ok(VbExpression::NewAnonymous {
                members: members
                    .iter()
                    .map(|member| {
                        Ok(VbAnonymousMember {
                            name: member
                                .name
                                .as_ref()
                                .map(|name| {
                                    convert_identifier(&name.text, true, self.options).into()
                                }),
                            value: self.convert_expression(&member.value)?,
                        })
                    })
                    .collect::<Result<Vec<_>, ConvertError>>()?,
            }),

            Expression::Initializer(initializer) => match initializer.kind {
                InitializerKind::Collection => Ok(VbExpression::CollectionLiteral(
                    initializer
                        .elements
                        .iter()
                        .map(|element| self.convert_expression(element))
                        .collect::<Result<Vec<_>, _>>()?,
                )),
                InitializerKind::Object => Ok(self.fallback_expression(initializer.span)),
            },

            Expression::Cast {
                target_type, expr, ..
            } => Ok(VbExpression::CType {
                expr: Box::new(self.convert_expression(expr)?),
                target: self.convert_type(target_type)?,
            }),

            Expression::Is {
                expr, target_type, ..
            } => Ok(VbExpression::TypeOfIs {
                expr: Box::new(self.convert_expression(expr)?),
                target: self.convert_type(target_type)?,
                negated: false,
            }),

            // Declaration patterns bind a name, which `TypeOf ... Is` cannot
            // express; acknowledged best-effort gap.
            Expression::IsPattern { span, .. } => Ok(self.fallback_expression(*span)),

            Expression::As {
                expr, target_type, ..
            } => Ok(VbExpression::TryCast {
                expr: Box::new(self.convert_expression(expr)?),
                target: self.convert_type(target_type)?,
            }),

            Expression::TypeOf { target_type, .. } => Ok(VbExpression::GetType {
                target: self.convert_type(target_type)?,
            }),

            Expression::SizeOf { target_type, .. } => {
                Ok(self.synthetic_call("SizeOf", vec![self.type_as_argument(target_type)?]))
            }

            Expression::Default {
                target_type: Some(target_type),
                ..
            } => Ok(VbExpression::CType {
                expr: Box::new(VbExpression::Literal(VbLiteral::Nothing)),
                target: self.convert_type(target_type)?,
            }),
            Expression::Default {
                target_type: None, ..
            } => Ok(VbExpression::Literal(VbLiteral::Nothing)),

            Expression::Checked { checked, expr, .. } => {
                let name = if *checked { "Checked" } else { "Unchecked" };
                Ok(self.synthetic_call(name, vec![self.convert_expression(expr)?]))
            }

            Expression::StackAlloc { span, .. } => Ok(self.fallback_expression(*span)),

            Expression::MakeRef { expr, .. } => {
                Ok(self.synthetic_call("MakeRef", vec![self.convert_expression(expr)?]))
            }
            Expression::RefType { expr, .. } => {
                Ok(self.synthetic_call("RefType", vec![self.convert_expression(expr)?]))
            }
            Expression::RefValue {
                expr, target_type, ..
            } => Ok(self.synthetic_call(
                "RefValue",
                vec![
                    self.convert_expression(expr)?,
                    self.type_as_argument(target_type)?,
                ],
            )),

            Expression::Lambda {
                params,
                body,
                is_async,
                ..
            } => self.convert_lambda(params, body, *is_async),

            Expression::Query(query) => Ok(VbExpression::Query(self.convert_query(query)?)),

            Expression::Interpolated { parts, .. } => Ok(VbExpression::Interpolated {
                parts: parts
                    .iter()
                    .map(|part| {
                        Ok(match part {
                            InterpolatedPart::Text(text) => {
                                VbInterpolatedPart::Text(text.clone())
                            }
                            InterpolatedPart::Expression { expr, format } => {
                                VbInterpolatedPart::Expression {
                                    expr: self.convert_expression(expr)?,
                                    format: format.clone(),
                                }
                            }
                        })
                    })
                    .collect::<Result<Vec<_>, ConvertError>>()?,
            }),

            Expression::Paren { expr, .. } => Ok(VbExpression::Paren(Box::new(
                self.convert_expression(expr)?,
            ))),

            Expression::Tuple { elements, .. } => Ok(VbExpression::Tuple {
                elements: elements
                    .iter()
                    .map(|element| self.convert_expression(&element.value))
                    .collect::<Result<Vec<_>, _>>()?,
            }),

            Expression::NameOf { expr, .. } => Ok(VbExpression::NameOf(Box::new(
                self.convert_expression(expr)?,
            ))),

            Expression::Await { expr, .. } => Ok(VbExpression::Await(Box::new(
                self.convert_expression(expr)?,
            ))),

            // No VB throw-expression.
            Expression::Throw { span, .. } => Ok(self.fallback_expression(*span)),

            Expression::This(_) => Ok(VbExpression::Me),
            Expression::Base(_) => Ok(VbExpression::MyBase),
        }
    }

    fn convert_literal(
        &self,
        literal: &Literal,
        span: Span,
    ) -> Result<VbExpression, ConvertError> {
        Ok(match literal {
            Literal::Number(text) => {
                VbExpression::Literal(VbLiteral::Number(convert_numeric_text(text)))
            }
            Literal::String { value, verbatim } => {
                // Multi-line only arises for verbatim literals; the span's
                // line numbers are the original source of truth for that.
                let multi_line = *verbatim && span.is_multi_line();
                convert_string_value(value, multi_line)
            }
            Literal::Boolean(value) => VbExpression::Literal(VbLiteral::Boolean(*value)),
            Literal::Character(value) => VbExpression::Literal(VbLiteral::Char(*value)),
            Literal::Null => VbExpression::Literal(VbLiteral::Nothing),
        })
    }

    fn convert_binary(
        &self,
        left: &Expression,
        op: BinaryOp,
        right: &Expression,
    ) -> Result<VbExpression, ConvertError> {
        // Null comparisons become reference checks.
        if matches!(op, BinaryOp::Equal | BinaryOp::NotEqual)
            && (left.is_null_literal() || right.is_null_literal())
        {
            let vb_op = if op == BinaryOp::Equal {
                VbBinaryOp::Is
            } else {
                VbBinaryOp::IsNot
            };
            return Ok(VbExpression::Binary {
                left: Box::new(self.convert_expression(left)?),
                op: vb_op,
                right: Box::new(self.convert_expression(right)?),
            });
        }

        if op == BinaryOp::Coalesce {
            return Ok(VbExpression::IfIntrinsic {
                args: vec![
                    self.convert_expression(left)?,
                    self.convert_expression(right)?,
                ],
            });
        }

        let vb_op = match op {
            BinaryOp::Add => VbBinaryOp::Add,
            BinaryOp::Subtract => VbBinaryOp::Subtract,
            BinaryOp::Multiply => VbBinaryOp::Multiply,
            BinaryOp::Divide => VbBinaryOp::Divide,
            BinaryOp::Modulo => VbBinaryOp::Modulo,
            BinaryOp::Equal => VbBinaryOp::Equal,
            BinaryOp::NotEqual => VbBinaryOp::NotEqual,
            BinaryOp::Less => VbBinaryOp::Less,
            BinaryOp::LessEqual => VbBinaryOp::LessEqual,
            BinaryOp::Greater => VbBinaryOp::Greater,
            BinaryOp::GreaterEqual => VbBinaryOp::GreaterEqual,
            BinaryOp::And => VbBinaryOp::AndAlso,
            BinaryOp::Or => VbBinaryOp::OrElse,
            BinaryOp::BitAnd => VbBinaryOp::And,
            BinaryOp::BitOr => VbBinaryOp::Or,
            BinaryOp::BitXor => VbBinaryOp::Xor,
            BinaryOp::ShiftLeft => VbBinaryOp::ShiftLeft,
            BinaryOp::ShiftRight => VbBinaryOp::ShiftRight,
            BinaryOp::Coalesce => unreachable!("handled above"),
        };
        Ok(VbExpression::Binary {
            left: Box::new(self.convert_expression(left)?),
            op: vb_op,
            right: Box::new(self.convert_expression(right)?),
        })
    }

    fn convert_unary(
        &self,
        op: UnaryOp,
        operand: &Expression,
        span: Span,
    ) -> Result<VbExpression, ConvertError> {
        let vb_op = match op {
            UnaryOp::Plus => VbUnaryOp::Plus,
            UnaryOp::Minus => VbUnaryOp::Minus,
            UnaryOp::Not | UnaryOp::BitNot => VbUnaryOp::Not,
            // Increment/decrement are handled at statement level; pointer
            // operators have no VB shape at all.
            UnaryOp::PreIncrement
            | UnaryOp::PreDecrement
            | UnaryOp::AddressOf
            | UnaryOp::Dereference => return Ok(self.fallback_expression(span)),
        };
        Ok(VbExpression::Unary {
            op: vb_op,
            operand: Box::new(self.convert_expression(operand)?),
        })
    }

    pub(crate) fn convert_arguments(
        &self,
        args: &[Argument],
    ) -> Result<Vec<VbArgument>, ConvertError> {
        args.iter()
            .map(|arg| {
                Ok(VbArgument {
                    name: arg
                        .name
                        .as_ref()
                        .map(|name| convert_identifier(&name.text, true, self.options).into()),
                    value: self.convert_expression(&arg.value)?,
                })
            })
            .collect()
    }

    pub(crate) fn convert_initializer(
        &self,
        initializer: &InitializerExpression,
    ) -> Result<VbInitializer, ConvertError> {
        match initializer.kind {
            InitializerKind::Object => {
                let mut fields = Vec::new();
                for element in &initializer.elements {
                    let Expression::Assignment {
                        target,
                        op: AssignmentOp::Assign,
                        value,
                        ..
                    } = element
                    else {
                        continue;
                    };
                    let Expression::Identifier(name) = target.as_ref() else {
                        continue;
                    };
                    fields.push((
                        VbIdentifier::from(convert_identifier(&name.text, true, self.options)),
                        self.convert_expression(value)?,
                    ));
                }
                Ok(VbInitializer::Object(fields))
            }
            InitializerKind::Collection => Ok(VbInitializer::Collection(
                initializer
                    .elements
                    .iter()
                    .map(|element| self.convert_expression(element))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
        }
    }

    fn convert_array_creation(
        &self,
        element_type: Option<&TypeRef>,
        rank_sizes: &[Option<Expression>],
        initializer: Option<&InitializerExpression>,
    ) -> Result<VbExpression, ConvertError> {
        let elements = match initializer {
            Some(init) => init
                .elements
                .iter()
                .map(|element| self.convert_expression(element))
                .collect::<Result<Vec<_>, _>>()?,
            None => vec![],
        };
        let Some(element_type) = element_type else {
            // `new[] { ... }` - element type inferred.
            return Ok(VbExpression::CollectionLiteral(elements));
        };
        // C# sizes are lengths; VB bounds are inclusive upper bounds.
        let bounds = rank_sizes
            .iter()
            .map(|size| {
                size.as_ref()
                    .map(|size| Ok(subtract_one(self.convert_expression(size)?)))
                    .transpose()
            })
            .collect::<Result<Vec<_>, ConvertError>>()?;
        Ok(VbExpression::ArrayCreation {
            element: self.convert_type(element_type)?,
            bounds,
            initializer: Some(VbInitializer::Collection(elements)),
        })
    }

    fn convert_lambda(
        &self,
        params: &[Parameter],
        body: &LambdaBody,
        is_async: bool,
    ) -> Result<VbExpression, ConvertError> {
        let vb_params = params
            .iter()
            .map(|param| self.convert_parameter(param))
            .collect::<Result<Vec<_>, _>>()?;
        let (kind, vb_body) = match body {
            LambdaBody::Expression(expr) => (
                VbLambdaKind::Function,
                VbLambdaBody::Expression(Box::new(self.convert_expression(expr)?)),
            ),
            LambdaBody::Block(statements) => {
                // Lambdas start a fresh breakable context.
                let mut ctx = ConvertContext::new();
                let mut converted = Vec::new();
                for statement in statements {
                    converted.extend(self.convert_statement(statement, &mut ctx)?);
                }
                let returns_value = converted.iter().any(|statement| {
                    matches!(statement.kind, VbStatementKind::Return(Some(_)))
                });
                let kind = if returns_value {
                    VbLambdaKind::Function
                } else {
                    VbLambdaKind::Sub
                };
                (kind, VbLambdaBody::Block(converted))
            }
        };
        Ok(VbExpression::Lambda {
            kind,
            params: vb_params,
            body: vb_body,
            is_async,
        })
    }

    pub(crate) fn convert_parameter(
        &self,
        param: &Parameter,
    ) -> Result<VbParameter, ConvertError> {
        let mut modifiers = Vec::new();
        for modifier in &param.modifiers {
            match modifier {
                ParamModifier::Ref | ParamModifier::Out => {
                    modifiers.push(VbParamModifier::ByRef)
                }
                ParamModifier::Params => modifiers.push(VbParamModifier::ParamArray),
                // The `this` receiver marker is expressed through the
                // Extension attribute on the method instead.
                ParamModifier::This => {}
            }
        }
        if param.default_value.is_some() {
            modifiers.insert(0, VbParamModifier::Optional);
        }
        Ok(VbParameter {
            modifiers,
            name: convert_identifier(&param.name.text, false, self.options).into(),
            param_type: param
                .param_type
                .as_ref()
                .map(|ty| self.convert_declared_type(ty))
                .transpose()?
                .flatten(),
            default_value: param
                .default_value
                .as_ref()
                .map(|value| self.convert_expression(value))
                .transpose()?,
        })
    }

    // -- queries ------------------------------------------------------------

    fn convert_query(
        &self,
        query: &QueryExpression,
    ) -> Result<VbQueryExpression, ConvertError> {
        let mut clauses = Vec::new();
        clauses.push(self.convert_from_clause(&query.from)?);
        self.convert_query_body(&query.body, &mut clauses)?;
        Ok(VbQueryExpression { clauses })
    }

    fn convert_from_clause(&self, from: &FromClause) -> Result<VbQueryClause, ConvertError> {
        Ok(VbQueryClause::From {
            variable: convert_identifier(&from.name.text, false, self.options).into(),
            var_type: from
                .range_type
                .as_ref()
                .map(|ty| self.convert_type(ty))
                .transpose()?,
            source: self.convert_expression(&from.source)?,
        })
    }

    fn convert_query_body(
        &self,
        body: &QueryBody,
        clauses: &mut Vec<VbQueryClause>,
    ) -> Result<(), ConvertError> {
        for clause in &body.clauses {
            clauses.push(match clause {
                QueryClause::From(from) => self.convert_from_clause(from)?,
                QueryClause::Where { condition, .. } => {
                    VbQueryClause::Where(self.convert_expression(condition)?)
                }
                QueryClause::Let { name, value, .. } => VbQueryClause::Let {
                    variable: convert_identifier(&name.text, false, self.options).into(),
                    value: self.convert_expression(value)?,
                },
                QueryClause::OrderBy { orderings, .. } => VbQueryClause::OrderBy(
                    orderings
                        .iter()
                        .map(|ordering| {
                            Ok(VbOrdering {
                                expr: self.convert_expression(&ordering.expr)?,
                                descending: ordering.descending,
                            })
                        })
                        .collect::<Result<Vec<_>, ConvertError>>()?,
                ),
                QueryClause::Join(join) => {
                    let variable =
                        VbIdentifier::from(convert_identifier(&join.name.text, false, self.options));
                    let source = self.convert_expression(&join.source)?;
                    let left_key = self.convert_expression(&join.left_key)?;
                    let right_key = self.convert_expression(&join.right_key)?;
                    match &join.into {
                        Some(into) => VbQueryClause::GroupJoin {
                            variable,
                            source,
                            left_key,
                            right_key,
                            into: convert_identifier(&into.text, false, self.options).into(),
                        },
                        None => VbQueryClause::Join {
                            variable,
                            var_type: join
                                .range_type
                                .as_ref()
                                .map(|ty| self.convert_type(ty))
                                .transpose()?,
                            source,
                            left_key,
                            right_key,
                        },
                    }
                }
            });
        }

        match &body.finish {
            SelectOrGroup::Select { expr, .. } => {
                clauses.push(VbQueryClause::Select(self.convert_expression(expr)?));
            }
            SelectOrGroup::GroupBy { element, key, .. } => {
                // With a continuation the aggregation gets the continuation's
                // name; without one, the result range variable is omitted.
                let into = body
                    .continuation
                    .as_ref()
                    .map(|continuation| {
                        VbIdentifier::from(convert_identifier(
                            &continuation.name.text,
                            false,
                            self.options,
                        ))
                    });
                clauses.push(VbQueryClause::GroupBy {
                    element: self.convert_expression(element)?,
                    key: self.convert_expression(key)?,
                    into,
                });
            }
        }

        // Continuation clauses keep flowing in the same VB query; the
        // `Into name = Group` binding above carries the new range variable.
        if let Some(continuation) = &body.continuation {
            self.convert_query_body(&continuation.body, clauses)?;
        }
        Ok(())
    }

    // -- helpers ------------------------------------------------------------

    /// The soft path: a diagnostic string literal carrying the original
    /// source text.
    pub(crate) fn fallback_expression(&self, span: Span) -> VbExpression {
        fallback::unconverted_expression(span.text(self.source), "VbExpression")
    }

    fn synthetic_call(&self, name: &str, args: Vec<VbExpression>) -> VbExpression {
        VbExpression::Invocation {
            callee: Box::new(VbExpression::Identifier(VbIdentifier::unescaped(name))),
            args: args.into_iter().map(VbArgument::positional).collect(),
        }
    }

    fn type_as_argument(&self, cs_type: &TypeRef) -> Result<VbExpression, ConvertError> {
        let converted = self.convert_type(cs_type)?;
        Ok(VbExpression::Identifier(VbIdentifier::unescaped(
            render_type(&converted),
        )))
    }
}

/// Adjust a converted bound or size by one, folding integer literals.
pub(crate) fn subtract_one(expr: VbExpression) -> VbExpression {
    adjust_by_one(expr, false)
}

pub(crate) fn add_one(expr: VbExpression) -> VbExpression {
    adjust_by_one(expr, true)
}

fn adjust_by_one(expr: VbExpression, add: bool) -> VbExpression {
    if let VbExpression::Literal(VbLiteral::Number(text)) = &expr {
        if let Ok(value) = text.parse::<i64>() {
            let adjusted = if add { value + 1 } else { value - 1 };
            return VbExpression::Literal(VbLiteral::Number(adjusted.to_string()));
        }
    }
    VbExpression::Binary {
        left: Box::new(expr),
        op: if add {
            VbBinaryOp::Add
        } else {
            VbBinaryOp::Subtract
        },
        right: Box::new(VbExpression::Literal(VbLiteral::Number("1".to_string()))),
    }
}
