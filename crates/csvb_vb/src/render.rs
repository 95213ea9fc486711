// csvb_vb/render - Turn a VB tree into formatted source text
use crate::builder::{VbRenderConfig, VbSourceBuilder};
use crate::declaration::*;
use crate::expression::*;
use crate::statement::*;
use crate::trivia::{VbDirective, VbTrivia};

impl VbCompilationUnit {
    /// Render the unit to VB source with consistent indentation.
    pub fn to_source(&self, config: &VbRenderConfig) -> String {
        let mut builder = VbSourceBuilder::new(config.indent.clone());

        for import in &self.imports {
            render_trivia_list(&mut builder, &import.leading_trivia);
            builder.push_line(&format!("Imports {}", import.name));
        }
        if !self.imports.is_empty() {
            builder.push_line("");
        }

        if !self.assembly_attributes.is_empty() {
            for attribute in &self.assembly_attributes {
                builder.push_line(&format!(
                    "<Assembly: {}>",
                    render_attribute_body(attribute)
                ));
            }
            builder.push_line("");
        }

        for (index, member) in self.members.iter().enumerate() {
            if index > 0 {
                builder.push_line("");
            }
            render_member(&mut builder, member);
        }

        render_trivia_list(&mut builder, &self.trailing_trivia);

        builder.build()
    }
}

pub fn render_trivia_list(builder: &mut VbSourceBuilder, trivia: &[VbTrivia]) {
    for piece in trivia {
        match piece {
            VbTrivia::Comment(text) => builder.push_line(&format!("'{}", text)),
            VbTrivia::DocComment(text) => builder.push_line(&format!("'''{}", text)),
            VbTrivia::Directive(directive) => match directive {
                VbDirective::Region(name) => {
                    builder.push_line(&format!("#Region \"{}\"", name))
                }
                VbDirective::EndRegion => builder.push_line("#End Region"),
                VbDirective::If(condition) => {
                    builder.push_line(&format!("#If {} Then", condition))
                }
                VbDirective::ElseIf(condition) => {
                    builder.push_line(&format!("#ElseIf {} Then", condition))
                }
                VbDirective::Else => builder.push_line("#Else"),
                VbDirective::EndIf => builder.push_line("#End If"),
            },
            VbTrivia::DisabledText(text) => {
                for line in text.lines() {
                    builder.push_line(line);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

pub fn render_member(builder: &mut VbSourceBuilder, member: &VbMember) {
    render_trivia_list(builder, &member.leading_trivia);
    match &member.kind {
        VbMemberKind::Namespace { name, members } => {
            builder.push_line(&format!("Namespace {}", name));
            builder.indent();
            for (index, inner) in members.iter().enumerate() {
                if index > 0 {
                    builder.push_line("");
                }
                render_member(builder, inner);
            }
            builder.dedent();
            builder.push_line("End Namespace");
        }
        VbMemberKind::Type(block) => render_type_block(builder, block),
        VbMemberKind::Enum(block) => render_enum_block(builder, block),
        VbMemberKind::Delegate(decl) => render_delegate(builder, decl),
        VbMemberKind::Method(block) => render_method_block(builder, block),
        VbMemberKind::Operator(block) => render_operator_block(builder, block),
        VbMemberKind::Property(block) => render_property_block(builder, block),
        VbMemberKind::Field(decl) => render_field(builder, decl),
        VbMemberKind::Event(decl) => render_event(builder, decl),
        VbMemberKind::Comment(text) => builder.push_line(&format!("'{}", text)),
        VbMemberKind::Empty => {}
    }
}

fn render_attributes(builder: &mut VbSourceBuilder, attributes: &[VbAttribute]) {
    for attribute in attributes {
        builder.push_line(&format!("<{}>", render_attribute_body(attribute)));
    }
}

pub fn render_attribute_body(attribute: &VbAttribute) -> String {
    if attribute.args.is_empty() {
        format!("{}()", attribute.name)
    } else {
        let args = attribute
            .args
            .iter()
            .map(render_expression)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", attribute.name, args)
    }
}

fn render_modifiers(modifiers: &[VbModifier]) -> String {
    modifiers
        .iter()
        .map(|modifier| modifier.keyword())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_type_params(type_params: &[VbTypeParam]) -> String {
    if type_params.is_empty() {
        return String::new();
    }
    let rendered = type_params
        .iter()
        .map(|param| {
            let name = param.name.render();
            match param.constraints.len() {
                0 => name,
                1 => format!("{} As {}", name, param.constraints[0]),
                _ => format!("{} As {{{}}}", name, param.constraints.join(", ")),
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("(Of {})", rendered)
}

fn render_type_block(builder: &mut VbSourceBuilder, block: &VbTypeBlock) {
    render_attributes(builder, &block.attributes);
    let mut header = String::new();
    let modifiers = render_modifiers(&block.modifiers);
    if !modifiers.is_empty() {
        header.push_str(&modifiers);
        header.push(' ');
    }
    header.push_str(block.kind.keyword());
    header.push(' ');
    header.push_str(&block.name.render());
    header.push_str(&render_type_params(&block.type_params));
    builder.push_line(&header);
    builder.indent();

    if !block.inherits.is_empty() {
        let bases = block
            .inherits
            .iter()
            .map(render_type)
            .collect::<Vec<_>>()
            .join(", ");
        builder.push_line(&format!("Inherits {}", bases));
    }
    if !block.implements.is_empty() {
        let interfaces = block
            .implements
            .iter()
            .map(render_type)
            .collect::<Vec<_>>()
            .join(", ");
        builder.push_line(&format!("Implements {}", interfaces));
    }
    if !block.inherits.is_empty() || !block.implements.is_empty() {
        builder.push_line("");
    }

    for (index, member) in block.members.iter().enumerate() {
        if index > 0 {
            builder.push_line("");
        }
        render_member(builder, member);
    }

    builder.dedent();
    builder.push_line(&format!("End {}", block.kind.keyword()));
}

fn render_enum_block(builder: &mut VbSourceBuilder, block: &VbEnumBlock) {
    render_attributes(builder, &block.attributes);
    let mut header = String::new();
    let modifiers = render_modifiers(&block.modifiers);
    if !modifiers.is_empty() {
        header.push_str(&modifiers);
        header.push(' ');
    }
    header.push_str("Enum ");
    header.push_str(&block.name.render());
    if let Some(base) = &block.base_type {
        header.push_str(" As ");
        header.push_str(&render_type(base));
    }
    builder.push_line(&header);
    builder.indent();
    for member in &block.members {
        render_trivia_list(builder, &member.leading_trivia);
        match &member.value {
            Some(value) => builder.push_line(&format!(
                "{} = {}",
                member.name.render(),
                render_expression(value)
            )),
            None => builder.push_line(&member.name.render()),
        }
    }
    builder.dedent();
    builder.push_line("End Enum");
}

fn render_delegate(builder: &mut VbSourceBuilder, decl: &VbDelegateDecl) {
    render_attributes(builder, &decl.attributes);
    let mut line = String::new();
    let modifiers = render_modifiers(&decl.modifiers);
    if !modifiers.is_empty() {
        line.push_str(&modifiers);
        line.push(' ');
    }
    line.push_str("Delegate ");
    line.push_str(if decl.is_sub { "Sub " } else { "Function " });
    line.push_str(&decl.name.render());
    line.push_str(&render_type_params(&decl.type_params));
    line.push('(');
    line.push_str(&render_params(&decl.params));
    line.push(')');
    if let Some(return_type) = &decl.return_type {
        line.push_str(" As ");
        line.push_str(&render_type(return_type));
    }
    builder.push_line(&line);
}

fn render_method_block(builder: &mut VbSourceBuilder, block: &VbMethodBlock) {
    render_attributes(builder, &block.attributes);
    let keyword = match block.kind {
        VbMethodKind::Sub | VbMethodKind::Constructor => "Sub",
        VbMethodKind::Function => "Function",
    };
    let mut header = String::new();
    let modifiers = render_modifiers(&block.modifiers);
    if !modifiers.is_empty() {
        header.push_str(&modifiers);
        header.push(' ');
    }
    header.push_str(keyword);
    header.push(' ');
    if block.kind == VbMethodKind::Constructor {
        header.push_str("New");
    } else {
        header.push_str(&block.name.render());
        header.push_str(&render_type_params(&block.type_params));
    }
    header.push('(');
    header.push_str(&render_params(&block.params));
    header.push(')');
    if let Some(return_type) = &block.return_type {
        header.push_str(" As ");
        for attribute in &block.return_attributes {
            header.push_str(&format!("<{}> ", render_attribute_body(attribute)));
        }
        header.push_str(&render_type(return_type));
    }
    if let Some(implements) = &block.implements {
        header.push_str(" Implements ");
        header.push_str(implements);
    }
    builder.push_line(&header);

    if let Some(body) = &block.body {
        builder.indent();
        for statement in body {
            render_statement(builder, statement);
        }
        builder.dedent();
        builder.push_line(&format!("End {}", keyword));
    }
}

fn render_operator_block(builder: &mut VbSourceBuilder, block: &VbOperatorBlock) {
    render_attributes(builder, &block.attributes);
    let mut header = String::new();
    let modifiers = render_modifiers(&block.modifiers);
    if !modifiers.is_empty() {
        header.push_str(&modifiers);
        header.push(' ');
    }
    header.push_str("Operator ");
    header.push_str(&block.operator);
    header.push('(');
    header.push_str(&render_params(&block.params));
    header.push(')');
    if let Some(return_type) = &block.return_type {
        header.push_str(" As ");
        header.push_str(&render_type(return_type));
    }
    builder.push_line(&header);
    builder.indent();
    for statement in &block.body {
        render_statement(builder, statement);
    }
    builder.dedent();
    builder.push_line("End Operator");
}

fn render_property_block(builder: &mut VbSourceBuilder, block: &VbPropertyBlock) {
    render_attributes(builder, &block.attributes);
    let mut header = String::new();
    let modifiers = render_modifiers(&block.modifiers);
    if !modifiers.is_empty() {
        header.push_str(&modifiers);
        header.push(' ');
    }
    if block.is_default {
        header.push_str("Default ");
    }
    header.push_str("Property ");
    header.push_str(&block.name.render());
    if !block.params.is_empty() {
        header.push('(');
        header.push_str(&render_params(&block.params));
        header.push(')');
    }
    if let Some(prop_type) = &block.prop_type {
        header.push_str(" As ");
        header.push_str(&render_type(prop_type));
    }
    if let Some(initializer) = &block.initializer {
        header.push_str(" = ");
        header.push_str(&render_expression(initializer));
    }
    if let Some(implements) = &block.implements {
        header.push_str(" Implements ");
        header.push_str(implements);
    }
    builder.push_line(&header);

    if block.accessors.is_empty() {
        return;
    }

    builder.indent();
    for accessor in &block.accessors {
        let mut accessor_header = String::new();
        let accessor_modifiers = render_modifiers(&accessor.modifiers);
        if !accessor_modifiers.is_empty() {
            accessor_header.push_str(&accessor_modifiers);
            accessor_header.push(' ');
        }
        match accessor.kind {
            VbAccessorKind::Get => accessor_header.push_str("Get"),
            VbAccessorKind::Set => {
                accessor_header.push_str("Set(ByVal value");
                if let Some(prop_type) = &block.prop_type {
                    accessor_header.push_str(" As ");
                    accessor_header.push_str(&render_type(prop_type));
                }
                accessor_header.push(')');
            }
        }
        builder.push_line(&accessor_header);
        builder.indent();
        for statement in &accessor.body {
            render_statement(builder, statement);
        }
        builder.dedent();
        match accessor.kind {
            VbAccessorKind::Get => builder.push_line("End Get"),
            VbAccessorKind::Set => builder.push_line("End Set"),
        }
    }
    builder.dedent();
    builder.push_line("End Property");
}

fn render_field(builder: &mut VbSourceBuilder, decl: &VbFieldDecl) {
    render_attributes(builder, &decl.attributes);
    let mut line = String::new();
    let modifiers = render_modifiers(&decl.modifiers);
    if decl.is_const {
        if modifiers.is_empty() {
            line.push_str("Const ");
        } else {
            line.push_str(&modifiers);
            line.push_str(" Const ");
        }
    } else if modifiers.is_empty() {
        line.push_str("Dim ");
    } else {
        line.push_str(&modifiers);
        line.push(' ');
    }
    line.push_str(&render_declarators(&decl.declarators));
    builder.push_line(&line);
}

fn render_event(builder: &mut VbSourceBuilder, decl: &VbEventDecl) {
    render_attributes(builder, &decl.attributes);
    let mut line = String::new();
    let modifiers = render_modifiers(&decl.modifiers);
    if !modifiers.is_empty() {
        line.push_str(&modifiers);
        line.push(' ');
    }
    line.push_str("Event ");
    line.push_str(&decl.name.render());
    line.push_str(" As ");
    line.push_str(&render_type(&decl.event_type));
    builder.push_line(&line);
}

pub fn render_params(params: &[VbParameter]) -> String {
    params
        .iter()
        .map(|param| {
            let mut text = String::new();
            for modifier in &param.modifiers {
                text.push_str(modifier.keyword());
                text.push(' ');
            }
            text.push_str(&param.name.render());
            if let Some(param_type) = &param.param_type {
                text.push_str(" As ");
                text.push_str(&render_type(param_type));
            }
            if let Some(default_value) = &param.default_value {
                text.push_str(" = ");
                text.push_str(&render_expression(default_value));
            }
            text
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_declarators(declarators: &[VbVariableDeclarator]) -> String {
    declarators
        .iter()
        .map(|declarator| {
            let mut text = declarator.name.render();
            if let Some(var_type) = &declarator.var_type {
                text.push_str(" As ");
                text.push_str(&render_type(var_type));
            }
            if let Some(initializer) = &declarator.initializer {
                text.push_str(" = ");
                text.push_str(&render_expression(initializer));
            }
            text
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

pub fn render_statement(builder: &mut VbSourceBuilder, statement: &VbStatement) {
    render_trivia_list(builder, &statement.leading_trivia);

    match &statement.kind {
        VbStatementKind::Comment(text) => {
            builder.push_line(&format!("'{}", text));
            return;
        }
        VbStatementKind::Empty => return,
        VbStatementKind::If {
            condition,
            then_statements,
            else_ifs,
            else_statements,
        } => {
            builder.push_line(&with_trailing(
                format!("If {} Then", render_expression(condition)),
                statement,
            ));
            builder.indent();
            for inner in then_statements {
                render_statement(builder, inner);
            }
            builder.dedent();
            for else_if in else_ifs {
                builder.push_line(&format!(
                    "ElseIf {} Then",
                    render_expression(&else_if.condition)
                ));
                builder.indent();
                for inner in &else_if.statements {
                    render_statement(builder, inner);
                }
                builder.dedent();
            }
            if let Some(else_statements) = else_statements {
                builder.push_line("Else");
                builder.indent();
                for inner in else_statements {
                    render_statement(builder, inner);
                }
                builder.dedent();
            }
            builder.push_line("End If");
            return;
        }
        VbStatementKind::ForNext {
            variable,
            var_type,
            from,
            to,
            step,
            body,
        } => {
            let mut header = format!("For {}", variable.render());
            if let Some(var_type) = var_type {
                header.push_str(&format!(" As {}", render_type(var_type)));
            }
            header.push_str(&format!(
                " = {} To {}",
                render_expression(from),
                render_expression(to)
            ));
            if let Some(step) = step {
                header.push_str(&format!(" Step {}", render_expression(step)));
            }
            builder.push_line(&with_trailing(header, statement));
            builder.indent();
            for inner in body {
                render_statement(builder, inner);
            }
            builder.dedent();
            builder.push_line("Next");
            return;
        }
        VbStatementKind::ForEach {
            variable,
            var_type,
            source,
            body,
        } => {
            let mut header = format!("For Each {}", variable.render());
            if let Some(var_type) = var_type {
                header.push_str(&format!(" As {}", render_type(var_type)));
            }
            header.push_str(&format!(" In {}", render_expression(source)));
            builder.push_line(&with_trailing(header, statement));
            builder.indent();
            for inner in body {
                render_statement(builder, inner);
            }
            builder.dedent();
            builder.push_line("Next");
            return;
        }
        VbStatementKind::While { condition, body } => {
            builder.push_line(&with_trailing(
                format!("While {}", render_expression(condition)),
                statement,
            ));
            builder.indent();
            for inner in body {
                render_statement(builder, inner);
            }
            builder.dedent();
            builder.push_line("End While");
            return;
        }
        VbStatementKind::DoLoop { body, condition } => {
            builder.push_line(&with_trailing("Do".to_string(), statement));
            builder.indent();
            for inner in body {
                render_statement(builder, inner);
            }
            builder.dedent();
            builder.push_line(&format!("Loop While {}", render_expression(condition)));
            return;
        }
        VbStatementKind::SelectCase { expr, cases } => {
            builder.push_line(&with_trailing(
                format!("Select Case {}", render_expression(expr)),
                statement,
            ));
            builder.indent();
            for case in cases {
                let clauses = case
                    .clauses
                    .iter()
                    .map(|clause| match clause {
                        VbCaseClause::Expression(expr) => render_expression(expr),
                        VbCaseClause::Else => "Else".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                builder.push_line(&format!("Case {}", clauses));
                builder.indent();
                for inner in &case.statements {
                    render_statement(builder, inner);
                }
                builder.dedent();
            }
            builder.dedent();
            builder.push_line("End Select");
            return;
        }
        VbStatementKind::Using {
            resources,
            expr,
            body,
        } => {
            let header = if let Some(expr) = expr {
                format!("Using {}", render_expression(expr))
            } else {
                format!("Using {}", render_declarators(resources))
            };
            builder.push_line(&with_trailing(header, statement));
            builder.indent();
            for inner in body {
                render_statement(builder, inner);
            }
            builder.dedent();
            builder.push_line("End Using");
            return;
        }
        VbStatementKind::SyncLock { expr, body } => {
            builder.push_line(&with_trailing(
                format!("SyncLock {}", render_expression(expr)),
                statement,
            ));
            builder.indent();
            for inner in body {
                render_statement(builder, inner);
            }
            builder.dedent();
            builder.push_line("End SyncLock");
            return;
        }
        VbStatementKind::Try {
            body,
            catches,
            finally_statements,
        } => {
            builder.push_line(&with_trailing("Try".to_string(), statement));
            builder.indent();
            for inner in body {
                render_statement(builder, inner);
            }
            builder.dedent();
            for catch in catches {
                let mut header = "Catch".to_string();
                if let Some(name) = &catch.name {
                    header.push(' ');
                    header.push_str(&name.render());
                    if let Some(exception_type) = &catch.exception_type {
                        header.push_str(" As ");
                        header.push_str(&render_type(exception_type));
                    }
                }
                if let Some(filter) = &catch.filter {
                    header.push_str(" When ");
                    header.push_str(&render_expression(filter));
                }
                builder.push_line(&header);
                builder.indent();
                for inner in &catch.statements {
                    render_statement(builder, inner);
                }
                builder.dedent();
            }
            if let Some(finally_statements) = finally_statements {
                builder.push_line("Finally");
                builder.indent();
                for inner in finally_statements {
                    render_statement(builder, inner);
                }
                builder.dedent();
            }
            builder.push_line("End Try");
            return;
        }
        _ => {}
    }

    // Single-line statements.
    let line = match &statement.kind {
        VbStatementKind::LocalDeclaration {
            is_const,
            declarators,
        } => {
            let keyword = if *is_const { "Const" } else { "Dim" };
            format!("{} {}", keyword, render_declarators(declarators))
        }
        VbStatementKind::Assignment { target, op, value } => format!(
            "{} {} {}",
            render_expression(target),
            op.token(),
            render_expression(value)
        ),
        VbStatementKind::Expression(expr) => render_expression(expr),
        VbStatementKind::Exit(kind) => format!("Exit {}", kind.keyword()),
        VbStatementKind::Continue(kind) => format!("Continue {}", kind.keyword()),
        VbStatementKind::Return(value) => match value {
            Some(value) => format!("Return {}", render_expression(value)),
            None => "Return".to_string(),
        },
        VbStatementKind::Throw(value) => match value {
            Some(value) => format!("Throw {}", render_expression(value)),
            None => "Throw".to_string(),
        },
        VbStatementKind::GoTo(label) => format!("GoTo {}", label),
        VbStatementKind::Label(label) => format!("{}:", label),
        // Block statements handled above.
        _ => unreachable!("block statement fell through to single-line rendering"),
    };
    builder.push_lines(&with_trailing(line, statement));
}

fn with_trailing(line: String, statement: &VbStatement) -> String {
    match &statement.trailing_comment {
        Some(comment) => format!("{} '{}", line, comment),
        None => line,
    }
}

// ---------------------------------------------------------------------------
// Expressions and types
// ---------------------------------------------------------------------------

pub fn render_type(vb_type: &VbTypeRef) -> String {
    match vb_type {
        VbTypeRef::Named { name, type_args } => {
            if type_args.is_empty() {
                name.clone()
            } else {
                let args = type_args
                    .iter()
                    .map(render_type)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}(Of {})", name, args)
            }
        }
        VbTypeRef::Array { element, rank } => {
            let commas = ",".repeat(rank.saturating_sub(1));
            format!("{}({})", render_type(element), commas)
        }
        VbTypeRef::Nullable { inner } => format!("{}?", render_type(inner)),
        VbTypeRef::Tuple { elements } => {
            let inner = elements
                .iter()
                .map(render_type)
                .collect::<Vec<_>>()
                .join(", ");
            format!("({})", inner)
        }
    }
}

fn escape_vb_string(value: &str) -> String {
    value.replace('"', "\"\"")
}

pub fn render_expression(expr: &VbExpression) -> String {
    match expr {
        VbExpression::Literal(literal) => match literal {
            VbLiteral::Number(text) => text.clone(),
            VbLiteral::String(value) => format!("\"{}\"", escape_vb_string(value)),
            VbLiteral::Char(c) => {
                if *c == '"' {
                    "\"\"\"\"c".to_string()
                } else {
                    format!("\"{}\"c", c)
                }
            }
            VbLiteral::Boolean(true) => "True".to_string(),
            VbLiteral::Boolean(false) => "False".to_string(),
            VbLiteral::Nothing => "Nothing".to_string(),
        },
        VbExpression::Identifier(identifier) => identifier.render(),
        VbExpression::GenericName { name, type_args } => {
            let args = type_args
                .iter()
                .map(render_type)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}(Of {})", name.render(), args)
        }
        VbExpression::Binary { left, op, right } => format!(
            "{} {} {}",
            render_expression(left),
            op.token(),
            render_expression(right)
        ),
        VbExpression::Unary { op, operand } => match op {
            VbUnaryOp::Not => format!("Not {}", render_expression(operand)),
            _ => format!("{}{}", op.token(), render_expression(operand)),
        },
        VbExpression::MemberAccess {
            object,
            name,
            type_args,
        } => {
            if type_args.is_empty() {
                format!("{}.{}", render_expression(object), name.render())
            } else {
                let args = type_args
                    .iter()
                    .map(render_type)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "{}.{}(Of {})",
                    render_expression(object),
                    name.render(),
                    args
                )
            }
        }
        VbExpression::NullSafeMemberAccess { object, name } => {
            format!("{}?.{}", render_expression(object), name.render())
        }
        VbExpression::Invocation { callee, args } => {
            format!("{}({})", render_expression(callee), render_args(args))
        }
        VbExpression::IfIntrinsic { args } => {
            let rendered = args
                .iter()
                .map(render_expression)
                .collect::<Vec<_>>()
                .join(", ");
            format!("If({})", rendered)
        }
        VbExpression::TypeOfIs {
            expr,
            target,
            negated,
        } => {
            let keyword = if *negated { "IsNot" } else { "Is" };
            format!(
                "TypeOf {} {} {}",
                render_expression(expr),
                keyword,
                render_type(target)
            )
        }
        VbExpression::TryCast { expr, target } => {
            format!("TryCast({}, {})", render_expression(expr), render_type(target))
        }
        VbExpression::CType { expr, target } => {
            format!("CType({}, {})", render_expression(expr), render_type(target))
        }
        VbExpression::GetType { target } => format!("GetType({})", render_type(target)),
        VbExpression::New {
            target,
            args,
            initializer,
        } => {
            let mut text = format!("New {}({})", render_type(target), render_args(args));
            match initializer {
                Some(VbInitializer::Object(fields)) => {
                    text.push_str(" With {");
                    let rendered = fields
                        .iter()
                        .map(|(name, value)| {
                            format!(".{} = {}", name.render(), render_expression(value))
                        })
                        .collect::<Vec<_>>()
                        .join(", ");
                    text.push_str(&rendered);
                    text.push('}');
                }
                Some(VbInitializer::Collection(elements)) => {
                    text.push_str(" From {");
                    let rendered = elements
                        .iter()
                        .map(render_expression)
                        .collect::<Vec<_>>()
                        .join(", ");
                    text.push_str(&rendered);
                    text.push('}');
                }
                None => {}
            }
            text
        }
        VbExpression::NewAnonymous { members } => {
            let rendered = members
                .iter()
                .map(|member| match &member.name {
                    Some(name) => {
                        format!(".{} = {}", name.render(), render_expression(&member.value))
                    }
                    None => render_expression(&member.value),
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("New With {{{}}}", rendered)
        }
        VbExpression::ArrayCreation {
            element,
            bounds,
            initializer,
        } => {
            let bounds_text = bounds
                .iter()
                .map(|bound| match bound {
                    Some(bound) => render_expression(bound),
                    None => String::new(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            let elements = match initializer {
                Some(VbInitializer::Collection(elements)) => elements
                    .iter()
                    .map(render_expression)
                    .collect::<Vec<_>>()
                    .join(", "),
                _ => String::new(),
            };
            format!(
                "New {}({}) {{{}}}",
                render_type(element),
                bounds_text,
                elements
            )
        }
        VbExpression::CollectionLiteral(elements) => {
            let rendered = elements
                .iter()
                .map(render_expression)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{}}}", rendered)
        }
        VbExpression::Lambda {
            kind,
            params,
            body,
            is_async,
        } => {
            let keyword = match kind {
                VbLambdaKind::Sub => "Sub",
                VbLambdaKind::Function => "Function",
            };
            let prefix = if *is_async {
                format!("Async {}", keyword)
            } else {
                keyword.to_string()
            };
            match body {
                VbLambdaBody::Expression(expr) => {
                    format!("{}({}) {}", prefix, render_params(params), render_expression(expr))
                }
                VbLambdaBody::Block(statements) => {
                    let mut builder = VbSourceBuilder::new("    ".to_string());
                    builder.push_line(&format!("{}({})", prefix, render_params(params)));
                    builder.indent();
                    for statement in statements {
                        render_statement(&mut builder, statement);
                    }
                    builder.dedent();
                    builder.push_indent();
                    builder.push(&format!("End {}", keyword));
                    builder.build()
                }
            }
        }
        VbExpression::Query(query) => render_query(query),
        VbExpression::Interpolated { parts } => {
            let mut text = String::from("$\"");
            for part in parts {
                match part {
                    VbInterpolatedPart::Text(value) => {
                        text.push_str(&escape_vb_string(value).replace('{', "{{").replace('}', "}}"))
                    }
                    VbInterpolatedPart::Expression { expr, format } => {
                        text.push('{');
                        text.push_str(&render_expression(expr));
                        if let Some(format) = format {
                            text.push_str(format);
                        }
                        text.push('}');
                    }
                }
            }
            text.push('"');
            text
        }
        VbExpression::Paren(inner) => format!("({})", render_expression(inner)),
        VbExpression::Tuple { elements } => {
            let rendered = elements
                .iter()
                .map(render_expression)
                .collect::<Vec<_>>()
                .join(", ");
            format!("({})", rendered)
        }
        VbExpression::NameOf(inner) => format!("NameOf({})", render_expression(inner)),
        VbExpression::Await(inner) => format!("Await {}", render_expression(inner)),
        VbExpression::Me => "Me".to_string(),
        VbExpression::MyBase => "MyBase".to_string(),
    }
}

fn render_args(args: &[VbArgument]) -> String {
    args.iter()
        .map(|arg| match &arg.name {
            Some(name) => format!("{}:={}", name.render(), render_expression(&arg.value)),
            None => render_expression(&arg.value),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_query(query: &VbQueryExpression) -> String {
    let mut pieces = Vec::new();
    for clause in &query.clauses {
        let text = match clause {
            VbQueryClause::From {
                variable,
                var_type,
                source,
            } => {
                let mut text = format!("From {}", variable.render());
                if let Some(var_type) = var_type {
                    text.push_str(&format!(" As {}", render_type(var_type)));
                }
                text.push_str(&format!(" In {}", render_expression(source)));
                text
            }
            VbQueryClause::Where(condition) => {
                format!("Where {}", render_expression(condition))
            }
            VbQueryClause::Let { variable, value } => {
                format!("Let {} = {}", variable.render(), render_expression(value))
            }
            VbQueryClause::OrderBy(orderings) => {
                let rendered = orderings
                    .iter()
                    .map(|ordering| {
                        if ordering.descending {
                            format!("{} Descending", render_expression(&ordering.expr))
                        } else {
                            format!("{} Ascending", render_expression(&ordering.expr))
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Order By {}", rendered)
            }
            VbQueryClause::Join {
                variable,
                var_type,
                source,
                left_key,
                right_key,
            } => {
                let mut text = format!("Join {}", variable.render());
                if let Some(var_type) = var_type {
                    text.push_str(&format!(" As {}", render_type(var_type)));
                }
                text.push_str(&format!(
                    " In {} On {} Equals {}",
                    render_expression(source),
                    render_expression(left_key),
                    render_expression(right_key)
                ));
                text
            }
            VbQueryClause::GroupJoin {
                variable,
                source,
                left_key,
                right_key,
                into,
            } => format!(
                "Group Join {} In {} On {} Equals {} Into {} = Group",
                variable.render(),
                render_expression(source),
                render_expression(left_key),
                render_expression(right_key),
                into.render()
            ),
            VbQueryClause::Select(expr) => format!("Select {}", render_expression(expr)),
            VbQueryClause::GroupBy {
                element,
                key,
                into,
            } => match into {
                Some(into) => format!(
                    "Group {} By {} Into {} = Group",
                    render_expression(element),
                    render_expression(key),
                    into.render()
                ),
                None => format!(
                    "Group {} By {} Into Group",
                    render_expression(element),
                    render_expression(key)
                ),
            },
        };
        pieces.push(text);
    }
    pieces.join(" ")
}
