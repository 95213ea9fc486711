use crate::*;

fn render_stmt(statement: &VbStatement) -> String {
    let mut builder = VbSourceBuilder::new("    ".to_string());
    render_statement(&mut builder, statement);
    builder.build()
}

#[test]
fn reserved_word_check_is_case_insensitive() {
    assert!(is_reserved_word("Class"));
    assert!(is_reserved_word("class"));
    assert!(is_reserved_word("INTEGER"));
    assert!(!is_reserved_word("Widget"));
}

#[test]
fn identifier_escaping_applies_brackets() {
    assert_eq!(VbIdentifier::new("Class").render(), "[Class]");
    assert_eq!(VbIdentifier::new("count").render(), "count");
    assert_eq!(VbIdentifier::unescaped("Class").render(), "Class");
}

#[test]
fn empty_token_renders_to_nothing() {
    let token = VbToken::empty();
    assert!(token.is_empty());
    assert_eq!(token.render_text(), "");
}

#[test]
fn string_literal_doubles_quotes() {
    let expr = VbExpression::string_literal("say \"hi\"");
    assert_eq!(render_expression(&expr), "\"say \"\"hi\"\"\"");
}

#[test]
fn char_literal_uses_c_suffix() {
    assert_eq!(
        render_expression(&VbExpression::Literal(VbLiteral::Char('a'))),
        "\"a\"c"
    );
    assert_eq!(
        render_expression(&VbExpression::Literal(VbLiteral::Char('"'))),
        "\"\"\"\"c"
    );
}

#[test]
fn binary_operator_tokens() {
    let expr = VbExpression::Binary {
        left: Box::new(VbExpression::identifier("x")),
        op: VbBinaryOp::IsNot,
        right: Box::new(VbExpression::Literal(VbLiteral::Nothing)),
    };
    assert_eq!(render_expression(&expr), "x IsNot Nothing");
}

#[test]
fn if_intrinsic_renders_as_call() {
    let expr = VbExpression::IfIntrinsic {
        args: vec![
            VbExpression::identifier("cond"),
            VbExpression::Literal(VbLiteral::Number("1".to_string())),
            VbExpression::Literal(VbLiteral::Number("2".to_string())),
        ],
    };
    assert_eq!(render_expression(&expr), "If(cond, 1, 2)");
}

#[test]
fn generic_type_renders_with_of() {
    let list = VbTypeRef::Named {
        name: "List".to_string(),
        type_args: vec![VbTypeRef::named("Integer")],
    };
    assert_eq!(render_type(&list), "List(Of Integer)");
    assert_eq!(
        render_type(&VbTypeRef::Array {
            element: Box::new(list),
            rank: 1,
        }),
        "List(Of Integer)()"
    );
    assert_eq!(
        render_type(&VbTypeRef::Array {
            element: Box::new(VbTypeRef::named("Integer")),
            rank: 2,
        }),
        "Integer(,)"
    );
}

#[test]
fn for_next_statement_renders_header_and_next() {
    let statement = VbStatement::new(VbStatementKind::ForNext {
        variable: VbIdentifier::new("i"),
        var_type: None,
        from: VbExpression::Literal(VbLiteral::Number("0".to_string())),
        to: VbExpression::Literal(VbLiteral::Number("9".to_string())),
        step: None,
        body: vec![VbStatement::new(VbStatementKind::Assignment {
            target: VbExpression::identifier("sum"),
            op: VbAssignOp::AddAssign,
            value: VbExpression::identifier("i"),
        })],
    });
    let rendered = render_stmt(&statement);
    assert!(rendered.contains("For i = 0 To 9\n"));
    assert!(rendered.contains("    sum += i\n"));
    assert!(rendered.trim_end().ends_with("Next"));
}

#[test]
fn select_case_renders_case_else() {
    let statement = VbStatement::new(VbStatementKind::SelectCase {
        expr: VbExpression::identifier("x"),
        cases: vec![
            VbCaseBlock {
                clauses: vec![VbCaseClause::Expression(VbExpression::Literal(
                    VbLiteral::Number("1".to_string()),
                ))],
                statements: vec![],
            },
            VbCaseBlock {
                clauses: vec![VbCaseClause::Else],
                statements: vec![],
            },
        ],
    });
    let rendered = render_stmt(&statement);
    assert!(rendered.contains("Select Case x"));
    assert!(rendered.contains("Case 1"));
    assert!(rendered.contains("Case Else"));
    assert!(rendered.contains("End Select"));
}

#[test]
fn try_catch_header_shapes() {
    let statement = VbStatement::new(VbStatementKind::Try {
        body: vec![],
        catches: vec![
            VbCatchBlock {
                name: None,
                exception_type: None,
                filter: None,
                statements: vec![],
            },
            VbCatchBlock {
                name: Some(VbIdentifier::new("ex")),
                exception_type: Some(VbTypeRef::named("Exception")),
                filter: None,
                statements: vec![],
            },
        ],
        finally_statements: Some(vec![]),
    });
    let rendered = render_stmt(&statement);
    assert!(rendered.contains("Try\n"));
    assert!(rendered.contains("Catch\n"));
    assert!(rendered.contains("Catch ex As Exception\n"));
    assert!(rendered.contains("Finally\n"));
    assert!(rendered.contains("End Try\n"));
}

#[test]
fn statement_leading_comment_renders_before() {
    let statement = VbStatement::new(VbStatementKind::Return(None))
        .with_leading_trivia(vec![VbTrivia::Comment(" bail".to_string())]);
    assert_eq!(render_stmt(&statement), "' bail\nReturn\n");
}

#[test]
fn module_block_renders_end_module() {
    let member = VbMember::new(VbMemberKind::Type(VbTypeBlock {
        kind: VbTypeBlockKind::Module,
        attributes: vec![],
        modifiers: vec![VbModifier::Public],
        name: VbIdentifier::new("Util"),
        type_params: vec![],
        inherits: vec![],
        implements: vec![],
        members: vec![],
    }));
    let mut builder = VbSourceBuilder::new("    ".to_string());
    render_member(&mut builder, &member);
    let rendered = builder.build();
    assert!(rendered.starts_with("Public Module Util\n"));
    assert!(rendered.trim_end().ends_with("End Module"));
}

#[test]
fn compilation_unit_renders_imports_first() {
    let mut unit = VbCompilationUnit::new();
    unit.imports.push(VbImport {
        name: "System".to_string(),
        leading_trivia: vec![],
    });
    unit.members.push(VbMember::new(VbMemberKind::Comment(
        " placeholder".to_string(),
    )));
    let source = unit.to_source(&VbRenderConfig::default());
    assert!(source.starts_with("Imports System\n"));
    assert!(source.contains("' placeholder"));
}

#[test]
fn region_directive_renders() {
    let mut builder = VbSourceBuilder::new("    ".to_string());
    render_trivia_list(
        &mut builder,
        &[
            VbTrivia::Directive(VbDirective::Region("Helpers".to_string())),
            VbTrivia::Directive(VbDirective::EndRegion),
        ],
    );
    assert_eq!(builder.build(), "#Region \"Helpers\"\n#End Region\n");
}
