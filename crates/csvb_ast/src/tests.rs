use crate::*;

fn dummy_span() -> Span {
    Span::dummy()
}

fn ident(text: &str) -> Identifier {
    Identifier::new(text, dummy_span())
}

#[test]
fn span_merge_takes_outer_bounds() {
    let a = Span::new(1, 1, 1, 5, 0, 4);
    let b = Span::new(2, 1, 3, 2, 10, 22);
    let merged = a.merge(b);
    assert_eq!(merged.start_offset, 0);
    assert_eq!(merged.end_offset, 22);
    assert_eq!(merged.start_line, 1);
    assert_eq!(merged.end_line, 3);
}

#[test]
fn span_multi_line_detection() {
    assert!(!Span::new(4, 1, 4, 9, 30, 38).is_multi_line());
    assert!(Span::new(4, 1, 6, 2, 30, 58).is_multi_line());
}

#[test]
fn span_text_slices_source() {
    let source = "int x = 42;";
    let span = Span::new(1, 9, 1, 11, 8, 10);
    assert_eq!(span.text(source), "42");
}

#[test]
fn predefined_type_keyword_round_trip() {
    for ty in [
        PredefinedType::Bool,
        PredefinedType::Int,
        PredefinedType::String,
        PredefinedType::Void,
        PredefinedType::ULong,
    ] {
        assert_eq!(PredefinedType::from_keyword(ty.keyword()), Some(ty));
    }
    assert_eq!(PredefinedType::from_keyword("dynamic"), None);
}

#[test]
fn null_literal_detection_unwraps_parens() {
    let null = Expression::Literal(Literal::Null, dummy_span());
    let wrapped = Expression::Paren {
        expr: Box::new(null.clone()),
        span: dummy_span(),
    };
    assert!(null.is_null_literal());
    assert!(wrapped.is_null_literal());
    assert!(!Expression::Identifier(ident("x")).is_null_literal());
}

#[test]
fn extension_method_detection() {
    let mut method = MethodDecl {
        attribute_lists: vec![],
        modifiers: vec![Modifier::Public, Modifier::Static],
        return_type: TypeRef::Predefined(PredefinedType::Int, dummy_span()),
        explicit_interface: None,
        name: ident("CountWords"),
        type_params: vec![],
        constraints: vec![],
        params: vec![Parameter {
            attribute_lists: vec![],
            modifiers: vec![ParamModifier::This],
            param_type: Some(TypeRef::Predefined(PredefinedType::String, dummy_span())),
            name: ident("text"),
            default_value: None,
            span: dummy_span(),
        }],
        body: None,
        expression_body: None,
        leading_trivia: vec![],
        span: dummy_span(),
    };
    assert!(method.is_extension());

    method.params[0].modifiers.clear();
    assert!(!method.is_extension());
}

#[test]
fn type_ref_simple_name() {
    let named = TypeRef::Named {
        segments: vec![
            TypeSegment {
                name: ident("System"),
                type_args: vec![],
            },
            TypeSegment {
                name: ident("IDisposable"),
                type_args: vec![],
            },
        ],
        span: dummy_span(),
    };
    assert_eq!(named.simple_name(), Some("IDisposable"));
    assert_eq!(
        TypeRef::Predefined(PredefinedType::Int, dummy_span()).simple_name(),
        None
    );
}

#[test]
fn statement_trivia_accessors() {
    let stmt = Statement::Break(BreakStatement {
        leading_trivia: vec![Trivia::LineComment(" bail out".to_string())],
        trailing_trivia: vec![],
        span: dummy_span(),
    });
    assert_eq!(stmt.leading_trivia().len(), 1);
    assert!(stmt.trailing_trivia().is_empty());
}

#[test]
fn expression_serde_round_trip() {
    let expr = Expression::Binary {
        left: Box::new(Expression::Identifier(ident("x"))),
        op: BinaryOp::Equal,
        right: Box::new(Expression::Literal(Literal::Null, dummy_span())),
        span: dummy_span(),
    };
    let json = serde_json::to_string(&expr).unwrap();
    let back: Expression = serde_json::from_str(&json).unwrap();
    assert_eq!(expr, back);
}
