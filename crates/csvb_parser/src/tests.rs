use crate::{parse_compilation_unit, parse_expression, parse_statement};
use csvb_ast::*;

#[test]
fn parses_binary_precedence() {
    let expr = parse_expression("1 + 2 * 3").unwrap();
    match expr {
        Expression::Binary {
            op: BinaryOp::Add,
            right,
            ..
        } => {
            assert!(matches!(
                *right,
                Expression::Binary {
                    op: BinaryOp::Multiply,
                    ..
                }
            ));
        }
        other => panic!("expected additive root, got {:?}", other),
    }
}

#[test]
fn parses_null_comparison() {
    let expr = parse_expression("x == null").unwrap();
    match expr {
        Expression::Binary {
            op: BinaryOp::Equal,
            right,
            ..
        } => assert!(right.is_null_literal()),
        other => panic!("expected equality, got {:?}", other),
    }
}

#[test]
fn parses_ternary_and_coalesce() {
    assert!(matches!(
        parse_expression("a ? b : c").unwrap(),
        Expression::Conditional { .. }
    ));
    assert!(matches!(
        parse_expression("a ?? b").unwrap(),
        Expression::Binary {
            op: BinaryOp::Coalesce,
            ..
        }
    ));
}

#[test]
fn parses_cast_versus_parenthesized() {
    assert!(matches!(
        parse_expression("(int)x").unwrap(),
        Expression::Cast { .. }
    ));
    assert!(matches!(
        parse_expression("(x) + y").unwrap(),
        Expression::Binary { op: BinaryOp::Add, .. }
    ));
    assert!(matches!(
        parse_expression("(x)(y)").unwrap(),
        Expression::Invocation { .. }
    ));
}

#[test]
fn parses_shift_inside_generics() {
    let expr = parse_expression("new List<List<int>>()").unwrap();
    assert!(matches!(expr, Expression::ObjectCreation { .. }));
    assert!(matches!(
        parse_expression("a >> 2").unwrap(),
        Expression::Binary {
            op: BinaryOp::ShiftRight,
            ..
        }
    ));
}

#[test]
fn parses_lambdas() {
    assert!(matches!(
        parse_expression("x => x + 1").unwrap(),
        Expression::Lambda { .. }
    ));
    let typed = parse_expression("(int a, int b) => a * b").unwrap();
    match typed {
        Expression::Lambda { params, .. } => assert_eq!(params.len(), 2),
        other => panic!("expected lambda, got {:?}", other),
    }
}

#[test]
fn parses_query_expression() {
    let expr = parse_expression(
        "from c in customers where c.Age > 21 orderby c.Name descending select c.Name",
    )
    .unwrap();
    let Expression::Query(query) = expr else {
        panic!("expected query");
    };
    assert_eq!(query.from.name.text, "c");
    assert_eq!(query.body.clauses.len(), 2);
    assert!(matches!(
        query.body.finish,
        SelectOrGroup::Select { .. }
    ));
}

#[test]
fn parses_group_by_with_continuation() {
    let expr =
        parse_expression("from x in xs group x by x.Key into g select g").unwrap();
    let Expression::Query(query) = expr else {
        panic!("expected query");
    };
    assert!(matches!(query.body.finish, SelectOrGroup::GroupBy { .. }));
    assert!(query.body.continuation.is_some());
}

#[test]
fn parses_interpolated_string() {
    let expr = parse_expression("$\"x = {x + 1}!\"").unwrap();
    let Expression::Interpolated { parts, .. } = expr else {
        panic!("expected interpolated string");
    };
    assert_eq!(parts.len(), 3);
    assert!(matches!(&parts[0], InterpolatedPart::Text(t) if t == "x = "));
    assert!(matches!(&parts[1], InterpolatedPart::Expression { .. }));
    assert!(matches!(&parts[2], InterpolatedPart::Text(t) if t == "!"));
}

#[test]
fn parses_object_and_collection_initializers() {
    let object = parse_expression("new Point { X = 1, Y = 2 }").unwrap();
    let Expression::ObjectCreation {
        initializer: Some(init),
        ..
    } = object
    else {
        panic!("expected object creation with initializer");
    };
    assert_eq!(init.kind, InitializerKind::Object);

    let collection = parse_expression("new List<int> { 1, 2, 3 }").unwrap();
    let Expression::ObjectCreation {
        initializer: Some(init),
        ..
    } = collection
    else {
        panic!("expected collection creation");
    };
    assert_eq!(init.kind, InitializerKind::Collection);
}

#[test]
fn parses_anonymous_object() {
    let expr = parse_expression("new { Name = n, c.Age }").unwrap();
    let Expression::AnonymousObject { members, .. } = expr else {
        panic!("expected anonymous object");
    };
    assert_eq!(members.len(), 2);
    assert!(members[0].name.is_some());
    assert!(members[1].name.is_none());
}

#[test]
fn rejects_trailing_input_for_expression() {
    assert!(parse_expression("x + 1; int y;").is_err());
}

#[test]
fn parses_simple_for_statement() {
    let statement = parse_statement("for (int i = 0; i < 10; i++) { sum += i; }").unwrap();
    let Statement::For(for_statement) = statement else {
        panic!("expected for");
    };
    let declaration = for_statement.declaration.expect("declaration");
    assert_eq!(declaration.declarators.len(), 1);
    assert_eq!(declaration.declarators[0].name.text, "i");
    assert!(for_statement.condition.is_some());
    assert_eq!(for_statement.incrementors.len(), 1);
}

#[test]
fn parses_switch_with_default() {
    let statement = parse_statement(
        "switch (x) { case 1: a(); break; case 2: case 3: b(); break; default: c(); break; }",
    )
    .unwrap();
    let Statement::Switch(switch_statement) = statement else {
        panic!("expected switch");
    };
    assert_eq!(switch_statement.sections.len(), 3);
    assert_eq!(switch_statement.sections[1].labels.len(), 2);
    assert!(matches!(
        switch_statement.sections[2].labels[0],
        SwitchLabel::Default
    ));
}

#[test]
fn parses_try_catch_shapes() {
    let statement = parse_statement(
        "try { a(); } catch (IOException e) { b(); } catch (Exception) { } catch { } finally { c(); }",
    )
    .unwrap();
    let Statement::Try(try_statement) = statement else {
        panic!("expected try");
    };
    assert_eq!(try_statement.catches.len(), 3);
    assert!(try_statement.catches[0].name.is_some());
    assert!(try_statement.catches[1].name.is_none());
    assert!(try_statement.catches[1].exception_type.is_some());
    assert!(try_statement.catches[2].exception_type.is_none());
    assert!(try_statement.finally_block.is_some());
}

#[test]
fn parses_using_variants() {
    let with_declaration =
        parse_statement("using (var reader = Open()) { reader.Read(); }").unwrap();
    let Statement::Using(using) = with_declaration else {
        panic!("expected using");
    };
    assert!(using.declaration.is_some());
    assert!(using.expr.is_none());

    let with_expression = parse_statement("using (stream) { }").unwrap();
    let Statement::Using(using) = with_expression else {
        panic!("expected using");
    };
    assert!(using.declaration.is_none());
    assert!(using.expr.is_some());
}

#[test]
fn parses_goto_kinds() {
    assert!(matches!(
        parse_statement("goto done;").unwrap(),
        Statement::Goto(GotoStatement {
            kind: GotoKind::Label(_),
            ..
        })
    ));
    assert!(matches!(
        parse_statement("goto case 2;").unwrap(),
        Statement::Goto(GotoStatement {
            kind: GotoKind::Case(_),
            ..
        })
    ));
    assert!(matches!(
        parse_statement("goto default;").unwrap(),
        Statement::Goto(GotoStatement {
            kind: GotoKind::Default,
            ..
        })
    ));
}

#[test]
fn parses_yield_statements() {
    assert!(matches!(
        parse_statement("yield return x;").unwrap(),
        Statement::Yield(YieldStatement { value: Some(_), .. })
    ));
    assert!(matches!(
        parse_statement("yield break;").unwrap(),
        Statement::Yield(YieldStatement { value: None, .. })
    ));
}

#[test]
fn parses_compilation_unit_with_namespace() {
    let unit = parse_compilation_unit(
        r#"
using System;
using System.Collections.Generic;

namespace Demo.App
{
    public class Widget
    {
        private int count;

        public Widget(int count) : base()
        {
            this.count = count;
        }

        public int Count { get; set; }

        public static int Add(int a, int b)
        {
            return a + b;
        }
    }
}
"#,
    )
    .unwrap();
    assert_eq!(unit.usings.len(), 2);
    assert_eq!(unit.members.len(), 1);
    let MemberDecl::Namespace(namespace) = &unit.members[0] else {
        panic!("expected namespace");
    };
    assert_eq!(namespace.name.len(), 2);
    let MemberDecl::Type(class) = &namespace.members[0] else {
        panic!("expected class");
    };
    assert_eq!(class.kind, TypeKind::Class);
    assert_eq!(class.members.len(), 4);
    assert!(matches!(class.members[1], MemberDecl::Constructor(_)));
    assert!(matches!(class.members[2], MemberDecl::Property(_)));
}

#[test]
fn parses_extension_method_and_operator() {
    let unit = parse_compilation_unit(
        r#"
public static class Extensions
{
    public static int WordCount(this string text)
    {
        return text.Length;
    }

    public static Money operator +(Money a, Money b)
    {
        return a;
    }

    public static implicit operator Money(int cents)
    {
        return null;
    }
}
"#,
    )
    .unwrap();
    let MemberDecl::Type(class) = &unit.members[0] else {
        panic!("expected class");
    };
    let MemberDecl::Method(method) = &class.members[0] else {
        panic!("expected method");
    };
    assert!(method.is_extension());
    assert!(matches!(class.members[1], MemberDecl::Operator(_)));
    assert!(matches!(
        class.members[2],
        MemberDecl::ConversionOperator(ConversionOperatorDecl { implicit: true, .. })
    ));
}

#[test]
fn parses_enum_and_delegate_and_event() {
    let unit = parse_compilation_unit(
        r#"
public enum Color { Red, Green = 5, Blue }
public delegate int Combine(int a, int b);
public class Button
{
    public event Combine Clicked;
}
"#,
    )
    .unwrap();
    assert!(matches!(unit.members[0], MemberDecl::Enum(_)));
    assert!(matches!(unit.members[1], MemberDecl::Delegate(_)));
    let MemberDecl::Type(class) = &unit.members[2] else {
        panic!("expected class");
    };
    assert!(matches!(class.members[0], MemberDecl::Event(_)));
}

#[test]
fn comment_trivia_reaches_statements() {
    let statement = parse_statement("// add one\nx += 1;").unwrap();
    assert!(statement
        .leading_trivia()
        .iter()
        .any(|t| matches!(t, Trivia::LineComment(text) if text == " add one")));
}

#[test]
fn explicit_interface_implementation() {
    let unit = parse_compilation_unit(
        "class C : IDisposable { void IDisposable.Dispose() { } }",
    )
    .unwrap();
    let MemberDecl::Type(class) = &unit.members[0] else {
        panic!("expected class");
    };
    let MemberDecl::Method(method) = &class.members[0] else {
        panic!("expected method");
    };
    assert!(method.explicit_interface.is_some());
    assert_eq!(method.name.text, "Dispose");
}
