// csvb_convert/fallback - Placeholder nodes for unconvertible constructs
//
// Three placeholder shapes, each embedding the original source text with
// line breaks flattened to spaces and the name of the target type that
// could not be produced. These are the soft tier of the error model; the
// hard tier is ConvertError::NotImplemented.
use csvb_vb::{VbExpression, VbStatement, VbTrivia};

/// Collapse a source snippet onto one line.
pub fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn placeholder_message(source_text: &str, target: &str) -> String {
    format!("{} could not be converted to a {}", flatten(source_text), target)
}

/// A diagnostic string-literal expression.
pub fn unconverted_expression(source_text: &str, target: &str) -> VbExpression {
    VbExpression::string_literal(placeholder_message(source_text, target))
}

/// A comment statement carrying the untranslated text.
pub fn unconverted_statement(source_text: &str, target: &str) -> VbStatement {
    VbStatement::comment(format!(" {}", placeholder_message(source_text, target)))
}

/// A plain comment standing in for a directive the target grammar cannot
/// express.
pub fn bad_directive(raw: &str) -> VbTrivia {
    VbTrivia::Comment(format!(" {}", placeholder_message(raw, "VbDirective")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvb_vb::{render_expression, VbStatementKind};

    #[test]
    fn flatten_collapses_line_breaks() {
        assert_eq!(flatten("stackalloc\n  int[10]"), "stackalloc int[10]");
    }

    #[test]
    fn expression_placeholder_contains_marker_text() {
        let expr = unconverted_expression("stackalloc int[10]", "VbExpression");
        let rendered = render_expression(&expr);
        assert!(rendered.contains("could not be converted to a"));
        assert!(rendered.contains("stackalloc int[10]"));
        assert!(rendered.contains("VbExpression"));
    }

    #[test]
    fn statement_placeholder_is_a_comment() {
        let statement = unconverted_statement("goto x;", "VbStatement");
        assert!(matches!(
            statement.kind,
            VbStatementKind::Comment(ref text) if text.contains("could not be converted to a")
        ));
    }
}
