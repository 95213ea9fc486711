// csvb_convert/trivia - Comment and directive conversion
use crate::error::ConvertError;
use crate::fallback;
use csvb_ast::{DirectiveKind, DirectiveTrivia, Trivia};
use csvb_vb::{VbDirective, VbTrivia};

/// Convert a token's leading or trailing trivia list.
///
/// Whitespace and line endings are dropped; the renderer re-applies its own
/// formatting. Disabled regions are preserved opaquely.
pub fn convert_trivia_list(trivia: &[Trivia]) -> Result<Vec<VbTrivia>, ConvertError> {
    let mut converted = Vec::new();
    for piece in trivia {
        match piece {
            Trivia::Whitespace(_) | Trivia::EndOfLine(_) => {}
            Trivia::LineComment(body) => converted.push(VbTrivia::Comment(body.clone())),
            Trivia::BlockComment(body) => {
                for line in body.lines() {
                    converted.push(VbTrivia::Comment(line.to_string()));
                }
            }
            Trivia::DocComment(body) => converted.push(VbTrivia::DocComment(body.clone())),
            Trivia::Directive(directive) => converted.push(convert_directive(directive)?),
            Trivia::DisabledText(text) => {
                converted.push(VbTrivia::DisabledText(text.clone()))
            }
        }
    }
    Ok(converted)
}

/// Only the comment pieces of a trivia list, for trailing-comment slots.
pub fn first_comment_text(trivia: &[Trivia]) -> Option<String> {
    trivia.iter().find_map(|piece| match piece {
        Trivia::LineComment(body) | Trivia::BlockComment(body) => Some(body.clone()),
        _ => None,
    })
}

fn convert_directive(directive: &DirectiveTrivia) -> Result<VbTrivia, ConvertError> {
    let converted = match &directive.kind {
        DirectiveKind::Region { name } => VbDirective::Region(name.clone()),
        DirectiveKind::EndRegion => VbDirective::EndRegion,
        DirectiveKind::If { condition } => VbDirective::If(condition.clone()),
        DirectiveKind::Elif { condition } => VbDirective::ElseIf(condition.clone()),
        DirectiveKind::Else => VbDirective::Else,
        DirectiveKind::EndIf => VbDirective::EndIf,
        // No VB counterpart; directives cannot carry arbitrary comments in
        // the target grammar, so these become plain comments.
        DirectiveKind::Define { .. }
        | DirectiveKind::Undef { .. }
        | DirectiveKind::Pragma { .. }
        | DirectiveKind::Line { .. }
        | DirectiveKind::Warning { .. }
        | DirectiveKind::Error { .. }
        | DirectiveKind::Nullable { .. } => {
            return Ok(fallback::bad_directive(&directive.raw))
        }
        DirectiveKind::Unknown => {
            return Err(ConvertError::not_implemented(
                format!("directive `{}`", directive.raw),
                Some(directive.span),
            ))
        }
    };
    Ok(VbTrivia::Directive(converted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvb_ast::Span;

    fn directive(kind: DirectiveKind, raw: &str) -> Trivia {
        Trivia::Directive(DirectiveTrivia {
            kind,
            raw: raw.to_string(),
            span: Span::dummy(),
        })
    }

    #[test]
    fn whitespace_and_newlines_are_dropped() {
        let converted = convert_trivia_list(&[
            Trivia::Whitespace("  ".to_string()),
            Trivia::EndOfLine("\n".to_string()),
        ])
        .unwrap();
        assert!(converted.is_empty());
    }

    #[test]
    fn line_comment_marker_is_swapped() {
        let converted =
            convert_trivia_list(&[Trivia::LineComment(" counts words".to_string())]).unwrap();
        assert_eq!(
            converted,
            vec![VbTrivia::Comment(" counts words".to_string())]
        );
    }

    #[test]
    fn block_comment_splits_per_line() {
        let converted =
            convert_trivia_list(&[Trivia::BlockComment(" first\n second".to_string())])
                .unwrap();
        assert_eq!(converted.len(), 2);
    }

    #[test]
    fn doc_comment_becomes_triple_quote() {
        let converted =
            convert_trivia_list(&[Trivia::DocComment(" <summary>Adds.</summary>".to_string())])
                .unwrap();
        assert_eq!(
            converted,
            vec![VbTrivia::DocComment(" <summary>Adds.</summary>".to_string())]
        );
    }

    #[test]
    fn region_directives_convert_structurally() {
        let converted = convert_trivia_list(&[
            directive(
                DirectiveKind::Region {
                    name: "Helpers".to_string(),
                },
                "#region Helpers",
            ),
            directive(DirectiveKind::EndRegion, "#endregion"),
        ])
        .unwrap();
        assert_eq!(
            converted,
            vec![
                VbTrivia::Directive(VbDirective::Region("Helpers".to_string())),
                VbTrivia::Directive(VbDirective::EndRegion),
            ]
        );
    }

    #[test]
    fn pragma_becomes_bad_directive_comment() {
        let converted = convert_trivia_list(&[directive(
            DirectiveKind::Pragma {
                text: "warning disable 414".to_string(),
            },
            "#pragma warning disable 414",
        )])
        .unwrap();
        assert!(matches!(
            &converted[0],
            VbTrivia::Comment(text) if text.contains("could not be converted to a")
        ));
    }

    #[test]
    fn unknown_directive_is_a_hard_failure() {
        let result =
            convert_trivia_list(&[directive(DirectiveKind::Unknown, "#bogus directive")]);
        assert!(matches!(result, Err(ConvertError::NotImplemented { .. })));
    }

    #[test]
    fn disabled_text_is_preserved() {
        let converted =
            convert_trivia_list(&[Trivia::DisabledText("int old;\n".to_string())]).unwrap();
        assert_eq!(
            converted,
            vec![VbTrivia::DisabledText("int old;\n".to_string())]
        );
    }
}
