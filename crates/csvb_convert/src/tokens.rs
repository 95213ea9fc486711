// csvb_convert/tokens - Single-token conversion
//
// Identifier escaping, the keyword table, and literal re-formatting. The
// tree-level converters call into these helpers; `convert_token` is the
// trivia-preserving per-token contract over the same tables.
use crate::context::ConvertOptions;
use crate::error::ConvertError;
use csvb_ast::{PredefinedType, Token, TokenKind, TokenValue};
use csvb_vb::{VbBinaryOp, VbExpression, VbLiteral, VbToken};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Keywords with a single context-free VB spelling. Context-sensitive
/// keywords (`abstract`, `static`, `sealed`, ...) are resolved by the
/// declaration converter instead.
static KEYWORD_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("bool", "Boolean"),
        ("byte", "Byte"),
        ("sbyte", "SByte"),
        ("short", "Short"),
        ("ushort", "UShort"),
        ("int", "Integer"),
        ("uint", "UInteger"),
        ("long", "Long"),
        ("ulong", "ULong"),
        ("float", "Single"),
        ("double", "Double"),
        ("decimal", "Decimal"),
        ("char", "Char"),
        ("string", "String"),
        ("object", "Object"),
        ("void", "Void"),
        ("this", "Me"),
        ("base", "MyBase"),
        ("null", "Nothing"),
        ("true", "True"),
        ("false", "False"),
        ("new", "New"),
        ("typeof", "GetType"),
        ("is", "Is"),
        ("as", "TryCast"),
        ("if", "If"),
        ("else", "Else"),
        ("while", "While"),
        ("do", "Do"),
        ("for", "For"),
        ("foreach", "For Each"),
        ("switch", "Select Case"),
        ("case", "Case"),
        ("break", "Exit"),
        ("continue", "Continue"),
        ("return", "Return"),
        ("throw", "Throw"),
        ("try", "Try"),
        ("catch", "Catch"),
        ("finally", "Finally"),
        ("using", "Using"),
        ("lock", "SyncLock"),
        ("goto", "GoTo"),
        ("namespace", "Namespace"),
        ("class", "Class"),
        ("struct", "Structure"),
        ("interface", "Interface"),
        ("enum", "Enum"),
        ("delegate", "Delegate"),
        ("event", "Event"),
        ("operator", "Operator"),
        ("public", "Public"),
        ("private", "Private"),
        ("protected", "Protected"),
        ("internal", "Friend"),
        ("readonly", "ReadOnly"),
        ("const", "Const"),
        ("virtual", "Overridable"),
        ("override", "Overrides"),
        ("partial", "Partial"),
        ("params", "ParamArray"),
        ("ref", "ByRef"),
        ("out", "ByRef"),
        ("in", "In"),
        ("implicit", "Widening"),
        ("explicit", "Narrowing"),
    ])
});

/// Punctuation with a direct VB spelling. Everything else degrades to the
/// explicit empty-token sentinel, never a silent drop.
static PUNCTUATION_MAP: Lazy<HashMap<TokenKind, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (TokenKind::OpenParen, "("),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenBrace, "{"),
        (TokenKind::CloseBrace, "}"),
        (TokenKind::OpenBracket, "("),
        (TokenKind::CloseBracket, ")"),
        (TokenKind::Comma, ","),
        (TokenKind::Dot, "."),
        (TokenKind::QuestionDot, "?."),
        (TokenKind::Question, "?"),
        (TokenKind::Plus, "+"),
        (TokenKind::Minus, "-"),
        (TokenKind::Star, "*"),
        (TokenKind::Slash, "/"),
        (TokenKind::Percent, "Mod"),
        (TokenKind::Amp, "And"),
        (TokenKind::Pipe, "Or"),
        (TokenKind::Caret, "Xor"),
        (TokenKind::Tilde, "Not"),
        (TokenKind::Bang, "Not"),
        (TokenKind::Less, "<"),
        (TokenKind::Greater, ">"),
        (TokenKind::LessEqual, "<="),
        (TokenKind::GreaterEqual, ">="),
        (TokenKind::EqualEqual, "="),
        (TokenKind::BangEqual, "<>"),
        (TokenKind::AmpAmp, "AndAlso"),
        (TokenKind::PipePipe, "OrElse"),
        (TokenKind::LessLess, "<<"),
        (TokenKind::GreaterGreater, ">>"),
        (TokenKind::Equal, "="),
        (TokenKind::PlusEqual, "+="),
        (TokenKind::MinusEqual, "-="),
        (TokenKind::StarEqual, "*="),
        (TokenKind::SlashEqual, "/="),
        (TokenKind::LessLessEqual, "<<="),
        (TokenKind::GreaterGreaterEqual, ">>="),
    ])
});

/// Convert one token. Trivia relocation is the caller's responsibility;
/// this maps the token itself.
pub fn convert_token(
    token: &Token,
    in_member_access: bool,
    options: &ConvertOptions,
) -> Result<VbToken, ConvertError> {
    match token.kind {
        TokenKind::Identifier => Ok(convert_identifier(&token.text, in_member_access, options)),
        TokenKind::Keyword => match KEYWORD_MAP.get(token.text.as_str()) {
            Some(mapped) => Ok(VbToken::keyword(*mapped)),
            None => Err(ConvertError::not_implemented(
                format!("keyword `{}`", token.text),
                Some(token.span),
            )),
        },
        TokenKind::IntLiteral | TokenKind::RealLiteral => {
            Ok(VbToken::literal(convert_numeric_text(&token.text)))
        }
        TokenKind::CharLiteral => {
            let value = match token.value {
                TokenValue::Char(value) => value,
                _ => '\0',
            };
            Ok(VbToken::literal(csvb_vb::render_expression(
                &VbExpression::Literal(VbLiteral::Char(value)),
            )))
        }
        TokenKind::StringLiteral
        | TokenKind::VerbatimStringLiteral
        | TokenKind::InterpolatedStringLiteral => {
            let value = match &token.value {
                TokenValue::String(value) => value.as_str(),
                _ => "",
            };
            let multi_line = token.span.is_multi_line();
            Ok(VbToken::literal(csvb_vb::render_expression(
                &convert_string_value(value, multi_line),
            )))
        }
        TokenKind::Eof => Ok(VbToken::empty()),
        TokenKind::Error => Err(ConvertError::not_implemented(
            format!("token `{}`", token.text),
            Some(token.span),
        )),
        // `;`, `::`, `=>`, and friends have no VB equivalent.
        kind => Ok(match PUNCTUATION_MAP.get(&kind) {
            Some(mapped) => VbToken::punctuation(*mapped),
            None => VbToken::empty(),
        }),
    }
}

/// Rename-map substitution plus keyword escaping. Identifiers directly
/// after a member-access dot cannot collide grammatically, so they skip
/// escaping.
pub fn convert_identifier(
    text: &str,
    in_member_access: bool,
    options: &ConvertOptions,
) -> VbToken {
    let renamed = options.rename(text);
    VbToken::identifier(renamed, !in_member_access)
}

/// The predefined-type keyword table (`int` -> `Integer`, ...).
pub fn predefined_type_name(predefined: PredefinedType) -> &'static str {
    match predefined {
        PredefinedType::Bool => "Boolean",
        PredefinedType::Byte => "Byte",
        PredefinedType::SByte => "SByte",
        PredefinedType::Short => "Short",
        PredefinedType::UShort => "UShort",
        PredefinedType::Int => "Integer",
        PredefinedType::UInt => "UInteger",
        PredefinedType::Long => "Long",
        PredefinedType::ULong => "ULong",
        PredefinedType::Float => "Single",
        PredefinedType::Double => "Double",
        PredefinedType::Decimal => "Decimal",
        PredefinedType::Char => "Char",
        PredefinedType::String => "String",
        PredefinedType::Object => "Object",
        PredefinedType::Void => "Void",
    }
}

/// Hex literals re-prefix as `&H` and upper-case; everything else passes
/// through as written. Suffixes beyond the hex prefix are not re-mapped.
pub fn convert_numeric_text(text: &str) -> String {
    if let Some(digits) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        format!("&H{}", digits.to_ascii_uppercase())
    } else {
        text.to_string()
    }
}

/// Re-express a cooked C# string value as a VB expression.
///
/// VB string literals have no escape sequences, so control characters are
/// lowered to the named constants (`vbCrLf`, `vbTab`, ...) or `ChrW`
/// concatenated with plain segments. In a multi-line verbatim literal
/// (detected from the token span's line numbers) bare line breaks are line
/// separators and render as `vbCrLf`; in ordinary literals an escaped `\n`
/// stays `vbLf`.
pub fn convert_string_value(value: &str, multi_line: bool) -> VbExpression {
    let mut pieces: Vec<VbExpression> = Vec::new();
    let mut segment = String::new();

    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' && chars.peek() == Some(&'\n') {
            chars.next();
            flush_segment(&mut pieces, &mut segment);
            pieces.push(VbExpression::identifier("vbCrLf"));
            continue;
        }
        match c {
            '\n' => {
                flush_segment(&mut pieces, &mut segment);
                pieces.push(VbExpression::identifier(if multi_line {
                    "vbCrLf"
                } else {
                    "vbLf"
                }));
            }
            '\r' => {
                flush_segment(&mut pieces, &mut segment);
                pieces.push(VbExpression::identifier(if multi_line {
                    "vbCrLf"
                } else {
                    "vbCr"
                }));
            }
            '\t' => {
                flush_segment(&mut pieces, &mut segment);
                pieces.push(VbExpression::identifier("vbTab"));
            }
            c if (c as u32) < 0x20 => {
                flush_segment(&mut pieces, &mut segment);
                pieces.push(VbExpression::Invocation {
                    callee: Box::new(VbExpression::identifier("ChrW")),
                    args: vec![csvb_vb::VbArgument::positional(VbExpression::Literal(
                        VbLiteral::Number((c as u32).to_string()),
                    ))],
                });
            }
            c => segment.push(c),
        }
    }
    flush_segment(&mut pieces, &mut segment);

    match pieces.len() {
        0 => VbExpression::string_literal(""),
        1 => pieces.into_iter().next().expect("one piece"),
        _ => {
            let mut iter = pieces.into_iter();
            let first = iter.next().expect("non-empty");
            iter.fold(first, |left, right| VbExpression::Binary {
                left: Box::new(left),
                op: VbBinaryOp::Concatenate,
                right: Box::new(right),
            })
        }
    }
}

fn flush_segment(pieces: &mut Vec<VbExpression>, segment: &mut String) {
    if !segment.is_empty() {
        pieces.push(VbExpression::string_literal(std::mem::take(segment)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvb_ast::Span;
    use csvb_vb::render_expression;

    fn token(kind: TokenKind, text: &str) -> Token {
        Token {
            kind,
            text: text.to_string(),
            value: TokenValue::None,
            leading_trivia: vec![],
            trailing_trivia: vec![],
            span: Span::dummy(),
        }
    }

    #[test]
    fn identifier_colliding_with_reserved_word_is_escaped() {
        let options = ConvertOptions::new();
        let converted = convert_identifier("Class", false, &options);
        assert_eq!(converted.render_text(), "[Class]");
    }

    #[test]
    fn identifier_after_dot_is_not_escaped() {
        let options = ConvertOptions::new();
        let converted = convert_identifier("Class", true, &options);
        assert_eq!(converted.render_text(), "Class");
    }

    #[test]
    fn rename_map_applies_before_escaping() {
        let options = ConvertOptions::with_renames([("oldName", "stop")]);
        let converted = convert_identifier("oldName", false, &options);
        assert_eq!(converted.render_text(), "[stop]");
    }

    #[test]
    fn hex_literal_reprefixes_and_uppercases() {
        assert_eq!(convert_numeric_text("0x1f"), "&H1F");
        assert_eq!(convert_numeric_text("0XaB"), "&HAB");
        assert_eq!(convert_numeric_text("42"), "42");
        assert_eq!(convert_numeric_text("3.5"), "3.5");
    }

    #[test]
    fn keyword_table_maps_predefined_types() {
        let options = ConvertOptions::new();
        for (cs, vb) in [
            ("int", "Integer"),
            ("bool", "Boolean"),
            ("void", "Void"),
            ("string", "String"),
            ("float", "Single"),
            ("internal", "Friend"),
        ] {
            let converted = convert_token(&token(TokenKind::Keyword, cs), false, &options)
                .expect("keyword maps");
            assert_eq!(converted.text, vb);
        }
    }

    #[test]
    fn semicolon_degrades_to_empty_token() {
        let options = ConvertOptions::new();
        let converted =
            convert_token(&token(TokenKind::Semicolon, ";"), false, &options).unwrap();
        assert!(converted.is_empty());
    }

    #[test]
    fn error_token_is_a_hard_failure() {
        let options = ConvertOptions::new();
        let result = convert_token(&token(TokenKind::Error, "\\"), false, &options);
        assert!(matches!(result, Err(ConvertError::NotImplemented { .. })));
    }

    #[test]
    fn plain_string_value_stays_single_literal() {
        let expr = convert_string_value("hello", false);
        assert_eq!(render_expression(&expr), "\"hello\"");
    }

    #[test]
    fn newline_in_string_value_becomes_vbcrlf_concat() {
        let expr = convert_string_value("line one\r\nline two", true);
        assert_eq!(
            render_expression(&expr),
            "\"line one\" & vbCrLf & \"line two\""
        );
    }

    #[test]
    fn control_character_becomes_chrw() {
        let expr = convert_string_value("a\u{1}b", false);
        assert_eq!(render_expression(&expr), "\"a\" & ChrW(1) & \"b\"");
    }

    #[test]
    fn char_literal_renders_with_c_suffix() {
        let options = ConvertOptions::new();
        let mut t = token(TokenKind::CharLiteral, "'a'");
        t.value = TokenValue::Char('a');
        let converted = convert_token(&t, false, &options).unwrap();
        assert_eq!(converted.text, "\"a\"c");
    }
}
