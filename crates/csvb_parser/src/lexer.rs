// csvb_parser/lexer - C# lexer with trivia capture
//
// Tokens carry their leading and trailing trivia, Roslyn-style: trailing
// trivia runs to the end of the token's line, everything else attaches as
// leading trivia of the next token.
use csvb_ast::{DirectiveKind, DirectiveTrivia, Span, Token, TokenKind, TokenValue, Trivia};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract",
        "as",
        "base",
        "bool",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "checked",
        "class",
        "const",
        "continue",
        "decimal",
        "default",
        "delegate",
        "do",
        "double",
        "else",
        "enum",
        "event",
        "explicit",
        "extern",
        "false",
        "finally",
        "fixed",
        "float",
        "for",
        "foreach",
        "goto",
        "if",
        "implicit",
        "in",
        "int",
        "interface",
        "internal",
        "is",
        "lock",
        "long",
        "namespace",
        "new",
        "null",
        "object",
        "operator",
        "out",
        "override",
        "params",
        "private",
        "protected",
        "public",
        "readonly",
        "ref",
        "return",
        "sbyte",
        "sealed",
        "short",
        "sizeof",
        "stackalloc",
        "static",
        "string",
        "struct",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "uint",
        "ulong",
        "unchecked",
        "unsafe",
        "ushort",
        "using",
        "virtual",
        "void",
        "volatile",
        "while",
        "__makeref",
        "__reftype",
        "__refvalue",
        "__arglist",
    ]
    .into_iter()
    .collect()
});

pub fn is_csharp_keyword(text: &str) -> bool {
    KEYWORDS.contains(text)
}

/// Tokenize `source`. Never fails; unrecognized input becomes an
/// `Error`-kind token for the parser to diagnose.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).run()
}

struct Lexer<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
    line: usize,
    column: usize,
    /// Only whitespace has been seen since the last newline; directives are
    /// recognized only in this state.
    at_line_start: bool,
}

#[derive(PartialEq)]
enum TriviaMode {
    Leading,
    Trailing,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            pos: 0,
            line: 1,
            column: 1,
            at_line_start: true,
        }
    }

    fn run(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let leading = self.scan_trivia(TriviaMode::Leading);
            if self.is_eof() {
                let span = self.point_span();
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    value: TokenValue::None,
                    leading_trivia: leading,
                    trailing_trivia: vec![],
                    span,
                });
                break;
            }
            let mut token = self.scan_token();
            token.leading_trivia = leading;
            token.trailing_trivia = self.scan_trivia(TriviaMode::Trailing);
            tokens.push(token);
        }
        tokens
    }

    // -- cursor helpers -----------------------------------------------------

    fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|(_, c)| *c)
    }

    fn peek_at(&self, lookahead: usize) -> Option<char> {
        self.chars.get(self.pos + lookahead).map(|(_, c)| *c)
    }

    fn offset(&self) -> usize {
        self.chars
            .get(self.pos)
            .map(|(offset, _)| *offset)
            .unwrap_or(self.source.len())
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = *self.chars.get(self.pos)?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
            self.at_line_start = true;
        } else {
            self.column += 1;
            if !c.is_whitespace() {
                self.at_line_start = false;
            }
        }
        Some(c)
    }

    fn point_span(&self) -> Span {
        Span::new(
            self.line,
            self.column,
            self.line,
            self.column,
            self.offset(),
            self.offset(),
        )
    }

    fn span_from(&self, start: (usize, usize, usize)) -> Span {
        let (line, column, offset) = start;
        Span::new(line, column, self.line, self.column, offset, self.offset())
    }

    fn mark(&self) -> (usize, usize, usize) {
        (self.line, self.column, self.offset())
    }

    fn text_since(&self, start_offset: usize) -> &'a str {
        &self.source[start_offset..self.offset()]
    }

    // -- trivia -------------------------------------------------------------

    fn scan_trivia(&mut self, mode: TriviaMode) -> Vec<Trivia> {
        let mut trivia = Vec::new();
        loop {
            let Some(c) = self.peek() else { break };
            match c {
                ' ' | '\t' => {
                    let start = self.mark();
                    while matches!(self.peek(), Some(' ') | Some('\t')) {
                        self.bump();
                    }
                    trivia.push(Trivia::Whitespace(self.text_since(start.2).to_string()));
                }
                '\r' | '\n' => {
                    let start = self.mark();
                    if self.peek() == Some('\r') {
                        self.bump();
                    }
                    if self.peek() == Some('\n') {
                        self.bump();
                    }
                    trivia.push(Trivia::EndOfLine(self.text_since(start.2).to_string()));
                    if mode == TriviaMode::Trailing {
                        break;
                    }
                }
                '/' if self.peek_at(1) == Some('/') => {
                    let is_doc =
                        self.peek_at(2) == Some('/') && self.peek_at(3) != Some('/');
                    let start = self.mark();
                    while self.peek().map(|c| c != '\n' && c != '\r').unwrap_or(false) {
                        self.bump();
                    }
                    let text = self.text_since(start.2);
                    if is_doc {
                        trivia.push(Trivia::DocComment(text[3..].to_string()));
                    } else {
                        trivia.push(Trivia::LineComment(text[2..].to_string()));
                    }
                }
                '/' if self.peek_at(1) == Some('*') => {
                    let start = self.mark();
                    self.bump();
                    self.bump();
                    loop {
                        match (self.peek(), self.peek_at(1)) {
                            (Some('*'), Some('/')) => {
                                self.bump();
                                self.bump();
                                break;
                            }
                            (Some(_), _) => {
                                self.bump();
                            }
                            (None, _) => break,
                        }
                    }
                    let text = self.text_since(start.2);
                    let body = text
                        .strip_prefix("/*")
                        .and_then(|t| t.strip_suffix("*/"))
                        .unwrap_or(text);
                    trivia.push(Trivia::BlockComment(body.to_string()));
                }
                '#' if self.at_line_start => {
                    let directive = self.scan_directive();
                    let disable = matches!(
                        &directive.kind,
                        DirectiveKind::If { condition } if condition.trim().eq_ignore_ascii_case("false")
                    );
                    trivia.push(Trivia::Directive(directive));
                    if disable {
                        if let Some(disabled) = self.scan_disabled_text() {
                            trivia.push(Trivia::DisabledText(disabled));
                        }
                    }
                }
                _ => break,
            }
        }
        trivia
    }

    fn scan_directive(&mut self) -> DirectiveTrivia {
        let start = self.mark();
        while self.peek().map(|c| c != '\n' && c != '\r').unwrap_or(false) {
            self.bump();
        }
        let raw = self.text_since(start.2).to_string();
        let span = self.span_from(start);
        let body = raw.trim_start_matches('#').trim_start();
        let (word, rest) = match body.find(|c: char| c.is_whitespace()) {
            Some(index) => (&body[..index], body[index..].trim()),
            None => (body, ""),
        };
        let kind = match word {
            "region" => DirectiveKind::Region {
                name: rest.to_string(),
            },
            "endregion" => DirectiveKind::EndRegion,
            "if" => DirectiveKind::If {
                condition: rest.to_string(),
            },
            "elif" => DirectiveKind::Elif {
                condition: rest.to_string(),
            },
            "else" => DirectiveKind::Else,
            "endif" => DirectiveKind::EndIf,
            "define" => DirectiveKind::Define {
                symbol: rest.to_string(),
            },
            "undef" => DirectiveKind::Undef {
                symbol: rest.to_string(),
            },
            "pragma" => DirectiveKind::Pragma {
                text: rest.to_string(),
            },
            "line" => DirectiveKind::Line {
                text: rest.to_string(),
            },
            "warning" => DirectiveKind::Warning {
                text: rest.to_string(),
            },
            "error" => DirectiveKind::Error {
                text: rest.to_string(),
            },
            "nullable" => DirectiveKind::Nullable {
                text: rest.to_string(),
            },
            _ => DirectiveKind::Unknown,
        };
        DirectiveTrivia { kind, raw, span }
    }

    /// After `#if false`, capture everything up to the matching `#else`,
    /// `#elif`, or `#endif` as opaque disabled text.
    fn scan_disabled_text(&mut self) -> Option<String> {
        let start_offset = self.offset();
        let mut depth = 0usize;
        loop {
            if self.is_eof() {
                break;
            }
            // Look at the upcoming line without consuming the terminator.
            let line_start = self.pos;
            let mut probe = self.pos;
            while let Some((_, c)) = self.chars.get(probe) {
                if *c == '\n' || *c == '\r' {
                    break;
                }
                probe += 1;
            }
            let line_text: String = self.chars[line_start..probe].iter().map(|(_, c)| c).collect();
            let trimmed = line_text.trim_start();
            if trimmed.starts_with("#if") {
                depth += 1;
            } else if trimmed.starts_with("#endif")
                || trimmed.starts_with("#else")
                || trimmed.starts_with("#elif")
            {
                if depth == 0 {
                    break;
                }
                if trimmed.starts_with("#endif") {
                    depth -= 1;
                }
            }
            // Consume the line plus its terminator.
            while self.pos < probe {
                self.bump();
            }
            if self.peek() == Some('\r') {
                self.bump();
            }
            if self.peek() == Some('\n') {
                self.bump();
            }
        }
        let end_offset = self.offset();
        if end_offset > start_offset {
            Some(self.source[start_offset..end_offset].to_string())
        } else {
            None
        }
    }

    // -- tokens -------------------------------------------------------------

    fn scan_token(&mut self) -> Token {
        let start = self.mark();
        let c = self.peek().expect("scan_token called at EOF");

        if c == '_' || c.is_alphabetic() {
            return self.scan_word(start);
        }
        if c.is_ascii_digit() {
            return self.scan_number(start);
        }
        match c {
            '"' => return self.scan_string(start, false, false),
            '\'' => return self.scan_char(start),
            '@' if self.peek_at(1) == Some('"') => {
                self.bump();
                return self.scan_string(start, true, false);
            }
            '@' if self.peek_at(1) == Some('$') && self.peek_at(2) == Some('"') => {
                self.bump();
                self.bump();
                return self.scan_string(start, true, true);
            }
            '$' if self.peek_at(1) == Some('"') => {
                self.bump();
                return self.scan_string(start, false, true);
            }
            '$' if self.peek_at(1) == Some('@') && self.peek_at(2) == Some('"') => {
                self.bump();
                self.bump();
                return self.scan_string(start, true, true);
            }
            '@' if self
                .peek_at(1)
                .map(|c| c == '_' || c.is_alphabetic())
                .unwrap_or(false) =>
            {
                // Verbatim identifier `@class`.
                self.bump();
                let word_start = self.mark();
                while self
                    .peek()
                    .map(|c| c == '_' || c.is_alphanumeric())
                    .unwrap_or(false)
                {
                    self.bump();
                }
                let text = self.text_since(word_start.2).to_string();
                return self.make_token(TokenKind::Identifier, text, TokenValue::None, start);
            }
            _ => {}
        }

        self.scan_punctuation(start)
    }

    fn make_token(
        &self,
        kind: TokenKind,
        text: String,
        value: TokenValue,
        start: (usize, usize, usize),
    ) -> Token {
        Token {
            kind,
            text,
            value,
            leading_trivia: vec![],
            trailing_trivia: vec![],
            span: self.span_from(start),
        }
    }

    fn scan_word(&mut self, start: (usize, usize, usize)) -> Token {
        while self
            .peek()
            .map(|c| c == '_' || c.is_alphanumeric())
            .unwrap_or(false)
        {
            self.bump();
        }
        let text = self.text_since(start.2).to_string();
        let kind = if is_csharp_keyword(&text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.make_token(kind, text, TokenValue::None, start)
    }

    fn scan_number(&mut self, start: (usize, usize, usize)) -> Token {
        let mut is_real = false;
        if self.peek() == Some('0') && matches!(self.peek_at(1), Some('x') | Some('X')) {
            self.bump();
            self.bump();
            while self
                .peek()
                .map(|c| c.is_ascii_hexdigit() || c == '_')
                .unwrap_or(false)
            {
                self.bump();
            }
        } else {
            while self
                .peek()
                .map(|c| c.is_ascii_digit() || c == '_')
                .unwrap_or(false)
            {
                self.bump();
            }
            if self.peek() == Some('.')
                && self.peek_at(1).map(|c| c.is_ascii_digit()).unwrap_or(false)
            {
                is_real = true;
                self.bump();
                while self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                    self.bump();
                }
            }
            if matches!(self.peek(), Some('e') | Some('E')) {
                let mut lookahead = 1;
                if matches!(self.peek_at(1), Some('+') | Some('-')) {
                    lookahead = 2;
                }
                if self
                    .peek_at(lookahead)
                    .map(|c| c.is_ascii_digit())
                    .unwrap_or(false)
                {
                    is_real = true;
                    for _ in 0..=lookahead {
                        self.bump();
                    }
                    while self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                        self.bump();
                    }
                }
            }
        }
        // Suffix letters.
        while self
            .peek()
            .map(|c| matches!(c, 'u' | 'U' | 'l' | 'L' | 'f' | 'F' | 'd' | 'D' | 'm' | 'M'))
            .unwrap_or(false)
        {
            if matches!(self.peek(), Some('f' | 'F' | 'd' | 'D' | 'm' | 'M')) {
                is_real = true;
            }
            self.bump();
        }
        let text = self.text_since(start.2).to_string();
        let kind = if is_real {
            TokenKind::RealLiteral
        } else {
            TokenKind::IntLiteral
        };
        self.make_token(kind, text, TokenValue::None, start)
    }

    fn scan_string(
        &mut self,
        start: (usize, usize, usize),
        verbatim: bool,
        interpolated: bool,
    ) -> Token {
        self.bump(); // opening quote
        let mut value = String::new();
        let mut depth = 0usize;
        loop {
            let Some(c) = self.peek() else { break };
            if depth == 0 {
                match c {
                    '"' if verbatim && self.peek_at(1) == Some('"') => {
                        self.bump();
                        self.bump();
                        value.push('"');
                    }
                    '"' => {
                        self.bump();
                        break;
                    }
                    '\\' if !verbatim => {
                        value.push(self.scan_escape());
                    }
                    // Doubled braces stay doubled in the cooked value so the
                    // parser can tell them apart from interpolation holes.
                    '{' if interpolated && self.peek_at(1) == Some('{') => {
                        self.bump();
                        self.bump();
                        value.push_str("{{");
                    }
                    '{' if interpolated => {
                        depth += 1;
                        self.bump();
                        value.push('{');
                    }
                    '}' if interpolated && self.peek_at(1) == Some('}') => {
                        self.bump();
                        self.bump();
                        value.push_str("}}");
                    }
                    _ => {
                        self.bump();
                        value.push(c);
                    }
                }
            } else {
                // Inside an interpolation hole: skip nested strings whole.
                match c {
                    '{' => {
                        depth += 1;
                        self.bump();
                        value.push(c);
                    }
                    '}' => {
                        depth -= 1;
                        self.bump();
                        value.push(c);
                    }
                    '"' => {
                        self.bump();
                        value.push('"');
                        while let Some(inner) = self.peek() {
                            self.bump();
                            value.push(inner);
                            if inner == '\\' {
                                if let Some(escaped) = self.peek() {
                                    self.bump();
                                    value.push(escaped);
                                }
                            } else if inner == '"' {
                                break;
                            }
                        }
                    }
                    _ => {
                        self.bump();
                        value.push(c);
                    }
                }
            }
        }
        let text = self.text_since(start.2).to_string();
        let kind = if interpolated {
            TokenKind::InterpolatedStringLiteral
        } else if verbatim {
            TokenKind::VerbatimStringLiteral
        } else {
            TokenKind::StringLiteral
        };
        self.make_token(kind, text, TokenValue::String(value), start)
    }

    fn scan_escape(&mut self) -> char {
        self.bump(); // backslash
        let Some(c) = self.peek() else { return '\\' };
        self.bump();
        match c {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '0' => '\0',
            'a' => '\x07',
            'b' => '\x08',
            'f' => '\x0c',
            'v' => '\x0b',
            '\\' => '\\',
            '\'' => '\'',
            '"' => '"',
            'x' | 'u' => {
                let max = if c == 'u' { 4 } else { 2 };
                let mut digits = String::new();
                while digits.len() < max
                    && self
                        .peek()
                        .map(|c| c.is_ascii_hexdigit())
                        .unwrap_or(false)
                {
                    digits.push(self.bump().unwrap_or('0'));
                }
                u32::from_str_radix(&digits, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .unwrap_or('\u{fffd}')
            }
            other => other,
        }
    }

    fn scan_char(&mut self, start: (usize, usize, usize)) -> Token {
        self.bump(); // opening quote
        let value = match self.peek() {
            Some('\\') => self.scan_escape(),
            Some(c) => {
                self.bump();
                c
            }
            None => '\0',
        };
        if self.peek() == Some('\'') {
            self.bump();
        }
        let text = self.text_since(start.2).to_string();
        self.make_token(TokenKind::CharLiteral, text, TokenValue::Char(value), start)
    }

    fn scan_punctuation(&mut self, start: (usize, usize, usize)) -> Token {
        use TokenKind::*;
        let c = self.bump().expect("punctuation at EOF");
        let two = self.peek();
        let three = self.peek_at(1);
        let kind = match c {
            '(' => OpenParen,
            ')' => CloseParen,
            '{' => OpenBrace,
            '}' => CloseBrace,
            '[' => OpenBracket,
            ']' => CloseBracket,
            ';' => Semicolon,
            ',' => Comma,
            '~' => Tilde,
            '.' => Dot,
            ':' => {
                if two == Some(':') {
                    self.bump();
                    ColonColon
                } else {
                    Colon
                }
            }
            '?' => match two {
                Some('?') => {
                    self.bump();
                    QuestionQuestion
                }
                Some('.') => {
                    self.bump();
                    QuestionDot
                }
                _ => Question,
            },
            '+' => match two {
                Some('+') => {
                    self.bump();
                    PlusPlus
                }
                Some('=') => {
                    self.bump();
                    PlusEqual
                }
                _ => Plus,
            },
            '-' => match two {
                Some('-') => {
                    self.bump();
                    MinusMinus
                }
                Some('=') => {
                    self.bump();
                    MinusEqual
                }
                Some('>') => {
                    self.bump();
                    Arrow
                }
                _ => Minus,
            },
            '*' => match two {
                Some('=') => {
                    self.bump();
                    StarEqual
                }
                _ => Star,
            },
            '/' => match two {
                Some('=') => {
                    self.bump();
                    SlashEqual
                }
                _ => Slash,
            },
            '%' => match two {
                Some('=') => {
                    self.bump();
                    PercentEqual
                }
                _ => Percent,
            },
            '&' => match two {
                Some('&') => {
                    self.bump();
                    AmpAmp
                }
                Some('=') => {
                    self.bump();
                    AmpEqual
                }
                _ => Amp,
            },
            '|' => match two {
                Some('|') => {
                    self.bump();
                    PipePipe
                }
                Some('=') => {
                    self.bump();
                    PipeEqual
                }
                _ => Pipe,
            },
            '^' => match two {
                Some('=') => {
                    self.bump();
                    CaretEqual
                }
                _ => Caret,
            },
            '!' => match two {
                Some('=') => {
                    self.bump();
                    BangEqual
                }
                _ => Bang,
            },
            '=' => match two {
                Some('=') => {
                    self.bump();
                    EqualEqual
                }
                Some('>') => {
                    self.bump();
                    FatArrow
                }
                _ => Equal,
            },
            '<' => match (two, three) {
                (Some('<'), Some('=')) => {
                    self.bump();
                    self.bump();
                    LessLessEqual
                }
                (Some('<'), _) => {
                    self.bump();
                    LessLess
                }
                (Some('='), _) => {
                    self.bump();
                    LessEqual
                }
                _ => Less,
            },
            '>' => match (two, three) {
                (Some('>'), Some('=')) => {
                    self.bump();
                    self.bump();
                    GreaterGreaterEqual
                }
                (Some('='), _) => {
                    self.bump();
                    GreaterEqual
                }
                _ => Greater,
            },
            _ => Error,
        };
        // `>>` is left as two Greater tokens so nested generic argument
        // lists (`List<List<int>>`) close correctly; the expression parser
        // re-joins adjacent `>` `>` into a shift.
        let text = self.text_since(start.2).to_string();
        self.make_token(kind, text, TokenValue::None, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn lexes_keywords_and_identifiers() {
        let tokens = tokenize("int foo = 1;");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text, "int");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "foo");
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn hex_literal_keeps_raw_text() {
        let tokens = tokenize("0x1f");
        assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[0].text, "0x1f");
    }

    #[test]
    fn string_escapes_are_cooked() {
        let tokens = tokenize(r#""a\nb""#);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].value, TokenValue::String("a\nb".to_string()));
    }

    #[test]
    fn verbatim_string_doubles_quotes() {
        let tokens = tokenize(r#"@"say ""hi"""#);
        assert_eq!(tokens[0].kind, TokenKind::VerbatimStringLiteral);
        assert_eq!(
            tokens[0].value,
            TokenValue::String("say \"hi\"".to_string())
        );
    }

    #[test]
    fn line_comment_attaches_as_trailing_trivia() {
        let tokens = tokenize("x; // done\ny");
        let semicolon = &tokens[1];
        assert_eq!(semicolon.kind, TokenKind::Semicolon);
        assert!(semicolon
            .trailing_trivia
            .iter()
            .any(|t| matches!(t, Trivia::LineComment(text) if text == " done")));
    }

    #[test]
    fn doc_comment_is_distinguished() {
        let tokens = tokenize("/// Summary.\nint x;");
        assert!(tokens[0]
            .leading_trivia
            .iter()
            .any(|t| matches!(t, Trivia::DocComment(text) if text == " Summary.")));
    }

    #[test]
    fn region_directive_is_structured() {
        let tokens = tokenize("#region Helpers\nint x;\n#endregion\n");
        let directive = tokens[0]
            .leading_trivia
            .iter()
            .find_map(|t| match t {
                Trivia::Directive(d) => Some(d),
                _ => None,
            })
            .expect("directive trivia");
        assert_eq!(
            directive.kind,
            DirectiveKind::Region {
                name: "Helpers".to_string()
            }
        );
    }

    #[test]
    fn if_false_region_becomes_disabled_text() {
        let tokens = tokenize("#if false\nint disabled;\n#endif\nint live;");
        let disabled = tokens[0]
            .leading_trivia
            .iter()
            .find_map(|t| match t {
                Trivia::DisabledText(text) => Some(text.as_str()),
                _ => None,
            })
            .expect("disabled text");
        assert!(disabled.contains("int disabled;"));
        assert_eq!(tokens[0].text, "int");
    }

    #[test]
    fn shift_and_comparison_operators() {
        assert_eq!(
            kinds("a << 2 >= b")[..4],
            [
                TokenKind::Identifier,
                TokenKind::LessLess,
                TokenKind::IntLiteral,
                TokenKind::GreaterEqual,
            ]
        );
    }

    #[test]
    fn verbatim_identifier_drops_at_sign() {
        let tokens = tokenize("@class");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "class");
    }

    #[test]
    fn interpolated_string_token() {
        let tokens = tokenize(r#"$"x = {x + 1}""#);
        assert_eq!(tokens[0].kind, TokenKind::InterpolatedStringLiteral);
        assert_eq!(
            tokens[0].value,
            TokenValue::String("x = {x + 1}".to_string())
        );
    }

    #[test]
    fn char_literal_value() {
        let tokens = tokenize("'a'");
        assert_eq!(tokens[0].kind, TokenKind::CharLiteral);
        assert_eq!(tokens[0].value, TokenValue::Char('a'));
    }
}
