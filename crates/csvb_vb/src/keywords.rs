// csvb_vb/keywords - VB reserved words
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Every reserved word of the VB grammar, lower-cased.
///
/// VB identifiers are case-insensitive, so membership checks lower-case the
/// candidate first.
static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "addhandler",
        "addressof",
        "alias",
        "and",
        "andalso",
        "as",
        "boolean",
        "byref",
        "byte",
        "byval",
        "call",
        "case",
        "catch",
        "cbool",
        "cbyte",
        "cchar",
        "cdate",
        "cdbl",
        "cdec",
        "char",
        "cint",
        "class",
        "clng",
        "cobj",
        "const",
        "continue",
        "csbyte",
        "cshort",
        "csng",
        "cstr",
        "ctype",
        "cuint",
        "culng",
        "cushort",
        "date",
        "decimal",
        "declare",
        "default",
        "delegate",
        "dim",
        "directcast",
        "do",
        "double",
        "each",
        "else",
        "elseif",
        "end",
        "endif",
        "enum",
        "erase",
        "error",
        "event",
        "exit",
        "false",
        "finally",
        "for",
        "friend",
        "function",
        "get",
        "gettype",
        "getxmlnamespace",
        "global",
        "gosub",
        "goto",
        "handles",
        "if",
        "implements",
        "imports",
        "in",
        "inherits",
        "integer",
        "interface",
        "is",
        "isnot",
        "let",
        "lib",
        "like",
        "long",
        "loop",
        "me",
        "mod",
        "module",
        "mustinherit",
        "mustoverride",
        "mybase",
        "myclass",
        "namespace",
        "narrowing",
        "new",
        "next",
        "not",
        "nothing",
        "notinheritable",
        "notoverridable",
        "object",
        "of",
        "on",
        "operator",
        "option",
        "optional",
        "or",
        "orelse",
        "overloads",
        "overridable",
        "overrides",
        "paramarray",
        "partial",
        "private",
        "property",
        "protected",
        "public",
        "raiseevent",
        "readonly",
        "redim",
        "rem",
        "removehandler",
        "resume",
        "return",
        "sbyte",
        "select",
        "set",
        "shadows",
        "shared",
        "short",
        "single",
        "static",
        "step",
        "stop",
        "string",
        "structure",
        "sub",
        "synclock",
        "then",
        "throw",
        "to",
        "true",
        "try",
        "trycast",
        "typeof",
        "uinteger",
        "ulong",
        "ushort",
        "using",
        "variant",
        "wend",
        "when",
        "while",
        "widening",
        "with",
        "withevents",
        "writeonly",
        "xor",
    ]
    .into_iter()
    .collect()
});

/// Whether `text` collides with a VB reserved word (case-insensitive).
pub fn is_reserved_word(text: &str) -> bool {
    RESERVED_WORDS.contains(text.to_ascii_lowercase().as_str())
}
