// csvb_convert/context - Options and the threaded conversion context
use std::collections::HashMap;

/// Caller-facing configuration for one conversion call.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Identifier rename table, consulted once per identifier token.
    /// Exact-match keys; absence means "no rename".
    pub identifier_map: HashMap<String, String>,
    /// Reserved for a future string-literal conversion policy; accepted and
    /// threaded but not yet consequential.
    pub convert_strings: bool,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_renames<I, K, V>(renames: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            identifier_map: renames
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            convert_strings: false,
        }
    }

    pub fn rename<'a>(&'a self, text: &'a str) -> &'a str {
        self.identifier_map
            .get(text)
            .map(String::as_str)
            .unwrap_or(text)
    }
}

/// The enclosing constructs a `break` or `continue` can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnclosingKind {
    ForNext,
    ForEach,
    While,
    Do,
    Select,
}

impl EnclosingKind {
    fn is_loop(self) -> bool {
        !matches!(self, EnclosingKind::Select)
    }
}

/// Context threaded through statement conversion instead of walking parent
/// pointers: the enclosing breakable/continuable stack.
#[derive(Debug, Default)]
pub struct ConvertContext {
    enclosing: Vec<EnclosingKind>,
}

impl ConvertContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, kind: EnclosingKind) {
        self.enclosing.push(kind);
    }

    pub fn exit(&mut self) {
        self.enclosing.pop();
    }

    /// The construct a `break` exits: the innermost enclosing breakable.
    pub fn breakable(&self) -> Option<EnclosingKind> {
        self.enclosing.last().copied()
    }

    /// The construct a `continue` advances: the innermost enclosing loop,
    /// skipping switches.
    pub fn continuable(&self) -> Option<EnclosingKind> {
        self.enclosing
            .iter()
            .rev()
            .copied()
            .find(|kind| kind.is_loop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn break_targets_innermost_breakable() {
        let mut ctx = ConvertContext::new();
        ctx.enter(EnclosingKind::While);
        ctx.enter(EnclosingKind::Select);
        assert_eq!(ctx.breakable(), Some(EnclosingKind::Select));
        assert_eq!(ctx.continuable(), Some(EnclosingKind::While));
        ctx.exit();
        assert_eq!(ctx.breakable(), Some(EnclosingKind::While));
    }

    #[test]
    fn empty_context_has_no_targets() {
        let ctx = ConvertContext::new();
        assert_eq!(ctx.breakable(), None);
        assert_eq!(ctx.continuable(), None);
    }

    #[test]
    fn rename_map_is_exact_match() {
        let options = ConvertOptions::with_renames([("foo", "bar")]);
        assert_eq!(options.rename("foo"), "bar");
        assert_eq!(options.rename("Foo"), "Foo");
        assert_eq!(options.rename("other"), "other");
    }
}
