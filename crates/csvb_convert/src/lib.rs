// csvb_convert - C# to Visual Basic syntax conversion
//! Converts a parsed C# tree (or raw C# text) into Visual Basic.
//!
//! Two public entry points:
//! - [`convert_tree`] takes an already-parsed [`CompilationUnit`] and
//!   returns the typed VB tree.
//! - [`convert_text`] takes raw text and returns rendered VB source. The
//!   input is tried as a bare expression, then a bare statement, then a
//!   full compilation unit; the first parse that consumes the whole input
//!   wins, so the same call converts a snippet, a statement, or a file.
//!
//! The error model has two tiers: constructs with a registered soft
//! fallback degrade to inline placeholders carrying the original text,
//! while node kinds with no rule at all abort the conversion with
//! [`ConvertError::NotImplemented`].

mod context;
mod declarations;
mod error;
pub mod fallback;
mod expressions;
mod statements;
pub mod tokens;
pub mod trivia;
mod types;

pub use context::{ConvertContext, ConvertOptions, EnclosingKind};
pub use error::ConvertError;

use csvb_ast::CompilationUnit;
use csvb_vb::{
    render_expression, render_statement, VbCompilationUnit, VbRenderConfig, VbSourceBuilder,
};

/// The tree walker. One instance serves a single conversion call; it holds
/// the options and original source text and nothing else - the walk itself
/// is stateless recursion, with the breakable-construct stack threaded
/// through statement conversion as an explicit [`ConvertContext`].
pub(crate) struct Converter<'a> {
    pub(crate) options: &'a ConvertOptions,
    pub(crate) source: &'a str,
}

/// Convert a parsed compilation unit into a VB tree.
///
/// `source` must be the text the unit was parsed from; fallback
/// placeholders and multi-line literal detection read from it.
pub fn convert_tree(
    unit: &CompilationUnit,
    source: &str,
    options: &ConvertOptions,
) -> Result<VbCompilationUnit, ConvertError> {
    let converter = Converter { options, source };
    converter.convert_unit(unit)
}

/// Convert raw C# text to rendered VB source.
pub fn convert_text(source: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    let config = VbRenderConfig::default();
    let converter = Converter { options, source };

    if let Ok(expr) = csvb_parser::parse_expression(source) {
        tracing::debug!(target: "csvb", "input parsed as expression");
        let converted = converter.convert_expression(&expr)?;
        return Ok(render_expression(&converted));
    }

    if let Ok(statement) = csvb_parser::parse_statement(source) {
        tracing::debug!(target: "csvb", "input parsed as statement");
        let mut ctx = ConvertContext::new();
        let statements = converter.convert_statement(&statement, &mut ctx)?;
        let mut builder = VbSourceBuilder::new(config.indent.clone());
        for vb_statement in &statements {
            render_statement(&mut builder, vb_statement);
        }
        return Ok(builder.build());
    }

    tracing::debug!(target: "csvb", "input parsed as compilation unit");
    let unit = csvb_parser::parse_compilation_unit(source)?;
    let converted = converter.convert_unit(&unit)?;
    Ok(converted.to_source(&config))
}

#[cfg(test)]
mod tests;
