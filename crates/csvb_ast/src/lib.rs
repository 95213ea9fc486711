// csvb_ast - C# syntax tree definitions for the csvb converter
//! This crate provides the C# syntax tree consumed by the converter.
//!
//! The tree represents C# source after parsing: expressions, statements,
//! declarations, tokens, and the trivia (comments, directives, disabled
//! text) attached to them. It is a plain data model; parsing lives in
//! `csvb_parser` and conversion in `csvb_convert`.

// Module declarations
pub mod declaration;
pub mod expression;
pub mod statement;
pub mod token;
pub mod trivia;
pub mod types;

// Re-export all public types for convenient access
pub use declaration::*;
pub use expression::*;
pub use statement::*;
pub use token::*;
pub use trivia::*;
pub use types::*;

#[cfg(test)]
mod tests;
