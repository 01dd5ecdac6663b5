//! # Model
//! Parse hierarchy specs into a code model
//!
//! A spec is a base name and a list of lines, each describing one variant:
//!
//! ```text
//! Binary  : Expr* left, Token oper, Expr* right
//! Literal : Object value
//! ```
//!
//! The name of a field is the final word of each entry, everything before it is
//! the type. Type expressions are not interpreted, other than to decide whether
//! the field is owned, borrowed, or held by value.
//!
//! Works in two passes. [`parse`] checks the grammar and builds an unclassified
//! [`AstDefinition`], then [`AstDefinition::classify`] decides the ownership of
//! every field giving a [`CodeModel`].

#![deny(unsafe_code)]

pub mod definition;
pub mod document;
mod error;
mod ownership;
mod parser;
mod prettyprint;


/// Parses the lines of a hierarchy into an unclassified definition.
///
/// Blank lines are skipped. Line numbers in errors start at 1.
///
/// # Examples
/// ```
/// use astgen_model::{parse, OwnershipKind};
///
/// let definition = parse("Expr", &["Binary : Expr* left, Token oper, Expr* right"]).unwrap();
/// let model = definition.classify();
///
/// assert_eq!(model.variants[0].fields[0].ownership, OwnershipKind::Owning);
/// ```
///
/// # Errors
/// If a line is malformed, or there are no variants.
pub fn parse(
  base_name: &str,
  lines: &[&str],
) -> Result<AstDefinition<Unclassified>, SpecError> {
  parser::Parser::new(base_name, 1).parse(lines)
}

pub use definition::{AstDefinition, CodeModel, FieldDef, Unclassified, VariantDef};
pub use document::{Document, Section};
pub use error::{ErrorKind, Line, SpecError};
pub use ownership::{NON_OWNING_MARKERS, OwnershipKind, classify};
pub use parser::{KEYWORDS, VISITOR_NAME, is_identifier, is_keyword, is_reserved};
