//! # Document
//!
//! A file containing one or more hierarchies, each introduced by a `[Base]` header.
//!
//! ```text
//! # Expressions
//! [Expr]
//! Binary  : Expr* left, Token oper, Expr* right
//! Literal : Object value
//!
//! [Stmt]
//! Block : List<Stmt&> statements
//! ```
//!
//! Lines starting with `#` are comments.

use crate::definition::{AstDefinition, Unclassified};
use crate::error::{Line, SpecError};
use crate::parser::{Parser, is_identifier, is_reserved};

/// The hierarchies in a spec file
#[derive(Debug)]
pub struct Document<'source> {
  /// The hierarchies in the order they appear
  pub sections: Vec<Section<'source>>,
}
impl<'source> Document<'source> {
  /// Split a source file into hierarchies by their `[Base]` headers
  ///
  /// # Errors
  /// If a variant appears before the first header, a header is repeated or
  /// invalid, or there are no headers at all.
  pub fn parse(source: &'source str) -> Result<Self, SpecError> {
    let mut sections: Vec<Section> = Vec::new();

    for (index, text) in source.lines().enumerate() {
      let number = index + 1;
      let trimmed = text.trim();

      if let Some(header) = trimmed.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        let name = header.trim();
        if !is_identifier(name) {
          return Err(SpecError::InvalidBaseName {
            name: name.to_owned(),
            line: Some(Line::new(number, text)),
          });
        }
        if is_reserved(name) {
          return Err(SpecError::ReservedName {
            name: name.to_owned(),
            line: Some(Line::new(number, text)),
          });
        }
        if sections.iter().any(|section| section.base_name == name) {
          return Err(SpecError::DuplicateHierarchy {
            name: name.to_owned(),
            line: Line::new(number, text),
          });
        }

        sections.push(Section::new(name, number + 1));
        continue;
      }

      match sections.last_mut() {
        Some(section) => section.push(text),
        None if is_blank(trimmed) => {}
        None => return Err(SpecError::VariantOutsideHierarchy(Line::new(number, text))),
      }
    }

    if sections.is_empty() {
      return Err(SpecError::NoHierarchies);
    }

    Ok(Self { sections })
  }

  /// Treat the whole source as the variants of a single hierarchy
  pub fn single(base_name: &'source str, source: &'source str) -> Self {
    let mut section = Section::new(base_name, 1);
    for text in source.lines() {
      section.push(text);
    }

    Self {
      sections: vec![section],
    }
  }
}

/// The lines of a single hierarchy within a [`Document`]
#[derive(Debug)]
pub struct Section<'source> {
  /// The name of the base type
  pub base_name: &'source str,
  /// The line number of the first line in `lines`
  pub first_line: usize,
  /// The lines of the hierarchy, with comments blanked out
  pub lines: Vec<&'source str>,
}
impl<'source> Section<'source> {
  fn new(base_name: &'source str, first_line: usize) -> Self {
    Self {
      base_name,
      first_line,
      lines: Vec::new(),
    }
  }

  fn push(&mut self, text: &'source str) {
    if is_comment(text.trim()) {
      self.lines.push("");
    } else {
      self.lines.push(text);
    }
  }

  /// Parse the hierarchy, with errors located relative to the whole document
  ///
  /// # Errors
  /// If any line is malformed, or there are no variants.
  pub fn parse(&self) -> Result<AstDefinition<Unclassified>, SpecError> {
    Parser::new(self.base_name, self.first_line).parse(&self.lines)
  }
}

fn is_comment(trimmed: &str) -> bool {
  trimmed.starts_with('#')
}

fn is_blank(trimmed: &str) -> bool {
  trimmed.is_empty() || is_comment(trimmed)
}
