//! # Definition
//!
//! The code model: a hierarchy, its variants, and their fields.
//!
//! Each type carries the state of its ownership information as a type parameter.
//! The parser produces an [`AstDefinition<Unclassified>`], and [`AstDefinition::classify`]
//! turns it into a [`CodeModel`] which is what the emitter reads.

use crate::ownership::{OwnershipKind, classify};
use thin_vec::ThinVec;

/// Ownership of a field which has not been classified yet
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unclassified;

/// A hierarchy where every field has been classified
pub type CodeModel = AstDefinition<OwnershipKind>;

/// A base type and its closed set of variants
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstDefinition<O = OwnershipKind> {
  /// The name of the root type, e.g. `Expr`
  pub base_name: String,
  /// The variants, in the order they were written
  pub variants: Vec<VariantDef<O>>,
}
impl<O> AstDefinition<O> {
  /// Find a variant by name
  #[must_use]
  pub fn variant(&self, name: &str) -> Option<&VariantDef<O>> {
    self.variants.iter().find(|variant| variant.name == name)
  }

  /// The total number of fields across all variants
  #[must_use]
  pub fn field_count(&self) -> usize {
    self.variants.iter().map(|variant| variant.fields.len()).sum()
  }
}
impl AstDefinition<Unclassified> {
  /// Classify the ownership of every field.
  ///
  /// Consumes the unclassified definition, so classification always finishes
  /// before anything can read the result.
  pub fn classify(self) -> CodeModel {
    AstDefinition {
      base_name: self.base_name,
      variants: self.variants.into_iter().map(|variant| variant.classify()).collect(),
    }
  }
}

/// One concrete case of a hierarchy
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantDef<O = OwnershipKind> {
  /// Both the type name and part of the visitor method name
  pub name: String,
  /// The fields, in the order they were written. May be empty
  pub fields: ThinVec<FieldDef<O>>,
  /// The line of the spec the variant was defined on, starting at 1
  pub line: usize,
}
impl<O> VariantDef<O> {
  /// Is the variant a marker with no data?
  #[must_use]
  pub fn is_marker(&self) -> bool {
    self.fields.is_empty()
  }
}
impl VariantDef<Unclassified> {
  fn classify(self) -> VariantDef {
    VariantDef {
      name: self.name,
      fields: self.fields.into_iter().map(|field| field.classify()).collect(),
      line: self.line,
    }
  }
}
impl VariantDef {
  /// Does the variant own any of its fields?
  #[must_use]
  pub fn has_owning_fields(&self) -> bool {
    self.fields.iter().any(|field| field.needs_release())
  }

  /// The fields the variant must release, in order
  pub fn owning_fields(&self) -> impl Iterator<Item = &FieldDef> {
    self.fields.iter().filter(|field| field.needs_release())
  }
}

/// A named, typed member of a variant
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDef<O = OwnershipKind> {
  /// The type as written, never interpreted beyond ownership
  pub type_expr: String,
  /// The member name
  pub name: String,
  /// Who releases the value
  pub ownership: O,
}
impl FieldDef<Unclassified> {
  pub(crate) fn new(type_expr: &str, name: &str) -> Self {
    Self {
      type_expr: type_expr.to_owned(),
      name: name.to_owned(),
      ownership: Unclassified,
    }
  }

  fn classify(self) -> FieldDef {
    let ownership = classify(&self.type_expr);

    FieldDef {
      type_expr: self.type_expr,
      name: self.name,
      ownership,
    }
  }
}
impl FieldDef {
  /// Must the owning variant release this field?
  #[must_use]
  pub fn needs_release(&self) -> bool {
    self.ownership.needs_release()
  }
}
