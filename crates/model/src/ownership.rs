//! # Ownership
//!
//! Classify field type expressions by who is responsible for releasing them.

use std::fmt;

/// Identifiers which mark a raw pointer as not owning the value it points to.
///
/// `observer_ptr` is the library wrapper, `unowned` is a qualifier macro which
/// expands to nothing in the generated code.
pub const NON_OWNING_MARKERS: [&str; 2] = ["observer_ptr", "unowned"];

/// Who is responsible for releasing the value held in a field
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OwnershipKind {
  /// A raw pointer the variant owns, and must delete when destroyed
  Owning,
  /// A reference (or non-owning pointer) to a value owned elsewhere
  Borrowing,
  /// Held by value, released automatically with the variant
  Value,
}
impl OwnershipKind {
  /// Does the owning variant have to release this field explicitly?
  #[must_use]
  pub const fn needs_release(self) -> bool {
    matches!(self, Self::Owning)
  }

  /// Lowercase name of the kind
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Owning => "owning",
      Self::Borrowing => "borrowing",
      Self::Value => "value",
    }
  }
}
impl fmt::Display for OwnershipKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Classify a field's type expression.
///
/// A raw pointer (`*`) is owning, unless the type also carries one of the
/// [`NON_OWNING_MARKERS`], in which case it is borrowing. Otherwise a reference
/// (`&`) is borrowing, and anything else is a value.
///
/// # Examples
/// ```
/// use astgen_model::{classify, OwnershipKind};
///
/// assert_eq!(classify("Expr*"), OwnershipKind::Owning);
/// assert_eq!(classify("unowned Expr*"), OwnershipKind::Borrowing);
/// assert_eq!(classify("const Token&"), OwnershipKind::Borrowing);
/// assert_eq!(classify("Token"), OwnershipKind::Value);
/// ```
pub fn classify(type_expr: &str) -> OwnershipKind {
  if type_expr.contains('*') {
    if has_non_owning_marker(type_expr) {
      OwnershipKind::Borrowing
    } else {
      OwnershipKind::Owning
    }
  } else if type_expr.contains('&') {
    OwnershipKind::Borrowing
  } else {
    OwnershipKind::Value
  }
}

fn has_non_owning_marker(type_expr: &str) -> bool {
  identifiers(type_expr).any(|identifier| NON_OWNING_MARKERS.contains(&identifier))
}

/// The identifier-like words of a type expression, e.g. `std`, `vector`, `Expr`
fn identifiers(type_expr: &str) -> impl Iterator<Item = &str> {
  type_expr
    .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
    .filter(|word| !word.is_empty())
}
