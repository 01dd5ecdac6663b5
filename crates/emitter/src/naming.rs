//! # Naming
//!
//! Every name which appears in more than one generated declaration is spelled here.
//! The visitor interface and each variant's `accept` must agree on method names,
//! so both call [`visit_method`] rather than formatting the name themselves.

/// The visitor method for a variant, e.g. `visitBinaryExpr`
#[must_use]
pub fn visit_method(variant: &str, base_name: &str) -> String {
  format!("visit{variant}{base_name}")
}

/// The name of the parameter of each visitor method, e.g. `expr`.
///
/// Gets a trailing `_` if the lowercase name is a keyword, so `Class` gives `class_`
#[must_use]
pub fn visitor_parameter(base_name: &str) -> String {
  let parameter = base_name.to_lowercase();

  if astgen_model::is_keyword(&parameter) {
    format!("{parameter}_")
  } else {
    parameter
  }
}

/// The base type with its template argument, e.g. `Expr<R>`
#[must_use]
pub fn base_template(base_name: &str, result_type: &str) -> String {
  format!("{base_name}<{result_type}>")
}

/// A variant nested in the base type, e.g. `Expr<R>::Binary`
#[must_use]
pub fn qualified_variant(base_name: &str, variant: &str, result_type: &str) -> String {
  format!("{}::{variant}", base_template(base_name, result_type))
}

/// The file holding the base declaration, e.g. `Expr.h`
#[must_use]
pub fn base_file(base_name: &str, extension: &str) -> String {
  format!("{base_name}.{extension}")
}

/// The file holding a single variant, e.g. `ExprBinary.h`
#[must_use]
pub fn variant_file(base_name: &str, variant: &str, extension: &str) -> String {
  format!("{base_name}{variant}.{extension}")
}
