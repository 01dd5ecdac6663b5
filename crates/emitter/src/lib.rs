//! # Emitter
//!
//! Generate C++ visitor-pattern declarations from a classified code model.
//!
//! For each hierarchy it generates:
//! - an abstract base class template, with forward declarations of every variant
//! - a `Visitor` interface nested in the base, with one method per variant
//! - a class per variant, with its fields, a constructor, `accept`, and a
//!   destructor which deletes the fields it owns
//!
//! Emitting can't fail. All errors are found whilst parsing, before anything
//! is generated.

#![deny(unsafe_code)]

pub mod artifacts;
pub mod config;
mod emitter;
pub mod naming;
mod writer;


use astgen_model::{CodeModel, SpecError};

/// Generate the declarations for a classified hierarchy.
///
/// # Examples
/// ```
/// use astgen_emitter::{emit, EmitterConfig};
///
/// let model = astgen_model::parse("Expr", &["Literal : Object value"]).unwrap().classify();
/// let artifacts = emit(&model, &EmitterConfig::default());
///
/// assert!(artifacts.visitor.contains("visitLiteralExpr"));
/// ```
pub fn emit(model: &CodeModel, config: &EmitterConfig) -> Artifacts {
  emitter::Emitter::new(model, config).emit()
}

/// Parse, classify, and emit a hierarchy in one go.
///
/// Either every declaration is generated, or an error is returned and nothing is.
///
/// # Examples
/// ```
/// use astgen_emitter::{generate, EmitterConfig};
///
/// let config = EmitterConfig::default();
/// let artifacts = generate("Expr", &["Binary : Expr* left, Token oper, Expr* right"], &config).unwrap();
///
/// assert!(artifacts.variants[0].source.contains("delete left;"));
/// ```
///
/// # Errors
/// If the spec is malformed, or has no variants.
pub fn generate(
  base_name: &str,
  lines: &[&str],
  config: &EmitterConfig,
) -> Result<Artifacts, SpecError> {
  let model = astgen_model::parse(base_name, lines)?.classify();
  Ok(emit(&model, config))
}

pub use artifacts::{Artifacts, OutputFile, VariantArtifact};
pub use config::Config as EmitterConfig;
