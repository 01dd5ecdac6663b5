//! # Artifacts
//!
//! The generated declarations of a hierarchy, and how they are laid out into files.

use crate::config::{Config, Layout};
use crate::naming;

/// Every declaration generated for a hierarchy
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifacts {
  /// The name of the base type
  pub base_name: String,
  /// The abstract base class, including forward declarations and the visitor
  pub base: String,
  /// The visitor interface, exactly as it appears inside `base`
  pub visitor: String,
  /// The concrete variants, in spec order
  pub variants: Vec<VariantArtifact>,
}

/// The declaration of a single variant
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantArtifact {
  /// The variant name
  pub name: String,
  /// The class declaration
  pub source: String,
}

/// A file to be written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFile {
  /// The file name, without a directory
  pub name: String,
  /// The full contents of the file
  pub contents: String,
}

impl Artifacts {
  /// Lay the declarations out into files, as chosen by [`Config::layout`]
  #[must_use]
  pub fn files(&self, config: &Config) -> Vec<OutputFile> {
    match config.layout {
      Layout::SingleFile => vec![self.single_file(config)],
      Layout::PerVariant => self.file_per_variant(config),
    }
  }

  fn single_file(&self, config: &Config) -> OutputFile {
    let newline = config.line_ending.as_str();
    let mut contents = preamble(config, &config.includes);
    contents.push_str(&self.base);

    for variant in &self.variants {
      contents.push_str(newline);
      contents.push_str(&variant.source);
    }

    OutputFile {
      name: naming::base_file(&self.base_name, &config.extension),
      contents,
    }
  }

  fn file_per_variant(&self, config: &Config) -> Vec<OutputFile> {
    let base_file = naming::base_file(&self.base_name, &config.extension);
    let mut files = Vec::with_capacity(self.variants.len() + 1);

    let mut base = preamble(config, &config.includes);
    base.push_str(&self.base);
    files.push(OutputFile {
      name: base_file.clone(),
      contents: base,
    });

    for variant in &self.variants {
      let mut contents = preamble(config, &[base_file.clone()]);
      contents.push_str(&variant.source);

      files.push(OutputFile {
        name: naming::variant_file(&self.base_name, &variant.name, &config.extension),
        contents,
      });
    }

    files
  }
}

/// `#pragma once` and the includes, each group followed by a blank line
fn preamble(config: &Config, includes: &[String]) -> String {
  let newline = config.line_ending.as_str();
  let mut preamble = format!("#pragma once{newline}{newline}");

  if !includes.is_empty() {
    for include in includes {
      preamble.push_str(&include_directive(include));
      preamble.push_str(newline);
    }
    preamble.push_str(newline);
  }

  preamble
}

fn include_directive(include: &str) -> String {
  if include.starts_with('<') || include.starts_with('"') {
    format!("#include {include}")
  } else {
    format!("#include \"{include}\"")
  }
}
