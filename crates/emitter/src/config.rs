//! The configuration options for the emitter
use std::fmt;

/// Configuration for the emitter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
  /// The indentation to use for each nesting level
  pub indentation: Indentation,
  /// The line ending to use
  pub line_ending: LineEnding,
  /// The template parameter visitors return, e.g. `R`
  pub result_type: String,
  /// Headers to include at the top of the base file
  pub includes: Vec<String>,
  /// How the output is split into files
  pub layout: Layout,
  /// The extension of the generated files, without the dot
  pub extension: String,
  /// Add doc comments to the generated declarations
  pub doc_comments: bool,
}
impl Default for Config {
  fn default() -> Self {
    Self {
      indentation: Indentation::Space(2),
      line_ending: LineEnding::LineFeed,
      result_type: "R".to_owned(),
      includes: vec!["Token.h".to_owned()],
      layout: Layout::SingleFile,
      extension: "h".to_owned(),
      doc_comments: false,
    }
  }
}

/// How generated declarations are split into files
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
  /// The base and every variant in `<Base>.<ext>`
  #[default]
  SingleFile,
  /// The base in `<Base>.<ext>`, each variant in `<Base><Variant>.<ext>`
  PerVariant,
}

/// The indentation to use when printing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indentation {
  /// Use this number of spaces for indentation
  Space(u16),
  /// Use tabs for indentation
  Tab,
}
impl From<u16> for Indentation {
  /// The number of spaces to use for indentation. If 0 use tabs.
  fn from(n: u16) -> Self {
    if n == 0 { Self::Tab } else { Self::Space(n) }
  }
}
impl fmt::Display for Indentation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Space(n) => (0..*n).try_for_each(|_| write!(f, " ")),
      Self::Tab => write!(f, "\t"),
    }
  }
}

/// The line endings of the generated files
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum LineEnding {
  /// `\n`, so output is stable across platforms
  #[default]
  LineFeed,
  /// `\r\n`
  CarriageReturnLineFeed,
  /// Whatever the platform uses
  Native,
}
impl LineEnding {
  #[inline]
  pub(crate) const fn as_str(self) -> &'static str {
    match self {
      LineEnding::LineFeed => "\n",
      LineEnding::CarriageReturnLineFeed => "\r\n",

      #[cfg(not(target_os = "windows"))]
      LineEnding::Native => "\n",
      #[cfg(target_os = "windows")]
      LineEnding::Native => "\r\n",
    }
  }
}
