use crate::parser::is_keyword;
use std::{error, fmt};

/// A line of a spec, as it was written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
  /// The line number, starting at 1
  pub number: usize,
  /// The raw text of the line
  pub text: String,
}
impl Line {
  pub(crate) fn new(number: usize, text: &str) -> Self {
    Self {
      number,
      text: text.to_owned(),
    }
  }
}

/// Which rule an error broke
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
  /// A line doesn't follow the `Variant : Type name, ...` grammar
  MalformedSpec,
  /// A hierarchy has no variants
  EmptyHierarchy,
}

/// An error found whilst reading a spec
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpecError {
  /// The base name is not an identifier
  InvalidBaseName {
    /// The name given
    name: String,
    /// The header line, if the name came from a document
    line: Option<Line>,
  },
  /// No `:` between the variant name and the fields
  MissingSeparator(Line),
  /// Nothing before the `:`
  MissingVariantName(Line),
  /// A variant or field name which is not an identifier
  InvalidIdentifier {
    /// The name given
    identifier: String,
    /// The line it was found on
    line: Line,
  },
  /// Nothing between two commas
  EmptyField {
    /// The position of the field in the list, starting at 1
    position: usize,
    /// The line it was found on
    line: Line,
  },
  /// A field with a name, but no type
  MissingFieldType {
    /// The field entry as written
    entry: String,
    /// The line it was found on
    line: Line,
  },
  /// A field whose brackets don't match up, usually a comma inside a template argument list
  UnbalancedBrackets {
    /// The field entry as written
    entry: String,
    /// The line it was found on
    line: Line,
  },
  /// Two variants with the same name
  DuplicateVariant {
    /// The variant name
    name: String,
    /// The line number of the first definition
    first: usize,
    /// The line of the second definition
    line: Line,
  },
  /// Two fields with the same name in one variant
  DuplicateField {
    /// The field name
    name: String,
    /// The line it was found on
    line: Line,
  },
  /// A C++ keyword, or a name the generated code already uses
  ReservedName {
    /// The name given
    name: String,
    /// The line it was found on, if any
    line: Option<Line>,
  },
  /// A variant with the same name as its base type
  VariantNamedAfterBase {
    /// The variant name
    name: String,
    /// The line it was found on
    line: Line,
  },
  /// A field with the same name as its variant or base type
  FieldNameClash {
    /// The field name
    name: String,
    /// The line it was found on
    line: Line,
  },
  /// A field type containing a function pointer or array declarator
  UnsupportedDeclarator {
    /// The field entry as written
    entry: String,
    /// The line it was found on
    line: Line,
  },
  /// A variant line before any `[Base]` header in a document
  VariantOutsideHierarchy(Line),
  /// The same `[Base]` header twice in one document
  DuplicateHierarchy {
    /// The base name
    name: String,
    /// The second header
    line: Line,
  },
  /// A hierarchy without any variants
  EmptyHierarchy {
    /// The base name
    base_name: String,
  },
  /// A document without any hierarchies
  NoHierarchies,
}
impl SpecError {
  /// Which rule was broken
  #[must_use]
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::EmptyHierarchy { .. } | Self::NoHierarchies => ErrorKind::EmptyHierarchy,
      _ => ErrorKind::MalformedSpec,
    }
  }

  /// The title of the error message
  #[must_use]
  pub fn title(&self) -> String {
    match self {
      Self::InvalidBaseName { .. } => "Invalid Base Name".into(),
      Self::MissingSeparator(_) => "Missing Separator".into(),
      Self::MissingVariantName(_) => "Missing Variant Name".into(),
      Self::InvalidIdentifier { .. } => "Invalid Identifier".into(),
      Self::EmptyField { .. } => "Empty Field".into(),
      Self::MissingFieldType { .. } => "Missing Field Type".into(),
      Self::UnbalancedBrackets { .. } => "Unbalanced Brackets".into(),
      Self::DuplicateVariant { name, .. } => format!("Duplicate Variant `{name}`"),
      Self::DuplicateField { name, .. } => format!("Duplicate Field `{name}`"),
      Self::ReservedName { name, .. } => format!("Reserved Name `{name}`"),
      Self::VariantNamedAfterBase { .. } => "Variant Named After Base".into(),
      Self::FieldNameClash { .. } => "Field Name Clash".into(),
      Self::UnsupportedDeclarator { .. } => "Unsupported Declarator".into(),
      Self::VariantOutsideHierarchy(_) => "Variant Outside Hierarchy".into(),
      Self::DuplicateHierarchy { name, .. } => format!("Duplicate Hierarchy `{name}`"),
      Self::EmptyHierarchy { .. } => "Empty Hierarchy".into(),
      Self::NoHierarchies => "No Hierarchies".into(),
    }
  }

  /// The body of the error message describing what has gone wrong
  #[must_use]
  pub fn message(&self) -> String {
    match self {
      Self::InvalidBaseName { name, .. } if name.is_empty() => "base name is empty".into(),
      Self::InvalidBaseName { name, .. } => format!("`{name}` is not a valid base name"),
      Self::MissingSeparator(_) => "expected `:` between the variant name and its fields".into(),
      Self::MissingVariantName(_) => "expected a variant name before `:`".into(),
      Self::InvalidIdentifier { identifier, .. } => {
        format!("`{identifier}` is not a valid identifier")
      }
      Self::EmptyField { position, .. } => format!("field {position} is empty"),
      Self::MissingFieldType { entry, .. } => {
        format!("expected a type before the field name in `{entry}`")
      }
      Self::UnbalancedBrackets { entry, .. } => {
        format!("brackets are not balanced in `{entry}`")
      }
      Self::DuplicateVariant { first, .. } => format!("first defined on line {first}"),
      Self::DuplicateField { .. } => "field names must be unique within a variant".into(),
      Self::ReservedName { name, .. } if is_keyword(name) => format!("`{name}` is a C++ keyword"),
      Self::ReservedName { name, .. } => {
        format!("`{name}` is the name of the generated visitor interface")
      }
      Self::VariantNamedAfterBase { name, .. } => {
        format!("`{name}` is already the name of the base type")
      }
      Self::FieldNameClash { name, .. } => {
        format!("`{name}` is already the name of a type in the hierarchy")
      }
      Self::UnsupportedDeclarator { entry, .. } => {
        format!("function pointer and array declarators are not supported in `{entry}`")
      }
      Self::VariantOutsideHierarchy(_) => {
        "expected a `[Base]` header before the first variant".into()
      }
      Self::DuplicateHierarchy { .. } => "each hierarchy can only be defined once".into(),
      Self::EmptyHierarchy { base_name } => format!("`{base_name}` has no variants"),
      Self::NoHierarchies => "expected at least one `[Base]` header".into(),
    }
  }

  /// A suggestion for how to fix the error
  #[must_use]
  pub fn suggestion(&self) -> Option<String> {
    match self {
      Self::InvalidIdentifier { identifier, .. }
        if identifier.starts_with('*') || identifier.starts_with('&') =>
      {
        Some("attach `*` and `&` to the type, e.g. `Expr* left` rather than `Expr *left`".into())
      }
      Self::UnbalancedBrackets { .. } => {
        Some("commas inside template arguments are not supported, use a type alias".into())
      }
      Self::EmptyField { .. } => Some("remove the extra comma".into()),
      Self::ReservedName { name, .. } => Some(format!("rename it, e.g. `{name}_`")),
      Self::UnsupportedDeclarator { .. } => {
        Some("use a type alias, e.g. `using Callback = Value (*)(Value);`".into())
      }
      _ => None,
    }
  }

  /// The line the error was found on, if it relates to a single line
  #[must_use]
  pub fn line(&self) -> Option<&Line> {
    match self {
      Self::MissingSeparator(line)
      | Self::MissingVariantName(line)
      | Self::VariantOutsideHierarchy(line)
      | Self::InvalidIdentifier { line, .. }
      | Self::EmptyField { line, .. }
      | Self::MissingFieldType { line, .. }
      | Self::UnbalancedBrackets { line, .. }
      | Self::DuplicateVariant { line, .. }
      | Self::DuplicateField { line, .. }
      | Self::VariantNamedAfterBase { line, .. }
      | Self::FieldNameClash { line, .. }
      | Self::UnsupportedDeclarator { line, .. }
      | Self::DuplicateHierarchy { line, .. } => Some(line),
      Self::InvalidBaseName { line, .. } | Self::ReservedName { line, .. } => line.as_ref(),
      Self::EmptyHierarchy { .. } | Self::NoHierarchies => None,
    }
  }

  /// The title and message of the error in a combined string
  #[must_use]
  pub fn full_message(&self) -> String {
    let mut message = self.title();
    message.push('\n');
    message.push_str(&self.message());

    if let Some(suggestion) = self.suggestion() {
      message.push('\n');
      message.push_str("hint: ");
      message.push_str(&suggestion);
    }

    message
  }
}
impl fmt::Display for SpecError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.line() {
      Some(line) => write!(f, "line {}: {}", line.number, self.message()),
      None => write!(f, "{}", self.message()),
    }
  }
}
impl error::Error for SpecError {}
