use crate::definition::{AstDefinition, FieldDef, Unclassified, VariantDef};
use crate::error::{Line, SpecError};
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use thin_vec::ThinVec;

/// Parses the lines of a single hierarchy.
///
/// Line numbers in errors start at `first_line`, so a section of a larger
/// document can report positions relative to the whole file.
pub(crate) struct Parser<'a> {
  base_name: &'a str,
  first_line: usize,

  variants: Vec<VariantDef<Unclassified>>,
  variant_lines: HashMap<&'a str, usize>,
}
impl<'a> Parser<'a> {
  pub(crate) fn new(base_name: &'a str, first_line: usize) -> Self {
    Self {
      base_name,
      first_line,
      variants: Vec::new(),
      variant_lines: HashMap::default(),
    }
  }

  pub(crate) fn parse(
    mut self,
    lines: &[&'a str],
  ) -> Result<AstDefinition<Unclassified>, SpecError> {
    if !is_identifier(self.base_name) {
      return Err(SpecError::InvalidBaseName {
        name: self.base_name.to_owned(),
        line: None,
      });
    }
    if is_reserved(self.base_name) {
      return Err(SpecError::ReservedName {
        name: self.base_name.to_owned(),
        line: None,
      });
    }

    for (index, &text) in lines.iter().enumerate() {
      if text.trim().is_empty() {
        continue;
      }

      let line_number = self.first_line + index;
      let variant = self.variant(text, line_number)?;
      self.variants.push(variant);
    }

    if self.variants.is_empty() {
      return Err(SpecError::EmptyHierarchy {
        base_name: self.base_name.to_owned(),
      });
    }

    Ok(AstDefinition {
      base_name: self.base_name.to_owned(),
      variants: self.variants,
    })
  }

  fn variant(
    &mut self,
    text: &'a str,
    line_number: usize,
  ) -> Result<VariantDef<Unclassified>, SpecError> {
    let line = || Line::new(line_number, text);

    let Some((name, field_list)) = text.split_once(':') else {
      return Err(SpecError::MissingSeparator(line()));
    };
    let name = name.trim();
    let field_list = field_list.trim();

    if name.is_empty() {
      return Err(SpecError::MissingVariantName(line()));
    }
    if !is_identifier(name) {
      return Err(SpecError::InvalidIdentifier {
        identifier: name.to_owned(),
        line: line(),
      });
    }
    if is_reserved(name) {
      return Err(SpecError::ReservedName {
        name: name.to_owned(),
        line: Some(line()),
      });
    }
    if name == self.base_name {
      return Err(SpecError::VariantNamedAfterBase {
        name: name.to_owned(),
        line: line(),
      });
    }
    if let Some(&first) = self.variant_lines.get(name) {
      return Err(SpecError::DuplicateVariant {
        name: name.to_owned(),
        first,
        line: line(),
      });
    }

    let fields = if field_list.is_empty() {
      ThinVec::new()
    } else {
      fields(field_list, [name, self.base_name], &line)?
    };

    self.variant_lines.insert(name, line_number);
    Ok(VariantDef {
      name: name.to_owned(),
      fields,
      line: line_number,
    })
  }
}

/// Parse the fields of a variant. `type_names` are the variant and base names,
/// which fields can't shadow
fn fields(
  field_list: &str,
  type_names: [&str; 2],
  line: &impl Fn() -> Line,
) -> Result<ThinVec<FieldDef<Unclassified>>, SpecError> {
  let mut fields = ThinVec::new();
  let mut names = HashSet::default();

  for (index, entry) in field_list.split(',').enumerate() {
    let entry = entry.trim();

    if entry.is_empty() {
      return Err(SpecError::EmptyField {
        position: index + 1,
        line: line(),
      });
    }
    if !brackets_balanced(entry) {
      return Err(SpecError::UnbalancedBrackets {
        entry: entry.to_owned(),
        line: line(),
      });
    }
    if entry.contains(['(', ')', '[', ']']) {
      return Err(SpecError::UnsupportedDeclarator {
        entry: entry.to_owned(),
        line: line(),
      });
    }

    let field = field(entry, line)?;
    if type_names.contains(&field.name.as_str()) {
      return Err(SpecError::FieldNameClash {
        name: field.name,
        line: line(),
      });
    }
    if !names.insert(field.name.clone()) {
      return Err(SpecError::DuplicateField {
        name: field.name,
        line: line(),
      });
    }
    fields.push(field);
  }

  Ok(fields)
}

/// The name is the final whitespace separated token, the type is everything before it
fn field(entry: &str, line: &impl Fn() -> Line) -> Result<FieldDef<Unclassified>, SpecError> {
  let (type_expr, name) = match entry.rsplit_once(char::is_whitespace) {
    Some((type_expr, name)) => (type_expr.trim(), name),
    None => ("", entry),
  };

  if type_expr.is_empty() {
    return Err(SpecError::MissingFieldType {
      entry: entry.to_owned(),
      line: line(),
    });
  }
  if !is_identifier(name) {
    return Err(SpecError::InvalidIdentifier {
      identifier: name.to_owned(),
      line: line(),
    });
  }
  if is_reserved(name) {
    return Err(SpecError::ReservedName {
      name: name.to_owned(),
      line: Some(line()),
    });
  }

  Ok(FieldDef::new(type_expr, name))
}

fn brackets_balanced(entry: &str) -> bool {
  let mut stack = Vec::new();

  for character in entry.chars() {
    match character {
      '<' | '(' | '[' => stack.push(character),
      '>' if stack.pop() != Some('<') => return false,
      ')' if stack.pop() != Some('(') => return false,
      ']' if stack.pop() != Some('[') => return false,
      _ => {}
    }
  }

  stack.is_empty()
}

/// Is the string a C-style identifier?
#[must_use]
pub fn is_identifier(name: &str) -> bool {
  let mut characters = name.chars();

  match characters.next() {
    Some(first) if first.is_ascii_alphabetic() || first == '_' => {
      characters.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
    _ => false,
  }
}

/// The name of the visitor interface nested in every base class
pub const VISITOR_NAME: &str = "Visitor";

/// C++ keywords, including the alternative operator spellings
pub const KEYWORDS: &[&str] = &[
  "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
  "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
  "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
  "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
  "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
  "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
  "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
  "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
  "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
  "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
  "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// Is the name a C++ keyword?
#[must_use]
pub fn is_keyword(name: &str) -> bool {
  KEYWORDS.contains(&name)
}

/// Can't be used as a name in the generated code, either a keyword or [`VISITOR_NAME`]
#[must_use]
pub fn is_reserved(name: &str) -> bool {
  name == VISITOR_NAME || is_keyword(name)
}
