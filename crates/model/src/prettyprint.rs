//! Pretty-print the code model into a human readable tree.

use crate::definition::{CodeModel, FieldDef, VariantDef};
use std::fmt;

impl fmt::Display for CodeModel {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "{}", self.base_name)?;

    for (index, variant) in self.variants.iter().enumerate() {
      let last = index + 1 == self.variants.len();
      variant.pretty(f, "", last)?;
    }

    Ok(())
  }
}

const OTHER_CHILD: &str = "│  ";
const OTHER_ENTRY: &str = "├─ ";
const FINAL_CHILD: &str = "   ";
const FINAL_ENTRY: &str = "╰─ ";

trait PrettyPrint {
  fn pretty(&self, f: &mut fmt::Formatter, prefix: &str, last: bool) -> fmt::Result;
}

impl PrettyPrint for VariantDef {
  fn pretty(&self, f: &mut fmt::Formatter, prefix: &str, last: bool) -> fmt::Result {
    let connector = if last { FINAL_ENTRY } else { OTHER_ENTRY };
    writeln!(f, "{prefix}{connector}{}", self.name)?;

    let new_prefix = format!("{prefix}{}", if last { FINAL_CHILD } else { OTHER_CHILD });
    for (index, field) in self.fields.iter().enumerate() {
      field.pretty(f, &new_prefix, index + 1 == self.fields.len())?;
    }

    Ok(())
  }
}
impl PrettyPrint for FieldDef {
  fn pretty(&self, f: &mut fmt::Formatter, prefix: &str, last: bool) -> fmt::Result {
    let connector = if last { FINAL_ENTRY } else { OTHER_ENTRY };
    writeln!(
      f,
      "{prefix}{connector}{}: {} ({})",
      self.name, self.type_expr, self.ownership
    )
  }
}
