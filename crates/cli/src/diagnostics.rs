use astgen_model::{Line, SpecError};
use owo_colors::{OwoColorize, Style};
use std::fmt;

#[derive(Debug)]
pub enum Severity {
  Error,
  Warning,
}
pub struct Message {
  pub title: String,
  pub body: String,
  pub hint: Option<String>,
  pub severity: Severity,
}
impl Message {
  pub fn error(message: String) -> Self {
    Self {
      title: message,
      body: String::new(),
      hint: None,
      severity: Severity::Error,
    }
  }
  pub fn warning(message: String) -> Self {
    Self {
      title: message,
      body: String::new(),
      hint: None,
      severity: Severity::Warning,
    }
  }
}
impl fmt::Display for Message {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.severity {
      Severity::Error => write!(f, "{}", "✕ Error".bold().red()),
      Severity::Warning => write!(f, "{}", "⚠ Warning".bold().yellow()),
    }?;
    writeln!(f, "{} {}", ":".bold(), &self.title.bold())?;

    if !self.body.is_empty() {
      writeln!(f, "{}", &self.body)?;
    }

    if let Some(hint) = &self.hint {
      writeln!(f, "{} {}", "hint:".italic().cyan(), hint)?;
    }

    Ok(())
  }
}
impl From<&SpecError> for Message {
  fn from(error: &SpecError) -> Self {
    Self {
      title: error.title(),
      body: error.message(),
      hint: error.suggestion(),
      severity: Severity::Error,
    }
  }
}

/// Shows the line of a spec an error was found on
pub struct CodeFrame<'a> {
  title: &'a str,
  line: &'a Line,
}
impl<'a> CodeFrame<'a> {
  pub fn new(title: &'a str, line: &'a Line) -> Self {
    Self {
      title: if title == "-" { "STDIN" } else { title },
      line,
    }
  }
}
impl fmt::Display for CodeFrame<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let Line { number, text } = self.line;

    writeln!(
      f,
      "    {}{}{}{}{}",
      "╭─[".dimmed(),
      self.title,
      ":".dimmed(),
      number,
      "]".dimmed()
    )?;

    write!(f, "{number:>3} {}", "│".dimmed())?;
    if !text.is_empty() {
      write!(f, " ")?;
    }
    highlight_line(f, text)?;
    writeln!(f)?;

    write!(f, "{}", "────╯".dimmed())
  }
}

/// Dims comments, and picks out the separators and pointer markers
fn highlight_line(output: &mut dyn fmt::Write, text: &str) -> fmt::Result {
  if text.trim_start().starts_with('#') {
    return write!(output, "{}", text.dimmed());
  }

  for character in text.chars() {
    let style = match character {
      ':' | ',' => Style::new().dimmed(),
      '*' | '&' => Style::new().magenta(),
      '<' | '>' | '[' | ']' => Style::new().cyan(),
      _ => Style::new(),
    };
    write!(output, "{}", character.style(style))?;
  }

  Ok(())
}
