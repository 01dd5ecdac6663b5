use crate::config::Config;
use std::fmt::Write;

/// Builds up indented source text, line by line
pub(crate) struct CodeWriter<'config> {
  config: &'config Config,
  output: String,
  depth: usize,
}
impl<'config> CodeWriter<'config> {
  pub(crate) fn new(config: &'config Config) -> Self {
    Self {
      config,
      output: String::new(),
      depth: 0,
    }
  }

  /// Write a line at the current depth. Empty lines have no indentation
  pub(crate) fn line(&mut self, text: &str) {
    if !text.is_empty() {
      for _ in 0..self.depth {
        // writing to a string can't fail
        let _ = write!(self.output, "{}", self.config.indentation);
      }
      self.output.push_str(text);
    }
    self.output.push_str(self.config.line_ending.as_str());
  }

  /// Write a line one level shallower, such as an access specifier
  pub(crate) fn label(&mut self, text: &str) {
    let depth = self.depth;
    self.depth = depth.saturating_sub(1);
    self.line(text);
    self.depth = depth;
  }

  /// Write an empty line
  pub(crate) fn blank(&mut self) {
    self.line("");
  }

  /// Write a doc comment, if they are enabled
  pub(crate) fn doc(&mut self, text: &str) {
    if self.config.doc_comments {
      self.line(&format!("/// {text}"));
    }
  }

  /// Insert text which has already been indented and terminated
  pub(crate) fn raw(&mut self, text: &str) {
    self.output.push_str(text);
  }

  /// Run `body` one level deeper
  pub(crate) fn indented(&mut self, body: impl FnOnce(&mut Self)) {
    self.depth += 1;
    body(self);
    self.depth -= 1;
  }

  /// Write a braced block, with the header and braces on their own lines
  pub(crate) fn block(&mut self, header: &str, close: &str, body: impl FnOnce(&mut Self)) {
    self.line(header);
    self.line("{");
    self.indented(body);
    self.line(close);
  }

  /// Start writing at a given depth
  pub(crate) fn at_depth(mut self, depth: usize) -> Self {
    self.depth = depth;
    self
  }

  pub(crate) fn finish(self) -> String {
    self.output
  }
}
