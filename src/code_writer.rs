use std::io::Write;

use crate::boilerplate::{autogenerated_warning, visibility_boilerplate, VisibilityPart};
use crate::error::{CodeGenError, Result};
use crate::utils::repeat_str;

/// A writer for generating Swift code with proper indentation and formatting
pub struct CodeWriter<W: Write> {
  /// The underlying writer
  writer: W,
  /// Current indentation level
  indent_level: usize,
  /// Number of spaces per indentation level
  indent_size: usize,
  /// Whether to add a newline after each write
  with_newline: bool,
}

impl<W: Write> CodeWriter<W> {
  /// Create a new CodeWriter with default settings
  pub fn new(writer: W) -> Self {
    Self::with_options(writer, 4, true)
  }

  /// Create a new CodeWriter with custom settings
  pub fn with_options(writer: W, indent_size: usize, with_newline: bool) -> Self {
    Self {
      writer,
      indent_level: 0,
      indent_size,
      with_newline,
    }
  }

  /// Get the indentation size
  pub fn indent_size(&self) -> usize {
    self.indent_size
  }

  /// Increase the indentation level
  pub fn indent(&mut self) {
    self.indent_level += 1;
  }

  /// Decrease the indentation level
  pub fn dedent(&mut self) {
    self.indent_level = self.indent_level.saturating_sub(1);
  }

  /// Get the current indentation level
  pub fn indent_level(&self) -> usize {
    self.indent_level
  }

  fn put(&mut self, bytes: &[u8]) -> Result<()> {
    self.writer.write_all(bytes).map_err(CodeGenError::Io)
  }

  /// Write a string with the current indentation
  pub fn write(&mut self, content: &str) -> Result<()> {
    if content.is_empty() {
      return if self.with_newline {
        self.put(b"\n")
      } else {
        Ok(())
      };
    }

    let indent = repeat_str(" ", self.indent_level * self.indent_size);

    for (i, line) in content.lines().enumerate() {
      if i > 0 {
        self.put(b"\n")?;
      }

      if !line.is_empty() {
        self.put(indent.as_bytes())?;
        self.put(line.as_bytes())?;
      }
    }

    if content.ends_with('\n') || self.with_newline {
      self.put(b"\n")
    } else {
      Ok(())
    }
  }

  /// Write a string with the current indentation and a newline
  pub fn writeln(&mut self, content: &str) -> Result<()> {
    let prev_newline = self.with_newline;
    self.with_newline = true;
    let result = self.write(content);
    self.with_newline = prev_newline;
    result
  }

  /// Write text exactly as given, ignoring indentation
  pub fn write_raw(&mut self, content: &str) -> Result<()> {
    self.put(content.as_bytes())
  }

  /// Write a newline
  pub fn newline(&mut self) -> Result<()> {
    self.put(b"\n")
  }

  /// Write a line comment, one `//` per line
  pub fn write_comment(&mut self, comment: &str) -> Result<()> {
    if comment.is_empty() {
      return self.writeln("//");
    }
    for line in comment.lines() {
      if line.is_empty() {
        self.writeln("//")?;
      } else {
        self.writeln(&format!("// {}", line))?;
      }
    }
    Ok(())
  }

  /// Write a `// MARK: -` separator
  pub fn write_mark(&mut self, title: &str) -> Result<()> {
    self.writeln(&format!("// MARK: - {}", title))
  }

  /// Write an import statement
  pub fn write_import(&mut self, module: &str) -> Result<()> {
    self.writeln(&format!("import {}", module))
  }

  // Compiler directives always start at column zero.

  /// Write an `#if` directive
  pub fn write_if(&mut self, flag: &str) -> Result<()> {
    self.write_raw(&format!("#if {}\n", flag))
  }

  /// Write an `#else` directive
  pub fn write_else(&mut self, flag: &str) -> Result<()> {
    self.write_raw(&format!("#else // !{}\n", flag))
  }

  /// Write an `#endif` directive
  pub fn write_endif(&mut self, flag: &str) -> Result<()> {
    self.write_raw(&format!("#endif // {}\n", flag))
  }

  /// Write the "DO NOT EDIT" banner
  pub fn write_autogenerated_warning(&mut self) -> Result<()> {
    self.write_raw(autogenerated_warning())
  }

  /// Write one fragment of the single-module conditional region
  pub fn write_visibility_boilerplate(&mut self, part: VisibilityPart) -> Result<()> {
    self.write_raw(visibility_boilerplate(part))?;
    self.newline()
  }

  /// Flush the underlying writer
  pub fn flush(&mut self) -> Result<()> {
    self.writer.flush().map_err(CodeGenError::Io)
  }

  /// Consume the writer, returning the underlying sink
  pub fn into_inner(self) -> W {
    self.writer
  }
}
