use std::convert::Infallible;
use std::fs;
use std::path::Path;

use anyhow::Context as AnyhowContext;
use tracing::debug;

use crate::boilerplate::{autogenerated_warning, visibility_boilerplate, VisibilityLevel, VisibilityPart};
use crate::conditional::check_conditionals;
use crate::error::{CodeGenError, Result};
use crate::utils::ensure_ends_with_newline;

/// Assembles a generated Swift file from boilerplate and code chunks
#[derive(Debug, Clone)]
pub struct GeneratedFile {
  /// Text emitted before the banner, usually a license comment
  header: Option<String>,
  /// Whether to emit the "DO NOT EDIT" banner
  banner: bool,
  /// Body chunks in emission order
  parts: Vec<String>,
}

impl GeneratedFile {
  /// Create an empty file that starts with the banner
  pub fn new() -> Self {
    Self {
      header: None,
      banner: true,
      parts: Vec::new(),
    }
  }

  /// Toggle the "DO NOT EDIT" banner
  pub fn with_banner(mut self, banner: bool) -> Self {
    self.banner = banner;
    self
  }

  /// Set the text emitted before the banner
  pub fn with_header(mut self, header: &str) -> Self {
    self.header = Some(header.to_string());
    self
  }

  /// Append a chunk of code verbatim
  pub fn push(&mut self, code: &str) -> &mut Self {
    self.parts.push(code.to_string());
    self
  }

  /// Append one copy of a declaration per visibility level, wrapped in the
  /// single-module conditional region.
  pub fn push_visibility_variants<F>(&mut self, mut declaration: F) -> &mut Self
  where
    F: FnMut(VisibilityLevel) -> String,
  {
    match visibility_region::<Infallible, _>(|level| Ok(declaration(level))) {
      Ok(region) => self.parts.push(region),
      Err(never) => match never {},
    }
    self
  }

  /// Like [`push_visibility_variants`](Self::push_visibility_variants), for
  /// declarations that are produced by a fallible writer. Nothing is appended
  /// when any copy fails.
  pub fn try_push_visibility_variants<F>(&mut self, declaration: F) -> Result<&mut Self>
  where
    F: FnMut(VisibilityLevel) -> Result<String>,
  {
    let region = visibility_region(declaration)?;
    self.parts.push(region);
    Ok(self)
  }

  /// Render the whole file, checking that its conditional regions are balanced
  pub fn render(&self) -> Result<String> {
    let mut content = String::new();
    if let Some(ref header) = self.header {
      content.push_str(&ensure_ends_with_newline(header));
    }
    if self.banner {
      content.push_str(autogenerated_warning());
    }
    for part in &self.parts {
      if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
      }
      content.push_str(part);
    }

    let content = ensure_ends_with_newline(&content);
    check_conditionals(&content)?;
    Ok(content)
  }

  /// Write the rendered file to `path`, leaving it untouched when the
  /// content is already up to date. Returns whether the file was written.
  pub fn write_to(&self, path: &Path) -> Result<bool> {
    let content = self.render()?;

    if path.is_file() {
      let existing = fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
        .map_err(|e| write_failed(path, e))?;
      if existing == content.as_bytes() {
        debug!(path = %path.display(), "generated file unchanged");
        return Ok(false);
      }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))
        .map_err(|e| write_failed(path, e))?;
    }

    fs::write(path, &content)
      .with_context(|| format!("Failed to write to file: {}", path.display()))
      .map_err(|e| write_failed(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "generated file written");

    Ok(true)
  }
}

fn visibility_region<E, F>(mut declaration: F) -> std::result::Result<String, E>
where
  F: FnMut(VisibilityLevel) -> std::result::Result<String, E>,
{
  let mut region = String::new();
  for level in VisibilityLevel::ALL {
    region.push_str(visibility_boilerplate(level.opening_part()));
    region.push('\n');
    region.push_str(&ensure_ends_with_newline(&declaration(level)?));
  }
  region.push_str(visibility_boilerplate(VisibilityPart::End));
  region.push('\n');
  Ok(region)
}

fn write_failed(path: &Path, source: anyhow::Error) -> CodeGenError {
  CodeGenError::WriteFailed {
    path: path.to_path_buf(),
    source,
  }
}

impl Default for GeneratedFile {
  fn default() -> Self {
    Self::new()
  }
}
