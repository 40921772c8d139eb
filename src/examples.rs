use anyhow::Context as AnyhowContext;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::boilerplate::{VisibilityLevel, VisibilityPart};
use crate::code_writer::CodeWriter;
use crate::error::Result;
use crate::generated_file::GeneratedFile;

const EXAMPLE_HEADER: &str = "Sample output of the single-module visibility pattern.";
const EXAMPLE_IMPORT: &str = "Swift";

/// The declaration duplicated under each visibility level
fn write_declaration<W: Write>(writer: &mut CodeWriter<W>, level: VisibilityLevel) -> Result<()> {
  writer.writeln("extension Int {")?;
  writer.indent();
  writer.writeln("@inlinable")?;
  writer.writeln(&format!("{} var _isPowerOfTwo: Bool {{", level))?;
  writer.indent();
  writer.writeln("self > 0 && self & (self &- 1) == 0")?;
  writer.dedent();
  writer.writeln("}")?;
  writer.dedent();
  writer.writeln("}")
}

fn declaration(level: VisibilityLevel) -> Result<String> {
  let mut writer = CodeWriter::new(Vec::new());
  write_declaration(&mut writer, level)?;
  let text = String::from_utf8(writer.into_inner()).context("Declaration is not valid UTF-8")?;
  Ok(text)
}

/// Example of generating a Swift source file with `CodeWriter`
pub fn generate_example_source(output_path: &Path) -> Result<()> {
  let file = File::create(output_path)
    .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;
  let mut writer = CodeWriter::new(BufWriter::new(file));

  writer.write_comment(EXAMPLE_HEADER)?;
  writer.write_autogenerated_warning()?;
  writer.write_import(EXAMPLE_IMPORT)?;

  for level in VisibilityLevel::ALL {
    writer.write_visibility_boilerplate(level.opening_part())?;
    write_declaration(&mut writer, level)?;
  }
  writer.write_visibility_boilerplate(VisibilityPart::End)?;

  writer.flush()?;

  Ok(())
}

/// The same file as [`generate_example_source`], assembled in memory
pub fn example_source() -> Result<String> {
  let mut file = GeneratedFile::new().with_header(&format!("// {}", EXAMPLE_HEADER));
  file.push(&format!("import {}", EXAMPLE_IMPORT));
  file.try_push_visibility_variants(declaration)?;
  file.render()
}
