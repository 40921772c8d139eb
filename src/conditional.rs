use regex::Regex;
use tracing::{debug, trace};

use crate::error::{CodeGenError, Result};

/// Directive counts gathered from a balanced piece of generated code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionalSummary {
  /// Number of `#if` directives
  pub opens: usize,
  /// Number of `#elseif` and `#else` directives
  pub else_branches: usize,
  /// Number of `#endif` directives
  pub ends: usize,
  /// Deepest nesting reached
  pub max_depth: usize,
}

struct OpenRegion {
  line: usize,
  seen_else: bool,
}

/// Lexical state carried from one line to the next
#[derive(Default)]
struct SourceState {
  /// Depth of nested `/* */` comments
  comment_depth: usize,
  /// Inside a `"""` string literal
  in_multiline_string: bool,
}

impl SourceState {
  fn in_code(&self) -> bool {
    self.comment_depth == 0 && !self.in_multiline_string
  }

  /// Advance past one line of Swift source.
  fn scan(&mut self, line: &str) {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
      let rest = &bytes[i..];
      if self.in_multiline_string {
        if rest.starts_with(b"\"\"\"") {
          self.in_multiline_string = false;
          i += 3;
        } else {
          i += 1;
        }
      } else if self.comment_depth > 0 {
        if rest.starts_with(b"/*") {
          self.comment_depth += 1;
          i += 2;
        } else if rest.starts_with(b"*/") {
          self.comment_depth -= 1;
          i += 2;
        } else {
          i += 1;
        }
      } else if rest.starts_with(b"//") {
        break;
      } else if rest.starts_with(b"/*") {
        self.comment_depth += 1;
        i += 2;
      } else if rest.starts_with(b"\"\"\"") {
        self.in_multiline_string = true;
        i += 3;
      } else if rest[0] == b'"' {
        // Single-line string literal: skip to the closing quote.
        i += 1;
        while i < bytes.len() && bytes[i] != b'"' {
          i += if bytes[i] == b'\\' { 2 } else { 1 };
        }
        i += 1;
      } else {
        i += 1;
      }
    }
  }
}

/// Verify that `#if` / `#elseif` / `#else` / `#endif` directives in `text` nest properly.
///
/// Only lines whose first non-blank character is `#` count as directives.
/// Lines that start inside a `/* */` comment (comments nest, as in Swift) or
/// a `"""` string literal are skipped.
pub fn check_conditionals(text: &str) -> Result<ConditionalSummary> {
  let directive = Regex::new(r"^\s*#(if|elseif|else|endif)\b").map_err(CodeGenError::Regex)?;

  let mut summary = ConditionalSummary::default();
  let mut stack: Vec<OpenRegion> = Vec::new();
  let mut state = SourceState::default();

  for (index, line) in text.lines().enumerate() {
    let line_number = index + 1;
    let in_code = state.in_code();
    state.scan(line);
    if !in_code {
      continue;
    }
    let Some(caps) = directive.captures(line) else {
      continue;
    };
    let kind = caps.get(1).map_or("", |m| m.as_str());
    trace!(line = line_number, directive = kind, "conditional directive");

    match kind {
      "if" => {
        stack.push(OpenRegion {
          line: line_number,
          seen_else: false,
        });
        summary.opens += 1;
        summary.max_depth = summary.max_depth.max(stack.len());
      }
      "elseif" | "else" => {
        let Some(region) = stack.last_mut() else {
          debug!(line = line_number, directive = kind, "directive outside #if region");
          return Err(CodeGenError::UnexpectedDirective {
            line: line_number,
            directive: format!("#{}", kind),
          });
        };
        if region.seen_else {
          return Err(CodeGenError::DuplicateElse { line: line_number });
        }
        if kind == "else" {
          region.seen_else = true;
        }
        summary.else_branches += 1;
      }
      _ => {
        if stack.pop().is_none() {
          debug!(line = line_number, "#endif outside #if region");
          return Err(CodeGenError::UnexpectedDirective {
            line: line_number,
            directive: "#endif".to_string(),
          });
        }
        summary.ends += 1;
      }
    }
  }

  if let Some(region) = stack.pop() {
    return Err(CodeGenError::UnclosedConditional { line: region.line });
  }

  Ok(summary)
}
