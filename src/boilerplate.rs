use std::fmt;
use std::str::FromStr;

use crate::error::{CodeGenError, Result};

/// Build flag that is defined when all collection modules are compiled as one unit
pub const SINGLE_MODULE_FLAG: &str = "COLLECTIONS_SINGLE_MODULE";

/// Textual names of the visibility levels, in emission order
pub const VISIBILITY_LEVELS: [&str; 2] = ["internal", "public"];

const AUTOGENERATED_WARNING: &str = "
// #############################################################################
// #                                                                           #
// #            DO NOT EDIT THIS FILE; IT IS AUTOGENERATED.                    #
// #                                                                           #
// #############################################################################
";

const SINGLE_MODULE_OPEN: &str = "
// In single module mode, we need these declarations to be internal,
// but in regular builds we want them to be public. Unfortunately
// the current best way to do this is to duplicate all definitions.
#if COLLECTIONS_SINGLE_MODULE";

const SINGLE_MODULE_ELSE: &str = "#else // !COLLECTIONS_SINGLE_MODULE";

const SINGLE_MODULE_END: &str = "#endif // COLLECTIONS_SINGLE_MODULE";

/// The framed "DO NOT EDIT" banner prepended to generated files
pub fn autogenerated_warning() -> &'static str {
  AUTOGENERATED_WARNING
}

/// One of the three fragments of the single-module conditional region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibilityPart {
  /// Rationale comment and `#if` guard; precedes the `internal` copy
  Internal,
  /// `#else` branch; precedes the `public` copy
  Public,
  /// `#endif`; closes the region
  End,
}

impl VisibilityPart {
  /// All parts in the order they appear in generated output
  pub const ALL: [VisibilityPart; 3] = [
    VisibilityPart::Internal,
    VisibilityPart::Public,
    VisibilityPart::End,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      VisibilityPart::Internal => "internal",
      VisibilityPart::Public => "public",
      VisibilityPart::End => "end",
    }
  }
}

impl fmt::Display for VisibilityPart {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for VisibilityPart {
  type Err = CodeGenError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "internal" => Ok(VisibilityPart::Internal),
      "public" => Ok(VisibilityPart::Public),
      "end" => Ok(VisibilityPart::End),
      other => Err(CodeGenError::UnknownVisibilityPart(other.to_string())),
    }
  }
}

/// Access level of one copy of a duplicated declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibilityLevel {
  Internal,
  Public,
}

impl VisibilityLevel {
  /// Levels in emission order: the single-module copy first
  pub const ALL: [VisibilityLevel; 2] = [VisibilityLevel::Internal, VisibilityLevel::Public];

  /// The Swift access modifier for this level
  pub fn keyword(self) -> &'static str {
    match self {
      VisibilityLevel::Internal => VISIBILITY_LEVELS[0],
      VisibilityLevel::Public => VISIBILITY_LEVELS[1],
    }
  }

  /// The boilerplate fragment emitted right before this level's copy
  pub fn opening_part(self) -> VisibilityPart {
    match self {
      VisibilityLevel::Internal => VisibilityPart::Internal,
      VisibilityLevel::Public => VisibilityPart::Public,
    }
  }
}

impl fmt::Display for VisibilityLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.keyword())
  }
}

/// Fixed text for one fragment of the single-module conditional region
pub fn visibility_boilerplate(part: VisibilityPart) -> &'static str {
  match part {
    VisibilityPart::Internal => SINGLE_MODULE_OPEN,
    VisibilityPart::Public => SINGLE_MODULE_ELSE,
    VisibilityPart::End => SINGLE_MODULE_END,
  }
}

/// Like [`visibility_boilerplate`], but takes the part by name.
///
/// Names outside `internal`, `public` and `end` are rejected with
/// [`CodeGenError::UnknownVisibilityPart`].
pub fn visibility_boilerplate_for(part: &str) -> Result<&'static str> {
  part.parse::<VisibilityPart>().map(visibility_boilerplate)
}
