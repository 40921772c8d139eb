// Boilerplate and writers for generated Swift sources

mod boilerplate;
mod code_writer;
mod conditional;
mod error;
pub mod examples;
mod generated_file;
mod utils;

pub use boilerplate::{
  autogenerated_warning, visibility_boilerplate, visibility_boilerplate_for, VisibilityLevel,
  VisibilityPart, SINGLE_MODULE_FLAG, VISIBILITY_LEVELS,
};
pub use code_writer::CodeWriter;
pub use conditional::{check_conditionals, ConditionalSummary};
pub use error::{CodeGenError, Result};
pub use examples::{example_source, generate_example_source};
pub use generated_file::GeneratedFile;
