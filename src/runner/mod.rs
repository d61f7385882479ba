pub mod executor;
mod files;
pub mod reporter;

pub use executor::{lint_document, lint_file, lint_files, LintOptions};
pub use files::{resolve_patterns, resolve_patterns_in};
pub use reporter::{LintOutput, OutputFormat};
