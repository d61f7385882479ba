pub mod identifier;
pub mod model;
pub mod parser;
pub mod runner;
pub mod validator;

pub use model::{Action, Assertion, Configuration, Page, Step, Test};
pub use parser::{load_page, load_test, parse_action, parse_assertion, DocumentKind, LoadError};
pub use runner::{lint_files, LintOptions, LintOutput, OutputFormat};
pub use validator::{InvalidResult, Reason, ResultType, ValidationResult};
