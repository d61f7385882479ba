pub mod document;
pub mod errors;
pub mod lexer;
mod parse;

pub use document::{load_page, load_test, DocumentKind};
pub use errors::LoadError;
pub use parse::{parse_action, parse_assertion};
