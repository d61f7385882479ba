use crate::identifier;
use crate::model::Page;
use crate::validator::result::{InvalidResult, Reason, ResultType, ValidationResult};

pub const CONTEXT_NAME: &str = "name";
pub const CONTEXT_IDENTIFIER: &str = "identifier";

#[derive(Debug, Clone, Copy, Default)]
pub struct PageValidator;

impl PageValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, page: &Page) -> ValidationResult {
        if page.url.trim().is_empty() {
            return InvalidResult::new(page, ResultType::Page, Reason::PageUrlEmpty).into();
        }

        for (name, element) in &page.identifiers {
            if !identifier::is_element_identifier(element)
                && !identifier::is_descendant_dom_identifier(element)
            {
                return InvalidResult::new(page, ResultType::Page, Reason::PageInvalidIdentifier)
                    .with_context(CONTEXT_NAME, name.as_str())
                    .with_context(CONTEXT_IDENTIFIER, element.as_str())
                    .into();
            }
        }

        ValidationResult::valid(page)
    }
}
