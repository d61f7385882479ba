use crate::identifier;
use crate::model::Assertion;
use crate::validator::result::{InvalidResult, Reason, ResultType, ValidationResult};
use crate::validator::value::ValueValidator;

pub const CONTEXT_OPERATOR: &str = "operator";

pub const VALID_OPERATORS: &[&str] = &[
    "is",
    "is-not",
    "exists",
    "not-exists",
    "includes",
    "excludes",
    "matches",
];

/// The value grammar widened with every DOM identifier shape, including
/// descendant attribute identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssertionContentValidator {
    value_validator: ValueValidator,
}

impl AssertionContentValidator {
    pub fn new(value_validator: ValueValidator) -> Self {
        Self { value_validator }
    }

    pub fn validate(&self, content: &str) -> ValidationResult {
        if identifier::is_dom_or_descendant_dom_identifier(content) {
            return ValidationResult::valid(content);
        }

        self.value_validator.validate(content)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AssertionValidator {
    content_validator: AssertionContentValidator,
}

impl AssertionValidator {
    pub fn new(content_validator: AssertionContentValidator) -> Self {
        Self { content_validator }
    }

    pub fn validate(&self, assertion: &Assertion) -> ValidationResult {
        if let ValidationResult::Invalid(cause) =
            self.content_validator.validate(&assertion.identifier)
        {
            return Self::invalid(assertion, Reason::AssertionInvalidIdentifier)
                .with_cause(cause)
                .into();
        }

        if !VALID_OPERATORS.contains(&assertion.operator.as_str()) {
            return Self::invalid(assertion, Reason::AssertionInvalidOperator)
                .with_context(CONTEXT_OPERATOR, assertion.operator.as_str())
                .into();
        }

        if assertion.is_comparison() {
            let value = assertion.value.as_deref().unwrap_or_default();
            if let ValidationResult::Invalid(cause) = self.content_validator.validate(value) {
                return Self::invalid(assertion, Reason::AssertionInvalidValue)
                    .with_cause(cause)
                    .into();
            }
        }

        ValidationResult::valid(assertion)
    }

    fn invalid(assertion: &Assertion, reason: Reason) -> InvalidResult {
        InvalidResult::new(assertion, ResultType::Assertion, reason)
    }
}
