use crate::identifier;
use crate::model::Action;
use crate::validator::result::{InvalidResult, Reason, ResultType, ValidationResult};
use crate::validator::value::ValueValidator;

pub const VALID_TYPES: &[&str] = &[
    "click", "set", "submit", "wait", "wait-for", "back", "forward", "reload",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ActionValidator {
    value_validator: ValueValidator,
}

impl ActionValidator {
    pub fn new(value_validator: ValueValidator) -> Self {
        Self { value_validator }
    }

    /// Identifier, then value or duration, then type; the first failure wins.
    pub fn validate(&self, action: &Action) -> ValidationResult {
        if action.is_interaction() {
            let identifier = action.identifier().unwrap_or_default();
            if !identifier::is_element_identifier(identifier)
                && !identifier::is_descendant_dom_identifier(identifier)
            {
                return Self::invalid(action, Reason::ActionInvalidIdentifier).into();
            }
        }

        if action.is_input() {
            let value = action.value().unwrap_or_default();
            if let ValidationResult::Invalid(cause) = self.value_validator.validate(value) {
                return Self::invalid(action, Reason::ActionInvalidValue)
                    .with_cause(cause)
                    .into();
            }
        }

        if action.is_wait() {
            let duration = quote_bare_number(action.duration().unwrap_or_default());
            if let ValidationResult::Invalid(cause) = self.value_validator.validate(&duration) {
                return Self::invalid(action, Reason::ActionInvalidValue)
                    .with_cause(cause)
                    .into();
            }
        }

        if !VALID_TYPES.contains(&action.action_type.as_str()) {
            return Self::invalid(action, Reason::ActionInvalidType).into();
        }

        ValidationResult::valid(action)
    }

    fn invalid(action: &Action, reason: Reason) -> InvalidResult {
        InvalidResult::new(action, ResultType::Action, reason)
    }
}

/// `1` is shorthand for the literal `"1"`.
fn quote_bare_number(duration: &str) -> String {
    if !duration.is_empty() && duration.chars().all(|c| c.is_ascii_digit()) {
        format!("\"{}\"", duration)
    } else {
        duration.to_string()
    }
}
