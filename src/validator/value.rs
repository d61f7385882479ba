use crate::identifier;
use crate::model::DataParameter;
use crate::validator::result::{InvalidResult, Reason, ResultType, ValidationResult};

const QUOTE: char = '"';
const ESCAPE: char = '\\';

const ENVIRONMENT_PARAMETER_PREFIX: &str = "$env.";
const BROWSER_PROPERTY_PREFIX: &str = "$browser.";
const PAGE_PROPERTY_PREFIX: &str = "$page.";

const BROWSER_PROPERTIES: &[&str] = &["size"];
const PAGE_PROPERTIES: &[&str] = &["title", "url"];

/// `"..."` where the only unescaped quote after the opening one is the last character.
pub fn is_literal(value: &str) -> bool {
    let value = value.trim();
    let mut characters = value.chars();
    if characters.next() != Some(QUOTE) {
        return false;
    }

    let characters: Vec<char> = characters.collect();
    let mut preceding_escapes = 0usize;

    for (index, character) in characters.iter().enumerate() {
        if *character == QUOTE && preceding_escapes % 2 == 0 && index == characters.len() - 1 {
            return true;
        }

        if *character == ESCAPE {
            preceding_escapes += 1;
        } else {
            preceding_escapes = 0;
        }
    }

    false
}

pub fn is_environment_parameter(value: &str) -> bool {
    matches!(
        value.strip_prefix(ENVIRONMENT_PARAMETER_PREFIX),
        Some(name) if !name.is_empty() && !name.contains('.')
    )
}

/// Decides which variant of the value grammar a string belongs to.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueValidator;

impl ValueValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, value: &str) -> ValidationResult {
        if identifier::is_dom_identifier(value) || identifier::is_descendant_dom_identifier(value) {
            return ValidationResult::valid(value);
        }

        if DataParameter::is(value) || is_environment_parameter(value) || is_literal(value) {
            return ValidationResult::valid(value);
        }

        if let Some(property) = value.strip_prefix(BROWSER_PROPERTY_PREFIX) {
            return Self::validate_property(value, property, BROWSER_PROPERTIES);
        }

        if let Some(property) = value.strip_prefix(PAGE_PROPERTY_PREFIX) {
            return Self::validate_property(value, property, PAGE_PROPERTIES);
        }

        InvalidResult::new(value, ResultType::Value, Reason::ValueInvalid).into()
    }

    fn validate_property(value: &str, property: &str, known: &[&str]) -> ValidationResult {
        if known.contains(&property) {
            ValidationResult::valid(value)
        } else {
            InvalidResult::new(value, ResultType::Value, Reason::ValuePropertyInvalid).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(value: &str, reason: Reason) -> ValidationResult {
        InvalidResult::new(value, ResultType::Value, reason).into()
    }

    #[test]
    fn test_is_literal() {
        let cases = [
            ("", false),
            ("   ", false),
            ("\"", false),
            ("value", false),
            ("\"value", false),
            ("value\"", false),
            ("\"va\\\"lu\\\"e\\\"", false),
            ("\\\"va\\\"lu\\\"e\\\"\"", false),
            ("\"value\"", true),
            ("\"va\\\"lu\\\"e\"", true),
            ("\"\"", true),
            ("  \"padded\"  ", true),
            ("\"trailing backslash\\\\\"", true),
            ("\"ünïcødé \\\"ß\\\" 日本\"", true),
            ("\"日本", false),
        ];

        for (value, expected) in cases {
            assert_eq!(is_literal(value), expected, "is_literal({:?})", value);
        }
    }

    #[test]
    fn test_is_environment_parameter() {
        assert!(is_environment_parameter("$env.KEY"));
        assert!(!is_environment_parameter("$env."));
        assert!(!is_environment_parameter("$env.KEY.nested"));
    }

    #[test]
    fn test_validate_valid_values() {
        let validator = ValueValidator::new();
        let values = [
            "\"value\"",
            "\"va\\\"l\\\"ue\"",
            "$data.value",
            "$page.url",
            "$page.title",
            "$browser.size",
            "$\".selector\"",
            "$\".selector\".attribute_name",
            "$\"{{ $\".parent\" }} .child\"",
            "$\".parent\" >> $\".child\"",
            "$env.KEY",
        ];

        for value in values {
            assert_eq!(
                validator.validate(value),
                ValidationResult::valid(value),
                "validate({:?})",
                value
            );
        }
    }

    #[test]
    fn test_validate_invalid_values() {
        let validator = ValueValidator::new();
        let cases = [
            ("$elements.element_name", Reason::ValueInvalid),
            ("$elements.element_name.attribute_name", Reason::ValueInvalid),
            ("$page_import_name.elements.element_name", Reason::ValueInvalid),
            ("$page.foo", Reason::ValuePropertyInvalid),
            ("$page.", Reason::ValuePropertyInvalid),
            ("$browser.foo", Reason::ValuePropertyInvalid),
            ("value", Reason::ValueInvalid),
            ("\"value", Reason::ValueInvalid),
            ("", Reason::ValueInvalid),
            ("$data.key.nested", Reason::ValueInvalid),
        ];

        for (value, reason) in cases {
            assert_eq!(
                validator.validate(value),
                invalid(value, reason),
                "validate({:?})",
                value
            );
        }
    }

    #[test]
    fn test_descendant_attribute_identifier_is_not_a_value() {
        let value = "$\"parent\" >> $\".selector\".attribute_name";
        assert_eq!(
            ValueValidator::new().validate(value),
            invalid(value, Reason::ValueInvalid)
        );
    }

    #[test]
    fn test_validate_is_repeatable() {
        let validator = ValueValidator::new();
        for value in ["$page.foo", "\"value\"", "nope"] {
            assert_eq!(validator.validate(value), validator.validate(value));
        }
    }
}
