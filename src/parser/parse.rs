use crate::model::{Action, ActionKind, Assertion};
use crate::parser::lexer::{scan_identifier, scan_word, skip_whitespace};

const VALUE_KEYWORD: &str = "to";

const EXISTENCE_OPERATORS: &[&str] = &["exists", "not-exists"];
const COMPARISON_OPERATORS: &[&str] = &["is", "is-not", "includes", "excludes", "matches"];

/// Builds an action from one source line. Never fails: unrecognised input
/// becomes an action the validator rejects.
pub fn parse_action(source: &str) -> Action {
    let source = source.trim();
    let type_end = scan_word(source, 0);
    let action_type = &source[..type_end];
    let arguments = source[type_end..].trim();

    let kind = match action_type {
        "click" | "submit" | "wait-for" => ActionKind::Interaction {
            identifier: parse_identifier(arguments).to_string(),
        },
        "set" => {
            let identifier = parse_identifier(arguments);
            ActionKind::Input {
                identifier: identifier.to_string(),
                value: parse_input_value(&arguments[identifier.len()..]).to_string(),
            }
        }
        "wait" => ActionKind::Wait {
            duration: arguments.to_string(),
        },
        "back" | "forward" | "reload" => ActionKind::NoArguments,
        _ => ActionKind::Unknown,
    };

    Action::new(source, action_type, arguments, kind)
}

/// Builds an assertion from one source line: `<identifier> <operator> [value]`.
pub fn parse_assertion(source: &str) -> Assertion {
    let source = source.trim();
    let identifier = parse_identifier(source);

    let operator_start = skip_whitespace(source, identifier.len());
    let operator_end = scan_word(source, operator_start);
    let operator = &source[operator_start..operator_end];
    let value = source[operator_end..].trim();

    let has_value = if EXISTENCE_OPERATORS.contains(&operator) {
        false
    } else {
        !value.is_empty() || COMPARISON_OPERATORS.contains(&operator)
    };

    if has_value {
        Assertion::comparison(source, identifier, operator, value)
    } else {
        Assertion::new(source, identifier, operator)
    }
}

fn parse_identifier(input: &str) -> &str {
    &input[..scan_identifier(input, 0)]
}

/// The text after the `to` keyword of a `set` action.
fn parse_input_value(rest: &str) -> &str {
    let rest = rest.trim_start();
    match rest.strip_prefix(VALUE_KEYWORD) {
        Some(value) if value.is_empty() || value.starts_with(char::is_whitespace) => value.trim(),
        _ => rest.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interaction_action() {
        let action = parse_action("click $\".selector\"");
        assert_eq!(
            action,
            Action::interaction("click $\".selector\"", "click", "$\".selector\"", "$\".selector\"")
        );
    }

    #[test]
    fn test_parse_interaction_with_literal_identifier() {
        let action = parse_action("click \"selector\"");
        assert_eq!(action.identifier(), Some("\"selector\""));
    }

    #[test]
    fn test_parse_input_action() {
        let action = parse_action("set $\".selector\" to \"some value\"");
        assert_eq!(
            action,
            Action::input(
                "set $\".selector\" to \"some value\"",
                "$\".selector\" to \"some value\"",
                "$\".selector\"",
                "\"some value\""
            )
        );
    }

    #[test]
    fn test_parse_input_action_with_nested_identifiers() {
        let action = parse_action("set $\"{{ $\".parent\" }} .child\" to $\"{{ $\".parent\" }} .child\"");
        assert_eq!(action.identifier(), Some("$\"{{ $\".parent\" }} .child\""));
        assert_eq!(action.value(), Some("$\"{{ $\".parent\" }} .child\""));
    }

    #[test]
    fn test_parse_input_action_without_keyword() {
        let action = parse_action("set $\".selector\" \"value\"");
        assert_eq!(action.value(), Some("\"value\""));

        let action = parse_action("set $\".selector\"");
        assert_eq!(action.value(), Some(""));
    }

    #[test]
    fn test_parse_wait_action() {
        let action = parse_action("wait 1");
        assert!(action.is_wait());
        assert_eq!(action.duration(), Some("1"));
    }

    #[test]
    fn test_parse_no_argument_and_unknown_actions() {
        let action = parse_action("reload arg1 arg2");
        assert_eq!(action.kind, ActionKind::NoArguments);
        assert_eq!(action.arguments, "arg1 arg2");

        let action = parse_action("invalid");
        assert_eq!(action.kind, ActionKind::Unknown);
        assert_eq!(action.action_type, "invalid");
    }

    #[test]
    fn test_parse_comparison_assertion() {
        let assertion = parse_assertion("$\".parent\" >> $\".child\" is \"value\"");
        assert_eq!(
            assertion,
            Assertion::comparison(
                "$\".parent\" >> $\".child\" is \"value\"",
                "$\".parent\" >> $\".child\"",
                "is",
                "\"value\""
            )
        );
        assert!(assertion.is_comparison());
    }

    #[test]
    fn test_parse_existence_assertion() {
        let assertion = parse_assertion("$\".selector\" not-exists");
        assert_eq!(
            assertion,
            Assertion::new("$\".selector\" not-exists", "$\".selector\"", "not-exists")
        );
        assert!(!assertion.is_comparison());
    }

    #[test]
    fn test_parse_comparison_assertion_missing_value() {
        let assertion = parse_assertion("$\".selector\" is");
        assert_eq!(assertion.value.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_assertion_unknown_operator() {
        let assertion = parse_assertion("$\".button\" glows");
        assert_eq!(
            assertion,
            Assertion::new("$\".button\" glows", "$\".button\"", "glows")
        );
    }

    #[test]
    fn test_parse_assertion_keeps_misquoted_value() {
        let assertion = parse_assertion("$data.key2 is \"value2");
        assert_eq!(assertion.identifier, "$data.key2");
        assert_eq!(assertion.value.as_deref(), Some("\"value2"));
    }
}
