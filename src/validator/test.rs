use crate::identifier;
use crate::model::{Configuration, Test};
use crate::validator::result::{InvalidResult, Reason, ResultType, ValidationResult};
use crate::validator::step::StepValidator;

pub const CONTEXT_STEP_NAME: &str = "step-name";

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationValidator;

impl ConfigurationValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, configuration: &Configuration) -> ValidationResult {
        let invalid = |reason: Reason| -> ValidationResult {
            InvalidResult::new(configuration, ResultType::TestConfiguration, reason).into()
        };

        if configuration.browser.trim().is_empty() {
            return invalid(Reason::TestConfigurationBrowserEmpty);
        }

        let url = configuration.url.trim();
        if url.is_empty() {
            return invalid(Reason::TestConfigurationUrlEmpty);
        }

        if identifier::is_page_url_reference(url) {
            return invalid(Reason::TestConfigurationUrlIsPageUrlReference);
        }

        ValidationResult::valid(configuration)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TestValidator {
    configuration_validator: ConfigurationValidator,
    step_validator: StepValidator,
}

impl TestValidator {
    pub fn new(configuration_validator: ConfigurationValidator, step_validator: StepValidator) -> Self {
        Self {
            configuration_validator,
            step_validator,
        }
    }

    pub fn validate(&self, test: &Test) -> ValidationResult {
        if let ValidationResult::Invalid(cause) =
            self.configuration_validator.validate(&test.configuration)
        {
            return Self::invalid(test, Reason::TestConfigurationInvalid)
                .with_cause(cause)
                .into();
        }

        if test.steps.is_empty() {
            return Self::invalid(test, Reason::TestNoSteps).into();
        }

        for (name, step) in &test.steps {
            if let ValidationResult::Invalid(cause) = self.step_validator.validate(step) {
                tracing::debug!(step = %name, reason = %cause.reason(), "step is invalid");
                return Self::invalid(test, Reason::TestStepInvalid)
                    .with_cause(cause)
                    .with_context(CONTEXT_STEP_NAME, name.as_str())
                    .into();
            }
        }

        ValidationResult::valid(test)
    }

    fn invalid(test: &Test, reason: Reason) -> InvalidResult {
        InvalidResult::new(test, ResultType::Test, reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Step;
    use crate::parser::{parse_action, parse_assertion};

    fn configuration_invalid(configuration: &Configuration, reason: Reason) -> ValidationResult {
        ValidationResult::Invalid(InvalidResult::new(
            configuration,
            ResultType::TestConfiguration,
            reason,
        ))
    }

    fn valid_step() -> Step {
        Step::new(
            vec![parse_action("click $\".selector\"")],
            vec![parse_assertion("$page.title is \"Example\"")],
        )
    }

    #[test]
    fn test_configuration_invalid() {
        let validator = ConfigurationValidator::new();
        let cases = [
            (Configuration::new("", ""), Reason::TestConfigurationBrowserEmpty),
            (Configuration::new("   ", ""), Reason::TestConfigurationBrowserEmpty),
            (Configuration::new("chrome", ""), Reason::TestConfigurationUrlEmpty),
            (Configuration::new("chrome", "  "), Reason::TestConfigurationUrlEmpty),
            (
                Configuration::new("chrome", "page_import_name.url"),
                Reason::TestConfigurationUrlIsPageUrlReference,
            ),
        ];

        for (configuration, reason) in cases {
            assert_eq!(
                validator.validate(&configuration),
                configuration_invalid(&configuration, reason)
            );
        }
    }

    #[test]
    fn test_configuration_valid() {
        let configuration = Configuration::new("chrome", "http://example.com/");
        assert_eq!(
            ConfigurationValidator::new().validate(&configuration),
            ValidationResult::valid(&configuration)
        );
    }

    #[test]
    fn test_invalid_configuration_is_wrapped() {
        let configuration = Configuration::new("", "");
        let test = Test::new(configuration.clone(), vec![]);

        let expected = InvalidResult::new(&test, ResultType::Test, Reason::TestConfigurationInvalid)
            .with_cause(InvalidResult::new(
                &configuration,
                ResultType::TestConfiguration,
                Reason::TestConfigurationBrowserEmpty,
            ));

        assert_eq!(
            TestValidator::default().validate(&test),
            ValidationResult::Invalid(expected)
        );
    }

    #[test]
    fn test_no_steps() {
        let test = Test::new(Configuration::new("chrome", "http://example.com/"), vec![]);
        assert_eq!(
            TestValidator::default().validate(&test),
            ValidationResult::Invalid(InvalidResult::new(
                &test,
                ResultType::Test,
                Reason::TestNoSteps
            ))
        );
    }

    #[test]
    fn test_first_invalid_step_wins() {
        let invalid_step = Step::default();
        let test = Test::new(
            Configuration::new("chrome", "http://example.com/"),
            vec![
                ("valid step".to_string(), valid_step()),
                ("invalid step name".to_string(), invalid_step.clone()),
                (
                    "another invalid step".to_string(),
                    Step::new(vec![parse_action("click nope")], vec![]),
                ),
            ],
        );

        let expected = InvalidResult::new(&test, ResultType::Test, Reason::TestStepInvalid)
            .with_cause(InvalidResult::new(
                &invalid_step,
                ResultType::Step,
                Reason::StepNoAssertions,
            ))
            .with_context(CONTEXT_STEP_NAME, "invalid step name");

        assert_eq!(
            TestValidator::default().validate(&test),
            ValidationResult::Invalid(expected)
        );
    }

    #[test]
    fn test_valid_test() {
        let test = Test::new(
            Configuration::new("chrome", "http://example.com"),
            vec![("step name".to_string(), valid_step())],
        );
        assert_eq!(
            TestValidator::default().validate(&test),
            ValidationResult::valid(&test)
        );
    }
}
