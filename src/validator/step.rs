use crate::model::{DataParameter, DataSetCollection, Statement, Step};
use crate::validator::action::ActionValidator;
use crate::validator::assertion::AssertionValidator;
use crate::validator::data::DataValidator;
use crate::validator::result::{
    ContextValue, InvalidResult, Reason, ResultType, ValidationResult,
};

pub const CONTEXT_STATEMENT: &str = "statement";

#[derive(Debug, Clone, Copy, Default)]
pub struct StepValidator {
    action_validator: ActionValidator,
    assertion_validator: AssertionValidator,
    data_validator: DataValidator,
}

impl StepValidator {
    pub fn new(
        action_validator: ActionValidator,
        assertion_validator: AssertionValidator,
        data_validator: DataValidator,
    ) -> Self {
        Self {
            action_validator,
            assertion_validator,
            data_validator,
        }
    }

    /// Actions are checked before assertions; `$data.*` references in either
    /// must be present in every data set of the step.
    pub fn validate(&self, step: &Step) -> ValidationResult {
        if step.assertions.is_empty() {
            return Self::invalid(step, Reason::StepNoAssertions).into();
        }

        if let Some(result) = Self::check_data_declared(step) {
            return result;
        }

        for action in &step.actions {
            if let ValidationResult::Invalid(cause) = self.action_validator.validate(action) {
                return Self::invalid(step, Reason::StepInvalidAction)
                    .with_cause(cause)
                    .into();
            }

            if action.is_input() {
                if let Some(parameter) = action.value().and_then(DataParameter::parse) {
                    if let Some(result) =
                        self.validate_statement_data(step, action.clone(), &parameter)
                    {
                        return result;
                    }
                }
            }
        }

        for assertion in &step.assertions {
            if let ValidationResult::Invalid(cause) = self.assertion_validator.validate(assertion) {
                return Self::invalid(step, Reason::StepInvalidAssertion)
                    .with_cause(cause)
                    .into();
            }

            let referenced = std::iter::once(assertion.identifier.as_str())
                .chain(assertion.value.as_deref())
                .filter_map(DataParameter::parse);

            for parameter in referenced {
                if let Some(result) =
                    self.validate_statement_data(step, assertion.clone(), &parameter)
                {
                    return result;
                }
            }
        }

        ValidationResult::valid(step)
    }

    fn check_data_declared(step: &Step) -> Option<ValidationResult> {
        if !step.data_parameter_names().is_empty() && !step.has_data() {
            return Some(Self::invalid(step, Reason::StepDataSetEmpty).into());
        }

        None
    }

    fn validate_statement_data(
        &self,
        step: &Step,
        statement: impl Into<Statement>,
        parameter: &DataParameter,
    ) -> Option<ValidationResult> {
        let empty = DataSetCollection::default();
        let data = step.data.as_ref().unwrap_or(&empty);

        match self.data_validator.validate(data, parameter) {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(cause) => {
                tracing::debug!(
                    parameter = parameter.property(),
                    "step data does not cover data parameter"
                );
                Some(
                    Self::invalid(step, Reason::StepDataInvalid)
                        .with_cause(cause)
                        .with_context(CONTEXT_STATEMENT, ContextValue::Statement(statement.into()))
                        .into(),
                )
            }
        }
    }

    fn invalid(step: &Step, reason: Reason) -> InvalidResult {
        InvalidResult::new(step, ResultType::Step, reason)
    }
}
