//! Validation outcomes.
//!
//! Every validator returns a [`ValidationResult`]. Failures carry the subject
//! being judged, a [`ResultType`] naming the validator that judged it, a stable
//! [`Reason`] code, and optionally the deeper failure that caused it plus
//! key/value context. Walking [`InvalidResult::chain`] goes from the outermost
//! structural failure down to the grammar failure at the leaf.

use std::fmt;

use crate::model::{
    Action, Assertion, Configuration, DataSet, DataSetCollection, Page, Statement, Step, Test,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultType {
    Value,
    Action,
    Assertion,
    DataSet,
    Data,
    Step,
    Page,
    TestConfiguration,
    Test,
}

impl ResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Value => "value",
            ResultType::Action => "action",
            ResultType::Assertion => "assertion",
            ResultType::DataSet => "dataset",
            ResultType::Data => "data",
            ResultType::Step => "step",
            ResultType::Page => "page",
            ResultType::TestConfiguration => "test-configuration",
            ResultType::Test => "test",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable reason codes. Callers match on these, never on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    ValuePropertyInvalid,
    ValueInvalid,

    ActionInvalidType,
    ActionInvalidIdentifier,
    ActionInvalidValue,

    AssertionInvalidIdentifier,
    AssertionInvalidOperator,
    AssertionInvalidValue,

    DataSetIncomplete,

    DataEmpty,
    DataDataSetInvalid,

    StepNoAssertions,
    StepInvalidAction,
    StepInvalidAssertion,
    StepDataSetEmpty,
    StepDataInvalid,

    PageUrlEmpty,
    PageInvalidIdentifier,

    TestConfigurationBrowserEmpty,
    TestConfigurationUrlEmpty,
    TestConfigurationUrlIsPageUrlReference,

    TestConfigurationInvalid,
    TestNoSteps,
    TestStepInvalid,
}

impl Reason {
    pub fn code(&self) -> &'static str {
        match self {
            Reason::ValuePropertyInvalid => "value-property-invalid",
            Reason::ValueInvalid => "value-invalid",
            Reason::ActionInvalidType => "action-invalid-type",
            Reason::ActionInvalidIdentifier => "action-invalid-identifier",
            Reason::ActionInvalidValue => "action-invalid-value",
            Reason::AssertionInvalidIdentifier => "assertion-invalid-identifier",
            Reason::AssertionInvalidOperator => "assertion-invalid-operator",
            Reason::AssertionInvalidValue => "assertion-invalid-value",
            Reason::DataSetIncomplete => "dataset-incomplete",
            Reason::DataEmpty => "data-empty",
            Reason::DataDataSetInvalid => "data-dataset-invalid",
            Reason::StepNoAssertions => "step-no-assertions",
            Reason::StepInvalidAction => "step-invalid-action",
            Reason::StepInvalidAssertion => "step-invalid-assertion",
            Reason::StepDataSetEmpty => "step-data-set-empty",
            Reason::StepDataInvalid => "step-data-invalid",
            Reason::PageUrlEmpty => "page-url-empty",
            Reason::PageInvalidIdentifier => "page-invalid-identifier",
            Reason::TestConfigurationBrowserEmpty => "test-configuration-browser-empty",
            Reason::TestConfigurationUrlEmpty => "test-configuration-url-empty",
            Reason::TestConfigurationUrlIsPageUrlReference => {
                "test-configuration-url-is-page-url-reference"
            }
            Reason::TestConfigurationInvalid => "test-configuration-invalid",
            Reason::TestNoSteps => "test-no-steps",
            Reason::TestStepInvalid => "test-step-invalid",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The thing a result was produced for. Kept for equality and diagnostics only.
#[derive(Debug, Clone, PartialEq)]
pub enum Subject {
    Value(String),
    Action(Action),
    Assertion(Assertion),
    DataSet(DataSet),
    Data(DataSetCollection),
    Step(Step),
    Page(Page),
    Configuration(Configuration),
    Test(Test),
}

impl Subject {
    /// Short human-readable label.
    pub fn describe(&self) -> String {
        match self {
            Subject::Value(value) => value.clone(),
            Subject::Action(action) => action.source.clone(),
            Subject::Assertion(assertion) => assertion.source.clone(),
            Subject::DataSet(data_set) => format!("data set \"{}\"", data_set.name),
            Subject::Data(data) => format!("{} data sets", data.len()),
            Subject::Step(step) => format!(
                "step ({} actions, {} assertions)",
                step.actions.len(),
                step.assertions.len()
            ),
            Subject::Page(page) => format!("page \"{}\" ({})", page.import_name, page.url),
            Subject::Configuration(configuration) => format!(
                "browser \"{}\", url \"{}\"",
                configuration.browser, configuration.url
            ),
            Subject::Test(test) => format!("test ({} steps)", test.steps.len()),
        }
    }
}

macro_rules! subject_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Subject {
                fn from(value: $ty) -> Self {
                    Subject::$variant(value)
                }
            }

            impl From<&$ty> for Subject {
                fn from(value: &$ty) -> Self {
                    Subject::$variant(value.clone())
                }
            }
        )*
    };
}

subject_from!(
    Value(String),
    Action(Action),
    Assertion(Assertion),
    DataSet(DataSet),
    Data(DataSetCollection),
    Step(Step),
    Page(Page),
    Configuration(Configuration),
    Test(Test),
);

impl From<&str> for Subject {
    fn from(value: &str) -> Self {
        Subject::Value(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContextValue {
    Text(String),
    Statement(Statement),
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::Text(text) => f.write_str(text),
            ContextValue::Statement(statement) => f.write_str(statement.source()),
        }
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::Text(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::Text(value)
    }
}

impl From<Statement> for ContextValue {
    fn from(value: Statement) -> Self {
        ContextValue::Statement(value)
    }
}

impl From<&Action> for ContextValue {
    fn from(value: &Action) -> Self {
        ContextValue::Statement(Statement::Action(value.clone()))
    }
}

impl From<&Assertion> for ContextValue {
    fn from(value: &Assertion) -> Self {
        ContextValue::Statement(Statement::Assertion(value.clone()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvalidResult {
    subject: Subject,
    result_type: ResultType,
    reason: Reason,
    cause: Option<Box<InvalidResult>>,
    context: Vec<(String, ContextValue)>,
}

impl InvalidResult {
    pub fn new(subject: impl Into<Subject>, result_type: ResultType, reason: Reason) -> Self {
        Self {
            subject: subject.into(),
            result_type,
            reason,
            cause: None,
            context: Vec::new(),
        }
    }

    pub fn with_cause(self, cause: InvalidResult) -> Self {
        Self {
            cause: Some(Box::new(cause)),
            ..self
        }
    }

    /// Returns a copy with `key` set. An existing key keeps its position.
    pub fn with_context(mut self, key: &str, value: impl Into<ContextValue>) -> Self {
        let value = value.into();
        match self.context.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.context.push((key.to_string(), value)),
        }
        self
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn result_type(&self) -> ResultType {
        self.result_type
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }

    pub fn cause(&self) -> Option<&InvalidResult> {
        self.cause.as_deref()
    }

    pub fn context(&self) -> &[(String, ContextValue)] {
        &self.context
    }

    pub fn context_value(&self, key: &str) -> Option<&ContextValue> {
        self.context
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// This result followed by each nested cause.
    pub fn chain(&self) -> impl Iterator<Item = &InvalidResult> {
        std::iter::successors(Some(self), |result| result.cause())
    }

    /// The innermost failure.
    pub fn root_cause(&self) -> &InvalidResult {
        self.chain().last().unwrap_or(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(Subject),
    Invalid(InvalidResult),
}

impl ValidationResult {
    pub fn valid(subject: impl Into<Subject>) -> Self {
        ValidationResult::Valid(subject.into())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn subject(&self) -> &Subject {
        match self {
            ValidationResult::Valid(subject) => subject,
            ValidationResult::Invalid(invalid) => invalid.subject(),
        }
    }

    pub fn as_invalid(&self) -> Option<&InvalidResult> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(invalid) => Some(invalid),
        }
    }

    pub fn into_invalid(self) -> Option<InvalidResult> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(invalid) => Some(invalid),
        }
    }
}

impl From<InvalidResult> for ValidationResult {
    fn from(invalid: InvalidResult) -> Self {
        ValidationResult::Invalid(invalid)
    }
}
