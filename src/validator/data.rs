use crate::model::{DataParameter, DataSet, DataSetCollection};
use crate::validator::result::{InvalidResult, Reason, ResultType, ValidationResult};

pub const CONTEXT_DATA_PARAMETER_NAME: &str = "data-parameter-name";

/// Checks a single row for a parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataSetValidator;

impl DataSetValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, data_set: &DataSet, parameter: &DataParameter) -> ValidationResult {
        let property = parameter.property();

        if !data_set.has_parameter_names(&[property]) {
            return InvalidResult::new(data_set, ResultType::DataSet, Reason::DataSetIncomplete)
                .with_context(CONTEXT_DATA_PARAMETER_NAME, property)
                .into();
        }

        ValidationResult::valid(data_set)
    }
}

/// Checks that every row of a collection carries a parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataValidator {
    data_set_validator: DataSetValidator,
}

impl DataValidator {
    pub fn new(data_set_validator: DataSetValidator) -> Self {
        Self { data_set_validator }
    }

    pub fn validate(&self, data: &DataSetCollection, parameter: &DataParameter) -> ValidationResult {
        if data.is_empty() {
            return InvalidResult::new(data, ResultType::Data, Reason::DataEmpty).into();
        }

        for data_set in data {
            if let ValidationResult::Invalid(cause) =
                self.data_set_validator.validate(data_set, parameter)
            {
                tracing::trace!(
                    data_set = %data_set.name,
                    parameter = parameter.property(),
                    "data set is missing parameter"
                );
                return InvalidResult::new(data, ResultType::Data, Reason::DataDataSetInvalid)
                    .with_cause(cause)
                    .into();
            }
        }

        ValidationResult::valid(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameter(name: &str) -> DataParameter {
        DataParameter::parse(&format!("$data.{}", name)).unwrap()
    }

    fn incomplete(data_set: DataSet, name: &str) -> InvalidResult {
        InvalidResult::new(data_set, ResultType::DataSet, Reason::DataSetIncomplete)
            .with_context(CONTEXT_DATA_PARAMETER_NAME, name)
    }

    #[test]
    fn test_data_set_valid() {
        let data_set = DataSet::new("0", [("key1", "value1"), ("key2", "value2"), ("key3", "value1")]);
        let validator = DataSetValidator::new();

        for name in ["key1", "key2", "key3"] {
            assert_eq!(
                validator.validate(&data_set, &parameter(name)),
                ValidationResult::valid(&data_set)
            );
        }
    }

    #[test]
    fn test_data_set_empty_is_incomplete() {
        let data_set = DataSet::new::<&str, &str>("0", []);
        assert_eq!(
            DataSetValidator::new().validate(&data_set, &parameter("key")),
            ValidationResult::Invalid(incomplete(data_set.clone(), "key"))
        );
    }

    #[test]
    fn test_data_set_key_not_present() {
        let data_set = DataSet::new("0", [("key1", "value1"), ("key2", "value2")]);
        assert_eq!(
            DataSetValidator::new().validate(&data_set, &parameter("key3")),
            ValidationResult::Invalid(incomplete(data_set.clone(), "key3"))
        );
    }

    #[test]
    fn test_data_valid() {
        let data = DataSetCollection::new(vec![
            DataSet::new("0", [("key1", "value1"), ("key2", "value2")]),
            DataSet::new("1", [("key1", "value1"), ("key2", "value2"), ("key3", "value3")]),
        ]);
        let validator = DataValidator::default();

        assert_eq!(
            validator.validate(&data, &parameter("key1")),
            ValidationResult::valid(&data)
        );
        assert_eq!(
            validator.validate(&data, &parameter("key2")),
            ValidationResult::valid(&data)
        );
    }

    #[test]
    fn test_data_empty() {
        let data = DataSetCollection::default();
        assert_eq!(
            DataValidator::default().validate(&data, &parameter("key")),
            ValidationResult::Invalid(InvalidResult::new(
                data.clone(),
                ResultType::Data,
                Reason::DataEmpty
            ))
        );
    }

    #[test]
    fn test_data_first_incomplete_row_wins() {
        let second = DataSet::new("1", [("key2", "value2")]);
        let data = DataSetCollection::new(vec![
            DataSet::new("0", [("key1", "value1"), ("key2", "value2")]),
            second.clone(),
            DataSet::new("2", [("key3", "value3")]),
        ]);

        let expected = InvalidResult::new(data.clone(), ResultType::Data, Reason::DataDataSetInvalid)
            .with_cause(incomplete(second, "key1"));

        assert_eq!(
            DataValidator::default().validate(&data, &parameter("key1")),
            ValidationResult::Invalid(expected)
        );
    }
}
