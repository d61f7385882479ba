use std::collections::BTreeSet;

use crate::model::{Action, Assertion, DataParameter, DataSetCollection};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Step {
    pub actions: Vec<Action>,
    pub assertions: Vec<Assertion>,
    pub data: Option<DataSetCollection>,
}

impl Step {
    pub fn new(actions: Vec<Action>, assertions: Vec<Assertion>) -> Self {
        Self {
            actions,
            assertions,
            data: None,
        }
    }

    pub fn with_data(self, data: DataSetCollection) -> Self {
        Self {
            data: Some(data),
            ..self
        }
    }

    /// Names referenced through `$data.<name>` by any statement in this step.
    pub fn data_parameter_names(&self) -> BTreeSet<String> {
        let action_values = self.actions.iter().filter_map(Action::value);
        let assertion_identifiers = self.assertions.iter().map(|a| a.identifier.as_str());
        let assertion_values = self.assertions.iter().filter_map(|a| a.value.as_deref());

        action_values
            .chain(assertion_identifiers)
            .chain(assertion_values)
            .filter_map(DataParameter::parse)
            .map(|parameter| parameter.property().to_string())
            .collect()
    }

    pub fn has_data(&self) -> bool {
        self.data.as_ref().is_some_and(|data| !data.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DataSet;

    #[test]
    fn test_data_parameter_names_collects_all_statements() {
        let step = Step::new(
            vec![Action::input(
                "set $\".a\" to $data.input",
                "$\".a\" to $data.input",
                "$\".a\"",
                "$data.input",
            )],
            vec![
                Assertion::comparison("$data.x is $data.y", "$data.x", "is", "$data.y"),
                Assertion::new("$\".a\" exists", "$\".a\"", "exists"),
            ],
        );

        let names: Vec<_> = step.data_parameter_names().into_iter().collect();
        assert_eq!(names, vec!["input", "x", "y"]);
    }

    #[test]
    fn test_has_data() {
        let step = Step::default();
        assert!(!step.has_data());

        let step = Step::default().with_data(DataSetCollection::default());
        assert!(!step.has_data());

        let step = Step::default().with_data(DataSetCollection::new(vec![DataSet::new(
            "0",
            [("k", "v")],
        )]));
        assert!(step.has_data());
    }
}
