const DATA_PARAMETER_PREFIX: &str = "$data.";

/// A `$data.<name>` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataParameter {
    property: String,
}

impl DataParameter {
    /// Matches `^\$data\.[^.]+$`.
    pub fn is(value: &str) -> bool {
        Self::parse(value).is_some()
    }

    pub fn parse(value: &str) -> Option<Self> {
        let property = value.strip_prefix(DATA_PARAMETER_PREFIX)?;
        if property.is_empty() || property.contains('.') {
            return None;
        }

        Some(Self {
            property: property.to_string(),
        })
    }

    pub fn property(&self) -> &str {
        &self.property
    }
}

/// One row of step data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSet {
    pub name: String,
    /// Name/value pairs in declared order.
    pub parameters: Vec<(String, String)>,
}

impl DataSet {
    pub fn new<K, V>(name: &str, parameters: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.to_string(),
            parameters: parameters
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_parameter_names<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names
            .iter()
            .all(|name| self.parameter(name.as_ref()).is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSetCollection {
    data_sets: Vec<DataSet>,
}

impl DataSetCollection {
    pub fn new(data_sets: Vec<DataSet>) -> Self {
        Self { data_sets }
    }

    pub fn len(&self) -> usize {
        self.data_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_sets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataSet> {
        self.data_sets.iter()
    }
}

impl FromIterator<DataSet> for DataSetCollection {
    fn from_iter<I: IntoIterator<Item = DataSet>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DataSetCollection {
    type Item = &'a DataSet;
    type IntoIter = std::slice::Iter<'a, DataSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
