#[derive(Debug, Clone, PartialEq)]
pub struct Assertion {
    pub source: String,
    pub identifier: String,
    pub operator: String,
    pub value: Option<String>,
}

impl Assertion {
    pub fn new(source: &str, identifier: &str, operator: &str) -> Self {
        Self {
            source: source.to_string(),
            identifier: identifier.to_string(),
            operator: operator.to_string(),
            value: None,
        }
    }

    pub fn comparison(source: &str, identifier: &str, operator: &str, value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            ..Self::new(source, identifier, operator)
        }
    }

    /// Comparison assertions (`is`, `includes`, ...) carry a value; `exists` does not.
    pub fn is_comparison(&self) -> bool {
        self.value.is_some()
    }
}
