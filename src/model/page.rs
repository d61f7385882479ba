#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub import_name: String,
    pub url: String,
    /// Named element identifiers in declared order.
    pub identifiers: Vec<(String, String)>,
}

impl Page {
    pub fn new(import_name: &str, url: &str) -> Self {
        Self {
            import_name: import_name.to_string(),
            url: url.to_string(),
            identifiers: Vec::new(),
        }
    }

    pub fn with_identifiers<N, I>(self, identifiers: impl IntoIterator<Item = (N, I)>) -> Self
    where
        N: Into<String>,
        I: Into<String>,
    {
        Self {
            identifiers: identifiers
                .into_iter()
                .map(|(name, identifier)| (name.into(), identifier.into()))
                .collect(),
            ..self
        }
    }
}
