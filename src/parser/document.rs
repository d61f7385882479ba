//! JSON test and page documents.
//!
//! A test document holds a `config` object and one object per step, keyed by
//! step name:
//!
//! ```json
//! {
//!   "config": { "browser": "chrome", "url": "https://example.com" },
//!   "open form": {
//!     "actions": ["click $\".open\""],
//!     "assertions": ["$\".form\" exists"],
//!     "data": { "0": { "name": "Sheep" } }
//!   }
//! }
//! ```
//!
//! A page document holds a `url` and named `elements`. Key order is kept.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{Configuration, DataSet, DataSetCollection, Page, Step, Test};
use crate::parser::errors::LoadError;
use crate::parser::parse::{parse_action, parse_assertion};

const CONFIG_KEY: &str = "config";
const URL_KEY: &str = "url";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Test,
    Page,
}

impl DocumentKind {
    /// Test documents carry `config`; page documents carry a top-level `url`.
    pub fn detect(document: &Value) -> Option<Self> {
        let object = document.as_object()?;
        if object.contains_key(CONFIG_KEY) {
            Some(DocumentKind::Test)
        } else if object.contains_key(URL_KEY) {
            Some(DocumentKind::Page)
        } else {
            None
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    browser: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct TestDocument {
    #[serde(default)]
    config: ConfigDocument,
    #[serde(flatten)]
    steps: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
struct StepDocument {
    #[serde(default)]
    actions: Vec<String>,
    #[serde(default)]
    assertions: Vec<String>,
    #[serde(default)]
    data: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct PageDocument {
    #[serde(default)]
    url: String,
    #[serde(default)]
    elements: Map<String, Value>,
}

pub fn load_test(content: &str) -> Result<Test, LoadError> {
    let document: TestDocument = serde_json::from_str(content)?;

    let steps = document
        .steps
        .into_iter()
        .map(|(name, value)| {
            let step = build_step(&name, value)?;
            Ok((name, step))
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    Ok(Test::new(
        Configuration::new(&document.config.browser, &document.config.url),
        steps,
    ))
}

pub fn load_page(content: &str, import_name: &str) -> Result<Page, LoadError> {
    let document: PageDocument = serde_json::from_str(content)?;

    let identifiers = document
        .elements
        .into_iter()
        .map(|(name, value)| match value {
            Value::String(identifier) => Ok((name, identifier)),
            _ => Err(LoadError::shape(format!(
                "element \"{}\" must be a string identifier",
                name
            ))),
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    Ok(Page::new(import_name, &document.url).with_identifiers(identifiers))
}

fn build_step(name: &str, value: Value) -> Result<Step, LoadError> {
    if !value.is_object() {
        return Err(LoadError::shape(format!(
            "step \"{}\" must be an object",
            name
        )));
    }

    let document: StepDocument = serde_json::from_value(value)
        .map_err(|e| LoadError::shape(format!("step \"{}\": {}", name, e)))?;

    let step = Step::new(
        document.actions.iter().map(|s| parse_action(s)).collect(),
        document.assertions.iter().map(|s| parse_assertion(s)).collect(),
    );

    match document.data {
        Some(rows) => Ok(step.with_data(build_data(name, rows)?)),
        None => Ok(step),
    }
}

fn build_data(step_name: &str, rows: Map<String, Value>) -> Result<DataSetCollection, LoadError> {
    rows.into_iter()
        .map(|(row_name, row)| match row {
            Value::Object(parameters) => Ok(DataSet::new(
                &row_name,
                parameters
                    .into_iter()
                    .map(|(key, value)| (key, scalar_to_string(value))),
            )),
            _ => Err(LoadError::shape(format!(
                "data set \"{}\" of step \"{}\" must be an object",
                row_name, step_name
            ))),
        })
        .collect()
}

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
