use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    Shape(String),
}

impl LoadError {
    pub fn shape(message: impl Into<String>) -> Self {
        LoadError::Shape(message.into())
    }
}
