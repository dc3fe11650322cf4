use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to parse XML content
    #[error("Parse error: {0}")]
    ParseError(String),
    /// An element lacks an attribute that shaping reads unconditionally
    #[error("Missing required attribute '{attribute}' on <{element}> element")]
    MissingAttribute { element: String, attribute: String },
    /// `lat`/`lon` text that is not a finite number
    #[error("Invalid coordinate '{value}' in attribute '{attribute}'")]
    InvalidCoordinate { attribute: String, value: String },
    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Document store could not be reached or queried
    #[error("Store error: {0}")]
    StoreError(String),
    /// Invalid input format
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
}

impl AppError {
    pub fn missing_attribute(element: &str, attribute: &str) -> Self {
        AppError::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }
}

// Conversion implementations for common errors
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<quick_xml::Error> for AppError {
    fn from(err: quick_xml::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
