use thiserror::Error;

/// Error type for the whole document pipeline.
///
/// Validation and template-lookup failures carry enough context to identify
/// the offending field or name. There is no partial-failure mode: any error
/// is raised before the output file is written.
#[derive(Debug, Error)]
pub enum DocError {
    #[error("invalid value for '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("malformed document data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("template error: {0}")]
    Template(String),

    #[error("pdf write error: {0}")]
    Pdf(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocError {
    /// Shorthand for a field-level validation failure.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DocError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
