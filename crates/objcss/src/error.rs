//! Record loading errors.

use thiserror::Error;

/// Error returned when a configuration record cannot be built.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record has no `module` to compile.
    #[error("missing module in record {record}")]
    MissingModule { record: String },

    /// The record text is not valid JSON for a record.
    #[error("invalid JSON record: {0}")]
    Json(#[from] serde_json::Error),

    /// The record text is not valid YAML for a record.
    #[error("invalid YAML record: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RecordError {
    /// Builds a [`RecordError::MissingModule`] describing the record by name,
    /// or by position when it is unnamed.
    pub(crate) fn missing_module(name: Option<&str>, index: Option<usize>) -> Self {
        let record = match (name, index) {
            (Some(name), _) => format!("'{}'", name),
            (None, Some(index)) => format!("#{}", index),
            (None, None) => "(unnamed)".to_string(),
        };
        RecordError::MissingModule { record }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_module_named() {
        let err = RecordError::missing_module(Some("index.css"), Some(2));
        assert_eq!(err.to_string(), "missing module in record 'index.css'");
    }

    #[test]
    fn test_missing_module_by_index() {
        let err = RecordError::missing_module(None, Some(2));
        assert_eq!(err.to_string(), "missing module in record #2");
    }

    #[test]
    fn test_missing_module_unnamed() {
        let err = RecordError::missing_module(None, None);
        assert!(err.to_string().contains("(unnamed)"));
    }
}
