use thiserror::Error;

/// Type alias for Result with SpamFilterError
pub type Result<T> = std::result::Result<T, SpamFilterError>;

/// Error types for training, evaluation and the surrounding I/O layer
#[derive(Error, Debug)]
pub enum SpamFilterError {
    /// Neither training corpus produced a single document
    #[error("No training data: both the spam and ham training corpora are empty")]
    NoTrainingData,

    /// Corpus markers or corpus contents could not be used
    #[error("Corpus error: {0}")]
    CorpusError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Interactive prompt failed
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// User cancelled operation
    #[error("Operation cancelled: {0}")]
    OperationCancelled(String),

    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SpamFilterError {
    /// Check if the error was caused by the input data rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SpamFilterError::NoTrainingData
                | SpamFilterError::CorpusError(_)
                | SpamFilterError::ConfigError(_)
        )
    }

    /// Process exit code: 2 for bad input, 1 for everything else
    pub fn exit_code(&self) -> i32 {
        if self.is_input_error() {
            2
        } else {
            1
        }
    }
}

impl From<inquire::InquireError> for SpamFilterError {
    fn from(error: inquire::InquireError) -> Self {
        match error {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => {
                SpamFilterError::OperationCancelled("prompt dismissed".to_string())
            }
            inquire::InquireError::IO(err) => SpamFilterError::IoError(err),
            other => SpamFilterError::PromptError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors() {
        assert!(SpamFilterError::NoTrainingData.is_input_error());
        assert!(SpamFilterError::CorpusError("bad markers".to_string()).is_input_error());
        assert!(SpamFilterError::ConfigError("bad value".to_string()).is_input_error());

        let io = SpamFilterError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(!io.is_input_error());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SpamFilterError::NoTrainingData.exit_code(), 2);
        assert_eq!(
            SpamFilterError::CorpusError("bad markers".to_string()).exit_code(),
            2
        );
        assert_eq!(
            SpamFilterError::OperationCancelled("prompt dismissed".to_string()).exit_code(),
            1
        );
        assert_eq!(
            SpamFilterError::PromptError("no terminal".to_string()).exit_code(),
            1
        );
    }

    #[test]
    fn test_error_display() {
        let display = format!("{}", SpamFilterError::NoTrainingData);
        assert!(display.contains("No training data"));

        let config = SpamFilterError::ConfigError("corpus.subject_marker is empty".to_string());
        assert!(config.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_inquire_cancel_maps_to_cancelled() {
        let err: SpamFilterError = inquire::InquireError::OperationCanceled.into();
        assert!(matches!(err, SpamFilterError::OperationCancelled(_)));

        let err: SpamFilterError = inquire::InquireError::OperationInterrupted.into();
        assert!(matches!(err, SpamFilterError::OperationCancelled(_)));
    }

    #[test]
    fn test_inquire_other_maps_to_prompt_error() {
        let err: SpamFilterError = inquire::InquireError::NotTTY.into();
        assert!(matches!(err, SpamFilterError::PromptError(_)));
    }
}
