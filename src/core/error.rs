//! Error types for scalar function invocation

use thiserror::Error;

use super::error_code::*;

/// Failure of a single scalar function call.
///
/// Absence of a value (null input, missing key, out-of-range index) is never
/// reported through this type; those calls succeed with a null result.
#[derive(Debug, Clone, Error)]
pub enum UdfError {
    /// The caller supplied an argument the function cannot accept
    #[error("{error_code}: {message}")]
    ArgumentError {
        error_code: ErrorCode,
        message: String,
        function_name: Option<String>,
        position: Option<usize>,
    },

    /// The argument was well-typed but its content could not be processed
    #[error("{error_code}: {message}")]
    DataError {
        error_code: ErrorCode,
        message: String,
        content: Option<String>,
        function_name: Option<String>,
    },

    /// Registry lookup failure
    #[error("{error_code}: {message}")]
    FunctionError {
        error_code: ErrorCode,
        message: String,
        function_name: Option<String>,
    },
}

impl UdfError {
    /// Create an argument error
    pub fn argument_error(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self::ArgumentError {
            error_code,
            message: message.into(),
            function_name: None,
            position: None,
        }
    }

    /// Create a data error carrying the offending content
    pub fn data_error(
        error_code: ErrorCode,
        message: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::DataError {
            error_code,
            message: message.into(),
            content: Some(content.into()),
            function_name: None,
        }
    }

    /// Create an unknown-function error
    pub fn unknown_function(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::FunctionError {
            error_code: UDF0101,
            message: format!("Unknown function '{}'", name),
            function_name: Some(name),
        }
    }

    /// Attach the name of the function that raised the error
    pub fn with_function(mut self, name: &str) -> Self {
        match &mut self {
            Self::ArgumentError { function_name, .. }
            | Self::DataError { function_name, .. }
            | Self::FunctionError { function_name, .. } => {
                if function_name.is_none() {
                    *function_name = Some(name.to_string());
                }
            }
        }
        self
    }

    /// Attach the 0-based position of the offending argument
    pub fn at_position(mut self, index: usize) -> Self {
        if let Self::ArgumentError { position, .. } = &mut self {
            *position = Some(index);
        }
        self
    }

    pub fn error_code(&self) -> &ErrorCode {
        match self {
            Self::ArgumentError { error_code, .. } => error_code,
            Self::DataError { error_code, .. } => error_code,
            Self::FunctionError { error_code, .. } => error_code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::ArgumentError { message, .. }
            | Self::DataError { message, .. }
            | Self::FunctionError { message, .. } => message,
        }
    }

    pub fn function_name(&self) -> Option<&str> {
        match self {
            Self::ArgumentError { function_name, .. }
            | Self::DataError { function_name, .. }
            | Self::FunctionError { function_name, .. } => function_name.as_deref(),
        }
    }

    /// Get error information with help text
    pub fn error_info(&self) -> &'static ErrorInfo {
        self.error_code().info()
    }

    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::ArgumentError { .. })
    }

    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::DataError { .. })
    }
}

/// Result type for scalar function operations
pub type Result<T> = std::result::Result<T, UdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = UdfError::argument_error(UDF0001, "Split part must be greater than zero");
        assert_eq!(err.to_string(), "UDF0001: Split part must be greater than zero");
        assert!(err.is_argument_error());
        assert!(!err.is_data_error());
    }

    #[test]
    fn test_with_function_keeps_first_name() {
        let err = UdfError::data_error(UDF0051, "bad json", "{")
            .with_function("json_parse")
            .with_function("other");
        assert_eq!(err.function_name(), Some("json_parse"));
        assert_eq!(err.error_info().title, "Malformed JSON");
    }

    #[test]
    fn test_position_only_on_argument_errors() {
        let err = UdfError::argument_error(UDF0003, "type").at_position(2);
        assert!(matches!(err, UdfError::ArgumentError { position: Some(2), .. }));

        let err = UdfError::unknown_function("nope").at_position(1);
        assert_eq!(err.error_code(), &UDF0101);
        assert_eq!(err.message(), "Unknown function 'nope'");
    }
}
