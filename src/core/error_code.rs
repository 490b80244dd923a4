//! Error code system for scalar function failures
//!
//! Codes follow the compiler-style pattern `UDF0001`, `UDF0002`, ... and are
//! grouped into ranges by category.

use std::fmt;

/// Error categories for organizing error codes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Argument errors (UDF0001-UDF0050)
    Argument,
    /// Data errors (UDF0051-UDF0100)
    Data,
    /// Registry errors (UDF0101-UDF0150)
    Registry,
}

/// Error code in the `UDF0001` format
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    pub code: u16,
}

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self { code }
    }

    /// Get the full error code string (e.g., "UDF0001")
    pub fn code_str(&self) -> String {
        format!("UDF{:04}", self.code)
    }

    /// Get error information from the registry
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_REGISTRY.get_error_info(self)
    }

    pub fn category(&self) -> ErrorCategory {
        match self.code {
            1..=50 => ErrorCategory::Argument,
            51..=100 => ErrorCategory::Data,
            _ => ErrorCategory::Registry,
        }
    }

    /// Get human-readable description for this error code
    pub fn description(&self) -> &'static str {
        self.info().title
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UDF{:04}", self.code)
    }
}

/// Static documentation attached to an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    pub code: u16,
    pub title: &'static str,
    pub description: &'static str,
    pub help: &'static str,
}

impl ErrorInfo {
    pub const fn new(
        code: u16,
        title: &'static str,
        description: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            code,
            title,
            description,
            help,
        }
    }
}

/// Lookup table from codes to their [`ErrorInfo`]
pub struct ErrorRegistry;

impl ErrorRegistry {
    pub fn get_error_info(&self, error_code: &ErrorCode) -> &'static ErrorInfo {
        match error_code.code {
            1 => &UDF0001_INFO,
            2 => &UDF0002_INFO,
            3 => &UDF0003_INFO,
            4 => &UDF0004_INFO,

            51 => &UDF0051_INFO,
            52 => &UDF0052_INFO,
            53 => &UDF0053_INFO,
            54 => &UDF0054_INFO,

            101 => &UDF0101_INFO,

            _ => &UNKNOWN_ERROR_INFO,
        }
    }
}

/// Global error registry instance
pub static ERROR_REGISTRY: ErrorRegistry = ErrorRegistry;

// Argument Error Codes (UDF0001-UDF0050)
pub const UDF0001: ErrorCode = ErrorCode::new(1); // Argument value out of domain
pub const UDF0002: ErrorCode = ErrorCode::new(2); // Wrong number of arguments
pub const UDF0003: ErrorCode = ErrorCode::new(3); // Argument type mismatch
pub const UDF0004: ErrorCode = ErrorCode::new(4); // Integer argument out of range

// Data Error Codes (UDF0051-UDF0100)
pub const UDF0051: ErrorCode = ErrorCode::new(51); // Malformed JSON
pub const UDF0052: ErrorCode = ErrorCode::new(52); // JSON shape mismatch
pub const UDF0053: ErrorCode = ErrorCode::new(53); // Unsupported JSON value
pub const UDF0054: ErrorCode = ErrorCode::new(54); // Invalid UTF-8 in decoded bytes

// Registry Error Codes (UDF0101-UDF0150)
pub const UDF0101: ErrorCode = ErrorCode::new(101); // Unknown function

static UDF0001_INFO: ErrorInfo = ErrorInfo::new(
    1,
    "Invalid argument value",
    "An argument was supplied with a value outside the domain the function accepts.",
    "Check the documented range of the argument. For split_part the part number is 1-based and must be at least 1.",
);

static UDF0002_INFO: ErrorInfo = ErrorInfo::new(
    2,
    "Wrong number of arguments",
    "The function was invoked with a different number of arguments than its signature declares.",
    "Compare the call with the signature table; every parameter is positional and required, even when passed as NULL.",
);

static UDF0003_INFO: ErrorInfo = ErrorInfo::new(
    3,
    "Argument type mismatch",
    "An argument value does not have the SQL type the parameter expects.",
    "Cast the argument to the declared parameter type (text or int) before calling the function.",
);

static UDF0004_INFO: ErrorInfo = ErrorInfo::new(
    4,
    "Integer argument out of range",
    "A bigint value was passed to an int parameter and does not fit in 32 bits.",
    "Pass a value between -2147483648 and 2147483647.",
);

static UDF0051_INFO: ErrorInfo = ErrorInfo::new(
    51,
    "Malformed JSON",
    "The text argument could not be decoded as JSON.",
    "Validate the document; the error message contains the decoder position and the offending content.",
);

static UDF0052_INFO: ErrorInfo = ErrorInfo::new(
    52,
    "Unexpected JSON shape",
    "The JSON document decoded successfully but its top-level value is not the kind the function requires.",
    "Property lookups and json_parse need a JSON object; index lookups need a JSON array.",
);

static UDF0053_INFO: ErrorInfo = ErrorInfo::new(
    53,
    "Unsupported JSON value",
    "The selected JSON value has no representation among the SQL scalar types.",
    "Integers larger than a signed 64-bit value cannot be returned; select the enclosing object or array instead to get it as text.",
);

static UDF0054_INFO: ErrorInfo = ErrorInfo::new(
    54,
    "Invalid UTF-8",
    "Decoded bytes are not valid UTF-8 text and strict text decoding is enabled.",
    "Switch the text decoding policy to lossy or make sure the encoded payload is UTF-8 text.",
);

static UDF0101_INFO: ErrorInfo = ErrorInfo::new(
    101,
    "Unknown function",
    "No scalar function is registered under the requested name.",
    "Check the function name and that the registry was built with the function group containing it.",
);

static UNKNOWN_ERROR_INFO: ErrorInfo = ErrorInfo::new(
    0,
    "Unknown error",
    "An error occurred that has no registered description.",
    "Report the error code together with the failing call.",
);
