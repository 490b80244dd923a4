//! Process-wide JSON codec
//!
//! One immutable codec instance is created on first use and shared by every
//! JSON function. Decoded documents live for a single call and are never
//! cached.

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::error::Category;
use serde_json::{Map, Value as JsonValue};

use crate::core::{Result, UDF0051, UDF0052, UDF0053, UdfError};

static JSON_CODEC: Lazy<JsonCodec> = Lazy::new(JsonCodec::new);

/// Shared codec instance
pub fn json_codec() -> &'static JsonCodec {
    &JSON_CODEC
}

/// Stateless JSON decoder/encoder.
///
/// Object keys are re-encoded in sorted order with no insignificant
/// whitespace, so [`JsonCodec::encode`] output is canonical for a given
/// document. Numbers keep their literal digits, so values outside the
/// native integer and float ranges still decode and re-encode exactly.
#[derive(Debug, Default)]
pub struct JsonCodec {
    _private: (),
}

impl JsonCodec {
    fn new() -> Self {
        log::debug!("initializing shared JSON codec");
        Self { _private: () }
    }

    /// Decode any JSON document
    pub fn decode(&self, text: &str) -> Result<JsonValue> {
        serde_json::from_str(text).map_err(|e| decode_error(e, text))
    }

    /// Decode a document whose top level must be an object
    pub fn decode_object(&self, text: &str) -> Result<Map<String, JsonValue>> {
        serde_json::from_str(text).map_err(|e| decode_error(e, text))
    }

    /// Decode a document whose top level must be an array
    pub fn decode_array(&self, text: &str) -> Result<Vec<JsonValue>> {
        serde_json::from_str(text).map_err(|e| decode_error(e, text))
    }

    /// Compact, canonical encoding
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        serde_json::to_string(value).map_err(|e| {
            UdfError::DataError {
                error_code: UDF0053,
                message: format!("Unable to encode JSON: {}", e),
                content: None,
                function_name: None,
            }
        })
    }
}

/// Syntax and EOF failures are malformed input; data failures mean the
/// document parsed but had the wrong top-level shape.
fn decode_error(err: serde_json::Error, content: &str) -> UdfError {
    let code = match err.classify() {
        Category::Data => UDF0052,
        Category::Syntax | Category::Eof | Category::Io => UDF0051,
    };
    UdfError::data_error(code, err.to_string(), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shared_instance() {
        assert!(std::ptr::eq(json_codec(), json_codec()));
    }

    #[test]
    fn test_decode_error_kinds() {
        let err = json_codec().decode("not-json").unwrap_err();
        assert_eq!(err.error_code(), &UDF0051);
        assert!(err.is_data_error());

        let err = json_codec().decode_object("[1,2]").unwrap_err();
        assert_eq!(err.error_code(), &UDF0052);

        let err = json_codec().decode_array(r#"{"a":1}"#).unwrap_err();
        assert_eq!(err.error_code(), &UDF0052);

        let err = json_codec().decode_object("{").unwrap_err();
        assert_eq!(err.error_code(), &UDF0051);
    }

    #[test]
    fn test_out_of_range_numbers_decode() {
        let map = json_codec()
            .decode_object(r#"{"f":1e400,"i":18446744073709551616}"#)
            .unwrap();
        assert_eq!(map["f"].to_string(), "1e400");
        assert_eq!(map["i"].to_string(), "18446744073709551616");
    }

    #[test]
    fn test_encode_is_canonical() {
        let map = json_codec().decode_object(r#"{ "b" : 1, "a" : [true, null] }"#).unwrap();
        assert_eq!(json_codec().encode(&map).unwrap(), r#"{"a":[true,null],"b":1}"#);
        assert_eq!(json_codec().encode(&json!("x")).unwrap(), r#""x""#);
    }
}
