//! json_parse function implementation
//!
//! Validates that a string holds a JSON object and returns its canonical
//! re-encoding.
//! Syntax: json_parse(json)

use std::sync::Arc;

use crate::codec::json_codec;
use crate::config::FunctionConfig;
use crate::core::{Result, ScalarType, ScalarValue, UdfError};
use crate::registry::{
    FunctionCategory, FunctionMetadata, FunctionParameter, FunctionSignature, NullPropagation,
    ScalarFunction, fixed_args,
};

/// Parse `json` as a JSON object and re-encode it compactly with sorted keys.
///
/// The output is equivalent to the input but not necessarily byte-identical.
pub fn json_parse(json: Option<&str>) -> Result<Option<String>> {
    let Some(json) = json else {
        return Ok(None);
    };

    let object = json_codec().decode_object(json).map_err(|e| {
        UdfError::data_error(
            e.error_code().clone(),
            format!(
                "Unable to parse json as a Map. Content: '{}'. Error: '{}'",
                json,
                e.message()
            ),
            json,
        )
    })?;

    json_codec().encode(&object).map(Some)
}

/// json_parse function evaluator
pub struct JsonParseFunctionEvaluator {
    metadata: FunctionMetadata,
}

impl JsonParseFunctionEvaluator {
    /// Create a new json_parse function evaluator
    pub fn create() -> Arc<dyn ScalarFunction> {
        Arc::new(Self {
            metadata: FunctionMetadata {
                name: "json_parse".to_string(),
                description: "Validates a JSON object and returns its canonical text".to_string(),
                signature: FunctionSignature {
                    parameters: vec![FunctionParameter::new(
                        "json",
                        ScalarType::Text,
                        "JSON object text",
                    )],
                    return_types: vec![ScalarType::Text],
                    polymorphic: false,
                },
                null_propagation: NullPropagation::Propagate,
                deterministic: true,
                category: FunctionCategory::Json,
            },
        })
    }
}

impl ScalarFunction for JsonParseFunctionEvaluator {
    fn evaluate(&self, args: &[ScalarValue], _config: &FunctionConfig) -> Result<ScalarValue> {
        let [json] = fixed_args::<1>(&self.metadata, args)?;
        json_parse(json.text_arg(0)?).map(ScalarValue::from)
    }

    fn metadata(&self) -> &FunctionMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{UDF0051, UDF0052};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_object() {
        let out = json_parse(Some(r#"{"x":true}"#)).unwrap().unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(reparsed, serde_json::json!({"x": true}));
    }

    #[test]
    fn test_canonicalizes() {
        let out = json_parse(Some("{ \"b\" : [1, 2],\n \"a\" : {} }")).unwrap();
        assert_eq!(out.as_deref(), Some(r#"{"a":{},"b":[1,2]}"#));
    }

    #[test]
    fn test_large_numbers_keep_their_digits() {
        let out = json_parse(Some(
            r#"{"id": 123456789012345678901234567890, "max": 18446744073709551616, "big": 1e400}"#,
        ))
        .unwrap();
        assert_eq!(
            out.as_deref(),
            Some(r#"{"big":1e400,"id":123456789012345678901234567890,"max":18446744073709551616}"#)
        );
    }

    #[test]
    fn test_null() {
        assert_eq!(json_parse(None).unwrap(), None);
    }

    #[test]
    fn test_top_level_array_fails() {
        let err = json_parse(Some("[1,2]")).unwrap_err();
        assert!(err.is_data_error());
        assert_eq!(err.error_code(), &UDF0052);
        assert!(
            err.message()
                .starts_with("Unable to parse json as a Map. Content: '[1,2]'. Error: '")
        );
    }

    #[test]
    fn test_malformed_fails_with_content() {
        let err = json_parse(Some("{\"a\":")).unwrap_err();
        assert_eq!(err.error_code(), &UDF0051);
        match err {
            UdfError::DataError { content, .. } => assert_eq!(content.as_deref(), Some("{\"a\":")),
            other => panic!("expected data error, got {:?}", other),
        }
    }
}
