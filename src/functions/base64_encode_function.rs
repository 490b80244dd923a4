//! base64_encode function implementation
//!
//! Syntax: base64_encode(string)

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::config::FunctionConfig;
use crate::core::{Result, ScalarType, ScalarValue};
use crate::registry::{
    FunctionCategory, FunctionMetadata, FunctionParameter, FunctionSignature, NullPropagation,
    ScalarFunction, fixed_args,
};

/// Encode the UTF-8 bytes of `string` with the URL-safe alphabet
/// (`-` and `_`) and no padding.
pub fn base64_encode(string: Option<&str>) -> Option<String> {
    string.map(|s| URL_SAFE_NO_PAD.encode(s.as_bytes()))
}

/// base64_encode function evaluator
pub struct Base64EncodeFunctionEvaluator {
    metadata: FunctionMetadata,
}

impl Base64EncodeFunctionEvaluator {
    /// Create a new base64_encode function evaluator
    pub fn create() -> Arc<dyn ScalarFunction> {
        Arc::new(Self {
            metadata: FunctionMetadata {
                name: "base64_encode".to_string(),
                description: "Encodes a string as unpadded URL-safe base64".to_string(),
                signature: FunctionSignature {
                    parameters: vec![FunctionParameter::new(
                        "string",
                        ScalarType::Text,
                        "Text to encode",
                    )],
                    return_types: vec![ScalarType::Text],
                    polymorphic: false,
                },
                null_propagation: NullPropagation::Propagate,
                deterministic: true,
                category: FunctionCategory::Encoding,
            },
        })
    }
}

impl ScalarFunction for Base64EncodeFunctionEvaluator {
    fn evaluate(&self, args: &[ScalarValue], _config: &FunctionConfig) -> Result<ScalarValue> {
        let [string] = fixed_args::<1>(&self.metadata, args)?;
        Ok(base64_encode(string.text_arg(0)?).into())
    }

    fn metadata(&self) -> &FunctionMetadata {
        &self.metadata
    }
}
