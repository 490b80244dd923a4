//! reverse_string function implementation
//!
//! Syntax: reverse_string(string)

use std::sync::Arc;

use crate::config::FunctionConfig;
use crate::core::{Result, ScalarType, ScalarValue};
use crate::registry::{
    FunctionCategory, FunctionMetadata, FunctionParameter, FunctionSignature, NullPropagation,
    ScalarFunction, fixed_args,
};

/// Reverse `string` by Unicode scalar value, never splitting a multi-byte
/// character.
pub fn reverse_string(string: Option<&str>) -> Option<String> {
    string.map(|s| s.chars().rev().collect())
}

/// reverse_string function evaluator
pub struct ReverseStringFunctionEvaluator {
    metadata: FunctionMetadata,
}

impl ReverseStringFunctionEvaluator {
    /// Create a new reverse_string function evaluator
    pub fn create() -> Arc<dyn ScalarFunction> {
        Arc::new(Self {
            metadata: FunctionMetadata {
                name: "reverse_string".to_string(),
                description: "Returns the characters of a string in reverse order".to_string(),
                signature: FunctionSignature {
                    parameters: vec![FunctionParameter::new(
                        "string",
                        ScalarType::Text,
                        "Text to reverse",
                    )],
                    return_types: vec![ScalarType::Text],
                    polymorphic: false,
                },
                null_propagation: NullPropagation::Propagate,
                deterministic: true,
                category: FunctionCategory::StringManipulation,
            },
        })
    }
}

impl ScalarFunction for ReverseStringFunctionEvaluator {
    fn evaluate(&self, args: &[ScalarValue], _config: &FunctionConfig) -> Result<ScalarValue> {
        let [string] = fixed_args::<1>(&self.metadata, args)?;
        Ok(reverse_string(string.text_arg(0)?).into())
    }

    fn metadata(&self) -> &FunctionMetadata {
        &self.metadata
    }
}
