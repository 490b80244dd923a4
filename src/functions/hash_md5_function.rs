//! hash_md5 function implementation
//!
//! Syntax: hash_md5(string)

use std::sync::Arc;

use md5::{Digest, Md5};

use crate::config::FunctionConfig;
use crate::core::{Result, ScalarType, ScalarValue};
use crate::registry::{
    FunctionCategory, FunctionMetadata, FunctionParameter, FunctionSignature, NullPropagation,
    ScalarFunction, fixed_args,
};

/// Lowercase hex MD5 digest of the UTF-8 bytes of `string`
pub fn hash_md5(string: Option<&str>) -> Option<String> {
    string.map(|s| hex::encode(Md5::digest(s.as_bytes())))
}

/// hash_md5 function evaluator
pub struct HashMd5FunctionEvaluator {
    metadata: FunctionMetadata,
}

impl HashMd5FunctionEvaluator {
    /// Create a new hash_md5 function evaluator
    pub fn create() -> Arc<dyn ScalarFunction> {
        Arc::new(Self {
            metadata: FunctionMetadata {
                name: "hash_md5".to_string(),
                description: "Returns the lowercase hex MD5 digest of a string".to_string(),
                signature: FunctionSignature {
                    parameters: vec![FunctionParameter::new(
                        "string",
                        ScalarType::Text,
                        "Text to hash",
                    )],
                    return_types: vec![ScalarType::Text],
                    polymorphic: false,
                },
                null_propagation: NullPropagation::Propagate,
                deterministic: true,
                category: FunctionCategory::Hashing,
            },
        })
    }
}

impl ScalarFunction for HashMd5FunctionEvaluator {
    fn evaluate(&self, args: &[ScalarValue], _config: &FunctionConfig) -> Result<ScalarValue> {
        let [string] = fixed_args::<1>(&self.metadata, args)?;
        Ok(hash_md5(string.text_arg(0)?).into())
    }

    fn metadata(&self) -> &FunctionMetadata {
        &self.metadata
    }
}
