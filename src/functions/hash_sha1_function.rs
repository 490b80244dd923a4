//! hash_sha1 function implementation
//!
//! Syntax: hash_sha1(string)

use std::sync::Arc;

use sha1::{Digest, Sha1};

use crate::config::FunctionConfig;
use crate::core::{Result, ScalarType, ScalarValue};
use crate::registry::{
    FunctionCategory, FunctionMetadata, FunctionParameter, FunctionSignature, NullPropagation,
    ScalarFunction, fixed_args,
};

/// Lowercase hex SHA1 digest of the UTF-8 bytes of `string`
pub fn hash_sha1(string: Option<&str>) -> Option<String> {
    string.map(|s| hex::encode(Sha1::digest(s.as_bytes())))
}

/// hash_sha1 function evaluator
pub struct HashSha1FunctionEvaluator {
    metadata: FunctionMetadata,
}

impl HashSha1FunctionEvaluator {
    /// Create a new hash_sha1 function evaluator
    pub fn create() -> Arc<dyn ScalarFunction> {
        Arc::new(Self {
            metadata: FunctionMetadata {
                name: "hash_sha1".to_string(),
                description: "Returns the lowercase hex SHA1 digest of a string".to_string(),
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

impl ScalarFunction for HashSha1FunctionEvaluator {
    fn evaluate(&self, args: &[ScalarValue], _config: &FunctionConfig) -> Result<ScalarValue> {
        let [string] = fixed_args::<1>(&self.metadata, args)?;
        Ok(hash_sha1(string.text_arg(0)?).into())
    }

    fn metadata(&self) -> &FunctionMetadata {
        &self.metadata
    }
}
