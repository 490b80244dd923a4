//! base64_decode function implementation
//!
//! Decoding is lenient: both the standard and URL-safe alphabets are
//! accepted, padding is optional, and characters outside the alphabet are
//! skipped. Input after the first `=` is ignored. The decoded bytes are read
//! as UTF-8; see [`TextDecoding`] for the handling of invalid sequences.
//! Syntax: base64_decode(string)

use std::borrow::Cow;
use std::sync::Arc;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::config::{FunctionConfig, TextDecoding};
use crate::core::{Result, ScalarType, ScalarValue, UDF0051, UDF0054, UdfError};
use crate::registry::{
    FunctionCategory, FunctionMetadata, FunctionParameter, FunctionSignature, NullPropagation,
    ScalarFunction, fixed_args,
};

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode base64 `string` into UTF-8 text
pub fn base64_decode(string: Option<&str>, decoding: TextDecoding) -> Result<Option<String>> {
    let Some(string) = string else {
        return Ok(None);
    };

    let bytes = LENIENT.decode(normalize(string)).map_err(|e| {
        UdfError::data_error(UDF0051, format!("Invalid base64 string: {}", e), string)
    })?;

    let text = match decoding {
        TextDecoding::Lossy => match String::from_utf8_lossy(&bytes) {
            Cow::Borrowed(s) => s.to_string(),
            Cow::Owned(s) => {
                log::warn!("base64_decode replaced invalid UTF-8 sequences in decoded bytes");
                s
            }
        },
        TextDecoding::Strict => String::from_utf8(bytes).map_err(|e| {
            UdfError::data_error(
                UDF0054,
                format!("Base64 decoded bytes are not valid UTF-8: {}", e),
                string,
            )
        })?,
    };

    Ok(Some(text))
}

/// Map the URL-safe alphabet onto the standard one and drop everything that
/// cannot contribute to the output. A trailing lone character carries fewer
/// than 8 bits and is discarded.
fn normalize(input: &str) -> String {
    let mut cleaned: String = input
        .chars()
        .take_while(|c| *c != '=')
        .filter_map(|c| match c {
            '-' => Some('+'),
            '_' => Some('/'),
            c if c.is_ascii_alphanumeric() || c == '+' || c == '/' => Some(c),
            _ => None,
        })
        .collect();

    if cleaned.len() % 4 == 1 {
        cleaned.pop();
    }
    cleaned
}

/// base64_decode function evaluator
pub struct Base64DecodeFunctionEvaluator {
    metadata: FunctionMetadata,
}

impl Base64DecodeFunctionEvaluator {
    /// Create a new base64_decode function evaluator
    pub fn create() -> Arc<dyn ScalarFunction> {
        Arc::new(Self {
            metadata: FunctionMetadata {
                name: "base64_decode".to_string(),
                description: "Decodes base64 (standard or URL-safe) into UTF-8 text".to_string(),
                signature: FunctionSignature {
                    parameters: vec![FunctionParameter::new(
                        "string",
                        ScalarType::Text,
                        "base64 text to decode",
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

impl ScalarFunction for Base64DecodeFunctionEvaluator {
    fn evaluate(&self, args: &[ScalarValue], config: &FunctionConfig) -> Result<ScalarValue> {
        let [string] = fixed_args::<1>(&self.metadata, args)?;
        base64_decode(string.text_arg(0)?, config.text_decoding).map(ScalarValue::from)
    }

    fn metadata(&self) -> &FunctionMetadata {
        &self.metadata
    }
}
