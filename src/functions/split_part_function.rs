//! split_part function implementation
//!
//! Splits a string and returns the segment at a 1-based position.
//! Syntax: split_part(string, token, part)
//!
//! With the default [`SplitMode::AnyChar`] every character of `token` is a
//! delimiter, so `split_part('a;b,c', ',;', 2)` is `'b'`. This is not the
//! conventional SQL `split_part`, which splits on the whole token; that
//! behavior is available through [`SplitMode::Substring`]. In both modes
//! runs of delimiters collapse and no empty segment is ever returned.

use std::sync::Arc;

use crate::config::{FunctionConfig, SplitMode};
use crate::core::{Result, ScalarType, ScalarValue, UDF0001, UdfError};
use crate::registry::{
    FunctionCategory, FunctionMetadata, FunctionParameter, FunctionSignature, NullPropagation,
    ScalarFunction, fixed_args,
};

/// Return segment `part` (1-based) of `string`.
///
/// `part` is validated before `string` is inspected, so an invalid part
/// fails even for a null string. A null `token` splits on whitespace.
pub fn split_part(
    string: Option<&str>,
    token: Option<&str>,
    part: Option<i32>,
    mode: SplitMode,
) -> Result<Option<String>> {
    let index = match part {
        Some(part) if part >= 1 => (part - 1) as usize,
        Some(_) => {
            return Err(UdfError::argument_error(
                UDF0001,
                "Split part must be greater than zero",
            ));
        }
        None => {
            return Err(UdfError::argument_error(UDF0001, "Split part must not be null"));
        }
    };

    let Some(string) = string else {
        return Ok(None);
    };

    let segment = match (token, mode) {
        (None, _) => non_empty(string.split(char::is_whitespace)).nth(index),
        (Some(""), _) => non_empty(std::iter::once(string)).nth(index),
        (Some(token), SplitMode::AnyChar) => {
            non_empty(string.split(|c: char| token.contains(c))).nth(index)
        }
        (Some(token), SplitMode::Substring) => non_empty(string.split(token)).nth(index),
    };

    Ok(segment.map(str::to_string))
}

fn non_empty<'a>(segments: impl Iterator<Item = &'a str>) -> impl Iterator<Item = &'a str> {
    segments.filter(|s| !s.is_empty())
}

/// split_part function evaluator
pub struct SplitPartFunctionEvaluator {
    metadata: FunctionMetadata,
}

impl SplitPartFunctionEvaluator {
    /// Create a new split_part function evaluator
    pub fn create() -> Arc<dyn ScalarFunction> {
        Arc::new(Self {
            metadata: FunctionMetadata {
                name: "split_part".to_string(),
                description: "Splits a string on delimiter characters and returns the nth part"
                    .to_string(),
                signature: FunctionSignature {
                    parameters: vec![
                        FunctionParameter::new("string", ScalarType::Text, "Text to split"),
                        FunctionParameter::new(
                            "token",
                            ScalarType::Text,
                            "Delimiter characters",
                        ),
                        FunctionParameter::new("part", ScalarType::Int, "1-based segment number"),
                    ],
                    return_types: vec![ScalarType::Text],
                    polymorphic: false,
                },
                null_propagation: NullPropagation::Custom,
                deterministic: true,
                category: FunctionCategory::StringManipulation,
            },
        })
    }
}

impl ScalarFunction for SplitPartFunctionEvaluator {
    fn evaluate(&self, args: &[ScalarValue], config: &FunctionConfig) -> Result<ScalarValue> {
        let [string, token, part] = fixed_args::<3>(&self.metadata, args)?;

        split_part(
            string.text_arg(0)?,
            token.text_arg(1)?,
            part.int_arg(2)?,
            config.split_mode,
        )
        .map(ScalarValue::from)
    }

    fn metadata(&self) -> &FunctionMetadata {
        &self.metadata
    }
}
