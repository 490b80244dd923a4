//! json_navigate function implementation
//!
//! Selects one member of a JSON object (by key) or one element of a JSON array
//! (by 0-based index) and returns it as a scalar.
//! Syntax: json_navigate(json, property, arrayIndex)

use std::sync::Arc;

use serde_json::{Number, Value as JsonValue};

use crate::codec::json_codec;
use crate::config::FunctionConfig;
use crate::core::{Result, ScalarType, ScalarValue, UDF0053, UdfError};
use crate::registry::{
    FunctionCategory, FunctionMetadata, FunctionParameter, FunctionSignature, NullPropagation,
    ScalarFunction, fixed_args,
};

/// Navigate one level into a JSON document.
///
/// When `array_index` is `None` the document must be an object and
/// `property` is looked up; otherwise the document must be an array and the
/// element at `array_index` is selected. Missing keys, out-of-range and
/// negative indices yield [`ScalarValue::Null`].
pub fn json_navigate(
    json: Option<&str>,
    property: Option<&str>,
    array_index: Option<i32>,
) -> Result<ScalarValue> {
    let Some(json) = json else {
        return Ok(ScalarValue::Null);
    };

    let selected = match array_index {
        None => {
            let mut object = json_codec().decode_object(json)?;
            property.and_then(|key| object.remove(key))
        }
        Some(index) => {
            let mut items = json_codec().decode_array(json)?;
            usize::try_from(index)
                .ok()
                .filter(|i| *i < items.len())
                .map(|i| items.swap_remove(i))
        }
    };

    selected.map_or(Ok(ScalarValue::Null), json_to_scalar)
}

/// Map a decoded JSON value onto the scalar union.
///
/// Containers are re-encoded as JSON text with their numbers digit-exact.
/// Numbers are classified by their source text: integral literals become
/// `Int` when they fit in 32 bits and `BigInt` when they fit in 64; literals
/// with a fraction or exponent become `Double`. Integers beyond the signed
/// 64-bit range and floats beyond the `f64` range have no scalar
/// representation.
pub fn json_to_scalar(value: JsonValue) -> Result<ScalarValue> {
    match value {
        JsonValue::Null => Ok(ScalarValue::Null),
        JsonValue::Bool(b) => Ok(ScalarValue::Boolean(b)),
        JsonValue::String(s) => Ok(ScalarValue::Text(s)),
        JsonValue::Number(n) => number_to_scalar(&n),
        container @ (JsonValue::Array(_) | JsonValue::Object(_)) => {
            json_codec().encode(&container).map(ScalarValue::Text)
        }
    }
}

fn number_to_scalar(number: &Number) -> Result<ScalarValue> {
    let literal = number.to_string();

    if literal.contains(['.', 'e', 'E']) {
        return literal
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(ScalarValue::Double)
            .ok_or_else(|| unsupported(number));
    }

    match literal.parse::<i64>() {
        Ok(i) => Ok(i32::try_from(i).map_or(ScalarValue::BigInt(i), ScalarValue::Int)),
        Err(_) => Err(unsupported(number)),
    }
}

fn unsupported(number: &Number) -> UdfError {
    UdfError::data_error(
        UDF0053,
        format!("Unsupported JSON value {} in scalar function", number),
        number.to_string(),
    )
}

/// json_navigate function evaluator
pub struct JsonNavigateFunctionEvaluator {
    metadata: FunctionMetadata,
}

impl JsonNavigateFunctionEvaluator {
    /// Create a new json_navigate function evaluator
    pub fn create() -> Arc<dyn ScalarFunction> {
        Arc::new(Self {
            metadata: FunctionMetadata {
                name: "json_navigate".to_string(),
                description: "Selects an object member or array element of a JSON document"
                    .to_string(),
                signature: FunctionSignature {
                    parameters: vec![
                        FunctionParameter::new("json", ScalarType::Text, "JSON document"),
                        FunctionParameter::new(
                            "property",
                            ScalarType::Text,
                            "Object key, used when arrayIndex is null",
                        ),
                        FunctionParameter::new(
                            "arrayIndex",
                            ScalarType::Int,
                            "0-based array index",
                        ),
                    ],
                    return_types: vec![
                        ScalarType::Text,
                        ScalarType::Boolean,
                        ScalarType::Int,
                        ScalarType::BigInt,
                        ScalarType::Double,
                        ScalarType::Real,
                    ],
                    polymorphic: true,
                },
                null_propagation: NullPropagation::Propagate,
                deterministic: true,
                category: FunctionCategory::Json,
            },
        })
    }
}

impl ScalarFunction for JsonNavigateFunctionEvaluator {
    fn evaluate(&self, args: &[ScalarValue], _config: &FunctionConfig) -> Result<ScalarValue> {
        let [json, property, array_index] = fixed_args::<3>(&self.metadata, args)?;

        json_navigate(
            json.text_arg(0)?,
            property.text_arg(1)?,
            array_index.int_arg(2)?,
        )
    }

    fn metadata(&self) -> &FunctionMetadata {
        &self.metadata
    }
}
