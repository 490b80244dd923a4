//! Function registry for scalar UDF implementations
//!
//! This module implements the function registry with metadata, signatures, and parameter information.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::FunctionConfig;
use crate::core::{Result, ScalarType, ScalarValue, UDF0002, UdfError};

/// Metadata for a function describing its behavior and signature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionMetadata {
    /// The function name (e.g., "json_navigate", "split_part")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Function signature information
    pub signature: FunctionSignature,
    /// Whether a null subject short-circuits to a null result
    pub null_propagation: NullPropagation,
    /// Whether this function is deterministic
    pub deterministic: bool,
    /// Function category for grouping
    pub category: FunctionCategory,
}

/// Function signature with parameter information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// Ordered positional parameters
    pub parameters: Vec<FunctionParameter>,
    /// Possible result types, excluding null
    pub return_types: Vec<ScalarType>,
    /// Whether the result type depends on the input data
    pub polymorphic: bool,
}

impl FunctionSignature {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// Function parameter specification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionParameter {
    /// Parameter name
    pub name: String,
    /// Declared SQL type
    pub parameter_type: ScalarType,
    /// Parameter description
    pub description: String,
}

impl FunctionParameter {
    pub fn new(name: &str, parameter_type: ScalarType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            parameter_type,
            description: description.to_string(),
        }
    }
}

/// Null propagation behavior for functions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullPropagation {
    /// A null first argument yields null without evaluating the function
    Propagate,
    /// The function inspects its arguments before deciding (e.g. validation
    /// that must run even on null input)
    Custom,
}

/// Function categories for organization
#[derive(Debug, Clone, Serialize, Deserialize, Eq, Hash, PartialEq)]
pub enum FunctionCategory {
    /// JSON navigation and validation (json_navigate, json_parse)
    Json,
    /// Binary-to-text encodings (base64_encode, base64_decode)
    Encoding,
    /// String manipulation (reverse_string, split_part)
    StringManipulation,
    /// Message digests (hash_md5, hash_sha1)
    Hashing,
}

/// Trait for evaluating scalar functions
pub trait ScalarFunction: Send + Sync {
    /// Evaluate the function over positional arguments
    fn evaluate(&self, args: &[ScalarValue], config: &FunctionConfig) -> Result<ScalarValue>;

    /// Get metadata for this function
    fn metadata(&self) -> &FunctionMetadata;

    /// Validate argument count and types against the function signature
    fn validate_arguments(&self, args: &[ScalarValue]) -> Result<()> {
        let metadata = self.metadata();
        check_arity(metadata, args.len())?;

        for (position, (arg, param)) in args
            .iter()
            .zip(&metadata.signature.parameters)
            .enumerate()
        {
            match param.parameter_type {
                ScalarType::Int | ScalarType::BigInt => {
                    arg.int_arg(position)?;
                }
                ScalarType::Text => {
                    arg.text_arg(position)?;
                }
                _ => {}
            }
        }

        Ok(())
    }
}

fn check_arity(metadata: &FunctionMetadata, count: usize) -> Result<()> {
    let expected = metadata.signature.arity();
    if count != expected {
        return Err(UdfError::argument_error(
            UDF0002,
            format!(
                "Function '{}' requires {} arguments, got {}",
                metadata.name, expected, count
            ),
        ));
    }
    Ok(())
}

/// Borrow `args` as a fixed-size array after checking the arity
pub fn fixed_args<'a, const N: usize>(
    metadata: &FunctionMetadata,
    args: &'a [ScalarValue],
) -> Result<&'a [ScalarValue; N]> {
    check_arity(metadata, args.len())?;
    <&[ScalarValue; N]>::try_from(args).map_err(|_| {
        UdfError::argument_error(
            UDF0002,
            format!("Function '{}' requires {} arguments", metadata.name, N),
        )
    })
}

/// Registry for scalar function evaluators
pub struct FunctionRegistry {
    /// Function evaluators by name
    functions: HashMap<String, Arc<dyn ScalarFunction>>,
    /// Metadata cache for introspection
    metadata_cache: HashMap<String, FunctionMetadata>,
    /// Functions grouped by category
    categories: HashMap<FunctionCategory, Vec<String>>,
    config: FunctionConfig,
}

impl FunctionRegistry {
    /// Create a new empty function registry
    pub fn new() -> Self {
        Self::with_config(FunctionConfig::default())
    }

    pub fn with_config(config: FunctionConfig) -> Self {
        Self {
            functions: HashMap::new(),
            metadata_cache: HashMap::new(),
            categories: HashMap::new(),
            config,
        }
    }

    /// Register a function evaluator
    pub fn register_function(&mut self, evaluator: Arc<dyn ScalarFunction>) {
        let metadata = evaluator.metadata().clone();
        let name = metadata.name.clone();
        let category = metadata.category.clone();

        log::debug!("registering scalar function '{}'", name);

        if self.functions.insert(name.clone(), evaluator).is_some() {
            log::warn!("scalar function '{}' replaced an existing registration", name);
        }

        if let Some(previous) = self.metadata_cache.insert(name.clone(), metadata) {
            if let Some(names) = self.categories.get_mut(&previous.category) {
                names.retain(|n| n != &name);
                if names.is_empty() {
                    self.categories.remove(&previous.category);
                }
            }
        }

        self.categories.entry(category).or_default().push(name);
    }

    /// Get function evaluator by name
    pub fn get_function(&self, name: &str) -> Option<&Arc<dyn ScalarFunction>> {
        self.functions.get(name)
    }

    /// Get function metadata by name
    pub fn get_metadata(&self, name: &str) -> Option<&FunctionMetadata> {
        self.metadata_cache.get(name)
    }

    /// Get all registered function names, sorted
    pub fn list_functions(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.functions.keys().collect();
        names.sort();
        names
    }

    /// Get functions by category
    pub fn get_functions_by_category(&self, category: &FunctionCategory) -> Vec<&String> {
        self.categories
            .get(category)
            .map(|names| names.iter().collect())
            .unwrap_or_default()
    }

    /// Get all function metadata for introspection
    pub fn all_metadata(&self) -> &HashMap<String, FunctionMetadata> {
        &self.metadata_cache
    }

    /// Check if a function exists
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn config(&self) -> &FunctionConfig {
        &self.config
    }

    /// Invoke a function by name.
    ///
    /// Arguments are validated against the signature first; a null subject
    /// then short-circuits for functions with [`NullPropagation::Propagate`].
    pub fn invoke(&self, name: &str, args: &[ScalarValue]) -> Result<ScalarValue> {
        let evaluator = self
            .get_function(name)
            .ok_or_else(|| UdfError::unknown_function(name))?;

        dispatch(evaluator.as_ref(), args, &self.config)
    }
}

/// Validate `args`, apply null propagation, then evaluate. Errors carry the
/// function name.
pub fn dispatch(
    evaluator: &dyn ScalarFunction,
    args: &[ScalarValue],
    config: &FunctionConfig,
) -> Result<ScalarValue> {
    let metadata = evaluator.metadata();
    log::trace!("invoking {}({} args)", metadata.name, args.len());

    evaluator
        .validate_arguments(args)
        .map_err(|e| e.with_function(&metadata.name))?;

    if metadata.null_propagation == NullPropagation::Propagate
        && args.first().is_some_and(ScalarValue::is_null)
    {
        return Ok(ScalarValue::Null);
    }

    evaluator
        .evaluate(args, config)
        .map_err(|e| e.with_function(&metadata.name))
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating function registries with default functions
pub struct FunctionRegistryBuilder {
    registry: FunctionRegistry,
}

impl FunctionRegistryBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            registry: FunctionRegistry::new(),
        }
    }

    /// Replace the configuration passed to every evaluation
    pub fn with_config(mut self, config: FunctionConfig) -> Self {
        self.registry.config = config;
        self
    }

    /// Add JSON functions (json_navigate, json_parse)
    pub fn with_json_functions(mut self) -> Self {
        use crate::functions::*;

        self.registry
            .register_function(JsonNavigateFunctionEvaluator::create());
        self.registry
            .register_function(JsonParseFunctionEvaluator::create());

        self
    }

    /// Add base64 functions
    pub fn with_encoding_functions(mut self) -> Self {
        use crate::functions::*;

        self.registry
            .register_function(Base64EncodeFunctionEvaluator::create());
        self.registry
            .register_function(Base64DecodeFunctionEvaluator::create());

        self
    }

    /// Add string manipulation functions (reverse_string, split_part)
    pub fn with_string_functions(mut self) -> Self {
        use crate::functions::*;

        self.registry
            .register_function(ReverseStringFunctionEvaluator::create());
        self.registry
            .register_function(SplitPartFunctionEvaluator::create());

        self
    }

    /// Add digest functions (hash_md5, hash_sha1)
    pub fn with_hash_functions(mut self) -> Self {
        use crate::functions::*;

        self.registry
            .register_function(HashMd5FunctionEvaluator::create());
        self.registry
            .register_function(HashSha1FunctionEvaluator::create());

        self
    }

    /// Register a custom function
    pub fn register_function(mut self, evaluator: Arc<dyn ScalarFunction>) -> Self {
        self.registry.register_function(evaluator);
        self
    }

    /// Build the function registry
    pub fn build(self) -> FunctionRegistry {
        log::debug!(
            "built function registry with {} functions",
            self.registry.functions.len()
        );
        self.registry
    }
}

impl Default for FunctionRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a registry holding every scalar function
pub fn create_standard_function_registry() -> FunctionRegistry {
    create_function_registry_with_config(FunctionConfig::default())
}

/// Create a registry holding every scalar function, evaluated with `config`
pub fn create_function_registry_with_config(config: FunctionConfig) -> FunctionRegistry {
    FunctionRegistryBuilder::new()
        .with_config(config)
        .with_json_functions()
        .with_encoding_functions()
        .with_string_functions()
        .with_hash_functions()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{UDF0003, UDF0101};

    struct ConstantFunction {
        metadata: FunctionMetadata,
    }

    impl ConstantFunction {
        fn create(name: &str) -> Arc<dyn ScalarFunction> {
            Arc::new(Self {
                metadata: FunctionMetadata {
                    name: name.to_string(),
                    description: "returns 42".to_string(),
                    signature: FunctionSignature {
                        parameters: vec![FunctionParameter::new(
                            "input",
                            ScalarType::Text,
                            "ignored",
                        )],
                        return_types: vec![ScalarType::Int],
                        polymorphic: false,
                    },
                    null_propagation: NullPropagation::Propagate,
                    deterministic: true,
                    category: FunctionCategory::StringManipulation,
                },
            })
        }
    }

    impl ScalarFunction for ConstantFunction {
        fn evaluate(&self, _args: &[ScalarValue], _config: &FunctionConfig) -> Result<ScalarValue> {
            Ok(ScalarValue::Int(42))
        }

        fn metadata(&self) -> &FunctionMetadata {
            &self.metadata
        }
    }

    #[test]
    fn test_function_registry_creation() {
        let registry = FunctionRegistry::new();
        assert!(registry.functions.is_empty());
        assert!(registry.metadata_cache.is_empty());
        assert!(registry.categories.is_empty());
    }

    #[test]
    fn test_standard_registry_contents() {
        let registry = create_standard_function_registry();
        let names: Vec<&str> = registry.list_functions().iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "base64_decode",
                "base64_encode",
                "hash_md5",
                "hash_sha1",
                "json_navigate",
                "json_parse",
                "reverse_string",
                "split_part",
            ]
        );
        assert_eq!(registry.get_functions_by_category(&FunctionCategory::Json).len(), 2);
        assert_eq!(registry.get_functions_by_category(&FunctionCategory::Hashing).len(), 2);
    }

    #[test]
    fn test_custom_function_registration() {
        let registry = FunctionRegistryBuilder::new()
            .register_function(ConstantFunction::create("answer"))
            .build();

        assert!(registry.has_function("answer"));
        assert_eq!(
            registry.invoke("answer", &[ScalarValue::text("x")]).unwrap(),
            ScalarValue::Int(42)
        );
        assert_eq!(
            registry.invoke("answer", &[ScalarValue::Null]).unwrap(),
            ScalarValue::Null
        );
    }

    #[test]
    fn test_reregistration_keeps_single_category_entry() {
        let mut registry = FunctionRegistry::new();
        registry.register_function(ConstantFunction::create("answer"));
        registry.register_function(ConstantFunction::create("answer"));
        assert_eq!(
            registry
                .get_functions_by_category(&FunctionCategory::StringManipulation)
                .len(),
            1
        );
    }

    #[test]
    fn test_reregistration_moves_category() {
        let mut registry = FunctionRegistry::new();
        registry.register_function(ConstantFunction::create("answer"));

        let mut metadata = registry.get_metadata("answer").unwrap().clone();
        metadata.category = FunctionCategory::Hashing;
        registry.register_function(Arc::new(ConstantFunction { metadata }));

        assert!(
            registry
                .get_functions_by_category(&FunctionCategory::StringManipulation)
                .is_empty()
        );
        assert_eq!(
            registry.get_functions_by_category(&FunctionCategory::Hashing),
            vec!["answer"]
        );
        assert_eq!(
            registry.get_metadata("answer").unwrap().category,
            FunctionCategory::Hashing
        );
    }

    #[test]
    fn test_invoke_errors() {
        let registry = FunctionRegistryBuilder::new()
            .register_function(ConstantFunction::create("answer"))
            .build();

        let err = registry.invoke("missing", &[]).unwrap_err();
        assert_eq!(err.error_code(), &UDF0101);

        let err = registry.invoke("answer", &[]).unwrap_err();
        assert_eq!(err.error_code(), &UDF0002);
        assert_eq!(err.function_name(), Some("answer"));

        let err = registry.invoke("answer", &[ScalarValue::Boolean(true)]).unwrap_err();
        assert_eq!(err.error_code(), &UDF0003);
    }

    #[test]
    fn test_fixed_args() {
        let function = ConstantFunction::create("answer");
        let args = [ScalarValue::text("a")];
        let [first] = fixed_args::<1>(function.metadata(), &args).unwrap();
        assert_eq!(first, &ScalarValue::text("a"));
        assert!(fixed_args::<1>(function.metadata(), &[]).is_err());
    }

    #[test]
    fn test_metadata_serializes() {
        let registry = create_standard_function_registry();
        let metadata = registry.get_metadata("split_part").unwrap();
        let json = serde_json::to_value(metadata).unwrap();
        assert_eq!(json["signature"]["parameters"][2]["parameter_type"], "int");
        assert_eq!(json["category"], "StringManipulation");
    }
}
