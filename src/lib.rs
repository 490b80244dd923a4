//! Scalar user-defined functions for embedded relational engines
//!
//! JSON navigation and validation, base64 encoding, string reversal, MD5/SHA1
//! digests and a 1-based `split_part`. Every function is a pure, stateless
//! mapping from nullable scalars to a nullable scalar: null in gives null
//! out, and failures are reported as [`UdfError`], never as null.
//!
//! ```rust
//! use relstore_udf::{ScalarValue, create_standard_function_registry};
//!
//! let registry = create_standard_function_registry();
//! let value = registry
//!     .invoke(
//!         "json_navigate",
//!         &[ScalarValue::text(r#"{"a":1}"#), ScalarValue::text("a"), ScalarValue::Null],
//!     )
//!     .unwrap();
//! assert_eq!(value, ScalarValue::Int(1));
//! ```

pub mod bindings;
pub mod codec;
pub mod config;
pub mod core;
pub mod functions;
pub mod registry;

// Re-export main types
pub use crate::config::{FunctionConfig, SplitMode, TextDecoding};
pub use crate::core::{ErrorCode, Result, ScalarType, ScalarValue, UdfError};
pub use crate::registry::{
    FunctionRegistry, FunctionRegistryBuilder, ScalarFunction, create_function_registry_with_config,
    create_standard_function_registry,
};
