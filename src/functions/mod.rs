//! Scalar function implementations
//!
//! Each module exposes a typed entry point (e.g. [`split_part`]) and the
//! evaluator registered with the [`FunctionRegistry`](crate::registry::FunctionRegistry).

// JSON functions
pub mod json_navigate_function;
pub mod json_parse_function;

// Encoding functions
pub mod base64_decode_function;
pub mod base64_encode_function;

// String manipulation functions
pub mod reverse_string_function;
pub mod split_part_function;

// Hash functions
pub mod hash_md5_function;
pub mod hash_sha1_function;

// Re-export all functions for convenience
pub use base64_decode_function::*;
pub use base64_encode_function::*;
pub use hash_md5_function::*;
pub use hash_sha1_function::*;
pub use json_navigate_function::*;
pub use json_parse_function::*;
pub use reverse_string_function::*;
pub use split_part_function::*;
