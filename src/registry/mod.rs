//! Function registry
//!
//! Trait-based registry that hosts bind by name to dispatch scalar function
//! calls.

pub mod function_registry;

pub use function_registry::*;
