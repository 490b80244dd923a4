//! Core types: scalar values and errors

pub mod error;
pub mod error_code;
pub mod value;

pub use error::*;
pub use error_code::*;
pub use value::*;
